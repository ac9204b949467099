use crate::commands::NameArgs;
use crate::config::SegnameConfig;
use segname_core::{Backing, Name};
use serde::Serialize;

/// Everything observable about a name, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub delimiter: String,
    pub backing: Backing,
    pub count: usize,
    pub components: Vec<String>,
    pub display: String,
    pub data: String,
    pub hash: i32,
}

impl From<&Name> for Inspection {
    fn from(name: &Name) -> Self {
        Self {
            delimiter: name.delimiter().to_string(),
            backing: name.backing(),
            count: name.no_components(),
            components: name.components(),
            display: name.as_string(),
            data: name.as_data_string(),
            hash: name.get_hash_code(),
        }
    }
}

pub(crate) fn to_json(name: &Name) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&Inspection::from(name))?)
}

pub fn run_inspect(args: &NameArgs, config: &SegnameConfig) -> anyhow::Result<String> {
    let name = args.parse(config)?;
    to_json(&name)
}

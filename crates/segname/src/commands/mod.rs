pub mod concat;
pub mod edit;
pub mod inspect;
pub mod render;
pub mod schema;

pub use concat::*;
pub use edit::*;
pub use inspect::*;
pub use render::*;
pub use schema::*;

use crate::config::SegnameConfig;
use anyhow::Context;
use clap::Args;
use segname_core::{Backing, Delimiter, Name};

/// A name given on the command line, with optional overrides of the
/// configured delimiter and backing.
#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Masked name, e.g. 'oss\.cs.fau.de'
    pub name: String,

    /// Delimiter character
    #[arg(short, long)]
    pub delimiter: Option<Delimiter>,

    /// Backing store: array or string
    #[arg(short, long)]
    pub backing: Option<Backing>,
}

impl NameArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delimiter: None,
            backing: None,
        }
    }

    pub fn delimiter(&self, config: &SegnameConfig) -> Delimiter {
        self.delimiter.unwrap_or(config.name.delimiter)
    }

    pub fn parse(&self, config: &SegnameConfig) -> anyhow::Result<Name> {
        parse_name(&self.name, self.delimiter(config), self.backing.unwrap_or(config.name.backing))
    }
}

pub(crate) fn parse_name(raw: &str, delimiter: Delimiter, backing: Backing) -> anyhow::Result<Name> {
    Name::parse_with(raw, delimiter, backing)
        .with_context(|| format!("invalid name {:?} for delimiter {:?}", raw, delimiter.as_char()))
}

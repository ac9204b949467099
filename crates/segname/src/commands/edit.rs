use crate::commands::inspect::to_json;
use crate::commands::NameArgs;
use crate::config::SegnameConfig;
use anyhow::Context;
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum EditOp {
    /// Append a masked component
    Append { component: String },
    /// Insert a masked component before INDEX
    Insert { index: usize, component: String },
    /// Replace the component at INDEX
    Set { index: usize, component: String },
    /// Remove the component at INDEX
    Remove { index: usize },
}

pub fn run_edit(args: &NameArgs, op: &EditOp, config: &SegnameConfig) -> anyhow::Result<String> {
    let name = args.parse(config)?;
    let edited = match op {
        EditOp::Append { component } => name.append(component.as_str()),
        EditOp::Insert { index, component } => name.insert(*index, component.as_str()),
        EditOp::Set { index, component } => name.set_component(*index, component.as_str()),
        EditOp::Remove { index } => name.remove(*index),
    }
    .with_context(|| format!("cannot apply {:?} to {}", op, name))?;
    to_json(&edited)
}

use crate::commands::inspect::to_json;
use crate::commands::{parse_name, NameArgs};
use crate::config::SegnameConfig;

/// Concatenate `right`, read with the same delimiter and backing, onto `left`
pub fn run_concat(left: &NameArgs, right: &str, config: &SegnameConfig) -> anyhow::Result<String> {
    let l = left.parse(config)?;
    let r = parse_name(right, l.delimiter(), l.backing())?;
    to_json(&l.concat(&r)?)
}

use crate::commands::NameArgs;
use crate::config::SegnameConfig;

/// Human-readable rendering, joined by `with` or the name's own delimiter
pub fn run_render(args: &NameArgs, with: Option<char>, config: &SegnameConfig) -> anyhow::Result<String> {
    let name = args.parse(config)?;
    Ok(match with {
        Some(d) => name.as_string_with(d),
        None => name.as_string(),
    })
}

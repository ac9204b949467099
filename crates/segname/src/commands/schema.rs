use schemars::schema_for;
use segname_core::Name;
use std::path::PathBuf;

/// JSON schema of the serialized name form; written to `output` if given.
pub fn run_schema(output: Option<PathBuf>) -> anyhow::Result<String> {
    let schema = schema_for!(Name);
    let schema_json = serde_json::to_string_pretty(&schema)?;

    if let Some(path) = output {
        std::fs::write(&path, &schema_json)?;
        tracing::info!(path = %path.display(), "wrote schema");
        return Ok(String::new());
    }
    Ok(schema_json)
}

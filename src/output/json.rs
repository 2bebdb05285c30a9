// JSON Output Module

use serde::Serialize;

/// Generate JSON output from any API record or collection of records
pub fn generate_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Write JSON to file
pub fn write_json_file<T: Serialize + ?Sized>(
    value: &T,
    path: &std::path::Path,
    pretty: bool,
) -> anyhow::Result<()> {
    let json = generate_json(value, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}

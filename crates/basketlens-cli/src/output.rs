use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(value: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(value)?,
    }

    Ok(())
}

/// Key/value rendering of the top-level object; nested values print as
/// compact JSON.
fn render_table(value: &Value) -> Result<(), CliError> {
    let Some(object) = value.as_object() else {
        println!("{}", serde_json::to_string(value)?);
        return Ok(());
    };

    let width = object.keys().map(|k| k.len()).max().unwrap_or(0);
    for (key, field) in object {
        let rendered = match field {
            Value::String(s) => s.clone(),
            other => serde_json::to_string(other)?,
        };
        println!("{key:width$}  {rendered}");
    }

    Ok(())
}

use codepage::Registry;

use crate::cli::OutputFormat;
use crate::shared::report;

/// Print the defined mappings of code page `name` in table-file format, or
/// as a JSON array of `{byte, codepoint}` objects.
pub fn run(registry: &Registry, name: &str, format: OutputFormat) -> Result<(), i32> {
    let tables = registry.tables_for(name).map_err(report)?;
    let entries = tables.defined_entries();

    match format {
        OutputFormat::Text => {
            println!("# {name}");
            for entry in &entries {
                println!(
                    "0x{:02x}\t0x{:04x}\t{}",
                    entry.byte,
                    entry.codepoint as u32,
                    entry.codepoint.escape_debug()
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })?;
            println!("{json}");
        }
    }

    if let Some(warnings) = registry.warnings_for(name) {
        for w in warnings {
            eprintln!("Warning: {w}");
        }
    }
    Ok(())
}

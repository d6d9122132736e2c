use codepage::Registry;

use crate::cli::OutputFormat;

pub fn run(registry: &Registry, format: OutputFormat) -> Result<(), i32> {
    let mut names = registry.list_known();
    names.sort();

    match format {
        OutputFormat::Text => {
            for name in &names {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&names).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })?;
            println!("{json}");
        }
    }
    Ok(())
}

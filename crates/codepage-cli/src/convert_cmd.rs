use std::path::Path;

use codepage::{Encoding, Registry};

use crate::shared::{read_input, report, write_output};

/// Decode code page bytes from `file` (or stdin) and print the text.
pub fn decode(registry: &Registry, encoding: &str, file: Option<&Path>) -> Result<(), i32> {
    let input = read_input(file)?;
    let text = registry.decode(&input, encoding).map_err(report)?;
    write_output(text.as_bytes())
}

/// Encode UTF-8 text from `file` (or stdin) and write the bytes.
///
/// In strict mode every character must have a mapping; otherwise unmapped
/// characters become the code page's space byte.
pub fn encode(
    registry: &Registry,
    encoding: &str,
    file: Option<&Path>,
    strict: bool,
) -> Result<(), i32> {
    let input = read_input(file)?;
    let text = String::from_utf8(input).map_err(|e| {
        eprintln!("Error: input is not valid UTF-8: {e}");
        1
    })?;

    let bytes = if strict {
        text.chars()
            .map(|c| registry.encode_char(c, encoding))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(report)?
    } else {
        registry.encode(&text, encoding).map_err(report)?
    };
    write_output(&bytes)
}

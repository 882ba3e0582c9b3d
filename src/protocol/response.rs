use super::*;

/// Line terminating every response
pub const END_MARKER: &str = "END";

/// Renders a complete response: the payload lines (or a single `ERR <reason>` line) followed by
/// the `END` marker, every line newline-terminated.
pub fn render_response(result: &Result<String, ProtocolError>) -> String {
    match result {
        Ok(payload) => format!("{payload}\n{END_MARKER}\n"),
        Err(err) => format!("ERR {err}\n{END_MARKER}\n"),
    }
}

/// Writes the rendered response to `writer` and flushes it.
pub fn write_response<W: Write>(
    writer: &mut W,
    result: &Result<String, ProtocolError>,
) -> std::io::Result<()> {
    writer.write_all(render_response(result).as_bytes())?;
    writer.flush()
}

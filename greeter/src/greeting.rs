use std::io::{self, Write};

use crate::errors::GreeterResult;

/// Bytes written by every call to [`hello_world`].
pub const GREETING: &str = "Hello, World!\n";

/// Write the greeting to `out` and flush it.
pub fn write_greeting<W: Write>(out: &mut W) -> GreeterResult<()> {
    out.write_all(GREETING.as_bytes())?;
    out.flush()?;

    tracing::trace!(bytes = GREETING.len(), "greeting written");
    Ok(())
}

/// Write the greeting to the process stdout.
///
/// Stdout stays locked for the whole write, so concurrent callers never
/// interleave inside a line.
pub fn hello_world() -> GreeterResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greeting(&mut handle)
}

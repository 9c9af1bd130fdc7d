use crate::error::{EngineError, Result};
use std::path::Path;

/// Read a file as UTF-8 text and return its line count.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be read and
/// [`EngineError::Decode`] if its contents are not valid UTF-8.
pub fn count_file(path: &Path) -> Result<usize> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = std::str::from_utf8(&bytes).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count_lines(text))
}

/// Count lines with universal newline semantics.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A trailing line without a
/// terminator still counts; empty input has no lines.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    let buf = text.as_bytes();
    let Some(&last) = buf.last() else {
        return 0;
    };

    let lf = bytecount::count(buf, b'\n');
    let cr = bytecount::count(buf, b'\r');
    let crlf = if cr == 0 {
        0
    } else {
        buf.windows(2).filter(|w| *w == b"\r\n").count()
    };

    let mut lines = lf + cr - crlf;
    // unterminated last line
    if last != b'\n' && last != b'\r' {
        lines += 1;
    }
    lines
}

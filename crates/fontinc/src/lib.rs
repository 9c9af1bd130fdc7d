//! Font resource to hex listing conversion.
//!
//! Turns an opaque byte buffer (typically an 8x8 bitmap font, 8 bytes per
//! glyph) into rows of `0xXX, ` literals that can be pasted into an array
//! initializer.
//!
//! ```rust
//! use devscripts_fontinc::rows;
//!
//! let out: Vec<String> = rows(&[0x00, 0x7E, 0xFF], 16).collect();
//! assert_eq!(out, vec!["0x00, 0x7E, 0xFF, "]);
//! ```

use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bytes per output row.
pub const BYTES_PER_ROW: usize = 16;

/// Bytes per glyph in an 8x8 bitmap font.
pub const GLYPH_BYTES: usize = 8;

#[derive(Debug, Error)]
pub enum FontIncError {
    #[error("Failed to read font file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row width must be at least 1")]
    InvalidRowWidth,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FontIncError>;

/// Contents of a font file, immutable once loaded.
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Read the whole file into memory.
    ///
    /// # Errors
    ///
    /// Returns [`FontIncError::Read`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| FontIncError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(
            "Loaded {} bytes ({} glyphs) from {}",
            bytes.len(),
            bytes.len() / GLYPH_BYTES,
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn rows(&self, per_row: usize) -> impl Iterator<Item = String> + '_ {
        rows(&self.bytes, per_row)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            path: PathBuf::new(),
            bytes,
        }
    }
}

#[must_use]
pub fn format_byte(byte: u8) -> String {
    format!("0x{byte:02X}, ")
}

/// Concatenated [`format_byte`] output for one chunk; always ends in `", "`
/// unless the chunk is empty.
#[must_use]
pub fn format_row(chunk: &[u8]) -> String {
    chunk.iter().map(|&b| format_byte(b)).collect()
}

/// Lazily format `bytes` as rows of `per_row` entries.
///
/// The last row may be shorter. Empty input yields no rows.
///
/// # Panics
///
/// Panics if `per_row` is zero; [`write_rows`] checks this and returns an
/// error instead.
pub fn rows(bytes: &[u8], per_row: usize) -> impl Iterator<Item = String> + '_ {
    bytes.chunks(per_row).map(format_row)
}

/// Write every row followed by a newline.
///
/// # Errors
///
/// Returns [`FontIncError::InvalidRowWidth`] for a zero `per_row`, or an
/// I/O error from the writer.
pub fn write_rows<W: Write>(out: &mut W, bytes: &[u8], per_row: usize) -> Result<()> {
    if per_row == 0 {
        return Err(FontIncError::InvalidRowWidth);
    }
    for row in rows(bytes, per_row) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

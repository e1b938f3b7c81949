// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Plain-text PGM (`P2`) reader and writer.
//!
//! ```text
//! P2
//! # optional comments
//! <cols> <rows>
//! <max intensity>
//! <rows * cols integers, row-major, any whitespace layout>
//! ```
//!
//! Width precedes height on the dimension line. A token starting with `#`
//! opens a comment that runs to the end of the line. The writer never emits comments and puts one
//! image row per line.

use std::fmt::Write as _;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info, warn};

use super::error::{RasterError, Result};
use super::grid::PixelGrid;

/// Magic token identifying a plain-text graymap.
pub const MAGIC: &str = "P2";

/// Whitespace/comment-aware token scanner over the whole text.
struct Tokens<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    /// Next whitespace-delimited token, skipping comments.
    ///
    /// A comment is a token that starts with `#` and runs to the end of the
    /// line. A `#` inside a token is part of the token.
    fn next_token(&mut self) -> Option<&'a str> {
        let bytes = self.data.as_bytes();
        loop {
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < bytes.len() && bytes[self.pos] == b'#' {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }
            break;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some(&self.data[start..self.pos])
    }

    /// Upper bound on the tokens left in the input: each needs one byte and
    /// a separator.
    fn max_remaining(&self) -> usize {
        (self.data.len() - self.pos + 1) / 2
    }

    fn integer(&mut self, field: &'static str) -> Result<i64> {
        let token = self.next_token().ok_or(RasterError::UnexpectedEof(field))?;
        token.parse::<i64>().map_err(|_| RasterError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }

    /// Read an integer that must fit `T` (dimension or intensity ceiling).
    fn bounded<T: TryFrom<i64>>(&mut self, field: &'static str) -> Result<T> {
        let value = self.integer(field)?;
        T::try_from(value).map_err(|_| RasterError::InvalidNumber {
            field,
            token: value.to_string(),
        })
    }
}

/// Parse a plain PGM document into a grid.
///
/// Pixel values go through [`PixelGrid::set`], so anything outside
/// `[0, max_intensity]` is clamped. Tokens after the last pixel are ignored.
///
/// # Errors
/// - [`RasterError::InvalidMagic`] if the first token is not `P2`.
/// - [`RasterError::UnexpectedEof`] if a header field or pixel is missing,
///   including when the text is too short to hold `rows * cols` pixels.
/// - [`RasterError::InvalidNumber`] for non-integer tokens and header values
///   out of range (negative dimensions, max above 65535).
/// - [`RasterError::AllocationFailed`] if the declared size cannot be allocated.
pub fn parse(text: &str) -> Result<PixelGrid> {
    let mut tokens = Tokens::new(text);

    let magic = tokens.next_token().ok_or(RasterError::UnexpectedEof("magic"))?;
    if magic != MAGIC {
        return Err(RasterError::InvalidMagic(magic.to_string()));
    }

    let cols: usize = tokens.bounded("width")?;
    let rows: usize = tokens.bounded("height")?;
    let max_intensity: u16 = tokens.bounded("max intensity")?;

    // A short file must not drive the allocation.
    match rows.checked_mul(cols) {
        Some(n) if n <= tokens.max_remaining() => {}
        _ => return Err(RasterError::UnexpectedEof("pixel data")),
    }

    let mut grid = PixelGrid::new(rows, cols, max_intensity)?;
    let mut clamped = 0usize;
    for row in 0..rows as isize {
        for col in 0..cols as isize {
            let value = tokens.integer("pixel data")?;
            if value < 0 || value > max_intensity as i64 {
                clamped += 1;
            }
            grid.set(row, col, value);
        }
    }
    if clamped > 0 {
        warn!("clamped {clamped} pixel values outside [0, {max_intensity}]");
    }

    debug!("parsed {}", grid.info());
    Ok(grid)
}

/// Render a grid as plain PGM text.
pub fn serialize(grid: &PixelGrid) -> String {
    // Up to 5 digits plus a separator per pixel.
    let mut out = String::with_capacity(16 + grid.len() * 6);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{MAGIC}");
    let _ = writeln!(out, "{} {}", grid.cols(), grid.rows());
    let _ = writeln!(out, "{}", grid.max_intensity());
    for r in 0..grid.rows() {
        for (c, v) in grid.row(r).unwrap_or_default().iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{v}");
        }
        out.push('\n');
    }
    debug!("serialized {} ({} bytes)", grid.info(), out.len());
    out
}

/// Read and parse a whole stream.
///
/// Non-ASCII bytes never form a valid token, so the input is decoded lossily
/// and a binary (`P5`) file is reported as [`RasterError::InvalidMagic`].
pub fn read_from<R: Read>(mut reader: R) -> Result<PixelGrid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&String::from_utf8_lossy(&bytes))
}

/// Serialize into a stream.
pub fn write_to<W: Write>(grid: &PixelGrid, mut writer: W) -> Result<()> {
    writer.write_all(serialize(grid).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Load a plain PGM file.
pub fn load(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let grid = read_from(fs::File::open(path)?)?;
    info!("loaded {} ({})", path.display(), grid.info());
    Ok(grid)
}

/// Write a grid to `path`, replacing any existing file.
pub fn save(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_to(grid, std::io::BufWriter::new(fs::File::create(path)?))?;
    info!("saved {} ({})", path.display(), grid.info());
    Ok(())
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for grid construction and the plain PGM text codec.

use std::fmt;

/// Errors that can occur while allocating, parsing or persisting a grid.
#[derive(Debug)]
pub enum RasterError {
    /// The pixel buffer for a `rows × cols` grid could not be allocated.
    AllocationFailed { rows: usize, cols: usize },
    /// The first token of the text was not the `P2` magic.
    InvalidMagic(String),
    /// The text ended before the named field could be read.
    UnexpectedEof(&'static str),
    /// A token could not be read as an integer, or is out of range for its field.
    InvalidNumber { field: &'static str, token: String },
    /// Underlying stream or file failure.
    Io(std::io::Error),
}

impl RasterError {
    /// `true` for the malformed/truncated-text family of errors.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagic(_) | Self::UnexpectedEof(_) | Self::InvalidNumber { .. }
        )
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { rows, cols } => {
                write!(f, "cannot allocate a {rows}x{cols} pixel buffer")
            }
            Self::InvalidMagic(token) => write!(f, "not a plain PGM file (magic {token:?}, expected \"P2\")"),
            Self::UnexpectedEof(field) => write!(f, "unexpected end of data while reading {field}"),
            Self::InvalidNumber { field, token } => write!(f, "invalid {field}: {token:?}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RasterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;

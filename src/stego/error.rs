// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for LSB embedding and extraction.

use core::fmt;

/// Errors that can occur while hiding or recovering a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The message plus its terminator needs more bits than the grid has pixels.
    MessageTooLarge { required_bits: usize, available_bits: usize },
    /// The grid's ceiling is 0, so no pixel can hold a one bit.
    NoBitDepth,
    /// The extracted bytes are not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageTooLarge { required_bits, available_bits } => write!(
                f,
                "message too large for this image ({required_bits} bits needed, {available_bits} available)"
            ),
            Self::NoBitDepth => write!(f, "image has a maximum intensity of 0 and cannot carry data"),
            Self::InvalidUtf8 => write!(f, "extracted text is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StegoError {}

/*
 * SPDX-FileCopyrightText: 2026 bitweave contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Construction-time error type.
//!
//! Everything on the hot read/write/measure path reports failure as a
//! `bool` (per the field-encoder contract), not through this type. This
//! error only covers the one-time setup checks performed when a
//! [`crate::bit_writer::BitWriter`] or [`crate::bit_reader::BitReader`] is
//! built over a caller-supplied buffer.

use thiserror::Error;

/// Errors returned when constructing a bit writer or reader over an
/// invalid caller-supplied buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitStreamError {
    /// The buffer passed to the writer is empty.
    #[error("writer buffer must not be empty")]
    EmptyWriterBuffer,
    /// The buffer passed to the writer is not a multiple of 4 bytes.
    #[error("writer buffer length {len} is not a positive multiple of 4")]
    UnalignedWriterBuffer {
        /// The offending buffer length, in bytes.
        len: usize,
    },
    /// The buffer passed to the reader is empty.
    #[error("reader buffer must not be empty")]
    EmptyReaderBuffer,
}

/// Convenience alias for fallible constructors in this crate.
pub type BitStreamResult<T> = Result<T, BitStreamError>;

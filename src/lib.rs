/*
 * SPDX-FileCopyrightText: 2026 bitweave contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A bitpacked binary serialization core.
//!
//! This crate is a symmetric pair of writer/reader primitives
//! ([`bit_writer::BitWriter`], [`bit_reader::BitReader`]) that pack
//! arbitrary-width integer fields into a contiguous byte buffer with no
//! self-describing metadata, plus a thin unified-serialization layer
//! ([`stream::Stream`]) that lets one user-defined routine both encode and
//! decode a value against the same field schema.
//!
//! # Layers
//!
//! - [`bit_writer`] / [`bit_reader`] — the bitpacker itself. A 64-bit
//!   scratch register flushed in 32-bit little-endian words. Knows
//!   nothing about field semantics.
//! - [`stream`] — a tagged union ([`stream::Stream`]) over a writer, a
//!   reader, and a bit-counting measure mode, exposing the three
//!   mode-agnostic primitives everything else is built from.
//! - [`fields`] — the schema-level operations ([`fields::serialize_int`],
//!   [`fields::serialize_bool`], [`fields::serialize_compressed_float`],
//!   and friends) a user serialization routine actually calls.
//!
//! # Wire format
//!
//! Unattributed: no field tags, no lengths at the stream level, no
//! self-synchronization. A reader must apply the exact same sequence of
//! field operations as the writer used, or the result is simply wrong —
//! there is nothing in the stream to detect that on its own. The format
//! is little-endian by definition; there is no big-endian mode.
//!
//! # Example
//!
//! ```
//! use bitweave::fields::{serialize_bool, serialize_int};
//! use bitweave::stream::Stream;
//!
//! fn serialize_player(stream: &mut Stream, health: &mut i64, alive: &mut bool) -> bool {
//!     serialize_int(stream, health, 0, 100) && serialize_bool(stream, alive)
//! }
//!
//! let mut buf = [0u8; 4];
//! let mut health = 42;
//! let mut alive = true;
//! {
//!     let mut w = Stream::writer(&mut buf).unwrap();
//!     assert!(serialize_player(&mut w, &mut health, &mut alive));
//!     w.flush();
//! }
//!
//! let mut r = Stream::reader(&buf).unwrap();
//! let mut health = 0;
//! let mut alive = false;
//! assert!(serialize_player(&mut r, &mut health, &mut alive));
//! assert_eq!(health, 42);
//! assert!(alive);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bit_reader;
pub mod bit_writer;
pub mod error;
pub mod fields;
pub mod stream;
pub mod util;

/// Re-exports the working vocabulary of this crate from one place.
pub mod prelude {
    pub use crate::bit_reader::BitReader;
    pub use crate::bit_writer::BitWriter;
    pub use crate::error::{BitStreamError, BitStreamResult};
    pub use crate::fields::*;
    pub use crate::stream::{Mode, MeasureStream, Stream};
    pub use crate::util::{bits_required, log2};
}

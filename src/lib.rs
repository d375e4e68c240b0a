//! Bit-level manipulation of arbitrary byte buffers, in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe` — just `core`.
//!
//! Two engines share one buffer abstraction: a [`rotate`] family that
//! circularly rotates the bits of any contiguous byte range in place, and a
//! [`CyclicReadBuffer`] that reads a buffer cyclically and combines it, byte
//! by byte, with another buffer.
//!
//! # Examples
//! ```
//! use cyclic_bytes::{ByteOp, CyclicReadBuffer, rotate};
//!
//! let mut bytes = [0x81u8, 0x18, 0x07];
//! rotate(&mut bytes, 9);
//! assert_eq!(bytes, [0x03, 0xC0, 0x8C]);
//!
//! let key = [0x5Au8];
//! let mut buffer = CyclicReadBuffer::new(&key).unwrap();
//! buffer.apply_operation(&mut bytes, ByteOp::Xor);
//! buffer.apply_operation(&mut bytes, ByteOp::Xor);
//! assert_eq!(bytes, [0x03, 0xC0, 0x8C]);
//! ```
//!
//! # Use Cases
//!
//! - Rolling keys, checksums and scramblers that treat a byte buffer as one
//!   long bit string
//! - Stream-style XOR/AND/OR combination with a short cyclic operand
//! - Embedded and allocation-free environments
//! - Does not support SIMD or parallel execution, so it's not ideal for cases
//!   where performance needs to be fully maxed out
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - In-place circular rotation of a byte range by any signed bit amount:
//!   - [`rotate`] (whole sequence)
//!   - [`rotate_from`] / [`rotate_range`] (sub-ranges, clamped and normalized)
//!   - [`rotated`] (chaining variant)
//! - Wrap-around traversal with [`CyclicCursor`]:
//!   - `next()` / `previous()` with wrap at both ends
//!   - `get_at()` resolving any `i64` index by mathematical modulo
//! - Cyclic combination with [`CyclicReadBuffer`]:
//!   - built-in [`ByteOp`] operators and custom byte- or integer-domain
//!     closures
//!   - an infinite lazy [`ByteStream`]
//!   - the [`combine`] one-shot convenience
//! - Works over plain arrays and slices, limit-bounded [`Window`]s, and
//!   foreign types bound through [`RawSequence`]

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod combine;
mod cursor;
mod error;
mod rotate;
mod sequence;

pub use combine::{ByteOp, ByteStream, CyclicReadBuffer, combine};
pub use cursor::CyclicCursor;
pub use error::{Error, MissingBindings};
pub use rotate::{rotate, rotate_from, rotate_range, rotated};
pub use sequence::{ByteSequence, RawBindings, RawSequence, Window};

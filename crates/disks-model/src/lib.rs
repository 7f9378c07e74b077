// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Disks Model
//!
//! Data model for the alternating disks problem. A row holds `2n` disks, each
//! either light or dark, and can only be rearranged by swapping two
//! horizontally adjacent disks.
//!
//! ## Modules
//!
//! - `color`: The two-valued `DiskColor` with its single-character symbols.
//! - `state`: `DiskState`, a fixed-length row with indexed access, adjacent
//!   swaps, and the `is_alternating` / `is_sorted` predicates.
//! - `error`: `DiskStateError`, returned by the fallible constructors and
//!   accessors.
//!
//! ## Usage
//!
//! ```rust
//! use disks_model::{color::DiskColor, state::DiskState};
//!
//! let mut row = DiskState::new(2);
//! assert!(row.is_alternating());
//! assert_eq!(row.to_string(), "L D L D");
//!
//! row.swap(0);
//! assert_eq!(row.get(0), DiskColor::Dark);
//! assert!(!row.is_alternating());
//! ```

pub mod color;
pub mod error;
pub mod state;

//! Deterministic maximum and most-common-letter scans.
//!
//! `tally-core` provides two pure operations: the greatest element of a
//! slice, and the most frequent Latin letter of a text. Both are single
//! linear passes with an explicit tie-break, so identical inputs always
//! produce identical outputs, byte-for-byte when serialized.

pub mod frequency;
pub mod maximum;
pub mod text;
pub mod types;

pub use frequency::most_common;
pub use maximum::max;

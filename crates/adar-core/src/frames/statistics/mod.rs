//! Cumulative statistics block decoding.
//!
//! The block is 44 bytes: a split-field up-time (seconds + nanoseconds)
//! followed by four ping counters. Counters are monotonically
//! non-decreasing on the device side; the decoder treats them as opaque
//! snapshot values.

pub mod layout;
pub mod parser;

pub use parser::{Statistics, parse_statistics};

//! Frame decoding modules.
//!
//! Each frame type follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `reader`: safe byte access; the only place endianness is decided
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors shared by all frame decoders
//!
//! Parsers are pure and contain no I/O; the transport layer hands each
//! decoder one complete payload buffer per receive event, and the decoder
//! returns an owned value or the first error encountered.

pub mod error;
pub mod point_cloud;
pub(crate) mod reader;
pub mod statistics;
pub mod status;

//! Device status word decoding.
//!
//! The status word is 8 bytes: zone selection, device state, one reserved
//! byte, zone status, then a packed 32-bit error code. State and zone
//! status bytes are validated against the device-documented code tables;
//! unlisted codes fail the decode. Byte positions live in `layout`.

pub mod layout;
pub mod parser;

pub use parser::{DeviceState, DeviceStatus, ZoneStatus, parse_device_status};

//! CoAP point cloud payload decoding.
//!
//! A payload is a 16-byte header (microsecond timestamp + embedded device
//! status word) followed by zero or more 10-byte point records. The total
//! length must be exactly `16 + 10·N`; anything else is rejected before
//! any field is read. Decode order is timestamp, status, then points in
//! wire order, and the first sub-decode failure aborts the whole payload.
//!
//! Point coordinates arrive as unsigned millimeters and are converted to
//! meters here; `strength` stays in the device's raw scale.

pub mod layout;
pub mod parser;

pub use parser::{CoapPointCloud, Point, PointClassification, parse_point, parse_point_cloud};

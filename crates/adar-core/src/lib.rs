//! Core decoding library for ADAR radar telemetry frames.
//!
//! This crate implements the decoding pipeline used by the CLI: raw CoAP
//! payload buffers are turned into strongly typed, invariant-checked
//! values (device status words, point clouds, cumulative statistics).
//! Decoding is byte-oriented and side-effect free; all I/O stays in the
//! callers. Wire offsets live in per-frame `layout` modules and byte
//! access is centralized in a single reader so parsers stay minimal.
//!
//! Invariants:
//! - Decoders are pure: identical bytes always yield an equal value.
//! - Composite decodes fail on the first error; no partial value escapes.
//! - Point order matches wire order.
//!
//! # Examples
//! ```
//! use adar_core::parse_device_status;
//!
//! let status = parse_device_status(&[0x01, 0x03, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07])?;
//! assert_eq!(status.zone_selected, 1);
//! # Ok::<(), adar_core::DecodeError>(())
//! ```

use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod frames;

pub use frames::error::DecodeError;
pub use frames::point_cloud::{CoapPointCloud, Point, PointClassification, parse_point_cloud};
pub use frames::statistics::{Statistics, parse_statistics};
pub use frames::status::{DeviceState, DeviceStatus, ZoneStatus, parse_device_status};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no wall-clock time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decode report wrapping one decoded frame with provenance metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input payload metadata.
    pub input: InputInfo,
    /// The decoded frame.
    pub frame: DecodedFrame,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "adar").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input payload metadata embedded in reports.
#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// One decoded frame, tagged by kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedFrame {
    DeviceStatus { status: DeviceStatus },
    PointCloud { point_cloud: CoapPointCloud },
    Statistics { statistics: Statistics },
}

/// Build a report around a decoded frame.
///
/// # Examples
/// ```
/// use adar_core::{DecodedFrame, make_report, parse_statistics};
///
/// let mut payload = Vec::new();
/// payload.extend_from_slice(&3600u64.to_le_bytes());
/// payload.extend_from_slice(&0u32.to_le_bytes());
/// payload.extend_from_slice(&[0u8; 32]);
/// let statistics = parse_statistics(&payload)?;
/// let report = make_report(
///     "statistics.bin",
///     payload.len() as u64,
///     DecodedFrame::Statistics { statistics },
/// );
/// assert_eq!(report.report_version, adar_core::REPORT_VERSION);
/// # Ok::<(), adar_core::DecodeError>(())
/// ```
pub fn make_report(input_path: &str, input_bytes: u64, frame: DecodedFrame) -> Report {
    let generated_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string());
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "adar".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at,
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        frame,
    }
}

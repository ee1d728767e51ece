use thiserror::Error;

/// Errors returned by frame decoding.
///
/// A failure anywhere in a composite decode aborts the whole decode with
/// the first error encountered; no partial value is constructed.
///
/// # Examples
/// ```
/// use adar_core::DecodeError;
///
/// let err = DecodeError::InvalidZoneStatus { value: 0xFF };
/// assert!(err.to_string().contains("invalid zone status"));
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TruncatedInput { needed: usize, actual: usize },
    #[error("invalid point cloud payload length: {length}")]
    InvalidPayloadLength { length: usize },
    #[error("invalid device state: {value:#04x}")]
    InvalidDeviceState { value: u8 },
    #[error("invalid zone status: {value:#04x}")]
    InvalidZoneStatus { value: u8 },
    #[error("invalid point classification: {value:#04x}")]
    InvalidClassification { value: u8 },
    #[error("invalid up-time nanoseconds: {nanos}")]
    InvalidUpTimeNanos { nanos: u32 },
}

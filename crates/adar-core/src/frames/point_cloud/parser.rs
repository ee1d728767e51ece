use std::time::Duration;

use serde::Serialize;

use super::layout;
use crate::frames::error::DecodeError;
use crate::frames::reader::FrameReader;
use crate::frames::status::{DeviceStatus, parse_device_status};

/// Classification code attached to each detected point.
///
/// Code table per the device documentation; codes outside `0x00..=0x07`
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointClassification {
    Unclassified,
    StaticObject,
    MovingObject,
    GroundClutter,
    Overhead,
    Noise,
    Interference,
    Person,
}

impl PointClassification {
    pub fn from_wire(value: u8) -> Result<Self, DecodeError> {
        match value {
            0x00 => Ok(PointClassification::Unclassified),
            0x01 => Ok(PointClassification::StaticObject),
            0x02 => Ok(PointClassification::MovingObject),
            0x03 => Ok(PointClassification::GroundClutter),
            0x04 => Ok(PointClassification::Overhead),
            0x05 => Ok(PointClassification::Noise),
            0x06 => Ok(PointClassification::Interference),
            0x07 => Ok(PointClassification::Person),
            _ => Err(DecodeError::InvalidClassification { value }),
        }
    }
}

/// Single detection, coordinates in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub strength: u16,
    pub classification: PointClassification,
}

/// Decoded point cloud payload.
///
/// `timestamp` is the device's 64-bit microsecond counter; `points` keeps
/// wire order, index 0 being the earliest record in the buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoapPointCloud {
    pub timestamp: Duration,
    pub status: DeviceStatus,
    pub points: Vec<Point>,
}

fn millimeters_to_meters(raw: u16) -> f64 {
    f64::from(raw) / layout::MILLIMETERS_PER_METER
}

/// Decode one 10-byte point record.
pub fn parse_point(record: &[u8]) -> Result<Point, DecodeError> {
    let reader = FrameReader::new(record);
    reader.require_len(layout::POINT_LEN)?;

    let x = millimeters_to_meters(reader.read_u16_le(layout::POINT_X_RANGE.clone())?);
    let y = millimeters_to_meters(reader.read_u16_le(layout::POINT_Y_RANGE.clone())?);
    let z = millimeters_to_meters(reader.read_u16_le(layout::POINT_Z_RANGE.clone())?);
    let strength = reader.read_u16_le(layout::POINT_STRENGTH_RANGE.clone())?;
    // offset 8 is reserved and discarded
    let classification =
        PointClassification::from_wire(reader.read_u8(layout::POINT_CLASSIFICATION_OFFSET)?)?;

    Ok(Point {
        x,
        y,
        z,
        strength,
        classification,
    })
}

/// Decode a full point cloud payload.
pub fn parse_point_cloud(payload: &[u8]) -> Result<CoapPointCloud, DecodeError> {
    if payload.len() < layout::HEADER_LEN
        || (payload.len() - layout::HEADER_LEN) % layout::POINT_LEN != 0
    {
        return Err(DecodeError::InvalidPayloadLength {
            length: payload.len(),
        });
    }

    let reader = FrameReader::new(payload);
    let timestamp = Duration::from_micros(reader.read_u64_le(layout::TIMESTAMP_RANGE.clone())?);
    let status = parse_device_status(reader.read_slice(layout::STATUS_RANGE.clone())?)?;
    let points = reader
        .read_slice(layout::HEADER_LEN..payload.len())?
        .chunks_exact(layout::POINT_LEN)
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CoapPointCloud {
        timestamp,
        status,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::{PointClassification, parse_point, parse_point_cloud};
    use crate::frames::error::DecodeError;
    use crate::frames::point_cloud::layout;

    const POINT_BYTES: [u8; 10] = [0x34, 0x12, 0x09, 0x00, 0x00, 0x10, 0x10, 0x00, 0x00, 0x07];

    fn cloud_payload(points: &[[u8; 10]]) -> Vec<u8> {
        let mut payload = Vec::with_capacity(layout::HEADER_LEN + points.len() * layout::POINT_LEN);
        payload.extend_from_slice(&[0x01, 0x03, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
        payload.extend_from_slice(&[0x01, 0x03, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
        for record in points {
            payload.extend_from_slice(record);
        }
        payload
    }

    #[test]
    fn parse_point_converts_millimeters() {
        let point = parse_point(&POINT_BYTES).unwrap();
        assert_eq!(point.x, 4.66);
        assert_eq!(point.y, 0.009);
        assert_eq!(point.z, 4.096);
        assert_eq!(point.strength, 16);
        assert_eq!(point.classification, PointClassification::Person);
    }

    #[test]
    fn parse_point_unknown_classification() {
        let mut record = POINT_BYTES;
        record[9] = 0x42;
        let err = parse_point(&record).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidClassification { value: 0x42 }
        ));
    }

    #[test]
    fn parse_point_short_record() {
        let err = parse_point(&POINT_BYTES[..9]).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedInput { .. }));
    }

    #[test]
    fn parse_empty_cloud() {
        let cloud = parse_point_cloud(&cloud_payload(&[])).unwrap();
        assert!(cloud.points.is_empty());
    }

    #[test]
    fn parse_cloud_points_keep_wire_order() {
        let mut second = POINT_BYTES;
        second[0] = 0xE8;
        second[1] = 0x03; // x = 1000mm
        let cloud = parse_point_cloud(&cloud_payload(&[POINT_BYTES, second])).unwrap();
        assert_eq!(cloud.points.len(), 2);
        assert_eq!(cloud.points[0].x, 4.66);
        assert_eq!(cloud.points[1].x, 1.0);
    }

    #[test]
    fn parse_cloud_timestamp_is_microseconds() {
        // Raw field 0x0706050403020301 = 506097522914231041 microseconds.
        let cloud = parse_point_cloud(&cloud_payload(&[])).unwrap();
        assert_eq!(cloud.timestamp.as_secs(), 506_097_522_914);
        assert_eq!(cloud.timestamp.subsec_micros(), 231_041);
        let total = cloud.timestamp.as_secs_f64();
        assert!((total - 506_097_522_914.230529).abs() < 0.01);
    }

    #[test]
    fn parse_cloud_rejects_ragged_length() {
        let mut payload = cloud_payload(&[POINT_BYTES]);
        payload.pop();
        let err = parse_point_cloud(&payload).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidPayloadLength { length: 25 }
        ));
    }

    #[test]
    fn parse_cloud_rejects_short_header() {
        let err = parse_point_cloud(&[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidPayloadLength { length: 15 }
        ));
    }

    #[test]
    fn bad_status_fails_whole_cloud() {
        let mut payload = cloud_payload(&[POINT_BYTES]);
        payload[9] = 0xFF; // device state byte inside the embedded status
        let err = parse_point_cloud(&payload).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidDeviceState { value: 0xFF }));
    }

    #[test]
    fn bad_point_fails_whole_cloud() {
        let mut first = POINT_BYTES;
        first[9] = 0xFF;
        let err = parse_point_cloud(&cloud_payload(&[first, POINT_BYTES])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidClassification { value: 0xFF }
        ));
    }
}

use serde::Serialize;

use super::layout;
use crate::frames::error::DecodeError;
use crate::frames::reader::FrameReader;

/// Operating state reported in byte 1 of the status word.
///
/// Code table per the device documentation; codes outside it are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceState {
    Initializing,
    Disabled,
    Standby,
    Enabled,
}

impl DeviceState {
    pub fn from_wire(value: u8) -> Result<Self, DecodeError> {
        match value {
            0x00 => Ok(DeviceState::Initializing),
            0x01 => Ok(DeviceState::Disabled),
            0x02 => Ok(DeviceState::Standby),
            0x03 => Ok(DeviceState::Enabled),
            _ => Err(DecodeError::InvalidDeviceState { value }),
        }
    }
}

/// Zone occupancy reported in byte 3 of the status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    AllZonesFree,
    ObjectInOuterWarningZone,
    ObjectInInnerWarningZone,
    ObjectInProtectiveZone,
}

impl ZoneStatus {
    pub fn from_wire(value: u8) -> Result<Self, DecodeError> {
        match value {
            0x00 => Ok(ZoneStatus::AllZonesFree),
            0x01 => Ok(ZoneStatus::ObjectInOuterWarningZone),
            0x02 => Ok(ZoneStatus::ObjectInInnerWarningZone),
            0x03 => Ok(ZoneStatus::ObjectInProtectiveZone),
            _ => Err(DecodeError::InvalidZoneStatus { value }),
        }
    }
}

/// Decoded 8-byte device status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceStatus {
    pub zone_selected: u8,
    pub device_state: DeviceState,
    pub zone_status: ZoneStatus,
    pub device_error: u32,
}

/// Decode a device status word.
///
/// Reads bytes 0..8 and ignores any excess, so the same decoder serves
/// both a standalone status response and the status field embedded in a
/// point cloud payload.
pub fn parse_device_status(payload: &[u8]) -> Result<DeviceStatus, DecodeError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::STATUS_LEN)?;

    let zone_selected = reader.read_u8(layout::ZONE_SELECTED_OFFSET)?;
    let device_state = DeviceState::from_wire(reader.read_u8(layout::DEVICE_STATE_OFFSET)?)?;
    let zone_status = ZoneStatus::from_wire(reader.read_u8(layout::ZONE_STATUS_OFFSET)?)?;
    let device_error = reader.read_u32_le(layout::DEVICE_ERROR_RANGE.clone())?;

    Ok(DeviceStatus {
        zone_selected,
        device_state,
        zone_status,
        device_error,
    })
}

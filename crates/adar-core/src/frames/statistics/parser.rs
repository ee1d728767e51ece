use std::time::Duration;

use serde::Serialize;

use super::layout;
use crate::frames::error::DecodeError;
use crate::frames::reader::FrameReader;

/// Decoded cumulative statistics block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub up_time: Duration,
    pub total_number_of_pings: u64,
    pub pings_with_object_in_protective_zone: u64,
    pub pings_with_object_in_inner_warning_zone: u64,
    pub pings_with_object_in_outer_warning_zone: u64,
}

/// Decode a statistics block.
///
/// The up-time nanosecond field must be below one second; the device never
/// emits a carried value, so one is reported as an error rather than
/// normalized away.
pub fn parse_statistics(payload: &[u8]) -> Result<Statistics, DecodeError> {
    let reader = FrameReader::new(payload);
    reader.require_len(layout::STATISTICS_LEN)?;

    let secs = reader.read_u64_le(layout::UP_TIME_SECS_RANGE.clone())?;
    let nanos = reader.read_u32_le(layout::UP_TIME_NANOS_RANGE.clone())?;
    if nanos >= layout::NANOS_PER_SEC {
        return Err(DecodeError::InvalidUpTimeNanos { nanos });
    }

    Ok(Statistics {
        up_time: Duration::new(secs, nanos),
        total_number_of_pings: reader.read_u64_le(layout::TOTAL_PINGS_RANGE.clone())?,
        pings_with_object_in_protective_zone: reader
            .read_u64_le(layout::PROTECTIVE_ZONE_PINGS_RANGE.clone())?,
        pings_with_object_in_inner_warning_zone: reader
            .read_u64_le(layout::INNER_WARNING_PINGS_RANGE.clone())?,
        pings_with_object_in_outer_warning_zone: reader
            .read_u64_le(layout::OUTER_WARNING_PINGS_RANGE.clone())?,
    })
}

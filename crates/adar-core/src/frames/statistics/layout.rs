pub const UP_TIME_SECS_RANGE: std::ops::Range<usize> = 0..8;
pub const UP_TIME_NANOS_RANGE: std::ops::Range<usize> = 8..12;
pub const TOTAL_PINGS_RANGE: std::ops::Range<usize> = 12..20;
pub const PROTECTIVE_ZONE_PINGS_RANGE: std::ops::Range<usize> = 20..28;
pub const INNER_WARNING_PINGS_RANGE: std::ops::Range<usize> = 28..36;
pub const OUTER_WARNING_PINGS_RANGE: std::ops::Range<usize> = 36..44;

pub const STATISTICS_LEN: usize = 44;

pub const NANOS_PER_SEC: u32 = 1_000_000_000;

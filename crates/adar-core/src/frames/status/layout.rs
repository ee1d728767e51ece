pub const ZONE_SELECTED_OFFSET: usize = 0;
pub const DEVICE_STATE_OFFSET: usize = 1;
// offset 2 is reserved
pub const ZONE_STATUS_OFFSET: usize = 3;
pub const DEVICE_ERROR_RANGE: std::ops::Range<usize> = 4..8;

pub const STATUS_LEN: usize = 8;

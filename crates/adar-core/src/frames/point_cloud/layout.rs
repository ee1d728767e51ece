pub const TIMESTAMP_RANGE: std::ops::Range<usize> = 0..8;
pub const STATUS_RANGE: std::ops::Range<usize> = 8..16;
pub const HEADER_LEN: usize = 16;

// Offsets within one 10-byte point record.
pub const POINT_X_RANGE: std::ops::Range<usize> = 0..2;
pub const POINT_Y_RANGE: std::ops::Range<usize> = 2..4;
pub const POINT_Z_RANGE: std::ops::Range<usize> = 4..6;
pub const POINT_STRENGTH_RANGE: std::ops::Range<usize> = 6..8;
// offset 8 is reserved
pub const POINT_CLASSIFICATION_OFFSET: usize = 9;
pub const POINT_LEN: usize = 10;

pub const MILLIMETERS_PER_METER: f64 = 1000.0;

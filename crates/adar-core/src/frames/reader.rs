use super::error::DecodeError;

/// Borrowing reader over a frame payload.
///
/// All multi-byte fields on the wire are little-endian; this is the only
/// module that turns bytes into integers. Parsers address fields through
/// `layout` constants and never index the payload directly.
pub struct FrameReader<'a> {
    payload: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::TruncatedInput {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::TruncatedInput {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(DecodeError::TruncatedInput {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_le(&self, range: std::ops::Range<usize>) -> Result<u32, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(DecodeError::TruncatedInput {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64_le(&self, range: std::ops::Range<usize>) -> Result<u64, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 8 {
            return Err(DecodeError::TruncatedInput {
                needed: 8,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; 8];
        buf.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload
            .get(range.clone())
            .ok_or(DecodeError::TruncatedInput {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::FrameReader;
    use crate::frames::error::DecodeError;

    #[test]
    fn read_u16_le_ok() {
        let reader = FrameReader::new(&[0x34, 0x12]);
        assert_eq!(reader.read_u16_le(0..2).unwrap(), 0x1234);
    }

    #[test]
    fn read_u32_le_ok() {
        let reader = FrameReader::new(&[0x04, 0x05, 0x06, 0x07]);
        assert_eq!(reader.read_u32_le(0..4).unwrap(), 0x0706_0504);
    }

    #[test]
    fn read_u64_le_ok() {
        let reader = FrameReader::new(&[0x01, 0x03, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
        assert_eq!(reader.read_u64_le(0..8).unwrap(), 0x0706_0504_0302_0301);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let reader = FrameReader::new(&[0x01, 0x02]);
        let err = reader.read_u32_le(0..4).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TruncatedInput {
                needed: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn read_u8_past_end_is_truncated() {
        let reader = FrameReader::new(&[0x01]);
        let err = reader.read_u8(1).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TruncatedInput {
                needed: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn require_len_ok_and_short() {
        let reader = FrameReader::new(&[0u8; 8]);
        assert!(reader.require_len(8).is_ok());
        assert!(reader.require_len(9).is_err());
    }
}

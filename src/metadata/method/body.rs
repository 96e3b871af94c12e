//! Method body header parsing.
//!
//! Only the header is decoded: it carries the IL code size, which is all the output sink
//! needs to scope a synthesized kickoff debug record over a method's instructions. Both
//! tiny and fat headers are supported as specified by ECMA-335.
//!
//! # Examples
//!
//! ```rust
//! use dotscope_output::metadata::method::MethodBody;
//!
//! // tiny header: 3 bytes of code (nop, nop, ret)
//! let body = MethodBody::from(&[0x0E, 0x00, 0x00, 0x2A])?;
//! assert_eq!(body.size_code, 3);
//! assert!(!body.is_fat);
//! # Ok::<(), dotscope_output::Error>(())
//! ```
//!
//! # References
//! - ECMA-335 6th Edition, Partition II, Section 25.4 - Method Header Format

use crate::{
    file::io::{read_le, read_le_at},
    metadata::method::{MethodBodyFlags, METHOD_BODY_FAT_FLAGS_MASK},
    Error::OutOfBounds,
    Result,
};

/// Header information of one method that has been compiled to CIL bytecode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBody {
    /// Size of the method (length of all instructions, not counting the header) in bytes
    pub size_code: usize,
    /// Size of the method header in bytes
    pub size_header: usize,
    /// `MetaData` token for the local variable signature. 0 == no local variables
    pub local_var_sig_token: u32,
    /// Maximum number of items on the operand stack
    pub max_stack: usize,
    /// Flag, indicating the type of the method header
    pub is_fat: bool,
    /// Flag, indicating to call default constructor on all local variables
    pub is_init_local: bool,
    /// Flag, indicating that extra data sections (exception handlers) follow the code
    pub is_exception_data: bool,
}

impl MethodBody {
    /// Build a body description for a method with `size_code` bytes of IL and a tiny header.
    ///
    /// Useful when the code size is already known from elsewhere and the raw header is not
    /// at hand.
    #[must_use]
    pub fn with_code_size(size_code: usize) -> Self {
        MethodBody {
            size_code,
            size_header: 1,
            local_var_sig_token: 0,
            max_stack: 8,
            is_fat: false,
            is_init_local: false,
            is_exception_data: false,
        }
    }

    /// Create a `MethodBody` from the bytes starting at the method header.
    ///
    /// # Arguments
    /// * `data` - The header followed by the IL code
    ///
    /// # Errors
    /// Returns an error if the data is empty, out of bounds, or the header format is unknown.
    pub fn from(data: &[u8]) -> Result<MethodBody> {
        if data.is_empty() {
            return Err(malformed_error!("Provided data for body parsing is empty"));
        }

        let first_byte = read_le::<u8>(data)?;
        match MethodBodyFlags::format_of(first_byte) {
            MethodBodyFlags::TINY_FORMAT => {
                let size_code = (first_byte >> 2) as usize;
                if size_code + 1 > data.len() {
                    return Err(OutOfBounds);
                }

                Ok(MethodBody {
                    size_code,
                    size_header: 1,
                    local_var_sig_token: 0,
                    // tiny headers imply a max stack of 8 (II.25.4.2)
                    max_stack: 8,
                    is_fat: false,
                    is_init_local: false,
                    is_exception_data: false,
                })
            }
            MethodBodyFlags::FAT_FORMAT => {
                if data.len() < 12 {
                    return Err(OutOfBounds);
                }

                let mut cursor = 0_usize;
                let first_duo = read_le_at::<u16>(data, &mut cursor)?;
                let max_stack = read_le_at::<u16>(data, &mut cursor)? as usize;
                let size_code = read_le_at::<u32>(data, &mut cursor)? as usize;
                let local_var_sig_token = read_le_at::<u32>(data, &mut cursor)?;

                let size_header = usize::from(first_duo >> 12) * 4;
                if size_header < 12 {
                    return Err(malformed_error!(
                        "Fat MethodHeader declares a header size of {} bytes",
                        size_header
                    ));
                }
                if data.len() < size_code.saturating_add(size_header) {
                    return Err(OutOfBounds);
                }

                let flags_header =
                    MethodBodyFlags::from_bits_truncate(first_duo & METHOD_BODY_FAT_FLAGS_MASK);

                Ok(MethodBody {
                    size_code,
                    size_header,
                    local_var_sig_token,
                    max_stack,
                    is_fat: true,
                    is_init_local: flags_header.contains(MethodBodyFlags::INIT_LOCALS),
                    is_exception_data: flags_header.contains(MethodBodyFlags::MORE_SECTS),
                })
            }
            _ => Err(malformed_error!(
                "MethodHeader is neither FAT nor TINY - {}",
                first_byte
            )),
        }
    }

    /// Get the full size of this method
    #[must_use]
    pub fn size(&self) -> usize {
        self.size_code + self.size_header
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn tiny() {
        // 5 bytes of code
        let data = [0x16, 0x02, 0x7B, 0x01, 0x00, 0x2A];

        let body = MethodBody::from(&data).unwrap();

        assert!(!body.is_fat);
        assert!(!body.is_exception_data);
        assert!(!body.is_init_local);
        assert_eq!(body.max_stack, 8);
        assert_eq!(body.size_code, 5);
        assert_eq!(body.size_header, 1);
        assert_eq!(body.size(), 6);
        assert_eq!(body.local_var_sig_token, 0);
    }

    #[test]
    fn tiny_truncated() {
        // declares 5 bytes of code, provides 2
        let data = [0x16, 0x00, 0x2A];
        assert!(matches!(MethodBody::from(&data), Err(Error::OutOfBounds)));
    }

    #[test]
    fn fat() {
        let mut data = vec![
            0x1B, 0x30, // flags: FAT | MORE_SECTS | INIT_LOCALS, header size 3 * 4
            0x05, 0x00, // max stack
            0x9B, 0x00, 0x00, 0x00, // code size
            0x59, 0x00, 0x00, 0x11, // local var sig token
        ];
        data.resize(12 + 0x9B, 0x00);

        let body = MethodBody::from(&data).unwrap();

        assert!(body.is_fat);
        assert!(body.is_exception_data);
        assert!(body.is_init_local);
        assert_eq!(body.max_stack, 5);
        assert_eq!(body.size_code, 0x9B);
        assert_eq!(body.size_header, 12);
        assert_eq!(body.size(), 167);
        assert_eq!(body.local_var_sig_token, 0x1100_0059);
    }

    #[test]
    fn fat_truncated_code() {
        let data = [
            0x13, 0x30, 0x02, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A,
        ];
        assert!(matches!(MethodBody::from(&data), Err(Error::OutOfBounds)));
    }

    #[test]
    fn fat_bad_header_size() {
        let data = [
            0x03, 0x10, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A,
        ];
        assert!(matches!(
            MethodBody::from(&data),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn invalid_format() {
        assert!(matches!(
            MethodBody::from(&[0x00, 0x2A]),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(MethodBody::from(&[]), Err(Error::Malformed { .. })));
    }

    #[test]
    fn explicit_code_size() {
        let body = MethodBody::with_code_size(42);
        assert_eq!(body.size_code, 42);
        assert_eq!(body.size(), 43);
    }
}

//! Flag types shared by method body parsing.
//!
//! - [`MethodBodyFlags`]: bits of the first header byte(s), ECMA-335 II.25.4.1 / II.25.4.4

use bitflags::bitflags;

/// Bitmask selecting the header format bits of the first header byte
pub const METHOD_BODY_FORMAT_MASK: u8 = 0b_0000_0011;

/// Bitmask selecting the flag bits of a fat header's first `u16`
pub const METHOD_BODY_FAT_FLAGS_MASK: u16 = 0x0FFF;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Flags that a method body header can have
    pub struct MethodBodyFlags: u16 {
        /// Tiny method header format
        const TINY_FORMAT = 0x2;
        /// Fat method header format
        const FAT_FORMAT = 0x3;
        /// More data sections (exception tables) follow the code
        const MORE_SECTS = 0x8;
        /// Call the default constructor on all local variables
        const INIT_LOCALS = 0x10;
    }
}

impl MethodBodyFlags {
    /// Extract the header format (tiny or fat) from the first header byte
    #[must_use]
    pub fn format_of(first_byte: u8) -> Self {
        Self::from_bits_truncate(u16::from(first_byte & METHOD_BODY_FORMAT_MASK))
    }
}

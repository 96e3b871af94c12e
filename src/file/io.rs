//! Bounds-checked little-endian reads over raw byte buffers.
//!
//! Method headers are stored little-endian inside the PE image. The helpers here read a
//! primitive from the start of a slice ([`read_le`]) or at a cursor that is advanced past
//! the value ([`read_le_at`]). Both return [`crate::Error::OutOfBounds`] instead of
//! panicking when the buffer is too short.

use crate::{Error::OutOfBounds, Result};

/// Primitive types that can be decoded from a fixed-size little-endian byte array.
pub trait CilIO: Sized {
    /// Byte array holding one encoded value (e.g. `[u8; 4]` for `u32`)
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Decode from little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_cilio {
    ($($ty:ty => $n:literal),* $(,)?) => {
        $(
            impl CilIO for $ty {
                type Bytes = [u8; $n];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_cilio!(u8 => 1, u16 => 2, u32 => 4, u64 => 8);

/// Read a `T` from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` holds fewer than `size_of::<T>()` bytes.
pub fn read_le<T: CilIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Read a `T` at `offset` and advance `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the value would extend past the end of `data`.
/// `offset` is left untouched in that case.
pub fn read_le_at<T: CilIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let end = offset.checked_add(type_len).ok_or(OutOfBounds)?;
    let Some(slice) = data.get(*offset..end) else {
        return Err(OutOfBounds);
    };

    let Ok(bytes) = slice.try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;
    Ok(T::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_primitives() {
        assert_eq!(read_le::<u8>(&TEST_BUFFER).unwrap(), 0x01);
        assert_eq!(read_le::<u16>(&TEST_BUFFER).unwrap(), 0x0201);
        assert_eq!(read_le::<u32>(&TEST_BUFFER).unwrap(), 0x0403_0201);
        assert_eq!(read_le::<u64>(&TEST_BUFFER).unwrap(), 0x0807_0605_0403_0201);
    }

    #[test]
    fn read_le_at_advances() {
        let mut offset = 0;
        assert_eq!(read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap(), 0x0201);
        assert_eq!(offset, 2);
        assert_eq!(
            read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap(),
            0x0605_0403
        );
        assert_eq!(offset, 6);
    }

    #[test]
    fn errors() {
        let buffer = [0xFF, 0xFF, 0xFF];
        assert!(matches!(read_le::<u32>(&buffer), Err(Error::OutOfBounds)));

        let mut offset = 2;
        assert!(matches!(
            read_le_at::<u16>(&buffer, &mut offset),
            Err(Error::OutOfBounds)
        ));
        assert_eq!(offset, 2);

        let mut offset = usize::MAX;
        assert!(read_le_at::<u8>(&buffer, &mut offset).is_err());
    }
}

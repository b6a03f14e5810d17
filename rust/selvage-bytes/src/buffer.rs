use selvage_common::{Result, error::Error, fatal::OrFatal};

use crate::align::{align_up, is_aligned};

/// Alignment boundary, in bytes, for performance-sensitive I/O buffers.
pub const IO_BUFFER_ALIGNMENT: usize = 256;

/// A fixed-length, zero-initialized byte buffer whose first byte sits on a
/// power-of-two boundary ([`IO_BUFFER_ALIGNMENT`] unless the caller picks
/// another one).
///
/// The buffer over-allocates by the alignment width and offsets its usable
/// region forward to the next aligned address. The underlying vector is the
/// original allocation; [`AlignedBuf::into_parts`] hands it back together
/// with the offset of the aligned region.
pub struct AlignedBuf {
    /// The underlying allocation, leading padding included.
    inner: Vec<u8>,
    /// Offset from the start of `inner` to the aligned region.
    start: usize,
    /// Requested alignment, a power of two.
    alignment: usize,
}

impl AlignedBuf {
    /// Allocates a zero-filled buffer of `len` usable bytes aligned to
    /// [`IO_BUFFER_ALIGNMENT`], reporting allocation failure as an
    /// `OutOfMemory` error.
    pub fn try_zeroed(len: usize) -> Result<AlignedBuf> {
        Self::try_zeroed_aligned(len, IO_BUFFER_ALIGNMENT)
    }

    /// Allocates a zero-filled buffer of `len` usable bytes aligned to the
    /// given boundary, reporting allocation failure as an `OutOfMemory`
    /// error.
    ///
    /// # Panics
    ///
    /// Panics if `alignment` is not a power of two.
    pub fn try_zeroed_aligned(len: usize, alignment: usize) -> Result<AlignedBuf> {
        let alignment = alignment.max(1);
        assert!(alignment.is_power_of_two());

        let vec_capacity = len.checked_add(alignment).expect("add");
        let mut vec = Vec::new();
        if vec.try_reserve_exact(vec_capacity).is_err() {
            return Err(Error::out_of_memory(vec_capacity));
        }

        let addr = vec.as_ptr() as usize;
        let start = align_up(addr, alignment) - addr;
        vec.resize(start + len, 0);

        let buf = AlignedBuf {
            inner: vec,
            start,
            alignment,
        };
        assert!(is_aligned(buf.as_ptr() as usize, alignment));
        Ok(buf)
    }

    /// Allocates a zero-filled buffer aligned to [`IO_BUFFER_ALIGNMENT`],
    /// terminating the process with a "low memory" diagnostic if the
    /// allocation fails.
    pub fn zeroed(len: usize) -> AlignedBuf {
        Self::try_zeroed(len).or_fatal()
    }

    /// Allocates a zero-filled buffer on the given boundary, terminating
    /// the process with a "low memory" diagnostic if the allocation fails.
    pub fn zeroed_aligned(len: usize, alignment: usize) -> AlignedBuf {
        Self::try_zeroed_aligned(len, alignment).or_fatal()
    }

    /// Allocates an aligned buffer containing a copy of `data`.
    pub fn try_copy_from_slice(data: &[u8]) -> Result<AlignedBuf> {
        let mut buf = Self::try_zeroed(data.len())?;
        buf.as_mut_slice().copy_from_slice(data);
        Ok(buf)
    }

    /// Returns the number of usable bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len() - self.start
    }

    /// Returns true if the buffer holds no usable bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the alignment boundary this buffer was allocated on.
    #[inline]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Returns a pointer to the aligned region.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.as_slice().as_ptr()
    }

    /// Returns a mutable pointer to the aligned region.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Returns the usable bytes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner[self.start..]
    }

    /// Returns the usable bytes as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner[self.start..]
    }

    /// Checks whether the aligned region also satisfies the given boundary.
    pub fn is_aligned_to(&self, alignment: usize) -> bool {
        is_aligned(self.as_ptr() as usize, alignment)
    }

    /// Returns the usable bytes as a slice of `T` values.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length is not a multiple of `size_of::<T>()`.
    #[inline]
    pub fn typed_data<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Returns the usable bytes as a mutable slice of `T` values.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length is not a multiple of `size_of::<T>()`.
    #[inline]
    pub fn typed_data_mut<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        bytemuck::cast_slice_mut(self.as_mut_slice())
    }

    /// Consumes the buffer, returning the original allocation and the
    /// offset at which the aligned region starts within it.
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.inner, self.start)
    }
}

impl std::ops::Deref for AlignedBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::ops::DerefMut for AlignedBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl Clone for AlignedBuf {
    fn clone(&self) -> AlignedBuf {
        let mut buf = AlignedBuf::zeroed_aligned(self.len(), self.alignment);
        buf.as_mut_slice().copy_from_slice(self.as_slice());
        buf
    }
}

impl std::fmt::Debug for AlignedBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("len", &self.len())
            .field("alignment", &self.alignment)
            .field("internal_offset", &self.start)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selvage_common::error::ErrorKind;

    #[test]
    fn test_zeroed_default_alignment() {
        for len in [0, 1, 17, 255, 256, 257, 4096] {
            let buf = AlignedBuf::zeroed(len);
            assert_eq!(buf.len(), len);
            assert_eq!(buf.alignment(), IO_BUFFER_ALIGNMENT);
            assert_eq!(buf.as_ptr() as usize % IO_BUFFER_ALIGNMENT, 0);
            assert!(buf.as_slice().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_custom_alignments() {
        fastrand::seed(0x5e1fa9e);
        for alignment in [1usize, 2, 8, 64, 512, 4096] {
            let len = fastrand::usize(0..10_000);
            let buf = AlignedBuf::zeroed_aligned(len, alignment);
            assert_eq!(buf.len(), len);
            assert!(buf.is_aligned_to(alignment));
        }
    }

    #[test]
    fn test_aligned_region_within_allocation() {
        let buf = AlignedBuf::zeroed(1000);
        let alignment = buf.alignment();
        let (vec, start) = buf.into_parts();
        assert!(start < alignment);
        assert_eq!(vec.len(), start + 1000);
        assert_eq!((vec.as_ptr() as usize + start) % alignment, 0);
    }

    #[test]
    fn test_copy_from_slice() {
        let data: Vec<u8> = (0..=255).collect();
        let buf = AlignedBuf::try_copy_from_slice(&data).unwrap();
        assert_eq!(buf.as_slice(), &data[..]);
        assert_eq!(buf.as_ptr() as usize % IO_BUFFER_ALIGNMENT, 0);
    }

    #[test]
    fn test_typed_data() {
        let mut buf = AlignedBuf::zeroed(64);
        {
            let words = buf.typed_data_mut::<u64>();
            assert_eq!(words.len(), 8);
            words[0] = 0x0102030405060708;
            words[7] = u64::MAX;
        }
        assert_eq!(buf.typed_data::<u64>()[0], 0x0102030405060708);
        assert_eq!(&buf.as_slice()[56..], &[0xff; 8]);
    }

    #[test]
    fn test_write_read_through_deref() {
        let mut buf = AlignedBuf::zeroed(16);
        buf[0] = 0xde;
        buf[15] = 0xad;
        assert_eq!(buf[0], 0xde);
        assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn test_clone_preserves_contents_and_alignment() {
        let mut buf = AlignedBuf::zeroed_aligned(100, 512);
        buf.as_mut_slice().fill(0xab);
        let copy = buf.clone();
        assert_eq!(copy.as_slice(), buf.as_slice());
        assert_eq!(copy.alignment(), 512);
        assert!(copy.is_aligned_to(512));
    }

    #[test]
    fn test_try_zeroed_reports_oom() {
        let result = AlignedBuf::try_zeroed(usize::MAX / 2);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::OutOfMemory { .. }
        ));
    }
}

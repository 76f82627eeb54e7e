/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::util::check_slice_size;
use crate::{FilterChannels, FilterError};
use std::borrow::Cow;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Immutable pixel buffer.
///
/// Samples are interleaved row-major with `stride = width * channels`,
/// the slice always holds exactly `height * stride` items.
#[derive(Debug, Clone)]
pub struct PixelBuffer<'a, T: Clone + Copy + Default + Debug> {
    data: Cow<'a, [T]>,
    width: u32,
    height: u32,
    channels: FilterChannels,
}

/// Mutable pixel buffer, borrows caller memory or owns a vector.
///
/// Filters never change its geometry, only samples are rewritten.
#[derive(Debug)]
pub struct PixelBufferMut<'a, T: Clone + Copy + Default + Debug> {
    data: BufferStore<'a, T>,
    width: u32,
    height: u32,
    channels: FilterChannels,
}

macro_rules! out_of_bounds {
    ($img:expr, $x:expr, $y:expr, $c:expr) => {
        FilterError::OutOfBounds {
            x: $x,
            y: $y,
            c: $c,
            width: $img.width,
            height: $img.height,
            channels: $img.channels.channels(),
        }
    };
}

impl<'a, T: Clone + Copy + Default + Debug> PixelBuffer<'a, T> {
    /// Allocates default image layout for given [FilterChannels]
    pub fn alloc(width: u32, height: u32, channels: FilterChannels) -> Self {
        Self {
            data: Cow::Owned(vec![
                T::default();
                width as usize * height as usize * channels.channels()
            ]),
            width,
            height,
            channels,
        }
    }

    /// Takes ownership of existing samples
    pub fn new(
        data: Vec<T>,
        width: u32,
        height: u32,
        channels: FilterChannels,
    ) -> Result<Self, FilterError> {
        check_slice_size(&data, width, height, channels.channels())?;
        Ok(Self {
            data: Cow::Owned(data),
            width,
            height,
            channels,
        })
    }

    /// Borrows existing data
    pub fn borrow(
        arr: &'a [T],
        width: u32,
        height: u32,
        channels: FilterChannels,
    ) -> Result<Self, FilterError> {
        check_slice_size(arr, width, height, channels.channels())?;
        Ok(Self {
            data: Cow::Borrowed(arr),
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> FilterChannels {
        self.channels
    }

    /// Items per row
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels.channels()
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Bounds checked sample read
    pub fn get(&self, x: u32, y: u32, c: usize) -> Result<T, FilterError> {
        if x >= self.width || y >= self.height || c >= self.channels.channels() {
            return Err(out_of_bounds!(self, x, y, c));
        }
        Ok(self.data[y as usize * self.row_stride() + x as usize * self.channels.channels() + c])
    }

    /// Checks if it is matches the size of the other image
    #[inline]
    pub fn size_matches_mut(&self, other: &PixelBufferMut<'_, T>) -> Result<(), FilterError> {
        if self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
        {
            return Ok(());
        }
        Err(FilterError::ShapeMismatch)
    }

    /// Deep clone as mutable image
    pub fn clone_as_mut<'f>(&self) -> PixelBufferMut<'f, T> {
        PixelBufferMut {
            data: BufferStore::Owned(self.data.to_vec()),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Deep copy into a mutable image of the same geometry
    pub fn copy_to_mut(&self, dst: &mut PixelBufferMut<T>) -> Result<(), FilterError> {
        self.size_matches_mut(dst)?;
        dst.data.borrow_mut().copy_from_slice(self.data.as_ref());
        Ok(())
    }
}

impl<'a, T: Clone + Copy + Default + Debug> PixelBufferMut<'a, T> {
    /// Allocates default image layout for given [FilterChannels]
    pub fn alloc(width: u32, height: u32, channels: FilterChannels) -> Self {
        Self {
            data: BufferStore::Owned(vec![
                T::default();
                width as usize * height as usize * channels.channels()
            ]),
            width,
            height,
            channels,
        }
    }

    /// Takes ownership of existing samples
    pub fn new(
        data: Vec<T>,
        width: u32,
        height: u32,
        channels: FilterChannels,
    ) -> Result<Self, FilterError> {
        check_slice_size(&data, width, height, channels.channels())?;
        Ok(Self {
            data: BufferStore::Owned(data),
            width,
            height,
            channels,
        })
    }

    /// Mutable borrows existing data
    pub fn borrow(
        arr: &'a mut [T],
        width: u32,
        height: u32,
        channels: FilterChannels,
    ) -> Result<Self, FilterError> {
        check_slice_size(arr, width, height, channels.channels())?;
        Ok(Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> FilterChannels {
        self.channels
    }

    /// Items per row
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels.channels()
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        self.data.borrow()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.borrow_mut()
    }

    /// Bounds checked sample read
    pub fn get(&self, x: u32, y: u32, c: usize) -> Result<T, FilterError> {
        if x >= self.width || y >= self.height || c >= self.channels.channels() {
            return Err(out_of_bounds!(self, x, y, c));
        }
        Ok(self.data.borrow()
            [y as usize * self.row_stride() + x as usize * self.channels.channels() + c])
    }

    /// Bounds checked sample write
    pub fn set(&mut self, x: u32, y: u32, c: usize, value: T) -> Result<(), FilterError> {
        if x >= self.width || y >= self.height || c >= self.channels.channels() {
            return Err(out_of_bounds!(self, x, y, c));
        }
        let idx = y as usize * self.row_stride() + x as usize * self.channels.channels() + c;
        self.data.borrow_mut()[idx] = value;
        Ok(())
    }

    #[inline]
    pub fn to_immutable_ref(&self) -> PixelBuffer<'_, T> {
        PixelBuffer {
            data: Cow::Borrowed(self.data.borrow()),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Releases samples, copying them if memory was borrowed
    pub fn into_vec(self) -> Vec<T> {
        match self.data {
            BufferStore::Borrowed(p_ref) => p_ref.to_vec(),
            BufferStore::Owned(vec) => vec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_length() {
        let data = vec![0u8; 10];
        let err = PixelBuffer::new(data, 3, 3, FilterChannels::Gray).unwrap_err();
        assert!(matches!(err, FilterError::BufferSizeMismatch(_)));
        let mut store = vec![0u8; 35];
        assert!(PixelBufferMut::borrow(&mut store, 3, 3, FilterChannels::Rgba).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut image = PixelBufferMut::<u8>::alloc(4, 3, FilterChannels::Rgba);
        image.set(3, 2, 3, 77).unwrap();
        assert_eq!(image.get(3, 2, 3).unwrap(), 77);
        assert_eq!(image.data()[image.data().len() - 1], 77);
        assert!(matches!(
            image.set(4, 0, 0, 1),
            Err(FilterError::OutOfBounds { x: 4, .. })
        ));
        assert!(image.get(0, 3, 0).is_err());
        assert!(image.get(0, 0, 4).is_err());
    }

    #[test]
    fn test_borrowed_buffers_share_memory() {
        let mut store = vec![0u16; 6];
        {
            let mut image = PixelBufferMut::borrow(&mut store, 3, 2, FilterChannels::Gray).unwrap();
            image.set(1, 1, 0, 900).unwrap();
            let view = image.to_immutable_ref();
            assert_eq!(view.get(1, 1, 0).unwrap(), 900);
        }
        assert_eq!(store[4], 900);
    }

    #[test]
    fn test_copy_to_mut() {
        let src = PixelBuffer::new((0u8..16).collect(), 4, 4, FilterChannels::Gray).unwrap();
        let mut dst = PixelBufferMut::alloc(4, 4, FilterChannels::Gray);
        src.copy_to_mut(&mut dst).unwrap();
        assert_eq!(dst.data(), src.data());
        let mut wrong = PixelBufferMut::<u8>::alloc(4, 4, FilterChannels::Rgba);
        assert_eq!(
            src.copy_to_mut(&mut wrong).unwrap_err(),
            FilterError::ShapeMismatch
        );
    }

    #[test]
    fn test_clone_as_mut_is_detached() {
        let src = PixelBuffer::new(vec![1u8, 2, 3, 4, 5, 6], 3, 2, FilterChannels::Gray).unwrap();
        let mut copy = src.clone_as_mut();
        assert_eq!(copy.data(), src.data());
        assert_eq!((copy.width(), copy.height()), (3, 2));
        copy.data_mut()[0] = 42;
        assert_eq!(src.data()[0], 1);
        assert!(src.size_matches_mut(&copy).is_ok());
    }
}

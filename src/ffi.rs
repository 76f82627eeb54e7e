// Copyright (c) Radzivon Bartoshyk. All rights reserved.

//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
//! C ABI over packed RGBA8 buffers.
//!
//! Every function returns a [StatusCode] as `int`.

use crate::dispatch::execute;
use crate::{
    BackendTag, FilterChannels, FilterError, FilterKind, PixelBuffer, PixelBufferMut, StatusCode,
};
use std::os::raw::c_int;

/// # Safety
///
/// `src` must be valid for reads and `dst` valid for writes of
/// `width * height * 4` bytes.
unsafe fn run_rgba8(
    kind: FilterKind,
    backend: BackendTag,
    width: c_int,
    height: c_int,
    src: *const u8,
    dst: *mut u8,
) -> c_int {
    let length = match check_arguments(width, height, src, dst) {
        Ok(length) => length,
        Err(err) => {
            log::debug!("{backend} {kind} rejected at C boundary: {err}");
            return err.status().code();
        }
    };
    let (src, dst) = unsafe {
        (
            std::slice::from_raw_parts(src, length),
            std::slice::from_raw_parts_mut(dst, length),
        )
    };
    let (width, height) = (width as u32, height as u32);
    let status = PixelBuffer::borrow(src, width, height, FilterChannels::Rgba).and_then(|src| {
        let mut dst = PixelBufferMut::borrow(dst, width, height, FilterChannels::Rgba)?;
        Ok(execute(kind.name(), backend, &src, &mut dst))
    });
    match status {
        Ok(status) => status.code(),
        Err(err) => err.status().code(),
    }
}

fn check_arguments(
    width: c_int,
    height: c_int,
    src: *const u8,
    dst: *mut u8,
) -> Result<usize, FilterError> {
    if src.is_null() || dst.is_null() {
        return Err(FilterError::InvalidArguments("null image pointer"));
    }
    if width <= 0 || height <= 0 {
        return Err(FilterError::InvalidArguments("image must not be empty"));
    }
    let length = (width as usize)
        .checked_mul(height as usize)
        .and_then(|x| x.checked_mul(4))
        .filter(|&x| x <= isize::MAX as usize)
        .ok_or(FilterError::InvalidArguments("image size overflows"))?;
    let src_start = src as usize;
    let dst_start = dst as usize;
    if src_start < dst_start.saturating_add(length)
        && dst_start < src_start.saturating_add(length)
    {
        return Err(FilterError::InvalidArguments("source and destination overlap"));
    }
    Ok(length)
}

macro_rules! c_entry {
    ($name:ident, $kind:expr, $backend:expr) => {
        /// # Safety
        ///
        /// `src` must be valid for reads and `dst` valid for writes of
        /// `width * height * 4` bytes, the two regions must not overlap.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            width: c_int,
            height: c_int,
            src: *const u8,
            dst: *mut u8,
        ) -> c_int {
            unsafe { run_rgba8($kind, $backend, width, height, src, dst) }
        }
    };
}

c_entry!(filters_run_rs_blur, FilterKind::Blur, BackendTag::Rs);
c_entry!(filters_run_fs_blur, FilterKind::Blur, BackendTag::Fs);
c_entry!(filters_run_rs_gaussian, FilterKind::Gaussian, BackendTag::Rs);
c_entry!(filters_run_fs_gaussian, FilterKind::Gaussian, BackendTag::Fs);
c_entry!(filters_run_rs_laplace, FilterKind::Laplace, BackendTag::Rs);
c_entry!(filters_run_fs_laplace, FilterKind::Laplace, BackendTag::Fs);
c_entry!(filters_run_rs_sobel, FilterKind::Sobel, BackendTag::Rs);
c_entry!(filters_run_fs_sobel, FilterKind::Sobel, BackendTag::Fs);
c_entry!(filters_run_rs_harris, FilterKind::Harris, BackendTag::Rs);
c_entry!(filters_run_fs_harris, FilterKind::Harris, BackendTag::Fs);

/// Success status of the C entries.
pub const FILTERS_OK: c_int = StatusCode::Ok as c_int;

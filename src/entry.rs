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
//! Named entry points, one per filter and backend pair.

use crate::dispatch::execute;
use crate::{BackendTag, FilterKind, FilterSample, PixelBuffer, PixelBufferMut, StatusCode};

macro_rules! named_entry {
    ($name:ident, $kind:expr, $backend:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<T: FilterSample>(
            input: &PixelBuffer<T>,
            output: &mut PixelBufferMut<T>,
        ) -> StatusCode {
            execute($kind.name(), $backend, input, output)
        }
    };
}

named_entry!(run_rs_blur, FilterKind::Blur, BackendTag::Rs, "3x3 mean, reference backend");
named_entry!(run_fs_blur, FilterKind::Blur, BackendTag::Fs, "3x3 mean, scheduled backend");
named_entry!(
    run_rs_gaussian,
    FilterKind::Gaussian,
    BackendTag::Rs,
    "3x3 gaussian, reference backend"
);
named_entry!(
    run_fs_gaussian,
    FilterKind::Gaussian,
    BackendTag::Fs,
    "3x3 gaussian, scheduled backend"
);
named_entry!(run_rs_laplace, FilterKind::Laplace, BackendTag::Rs, "Laplacian, reference backend");
named_entry!(run_fs_laplace, FilterKind::Laplace, BackendTag::Fs, "Laplacian, scheduled backend");
named_entry!(run_rs_sobel, FilterKind::Sobel, BackendTag::Rs, "Sobel magnitude, reference backend");
named_entry!(run_fs_sobel, FilterKind::Sobel, BackendTag::Fs, "Sobel magnitude, scheduled backend");
named_entry!(run_rs_harris, FilterKind::Harris, BackendTag::Rs, "Harris response, reference backend");
named_entry!(run_fs_harris, FilterKind::Harris, BackendTag::Fs, "Harris response, scheduled backend");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_images::textured;
    use crate::FilterChannels;

    type Entry = fn(&PixelBuffer<u8>, &mut PixelBufferMut<u8>) -> StatusCode;

    #[test]
    fn test_pairs_match() {
        let pairs: [(Entry, Entry); 5] = [
            (run_rs_blur, run_fs_blur),
            (run_rs_gaussian, run_fs_gaussian),
            (run_rs_laplace, run_fs_laplace),
            (run_rs_sobel, run_fs_sobel),
            (run_rs_harris, run_fs_harris),
        ];
        let src = textured::<u8>(40, 27, FilterChannels::Rgba);
        for (rs, fs) in pairs {
            let mut a = PixelBufferMut::alloc(40, 27, FilterChannels::Rgba);
            let mut b = PixelBufferMut::alloc(40, 27, FilterChannels::Rgba);
            assert_eq!(rs(&src, &mut a), StatusCode::Ok);
            assert_eq!(fs(&src, &mut b), StatusCode::Ok);
            assert_eq!(a.data(), b.data());
        }
    }

    #[test]
    fn test_entry_rejects_small() {
        let src = textured::<u8>(2, 9, FilterChannels::Gray);
        let mut dst = PixelBufferMut::alloc(2, 9, FilterChannels::Gray);
        assert_eq!(run_fs_harris(&src, &mut dst), StatusCode::ImageTooSmall);
    }
}

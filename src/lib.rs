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
#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Stencil image filters (box blur, gaussian, Laplace, Sobel, Harris) with two
//! interchangeable execution backends.
//!
//! [BackendTag::Rs] runs a straightforward per pixel loop and materializes the
//! intermediates of multi-pass kernels. [BackendTag::Fs] cuts the image into
//! tiles, fuses multi-pass kernels per tile and runs bands of tiles in
//! parallel. Both produce the same samples.
//!
//! The dispatch facade [execute] resolves a filter by name, validates the
//! request and returns a [StatusCode]; on failure the output is untouched.

mod backend;
mod channels_configuration;
mod corners;
mod dispatch;
mod edge_mode;
mod entry;
#[cfg(feature = "capi")]
#[cfg_attr(docsrs, doc(cfg(feature = "capi")))]
pub mod ffi;
mod gaussian_kernel;
mod image;
mod kernel;
mod status;
mod stencil;
mod threading_policy;
mod to_storage;
mod util;

pub use backend::{
    run_backend, BackendTag, FilterBackend, FusedScheduled, ReferenceScalar, TileSchedule,
};
pub use channels_configuration::FilterChannels;
pub use corners::{
    harris_corners, harris_overlay, harris_response, mark_corners, Corner, HarrisParams,
};
pub use dispatch::{execute, execute_with_params, try_execute, ExecutionRequest, FilterParams};
pub use edge_mode::EdgeMode;
pub use entry::{
    run_fs_blur, run_fs_gaussian, run_fs_harris, run_fs_laplace, run_fs_sobel, run_rs_blur,
    run_rs_gaussian, run_rs_harris, run_rs_laplace, run_rs_sobel,
};
pub use gaussian_kernel::{gaussian_kernel_1d, sigma_size};
pub use image::{BufferStore, PixelBuffer, PixelBufferMut};
pub use kernel::{FilterKind, Kernel, HARRIS_SENSITIVITY, MAX_WEIGHTED_RADIUS};
pub use status::StatusCode;
pub use threading_policy::ThreadingPolicy;
pub use to_storage::{FilterSample, ToStorage};
pub use util::{FilterError, MismatchedSize};

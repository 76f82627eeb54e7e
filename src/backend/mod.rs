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
mod reference;
mod scheduled;
mod tile;

pub use reference::ReferenceScalar;
pub use scheduled::FusedScheduled;
pub use tile::TileSchedule;

use crate::stencil::SourceView;
use crate::{FilterError, FilterSample, Kernel, PixelBuffer, PixelBufferMut};
use std::str::FromStr;
use tile::Tile;

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Selects execution strategy, carries no state
pub enum BackendTag {
    /// Reference scalar, row-major per pixel loop
    Rs,
    /// Fused and scheduled, tiled and parallel
    Fs,
}

impl BackendTag {
    pub const fn name(self) -> &'static str {
        match self {
            BackendTag::Rs => "RS",
            BackendTag::Fs => "FS",
        }
    }
}

impl std::fmt::Display for BackendTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendTag {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            x if x.eq_ignore_ascii_case("rs") => Ok(BackendTag::Rs),
            x if x.eq_ignore_ascii_case("fs") => Ok(BackendTag::Fs),
            _ => Err(FilterError::InvalidArguments("unknown backend")),
        }
    }
}

/// Execution strategy for a [Kernel].
///
/// Implementations must validate before touching `output` and produce the
/// same samples as [ReferenceScalar].
pub trait FilterBackend {
    fn tag(&self) -> BackendTag;

    fn run<T: FilterSample>(
        &self,
        kernel: &Kernel,
        input: &PixelBuffer<T>,
        output: &mut PixelBufferMut<T>,
    ) -> Result<(), FilterError>;
}

/// Runs `kernel` with the backend selected by `tag`.
pub fn run_backend<T: FilterSample>(
    tag: BackendTag,
    kernel: &Kernel,
    input: &PixelBuffer<T>,
    output: &mut PixelBufferMut<T>,
    schedule: TileSchedule,
) -> Result<(), FilterError> {
    match tag {
        BackendTag::Rs => ReferenceScalar.run(kernel, input, output),
        BackendTag::Fs => FusedScheduled::new(schedule).run(kernel, input, output),
    }
}

/// Checks geometry, nothing is written.
pub(crate) fn validate<T: FilterSample>(
    kernel: &Kernel,
    input: &PixelBuffer<T>,
    output: &PixelBufferMut<T>,
) -> Result<(), FilterError> {
    input.size_matches_mut(output)?;
    let required = kernel.min_extent();
    if input.width().min(input.height()) < required {
        return Err(FilterError::ImageTooSmall {
            width: input.width(),
            height: input.height(),
            required,
        });
    }
    Ok(())
}

/// Writes every sample of `tile` from `eval`, alpha passes through when the
/// kernel preserves it. `dst` starts at row `origin_y`.
pub(crate) fn pointwise_tile<T: FilterSample>(
    kernel: &Kernel,
    view: &SourceView<T>,
    dst: &mut [T],
    origin_y: usize,
    tile: Tile,
    eval: impl Fn(&SourceView<T>, usize, usize, usize) -> f32,
) {
    let cn = view.cn;
    let stride = view.width * cn;
    let alpha = alpha_passthrough(kernel, view);
    for y in tile.y0..tile.y1 {
        let row = &mut dst[(y - origin_y) * stride..(y - origin_y + 1) * stride];
        for x in tile.x0..tile.x1 {
            for (c, dst) in row[x * cn..(x + 1) * cn].iter_mut().enumerate() {
                *dst = if alpha == Some(c) {
                    view.raw(x, y, c)
                } else {
                    T::from_f32(eval(view, x, y, c))
                };
            }
        }
    }
}

/// Stores one response into every colour channel of a pixel.
#[inline(always)]
pub(crate) fn store_response<T: FilterSample>(
    view: &SourceView<T>,
    alpha: Option<usize>,
    pixel: &mut [T],
    x: usize,
    y: usize,
    response: f32,
) {
    for (c, dst) in pixel.iter_mut().enumerate() {
        *dst = if alpha == Some(c) {
            view.raw(x, y, c)
        } else {
            T::from_f32(response)
        };
    }
}

#[inline]
pub(crate) fn alpha_passthrough<T: FilterSample>(
    kernel: &Kernel,
    view: &SourceView<T>,
) -> Option<usize> {
    if kernel.kind().preserves_alpha() {
        view.layout.alpha_index()
    } else {
        None
    }
}

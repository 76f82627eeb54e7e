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
use crate::backend::tile::{band_tiles, Tile};
use crate::backend::{
    alpha_passthrough, pointwise_tile, store_response, validate, BackendTag, FilterBackend,
    TileSchedule,
};
use crate::stencil::{
    box_mean, gaussian_horizontal, harris_response, intensity_gradient, laplace,
    sobel_magnitude, weighted_sum, SourceView,
};
use crate::{FilterError, FilterKind, FilterSample, Kernel, PixelBuffer, PixelBufferMut};
use novtb::{ParallelZonedIterator, TbSliceMut};

/// Tiled execution with per-tile fusion of multi-pass kernels.
///
/// Gaussian and Harris keep their intermediate inside the tile, recomputing a
/// halo of `radius` rows (and columns for Harris) shared with neighbouring
/// tiles. Bands of tiles write disjoint output rows and run on a worker pool
/// sized by [crate::ThreadingPolicy].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FusedScheduled {
    schedule: TileSchedule,
}

impl FusedScheduled {
    pub fn new(schedule: TileSchedule) -> Self {
        FusedScheduled { schedule }
    }

    pub fn schedule(&self) -> TileSchedule {
        self.schedule
    }
}

impl FilterBackend for FusedScheduled {
    fn tag(&self) -> BackendTag {
        BackendTag::Fs
    }

    fn run<T: FilterSample>(
        &self,
        kernel: &Kernel,
        input: &PixelBuffer<T>,
        output: &mut PixelBufferMut<T>,
    ) -> Result<(), FilterError> {
        validate(kernel, input, output)?;
        let view = SourceView::new(input, kernel.edge_mode());
        let tile_width = self.schedule.effective_width(view.width);
        let tile_height = self.schedule.effective_height(view.height);
        let band_stride = view.width * view.cn * tile_height;
        let bands = view.height.div_ceil(tile_height);
        let thread_count = self.schedule.threading_policy.thread_count(bands);

        log::trace!(
            "{} tiles {tile_width}x{tile_height}, {bands} bands on {thread_count} threads",
            kernel.kind()
        );

        let dst = output.data_mut();
        if thread_count > 1 {
            let pool = novtb::ThreadPool::new(thread_count);
            dst.tb_par_chunks_mut(band_stride)
                .for_each_enumerated(&pool, |band, rows| {
                    process_band(kernel, &view, rows, band * tile_height, tile_width);
                });
        } else {
            for (band, rows) in dst.chunks_mut(band_stride).enumerate() {
                process_band(kernel, &view, rows, band * tile_height, tile_width);
            }
        }
        Ok(())
    }
}

fn process_band<T: FilterSample>(
    kernel: &Kernel,
    view: &SourceView<T>,
    rows: &mut [T],
    y0: usize,
    tile_width: usize,
) {
    let y1 = y0 + rows.len() / (view.width * view.cn);
    let mut scratch = Vec::new();
    for tile in band_tiles(y0, y1, view.width, tile_width) {
        match kernel.kind() {
            FilterKind::Blur => {
                let radius = kernel.radius();
                pointwise_tile(kernel, view, rows, y0, tile, |v, x, y, c| {
                    box_mean(v, x, y, c, radius)
                });
            }
            FilterKind::Laplace => pointwise_tile(kernel, view, rows, y0, tile, laplace),
            FilterKind::Sobel => pointwise_tile(kernel, view, rows, y0, tile, sobel_magnitude),
            FilterKind::Gaussian => gaussian_tile(kernel, view, rows, y0, tile, &mut scratch),
            FilterKind::Harris => harris_tile(kernel, view, rows, y0, tile, &mut scratch),
        }
    }
}

/// Horizontal pass over the tile columns for `height + 2r` halo rows, then
/// the vertical pass straight into the output.
fn gaussian_tile<T: FilterSample>(
    kernel: &Kernel,
    view: &SourceView<T>,
    rows: &mut [T],
    origin_y: usize,
    tile: Tile,
    scratch: &mut Vec<f32>,
) {
    let weights = kernel.weights();
    let r = kernel.radius() as usize;
    let cn = view.cn;
    let stride = view.width * cn;
    let lane = tile.width() * cn;
    let halo_rows = tile.height() + 2 * r;

    scratch.clear();
    scratch.resize(halo_rows * lane, 0.);
    for (i, halo_row) in scratch.chunks_exact_mut(lane).enumerate() {
        let sy = view.resolve_y(tile.y0 as isize + i as isize - r as isize);
        for x in tile.x0..tile.x1 {
            for c in 0..cn {
                halo_row[(x - tile.x0) * cn + c] = gaussian_horizontal(view, x, sy, c, weights);
            }
        }
    }

    for y in tile.y0..tile.y1 {
        let row = &mut rows[(y - origin_y) * stride..(y - origin_y + 1) * stride];
        for x in tile.x0..tile.x1 {
            for c in 0..cn {
                let column = (x - tile.x0) * cn + c;
                let v = weighted_sum(weights, |j| scratch[(y - tile.y0 + j) * lane + column]);
                row[x * cn + c] = T::from_f32(v);
            }
        }
    }
}

/// Gradients for the tile grown by `r` on every side, then the windowed
/// response per output pixel.
fn harris_tile<T: FilterSample>(
    kernel: &Kernel,
    view: &SourceView<T>,
    rows: &mut [T],
    origin_y: usize,
    tile: Tile,
    gradients: &mut Vec<f32>,
) {
    let weights = kernel.weights();
    let k = kernel.sensitivity();
    let r = kernel.radius() as usize;
    let cn = view.cn;
    let stride = view.width * cn;
    let alpha = alpha_passthrough(kernel, view);
    let halo_width = tile.width() + 2 * r;
    let halo_height = tile.height() + 2 * r;

    gradients.clear();
    gradients.resize(halo_width * halo_height * 2, 0.);
    for (i, halo_row) in gradients.chunks_exact_mut(halo_width * 2).enumerate() {
        let sy = view.resolve_y(tile.y0 as isize + i as isize - r as isize);
        for (j, g) in halo_row.chunks_exact_mut(2).enumerate() {
            let sx = view.resolve_x(tile.x0 as isize + j as isize - r as isize);
            let (gx, gy) = intensity_gradient(view, sx, sy);
            g[0] = gx;
            g[1] = gy;
        }
    }

    for y in tile.y0..tile.y1 {
        let row = &mut rows[(y - origin_y) * stride..(y - origin_y + 1) * stride];
        for x in tile.x0..tile.x1 {
            let response = harris_response(weights, k, |i, j| {
                let idx = ((y - tile.y0 + j) * halo_width + (x - tile.x0 + i)) * 2;
                (gradients[idx], gradients[idx + 1])
            });
            store_response(view, alpha, &mut row[x * cn..(x + 1) * cn], x, y, response);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_images::textured;
    use crate::{EdgeMode, FilterChannels, ReferenceScalar, ThreadingPolicy};
    use std::num::NonZeroUsize;

    fn schedules() -> Vec<TileSchedule> {
        vec![
            TileSchedule::default(),
            TileSchedule::new(7, 5, ThreadingPolicy::Single),
            TileSchedule::new(4, 3, ThreadingPolicy::Fixed(NonZeroUsize::new(3).unwrap())),
            TileSchedule::new(1, 1, ThreadingPolicy::Adaptive),
            TileSchedule::new(1000, 1000, ThreadingPolicy::Adaptive),
        ]
    }

    fn kernels() -> Vec<Kernel> {
        vec![
            Kernel::blur(1),
            Kernel::blur(3),
            Kernel::gaussian(1).unwrap(),
            Kernel::gaussian(3).unwrap(),
            Kernel::laplace(),
            Kernel::sobel(),
            Kernel::harris(1).unwrap(),
            Kernel::harris(2).unwrap(),
        ]
    }

    fn compare_backends<T: FilterSample>(src: &PixelBuffer<T>, kernel: &Kernel, tolerance: f32) {
        let mut reference = PixelBufferMut::alloc(src.width(), src.height(), src.channels());
        ReferenceScalar.run(kernel, src, &mut reference).unwrap();
        for schedule in schedules() {
            let mut scheduled = PixelBufferMut::alloc(src.width(), src.height(), src.channels());
            FusedScheduled::new(schedule)
                .run(kernel, src, &mut scheduled)
                .unwrap();
            for (i, (a, b)) in reference
                .data()
                .iter()
                .zip(scheduled.data().iter())
                .enumerate()
            {
                let diff = (a.to_f32() - b.to_f32()).abs();
                assert!(
                    diff <= tolerance,
                    "Diff expected to be less than {tolerance}, but it was {diff} at {i} for {kernel:?} with {schedule:?}"
                );
            }
        }
    }

    #[test]
    fn test_fs_matches_rs_u8() {
        for channels in [FilterChannels::Gray, FilterChannels::Rgba] {
            let src = textured::<u8>(37, 23, channels);
            for kernel in kernels() {
                compare_backends(&src, &kernel, 0.);
            }
        }
    }

    #[test]
    fn test_fs_matches_rs_u16() {
        let src = textured::<u16>(19, 31, FilterChannels::Rgba);
        for kernel in kernels() {
            compare_backends(&src, &kernel, 0.);
        }
    }

    #[test]
    fn test_fs_matches_rs_f32() {
        for channels in [FilterChannels::Gray, FilterChannels::Rgba] {
            let src = textured::<f32>(29, 17, channels);
            for kernel in kernels() {
                compare_backends(&src, &kernel, 1e-5);
            }
        }
    }

    #[test]
    fn test_fs_matches_rs_f16() {
        let src = textured::<half::f16>(23, 12, FilterChannels::Rgba);
        for kernel in kernels() {
            compare_backends(&src, &kernel, 0.);
        }
    }

    #[test]
    fn test_fs_matches_rs_across_edge_modes() {
        let src = textured::<u8>(21, 14, FilterChannels::Gray);
        for edge_mode in [
            EdgeMode::Clamp,
            EdgeMode::Wrap,
            EdgeMode::Reflect,
            EdgeMode::Reflect101,
        ] {
            for kernel in kernels() {
                compare_backends(&src, &kernel.with_edge_mode(edge_mode), 0.);
            }
        }
    }

    #[test]
    fn test_fs_minimum_extent_image() {
        // image exactly as large as the kernel footprint
        let src = textured::<u8>(7, 7, FilterChannels::Rgba);
        compare_backends(&src, &Kernel::gaussian(3).unwrap(), 0.);
        compare_backends(&src, &Kernel::harris(3).unwrap(), 0.);
    }

    #[test]
    fn test_fs_rejects_before_writing() {
        let src = textured::<u8>(2, 2, FilterChannels::Gray);
        let mut dst = PixelBufferMut::new(vec![9u8; 4], 2, 2, FilterChannels::Gray).unwrap();
        let err = FusedScheduled::default()
            .run(&Kernel::sobel(), &src, &mut dst)
            .unwrap_err();
        assert!(matches!(err, FilterError::ImageTooSmall { required: 3, .. }));
        assert_eq!(dst.data(), &[9, 9, 9, 9]);
    }

    #[test]
    fn test_schedule_is_kept() {
        for schedule in schedules() {
            assert_eq!(FusedScheduled::new(schedule).schedule(), schedule);
        }
        assert_eq!(FusedScheduled::default().schedule(), TileSchedule::default());
    }
}

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
use crate::backend::tile::Tile;
use crate::backend::{
    alpha_passthrough, pointwise_tile, store_response, validate, BackendTag, FilterBackend,
};
use crate::stencil::{
    box_mean, gaussian_horizontal, harris_response, intensity_gradient, laplace,
    sobel_magnitude, weighted_sum, SourceView,
};
use crate::{FilterError, FilterKind, FilterSample, Kernel, PixelBuffer, PixelBufferMut};

/// Straightforward per-pixel loop in row-major order on the calling thread.
///
/// Multi-pass kernels materialize their intermediate for the whole image.
/// This is the oracle [crate::FusedScheduled] is checked against.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReferenceScalar;

impl FilterBackend for ReferenceScalar {
    fn tag(&self) -> BackendTag {
        BackendTag::Rs
    }

    fn run<T: FilterSample>(
        &self,
        kernel: &Kernel,
        input: &PixelBuffer<T>,
        output: &mut PixelBufferMut<T>,
    ) -> Result<(), FilterError> {
        validate(kernel, input, output)?;
        let view = SourceView::new(input, kernel.edge_mode());
        let whole = Tile {
            x0: 0,
            x1: view.width,
            y0: 0,
            y1: view.height,
        };
        let dst = output.data_mut();
        match kernel.kind() {
            FilterKind::Blur => {
                let radius = kernel.radius();
                pointwise_tile(kernel, &view, dst, 0, whole, |v, x, y, c| {
                    box_mean(v, x, y, c, radius)
                });
            }
            FilterKind::Laplace => pointwise_tile(kernel, &view, dst, 0, whole, laplace),
            FilterKind::Sobel => pointwise_tile(kernel, &view, dst, 0, whole, sobel_magnitude),
            FilterKind::Gaussian => gaussian_reference(kernel, &view, dst),
            FilterKind::Harris => harris_reference(kernel, &view, dst),
        }
        Ok(())
    }
}

fn gaussian_reference<T: FilterSample>(kernel: &Kernel, view: &SourceView<T>, dst: &mut [T]) {
    let weights = kernel.weights();
    let r = kernel.radius() as isize;
    let cn = view.cn;
    let stride = view.width * cn;

    let mut horizontal = vec![0f32; view.height * stride];
    for (y, row) in horizontal.chunks_exact_mut(stride).enumerate() {
        for x in 0..view.width {
            for c in 0..cn {
                row[x * cn + c] = gaussian_horizontal(view, x, y, c, weights);
            }
        }
    }

    for (y, row) in dst.chunks_exact_mut(stride).enumerate() {
        for x in 0..view.width {
            for c in 0..cn {
                let v = weighted_sum(weights, |j| {
                    let sy = view.resolve_y(y as isize + j as isize - r);
                    horizontal[sy * stride + x * cn + c]
                });
                row[x * cn + c] = T::from_f32(v);
            }
        }
    }
}

fn harris_reference<T: FilterSample>(kernel: &Kernel, view: &SourceView<T>, dst: &mut [T]) {
    let weights = kernel.weights();
    let k = kernel.sensitivity();
    let r = kernel.radius() as isize;
    let cn = view.cn;
    let alpha = alpha_passthrough(kernel, view);

    let mut gradients = vec![(0f32, 0f32); view.width * view.height];
    for (y, row) in gradients.chunks_exact_mut(view.width).enumerate() {
        for (x, g) in row.iter_mut().enumerate() {
            *g = intensity_gradient(view, x, y);
        }
    }

    for (y, row) in dst.chunks_exact_mut(view.width * cn).enumerate() {
        for (x, pixel) in row.chunks_exact_mut(cn).enumerate() {
            let response = harris_response(weights, k, |i, j| {
                let sx = view.resolve_x(x as isize + i as isize - r);
                let sy = view.resolve_y(y as isize + j as isize - r);
                gradients[sy * view.width + sx]
            });
            store_response(view, alpha, pixel, x, y, response);
        }
    }
}

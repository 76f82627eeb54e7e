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
//! Per-sample kernel math shared by both backends.
//!
//! Backends differ only in iteration order and in where intermediates live;
//! every value they produce goes through these functions in the same
//! accumulation order.

use crate::kernel::{LAPLACE_STENCIL, SOBEL_X, SOBEL_Y};
use crate::{EdgeMode, FilterChannels, FilterSample, PixelBuffer};

/// Luma weights used to reduce RGBA to a single intensity.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Harris gradients are Sobel scaled to intensity units per pixel.
const GRADIENT_SCALE: f32 = 1. / 8.;

/// Read-only view resolving out of range coordinates by an [EdgeMode].
#[derive(Copy, Clone)]
pub(crate) struct SourceView<'a, T> {
    data: &'a [T],
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cn: usize,
    pub(crate) layout: FilterChannels,
    pub(crate) edge_mode: EdgeMode,
}

impl<'a, T: FilterSample> SourceView<'a, T> {
    pub(crate) fn new(image: &'a PixelBuffer<'_, T>, edge_mode: EdgeMode) -> Self {
        SourceView {
            data: image.data(),
            width: image.width() as usize,
            height: image.height() as usize,
            cn: image.channels().channels(),
            layout: image.channels(),
            edge_mode,
        }
    }

    #[inline(always)]
    pub(crate) fn resolve_x(&self, x: isize) -> usize {
        self.edge_mode.resolve(x, self.width)
    }

    #[inline(always)]
    pub(crate) fn resolve_y(&self, y: isize) -> usize {
        self.edge_mode.resolve(y, self.height)
    }

    /// Sample at in-range coordinates
    #[inline(always)]
    pub(crate) fn at(&self, x: usize, y: usize, c: usize) -> f32 {
        self.data[(y * self.width + x) * self.cn + c].to_f32()
    }

    /// Sample at any coordinates, resolved by the edge mode
    #[inline(always)]
    pub(crate) fn fetch(&self, x: isize, y: isize, c: usize) -> f32 {
        self.at(self.resolve_x(x), self.resolve_y(y), c)
    }

    /// Raw sample, used to pass alpha through
    #[inline(always)]
    pub(crate) fn raw(&self, x: usize, y: usize, c: usize) -> T {
        self.data[(y * self.width + x) * self.cn + c]
    }

    /// Pixel intensity at any coordinates
    #[inline(always)]
    pub(crate) fn intensity(&self, x: isize, y: isize) -> f32 {
        let x = self.resolve_x(x);
        let y = self.resolve_y(y);
        match self.layout {
            FilterChannels::Gray => self.at(x, y, 0),
            FilterChannels::Rgba => {
                LUMA_R * self.at(x, y, 0) + LUMA_G * self.at(x, y, 1) + LUMA_B * self.at(x, y, 2)
            }
        }
    }
}

/// Sums `weights[i] * value(i)` in index order.
#[inline(always)]
pub(crate) fn weighted_sum(weights: &[f32], mut value: impl FnMut(usize) -> f32) -> f32 {
    let mut acc = 0f32;
    for (i, &w) in weights.iter().enumerate() {
        acc += w * value(i);
    }
    acc
}

/// Unweighted mean over `(2r+1)x(2r+1)` around `(x, y)`.
pub(crate) fn box_mean<T: FilterSample>(
    view: &SourceView<T>,
    x: usize,
    y: usize,
    c: usize,
    radius: u32,
) -> f32 {
    let r = radius as isize;
    let (x, y) = (x as isize, y as isize);
    let mut sum = 0f32;
    for dy in -r..=r {
        let sy = view.resolve_y(y + dy);
        for dx in -r..=r {
            sum += view.at(view.resolve_x(x + dx), sy, c);
        }
    }
    let side = (2 * radius + 1) as f32;
    sum / (side * side)
}

/// Horizontal gaussian pass at `(x, y)`, `y` already in range.
#[inline]
pub(crate) fn gaussian_horizontal<T: FilterSample>(
    view: &SourceView<T>,
    x: usize,
    y: usize,
    c: usize,
    weights: &[f32],
) -> f32 {
    let r = (weights.len() / 2) as isize;
    let x = x as isize;
    weighted_sum(weights, |i| {
        view.at(view.resolve_x(x + i as isize - r), y, c)
    })
}

#[inline(always)]
fn stencil_3x3<T: FilterSample>(
    view: &SourceView<T>,
    stencil: &[f32; 9],
    x: usize,
    y: usize,
    mut fetch: impl FnMut(&SourceView<T>, isize, isize) -> f32,
) -> f32 {
    let (x, y) = (x as isize, y as isize);
    let mut acc = 0f32;
    for (k, &w) in stencil.iter().enumerate() {
        let dx = (k % 3) as isize - 1;
        let dy = (k / 3) as isize - 1;
        if w != 0. {
            acc += w * fetch(view, x + dx, y + dy);
        }
    }
    acc
}

pub(crate) fn laplace<T: FilterSample>(view: &SourceView<T>, x: usize, y: usize, c: usize) -> f32 {
    stencil_3x3(view, &LAPLACE_STENCIL, x, y, |v, sx, sy| v.fetch(sx, sy, c))
}

pub(crate) fn sobel_magnitude<T: FilterSample>(
    view: &SourceView<T>,
    x: usize,
    y: usize,
    c: usize,
) -> f32 {
    let gx = stencil_3x3(view, &SOBEL_X, x, y, |v, sx, sy| v.fetch(sx, sy, c));
    let gy = stencil_3x3(view, &SOBEL_Y, x, y, |v, sx, sy| v.fetch(sx, sy, c));
    (gx * gx + gy * gy).sqrt()
}

/// Intensity gradient `(gx, gy)` at in-range `(x, y)`.
pub(crate) fn intensity_gradient<T: FilterSample>(
    view: &SourceView<T>,
    x: usize,
    y: usize,
) -> (f32, f32) {
    let gx = stencil_3x3(view, &SOBEL_X, x, y, |v, sx, sy| v.intensity(sx, sy));
    let gy = stencil_3x3(view, &SOBEL_Y, x, y, |v, sx, sy| v.intensity(sx, sy));
    (gx * GRADIENT_SCALE, gy * GRADIENT_SCALE)
}

/// Accumulates the windowed structure tensor and scores it.
///
/// `gradient(i, j)` returns the gradient at window tap column `i`, row `j`.
pub(crate) fn harris_response(
    weights: &[f32],
    sensitivity: f32,
    mut gradient: impl FnMut(usize, usize) -> (f32, f32),
) -> f32 {
    let mut sxx = 0f32;
    let mut syy = 0f32;
    let mut sxy = 0f32;
    for (j, &wy) in weights.iter().enumerate() {
        for (i, &wx) in weights.iter().enumerate() {
            let w = wy * wx;
            let (dx, dy) = gradient(i, j);
            sxx += w * dx * dx;
            syy += w * dy * dy;
            sxy += w * dx * dy;
        }
    }
    harris_score(sxx, syy, sxy, sensitivity)
}

/// `det(M) - k * trace(M)^2`
#[inline(always)]
pub(crate) fn harris_score(sxx: f32, syy: f32, sxy: f32, k: f32) -> f32 {
    let det = sxx * syy - sxy * sxy;
    let trace = sxx + syy;
    det - k * trace * trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(data: Vec<f32>, w: u32, h: u32) -> PixelBuffer<'static, f32> {
        PixelBuffer::new(data, w, h, FilterChannels::Gray).unwrap()
    }

    #[test]
    fn test_flat_region_has_no_response() {
        let img = gray(vec![42.; 25], 5, 5);
        let view = SourceView::new(&img, EdgeMode::Clamp);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(laplace(&view, x, y, 0), 0.);
                assert_eq!(sobel_magnitude(&view, x, y, 0), 0.);
                assert_eq!(box_mean(&view, x, y, 0, 2), 42.);
                assert_eq!(intensity_gradient(&view, x, y), (0., 0.));
            }
        }
    }

    #[test]
    fn test_sobel_on_vertical_step() {
        let mut data = vec![0f32; 36];
        for y in 0..6 {
            for x in 3..6 {
                data[y * 6 + x] = 100.;
            }
        }
        let img = gray(data, 6, 6);
        let view = SourceView::new(&img, EdgeMode::Clamp);
        assert_eq!(sobel_magnitude(&view, 2, 3, 0), 400.);
        assert_eq!(sobel_magnitude(&view, 3, 0, 0), 400.);
        assert_eq!(sobel_magnitude(&view, 0, 3, 0), 0.);
        assert_eq!(sobel_magnitude(&view, 5, 5, 0), 0.);
        let (gx, gy) = intensity_gradient(&view, 2, 3);
        assert_eq!(gx, 50.);
        assert_eq!(gy, 0.);
    }

    #[test]
    fn test_rgba_intensity_is_luma() {
        let img = PixelBuffer::new(vec![100f32, 200., 50., 7.], 1, 1, FilterChannels::Rgba)
            .unwrap();
        let view = SourceView::new(&img, EdgeMode::Clamp);
        let expected = 0.2126 * 100. + 0.7152 * 200. + 0.0722 * 50.;
        assert!((view.intensity(-4, 3) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_harris_score_sign() {
        // isotropic gradients: corner
        assert!(harris_score(100., 100., 0., 0.04) > 0.);
        // one dominant direction: edge
        assert!(harris_score(100., 0., 0., 0.04) < 0.);
        assert_eq!(harris_score(0., 0., 0., 0.04), 0.);
    }

    #[test]
    fn test_weighted_sum_order() {
        let w = [0.25f32, 0.5, 0.25];
        assert_eq!(weighted_sum(&w, |i| [4., 8., 12.][i]), 8.);
    }
}

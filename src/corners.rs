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
use crate::dispatch::{try_execute, FilterParams};
use crate::stencil::SourceView;
use crate::{
    BackendTag, EdgeMode, FilterChannels, FilterError, FilterKind, FilterSample, PixelBuffer,
    PixelBufferMut, TileSchedule, HARRIS_SENSITIVITY,
};
use rayon::prelude::*;

/// Harris corner detection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HarrisParams {
    /// Gaussian window radius
    pub radius: u32,
    /// Harris `k`
    pub sensitivity: f32,
    /// Responses strictly above this are corners
    pub threshold: f32,
    pub edge_mode: EdgeMode,
    pub schedule: TileSchedule,
}

impl Default for HarrisParams {
    fn default() -> Self {
        HarrisParams {
            radius: 1,
            sensitivity: HARRIS_SENSITIVITY,
            threshold: 20000.,
            edge_mode: EdgeMode::default(),
            schedule: TileSchedule::default(),
        }
    }
}

impl HarrisParams {
    fn filter_params(&self) -> FilterParams {
        FilterParams {
            radius: self.radius,
            edge_mode: self.edge_mode,
            harris_sensitivity: self.sensitivity,
            schedule: self.schedule,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Corner {
    pub x: u32,
    pub y: u32,
    pub response: f32,
}

/// Unsaturated Harris response plane, one value per pixel in row-major order.
///
/// RGBA input is reduced to luma first, so the response is in the sample
/// units of `T`.
pub fn harris_response<T: FilterSample>(
    input: &PixelBuffer<T>,
    params: &HarrisParams,
    backend: BackendTag,
) -> Result<Vec<f32>, FilterError> {
    let view = SourceView::new(input, EdgeMode::Clamp);
    let mut intensity = Vec::with_capacity(view.width * view.height);
    for y in 0..view.height as isize {
        for x in 0..view.width as isize {
            intensity.push(view.intensity(x, y));
        }
    }
    let gray = PixelBuffer::new(
        intensity,
        input.width(),
        input.height(),
        FilterChannels::Gray,
    )?;
    let mut response = PixelBufferMut::alloc(input.width(), input.height(), FilterChannels::Gray);
    try_execute(
        FilterKind::Harris.name(),
        backend,
        &gray,
        &mut response,
        params.filter_params(),
    )?;
    Ok(response.into_vec())
}

/// Pixels whose response exceeds `params.threshold`, row-major.
pub fn harris_corners<T: FilterSample>(
    input: &PixelBuffer<T>,
    params: &HarrisParams,
    backend: BackendTag,
) -> Result<Vec<Corner>, FilterError> {
    let response = harris_response(input, params, backend)?;
    let threshold = params.threshold;
    let corners: Vec<Corner> = response
        .par_chunks_exact(input.width() as usize)
        .enumerate()
        .flat_map_iter(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, &r)| r > threshold)
                .map(move |(x, &response)| Corner {
                    x: x as u32,
                    y: y as u32,
                    response,
                })
        })
        .collect();
    log::debug!(
        "{backend} Harris found {} corners on {}x{}",
        corners.len(),
        input.width(),
        input.height()
    );
    Ok(corners)
}

/// Draws a `2 * arm + 1` cross centred on every corner into the colour
/// channels, clipped to the image.
pub fn mark_corners<T: FilterSample>(
    image: &mut PixelBufferMut<T>,
    corners: &[Corner],
    arm: u32,
    value: T,
) {
    let width = image.width() as i64;
    let height = image.height() as i64;
    let cn = image.channels().channels();
    let alpha = image.channels().alpha_index();
    let stride = image.row_stride();
    let data = image.data_mut();
    let mut paint = |x: i64, y: i64| {
        if x < 0 || y < 0 || x >= width || y >= height {
            return;
        }
        let offset = y as usize * stride + x as usize * cn;
        for (c, dst) in data[offset..offset + cn].iter_mut().enumerate() {
            if alpha != Some(c) {
                *dst = value;
            }
        }
    };
    let arm = arm as i64;
    for corner in corners {
        let (cx, cy) = (corner.x as i64, corner.y as i64);
        for i in -arm..=arm {
            paint(cx + i, cy);
            paint(cx, cy + i);
        }
    }
}

/// Copies `input` into `output` and marks detected corners with full
/// intensity crosses of arm 10.
pub fn harris_overlay<T: FilterSample>(
    input: &PixelBuffer<T>,
    output: &mut PixelBufferMut<T>,
    params: &HarrisParams,
    backend: BackendTag,
) -> Result<(), FilterError> {
    input.size_matches_mut(output)?;
    let corners = harris_corners(input, params, backend)?;
    input.copy_to_mut(output)?;
    mark_corners(output, &corners, 10, T::from_f32(T::MAX_INTENSITY));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_image() -> PixelBuffer<'static, u8> {
        let mut data = vec![0u8; 64 * 64];
        for y in 20..40 {
            for x in 20..40 {
                data[y * 64 + x] = 255;
            }
        }
        PixelBuffer::new(data, 64, 64, FilterChannels::Gray).unwrap()
    }

    fn near(corners: &[Corner], x: u32, y: u32) -> bool {
        corners
            .iter()
            .any(|c| c.x.abs_diff(x) <= 3 && c.y.abs_diff(y) <= 3)
    }

    #[test]
    fn test_square_corners_detected() {
        let _ = env_logger::builder().is_test(true).try_init();
        let src = square_image();
        for backend in [BackendTag::Rs, BackendTag::Fs] {
            let corners = harris_corners(&src, &HarrisParams::default(), backend).unwrap();
            assert!(!corners.is_empty());
            for (x, y) in [(20, 20), (39, 20), (20, 39), (39, 39)] {
                assert!(near(&corners, x, y), "{backend} missed corner at ({x}, {y})");
            }
            for c in &corners {
                // nothing away from the square corners
                let dx = c.x.abs_diff(20).min(c.x.abs_diff(39));
                let dy = c.y.abs_diff(20).min(c.y.abs_diff(39));
                assert!(dx <= 3 && dy <= 3, "Unexpected corner {c:?}");
            }
        }
    }

    #[test]
    fn test_corners_are_row_major() {
        let corners =
            harris_corners(&square_image(), &HarrisParams::default(), BackendTag::Fs).unwrap();
        for pair in corners.windows(2) {
            assert!((pair[0].y, pair[0].x) < (pair[1].y, pair[1].x));
        }
    }

    #[test]
    fn test_flat_image_has_no_corners() {
        let src = PixelBuffer::new(vec![90u8; 32 * 32 * 4], 32, 32, FilterChannels::Rgba).unwrap();
        let corners = harris_corners(&src, &HarrisParams::default(), BackendTag::Rs).unwrap();
        assert!(corners.is_empty());
    }

    #[test]
    fn test_backends_agree_on_response() {
        let src = square_image();
        let params = HarrisParams {
            radius: 2,
            ..Default::default()
        };
        let rs = harris_response(&src, &params, BackendTag::Rs).unwrap();
        let fs = harris_response(&src, &params, BackendTag::Fs).unwrap();
        assert_eq!(rs, fs);
    }

    #[test]
    fn test_small_image_rejected() {
        let src = PixelBuffer::new(vec![0u8; 4], 2, 2, FilterChannels::Gray).unwrap();
        let err = harris_corners(&src, &HarrisParams::default(), BackendTag::Rs).unwrap_err();
        assert!(matches!(err, FilterError::ImageTooSmall { .. }));
    }

    #[test]
    fn test_mark_corners_clips_and_keeps_alpha() {
        let mut img = PixelBufferMut::new(vec![0u8; 8 * 8 * 4], 8, 8, FilterChannels::Rgba).unwrap();
        let corner = Corner {
            x: 1,
            y: 6,
            response: 1.,
        };
        mark_corners(&mut img, &[corner], 10, 255);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x == 1 || y == 6 { 255 } else { 0 };
                for c in 0..3 {
                    assert_eq!(img.get(x, y, c).unwrap(), expected, "({x}, {y}, {c})");
                }
                assert_eq!(img.get(x, y, 3).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_overlay_marks_on_copy() {
        let src = square_image();
        let mut dst = PixelBufferMut::alloc(64, 64, FilterChannels::Gray);
        harris_overlay(&src, &mut dst, &HarrisParams::default(), BackendTag::Fs).unwrap();
        let corners = harris_corners(&src, &HarrisParams::default(), BackendTag::Fs).unwrap();
        // top left corner comes first, its left arm lies in the black area
        let first = corners[0];
        assert_eq!(src.get(first.x - 10, first.y, 0).unwrap(), 0);
        assert_eq!(dst.get(first.x - 10, first.y, 0).unwrap(), 255);
        assert_eq!(dst.get(0, 63, 0).unwrap(), 0);
        assert_eq!(dst.get(30, 30, 0).unwrap(), 255);
    }
}

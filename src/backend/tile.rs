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
use crate::ThreadingPolicy;

/// Tiling of the scheduled backend.
///
/// The output is cut into bands of `tile_height` rows, each band into tiles of
/// `tile_width` columns. Bands are the unit of parallel work.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileSchedule {
    pub tile_width: u32,
    pub tile_height: u32,
    pub threading_policy: ThreadingPolicy,
}

impl Default for TileSchedule {
    fn default() -> Self {
        TileSchedule {
            tile_width: 64,
            tile_height: 32,
            threading_policy: ThreadingPolicy::default(),
        }
    }
}

impl TileSchedule {
    pub fn new(tile_width: u32, tile_height: u32, threading_policy: ThreadingPolicy) -> Self {
        TileSchedule {
            tile_width,
            tile_height,
            threading_policy,
        }
    }

    /// Tile width clipped to `1..=width`
    #[inline]
    pub(crate) fn effective_width(&self, width: usize) -> usize {
        (self.tile_width as usize).clamp(1, width.max(1))
    }

    /// Tile height clipped to `1..=height`
    #[inline]
    pub(crate) fn effective_height(&self, height: usize) -> usize {
        (self.tile_height as usize).clamp(1, height.max(1))
    }
}

/// Half-open output rectangle `[x0, x1) x [y0, y1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Tile {
    pub(crate) x0: usize,
    pub(crate) x1: usize,
    pub(crate) y0: usize,
    pub(crate) y1: usize,
}

impl Tile {
    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.x1 - self.x0
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.y1 - self.y0
    }
}

/// Tiles of one band, left to right.
pub(crate) fn band_tiles(
    y0: usize,
    y1: usize,
    width: usize,
    tile_width: usize,
) -> impl Iterator<Item = Tile> {
    (0..width).step_by(tile_width).map(move |x0| Tile {
        x0,
        x1: (x0 + tile_width).min(width),
        y0,
        y1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_tiles_cover_row_once() {
        let tiles = band_tiles(4, 7, 10, 4).collect::<Vec<_>>();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0], Tile { x0: 0, x1: 4, y0: 4, y1: 7 });
        assert_eq!(tiles[2], Tile { x0: 8, x1: 10, y0: 4, y1: 7 });
        assert_eq!(tiles.iter().map(|t| t.width()).sum::<usize>(), 10);
        assert!(tiles.iter().all(|t| t.height() == 3));
    }

    #[test]
    fn test_effective_extent() {
        let schedule = TileSchedule::new(0, 500, ThreadingPolicy::Single);
        assert_eq!(schedule.effective_width(20), 1);
        assert_eq!(schedule.effective_height(20), 20);
        let default = TileSchedule::default();
        assert_eq!(default.effective_width(1000), 64);
        assert_eq!(default.effective_height(1000), 32);
    }
}

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
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Declares an edge handling mode
pub enum EdgeMode {
    /// If kernel goes out of bounds it will be clipped to an edge and edge pixel replicated across filter
    #[default]
    Clamp = 0,
    /// If kernel goes out of bounds image will be tiled with rule `fgh|abcdefgh|abc`
    Wrap = 1,
    /// If filter goes out of bounds image will be replicated with rule `fedcba|abcdefgh|hgfedcb`
    Reflect = 2,
    /// If filter goes out of bounds image will be replicated with rule `gfedcb|abcdefgh|gfedcba`
    Reflect101 = 3,
}

impl TryFrom<usize> for EdgeMode {
    type Error = crate::FilterError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EdgeMode::Clamp),
            1 => Ok(EdgeMode::Wrap),
            2 => Ok(EdgeMode::Reflect),
            3 => Ok(EdgeMode::Reflect101),
            _ => Err(crate::FilterError::InvalidArguments("unknown edge mode")),
        }
    }
}

impl EdgeMode {
    /// Maps a possibly out of range coordinate onto `0..n`.
    ///
    /// `n` must be non-zero.
    #[inline(always)]
    pub fn resolve(self, i: isize, n: usize) -> usize {
        let n = n as isize;
        if i >= 0 && i < n {
            return i as usize;
        }
        match self {
            EdgeMode::Clamp => i.clamp(0, n - 1) as usize,
            EdgeMode::Wrap => i.rem_euclid(n) as usize,
            EdgeMode::Reflect => {
                let period = 2 * n;
                let m = i.rem_euclid(period);
                if m < n {
                    m as usize
                } else {
                    (period - 1 - m) as usize
                }
            }
            EdgeMode::Reflect101 => {
                if n == 1 {
                    return 0;
                }
                let period = 2 * n - 2;
                let m = i.rem_euclid(period);
                if m < n {
                    m as usize
                } else {
                    (period - m) as usize
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(EdgeMode::Clamp.resolve(-3, 5), 0);
        assert_eq!(EdgeMode::Clamp.resolve(2, 5), 2);
        assert_eq!(EdgeMode::Clamp.resolve(7, 5), 4);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(EdgeMode::Wrap.resolve(-1, 5), 4);
        assert_eq!(EdgeMode::Wrap.resolve(5, 5), 0);
        assert_eq!(EdgeMode::Wrap.resolve(11, 5), 1);
    }

    #[test]
    fn test_reflect() {
        // fedcba|abcdefgh|hgfedcb
        assert_eq!(EdgeMode::Reflect.resolve(-1, 8), 0);
        assert_eq!(EdgeMode::Reflect.resolve(-3, 8), 2);
        assert_eq!(EdgeMode::Reflect.resolve(8, 8), 7);
        assert_eq!(EdgeMode::Reflect.resolve(10, 8), 5);
    }

    #[test]
    fn test_reflect_101() {
        // gfedcb|abcdefgh|gfedcba
        assert_eq!(EdgeMode::Reflect101.resolve(-1, 8), 1);
        assert_eq!(EdgeMode::Reflect101.resolve(-3, 8), 3);
        assert_eq!(EdgeMode::Reflect101.resolve(8, 8), 6);
        assert_eq!(EdgeMode::Reflect101.resolve(9, 8), 5);
        assert_eq!(EdgeMode::Reflect101.resolve(-4, 1), 0);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(EdgeMode::try_from(3).unwrap(), EdgeMode::Reflect101);
        assert!(EdgeMode::try_from(9).is_err());
    }
}

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
#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
/// Declares channel layout of a pixel buffer
pub enum FilterChannels {
    /// Single intensity channel
    #[default]
    Gray = 1,
    /// Four interleaved channels, alpha last
    Rgba = 4,
}

impl FilterChannels {
    /// Samples per pixel
    #[inline]
    pub const fn channels(&self) -> usize {
        match self {
            FilterChannels::Gray => 1,
            FilterChannels::Rgba => 4,
        }
    }

    /// Index of the alpha channel, if the layout carries one
    #[inline]
    pub const fn alpha_index(&self) -> Option<usize> {
        match self {
            FilterChannels::Gray => None,
            FilterChannels::Rgba => Some(3),
        }
    }

    /// Resolves layout from samples per pixel
    pub fn from_channels(cn: usize) -> Option<FilterChannels> {
        match cn {
            1 => Some(FilterChannels::Gray),
            4 => Some(FilterChannels::Rgba),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layouts() {
        assert_eq!(FilterChannels::Gray.channels(), 1);
        assert_eq!(FilterChannels::Rgba.channels(), 4);
        assert_eq!(FilterChannels::Gray.alpha_index(), None);
        assert_eq!(FilterChannels::Rgba.alpha_index(), Some(3));
        assert_eq!(FilterChannels::from_channels(4), Some(FilterChannels::Rgba));
        assert_eq!(FilterChannels::from_channels(3), None);
    }
}

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
use crate::StatusCode;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

impl std::fmt::Display for MismatchedSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected={}, received={}", self.expected, self.received)
    }
}

/// Errors reported by buffer construction, kernel resolution and filter execution.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Filter name does not resolve to any known kernel.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Source and destination differ in width, height or channels.
    #[error("Source and destination images must match in their dimensions and channels")]
    ShapeMismatch,

    /// Image is smaller than the kernel footprint.
    #[error("Image {width}x{height} is smaller than the {required}x{required} kernel extent")]
    ImageTooSmall {
        width: u32,
        height: u32,
        required: u32,
    },

    /// Sample access outside of the image.
    #[error("Sample ({x}, {y}, {c}) is out of bounds for {width}x{height}x{channels} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        c: usize,
        width: u32,
        height: u32,
        channels: usize,
    },

    /// Backing slice length does not match `height * width * channels`.
    #[error("Image slice size mismatch: {0}")]
    BufferSizeMismatch(MismatchedSize),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(&'static str),
}

impl FilterError {
    /// Native status code of this error.
    pub fn status(&self) -> StatusCode {
        match self {
            FilterError::UnknownFilter(_) => StatusCode::UnknownFilter,
            FilterError::ShapeMismatch | FilterError::BufferSizeMismatch(_) => {
                StatusCode::ShapeMismatch
            }
            FilterError::ImageTooSmall { .. } => StatusCode::ImageTooSmall,
            FilterError::OutOfBounds { .. } => StatusCode::OutOfBounds,
            FilterError::InvalidArguments(_) => StatusCode::InvalidArguments,
        }
    }
}

pub(crate) fn check_slice_size<T>(
    arr: &[T],
    width: u32,
    height: u32,
    cn: usize,
) -> Result<(), FilterError> {
    let expected = width as usize * height as usize * cn;
    if arr.len() != expected {
        return Err(FilterError::BufferSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            FilterError::UnknownFilter("Emboss".to_string()).status(),
            StatusCode::UnknownFilter
        );
        assert_eq!(FilterError::ShapeMismatch.status(), StatusCode::ShapeMismatch);
        assert_eq!(
            FilterError::BufferSizeMismatch(MismatchedSize {
                expected: 4,
                received: 3
            })
            .status(),
            StatusCode::ShapeMismatch
        );
        assert_eq!(
            FilterError::ImageTooSmall {
                width: 2,
                height: 2,
                required: 3
            }
            .status(),
            StatusCode::ImageTooSmall
        );
        assert_eq!(
            FilterError::InvalidArguments("null").status(),
            StatusCode::InvalidArguments
        );
    }

    #[test]
    fn test_check_slice_size() {
        let data = vec![0u8; 12];
        assert!(check_slice_size(&data, 3, 1, 4).is_ok());
        assert!(check_slice_size(&data, 3, 4, 1).is_ok());
        let err = check_slice_size(&data, 4, 4, 1).unwrap_err();
        assert_eq!(
            err,
            FilterError::BufferSizeMismatch(MismatchedSize {
                expected: 16,
                received: 12
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = FilterError::ImageTooSmall {
            width: 2,
            height: 2,
            required: 3,
        };
        assert_eq!(
            err.to_string(),
            "Image 2x2 is smaller than the 3x3 kernel extent"
        );
    }
}

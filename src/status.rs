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
use crate::FilterError;

/// Native-call status returned by the dispatch facade.
///
/// `0` is success, every other value names a failure kind, so host bindings
/// can forward the integer without rich error objects.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum StatusCode {
    /// Output fully written.
    #[default]
    Ok = 0,
    UnknownFilter = 1,
    ShapeMismatch = 2,
    ImageTooSmall = 3,
    /// Internal invariant violation, never expected in correct usage.
    OutOfBounds = 4,
    InvalidArguments = 5,
}

impl StatusCode {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}

impl From<StatusCode> for i32 {
    fn from(value: StatusCode) -> Self {
        value.code()
    }
}

impl From<Result<(), FilterError>> for StatusCode {
    fn from(value: Result<(), FilterError>) -> Self {
        match value {
            Ok(()) => StatusCode::Ok,
            Err(err) => err.status(),
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusCode::Ok => "Ok",
            StatusCode::UnknownFilter => "UnknownFilter",
            StatusCode::ShapeMismatch => "ShapeMismatch",
            StatusCode::ImageTooSmall => "ImageTooSmall",
            StatusCode::OutOfBounds => "OutOfBounds",
            StatusCode::InvalidArguments => "InvalidArguments",
        };
        write!(f, "{name}({})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(StatusCode::Ok.code(), 0);
        assert_eq!(StatusCode::UnknownFilter.code(), 1);
        assert_eq!(StatusCode::ShapeMismatch.code(), 2);
        assert_eq!(StatusCode::ImageTooSmall.code(), 3);
        assert_eq!(StatusCode::OutOfBounds.code(), 4);
        assert_eq!(StatusCode::InvalidArguments.code(), 5);
    }

    #[test]
    fn test_from_result() {
        assert_eq!(StatusCode::from(Ok(())), StatusCode::Ok);
        assert_eq!(
            StatusCode::from(Err(FilterError::ShapeMismatch)),
            StatusCode::ShapeMismatch
        );
        assert!(StatusCode::from(Ok(())).is_ok());
        assert_eq!(i32::from(StatusCode::ImageTooSmall), 3);
    }
}

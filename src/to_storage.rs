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
use half::f16;
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Helper trait to convert and round if we are storing in integral type
pub trait ToStorage<T>: 'static + Copy
where
    T: 'static + Copy,
{
    /// Convert a value to another, using the `to` operator.
    fn to_(self) -> T;
}

macro_rules! impl_to_integral_storage {
    ($from:ty, $to:ty) => {
        impl ToStorage<$to> for $from {
            #[inline(always)]
            fn to_(self) -> $to {
                self.round().max(0 as $from).min(<$to>::MAX as $from) as $to
            }
        }
    };
}

impl_to_integral_storage!(f32, u8);
impl_to_integral_storage!(f32, u16);

impl ToStorage<f32> for f32 {
    #[inline(always)]
    fn to_(self) -> f32 {
        self
    }
}

impl ToStorage<f16> for f32 {
    #[inline(always)]
    fn to_(self) -> f16 {
        f16::from_f32(self)
    }
}

/// Sample type a pixel buffer may hold.
///
/// Every kernel evaluates in `f32` and stores back through [ToStorage], so
/// integral samples saturate to their range while float samples keep the
/// signed response.
pub trait FilterSample: Copy + Default + Debug + PartialEq + Send + Sync + 'static {
    /// Largest representable intensity, used when marking features.
    const MAX_INTENSITY: f32;

    fn to_f32(self) -> f32;

    fn from_f32(value: f32) -> Self;
}

macro_rules! impl_primitive_sample {
    ($t:ty, $max:expr) => {
        impl FilterSample for $t {
            const MAX_INTENSITY: f32 = $max;

            #[inline(always)]
            fn to_f32(self) -> f32 {
                self.as_()
            }

            #[inline(always)]
            fn from_f32(value: f32) -> Self {
                value.to_()
            }
        }
    };
}

impl_primitive_sample!(u8, 255.);
impl_primitive_sample!(u16, 65535.);
impl_primitive_sample!(f32, 1.);

impl FilterSample for f16 {
    const MAX_INTENSITY: f32 = 1.;

    #[inline(always)]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value.to_()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_saturation() {
        assert_eq!(u8::from_f32(-12.4), 0);
        assert_eq!(u8::from_f32(300.), 255);
        assert_eq!(u8::from_f32(41.5), 42);
        assert_eq!(u16::from_f32(70000.), u16::MAX);
        assert_eq!(u16::from_f32(-1.), 0);
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(f32::from_f32(-12.25), -12.25);
        assert_eq!(f16::from_f32(0.5).to_f32(), 0.5);
        assert_eq!(200u8.to_f32(), 200.);
    }
}

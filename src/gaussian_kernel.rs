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
/// Sigma matching a kernel of `kernel_size` taps, OpenCV rule
pub fn sigma_size(kernel_size: f32) -> f32 {
    let size = kernel_size.max(2.);
    0.3 * ((size - 1.) * 0.5 - 1.) + 0.8
}

/// Normalized 1D gaussian of `width` taps centered at `width / 2`.
pub fn gaussian_kernel_1d(width: u32, sigma: f32) -> Vec<f32> {
    let center = (width / 2) as f32;
    let mut weights = (0..width)
        .map(|x| {
            let d = (x as f32 - center) / sigma;
            (-0.5 * d * d).exp()
        })
        .collect::<Vec<f32>>();
    let sum = weights.iter().sum::<f32>();
    if sum != 0. {
        let norm = 1. / sum;
        weights.iter_mut().for_each(|w| *w *= norm);
    }
    weights
}

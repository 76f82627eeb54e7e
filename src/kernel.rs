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
use crate::gaussian_kernel::{gaussian_kernel_1d, sigma_size};
use crate::{EdgeMode, FilterError};
use std::str::FromStr;

/// Default Harris sensitivity.
pub const HARRIS_SENSITIVITY: f32 = 0.04;

/// Discrete second derivative over the 8-neighbourhood.
pub(crate) const LAPLACE_STENCIL: [f32; 9] = [-1., -1., -1., -1., 8., -1., -1., -1., -1.];

pub(crate) const SOBEL_X: [f32; 9] = [-1., 0., 1., -2., 0., 2., -1., 0., 1.];

pub(crate) const SOBEL_Y: [f32; 9] = [-1., -2., -1., 0., 0., 0., 1., 2., 1.];

/// Largest radius accepted by kernels carrying gaussian weights.
pub const MAX_WEIGHTED_RADIUS: u32 = u16::MAX as u32;

/// Normalized gaussian taps for `radius`, rejected before anything is allocated.
fn gaussian_taps(radius: u32) -> Result<Vec<f32>, FilterError> {
    let size = radius
        .checked_mul(2)
        .and_then(|x| x.checked_add(1))
        .filter(|_| radius <= MAX_WEIGHTED_RADIUS)
        .ok_or(FilterError::InvalidArguments(
            "kernel radius exceeds the supported maximum",
        ))?;
    Ok(gaussian_kernel_1d(size, sigma_size(size as f32)))
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
/// Stencil filters known to the engine
pub enum FilterKind {
    /// Unweighted mean over a `(2r+1)x(2r+1)` window
    Blur,
    /// Separable gaussian, horizontal then vertical pass
    Gaussian,
    /// Fixed 3x3 second derivative
    Laplace,
    /// Fixed 3x3 gradient magnitude
    Sobel,
    /// Corner response of the gaussian weighted structure tensor
    Harris,
}

impl FilterKind {
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Blur,
        FilterKind::Gaussian,
        FilterKind::Laplace,
        FilterKind::Sobel,
        FilterKind::Harris,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Blur => "Blur",
            FilterKind::Gaussian => "Gaussian",
            FilterKind::Laplace => "Laplace",
            FilterKind::Sobel => "Sobel",
            FilterKind::Harris => "Harris",
        }
    }

    /// Kernels materializing an intermediate plane between passes
    pub const fn is_multi_pass(self) -> bool {
        matches!(self, FilterKind::Gaussian | FilterKind::Harris)
    }

    /// Whether the radius is fixed by the stencil rather than requested
    pub const fn has_fixed_radius(self) -> bool {
        matches!(self, FilterKind::Laplace | FilterKind::Sobel)
    }

    /// Alpha is copied through instead of filtered
    pub const fn preserves_alpha(self) -> bool {
        matches!(
            self,
            FilterKind::Laplace | FilterKind::Sobel | FilterKind::Harris
        )
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// Immutable stencil description shared by every backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    kind: FilterKind,
    radius: u32,
    weights: Vec<f32>,
    sensitivity: f32,
    edge_mode: EdgeMode,
}

impl Kernel {
    /// Mean over `(2r+1)x(2r+1)`
    pub fn blur(radius: u32) -> Kernel {
        Kernel {
            kind: FilterKind::Blur,
            radius,
            weights: Vec::new(),
            sensitivity: 0.,
            edge_mode: EdgeMode::default(),
        }
    }

    /// Separable gaussian of `2r+1` taps, sigma derived from the size.
    ///
    /// Fails with [FilterError::InvalidArguments] above [MAX_WEIGHTED_RADIUS].
    pub fn gaussian(radius: u32) -> Result<Kernel, FilterError> {
        Ok(Kernel {
            kind: FilterKind::Gaussian,
            radius,
            weights: gaussian_taps(radius)?,
            sensitivity: 0.,
            edge_mode: EdgeMode::default(),
        })
    }

    pub fn laplace() -> Kernel {
        Kernel {
            kind: FilterKind::Laplace,
            radius: 1,
            weights: LAPLACE_STENCIL.to_vec(),
            sensitivity: 0.,
            edge_mode: EdgeMode::default(),
        }
    }

    pub fn sobel() -> Kernel {
        Kernel {
            kind: FilterKind::Sobel,
            radius: 1,
            weights: Vec::new(),
            sensitivity: 0.,
            edge_mode: EdgeMode::default(),
        }
    }

    /// Harris response over a gaussian window of `2r+1` taps.
    ///
    /// Fails with [FilterError::InvalidArguments] above [MAX_WEIGHTED_RADIUS].
    pub fn harris(radius: u32) -> Result<Kernel, FilterError> {
        Ok(Kernel {
            kind: FilterKind::Harris,
            radius,
            weights: gaussian_taps(radius)?,
            sensitivity: HARRIS_SENSITIVITY,
            edge_mode: EdgeMode::default(),
        })
    }

    /// Builds a kernel of `kind`; `radius` is ignored for fixed 3x3 stencils.
    pub fn from_kind(kind: FilterKind, radius: u32) -> Result<Kernel, FilterError> {
        match kind {
            FilterKind::Blur => Ok(Kernel::blur(radius)),
            FilterKind::Gaussian => Kernel::gaussian(radius),
            FilterKind::Laplace => Ok(Kernel::laplace()),
            FilterKind::Sobel => Ok(Kernel::sobel()),
            FilterKind::Harris => Kernel::harris(radius),
        }
    }

    /// Resolves a filter name, case insensitive
    pub fn from_name(name: &str, radius: u32) -> Result<Kernel, FilterError> {
        Kernel::from_kind(name.parse()?, radius)
    }

    /// Overrides the Harris `k`; ignored by other kernels.
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Result<Kernel, FilterError> {
        if !sensitivity.is_finite() {
            return Err(FilterError::InvalidArguments(
                "Harris sensitivity must be finite",
            ));
        }
        if self.kind == FilterKind::Harris {
            self.sensitivity = sensitivity;
        }
        Ok(self)
    }

    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Kernel {
        self.edge_mode = edge_mode;
        self
    }

    #[inline]
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Separable taps for gaussian and Harris, the 3x3 stencil for Laplace, empty otherwise
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    #[inline]
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Smallest image side the kernel accepts
    #[inline]
    pub fn min_extent(&self) -> u32 {
        self.radius.saturating_mul(2).saturating_add(1)
    }
}

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
use crate::backend::{run_backend, BackendTag, TileSchedule};
use crate::{
    EdgeMode, FilterError, FilterKind, FilterSample, Kernel, PixelBuffer, PixelBufferMut,
    StatusCode, HARRIS_SENSITIVITY,
};

/// Parameters of a named filter invocation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FilterParams {
    /// Kernel radius, ignored by Laplace and Sobel
    pub radius: u32,
    pub edge_mode: EdgeMode,
    /// Harris `k`
    pub harris_sensitivity: f32,
    /// Tiling and threading of [BackendTag::Fs]
    pub schedule: TileSchedule,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            radius: 1,
            edge_mode: EdgeMode::default(),
            harris_sensitivity: HARRIS_SENSITIVITY,
            schedule: TileSchedule::default(),
        }
    }
}

impl FilterParams {
    pub fn new(radius: u32) -> Self {
        FilterParams {
            radius,
            ..Default::default()
        }
    }

    pub fn with_edge_mode(self, edge_mode: EdgeMode) -> Self {
        FilterParams { edge_mode, ..self }
    }

    pub fn with_schedule(self, schedule: TileSchedule) -> Self {
        FilterParams { schedule, ..self }
    }

    pub fn with_harris_sensitivity(self, harris_sensitivity: f32) -> Self {
        FilterParams {
            harris_sensitivity,
            ..self
        }
    }

    /// Effective radius for `kind`
    fn radius_of(&self, kind: FilterKind) -> u32 {
        if kind.has_fixed_radius() {
            1
        } else {
            self.radius
        }
    }
}

/// A single resolved invocation.
pub struct ExecutionRequest<'r, 'i, 'o, T: FilterSample> {
    pub kernel: &'r Kernel,
    pub backend: BackendTag,
    pub input: &'r PixelBuffer<'i, T>,
    pub output: &'r mut PixelBufferMut<'o, T>,
    pub schedule: TileSchedule,
}

impl<T: FilterSample> ExecutionRequest<'_, '_, '_, T> {
    pub fn run(self) -> Result<(), FilterError> {
        run_backend(
            self.backend,
            self.kernel,
            self.input,
            self.output,
            self.schedule,
        )
    }

    pub fn execute(self) -> StatusCode {
        self.run().into()
    }
}

/// Resolves `filter_name` and filters `input` into `output` with default parameters.
///
/// # Arguments
///
/// * `filter_name`: One of `Blur`, `Gaussian`, `Laplace`, `Sobel`, `Harris`, case insensitive.
/// * `backend`: See [BackendTag] for more info.
/// * `input`: Source image.
/// * `output`: Destination image, must match `input` in width, height and channels.
///
/// Returns [StatusCode::Ok] on success. On any other code `output` is untouched.
pub fn execute<T: FilterSample>(
    filter_name: &str,
    backend: BackendTag,
    input: &PixelBuffer<T>,
    output: &mut PixelBufferMut<T>,
) -> StatusCode {
    execute_with_params(filter_name, backend, input, output, FilterParams::default())
}

/// Same as [execute] with explicit [FilterParams].
pub fn execute_with_params<T: FilterSample>(
    filter_name: &str,
    backend: BackendTag,
    input: &PixelBuffer<T>,
    output: &mut PixelBufferMut<T>,
    params: FilterParams,
) -> StatusCode {
    try_execute(filter_name, backend, input, output, params).into()
}

/// Same as [execute_with_params], keeping the error details.
pub fn try_execute<T: FilterSample>(
    filter_name: &str,
    backend: BackendTag,
    input: &PixelBuffer<T>,
    output: &mut PixelBufferMut<T>,
    params: FilterParams,
) -> Result<(), FilterError> {
    let kernel = resolve_kernel(filter_name, input, output, &params).inspect_err(|e| {
        log::debug!("{backend} {filter_name} rejected: {e}");
    })?;
    log::debug!(
        "{backend} {} r={} on {}x{}x{}",
        kernel.kind(),
        kernel.radius(),
        input.width(),
        input.height(),
        input.channels().channels()
    );
    ExecutionRequest {
        kernel: &kernel,
        backend,
        input,
        output,
        schedule: params.schedule,
    }
    .run()
}

/// Validates the request before any kernel weights are computed.
fn resolve_kernel<T: FilterSample>(
    filter_name: &str,
    input: &PixelBuffer<T>,
    output: &PixelBufferMut<T>,
    params: &FilterParams,
) -> Result<Kernel, FilterError> {
    let kind: FilterKind = filter_name.parse()?;
    input.size_matches_mut(output)?;
    let radius = params.radius_of(kind);
    let required = radius.saturating_mul(2).saturating_add(1);
    if input.width().min(input.height()) < required {
        return Err(FilterError::ImageTooSmall {
            width: input.width(),
            height: input.height(),
            required,
        });
    }
    Kernel::from_kind(kind, radius)?
        .with_edge_mode(params.edge_mode)
        .with_sensitivity(params.harris_sensitivity)
}

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
#![no_main]

use arbitrary::Arbitrary;
use libfilters::{
    run_backend, BackendTag, EdgeMode, FilterChannels, FilterKind, FilterSample, Kernel,
    PixelBuffer, PixelBufferMut, ThreadingPolicy, TileSchedule,
};
use libfuzzer_sys::fuzz_target;
use std::num::NonZeroUsize;

#[derive(Arbitrary, Debug)]
struct Case {
    width: u8,
    height: u8,
    radius: u8,
    kind: u8,
    edge_mode: u8,
    rgba: bool,
    tile_width: u8,
    tile_height: u8,
    threads: u8,
    seed: u32,
}

fuzz_target!(|case: Case| {
    check::<u8>(&case);
    check::<u16>(&case);
    check::<f32>(&case);
});

fn check<T: FilterSample>(case: &Case) {
    let width = case.width as u32 % 48;
    let height = case.height as u32 % 48;
    let radius = case.radius as u32 % 6;
    if width == 0 || height == 0 {
        return;
    }
    let kind = FilterKind::ALL[case.kind as usize % FilterKind::ALL.len()];
    let edge_mode = EdgeMode::try_from(case.edge_mode as usize % 4).unwrap();
    let channels = if case.rgba {
        FilterChannels::Rgba
    } else {
        FilterChannels::Gray
    };
    let kernel = Kernel::from_kind(kind, radius).unwrap().with_edge_mode(edge_mode);

    let cn = channels.channels();
    let mut state = case.seed | 1;
    let data = (0..width as usize * height as usize * cn)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            T::from_f32((state % 256) as f32 * T::MAX_INTENSITY / 255.)
        })
        .collect::<Vec<T>>();
    let src = PixelBuffer::new(data, width, height, channels).unwrap();

    let policy = match case.threads % 3 {
        0 => ThreadingPolicy::Single,
        1 => ThreadingPolicy::Adaptive,
        _ => ThreadingPolicy::Fixed(NonZeroUsize::new(case.threads as usize % 5 + 1).unwrap()),
    };
    let schedule = TileSchedule::new(case.tile_width as u32, case.tile_height as u32, policy);

    let mut rs = PixelBufferMut::alloc(width, height, channels);
    let mut fs = PixelBufferMut::alloc(width, height, channels);
    let rs_result = run_backend(BackendTag::Rs, &kernel, &src, &mut rs, schedule);
    let fs_result = run_backend(BackendTag::Fs, &kernel, &src, &mut fs, schedule);
    assert_eq!(rs_result, fs_result);
    if rs_result.is_err() {
        return;
    }
    for (i, (a, b)) in rs.data().iter().zip(fs.data().iter()).enumerate() {
        let diff = (a.to_f32() - b.to_f32()).abs();
        assert!(
            diff <= 1e-4,
            "Backends diverged by {diff} at {i} for {kernel:?} with {schedule:?}"
        );
    }
}

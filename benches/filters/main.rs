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
use criterion::{criterion_group, criterion_main, Criterion};
use libfilters::{
    execute_with_params, BackendTag, FilterChannels, FilterKind, FilterParams, PixelBuffer,
    PixelBufferMut, ThreadingPolicy, TileSchedule,
};

fn synthetic_rgba(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize * 4];
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = i % width as usize;
        let y = i / width as usize;
        let checker = if (x / 32 + y / 32) % 2 == 0 { 200 } else { 40 };
        px[0] = (checker + x % 17) as u8;
        px[1] = (checker + y % 13) as u8;
        px[2] = (checker ^ (x * y) % 31) as u8;
        px[3] = 255;
    }
    data
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (1920u32, 1080u32);
    let data = synthetic_rgba(width, height);
    let src = PixelBuffer::borrow(&data, width, height, FilterChannels::Rgba).unwrap();

    for kind in FilterKind::ALL {
        for (backend, threading_policy) in [
            (BackendTag::Rs, ThreadingPolicy::Single),
            (BackendTag::Fs, ThreadingPolicy::Single),
            (BackendTag::Fs, ThreadingPolicy::Adaptive),
        ] {
            let params = FilterParams::new(2).with_schedule(TileSchedule {
                threading_policy,
                ..Default::default()
            });
            c.bench_function(
                &format!("RGBA {kind} {backend} {threading_policy:?}: r=2"),
                |b| {
                    let mut dst = PixelBufferMut::alloc(width, height, FilterChannels::Rgba);
                    b.iter(|| {
                        assert!(
                            execute_with_params(kind.name(), backend, &src, &mut dst, params)
                                .is_ok()
                        );
                    })
                },
            );
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

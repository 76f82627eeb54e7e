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
use std::{num::NonZeroUsize, thread::available_parallelism};

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Set threading policy of the scheduled backend.
pub enum ThreadingPolicy {
    /// Use only one thread, current is preferred.
    Single,
    /// One worker per independent band, up to available CPUs.
    #[default]
    Adaptive,
    /// Use specified number of threads, never more than there are bands.
    Fixed(NonZeroUsize),
}

impl ThreadingPolicy {
    /// Returns the number of workers for `bands` independent units of work.
    ///
    /// Must return at least 1.
    pub fn thread_count(&self, bands: usize) -> usize {
        let bands = bands.max(1);
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => bands.min(Self::available_parallelism()),
            ThreadingPolicy::Fixed(fixed) => fixed.get().min(bands),
        }
    }

    fn available_parallelism() -> usize {
        available_parallelism().map(|x| x.get()).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_count_bounds() {
        assert_eq!(ThreadingPolicy::Single.thread_count(40), 1);
        assert_eq!(ThreadingPolicy::Single.thread_count(0), 1);
        let fixed = ThreadingPolicy::Fixed(NonZeroUsize::new(3).unwrap());
        assert_eq!(fixed.thread_count(40), 3);
        assert_eq!(fixed.thread_count(2), 2);
        let adaptive = ThreadingPolicy::Adaptive.thread_count(1000);
        assert!(adaptive >= 1);
        assert_eq!(ThreadingPolicy::Adaptive.thread_count(1), 1);
    }
}

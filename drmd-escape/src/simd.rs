//! SIMD byte scanning for the bulk copy in front of the escaper.
//! SSE2 is part of the x86_64 baseline, so no runtime detection is needed.
//!
//! A chunk is clean when none of its bytes is `[`, `-`, `<`, `>`, `&` or
//! below `0x20`. Bytes at or above `0x80` are clean.

use core::arch::x86_64::*;

use crate::CHUNK_LEN;

/// Returns a bitmask with bit `i` set when byte `ix + i` needs attention.
///
/// # Safety
///
/// `ix + 16 <= bytes.len()` must hold.
#[inline]
unsafe fn compute_mask(bytes: &[u8], ix: usize) -> i32 {
    let raw_ptr = bytes.as_ptr().add(ix) as *const __m128i;
    let data = _mm_loadu_si128(raw_ptr);

    let lsquare = _mm_cmpeq_epi8(data, _mm_set1_epi8(b'[' as i8));
    let hyphen = _mm_cmpeq_epi8(data, _mm_set1_epi8(b'-' as i8));
    let langle = _mm_cmpeq_epi8(data, _mm_set1_epi8(b'<' as i8));
    let rangle = _mm_cmpeq_epi8(data, _mm_set1_epi8(b'>' as i8));
    let amp = _mm_cmpeq_epi8(data, _mm_set1_epi8(b'&' as i8));
    // unsigned `data <= 31`, so that non-ASCII bytes stay on the fast path
    let control = _mm_cmpeq_epi8(_mm_min_epu8(data, _mm_set1_epi8(31)), data);

    let any = _mm_or_si128(
        _mm_or_si128(_mm_or_si128(lsquare, hyphen), _mm_or_si128(langle, rangle)),
        _mm_or_si128(amp, control),
    );
    _mm_movemask_epi8(any)
}

pub(crate) fn clean_prefix_len(bytes: &[u8]) -> usize {
    let mut ix = 0;
    while ix + CHUNK_LEN <= bytes.len() {
        // SAFETY: the loop condition keeps the 16 byte load inside `bytes`.
        let mask = unsafe { compute_mask(bytes, ix) };
        if mask != 0 {
            break;
        }
        ix += CHUNK_LEN;
    }
    ix
}

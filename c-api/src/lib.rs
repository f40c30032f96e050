//! C bindings for drmd. See `include/drmd.h`.

use libc::{c_char, size_t};

use std::ptr;
use std::slice;

/// Converts `len` bytes at `text` to HTML.
///
/// On success the length of the result is written to `out_len` and the
/// result is returned. It is not NUL terminated and must be released with
/// [`drmd_free`]. On failure null is returned and `out_len` is left alone.
///
/// # Safety
///
/// `text` must point to `len` readable bytes, or may be null when `len` is
/// zero. `out_len` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn drmd_to_html(
    text: *const c_char,
    len: size_t,
    out_len: *mut size_t,
) -> *mut c_char {
    if out_len.is_null() || (text.is_null() && len != 0) {
        return ptr::null_mut();
    }
    let input: &[u8] = if len == 0 {
        &[]
    } else {
        slice::from_raw_parts(text.cast::<u8>(), len)
    };
    match drmd::convert(input) {
        Ok(html) => {
            let html = html.into_boxed_slice();
            *out_len = html.len();
            Box::into_raw(html).cast::<c_char>()
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Releases a result of [`drmd_to_html`]. Null is ignored.
///
/// # Safety
///
/// `html` must be null or a pointer returned by [`drmd_to_html`] that has
/// not been freed yet, and `len` the length reported with it.
#[no_mangle]
pub unsafe extern "C" fn drmd_free(html: *mut c_char, len: size_t) {
    if html.is_null() {
        return;
    }
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
        html.cast::<u8>(),
        len,
    )));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_html(text: &[u8]) -> Option<Vec<u8>> {
        let mut len = 0;
        unsafe {
            let html = drmd_to_html(text.as_ptr().cast(), text.len(), &mut len);
            if html.is_null() {
                return None;
            }
            let copy = slice::from_raw_parts(html.cast::<u8>(), len).to_vec();
            drmd_free(html, len);
            Some(copy)
        }
    }

    #[test]
    fn converts() {
        assert_eq!(to_html(b"- foo\n").unwrap(), b"<ul>\n<li>foo</ul>\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_html(b"").unwrap(), b"");
        let mut len = 7;
        unsafe {
            let html = drmd_to_html(ptr::null(), 0, &mut len);
            assert!(!html.is_null());
            assert_eq!(len, 0);
            drmd_free(html, len);
        }
    }

    #[test]
    fn failure_is_null() {
        let text: String = (0..17).map(|i| format!("{}- x\n", " ".repeat(i))).collect();
        assert_eq!(to_html(text.as_bytes()), None);
    }

    #[test]
    fn bad_arguments_are_null() {
        let mut len = 0;
        unsafe {
            assert!(drmd_to_html(ptr::null(), 3, &mut len).is_null());
            assert!(drmd_to_html(b"x".as_ptr().cast(), 1, ptr::null_mut()).is_null());
            drmd_free(ptr::null_mut(), 0);
        }
    }
}

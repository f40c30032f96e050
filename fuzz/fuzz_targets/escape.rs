#![no_main]
use libfuzzer_sys::fuzz_target;

use drmd_escape::{escape_html_body, escape_html_body_scalar};

fuzz_target!(|data: &[u8]| {
    let mut bulk = Vec::new();
    let mut scalar = Vec::new();
    escape_html_body(&mut bulk, data).unwrap();
    escape_html_body_scalar(&mut scalar, data).unwrap();
    assert_eq!(bulk, scalar);
});

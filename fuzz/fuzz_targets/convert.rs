#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let first = drmd::convert(data);
    if let Ok(html) = &first {
        assert!(!html.contains(&0));
    }
    assert_eq!(first, drmd::convert(data));
});

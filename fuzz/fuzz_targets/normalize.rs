#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: label normalization totality + idempotence.
//
// Normalization must accept any string without panicking, and applying
// it twice must equal applying it once.
fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };
    let once = xfr_charset::normalize(name);
    let twice = xfr_charset::normalize(&once);
    assert_eq!(once, twice);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: ISO-8859-1 -> UTF-8 -> ISO-8859-1 roundtrip.
//
// Every byte is representable, so the roundtrip must reproduce the
// input exactly for arbitrary payloads.
fuzz_target!(|data: &[u8]| {
    let utf8 = xfr_charset::convert(data, "utf-8", "latin1").unwrap();
    let back = xfr_charset::convert(utf8, "latin1", "utf-8").unwrap();
    assert_eq!(back, data);
});

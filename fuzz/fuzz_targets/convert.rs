#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: arbitrary bytes + arbitrary endpoint names must never
// panic. The first input byte selects the endpoint names; the rest is
// the conversion payload. Unsupported names must surface as errors,
// never as panics, and identity conversions must echo the input.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    const NAMES: [&str; 8] = [
        "utf8",
        "latin1",
        "windows-1252",
        "koi8-r",
        "ks_c_5601-1987",
        "us-ascii",
        "",
        "no-such-charset",
    ];
    let from = NAMES[(data[0] & 0x07) as usize];
    let to = NAMES[((data[0] >> 3) & 0x07) as usize];
    let payload = &data[1..];

    let result = xfr_charset::convert(payload, to, from);

    if xfr_charset::normalize(from) == xfr_charset::normalize(to) {
        assert_eq!(result.unwrap(), payload);
    }
});

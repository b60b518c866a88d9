#![no_main]
use libfuzzer_sys::fuzz_target;

use shallow_json::parse_str;

fuzz_target!(|data: &[u8]| {
    // The fuzzer hands us raw bytes; only valid UTF-8 reaches the scanner.
    if let Ok(s) = std::str::from_utf8(data) {
        // Looking for panics only. Both stages must either produce a
        // mapping or return an error, never crash.
        let _ = parse_str(s);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Version parsing should never panic regardless of input
        let _ = appfile::Version::parse(raw);
    }
});

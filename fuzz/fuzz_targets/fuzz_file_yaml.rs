#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Deserializing a file tree should never panic, and neither
        // should the operations on whatever tree came out.
        if let Ok(file) = serde_yaml_ng::from_str::<appfile::File>(content) {
            let _ = file.config_hash();
            let _ = file.validate();

            let mut base = file.clone();
            let _ = base.merge(file);
        }
    }
});

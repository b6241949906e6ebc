#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A bad document is classified, never a panic.
        let _ = tincheck::registry::classify_document(s);
    }
});

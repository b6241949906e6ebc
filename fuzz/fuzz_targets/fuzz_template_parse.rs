#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any template that parses must compile, match and render without panicking.
        if let Ok(spec) = tincheck::core::FormatSpec::new("ZZ", "fuzz", s) {
            let _ = spec.matches(s);
            let _ = spec.render(s);
        }
    }
});

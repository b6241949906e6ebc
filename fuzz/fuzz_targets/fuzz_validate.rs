#![no_main]

use libfuzzer_sys::fuzz_target;
use tincheck::core::*;

struct Offline;

impl AbnLookup for Offline {
    async fn lookup(&self, _abn: &str) -> LookupOutcome {
        LookupOutcome::Rejected(LookupFailure::Unavailable)
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(registry) = FormatRegistry::builtin() else {
        return;
    };
    let validator = TinValidator::new(registry, Offline);
    let Ok(rt) = tokio::runtime::Builder::new_current_thread().build() else {
        return;
    };
    for country in ["AU", "CA", "IN", "XX"] {
        let r = rt.block_on(validator.validate(s, country));
        assert_eq!(r.valid, r.errors.is_empty());
        assert_eq!(r.valid, r.tin_type.is_some());
    }
});

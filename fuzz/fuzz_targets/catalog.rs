#![no_main]

use hookscope::integrations::{flatten_integrations, load_integrations_from_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(integrations) = load_integrations_from_str(json) {
            for method in flatten_integrations(&integrations) {
                let _ = method.replacement.target_method.method_cache_key();
            }
        }
    }
});

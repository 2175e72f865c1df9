#![no_main]

use hookscope::AssemblyReference;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let reference = AssemblyReference::parse(text);
        let _ = AssemblyReference::parse(&reference.to_string());
    }
});

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and unknown-key reporting must never panic
        let _ = toml::from_str::<cljc::Config>(content);
        let _ = cljc::config::parse_with_warnings(content, Path::new("cljc.toml"));
    }
});

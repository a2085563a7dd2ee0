#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ns) = cljc::Namespace::parse(s) {
            let _ = ns.source_path();
            let _ = ns.artifact_path();
        }
        let _ = cljc::DependencyRef::parse(s);
        let _ = cljc::ArtifactCoordinate::parse(s).map(|c| c.repository_path());
    }
});

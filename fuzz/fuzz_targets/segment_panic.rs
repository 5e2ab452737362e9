#![no_main]
use libfuzzer_sys::fuzz_target;
use qalog::{Config, MatchStats};

fuzz_target!(|data: &[u8]| {
    // Malformed event lines must be skipped, never panic.
    let Ok(matches) = qalog::segment(data) else {
        return;
    };
    let config = Config::new();
    for record in &matches {
        let _ = MatchStats::collect(record, &config);
    }
});

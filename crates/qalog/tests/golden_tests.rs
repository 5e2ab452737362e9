use qalog::{Config, MatchesReport};
use std::fs;
use std::io::BufReader;
use std::path::Path;

#[test]
fn run_golden_tests() {
    let fixtures_dir = Path::new("tests/fixtures");
    if !fixtures_dir.exists() {
        // Skip if no fixtures
        return;
    }

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();

        if path.extension().map_or(false, |ext| ext == "log") {
            let file = fs::File::open(&path).expect("Failed to open log");
            let stats = qalog::analyze(BufReader::new(file), &Config::new())
                .expect("Failed to analyze log");

            let json_output = MatchesReport::from_stats(&stats)
                .to_json_pretty()
                .expect("Failed to serialize report");

            let golden_path = path.with_extension("golden.json");

            if std::env::var("UPDATE_GOLDEN").is_ok() {
                fs::write(&golden_path, &json_output).expect("Failed to update golden file");
            } else {
                let expected = fs::read_to_string(&golden_path)
                    .expect("Failed to read golden file (run with UPDATE_GOLDEN=1 to create)");
                let actual: serde_json::Value = serde_json::from_str(&json_output).unwrap();
                let expected: serde_json::Value = serde_json::from_str(&expected).unwrap();
                assert_eq!(actual, expected, "Golden test failed for {:?}", path);
            }
        }
    }
}

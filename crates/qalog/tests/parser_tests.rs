use qalog::ir::EventKind;
use qalog::stats::{self, MatchStats};
use qalog::{Config, ReconcileMode, Segmenter};
use std::collections::HashMap;

const FIXTURE: &str = include_str!("fixtures/qa.log");

#[test]
fn test_fixture_structure() {
    let matches = Segmenter::new().parse(FIXTURE);

    assert_eq!(matches.len(), 3);
    assert!(matches[0].lines(EventKind::KillEvent).is_empty());
    assert_eq!(matches[1].lines(EventKind::KillEvent).len(), 4);
    assert_eq!(matches[2].lines(EventKind::PlayerInfo).len(), 4);

    // The player-info line before the first InitGame belongs to no match
    assert!(
        matches
            .iter()
            .flat_map(|m| m.lines(EventKind::PlayerInfo))
            .all(|line| !line.contains("Ghost"))
    );
}

#[test]
fn test_fixture_world_deaths() {
    let matches = Segmenter::new().parse(FIXTURE);
    let by_world = stats::kills_by_environment(&matches[1]);

    assert_eq!(by_world.len(), 2);
    assert_eq!(by_world["Zeh"], 2);
    assert_eq!(by_world["Dono da Bola"], 1);
}

#[test]
fn test_fixture_bundle() {
    let matches = Segmenter::new().parse(FIXTURE);
    let stats = MatchStats::collect(&matches[2], &Config::new());

    assert_eq!(stats.index, 2);
    assert_eq!(stats.total_kills, 5);
    assert_eq!(stats.players.len(), 3);
    assert_eq!(stats.skipped_lines, 1);
    assert_eq!(
        stats.kills_by_player,
        HashMap::from([
            ("Zeh".to_string(), 1),
            ("Isgalamido".to_string(), 1),
            ("Mocinha".to_string(), 2),
        ])
    );
    assert_eq!(stats.kills_by_cause["MOD_RAILGUN"], 2);
    assert_eq!(
        stats.reconciled_kills,
        HashMap::from([("Isgalamido".to_string(), 0)])
    );
}

#[test]
fn test_fixture_pass_through() {
    let matches = Segmenter::new().parse(FIXTURE);
    let config = Config::new().with_reconcile(ReconcileMode::PassThrough);
    let stats = MatchStats::collect(&matches[2], &config);

    assert_eq!(stats.reconciled_kills.len(), 3);
    assert_eq!(stats.reconciled_kills["Isgalamido"], 0);
    assert_eq!(stats.reconciled_kills["Mocinha"], 2);
    assert_eq!(stats.reconciled_kills["Zeh"], 1);
}

#[test]
fn test_analyze_stream() {
    let stats = qalog::analyze(FIXTURE.as_bytes(), &Config::new()).unwrap();
    let totals: Vec<usize> = stats.iter().map(|s| s.total_kills).collect();
    assert_eq!(totals, [0, 4, 5]);
}


use crate::Segmenter;
use crate::ir::EventKind;

#[test]
fn test_parse_empty_log() {
    let parser = Segmenter::new();
    let result = parser.parse("");
    assert!(result.is_empty());
}

#[test]
fn test_log_without_init_game() {
    let log = r#"
 20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0
 20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT
    "#;
    let result = Segmenter::new().parse(log);
    assert!(result.is_empty());
}

#[test]
fn test_parse_single_match() {
    let log = r#"0:00 InitGame: \sv_floodProtect\1
        20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0
        20:54 Kill: 1022 2 22: <world> killed Isgalamido by MOD_TRIGGER_HURT"#;
    let result = Segmenter::new().parse(log);

    assert_eq!(result.len(), 1);
    assert!(result[0].lines(EventKind::PlayerInfo)[0].contains("Isgalamido"));
    assert!(result[0].lines(EventKind::KillEvent)[0].contains("MOD_TRIGGER_HURT"));
}

#[test]
fn test_match_count_follows_markers() {
    let log = "InitGame: a\nInitGame: b\n ShutdownGame:\nInitGame: c\n";
    let result = Segmenter::new().parse(log);

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|m| m.is_empty()));
    let indices: Vec<usize> = result.iter().map(|m| m.index).collect();
    assert_eq!(indices, [0, 1, 2]);
}

#[test]
fn test_lines_before_first_match_are_dropped() {
    let log = "ClientUserinfoChanged: 2 n\\Ghost\\t\\0\nInitGame:\nClientUserinfoChanged: 3 n\\Zeh\\t\\0\n";
    let result = Segmenter::new().parse(log);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].lines(EventKind::PlayerInfo).len(), 1);
    assert!(result[0].lines(EventKind::PlayerInfo)[0].contains("Zeh"));
}

#[test]
fn test_marker_line_is_not_an_event() {
    let result = Segmenter::new().parse("  0:00 InitGame: \\sv_hostname\\q3\n");
    assert!(result[0].is_empty());
}

#[test]
fn test_inert_lines_are_ignored() {
    let log = "InitGame:\n 20:34 ClientConnect: 2\n 20:37 ClientBegin: 2\n 25:05 Item: 2 weapon_rocketlauncher\n";
    let result = Segmenter::new().parse(log);
    assert!(result[0].is_empty());
}

#[test]
fn test_event_order_is_kept() {
    let log = "InitGame:\nKill: 1 2 3: A killed B by MOD_GAUNTLET\nKill: 2 1 3: B killed A by MOD_BFG\n";
    let result = Segmenter::new().parse(log);
    let kills = result[0].lines(EventKind::KillEvent);

    assert!(kills[0].contains("MOD_GAUNTLET"));
    assert!(kills[1].contains("MOD_BFG"));
}

#[test]
fn test_incremental_parsing() {
    let mut parser = Segmenter::new();
    assert!(parser.update("InitGame: a\n").is_empty());
    assert_eq!(parser.update("InitGame: b\n").len(), 1);
    let final_matches = parser.finish();
    assert_eq!(final_matches.len(), 1);
    assert_eq!(final_matches[0].index, 1);
}

#[test]
fn test_marker_split_across_chunks() {
    let mut parser = Segmenter::new();
    let mut matches = parser.update("Init");
    matches.extend(parser.update("Game:\nKi"));
    matches.extend(parser.update("ll: 1 2 3: A killed B by MOD_BFG"));
    matches.extend(parser.finish());

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].lines(EventKind::KillEvent).len(), 1);
}

use qalog::{MatchStats, MatchesReport};
use std::collections::HashMap;
use std::fmt::Write;

const SEPARATOR: &str = "   ----------";

/// Renders the `{"games": [...]}` document.
pub fn render_json(stats: &[MatchStats]) -> qalog::Result<String> {
    MatchesReport::from_stats(stats).to_json_pretty()
}

/// Renders one human-readable block per match. Keys are sorted.
pub fn render_text(stats: &[MatchStats]) -> String {
    let mut out = String::new();
    for game in stats {
        write_game(&mut out, game).expect("write to String");
    }
    out
}

fn write_game(out: &mut String, game: &MatchStats) -> std::fmt::Result {
    writeln!(out, "Game_{}", game.index)?;

    let mut players: Vec<&String> = game.players.iter().collect();
    players.sort();
    for player in players {
        writeln!(out, "  - Player: {player}")?;
    }
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "  - Total kills: {}", game.total_kills)?;
    writeln!(out, "{SEPARATOR}")?;

    for (player, kills) in sorted(&game.kills_by_player) {
        writeln!(out, "  - Total kills by {player} - {kills}")?;
    }
    writeln!(out, "{SEPARATOR}")?;

    for (player, kills) in sorted(&game.kills_by_environment) {
        writeln!(out, "  - Total kills by world - {player} - {kills}")?;
    }
    writeln!(out, "{SEPARATOR}")?;

    for (player, kills) in sorted(&game.reconciled_kills) {
        writeln!(out, "  - Recount Total kills by {player} - {kills}")?;
    }
    writeln!(out, "{SEPARATOR}")?;

    for (cause, kills) in sorted(&game.kills_by_cause) {
        writeln!(out, "  - Total kills by mod - {cause} - {kills}")?;
    }
    Ok(())
}

fn sorted<V>(map: &HashMap<String, V>) -> Vec<(&String, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

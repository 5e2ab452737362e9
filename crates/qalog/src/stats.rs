//! Per-match statistics.
//!
//! Each view is a pure function of one [`MatchRecord`]. They share no state
//! and may be computed in any order, or concurrently on the same record.
//! Returned maps are unordered; renderers sort keys themselves.

use crate::config::{Config, ReconcileMode};
use crate::extract;
use crate::ir::{CAUSE_TAG_PREFIX, EventKind, Extraction, MatchRecord, SkipReason, WORLD_TAG};
use std::collections::{HashMap, HashSet};

/// Distinct player names seen in `ClientUserinfoChanged:` lines.
pub fn players(record: &MatchRecord) -> HashSet<String> {
    record
        .lines(EventKind::PlayerInfo)
        .iter()
        .filter_map(|line| extract::player_name(line).ok())
        .map(str::to_string)
        .collect()
}

/// Number of kill lines, with no filtering.
pub fn total_kills(record: &MatchRecord) -> usize {
    record.lines(EventKind::KillEvent).len()
}

/// Player-vs-player kills, keyed by the name following `killed `.
pub fn kills_by_player(record: &MatchRecord) -> HashMap<String, usize> {
    tally(
        record
            .lines(EventKind::KillEvent)
            .iter()
            .filter(|line| !line.contains(WORLD_TAG))
            .filter_map(|line| extract::victim_name(line).ok()),
    )
}

/// Deaths caused by `<world>`, keyed by the player who died.
pub fn kills_by_environment(record: &MatchRecord) -> HashMap<String, usize> {
    tally(
        record
            .lines(EventKind::KillEvent)
            .iter()
            .filter(|line| line.contains(WORLD_TAG))
            .filter_map(|line| extract::victim_name(line).ok()),
    )
}

/// Kills per `MOD_*` cause tag.
pub fn kills_by_cause(record: &MatchRecord) -> HashMap<String, usize> {
    tally(
        record
            .lines(EventKind::KillEvent)
            .iter()
            .filter(|line| line.contains(CAUSE_TAG_PREFIX))
            .filter_map(|line| extract::cause_tag(line).ok()),
    )
}

/// Player kills minus environment deaths, for players present in both maps.
///
/// Players who never died to `<world>` are omitted. Results may be negative;
/// they are not clamped.
pub fn reconciled_kills(record: &MatchRecord) -> HashMap<String, i64> {
    reconciled_kills_with(record, ReconcileMode::Literal)
}

pub fn reconciled_kills_with(record: &MatchRecord, mode: ReconcileMode) -> HashMap<String, i64> {
    reconcile(&kills_by_player(record), &kills_by_environment(record), mode)
}

/// Subtracts `by_environment` from `by_player` per name.
pub fn reconcile(
    by_player: &HashMap<String, usize>,
    by_environment: &HashMap<String, usize>,
    mode: ReconcileMode,
) -> HashMap<String, i64> {
    let mut reconciled: HashMap<String, i64> = by_environment
        .iter()
        .filter_map(|(player, &deaths)| {
            let kills = *by_player.get(player)?;
            Some((player.clone(), kills as i64 - deaths as i64))
        })
        .collect();

    if mode == ReconcileMode::PassThrough {
        for (player, &kills) in by_player {
            if !by_environment.contains_key(player) {
                reconciled.insert(player.clone(), kills as i64);
            }
        }
    }
    reconciled
}

/// A line that carried a marker but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub kind: EventKind,
    pub line: String,
    pub reason: SkipReason,
}

/// Every event line no view could extract a value from.
///
/// Kill lines only count when their shape matters to some view: a line with
/// no `killed ` part and no cause tag is still counted by [`total_kills`].
pub fn skipped_lines(record: &MatchRecord) -> Vec<SkippedLine> {
    let mut skipped = Vec::new();

    for line in record.lines(EventKind::PlayerInfo) {
        if let Extraction::Skipped(reason) = extract::player_name(line) {
            skipped.push(SkippedLine {
                kind: EventKind::PlayerInfo,
                line: line.clone(),
                reason,
            });
        }
    }

    for line in record.lines(EventKind::KillEvent) {
        let cause = if line.contains(CAUSE_TAG_PREFIX) {
            extract::cause_tag(line)
        } else {
            Extraction::Extracted("")
        };
        let outcome = match (extract::victim_name(line), cause) {
            (Extraction::Skipped(reason), _) | (_, Extraction::Skipped(reason)) => Some(reason),
            _ => None,
        };
        if let Some(reason) = outcome {
            skipped.push(SkippedLine {
                kind: EventKind::KillEvent,
                line: line.clone(),
                reason,
            });
        }
    }
    skipped
}

fn tally<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}

/// All views of one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStats {
    pub index: usize,
    pub total_kills: usize,
    pub players: HashSet<String>,
    pub kills_by_player: HashMap<String, usize>,
    pub kills_by_environment: HashMap<String, usize>,
    pub kills_by_cause: HashMap<String, usize>,
    pub reconciled_kills: HashMap<String, i64>,
    pub skipped_lines: usize,
}

impl MatchStats {
    pub fn collect(record: &MatchRecord, config: &Config) -> Self {
        let skipped = skipped_lines(record);
        for skip in &skipped {
            log::debug!(
                "game_{}: skipped {} line ({}): {}",
                record.index,
                skip.kind,
                skip.reason,
                skip.line
            );
        }

        let kills_by_player = kills_by_player(record);
        let kills_by_environment = kills_by_environment(record);
        let reconciled_kills = reconcile(&kills_by_player, &kills_by_environment, config.reconcile);

        Self {
            index: record.index,
            total_kills: total_kills(record),
            players: players(record),
            kills_by_player,
            kills_by_environment,
            kills_by_cause: kills_by_cause(record),
            reconciled_kills,
            skipped_lines: skipped.len(),
        }
    }
}

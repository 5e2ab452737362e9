use crate::error::Result;
use crate::stats::MatchStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The per-match record of the JSON report.
///
/// Field names are a published format other tools read; keep them stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub total_kills: usize,
    pub players: Vec<String>,
    /// Reconciled kills per player.
    pub kills: BTreeMap<String, i64>,
    pub kills_by_means: BTreeMap<String, usize>,
}

impl From<&MatchStats> for GameReport {
    fn from(stats: &MatchStats) -> Self {
        let mut players: Vec<String> = stats.players.iter().cloned().collect();
        players.sort();
        Self {
            total_kills: stats.total_kills,
            players,
            kills: stats.reconciled_kills.clone().into_iter().collect(),
            kills_by_means: stats.kills_by_cause.clone().into_iter().collect(),
        }
    }
}

/// `{"games": [{"game_0": {...}}, {"game_1": {...}}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchesReport {
    pub games: Vec<BTreeMap<String, GameReport>>,
}

impl MatchesReport {
    pub fn from_stats<'a>(stats: impl IntoIterator<Item = &'a MatchStats>) -> Self {
        let games = stats
            .into_iter()
            .map(|s| BTreeMap::from([(game_key(s.index), GameReport::from(s))]))
            .collect();
        Self { games }
    }

    /// Looks up a game by its `game_<index>` key.
    pub fn game(&self, key: &str) -> Option<&GameReport> {
        self.games.iter().find_map(|entry| entry.get(key))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

pub fn game_key(index: usize) -> String {
    format!("game_{index}")
}

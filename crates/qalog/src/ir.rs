use std::collections::BTreeMap;
use std::fmt;

/// Marks the start of a new match.
pub const MATCH_START_MARKER: &str = "InitGame:";
/// Marks a player-info event; the name follows ` n\` and ends at `\t\`.
pub const PLAYER_INFO_MARKER: &str = "ClientUserinfoChanged:";
/// Marks a kill event, `... killed <name> by <cause>`.
pub const KILL_MARKER: &str = "Kill:";
/// Present in kill lines where nobody gets credit for the kill.
pub const WORLD_TAG: &str = "<world>";
/// Prefix of an attributable cause tag (`MOD_ROCKET`, `MOD_FALLING`, ...).
pub const CAUSE_TAG_PREFIX: &str = "MOD_";

/// The event vocabulary a match record is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    PlayerInfo,
    KillEvent,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::PlayerInfo, EventKind::KillEvent];

    pub fn marker(self) -> &'static str {
        match self {
            EventKind::PlayerInfo => PLAYER_INFO_MARKER,
            EventKind::KillEvent => KILL_MARKER,
        }
    }

    /// Classifies a line. Player info wins when a line carries both markers.
    pub fn classify(line: &str) -> Option<EventKind> {
        Self::ALL.into_iter().find(|kind| line.contains(kind.marker()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::PlayerInfo => f.write_str("PlayerInfo"),
            EventKind::KillEvent => f.write_str("KillEvent"),
        }
    }
}

/// The raw event lines of one match, grouped by kind in log order.
///
/// Records are built by the [`Segmenter`](crate::Segmenter) and never
/// mutated once sealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Position of the match in the log, starting at 0.
    pub index: usize,
    /// 1-based line number of the `InitGame:` marker.
    pub line: usize,
    events: BTreeMap<EventKind, Vec<String>>,
}

impl MatchRecord {
    pub fn new(index: usize, line: usize) -> Self {
        Self {
            index,
            line,
            events: BTreeMap::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: EventKind, line: &str) {
        self.events.entry(kind).or_default().push(line.to_string());
    }

    /// Lines recorded under `kind`, empty when the match had none.
    pub fn lines(&self, kind: EventKind) -> &[String] {
        self.events.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.events.values().all(Vec::is_empty)
    }
}

/// Why a line carrying a marker yielded no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The named delimiter literal was absent.
    MissingDelimiter(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingDelimiter(delim) => write!(f, "missing delimiter {delim:?}"),
        }
    }
}

/// Outcome of pulling one value out of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction<T> {
    Extracted(T),
    Skipped(SkipReason),
}

impl<T> Extraction<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Extraction::Extracted(value) => Some(value),
            Extraction::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Extraction::Skipped(_))
    }
}

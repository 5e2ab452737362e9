//! # qalog
//!
//! Match segmentation and kill statistics for Quake 3 Arena server logs
//! (`games.log`).
//!
//! ## Overview
//!
//! A server log is one flat stream of timestamped lines covering many
//! matches. This crate:
//!
//! - **Segments** the stream into one [`MatchRecord`](ir::MatchRecord) per
//!   `InitGame:` marker, keeping only `ClientUserinfoChanged:` and `Kill:`
//!   lines
//! - **Extracts** player names, victims and `MOD_*` cause tags from those
//!   lines, skipping lines of the wrong shape instead of failing
//! - **Aggregates** each match into a [`MatchStats`](stats::MatchStats)
//!   bundle: roster, total kills, kills by player, deaths to `<world>`, kills
//!   by cause and the reconciled per-player count
//!
//! ## Architecture
//!
//! ```text
//!  games.log ──update()──► Segmenter ──Vec<MatchRecord>──► MatchStats::collect()
//!                              │                                   │
//!                              │ finish()                          ▼
//!                              ▼                            MatchesReport (JSON)
//!                        last open match
//! ```
//!
//! ## Examples
//!
//! ### Segmenting a stream
//!
//! ```no_run
//! use qalog::{Config, MatchStats};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("games.log")?;
//! let matches = qalog::segment(BufReader::new(file))?;
//! let config = Config::new();
//!
//! for record in &matches {
//!     let stats = MatchStats::collect(record, &config);
//!     println!("game_{}: {} kills", stats.index, stats.total_kills);
//! }
//! # Ok::<(), qalog::Error>(())
//! ```
//!
//! ### Incremental updates
//!
//! ```
//! use qalog::Segmenter;
//!
//! let mut segmenter = Segmenter::new();
//! let sealed = segmenter.update("  0:00 InitGame: \\sv_hostname\\q3\n  0:25 Kill: 2 3 7: Zeh kil");
//! assert!(sealed.is_empty());
//!
//! let sealed = segmenter.update("led Mocinha by MOD_ROCKET\n  0:00 InitGame: \\sv_hostname\\q3\n");
//! assert_eq!(sealed.len(), 1);
//!
//! let rest = segmenter.finish();
//! assert_eq!(rest.len(), 1);
//! ```
//!
//! ### Exporting to JSON
//!
//! ```
//! use qalog::{Config, MatchStats, MatchesReport, Segmenter};
//!
//! let log = "InitGame:\nKill: 1022 2 22: <world> killed Zeh by MOD_FALLING\n";
//! let config = Config::new();
//! let stats: Vec<MatchStats> = Segmenter::new()
//!     .parse(log)
//!     .iter()
//!     .map(|record| MatchStats::collect(record, &config))
//!     .collect();
//!
//! let json = MatchesReport::from_stats(&stats).to_json_pretty()?;
//! assert!(json.contains("\"game_0\""));
//! # Ok::<(), qalog::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod extract;
/// Match records and the event vocabulary.
pub mod ir;
/// Streaming segmenter.
pub mod parser;
pub mod report;
pub mod stats;

#[cfg(test)]
mod tests;

pub use config::{Config, ReconcileMode};
pub use error::{Error, Result};
pub use ir::{EventKind, MatchRecord};
pub use parser::{Segmenter, segment};
pub use report::{GameReport, MatchesReport};
pub use stats::MatchStats;

use std::io::BufRead;

/// Segments `reader` and collects the statistics of every match, in log order.
pub fn analyze<R: BufRead>(reader: R, config: &Config) -> Result<Vec<MatchStats>> {
    let matches = segment(reader)?;
    Ok(matches
        .iter()
        .map(|record| MatchStats::collect(record, config))
        .collect())
}

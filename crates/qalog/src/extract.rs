//! Field extraction from single event lines.
//!
//! Every helper splits on literal delimiters and never indexes past what the
//! line actually holds: a line missing a delimiter comes back as
//! [`Extraction::Skipped`] instead of aborting the caller. A blank value is
//! still a value and is returned as `""`.

use crate::ir::{Extraction, SkipReason};

const NAME_OPEN: &str = " n\\";
const NAME_CLOSE: &str = "\\t\\";
const VICTIM_OPEN: &str = "killed ";
const VICTIM_CLOSE: &str = " by";
const CAUSE_OPEN: &str = "by ";

/// Player name of a `ClientUserinfoChanged:` line, `... n\<name>\t\...`.
pub fn player_name(line: &str) -> Extraction<&str> {
    segment_between(line, NAME_OPEN, NAME_CLOSE)
}

/// The name following `killed ` in a `Kill:` line.
///
/// For `<world>` kills this is the player who died to the environment.
pub fn victim_name(line: &str) -> Extraction<&str> {
    segment_between(line, VICTIM_OPEN, VICTIM_CLOSE)
}

/// The cause tag following `by ` in a `Kill:` line, e.g. `MOD_RAILGUN`.
pub fn cause_tag(line: &str) -> Extraction<&str> {
    match line.split(CAUSE_OPEN).nth(1) {
        Some(rest) => Extraction::Extracted(rest.trim()),
        None => Extraction::Skipped(SkipReason::MissingDelimiter(CAUSE_OPEN)),
    }
}

/// Takes the text after the first `open` up to the next `open`, then cuts it
/// at `close`. A missing `close` keeps the whole segment.
fn segment_between<'a>(line: &'a str, open: &'static str, close: &str) -> Extraction<&'a str> {
    let Some(rest) = line.split(open).nth(1) else {
        return Extraction::Skipped(SkipReason::MissingDelimiter(open));
    };
    let value = rest.split(close).next().unwrap_or(rest);
    Extraction::Extracted(value.trim())
}

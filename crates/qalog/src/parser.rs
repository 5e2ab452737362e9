use crate::error::Result;
use crate::ir::{EventKind, MATCH_START_MARKER, MatchRecord};
use std::io::BufRead;

/// A streaming segmenter for match logs.
///
/// `Segmenter` splits a flat line stream into one [`MatchRecord`] per
/// `InitGame:` marker. Input may arrive in chunks of any size; lines are only
/// classified once their terminator has been seen, so the result does not
/// depend on how the input was chunked.
pub struct Segmenter {
    current: Option<MatchRecord>,
    buffer: String,
    line_number: usize,
    matches_seen: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Creates a segmenter with no match open.
    pub fn new() -> Self {
        Self {
            current: None,
            buffer: String::new(),
            line_number: 0,
            matches_seen: 0,
        }
    }

    /// Appends input to the internal buffer and processes every complete line.
    ///
    /// # Returns
    ///
    /// The match records sealed by this chunk, i.e. every open match that was
    /// followed by a new `InitGame:` marker.
    pub fn update(&mut self, input: &str) -> Vec<MatchRecord> {
        self.buffer.push_str(input);
        self.process_buffer()
    }

    /// Consumes the segmenter, treating any buffered partial line as the last
    /// line of the log and sealing the match still open.
    pub fn finish(mut self) -> Vec<MatchRecord> {
        let mut sealed = Vec::new();
        if !self.buffer.is_empty() {
            let tail = std::mem::take(&mut self.buffer);
            sealed.extend(self.feed_line(&tail));
        }
        if let Some(record) = self.current.take() {
            sealed.push(Self::seal(record));
        }
        sealed
    }

    /// Segments a whole log held in memory.
    pub fn parse(mut self, input: &str) -> Vec<MatchRecord> {
        let mut matches = self.update(input);
        matches.extend(self.finish());
        matches
    }

    fn process_buffer(&mut self) -> Vec<MatchRecord> {
        let process_len = match self.buffer.rfind('\n') {
            Some(last_nl) => last_nl + 1,
            None => return Vec::new(),
        };

        let chunk: String = self.buffer.drain(..process_len).collect();
        let mut sealed = Vec::new();
        for raw in chunk.split_inclusive('\n') {
            sealed.extend(self.feed_line(raw));
        }
        sealed
    }

    /// Classifies one line. `raw` still carries its terminator, if any.
    fn feed_line(&mut self, raw: &str) -> Option<MatchRecord> {
        self.line_number += 1;

        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let mut sealed = None;
        if line.contains(MATCH_START_MARKER) {
            sealed = self.current.take().map(Self::seal);
            self.current = Some(MatchRecord::new(self.matches_seen, self.line_number));
            self.matches_seen += 1;
        }

        if let Some(record) = self.current.as_mut()
            && let Some(kind) = EventKind::classify(line)
        {
            record.push(kind, line);
        }
        sealed
    }

    fn seal(record: MatchRecord) -> MatchRecord {
        log::trace!(
            "sealed game_{} (line {}, {} player lines, {} kill lines)",
            record.index,
            record.line,
            record.lines(EventKind::PlayerInfo).len(),
            record.lines(EventKind::KillEvent).len(),
        );
        record
    }
}

/// Segments a readable stream.
///
/// Lines are decoded lossily, so stray non-UTF-8 bytes in player names never
/// abort the parse. A read failure aborts the whole parse with
/// [`Error::Io`](crate::Error::Io).
pub fn segment<R: BufRead>(mut reader: R) -> Result<Vec<MatchRecord>> {
    let mut segmenter = Segmenter::new();
    let mut matches = Vec::new();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        matches.extend(segmenter.update(&String::from_utf8_lossy(&raw)));
    }
    matches.extend(segmenter.finish());

    log::info!("segmented {} matches", matches.len());
    Ok(matches)
}

use anyhow::{anyhow, Result};
use std::fmt;

/// An inclusive 1-based interval, over page numbers or inbox positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    pub fn new(start: u32, end: u32) -> Self {
        Range { start, end }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Parse a range expression like "12-123,23-222" or "1-3,5,7-9"
///
/// Tokens are separated by commas; each is a single number or a
/// `start-end` pair. Whitespace around tokens and numbers is ignored,
/// and empty tokens (stray commas) are skipped.
pub fn parse_ranges(s: &str) -> Result<Vec<Range>> {
    let mut ranges = Vec::new();

    for token in s.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let range = if let Some((start, end)) = token.split_once('-') {
            let start: u32 = start.trim().parse().map_err(|_| {
                anyhow!("Invalid range format: '{}'. Use format like '12-123'", token)
            })?;
            let end: u32 = end.trim().parse().map_err(|_| {
                anyhow!("Invalid range format: '{}'. Use format like '12-123'", token)
            })?;

            if start > end {
                return Err(anyhow!(
                    "Start page ({}) cannot be greater than end page ({})",
                    start,
                    end
                ));
            }
            Range::new(start, end)
        } else {
            let page: u32 = token
                .parse()
                .map_err(|_| anyhow!("Invalid page number: '{}'", token))?;
            Range::new(page, page)
        };

        ranges.push(range);
    }

    if ranges.is_empty() {
        return Err(anyhow!("No valid ranges found"));
    }

    Ok(ranges)
}

/// How a range fits within a document or listing of `limit` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamp {
    /// Usable bounds, possibly pulled inward.
    Fit {
        start: u32,
        end: u32,
        floored: bool,
        capped: bool,
    },
    /// The range lies entirely outside 1..=limit.
    Skip,
}

/// Fit a requested range to the available 1..=limit interval.
///
/// The start is floored to 1 first; a range whose floored start still
/// exceeds the limit (or whose end closes before its floored start) is
/// skipped outright, otherwise the end is capped to the limit.
pub fn clamp(range: Range, limit: u32) -> Clamp {
    let start = range.start.max(1);
    if start > limit || range.end < start {
        return Clamp::Skip;
    }

    let end = range.end.min(limit);
    Clamp::Fit {
        start,
        end,
        floored: start != range.start,
        capped: end != range.end,
    }
}

/// Label for a set of ranges as the user requested them, e.g. "1-3,5,7-9"
pub fn label(ranges: &[Range]) -> String {
    ranges
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

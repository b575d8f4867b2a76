//! Date references: a tag name or a free-form date

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, info, instrument};

use shiplog_core::error::GitError;

use crate::repository::{GitRepo, Result};

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M %z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%b %d %Y %H:%M:%S",
    "%b %d %Y %H:%M",
    "%B %d %Y %H:%M",
    "%B %d, %Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%b %d %Y", "%B %d, %Y", "%B %d %Y",
];

/// Parse a free-form date and normalize it to UTC.
///
/// Inputs without an explicit offset are read as local time.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // A trailing `Z` on a form RFC 3339 rejects, e.g. no seconds
    if let Some(naive) = input
        .strip_suffix(['Z', 'z'])
        .and_then(|rest| parse_naive_datetime(rest.trim_end()))
    {
        return Some(Utc.from_utc_datetime(&naive));
    }

    let naive = parse_naive_datetime(input).or_else(|| {
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
            .or_else(|| parse_compact_date(input))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive_datetime(input: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// `YYYYMMDD`
fn parse_compact_date(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(
        input[..4].parse().ok()?,
        input[4..6].parse().ok()?,
        input[6..].parse().ok()?,
    )
}

impl GitRepo {
    /// Resolve a tag name or date string to a UTC instant.
    ///
    /// Tags take precedence and resolve to the author time of the commit
    /// they point at.
    #[instrument(skip(self))]
    pub fn resolve_dateref(&self, reference: &str) -> Result<DateTime<Utc>> {
        if let Some(time) = self.tag_commit_time(reference)? {
            let time = time.with_timezone(&Utc);
            info!(reference, %time, "resolved reference as tag");
            return Ok(time);
        }

        debug!(reference, "not a tag, parsing as date");
        let time = parse_date(reference)
            .ok_or_else(|| GitError::InvalidDate(reference.to_string()))?;
        info!(reference, %time, "resolved reference as date");
        Ok(time)
    }
}

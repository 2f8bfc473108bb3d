use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::slice;

use super::ApplicationDataError;

const DEFAULT_RANGE_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("default range start is a valid calendar date"),
};

const DEFAULT_RANGE_END: NaiveDate = match NaiveDate::from_ymd_opt(2025, 6, 1) {
    Some(date) => date,
    None => panic!("default range end is a valid calendar date"),
};

/// Stage an application has reached in the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApplicationStatus {
    Applied,
    Rejected,
    Screener,
    Interview,
    Offered,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Applied,
            Self::Rejected,
            Self::Screener,
            Self::Interview,
            Self::Offered,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Rejected => "Rejected",
            Self::Screener => "Screener",
            Self::Interview => "Interview",
            Self::Offered => "Offered",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uniform draw over every status, so `rng.gen::<ApplicationStatus>()` works.
impl Distribution<ApplicationStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ApplicationStatus {
        let statuses = ApplicationStatus::ordered();
        statuses[rng.gen_range(0..statuses.len())]
    }
}

/// One row of the applications sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRecord {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Status")]
    pub status: ApplicationStatus,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

impl ApplicationRecord {
    pub const HEADERS: [&'static str; 5] = ["Company", "Position", "Link", "Status", "Date"];
    pub const PLACEHOLDER_LINK: &'static str = "#";
}

/// Ordered rows; row `i` carries the labels `Company {i+1}` and `Position {i+1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationTable {
    records: Vec<ApplicationRecord>,
}

impl ApplicationTable {
    pub(crate) fn from_records(records: Vec<ApplicationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ApplicationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ApplicationTable {
    type Item = &'a ApplicationRecord;
    type IntoIter = slice::Iter<'a, ApplicationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Half-open window `[start, end)` that application dates are sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ApplicationDataError> {
        if start >= end {
            return Err(ApplicationDataError::EmptyDateRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// Builds a range running from midnight of `start` to midnight of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, ApplicationDataError> {
        Self::new(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Maps a fraction in `[0, 1)` onto the range and drops the time of day.
    pub fn interpolate(&self, fraction: f64) -> NaiveDate {
        let span_ms = (self.end - self.start).num_milliseconds();
        let offset_ms = (span_ms as f64 * fraction.clamp(0.0, 1.0)) as i64;
        let offset_ms = offset_ms.min(span_ms.saturating_sub(1));

        (self.start + Duration::milliseconds(offset_ms)).date()
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_RANGE_START.and_time(NaiveTime::MIN),
            end: DEFAULT_RANGE_END.and_time(NaiveTime::MIN),
        }
    }
}

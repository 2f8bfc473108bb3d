use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::domain::{ApplicationRecord, ApplicationTable, DateRange};

/// Produces synthetic application rows.
///
/// Statuses are drawn uniformly with replacement and dates uniformly from the
/// configured [`DateRange`]. A seeded generator is fully reproducible.
#[derive(Debug, Clone)]
pub struct FakeApplicationGenerator {
    rng: StdRng,
    range: DateRange,
}

impl FakeApplicationGenerator {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a seed is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            range: DateRange::default(),
        }
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn generate(&mut self, count: usize) -> ApplicationTable {
        let records = (1..=count).map(|number| self.record(number)).collect();
        debug!(count, "generated fake application records");
        ApplicationTable::from_records(records)
    }

    fn record(&mut self, number: usize) -> ApplicationRecord {
        let status = self.rng.gen();
        let date = self.range.interpolate(self.rng.gen::<f64>());

        ApplicationRecord {
            company: format!("Company {number}"),
            position: format!("Position {number}"),
            link: ApplicationRecord::PLACEHOLDER_LINK.to_string(),
            status,
            date,
        }
    }
}

impl Default for FakeApplicationGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

//! Builders and fixtures for integration tests

use maskviz::types::{Dataset, StateRecord};

/// Fluent builder for [`StateRecord`] fixtures
pub struct RecordBuilder {
    record: StateRecord,
}

impl RecordBuilder {
    pub fn new(state: &str) -> Self {
        Self {
            record: StateRecord {
                state: state.to_string(),
                state_code: "XX".to_string(),
                region: "West".to_string(),
                cases: 100_000.0,
                deaths: 1_000.0,
                mask_use: 50_000.0,
                population: 5_000_000.0,
                mask_shares: [0.5, 0.2, 0.15, 0.1, 0.05],
            },
        }
    }

    pub fn code(mut self, code: &str) -> Self {
        self.record.state_code = code.to_string();
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.record.region = region.to_string();
        self
    }

    pub fn cases(mut self, cases: f64) -> Self {
        self.record.cases = cases;
        self
    }

    pub fn deaths(mut self, deaths: f64) -> Self {
        self.record.deaths = deaths;
        self
    }

    pub fn mask_use(mut self, mask_use: f64) -> Self {
        self.record.mask_use = mask_use;
        self
    }

    pub fn population(mut self, population: f64) -> Self {
        self.record.population = population;
        self
    }

    pub fn shares(mut self, shares: [f64; 5]) -> Self {
        self.record.mask_shares = shares;
        self
    }

    pub fn build(self) -> StateRecord {
        self.record
    }
}

/// A small dataset covering all four regions plus the annotated states
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        RecordBuilder::new("California")
            .code("CA")
            .region("West")
            .cases(700_000.0)
            .deaths(12_800.4)
            .mask_use(700_000.0)
            .population(39_500_000.0)
            .shares([0.6, 0.2, 0.1, 0.06, 0.04])
            .build(),
        RecordBuilder::new("Texas")
            .code("TX")
            .region("South")
            .cases(600_000.0)
            .deaths(11_000.0)
            .mask_use(400_000.0)
            .population(29_000_000.0)
            .shares([0.4, 0.25, 0.2, 0.1, 0.05])
            .build(),
        RecordBuilder::new("New York")
            .code("NY")
            .region("Northeast")
            .cases(430_000.0)
            .deaths(32_000.0)
            .mask_use(300_000.0)
            .population(19_400_000.0)
            .shares([0.55, 0.25, 0.1, 0.06, 0.04])
            .build(),
        RecordBuilder::new("Vermont")
            .code("VT")
            .region("Northeast")
            .cases(6_000.0)
            .deaths(58.0)
            .mask_use(4_500.0)
            .population(620_000.0)
            .shares([0.5, 0.3, 0.1, 0.06, 0.04])
            .build(),
        RecordBuilder::new("Ohio")
            .code("OH")
            .region("Midwest")
            .cases(120_000.0)
            .deaths(4_000.0)
            .mask_use(90_000.0)
            .population(11_700_000.0)
            .shares([0.4, 0.25, 0.2, 0.1, 0.05])
            .build(),
    ])
}

/// CSV text matching the remote dataset's schema
pub const FIXTURE_CSV: &str = "\
state,State Code,Region,cases,deaths,Mask Use,Population,ALWAYS,FREQUENTLY,SOMETIMES,RARELY,NEVER
California,CA,West,700000,12800,700000,39500000,0.6,0.2,0.1,0.06,0.04
Texas,TX,South,600000,11000,400000,29000000,0.4,0.25,0.2,0.1,0.05
Vermont,VT,Northeast,6000,58,4500,620000,0.5,0.3,0.1,0.06,0.04
";

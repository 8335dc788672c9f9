//! CSV parsing into the typed dataset
//!
//! The remote resource carries a fixed, case-sensitive header schema. All
//! numeric columns arrive as text; malformed cells coerce to `NaN` with a
//! warning rather than failing the whole load, and the shape binders skip
//! marks whose inputs are NaN. Row order is preserved from the source file.

use crate::error::{MaskVizError, Result};
use crate::types::{Dataset, MaskCategory, StateRecord};

/// Exact column headers the dataset must carry (case-sensitive)
pub const REQUIRED_HEADERS: [&str; 12] = [
    "state",
    "State Code",
    "Region",
    "cases",
    "deaths",
    "Mask Use",
    "Population",
    "ALWAYS",
    "FREQUENTLY",
    "SOMETIMES",
    "RARELY",
    "NEVER",
];

/// Parse raw CSV text into a [`Dataset`].
///
/// Fails with [`MaskVizError::Schema`] when any required header is missing
/// and with [`MaskVizError::Csv`] on structural CSV errors. Malformed
/// numeric cells do not fail the parse; they coerce to `NaN`.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let index_of = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| MaskVizError::Schema(format!("missing column `{}`", name)))
    };

    let state_idx = index_of("state")?;
    let code_idx = index_of("State Code")?;
    let region_idx = index_of("Region")?;
    let cases_idx = index_of("cases")?;
    let deaths_idx = index_of("deaths")?;
    let mask_use_idx = index_of("Mask Use")?;
    let population_idx = index_of("Population")?;
    let mut share_idx = [0usize; 5];
    for category in MaskCategory::ALL {
        share_idx[category.index()] = index_of(category.label())?;
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |i: usize| row.get(i).unwrap_or("");

        let state = field(state_idx).to_string();
        let mut mask_shares = [f64::NAN; 5];
        for category in MaskCategory::ALL {
            mask_shares[category.index()] =
                coerce_numeric(field(share_idx[category.index()]), category.label(), &state);
        }

        records.push(StateRecord {
            state_code: field(code_idx).to_string(),
            region: field(region_idx).to_string(),
            cases: coerce_numeric(field(cases_idx), "cases", &state),
            deaths: coerce_numeric(field(deaths_idx), "deaths", &state),
            mask_use: coerce_numeric(field(mask_use_idx), "Mask Use", &state),
            population: coerce_numeric(field(population_idx), "Population", &state),
            mask_shares,
            state,
        });
    }

    Ok(Dataset::new(records))
}

/// Numeric coercion with the NaN sentinel fallback.
fn coerce_numeric(raw: &str, column: &str, state: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(column, state, raw, "malformed numeric cell, coercing to NaN");
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
state,State Code,Region,cases,deaths,Mask Use,Population,ALWAYS,FREQUENTLY,SOMETIMES,RARELY,NEVER
Texas,TX,South,500000,9500.4,350000,29000000,0.5,0.2,0.15,0.1,0.05
Vermont,VT,Northeast,6000,58,4500,620000,0.7,0.15,0.1,0.03,0.02
";

    #[test]
    fn test_parse_preserves_source_order() {
        let dataset = parse_dataset(GOOD_CSV).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].state, "Texas");
        assert_eq!(dataset.records()[1].state, "Vermont");
    }

    #[test]
    fn test_parse_typed_fields() {
        let dataset = parse_dataset(GOOD_CSV).unwrap();
        let texas = dataset.find_state("Texas").unwrap();
        assert_eq!(texas.state_code, "TX");
        assert_eq!(texas.region, "South");
        assert_eq!(texas.cases, 500_000.0);
        assert_eq!(texas.deaths, 9_500.4);
        assert_eq!(texas.mask_share(MaskCategory::Always), 0.5);
        assert_eq!(texas.mask_share(MaskCategory::Never), 0.05);
    }

    #[test]
    fn test_missing_header_is_schema_error() {
        let csv = "state,Region,cases\nTexas,South,100\n";
        let err = parse_dataset(csv).unwrap_err();
        match err {
            MaskVizError::Schema(msg) => assert!(msg.contains("State Code")),
            other => panic!("expected schema error, got {other}"),
        }
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        let csv = GOOD_CSV.replace("State Code", "state code");
        let err = parse_dataset(&csv).unwrap_err();
        assert!(matches!(err, MaskVizError::Schema(_)));
    }

    #[test]
    fn test_malformed_numeric_coerces_to_nan() {
        let csv = GOOD_CSV.replace("500000", "n/a");
        let dataset = parse_dataset(&csv).unwrap();
        let texas = dataset.find_state("Texas").unwrap();
        assert!(texas.cases.is_nan());
        // The rest of the record is untouched.
        assert_eq!(texas.deaths, 9_500.4);
    }

    #[test]
    fn test_empty_body_parses_to_empty_dataset() {
        let header = GOOD_CSV.lines().next().unwrap();
        let dataset = parse_dataset(header).unwrap();
        assert!(dataset.is_empty());
    }
}

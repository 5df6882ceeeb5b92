use serde::{Deserialize, Serialize};

/// One cleaned row of the contracts CSV: year, normalized scope and the
/// contract value already converted from the Brazilian decimal format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub year: i32,
    pub scope: String,
    pub value: f64,
}

/// Sum of contract values for one (year, scope) group, with the derived
/// billions column used for plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    pub year: i32,
    pub scope: String,
    pub total_value: f64,
    pub value_billions: f64,
}

impl AggregatedPoint {
    pub fn new(year: i32, scope: String, total_value: f64) -> Self {
        AggregatedPoint {
            year,
            scope,
            total_value,
            value_billions: total_value / 1_000_000_000.0,
        }
    }
}

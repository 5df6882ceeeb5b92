// Aggregation of cleaned contract records by (year, scope).
use shared::models::{AggregatedPoint, ContractRecord};
use std::collections::BTreeMap;

/// Groups records by `(year, scope)` and sums the contract value within each
/// group. Each pair appears exactly once in the output; ordering is
/// year-then-scope as a side effect of the BTreeMap, but callers must not
/// depend on input row order.
pub fn aggregate_by_year_and_scope(records: &[ContractRecord]) -> Vec<AggregatedPoint> {
    let mut totals: BTreeMap<(i32, &str), f64> = BTreeMap::new();

    for record in records {
        *totals.entry((record.year, record.scope.as_str())).or_insert(0.0) += record.value;
    }

    totals
        .into_iter()
        .map(|((year, scope), total)| AggregatedPoint::new(year, scope.to_string(), total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, scope: &str, value: f64) -> ContractRecord {
        ContractRecord {
            year,
            scope: scope.to_string(),
            value,
        }
    }

    #[test]
    fn test_groups_and_sums_by_year_and_scope() {
        // Scopes arrive already normalized by the loader.
        let records = vec![
            record(2020, "FEDERAL", 1000.0),
            record(2020, "FEDERAL", 500.0),
            record(2021, "ESTADUAL", 2500.50),
        ];
        let points = aggregate_by_year_and_scope(&records);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2020);
        assert_eq!(points[0].scope, "FEDERAL");
        assert!((points[0].total_value - 1500.0).abs() < 1e-9);
        assert_eq!(points[1].year, 2021);
        assert_eq!(points[1].scope, "ESTADUAL");
        assert!((points[1].total_value - 2500.50).abs() < 1e-9);
    }

    #[test]
    fn test_each_pair_appears_once() {
        let records = vec![
            record(2020, "MUNICIPAL", 1.0),
            record(2020, "MUNICIPAL", 2.0),
            record(2020, "FEDERAL", 3.0),
            record(2021, "MUNICIPAL", 4.0),
        ];
        let points = aggregate_by_year_and_scope(&records);

        let mut pairs: Vec<(i32, &str)> =
            points.iter().map(|p| (p.year, p.scope.as_str())).collect();
        let before = pairs.len();
        pairs.dedup();
        assert_eq!(pairs.len(), before);
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_grouping_conserves_yearly_totals() {
        let records = vec![
            record(2020, "FEDERAL", 1_200_000_000.0),
            record(2020, "ESTADUAL", 300_000_000.0),
            record(2020, "FEDERAL", 800_000_000.0),
            record(2021, "MUNICIPAL", 50_000_000.0),
        ];
        let points = aggregate_by_year_and_scope(&records);

        for year in [2020, 2021] {
            let from_records: f64 = records
                .iter()
                .filter(|r| r.year == year)
                .map(|r| r.value)
                .sum();
            let from_points: f64 = points
                .iter()
                .filter(|p| p.year == year)
                .map(|p| p.value_billions * 1_000_000_000.0)
                .sum();
            assert!((from_records - from_points).abs() < 1e-3);
        }
    }

    #[test]
    fn test_output_independent_of_input_order() {
        let forward = vec![
            record(2020, "FEDERAL", 1.0),
            record(2021, "ESTADUAL", 2.0),
            record(2020, "MUNICIPAL", 3.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            aggregate_by_year_and_scope(&forward),
            aggregate_by_year_and_scope(&reversed)
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate_by_year_and_scope(&[]).is_empty());
    }
}

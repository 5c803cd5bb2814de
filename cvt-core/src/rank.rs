//! Table ranking.

use cvt_api::entity::EntitySnapshot;
use cvt_api::metric::MetricKind;

/// Sort entities by `kind`, highest first.
///
/// A missing metric ranks as 0. Equal values keep their input order:
/// `sort_by_key` is a stable merge sort, and `Reverse` only flips the key
/// comparison, not the tie handling.
pub fn rank(entities: &[EntitySnapshot], kind: MetricKind) -> Vec<EntitySnapshot> {
    let mut ranked = entities.to_vec();
    ranked.sort_by_key(|entity| std::cmp::Reverse(entity.metric(kind).unwrap_or(0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvt_api::entity::CountryInfo;

    fn entity(code: &str, cases: Option<i64>) -> EntitySnapshot {
        EntitySnapshot {
            country: Some(format!("Country {}", code)),
            country_info: Some(CountryInfo {
                iso2: Some(code.to_string()),
                ..Default::default()
            }),
            cases,
            ..Default::default()
        }
    }

    fn codes(entities: &[EntitySnapshot]) -> Vec<&str> {
        entities.iter().filter_map(|e| e.code()).collect()
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let input = vec![entity("A", Some(10)), entity("B", Some(10)), entity("C", Some(5))];
        assert_eq!(codes(&rank(&input, MetricKind::Cases)), vec!["A", "B", "C"]);

        let input = vec![entity("C", Some(5)), entity("B", Some(10)), entity("A", Some(10))];
        assert_eq!(codes(&rank(&input, MetricKind::Cases)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_missing_metric_ranks_as_zero() {
        let input = vec![entity("A", None), entity("B", Some(3))];
        assert_eq!(codes(&rank(&input, MetricKind::Cases)), vec!["B", "A"]);

        let input = vec![entity("A", None), entity("B", Some(0)), entity("C", None)];
        assert_eq!(codes(&rank(&input, MetricKind::Cases)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rank_by_other_metric() {
        let mut a = entity("A", Some(100));
        a.deaths = Some(1);
        let mut b = entity("B", Some(1));
        b.deaths = Some(100);
        assert_eq!(codes(&rank(&[a, b], MetricKind::Deaths)), vec!["B", "A"]);
    }

    #[test]
    fn test_rank_leaves_input_untouched() {
        let input = vec![entity("A", Some(1)), entity("B", Some(2))];
        let _ = rank(&input, MetricKind::Cases);
        assert_eq!(codes(&input), vec!["A", "B"]);
    }
}

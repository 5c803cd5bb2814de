//! Cumulative series to chart points.

use chrono::NaiveDate;
use cvt_api::metric::MetricKind;
use cvt_api::timeline::Timeline;
use serde::Serialize;

/// A single chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: i64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: i64) -> Self {
        Self { date, value }
    }
}

/// Convert the timeline's series for `kind` into chart points.
///
/// Recovered is shown as a running total, skipping dates that have not
/// started reporting (zero). Cases and deaths are shown as day-over-day
/// increases; the first date has no predecessor and negative deltas (data
/// corrections) are dropped. A missing series yields no points.
pub fn transform(timeline: &Timeline, kind: MetricKind) -> Vec<SeriesPoint> {
    let Some(series) = timeline.series(kind) else {
        return Vec::new();
    };
    if kind.is_cumulative_chart() {
        reporting_totals(&series.0)
    } else {
        daily_deltas(&series.0)
    }
}

/// Running totals, omitting non-positive entries. Input order is preserved.
pub fn reporting_totals(series: &[(NaiveDate, i64)]) -> Vec<SeriesPoint> {
    series
        .iter()
        .filter(|(_, total)| *total > 0)
        .map(|&(date, total)| SeriesPoint::new(date, total))
        .collect()
}

/// Non-negative differences between consecutive entries, dated at the later
/// entry. The baseline always advances, including past a dropped entry.
pub fn daily_deltas(series: &[(NaiveDate, i64)]) -> Vec<SeriesPoint> {
    series
        .windows(2)
        .filter_map(|pair| {
            let (_, previous) = pair[0];
            let (date, current) = pair[1];
            let delta = current - previous;
            (delta >= 0).then(|| SeriesPoint::new(date, delta))
        })
        .collect()
}

/// Whether a chart has anything worth drawing; otherwise the view shows its
/// "no historical data" state.
pub fn has_chart_data(points: &[SeriesPoint]) -> bool {
    points.iter().any(|p| p.value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvt_api::timeline::CumulativeSeries;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(values: &[i64]) -> CumulativeSeries {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (ymd(2021, 1, 1) + chrono::Duration::days(i as i64), *v))
            .collect()
    }

    fn timeline_with(kind: MetricKind, values: &[i64]) -> Timeline {
        let mut timeline = Timeline::default();
        match kind {
            MetricKind::Cases => timeline.cases = Some(series(values)),
            MetricKind::Recovered => timeline.recovered = Some(series(values)),
            MetricKind::Deaths => timeline.deaths = Some(series(values)),
        }
        timeline
    }

    #[test]
    fn test_negative_delta_dropped_not_clamped() {
        let timeline: Timeline = serde_json::from_str(
            r#"{"cases": {"2021-01-01": 100, "2021-01-02": 150, "2021-01-03": 140}}"#,
        )
        .unwrap();
        let points = transform(&timeline, MetricKind::Cases);
        assert_eq!(points, vec![SeriesPoint::new(ymd(2021, 1, 2), 50)]);
    }

    #[test]
    fn test_baseline_advances_past_correction() {
        // 150 -> 140 is dropped, 140 -> 160 is measured from 140
        let points = transform(&timeline_with(MetricKind::Deaths, &[100, 150, 140, 160]), MetricKind::Deaths);
        let values: Vec<i64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![50, 20]);
    }

    #[test]
    fn test_monotonic_series_yields_len_minus_one() {
        let input = [0, 0, 3, 3, 10, 25, 25, 40];
        for kind in [MetricKind::Cases, MetricKind::Deaths] {
            let points = transform(&timeline_with(kind, &input), kind);
            assert_eq!(points.len(), input.len() - 1);
            assert!(points.iter().all(|p| p.value >= 0));
            assert!(points.iter().all(|p| p.date != ymd(2021, 1, 1)));
        }
    }

    #[test]
    fn test_deltas_bounded_by_input_length() {
        let input = [5, 2, 9, 1, 1, 0, 7];
        let points = transform(&timeline_with(MetricKind::Cases, &input), MetricKind::Cases);
        assert!(points.len() <= input.len() - 1);
        assert!(points.iter().all(|p| p.value >= 0));
    }

    #[test]
    fn test_single_date_yields_nothing() {
        let points = transform(&timeline_with(MetricKind::Cases, &[42]), MetricKind::Cases);
        assert!(points.is_empty());
    }

    #[test]
    fn test_recovered_keeps_positive_totals_in_order() {
        let input = [0, 0, 5, 0, 8, 12];
        let points = transform(&timeline_with(MetricKind::Recovered, &input), MetricKind::Recovered);
        let dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![ymd(2021, 1, 3), ymd(2021, 1, 5), ymd(2021, 1, 6)]);
        assert!(points.iter().all(|p| p.value > 0));
        assert_eq!(points[2].value, 12);
    }

    #[test]
    fn test_missing_series_is_empty() {
        let timeline = timeline_with(MetricKind::Cases, &[1, 2, 3]);
        assert!(transform(&timeline, MetricKind::Recovered).is_empty());
        assert!(transform(&Timeline::default(), MetricKind::Deaths).is_empty());
    }

    #[test]
    fn test_transform_is_idempotent() {
        let timeline = timeline_with(MetricKind::Cases, &[1, 4, 3, 9]);
        assert_eq!(
            transform(&timeline, MetricKind::Cases),
            transform(&timeline, MetricKind::Cases)
        );
    }

    #[test]
    fn test_has_chart_data() {
        assert!(!has_chart_data(&[]));
        assert!(!has_chart_data(&[SeriesPoint::new(ymd(2021, 1, 2), 0)]));
        assert!(has_chart_data(&[SeriesPoint::new(ymd(2021, 1, 2), 3)]));
    }
}

//! Per-metric colours and map circle scaling.

use cvt_api::metric::MetricKind;
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct MetricStyle {
    pub hex: &'static str,
    pub rgb: &'static str,
    /// Fill colour at half opacity
    pub half_op: &'static str,
    /// Map circle radius per square-rooted unit, in meters
    pub multiplier: f64,
}

pub fn metric_style(kind: MetricKind) -> MetricStyle {
    match kind {
        MetricKind::Cases => MetricStyle {
            hex: "#CC1034",
            rgb: "rgb(204, 16, 52)",
            half_op: "rgba(204, 16, 52, 0.5)",
            multiplier: 400.0,
        },
        MetricKind::Recovered => MetricStyle {
            hex: "#7dd71d",
            rgb: "rgb(125, 215, 29)",
            half_op: "rgba(125, 215, 29, 0.5)",
            multiplier: 500.0,
        },
        MetricKind::Deaths => MetricStyle {
            hex: "#fb4443",
            rgb: "rgb(251, 68, 67)",
            half_op: "rgba(251, 68, 67, 0.5)",
            multiplier: 1200.0,
        },
    }
}

/// Border colour of the selected table row.
pub fn highlight_color(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Recovered => "#7dd71d",
        _ => "#cc1034",
    }
}

/// Tiles for cases and deaths get the red accent.
pub fn is_red(kind: MetricKind) -> bool {
    !matches!(kind, MetricKind::Recovered)
}

/// Circle radius in meters; negative values draw nothing.
pub fn circle_radius(value: Option<i64>, kind: MetricKind) -> f64 {
    let value = value.unwrap_or(0).max(0) as f64;
    value.sqrt() * metric_style(kind).multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_radius() {
        assert_eq!(circle_radius(Some(10_000), MetricKind::Cases), 40_000.0);
        assert_eq!(circle_radius(Some(100), MetricKind::Deaths), 12_000.0);
        assert_eq!(circle_radius(None, MetricKind::Recovered), 0.0);
        assert_eq!(circle_radius(Some(-4), MetricKind::Cases), 0.0);
    }
}

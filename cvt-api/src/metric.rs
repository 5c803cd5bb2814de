use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The statistic the dashboard is currently focused on.
///
/// `Cases` is the primary metric and the default. The same kind drives the
/// table ranking, the map circle sizes and the line chart.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl MetricKind {
    /// All kinds in tile order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Cases, MetricKind::Recovered, MetricKind::Deaths];

    /// Wire name, as used by the API field names and historical series keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Cases => "cases",
            MetricKind::Recovered => "recovered",
            MetricKind::Deaths => "deaths",
        }
    }

    /// Capitalized name for headings ("Cases", "Recovered", "Deaths").
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Cases => "Cases",
            MetricKind::Recovered => "Recovered",
            MetricKind::Deaths => "Deaths",
        }
    }

    /// Summary tile title.
    pub fn tile_title(&self) -> &'static str {
        match self {
            MetricKind::Cases => "Coronavirus Cases",
            MetricKind::Recovered => "Recovered",
            MetricKind::Deaths => "Deaths",
        }
    }

    /// Recovered is charted as a running total; the others as daily deltas.
    pub fn is_cumulative_chart(&self) -> bool {
        matches!(self, MetricKind::Recovered)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cases" => Ok(MetricKind::Cases),
            "recovered" => Ok(MetricKind::Recovered),
            "deaths" => Ok(MetricKind::Deaths),
            other => anyhow::bail!("unknown metric kind: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MetricKind;

    #[test]
    fn test_metric_kind_parse() {
        assert_eq!("cases".parse::<MetricKind>().unwrap(), MetricKind::Cases);
        assert_eq!("Deaths".parse::<MetricKind>().unwrap(), MetricKind::Deaths);
        assert!("active".parse::<MetricKind>().is_err());
    }

    #[test]
    fn test_metric_kind_serde_names() {
        let json = serde_json::to_string(&MetricKind::Recovered).unwrap();
        assert_eq!(json, "\"recovered\"");
        assert_eq!(MetricKind::default(), MetricKind::Cases);
    }
}

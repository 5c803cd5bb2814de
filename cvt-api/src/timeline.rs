use crate::metric::MetricKind;
use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Date format used by disease.sh historical keys: "M/D/YY", e.g. "1/22/20".
pub const HISTORICAL_DATE_FORMAT: &str = "%m/%d/%y";

/// ISO date format, also accepted for historical keys.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a historical series key in either supported format.
pub fn parse_series_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, HISTORICAL_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, ISO_DATE_FORMAT))
        .ok()
}

/// An ordered cumulative-count series: `(date, running total)` pairs in the
/// order the API sent them.
///
/// Deserialized from a JSON object keyed by date. Entries are kept in
/// document order rather than key order, since "1/10/21" sorts before
/// "1/2/21" as a string.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CumulativeSeries(pub Vec<(NaiveDate, i64)>);

impl CumulativeSeries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, i64)> for CumulativeSeries {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, i64)>>(iter: T) -> Self {
        CumulativeSeries(iter.into_iter().collect())
    }
}

struct CumulativeSeriesVisitor;

impl<'de> Visitor<'de> for CumulativeSeriesVisitor {
    type Value = CumulativeSeries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of date to cumulative count")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut points = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, i64>()? {
            let date = parse_series_date(&key)
                .ok_or_else(|| de::Error::custom(format!("invalid series date: {}", key)))?;
            points.push((date, value));
        }
        Ok(CumulativeSeries(points))
    }
}

impl<'de> Deserialize<'de> for CumulativeSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CumulativeSeriesVisitor)
    }
}

impl Serialize for CumulativeSeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (date, value) in &self.0 {
            map.serialize_entry(&date.format(HISTORICAL_DATE_FORMAT).to_string(), value)?;
        }
        map.end()
    }
}

/// Historical series for one entity over the trailing window.
///
/// This is the body of `/historical/all`, and the `timeline` field of
/// `/historical/{country}`. Any series may be missing.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub cases: Option<CumulativeSeries>,
    #[serde(default)]
    pub deaths: Option<CumulativeSeries>,
    #[serde(default)]
    pub recovered: Option<CumulativeSeries>,
}

impl Timeline {
    pub fn series(&self, kind: MetricKind) -> Option<&CumulativeSeries> {
        match kind {
            MetricKind::Cases => self.cases.as_ref(),
            MetricKind::Recovered => self.recovered.as_ref(),
            MetricKind::Deaths => self.deaths.as_ref(),
        }
    }
}

/// Body of `/historical/{country}`.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct CountryHistorical {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timeline: Timeline,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_preserves_document_order() {
        let series: CumulativeSeries =
            serde_json::from_str(r#"{"1/9/21": 5, "1/10/21": 7, "1/2/21": 1}"#).unwrap();
        assert_eq!(
            series.0,
            vec![(ymd(2021, 1, 9), 5), (ymd(2021, 1, 10), 7), (ymd(2021, 1, 2), 1)]
        );
    }

    #[test]
    fn test_series_accepts_iso_dates() {
        let series: CumulativeSeries =
            serde_json::from_str(r#"{"2021-01-01": 100, "2021-01-02": 150}"#).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.0[1], (ymd(2021, 1, 2), 150));
    }

    #[test]
    fn test_series_rejects_bad_date() {
        let result: Result<CumulativeSeries, _> = serde_json::from_str(r#"{"yesterday": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_worldwide_timeline_shape() {
        let timeline: Timeline = serde_json::from_str(
            r#"{"cases": {"3/8/23": 676024901, "3/9/23": 676082941}, "deaths": {"3/8/23": 6877749}, "recovered": {}}"#,
        )
        .unwrap();
        assert_eq!(timeline.series(MetricKind::Cases).map(|s| s.len()), Some(2));
        assert_eq!(timeline.series(MetricKind::Recovered).map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_country_timeline_shape() {
        let historical: CountryHistorical = serde_json::from_str(
            r#"{"country": "France", "province": ["mainland"], "timeline": {"cases": {"3/9/23": 39866718}}}"#,
        )
        .unwrap();
        assert_eq!(historical.country.as_deref(), Some("France"));
        assert!(historical.timeline.series(MetricKind::Deaths).is_none());
    }
}

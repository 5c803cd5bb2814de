use crate::metric::MetricKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved entity code for the worldwide aggregate.
pub const WORLDWIDE: &str = "worldwide";

/// Display name used when a snapshot carries no country name.
pub const WORLDWIDE_NAME: &str = "Worldwide";

/// A geographic coordinate in degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Identifies what the dashboard is showing: the worldwide aggregate or a
/// single country by its ISO2 code (case-sensitive).
#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
pub enum EntityCode {
    #[default]
    Worldwide,
    Country(String),
}

impl EntityCode {
    /// Map a raw code to an entity; the reserved `"worldwide"` value maps to
    /// [`EntityCode::Worldwide`].
    pub fn parse(code: &str) -> Self {
        if code == WORLDWIDE {
            EntityCode::Worldwide
        } else {
            EntityCode::Country(code.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityCode::Worldwide => WORLDWIDE,
            EntityCode::Country(code) => code.as_str(),
        }
    }
}

impl fmt::Display for EntityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic check for a country code taken from user input (URL, CLI).
/// Whether the country actually exists is only known once the collection is
/// fetched.
pub fn is_valid_country_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Country metadata nested in each disease.sh country record.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(rename = "_id", default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
    #[serde(default)]
    pub flag: Option<String>,
}

/// Current aggregate statistics for one country, or for the whole world
/// (in which case `country` and `country_info` are absent).
///
/// Every field is optional: the API omits or nulls fields for some
/// territories and ships (e.g. no ISO2 code, no coordinates).
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySnapshot {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_info: Option<CountryInfo>,
    /// Last update, milliseconds since the Unix epoch
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(default)]
    pub cases: Option<i64>,
    #[serde(default)]
    pub today_cases: Option<i64>,
    #[serde(default)]
    pub recovered: Option<i64>,
    #[serde(default)]
    pub today_recovered: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub today_deaths: Option<i64>,
    #[serde(default)]
    pub active: Option<i64>,
    #[serde(default)]
    pub critical: Option<i64>,
    #[serde(default)]
    pub tests: Option<i64>,
    #[serde(default)]
    pub population: Option<i64>,
}

impl EntitySnapshot {
    /// Display name; the worldwide aggregate has no country name.
    pub fn name(&self) -> &str {
        self.country.as_deref().unwrap_or(WORLDWIDE_NAME)
    }

    /// ISO2 code used in URLs and as the map/table join key.
    pub fn code(&self) -> Option<&str> {
        self.country_info.as_ref()?.iso2.as_deref()
    }

    /// Coordinates, only when both latitude and longitude are reported.
    pub fn location(&self) -> Option<LatLng> {
        let info = self.country_info.as_ref()?;
        Some(LatLng::new(info.lat?, info.long?))
    }

    pub fn flag(&self) -> Option<&str> {
        self.country_info.as_ref()?.flag.as_deref()
    }

    /// Running total for the given metric.
    pub fn metric(&self, kind: MetricKind) -> Option<i64> {
        match kind {
            MetricKind::Cases => self.cases,
            MetricKind::Recovered => self.recovered,
            MetricKind::Deaths => self.deaths,
        }
    }

    /// Today's increase for the given metric.
    pub fn today(&self, kind: MetricKind) -> Option<i64> {
        match kind {
            MetricKind::Cases => self.today_cases,
            MetricKind::Recovered => self.today_recovered,
            MetricKind::Deaths => self.today_deaths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from https://disease.sh/v3/covid-19/countries/FR
    const FRANCE: &str = r#"{
        "updated": 1700000000000,
        "country": "France",
        "countryInfo": {"_id": 250, "iso2": "FR", "iso3": "FRA", "lat": 46, "long": 2,
                        "flag": "https://disease.sh/assets/img/flags/fr.png"},
        "cases": 40138560, "todayCases": 0, "deaths": 167642, "todayDeaths": 0,
        "recovered": 39970918, "todayRecovered": 0, "active": 0, "critical": 869,
        "casesPerOneMillion": 612013, "tests": 271490188, "population": 65584518
    }"#;

    #[test]
    fn test_parse_country_snapshot() {
        let snapshot: EntitySnapshot = serde_json::from_str(FRANCE).unwrap();
        assert_eq!(snapshot.name(), "France");
        assert_eq!(snapshot.code(), Some("FR"));
        assert_eq!(snapshot.location(), Some(LatLng::new(46.0, 2.0)));
        assert_eq!(snapshot.metric(MetricKind::Deaths), Some(167642));
        assert_eq!(snapshot.today(MetricKind::Cases), Some(0));
    }

    #[test]
    fn test_missing_optional_fields() {
        let snapshot: EntitySnapshot = serde_json::from_str(
            r#"{"country": "MS Zaandam", "countryInfo": {"_id": null, "iso2": null, "lat": 0, "long": null}, "cases": 9}"#,
        )
        .unwrap();
        assert_eq!(snapshot.code(), None);
        assert_eq!(snapshot.location(), None);
        assert_eq!(snapshot.metric(MetricKind::Recovered), None);
        assert_eq!(snapshot.metric(MetricKind::Cases), Some(9));
    }

    #[test]
    fn test_worldwide_snapshot_name() {
        let snapshot: EntitySnapshot =
            serde_json::from_str(r#"{"updated": 1, "cases": 704753890, "todayCases": 12}"#).unwrap();
        assert_eq!(snapshot.name(), WORLDWIDE_NAME);
        assert_eq!(snapshot.code(), None);
    }

    #[test]
    fn test_entity_code_parse() {
        assert_eq!(EntityCode::parse("worldwide"), EntityCode::Worldwide);
        assert_eq!(EntityCode::parse("FR"), EntityCode::Country("FR".to_string()));
        // Case-sensitive: only the exact reserved value is worldwide
        assert_eq!(
            EntityCode::parse("Worldwide"),
            EntityCode::Country("Worldwide".to_string())
        );
        assert_eq!(EntityCode::Worldwide.to_string(), "worldwide");
    }

    #[test]
    fn test_valid_country_code() {
        assert!(is_valid_country_code("FR"));
        assert!(!is_valid_country_code(""));
        assert!(!is_valid_country_code("F R"));
        assert!(!is_valid_country_code("../all"));
    }
}

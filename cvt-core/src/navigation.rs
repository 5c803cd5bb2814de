//! URL query state: the `country` parameter is the only persisted state.

use cvt_api::entity::EntityCode;

/// Query parameter carrying the selected country code.
pub const COUNTRY_PARAM: &str = "country";

/// Where the address bar should point after a selection.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum NavigationTarget {
    /// The base path, no query (worldwide)
    Base,
    /// `?country=<code>`
    Entity(String),
}

impl NavigationTarget {
    pub fn for_entity(entity: &EntityCode) -> Self {
        match entity {
            EntityCode::Worldwide => NavigationTarget::Base,
            EntityCode::Country(code) => NavigationTarget::Entity(code.clone()),
        }
    }

    /// Relative URL suitable for `history.pushState`.
    pub fn to_url(&self) -> String {
        match self {
            NavigationTarget::Base => "/".to_string(),
            NavigationTarget::Entity(code) => format!("?{}={}", COUNTRY_PARAM, code),
        }
    }
}

/// Side-effect sink for URL updates.
pub trait Navigator {
    fn navigate(&mut self, target: &NavigationTarget);
}

/// Keeps every navigation in memory. Used by the CLI and in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub history: Vec<NavigationTarget>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<&NavigationTarget> {
        self.history.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &NavigationTarget) {
        self.history.push(target.clone());
    }
}

/// First value of `name` in a query string (leading `?` optional).
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key) == name).then(|| percent_decode(value))
        })
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                out.push((hex_value(bytes[i + 1]) << 4) | hex_value(bytes[i + 2]));
                i += 2;
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?country=FR", COUNTRY_PARAM), Some("FR".to_string()));
        assert_eq!(query_param("a=1&country=US&b", COUNTRY_PARAM), Some("US".to_string()));
        assert_eq!(query_param("", COUNTRY_PARAM), None);
        assert_eq!(query_param("?countries=FR", COUNTRY_PARAM), None);
        assert_eq!(query_param("?country=", COUNTRY_PARAM), Some(String::new()));
    }

    #[test]
    fn test_query_param_decodes() {
        assert_eq!(query_param("?q=a%20b+c", "q"), Some("a b c".to_string()));
        assert_eq!(query_param("?q=100%", "q"), Some("100%".to_string()));
        assert_eq!(query_param("?q=%zz", "q"), Some("%zz".to_string()));
    }

    #[test]
    fn test_navigation_target_urls() {
        assert_eq!(NavigationTarget::for_entity(&EntityCode::Worldwide).to_url(), "/");
        assert_eq!(
            NavigationTarget::for_entity(&EntityCode::Country("FR".to_string())).to_url(),
            "?country=FR"
        );
    }
}

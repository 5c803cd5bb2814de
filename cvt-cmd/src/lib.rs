//! Command implementations for the COVID-19 tracker CLI.
//!
//! Every subcommand talks to disease.sh through [`HttpSource`] and renders
//! the same view model the web dashboard draws, as plain text or CSV.

use clap::{Args, Subcommand};
use cvt_api::client::HttpSource;
use cvt_api::config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_HISTORY_DAYS};
use cvt_api::entity::{is_valid_country_code, EntityCode};
use cvt_api::metric::MetricKind;

pub mod dashboard;
pub mod history;
pub mod rank;
pub mod summary;

/// Connection settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// disease.sh host
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Trailing window for historical series, in days
    #[arg(long, global = true, default_value_t = DEFAULT_HISTORY_DAYS)]
    pub history_days: u32,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl ApiArgs {
    pub fn to_config(&self) -> ApiConfig {
        ApiConfig {
            history_days: self.history_days,
            timeout_secs: self.timeout_secs,
            ..ApiConfig::default()
        }
        .with_base_url(&self.base_url)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Today's increase and running totals for worldwide or one country
    Summary {
        /// ISO2 country code (e.g. FR); worldwide when omitted
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Countries ranked by a metric, descending
    Rank {
        /// cases, recovered or deaths
        #[arg(short, long, default_value_t = MetricKind::Cases)]
        metric: MetricKind,

        /// Only print the first N countries
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Write the ranking to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Chart series for a metric: daily new values, or totals for recovered
    History {
        /// ISO2 country code; worldwide when omitted
        #[arg(short, long)]
        country: Option<String>,

        #[arg(short, long, default_value_t = MetricKind::Cases)]
        metric: MetricKind,
    },

    /// Render the whole dashboard for a page query such as `?country=FR`
    Dashboard {
        /// Page query string, as it would appear in the browser
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(short, long, default_value_t = MetricKind::Cases)]
        metric: MetricKind,

        /// Table rows to print
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
}

pub async fn run(command: Command, api: &ApiArgs) -> anyhow::Result<()> {
    let source = HttpSource::new(api.to_config())?;
    match command {
        Command::Summary { country } => summary::run_summary(&source, entity_arg(country)?).await,
        Command::Rank {
            metric,
            limit,
            output,
        } => rank::run_rank(&source, metric, limit, output.as_deref()).await,
        Command::History { country, metric } => {
            history::run_history(&source, entity_arg(country)?, metric).await
        }
        Command::Dashboard {
            query,
            metric,
            limit,
        } => dashboard::run_dashboard(&source, &query, metric, limit).await,
    }
}

/// `--country` value to an entity; absent means worldwide. Codes are taken
/// as given, the same way the page's `?country=` is.
fn entity_arg(country: Option<String>) -> anyhow::Result<EntityCode> {
    match country {
        None => Ok(EntityCode::Worldwide),
        Some(code) if is_valid_country_code(&code) => Ok(EntityCode::parse(&code)),
        Some(code) => anyhow::bail!("Invalid country code: {:?}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_arg() {
        assert_eq!(entity_arg(None).unwrap(), EntityCode::Worldwide);
        assert_eq!(entity_arg(Some("worldwide".to_string())).unwrap(), EntityCode::Worldwide);
        assert_eq!(
            entity_arg(Some("fr".to_string())).unwrap(),
            EntityCode::Country("fr".to_string())
        );
        assert!(entity_arg(Some("F R".to_string())).is_err());
    }

    #[test]
    fn test_api_args_to_config() {
        let args = ApiArgs {
            base_url: "http://localhost:3000/".to_string(),
            history_days: 30,
            timeout_secs: Some(5),
        };
        let config = args.to_config();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.history_days, 30);
        assert_eq!(config.timeout_secs, Some(5));
    }
}

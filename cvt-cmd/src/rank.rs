//! `rank`: countries ordered by a metric, as a text table or CSV.

use cvt_api::client::DataSource;
use cvt_api::entity::EntitySnapshot;
use cvt_api::metric::MetricKind;
use cvt_core::format::format_count;
use cvt_core::rank::rank;
use cvt_core::view::table_title;
use anyhow::Context;
use log::info;
use std::io::Write;

pub async fn run_rank<S: DataSource>(
    source: &S,
    metric: MetricKind,
    limit: Option<usize>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let countries = source.fetch_countries().await?;
    info!("Ranking {} countries by {}", countries.len(), metric);

    let mut ranked = rank(&countries, metric);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    match output {
        Some(path) => {
            let file = create_output(path)?;
            write_rank_csv(file, &ranked, metric)?;
            info!("Wrote {} rows to {}", ranked.len(), path);
        }
        None => print!("{}", render_rank(&ranked, metric)),
    }
    Ok(())
}

fn create_output(path: &str) -> anyhow::Result<std::fs::File> {
    std::fs::File::create(path).with_context(|| format!("failed to create {}", path))
}

/// Header `rank,code,country,<metric>`; countries without a code get an
/// empty code column.
pub fn write_rank_csv<W: Write>(writer: W, ranked: &[EntitySnapshot], metric: MetricKind) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["rank", "code", "country", metric.as_str()])?;
    for (i, entity) in ranked.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entity.code().unwrap_or_default().to_string(),
            entity.name().to_string(),
            entity.metric(metric).unwrap_or(0).to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_rank(ranked: &[EntitySnapshot], metric: MetricKind) -> String {
    let mut out = format!("{}\n", table_title(metric));
    for (i, entity) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}. {:<32} {:>16}\n",
            i + 1,
            entity.name(),
            format_count(entity.metric(metric))
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvt_api::entity::CountryInfo;

    fn country(code: Option<&str>, name: &str, deaths: i64) -> EntitySnapshot {
        EntitySnapshot {
            country: Some(name.to_string()),
            country_info: Some(CountryInfo {
                iso2: code.map(str::to_string),
                ..Default::default()
            }),
            deaths: Some(deaths),
            ..Default::default()
        }
    }

    #[test]
    fn test_write_rank_csv() {
        let ranked = rank(
            &[
                country(Some("DE"), "Germany", 174_979),
                country(None, "MS Zaandam", 2),
                country(Some("FR"), "France", 167_985),
            ],
            MetricKind::Deaths,
        );
        let mut buf = Vec::new();
        write_rank_csv(&mut buf, &ranked, MetricKind::Deaths).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "rank,code,country,deaths\n1,DE,Germany,174979\n2,FR,France,167985\n3,,MS Zaandam,2\n"
        );
    }

    #[test]
    fn test_create_output_names_path() {
        let path = std::env::temp_dir().join("cvt-missing-dir").join("rank.csv");
        let err = create_output(&path.to_string_lossy()).unwrap_err();
        assert!(err.to_string().starts_with("failed to create "));
        assert!(err.to_string().contains("rank.csv"));
    }

    #[test]
    fn test_render_rank() {
        let ranked = vec![country(Some("FR"), "France", 1_000)];
        let text = render_rank(&ranked, MetricKind::Deaths);
        assert!(text.starts_with("Live Deaths by Country\n"));
        assert!(text.contains("   1. France"));
        assert!(text.contains("1,000"));
    }
}

use chrono::{DateTime, Utc};

use crate::{fetch_show, AggregateReport, CatalogProvider, ShowFailure, ShowSummary};

/// Collect recent episodes for every configured show.
///
/// Shows are processed one after another in configuration order and their
/// episodes are concatenated as they come; nothing is deduplicated or
/// re-sorted. A failing show is recorded in the report and skipped, so this
/// never fails as a whole.
pub async fn aggregate<P, S>(provider: &P, shows: &[S], now: DateTime<Utc>) -> AggregateReport
where
    P: CatalogProvider + ?Sized,
    S: AsRef<str>,
{
    let mut report = AggregateReport::default();

    for reference in shows {
        let reference = reference.as_ref();
        match fetch_show(provider, reference, now).await {
            Ok(show) => {
                let recent_episodes = show.episodes.len();
                report.episodes.extend(show.episodes);
                report.shows.push(ShowSummary {
                    reference: show.reference,
                    catalog_id: show.catalog_id,
                    show_name: show.show_name,
                    recent_episodes,
                    season_failures: show.season_failures,
                });
            }
            Err(error) => report.failures.push(ShowFailure {
                reference: reference.to_string(),
                error,
            }),
        }
    }

    log_report(provider.name(), &report);
    report
}

fn log_report(provider: &str, report: &AggregateReport) {
    for show in &report.shows {
        for failure in &show.season_failures {
            tracing::warn!(
                season = failure.season,
                show = %show.catalog_id,
                "Failed to fetch season: {}",
                failure.error
            );
        }
    }
    for failure in &report.failures {
        tracing::warn!(
            show = %failure.reference,
            "Failed to fetch episodes for show: {}",
            failure.error
        );
    }

    tracing::info!(
        "Collected {} recent episodes from {} shows via {} ({} shows failed, {} seasons skipped)",
        report.episodes.len(),
        report.shows.len(),
        provider,
        report.failures.len(),
        report.skipped_seasons()
    );
}

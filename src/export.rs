// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Full-dataset CSV export of matches.
//!
//! The list endpoint only serves pages, so the full dataset is assembled by
//! fetching sequential pages before serializing.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::api::{ApiClient, MATCHES_PAGE_SIZE};
use crate::error::Result;
use crate::models::Match;

/// Column headers of the exported CSV.
const CSV_HEADERS: [&str; 8] = [
    "Match ID",
    "Sport",
    "Date",
    "Start Time",
    "End Time",
    "Venue ID",
    "Court ID",
    "Players",
];

/// Fetch every match the backend knows about, page by page.
///
/// Pages are fetched sequentially from page 0 until the accumulated count
/// reaches the total reported in the response header. A page shorter than
/// the page size also stops the loop, so a misreported total cannot keep it
/// running forever.
pub async fn fetch_all_matches(
    client: &ApiClient,
    access_token: Option<&str>,
) -> Result<Vec<Match>> {
    let mut all_matches = Vec::new();
    let mut page = 0;

    loop {
        let result = client
            .list_matches(access_token, page, MATCHES_PAGE_SIZE)
            .await?;
        let short_page = result.matches.len() < MATCHES_PAGE_SIZE;
        all_matches.extend(result.matches);

        if all_matches.len() >= result.total || short_page {
            break;
        }
        page += 1;
    }

    Ok(all_matches)
}

/// Serialize matches into CSV with the fixed export header row.
pub fn matches_to_csv(matches: &[Match]) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    lines.extend(matches.iter().map(csv_row));
    lines.join("\n")
}

/// Export file name for the given day: `matches-YYYY-MM-DD.csv`.
pub fn export_file_name(day: NaiveDate) -> String {
    format!("matches-{}.csv", day.format("%Y-%m-%d"))
}

/// Fetch all matches and write them as a dated CSV file into `out_dir`.
/// Returns the path of the written file.
pub async fn export_matches_csv(
    client: &ApiClient,
    access_token: Option<&str>,
    out_dir: &Path,
) -> Result<PathBuf> {
    let matches = fetch_all_matches(client, access_token).await?;
    let csv = matches_to_csv(&matches);

    let path = out_dir.join(export_file_name(Utc::now().date_naive()));
    tokio::fs::write(&path, csv).await?;

    tracing::info!(path = %path.display(), rows = matches.len(), "Matches exported");
    Ok(path)
}

/// One CSV row. Date and time columns come from the fixed-offset slices on
/// [`Match`]; the players column joins every display name across all teams.
fn csv_row(m: &Match) -> String {
    let players = m.player_names().collect::<Vec<_>>().join(", ");
    [
        m.match_id.as_str(),
        m.sport.as_str(),
        m.start_day(),
        m.start_time(),
        m.end_time(),
        m.venue_id.as_str(),
        m.court_id.as_str(),
        players.as_str(),
    ]
    .join(",")
}

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{GHCN_ACCESS_URL, NCEI_DATA_SERVICE_URL};

/// Downloads the raw station file from NOAA, trying each source URL in turn.
///
/// The first endpoint serves the station's full history; the second is the
/// year-bounded data service. A failed attempt (transport error or non-2xx
/// status) moves on to the next URL.
pub struct StationFetcher {
    client: reqwest::Client,
}

impl StationFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Candidate URLs, in the order they are tried.
    pub fn source_urls(station_id: &str, year: i32) -> Vec<String> {
        vec![
            format!("{}/{}.csv", GHCN_ACCESS_URL, station_id),
            format!(
                "{}?dataset=daily-summaries&stations={}&startDate={}-01-01&endDate={}-12-31&format=csv",
                NCEI_DATA_SERVICE_URL, station_id, year, year
            ),
        ]
    }

    /// Download the raw file for a station-year to `dest`.
    pub async fn fetch_year(&self, station_id: &str, year: i32, dest: &Path) -> Result<PathBuf> {
        for url in Self::source_urls(station_id, year) {
            match self.try_fetch(&url).await {
                Ok(body) => {
                    if let Some(parent) = dest.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(dest, body)?;
                    info!(%url, dest = %dest.display(), "downloaded raw station file");
                    return Ok(dest.to_path_buf());
                }
                Err(e) => {
                    warn!(%url, error = %e, "fetch attempt failed, trying next source");
                }
            }
        }

        Err(ProcessingError::DownloadFailed {
            station: station_id.to_string(),
            year,
        })
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for StationFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_url_order() {
        let urls = StationFetcher::source_urls("USW00094728", 1980);

        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("global-historical-climatology-network-daily"));
        assert!(urls[0].ends_with("USW00094728.csv"));
        assert!(urls[1].contains("dataset=daily-summaries"));
        assert!(urls[1].contains("stations=USW00094728"));
        assert!(urls[1].contains("startDate=1980-01-01"));
        assert!(urls[1].contains("endDate=1980-12-31"));
    }
}

//! OpenLigaDB HTTP client.
//!
//! `get_match_data` reports why a request produced nothing; `fetch_matches`
//! absorbs those failures into an empty result so one bad league or season
//! never stops a run.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueShortcut, Season},
    Result,
};


/// Why a `getmatchdata` request yielded no usable JSON.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API returned status {0}")]
    Status(StatusCode),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API returned an empty body")]
    EmptyBody,

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Request(err)
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenLigaClient {
    client: Client,
    base_url: String,
}

impl OpenLigaClient {
    /// Build a client whose every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn match_data_url(&self, league: &LeagueShortcut, season: Season) -> String {
        format!("{}/getmatchdata/{}/{}", self.base_url, league, season)
    }

    /// GET `/getmatchdata/{league}/{season}` and parse the body as JSON.
    ///
    /// Any JSON value is returned as-is, array or not.
    pub async fn get_match_data(
        &self,
        league: &LeagueShortcut,
        season: Season,
    ) -> std::result::Result<Value, FetchError> {
        let url = self.match_data_url(league, season);
        debug!(%url, "requesting match data");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Like [`get_match_data`](Self::get_match_data), but any failure is
    /// logged and turned into an empty array.
    pub async fn fetch_matches(&self, league: &LeagueShortcut, season: Season) -> Value {
        match self.get_match_data(league, season).await {
            Ok(value) => value,
            Err(err) => {
                match &err {
                    FetchError::EmptyBody => {
                        warn!(%league, %season, "no match data published")
                    }
                    FetchError::Status(status) => {
                        warn!(%league, %season, %status, "error response from API")
                    }
                    FetchError::Timeout => warn!(%league, %season, "request timed out"),
                    FetchError::Connect(e) => {
                        warn!(%league, %season, error = %e, "could not connect to API")
                    }
                    FetchError::Request(e) => {
                        warn!(%league, %season, error = %e, "request failed")
                    }
                    FetchError::InvalidJson(e) => {
                        warn!(%league, %season, error = %e, "response was not valid JSON")
                    }
                }
                Value::Array(Vec::new())
            }
        }
    }
}

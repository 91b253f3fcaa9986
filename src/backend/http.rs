// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! HTTP transport for the backend.
//!
//! Uses the blocking `reqwest` client, which is fine because every call is
//! made from the task worker thread and never from the UI thread.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{
    Url,
    blocking::{Client, RequestBuilder},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::backend::{
    Backend, DownloadRequest, DownloadResponse, ParseRequest, ParseResponse, StatusResponse,
    TransportError,
};

const PARSE_PATH: &str = "api/parse";
const DOWNLOAD_PATH: &str = "api/download";
const STATUS_PATH: &str = "api/status";

pub(crate) struct HttpBackend {
    client: Client,
    parse_url: Url,
    download_url: Url,
    status_url: Url,
}

impl HttpBackend {
    /// Creates a backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL or if the
    /// HTTP client cannot be built.
    pub(crate) fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = endpoint_base(base_url)?;

        // The blocking client applies a 30s timeout unless told otherwise.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        info!(backend = %base, ?timeout, "using HTTP backend");

        Ok(Self {
            client,
            parse_url: base.join(PARSE_PATH)?,
            download_url: base.join(DOWNLOAD_PATH)?,
            status_url: base.join(STATUS_PATH)?,
        })
    }

    fn fetch<T: DeserializeOwned>(&self, url: &Url, request: RequestBuilder) -> Result<T, TransportError> {
        let endpoint = url.to_string();

        let response = request.send().map_err(|source| TransportError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;

        let status = response.status();

        let body = response.text().map_err(|source| TransportError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;
        debug!(%endpoint, status = status.as_u16(), bytes = body.len(), "backend responded");

        // Error statuses still carry a `{success, error}` body worth showing.
        match serde_json::from_str(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(TransportError::Status {
                endpoint,
                status: status.as_u16(),
            }),
            Err(source) => Err(TransportError::Decode { endpoint, source }),
        }
    }
}

impl Backend for HttpBackend {
    fn parse(&self, url: &str) -> Result<ParseResponse, TransportError> {
        let request = self.client.post(self.parse_url.clone()).json(&ParseRequest { url });
        self.fetch(&self.parse_url, request)
    }

    fn download(&self, url: &str, track_ids: &[String]) -> Result<DownloadResponse, TransportError> {
        let request = self
            .client
            .post(self.download_url.clone())
            .json(&DownloadRequest { url, track_ids });
        self.fetch(&self.download_url, request)
    }

    fn status(&self) -> Result<StatusResponse, TransportError> {
        let request = self.client.get(self.status_url.clone());
        self.fetch(&self.status_url, request)
    }
}

/// Parses the configured base address so that relative API paths join onto
/// it rather than replacing its last path segment.
fn endpoint_base(base_url: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base).with_context(|| format!("Invalid backend URL: {base_url}"))
}

//! HTTP client for the learning-path backend.
//!
//! Every call returns a `Result`; deciding what a failure means for the UI
//! (error view, empty progress, ignored toggle) is left to the caller.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::model::{CompletionSet, LearningPath, ProgressResponse, ToggleRequest};
use gloo_net::http::{Request, Response};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend url cannot be used as a base: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid backend url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Who is talking to which backend; handed down to every per-path component.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub api: ApiClient,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn paths_url(&self) -> Url {
        self.endpoint(&["paths"])
    }

    pub fn progress_url(&self, user_id: &str, path_title: &str) -> Url {
        self.endpoint(&["progress", user_id, path_title])
    }

    pub fn toggle_url(&self) -> Url {
        self.endpoint(&["progress", "toggle"])
    }

    /// Link target shown when the catalog could not be loaded.
    pub fn bootstrap_url(&self) -> Url {
        self.endpoint(&["bootstrap"])
    }

    pub async fn fetch_paths(&self) -> Result<Vec<LearningPath>, ApiError> {
        let url = self.paths_url();
        let resp = Request::get(url.as_str()).send().await?;
        Ok(ok_or_status(resp)?.json().await?)
    }

    pub async fn fetch_progress(
        &self,
        user_id: &str,
        path_title: &str,
    ) -> Result<CompletionSet, ApiError> {
        let url = self.progress_url(user_id, path_title);
        let resp = Request::get(url.as_str()).send().await?;
        let body: ProgressResponse = ok_or_status(resp)?.json().await?;
        Ok(body.into())
    }

    /// Flips one node server-side and returns the full new completion set.
    pub async fn toggle_progress(
        &self,
        user_id: &str,
        path_title: &str,
        node_id: &str,
    ) -> Result<CompletionSet, ApiError> {
        let url = self.toggle_url();
        let body = ToggleRequest {
            user_id: user_id.to_owned(),
            path_title: path_title.to_owned(),
            node_id: node_id.to_owned(),
        };
        let resp = Request::post(url.as_str()).json(&body)?.send().await?;
        let body: ProgressResponse = ok_or_status(resp)?.json().await?;
        Ok(body.into())
    }
}

fn ok_or_status(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            url: resp.url(),
            status: resp.status(),
        })
    }
}

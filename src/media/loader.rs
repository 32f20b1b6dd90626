// SPDX-License-Identifier: MPL-2.0
//! Asynchronous download of card images.
//!
//! The loader is cheap to clone: the underlying `reqwest::Client` shares its
//! connection pool between clones, so every card fetch reuses connections.

use crate::error::{Error, NetworkError, Result};
use crate::media::image::{decode_image, ImageData};
use std::time::Duration;

/// User agent sent with every image request.
const USER_AGENT: &str = concat!("IcedSlider/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed (picsum answers seeds with a redirect).
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct ImageLoader {
    client: Option<reqwest::Client>,
}

impl ImageLoader {
    /// Builds a loader whose requests time out after `timeout`.
    ///
    /// If the HTTP client cannot be built, the loader is still returned and
    /// every fetch fails with a transport error.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build();

        match client {
            Ok(client) => Self {
                client: Some(client),
            },
            Err(err) => {
                log::error!("failed to build HTTP client: {err}");
                Self { client: None }
            }
        }
    }

    /// Downloads and decodes the image at `url`.
    ///
    /// The returned future owns everything it needs so it can be handed to
    /// `Task::perform`.
    pub fn fetch(&self, url: String) -> impl std::future::Future<Output = Result<ImageData>> {
        let client = self.client.clone();
        async move {
            let client = client.ok_or_else(|| {
                Error::Network(NetworkError::Transport("HTTP client unavailable".into()))
            })?;

            log::debug!("fetching {url}");
            let response = client.get(&url).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(NetworkError::Status(status.as_u16()).into());
            }

            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Err(NetworkError::EmptyBody.into());
            }

            decode_image(&bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_builds_with_default_timeout() {
        let loader = ImageLoader::new(Duration::from_secs(5));
        assert!(loader.client.is_some());
    }

    #[tokio::test]
    async fn invalid_url_fails_without_panicking() {
        let loader = ImageLoader::new(Duration::from_secs(1));
        let result = loader.fetch("not a url".to_string()).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn missing_client_reports_transport_error() {
        let loader = ImageLoader { client: None };
        match loader.fetch("https://example.invalid/x.png".to_string()).await {
            Err(Error::Network(NetworkError::Transport(msg))) => {
                assert!(msg.contains("unavailable"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}

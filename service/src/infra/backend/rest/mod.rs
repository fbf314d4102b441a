//! REST API [`Backend`] implementation.

mod impls;

use std::time::Duration;

use derive_more::{Display, Error as StdError, From};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracerr::Traced;
use tracing as log;

use crate::infra::backend;
#[cfg(doc)]
use crate::infra::Backend;

/// [`Rest`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the REST API, every resource path is appended to.
    pub base_url: String,

    /// Timeout of a single HTTP request.
    pub timeout: Duration,
}

/// REST API [`Backend`] client.
#[derive(Clone, Debug)]
pub struct Rest {
    /// HTTP client performing requests.
    client: reqwest::Client,

    /// Base URL of the REST API, without a trailing slash.
    base_url: String,
}

impl Rest {
    /// Creates a new [`Rest`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the [`Config::base_url`] is not a valid URL, or the HTTP client
    /// fails to initialize.
    pub fn new(conf: &Config) -> Result<Self, Traced<backend::Error>> {
        let base_url = conf.base_url.trim_end_matches('/');
        if reqwest::Url::parse(base_url).is_err() {
            return Err(tracerr::new!(Error::InvalidBaseUrl(
                conf.base_url.clone()
            )))
            .map_err(tracerr::map_from);
        }

        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Returns the base URL of this [`Rest`] client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a full URL of the provided resource `path`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the provided `request` and ensures its response is successful.
    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, Traced<Error>> {
        let response = request
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::debug!("REST API responded with `{status}`: {body}");
        Err(tracerr::new!(Error::status(status, body)))
    }

    /// Sends the provided `request` and decodes its JSON response.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, Traced<Error>> {
        self.send(request)
            .await
            .map_err(tracerr::wrap!())?
            .json()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

/// REST API resource located under its own path.
pub trait Endpoint {
    /// Path of the resource collection, relative to the base URL.
    const PATH: &'static str;
}

/// REST API [`Backend`] [`Error`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// HTTP request failed to be performed.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),

    /// REST API responded with a non-successful status.
    #[display("{message}")]
    #[from(ignore)]
    Status {
        /// HTTP status of the response.
        status: StatusCode,

        /// Response body, or a generic message if it's empty.
        message: String,
    },

    /// Provided base URL is not a valid URL.
    #[display("Invalid REST API base URL: `{_0}`")]
    #[from(ignore)]
    InvalidBaseUrl(#[error(not(source))] String),
}

impl Error {
    /// Creates a new [`Error::Status`] out of the provided response parts.
    fn status(status: StatusCode, body: String) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("HTTP error: {}", status.as_u16())
        } else {
            body.to_owned()
        };
        Self::Status { status, message }
    }

    /// Checks whether the REST API responded with `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            Self::Request(e) => e.status() == Some(StatusCode::NOT_FOUND),
            Self::InvalidBaseUrl(_) => false,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use reqwest::StatusCode;

    use super::{Config, Error, Rest};

    fn rest(base_url: &str) -> Rest {
        Rest::new(&Config {
            base_url: base_url.into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn joins_urls() {
        let api = rest("http://localhost:8080/api/v1/");
        assert_eq!(api.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(
            api.url("accomodations"),
            "http://localhost:8080/api/v1/accomodations",
        );
        assert_eq!(
            api.url("/hosts/best"),
            "http://localhost:8080/api/v1/hosts/best",
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(Rest::new(&Config {
            base_url: "not a url".into(),
            timeout: Duration::from_secs(1),
        })
        .is_err());
    }

    #[test]
    fn status_message_falls_back_to_code() {
        let e = Error::status(StatusCode::INTERNAL_SERVER_ERROR, "  ".into());
        assert_eq!(e.to_string(), "HTTP error: 500");
        assert!(!e.is_not_found());

        let e = Error::status(StatusCode::NOT_FOUND, "No such host".into());
        assert_eq!(e.to_string(), "No such host");
        assert!(e.is_not_found());
    }
}

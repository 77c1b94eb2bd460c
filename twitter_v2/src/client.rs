use std::{error, fmt, sync::Arc, time::Duration};

use bytes::{Bytes, BytesMut};
use enumscribe::ScribeStaticStr;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    StatusCode,
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    auth::{bearer_token::bearer_header, Auth},
    config::ClientConfig,
    limit::LimitInfo,
    params::Parameters,
    query::recognised_params,
    response::{HasPartialError, PartialError},
};

/// Dispatches parameter objects to the API.
///
/// Cloning is cheap: clones share the same connection pool and credentials.
#[derive(Clone)]
pub struct AsyncClient<A> {
    http_client: reqwest::Client,
    api_base: Arc<str>,
    timeout: Duration,
    auth: Arc<A>,
}

impl<A: Auth> AsyncClient<A> {
    pub fn new(auth: A, config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .https_only(config.https_only)
            .connect_timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').into(),
            timeout: config.timeout,
            auth: Arc::new(auth),
        })
    }

    /// Consumes this client and returns a new client using the given authentication credentials.
    pub fn reauthenticate<T: Auth>(self, auth: T) -> AsyncClient<T> {
        AsyncClient {
            http_client: self.http_client,
            api_base: self.api_base,
            timeout: self.timeout,
            auth: Arc::new(auth),
        }
    }

    /// Create a new client which uses different authentication credentials, but uses the same HTTP
    /// connection pool as this client.
    pub fn clone_reauthenticate<T: Auth>(&self, auth: T) -> AsyncClient<T> {
        AsyncClient {
            http_client: self.http_client.clone(),
            api_base: self.api_base.clone(),
            timeout: self.timeout,
            auth: Arc::new(auth),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Sends the request described by `params` and decodes the response.
    ///
    /// A successful response which carries partial errors is still returned as `Ok`; check
    /// [`has_partial_error`](HasPartialError::has_partial_error) on the response.
    #[instrument(level = "debug", skip_all, fields(endpoint = P::DESCRIPTOR.endpoint))]
    pub async fn execute<P: Parameters>(
        &self,
        params: &P,
    ) -> Result<(P::Response, LimitInfo), Error> {
        let (response, limit_info) = self.send(params, Some(self.timeout)).await?;

        let body = response.bytes().await.map_err(|err| {
            ErrorRepr {
                kind: ErrorKind::Transfer(err),
                limit_info: Some(limit_info),
            }
            .boxed()
        })?;

        let decoded = serde_json::from_slice::<P::Response>(&body).map_err(|err| {
            ErrorRepr {
                kind: ErrorKind::InvalidResponse(err),
                limit_info: Some(limit_info),
            }
            .boxed()
        })?;

        if decoded.has_partial_error() {
            debug!("response contains partial errors");
        }

        Ok((decoded, limit_info))
    }

    /// Sends the request described by `params` and returns the response body as a stream of raw
    /// bytes, without decoding it.
    ///
    /// The configured timeout only bounds connecting; the stream may stay open indefinitely.
    #[instrument(level = "debug", skip_all, fields(endpoint = P::DESCRIPTOR.endpoint))]
    pub async fn open_stream<P: Parameters>(&self, params: &P) -> Result<RawStream, Error> {
        let (response, limit_info) = self.send(params, None).await?;

        Ok(RawStream {
            response,
            buffer: BytesMut::new(),
            limit_info,
        })
    }

    async fn send<P: Parameters>(
        &self,
        params: &P,
        timeout: Option<Duration>,
    ) -> Result<(reqwest::Response, LimitInfo), Error> {
        let descriptor = P::DESCRIPTOR;

        let endpoint =
            params.resolve_endpoint(&format!("{}{}", self.api_base, descriptor.endpoint));

        if endpoint.is_empty() {
            warn!(
                endpoint = descriptor.endpoint,
                "not sending request with a missing required parameter"
            );
            return Err(ErrorRepr {
                kind: ErrorKind::MissingParameter {
                    endpoint: descriptor.endpoint,
                },
                limit_info: None,
            }
            .boxed());
        }

        let body = params.body().map_err(|err| {
            ErrorRepr {
                kind: ErrorKind::Serialize(err),
                limit_info: None,
            }
            .boxed()
        })?;

        let auth_header = self.auth_header(params, &endpoint)?;

        debug!(method = descriptor.method.as_str(), url = %endpoint, "sending request");

        let mut builder = self
            .http_client
            .request(descriptor.method.to_reqwest_method(), endpoint.as_str())
            .header(AUTHORIZATION, auth_header);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(body) = body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = builder.send().await.map_err(|err| {
            ErrorRepr {
                kind: ErrorKind::Transfer(err),
                limit_info: None,
            }
            .boxed()
        })?;

        let limit_info = LimitInfo::from_headers(response.headers());
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.map_err(|err| {
                ErrorRepr {
                    kind: ErrorKind::Transfer(err),
                    limit_info: Some(limit_info),
                }
                .boxed()
            })?;

            // Error payloads are not guaranteed to be JSON, so decoding is best-effort.
            let payload = serde_json::from_slice::<ErrorPayload>(&body).unwrap_or_default();

            debug!(%status, title = ?payload.title, "received error response");

            return Err(ErrorRepr {
                kind: ErrorKind::ErrorResponse {
                    status,
                    title: payload.title,
                    detail: payload.detail,
                    errors: payload.errors,
                },
                limit_info: Some(limit_info),
            }
            .boxed());
        }

        Ok((response, limit_info))
    }

    fn auth_header<P: Parameters>(&self, params: &P, endpoint: &str) -> Result<HeaderValue, Error> {
        let auth_string = if params.credential().is_empty() {
            let base_url = endpoint
                .split_once('?')
                .map_or(endpoint, |(base_url, _)| base_url);
            let param_map = params.parameter_map();
            let request = Request::new(
                P::DESCRIPTOR.method,
                base_url,
                recognised_params(&param_map, P::DESCRIPTOR.query_keys).collect(),
            );
            self.auth.auth_header(&request).into_owned()
        } else {
            bearer_header(params.credential())
        };

        let mut auth_header = HeaderValue::from_str(&auth_string).map_err(|_| {
            ErrorRepr {
                kind: ErrorKind::BadAuthHeader,
                limit_info: None,
            }
            .boxed()
        })?;
        auth_header.set_sensitive(true);
        Ok(auth_header)
    }
}

#[derive(Deserialize, Default)]
struct ErrorPayload {
    title: Option<String>,
    detail: Option<String>,
    #[serde(default)]
    errors: Vec<PartialError>,
}

/// The undecoded body of a streaming response.
pub struct RawStream {
    response: reqwest::Response,
    buffer: BytesMut,
    limit_info: LimitInfo,
}

impl RawStream {
    pub fn limit_info(&self) -> LimitInfo {
        self.limit_info
    }

    /// Returns the next chunk of the body as it arrives, or `None` once the stream has ended.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>, Error> {
        if !self.buffer.is_empty() {
            return Ok(Some(self.buffer.split().freeze()));
        }
        self.read_chunk().await
    }

    /// Returns the next newline-terminated line of the body, including its terminator. The final
    /// line is returned without a terminator if the stream ends in the middle of it.
    pub async fn next_line(&mut self) -> Result<Option<Bytes>, Error> {
        loop {
            if let Some(index) = self.buffer.iter().position(|&byte| byte == b'\n') {
                return Ok(Some(self.buffer.split_to(index + 1).freeze()));
            }

            match self.read_chunk().await? {
                Some(chunk) => self.buffer.extend_from_slice(&chunk),
                None if self.buffer.is_empty() => return Ok(None),
                None => return Ok(Some(self.buffer.split().freeze())),
            }
        }
    }

    async fn read_chunk(&mut self) -> Result<Option<Bytes>, Error> {
        self.response.chunk().await.map_err(|err| {
            ErrorRepr {
                kind: ErrorKind::Transfer(err),
                limit_info: Some(self.limit_info),
            }
            .boxed()
        })
    }
}

impl fmt::Debug for RawStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RawStream")
            .field("status", &self.response.status())
            .field("buffered", &self.buffer.len())
            .field("limit_info", &self.limit_info)
            .finish()
    }
}

#[derive(ScribeStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Method {
    #[enumscribe(str = "GET")]
    Get,
    #[enumscribe(str = "POST")]
    Post,
    #[enumscribe(str = "PUT")]
    Put,
    #[enumscribe(str = "DELETE")]
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        self.scribe()
    }

    fn to_reqwest_method(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    repr: Box<ErrorRepr>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.repr.kind
    }

    /// The rate limit information of the response, if the request got far enough to receive one.
    pub fn limit_info(&self) -> Option<&LimitInfo> {
        self.repr.limit_info.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.repr.kind, f)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        error::Error::source(&self.repr.kind)
    }
}

#[derive(Debug)]
struct ErrorRepr {
    kind: ErrorKind,
    limit_info: Option<LimitInfo>,
}

impl ErrorRepr {
    fn boxed(self) -> Error {
        Error {
            repr: Box::new(self),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    /// A path value or other required value was empty, so no request was sent.
    #[error("missing a required parameter for {endpoint}")]
    MissingParameter { endpoint: &'static str },
    #[error("failed to serialize the request body")]
    Serialize(#[source] serde_json::Error),
    #[error("the authorization header is not a valid header value")]
    BadAuthHeader,
    #[error("failed to transfer the request or response")]
    Transfer(#[source] reqwest::Error),
    #[error("the response body could not be decoded")]
    InvalidResponse(#[source] serde_json::Error),
    #[error("the API responded with status {status}")]
    ErrorResponse {
        status: StatusCode,
        title: Option<String>,
        detail: Option<String>,
        errors: Vec<PartialError>,
    },
}

/// The parts of a request which an [`Auth`] may use to build its authorization header.
pub struct Request<'a> {
    method: Method,
    base_url: &'a str,
    params: Vec<(&'a str, &'a str)>,
}

impl<'a> Request<'a> {
    pub fn new(method: Method, base_url: &'a str, params: Vec<(&'a str, &'a str)>) -> Self {
        Self {
            method,
            base_url,
            params,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The URL of the request without its query string.
    pub fn base_url(&self) -> &str {
        self.base_url
    }

    /// The query parameters of the request, not percent-encoded.
    pub fn params(&self) -> &[(&'a str, &'a str)] {
        &self.params
    }
}

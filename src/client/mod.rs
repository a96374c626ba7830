//! Client layer: signs requests, drives the HTTP transport and decodes responses.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{Action, Login, Password, Response, Sms, SmsQueue, ValidationError};
use crate::transport::{AuthToken, decode_response, encode_action, encode_queue_body};

const DEFAULT_ENDPOINT: &str = "https://api.smsbrana.cz/smsconnect/http.php";
const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(request.url),
                HttpMethod::Post => self
                    .client
                    .post(request.url)
                    .header(reqwest::header::CONTENT_TYPE, XML_CONTENT_TYPE)
                    .body(request.body.unwrap_or_default()),
            };
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// SMS Connect account credentials.
///
/// The password never leaves the client: every request carries only a hash derived
/// from it (see [`SmsConnectClient`]). `Debug` output redacts it.
pub struct Credentials {
    login: Login,
    password: Password,
}

impl Credentials {
    /// Validate that the login is non-empty after trimming and the password is non-empty.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsConnectClient`].
///
/// A non-zero `result.err` is not an error: it is reported inside the returned
/// [`Response`].
pub enum SmsConnectError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not a well-formed XML document.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsConnectClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SmsConnectClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsConnectClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsConnectClient`].
    pub fn build(self) -> Result<SmsConnectClient, SmsConnectError> {
        let endpoint = Url::parse(&self.endpoint).map_err(SmsConnectError::InvalidEndpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsConnectError::Transport(Box::new(err)))?;

        Ok(SmsConnectClient {
            credentials: self.credentials,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Connect client.
///
/// Every call derives a fresh `time` / `salt` / `auth` triple from the credentials,
/// performs exactly one HTTP round trip and decodes the XML answer into a [`Response`].
/// Calls share no mutable state and may run concurrently.
pub struct SmsConnectClient {
    credentials: Credentials,
    endpoint: Url,
    http: Arc<dyn HttpTransport>,
}

impl SmsConnectClient {
    /// Create a client using the default endpoint. No network activity happens here.
    ///
    /// For more customization, use [`SmsConnectClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: default_endpoint(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsConnectClientBuilder {
        SmsConnectClientBuilder::new(credentials)
    }

    /// Send one SMS (`send_sms`, GET). Every set field of `sms` becomes a query parameter.
    ///
    /// Errors:
    /// - [`SmsConnectError::Transport`] / [`SmsConnectError::HttpStatus`] for HTTP failures,
    /// - [`SmsConnectError::Parse`] when the body is not XML.
    ///
    /// Gateway errors are reported through [`Response::error_code`].
    pub async fn send_sms(&self, sms: Sms) -> Result<Response, SmsConnectError> {
        let params = crate::transport::encode_sms_fields(&sms);
        self.execute(Action::SendSms, params, None).await
    }

    /// Send a batch of SMS in one request (`xml_queue`, POST with an XML body).
    ///
    /// Returns [`SmsConnectError::Validation`] for an empty list, before any network call.
    pub async fn send_multiple_sms(&self, messages: Vec<Sms>) -> Result<Response, SmsConnectError> {
        let queue = SmsQueue::new(messages)?;
        self.send_queue(&queue).await
    }

    /// Send an already validated batch (`xml_queue`).
    pub async fn send_queue(&self, queue: &SmsQueue) -> Result<Response, SmsConnectError> {
        let body = encode_queue_body(queue);
        self.execute(Action::XmlQueue, Vec::new(), Some(body)).await
    }

    /// Query the remaining account credit (`credit_info`, GET).
    pub async fn get_credit_status(&self) -> Result<Response, SmsConnectError> {
        self.execute(Action::CreditInfo, Vec::new(), None).await
    }

    /// Fetch received messages and delivery reports (`inbox`, GET).
    ///
    /// See [`Response::received_messages`] and [`Response::delivery_reports`].
    pub async fn get_accepted_messages(&self) -> Result<Response, SmsConnectError> {
        self.execute(Action::Inbox, Vec::new(), None).await
    }

    async fn execute(
        &self,
        action: Action,
        params: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<Response, SmsConnectError> {
        let url = self.signed_url(action, params);
        let method = if body.is_some() {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        };

        debug!(%action, ?method, "sending SMS Connect request");

        let response = self
            .http
            .execute(HttpRequest { method, url, body })
            .await
            .map_err(SmsConnectError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(%action, status = response.status, "SMS Connect returned non-success HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsConnectError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed =
            decode_response(&response.body).map_err(|err| SmsConnectError::Parse(Box::new(err)))?;

        debug!(
            %action,
            err = parsed.error_code().map_or("-", |code| code.as_str()),
            "decoded SMS Connect response"
        );

        Ok(parsed)
    }

    fn signed_url(&self, action: Action, params: Vec<(String, String)>) -> Url {
        let token = AuthToken::generate(&self.credentials.password);

        let mut query = Vec::<(String, String)>::new();
        token.push_query_params(&self.credentials.login, &mut query);
        query.push(encode_action(action));
        query.extend(params);

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(&query);
        url
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
}

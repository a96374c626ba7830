use md5::{Digest, Md5};
use smsconnect::{Credentials, SmsConnectClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

pub const LOGIN: &str = "test_login";
pub const PASSWORD: &str = "test_password";
pub const GATEWAY_PATH: &str = "/smsconnect/http.php";

pub struct GatewayMock {
    pub server: MockServer,
}

impl GatewayMock {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Answer `action` requests sent with `http_method` by `xml`, once per expected call.
    pub async fn mount_action(&self, http_method: &str, action: &str, xml: &str, calls: u64) {
        Mock::given(method(http_method))
            .and(path(GATEWAY_PATH))
            .and(query_param("login", LOGIN))
            .and(query_param("action", action))
            .and(SignedRequest)
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/xml; charset=utf-8")
                    .set_body_string(xml),
            )
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_status(&self, status: u16, body: &str) {
        Mock::given(path(GATEWAY_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    pub fn client(&self) -> SmsConnectClient {
        SmsConnectClient::builder(Credentials::new(LOGIN, PASSWORD).unwrap())
            .endpoint(format!("{}{}", self.server.uri(), GATEWAY_PATH))
            .build()
            .unwrap()
    }

    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Matches only when `auth` is the MD5 of password + time + salt.
struct SignedRequest;

impl Match for SignedRequest {
    fn matches(&self, request: &Request) -> bool {
        let (Some(time), Some(salt), Some(auth)) = (
            query_value(request, "time"),
            query_value(request, "salt"),
            query_value(request, "auth"),
        ) else {
            return false;
        };
        let expected = hex::encode(Md5::digest(format!("{PASSWORD}{time}{salt}").as_bytes()));
        time.len() == 15 && auth == expected
    }
}

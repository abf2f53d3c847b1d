use crate::auth::Credentials;
use crate::config::SurveyMonkeyConfig;
use crate::error::{Error, Result};
use crate::response::{parse_response, Reply};
use log::debug;
use oauth2::AccessToken;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

pub const BASE_URL: &str = "https://api.surveymonkey.com";
pub const API_PREFIX: &str = "/v3";

/// Fields forwarded verbatim as a JSON request body.
pub type Payload = Map<String, Value>;

/// One outbound call, built fresh for every request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Payload>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query(mut self, query: &[(&str, &str)]) -> Self {
        self.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }
}

/// SurveyMonkey API client.
///
/// Holds the application credentials and, once authorized, the access
/// token. Calls take `&self`; only setting the token needs `&mut self`.
#[derive(Debug, Clone)]
pub struct Client {
    credentials: Credentials,
    base_url: Url,
    access_token: Option<AccessToken>,
    http: reqwest::Client,
}

impl Client {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: Url::parse(BASE_URL).expect("BASE_URL is a valid URL"),
            access_token: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &SurveyMonkeyConfig) -> Result<Self> {
        let credentials = Credentials::new(
            config.client_id.clone(),
            config.client_secret.clone(),
            config.redirect_uri.clone(),
        )?;
        let mut client = Client::new(credentials).with_base_url(&config.base_url)?;
        if let Some(token) = &config.access_token {
            client.set_access_token(token.as_str())?;
        }
        Ok(client)
    }

    /// Points the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    pub(crate) fn replace_access_token(&mut self, token: AccessToken) {
        self.access_token = Some(token);
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// `path` appended to the base URL's path, without query.
    pub(crate) fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", self.base_url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        url
    }

    /// Full URL of a `/v3` resource path.
    pub fn api_url(&self, path: &str) -> Url {
        self.endpoint(&format!("{}{}", API_PREFIX, path))
    }

    /// The single path every API call takes.
    ///
    /// Attaches the bearer token and JSON content type, sends the request,
    /// and hands the answer to the response parser. Nothing is sent without
    /// an access token.
    pub async fn request(&self, request: ApiRequest) -> Result<Reply> {
        let token = self.access_token.as_ref().ok_or(Error::MissingAccessToken)?;
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .http
            .request(request.method, request.url)
            .bearer_auth(token.secret())
            .header(CONTENT_TYPE, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        parse_response(status, content_type.as_deref(), &body)
    }

    pub async fn get(&self, path: &str) -> Result<Reply> {
        self.request(ApiRequest::new(Method::GET, self.api_url(path)))
            .await
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Reply> {
        self.request(ApiRequest::new(Method::GET, self.api_url(path)).query(query))
            .await
    }

    pub async fn post(&self, path: &str, payload: &Payload) -> Result<Reply> {
        self.request(ApiRequest::new(Method::POST, self.api_url(path)).body(payload.clone()))
            .await
    }

    pub async fn put(&self, path: &str, payload: &Payload) -> Result<Reply> {
        self.request(ApiRequest::new(Method::PUT, self.api_url(path)).body(payload.clone()))
            .await
    }

    pub async fn patch(&self, path: &str, payload: &Payload) -> Result<Reply> {
        self.request(ApiRequest::new(Method::PATCH, self.api_url(path)).body(payload.clone()))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Reply> {
        self.request(ApiRequest::new(Method::DELETE, self.api_url(path)))
            .await
    }
}

use crate::client::Client;
use crate::error::{Error, Result};
use log::{debug, warn};
use oauth2::basic::BasicTokenResponse;
use oauth2::{AccessToken, AuthorizationCode, ClientId, ClientSecret, RedirectUrl, TokenResponse};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use url::Url;

pub const AUTHORIZE_PATH: &str = "/oauth/authorize";
pub const TOKEN_PATH: &str = "/oauth/token";

/// OAuth2 application credentials, fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_uri: RedirectUrl,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client_id: ClientId::new(client_id.into()),
            client_secret: ClientSecret::new(client_secret.into()),
            redirect_uri: RedirectUrl::new(redirect_uri.into())?,
        })
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &RedirectUrl {
        &self.redirect_uri
    }
}

/// Anything `set_access_token` accepts: a bare token or a token response.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenGrant {
    Raw(String),
    Response(Map<String, Value>),
}

impl TokenGrant {
    /// Parses the body returned by [`Client::exchange_code`].
    pub fn from_body(body: &str) -> Result<Self> {
        let response: Map<String, Value> = serde_json::from_str(body)?;
        Ok(TokenGrant::Response(response))
    }

    fn into_access_token(self) -> Result<AccessToken> {
        match self {
            TokenGrant::Raw(token) => Ok(AccessToken::new(token)),
            TokenGrant::Response(response) => response
                .get("access_token")
                .and_then(Value::as_str)
                .map(|token| AccessToken::new(token.to_string()))
                .ok_or(Error::MissingTokenField),
        }
    }
}

impl From<&str> for TokenGrant {
    fn from(token: &str) -> Self {
        TokenGrant::Raw(token.to_string())
    }
}

impl From<String> for TokenGrant {
    fn from(token: String) -> Self {
        TokenGrant::Raw(token)
    }
}

impl From<Map<String, Value>> for TokenGrant {
    fn from(response: Map<String, Value>) -> Self {
        TokenGrant::Response(response)
    }
}

impl From<Value> for TokenGrant {
    fn from(value: Value) -> Self {
        match value {
            Value::String(token) => TokenGrant::Raw(token),
            Value::Object(response) => TokenGrant::Response(response),
            _ => TokenGrant::Response(Map::new()),
        }
    }
}

impl From<BasicTokenResponse> for TokenGrant {
    fn from(response: BasicTokenResponse) -> Self {
        TokenGrant::Raw(response.access_token().secret().clone())
    }
}

impl Client {
    /// The provider URL the user visits to grant access.
    ///
    /// Carries `client_id`, `redirect_uri` and `response_type=code`.
    pub fn authorization_url(&self) -> Url {
        let mut url = self.endpoint(AUTHORIZE_PATH);
        url.query_pairs_mut()
            .append_pair("client_id", self.credentials().client_id().as_str())
            .append_pair("redirect_uri", self.credentials().redirect_uri().as_str())
            .append_pair("response_type", "code");
        url
    }

    /// Trades a one-time authorization code for an access token.
    ///
    /// Returns the raw token response body when the provider answers 200
    /// with an `access_token`. Any other answer yields `Ok(None)` rather than
    /// an error, unlike the rest of the API. Only transport failures are
    /// returned as `Err`. The token is not stored; pass the body to
    /// [`TokenGrant::from_body`] and [`Client::set_access_token`].
    pub async fn exchange_code(&self, code: impl Into<String>) -> Result<Option<String>> {
        let code = AuthorizationCode::new(code.into());
        let credentials = self.credentials();
        let url = self.endpoint(TOKEN_PATH);
        debug!("POST {}", url);

        let response = self
            .http()
            .post(url)
            .form(&[
                ("code", code.secret().as_str()),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.secret().as_str()),
                ("redirect_uri", credentials.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status == StatusCode::OK && has_access_token(&body) {
            Ok(Some(body))
        } else {
            warn!("Code exchange rejected with status {}", status);
            Ok(None)
        }
    }

    /// Stores the credential used by every subsequent request.
    pub fn set_access_token(&mut self, grant: impl Into<TokenGrant>) -> Result<()> {
        let token = grant.into().into_access_token()?;
        self.replace_access_token(token);
        Ok(())
    }

    /// Tokens are long-lived and the provider offers no refresh grant.
    pub fn refresh_token(&self) -> Result<()> {
        warn!("Token refresh requested but not supported");
        Err(Error::RefreshUnsupported)
    }
}

fn has_access_token(body: &str) -> bool {
    serde_json::from_str::<Map<String, Value>>(body)
        .map(|response| response.contains_key("access_token"))
        .unwrap_or(false)
}

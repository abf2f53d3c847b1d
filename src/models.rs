use serde::Deserialize;

/// The account behind the access token, as returned by `/users/me`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub account_type: Option<String>,
    pub language: Option<String>,
    pub date_created: Option<String>,
    pub date_last_login: Option<String>,
    pub href: Option<String>,
}

//! Client for the SurveyMonkey v3 REST API.
//!
//! Authorize with [`Client::authorization_url`] and [`Client::exchange_code`],
//! store the token with [`Client::set_access_token`], then call any endpoint
//! method. Every call goes through [`Client::request`], which attaches the
//! bearer token and turns provider error envelopes into [`ApiError`]s.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod response;

pub use api::webhooks::{NewWebhook, WEBHOOK_EVENTS};
pub use auth::{Credentials, TokenGrant};
pub use client::{ApiRequest, Client, Payload, BASE_URL};
pub use error::{ApiError, Error, Result};
pub use response::Reply;

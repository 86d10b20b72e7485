//! Google credentials for the Sheets backend.
//!
//! A service account key is exchanged for a short-lived access token with
//! the OAuth 2.0 JWT bearer grant: an RS256-signed assertion is posted to
//! the key's `token_uri`. A pre-minted `access_token` skips the exchange.

use crate::config::{Config, ENV_SERVICE_ACCOUNT_FILE, ENV_SERVICE_ACCOUNT_JSON};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a downloaded service account key that signing needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenError {
    error: String,
    #[serde(default)]
    error_description: String,
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let key: ServiceAccountKey = serde_json::from_str(json.trim())
            .map_err(|e| AppError::Auth(format!("invalid service account key: {e}")))?;

        if key.client_email.trim().is_empty() || key.private_key.trim().is_empty() {
            return Err(AppError::Auth(
                "service account key has no client_email or private_key".into(),
            ));
        }
        Ok(key)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::Auth(format!(
                "cannot read service account key {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// Signed JWT bearer assertion valid from `now` (unix seconds).
    pub fn assertion(&self, now: i64) -> AppResult<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.private_key_id.clone();

        let claims = Claims {
            iss: self.client_email.clone(),
            scope: SCOPES.join(" "),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(jsonwebtoken::encode(&header, &claims, &key)?)
    }

    /// Exchange a fresh assertion for an access token.
    pub fn fetch_access_token(&self, client: &Client) -> AppResult<String> {
        let assertion = self.assertion(Utc::now().timestamp())?;

        let resp = client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Auth(format!(
                "token request for {} rejected ({}): {}",
                self.client_email,
                status.as_u16(),
                token_error_message(&body)
            )));
        }

        let token: TokenResponse = resp.json()?;
        Ok(token.access_token)
    }
}

fn token_error_message(body: &str) -> String {
    match serde_json::from_str::<TokenError>(body) {
        Ok(e) if e.error_description.is_empty() => e.error,
        Ok(e) => format!("{}: {}", e.error, e.error_description),
        Err(_) => body.trim().to_string(),
    }
}

/// How the Sheets store authenticates.
pub enum Credentials {
    AccessToken(String),
    ServiceAccount(ServiceAccountKey),
}

impl Credentials {
    /// Pick credentials from the configuration:
    /// `access_token` → inline key from the environment → `service_account_file`.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        if !cfg.access_token.trim().is_empty() {
            return Ok(Credentials::AccessToken(cfg.access_token.trim().to_string()));
        }

        if let Some(json) = &cfg.service_account_json {
            return Ok(Credentials::ServiceAccount(ServiceAccountKey::from_json(
                json,
            )?));
        }

        if !cfg.service_account_file.trim().is_empty() {
            return Ok(Credentials::ServiceAccount(ServiceAccountKey::from_file(
                &expand_tilde(cfg.service_account_file.trim()),
            )?));
        }

        Err(AppError::Config(format!(
            "no Google credentials: set service_account_file (or {} / {}) or access_token",
            ENV_SERVICE_ACCOUNT_FILE, ENV_SERVICE_ACCOUNT_JSON
        )))
    }

    pub fn access_token(&self, client: &Client) -> AppResult<String> {
        match self {
            Credentials::AccessToken(token) => Ok(token.clone()),
            Credentials::ServiceAccount(key) => key.fetch_access_token(client),
        }
    }
}

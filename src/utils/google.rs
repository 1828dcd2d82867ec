use serde::Deserialize;

use crate::errors::{Error, Result};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Relevant subset of Google's tokeninfo response.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTokenInfo {
    pub aud: String,
    pub email: String,
    pub email_verified: Option<String>,
    pub name: Option<String>,
}

/// Verify a Google ID token against the tokeninfo endpoint. The audience
/// must match our configured OAuth client id.
pub async fn verify_id_token(
    http: &reqwest::Client,
    id_token: &str,
    client_id: &str,
) -> Result<GoogleTokenInfo> {
    let response = http
        .get(TOKENINFO_URL)
        .query(&[("id_token", id_token)])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::InvalidToken);
    }

    let info: GoogleTokenInfo = response.json().await?;

    if info.aud != client_id {
        return Err(Error::InvalidToken);
    }

    Ok(info)
}

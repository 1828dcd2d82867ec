use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode, errors::ErrorKind,
};

use crate::consts::auth_const::SESSION_VALID_HOURS;
use crate::errors::{Error, Result};

pub const ISSUER: &str = "docgate";

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
}

pub fn encode_jwt(uid: &str, secret: &str) -> Result<String> {
    let iat = Utc::now().timestamp() as usize;
    let claims = Claims {
        id: uid.to_string(),
        exp: iat + (SESSION_VALID_HOURS * 3600) as usize,
        iat,
        iss: ISSUER.to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;
    Ok(token)
}

pub fn decode_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        _ => Error::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let token = encode_jwt("user123", "secret").unwrap();
        let data = decode_jwt(&token, "secret").unwrap();
        assert_eq!(data.claims.id, "user123");
        assert_eq!(data.claims.iss, ISSUER);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_jwt("user123", "secret").unwrap();
        assert!(matches!(
            decode_jwt(&token, "other"),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let iat = Utc::now().timestamp() as usize - 7200;
        let claims = Claims {
            id: "user123".to_string(),
            exp: iat + 60,
            iat,
            iss: ISSUER.to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_ref()),
        )
        .unwrap();

        assert!(matches!(
            decode_jwt(&token, "secret"),
            Err(Error::TokenExpired)
        ));
    }
}

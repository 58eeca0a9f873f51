use crate::domain::error::{AppError, AppResult};
use crate::domain::models::token::{AccessToken, Claims};
use crate::domain::services::token::TokenService;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// HS256 keys derived from the shared server-side secret.
#[derive(Clone)]
pub struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Keys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

pub struct TokenServiceImpl {
    keys: Keys,
    expiration_seconds: i64,
}

impl TokenServiceImpl {
    pub fn new(keys: Keys, expiration_seconds: i64) -> Self {
        TokenServiceImpl {
            keys,
            expiration_seconds,
        }
    }
}

impl TokenService for TokenServiceImpl {
    fn generate_token(&self, number: String) -> AppResult<AccessToken> {
        let now = Utc::now();

        let expiration = (now + chrono::Duration::seconds(self.expiration_seconds)).timestamp();

        let iat = now.timestamp();

        let claims = Claims {
            sub: number,
            exp: expiration as usize,
            iat: iat as usize,
        };

        let header = Header::new(Algorithm::HS256);

        let token = encode(&header, &claims, &self.keys.encoding)
            .map_err(|err| AppError::InternalError().trace(&err.to_string()))?;

        Ok(AccessToken { token, expiration })
    }

    fn validate_token(&self, token: &str) -> AppResult<Claims> {
        match decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(token) => Ok(token.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature
                | ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm => Err(AppError::Forbidden()),
                _ => Err(AppError::InternalError().trace(&format!("{error:?}"))),
            },
        }
    }
}

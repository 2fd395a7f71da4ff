use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::http::error::ApiError;

type HmacSha256 = Hmac<Sha256>;

/// 校验 `base64url(user_id).hex(hmac)` 形式的 Bearer Token (由身份服务签发，共享密钥)
#[derive(Clone)]
pub struct AccessTokens {
    mac: HmacSha256,
}

impl AccessTokens {
    pub fn new(secret: impl AsRef<[u8]>) -> anyhow::Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.as_ref())
            .map_err(|_| anyhow::anyhow!("Invalid token secret"))?;
        Ok(Self { mac })
    }

    pub fn verify(&self, token: &str) -> Option<String> {
        let (encoded, signature) = token.split_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(encoded.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let user_id = URL_SAFE_NO_PAD.decode(encoded).ok()?;
        String::from_utf8(user_id).ok().filter(|id| !id.is_empty())
    }

    #[cfg(test)]
    pub fn issue(&self, user_id: &str) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(user_id);
        let mut mac = self.mac.clone();
        mac.update(encoded.as_bytes());
        format!("{}.{}", encoded, hex::encode(mac.finalize().into_bytes()))
    }
}

pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AccessTokens: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthenticated("Missing authentication"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthenticated("Missing authentication"))?;

        match AccessTokens::from_ref(state).verify(token) {
            Some(user_id) => Ok(AuthUser(user_id)),
            None => {
                warn!("Rejected invalid access token");
                Err(ApiError::Unauthenticated("Invalid access token"))
            }
        }
    }
}

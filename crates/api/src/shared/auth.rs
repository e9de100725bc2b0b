use crate::error::MementoError;
use actix_web::HttpRequest;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use memento_domain::User;
use memento_infra::MementoContext;
use serde::{Deserialize, Serialize};

/// How long a login token stays valid
pub const TOKEN_VALIDITY_SECS: usize = 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    exp: usize, // Required (validate_exp defaults to true in validation). Expiration time (as UTC timestamp)
    iat: usize, // Issued at (as UTC timestamp)
    username: String, // Whom the token refers to
}

/// Signs a token for `username`, valid for one hour from `issued_at`.
pub fn create_token(username: &str, issued_at: usize, secret: &str) -> anyhow::Result<String> {
    let claims = Claims {
        exp: issued_at + TOKEN_VALIDITY_SECS,
        iat: issued_at,
        username: username.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(anyhow::Error::new)
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    let mut token = token_header_value.replace("Bearer", "");
    token = token.replace("bearer", "");
    String::from(token.trim())
}

fn auth_user_req(req: &HttpRequest, secret: &str) -> Option<String> {
    let token = req.headers().get("authorization")?;
    let token = match token.to_str() {
        Ok(token) => parse_authtoken_header(token),
        Err(_) => return None,
    };
    let res = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    );
    match res {
        Ok(token_data) => Some(token_data.claims.username),
        Err(_) => None,
    }
}

/// Resolves the bearer token on `req` to the `User` it was issued for.
pub async fn protect_route(req: &HttpRequest, ctx: &MementoContext) -> Result<User, MementoError> {
    let username = auth_user_req(req, &ctx.config.token_secret).ok_or_else(|| {
        MementoError::Unauthorized("Missing or invalid authorization token".into())
    })?;

    ctx.repos
        .users
        .find_by_username(&username)
        .await
        .ok_or_else(|| {
            MementoError::Unauthorized(format!("No user found for username: {}", username))
        })
}

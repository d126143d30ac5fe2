//! JWT generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. There are no
//! refresh tokens: clients log in again once a token expires.

use bolsa_core::roles::Rol;
use bolsa_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's internal database id.
    pub id: DbId,
    pub email: String,
    pub rol: Rol,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in seconds (default: 7 days).
    pub expires_in_secs: i64,
}

/// Default token lifetime, in `JWT_EXPIRES_IN` syntax.
const DEFAULT_EXPIRES_IN: &str = "7d";

/// Longest accepted token lifetime (10 years).
pub const MAX_EXPIRES_IN_SECS: i64 = 10 * 365 * 86_400;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var          | Required | Default |
    /// |------------------|----------|---------|
    /// | `JWT_SECRET`     | **yes**  | --      |
    /// | `JWT_EXPIRES_IN` | no       | `7d`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty, or if `JWT_EXPIRES_IN`
    /// cannot be parsed.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let raw = std::env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| DEFAULT_EXPIRES_IN.into());
        let expires_in_secs = parse_expiry(&raw)
            .unwrap_or_else(|e| panic!("JWT_EXPIRES_IN is invalid: {e}"));

        Self {
            secret,
            expires_in_secs,
        }
    }
}

/// Parse a lifetime such as `3600`, `45s`, `30m`, `12h`, or `7d` into seconds.
pub fn parse_expiry(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    let (digits, multiplier) = match raw.char_indices().last() {
        Some((idx, 's')) => (&raw[..idx], 1),
        Some((idx, 'm')) => (&raw[..idx], 60),
        Some((idx, 'h')) => (&raw[..idx], 3_600),
        Some((idx, 'd')) => (&raw[..idx], 86_400),
        Some(_) => (raw, 1),
        None => return Err("value is empty".into()),
    };

    let amount: i64 = digits
        .parse()
        .map_err(|_| format!("'{raw}' is not of the form <n>[s|m|h|d]"))?;
    if amount <= 0 {
        return Err(format!("'{raw}' must be positive"));
    }
    amount
        .checked_mul(multiplier)
        .filter(|secs| *secs <= MAX_EXPIRES_IN_SECS)
        .ok_or_else(|| format!("'{raw}' exceeds the maximum of {MAX_EXPIRES_IN_SECS} seconds"))
}

/// Generate an HS256 token for the given user.
pub fn generate_token(
    usuario_id: DbId,
    email: &str,
    rol: Rol,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        id: usuario_id,
        email: email.to_string(),
        rol,
        iat: now,
        exp: now.saturating_add(config.expires_in_secs),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expires_in_secs: 3_600,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let config = test_config();
        let token = generate_token(42, "ana@example.com", Rol::Empleado, &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.rol, Rol::Empleado);
        assert_eq!(claims.exp - claims.iat, 3_600);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            id: 1,
            email: "x@example.com".to_string(),
            rol: Rol::Empleador,
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
            expires_in_secs: 60,
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
            expires_in_secs: 60,
        };

        let token = generate_token(1, "a@a.com", Rol::Admin, &config_a).unwrap();
        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn test_parse_expiry_units() {
        assert_eq!(parse_expiry("3600"), Ok(3_600));
        assert_eq!(parse_expiry("45s"), Ok(45));
        assert_eq!(parse_expiry("30m"), Ok(1_800));
        assert_eq!(parse_expiry("12h"), Ok(43_200));
        assert_eq!(parse_expiry(" 7d "), Ok(604_800));
    }

    #[test]
    fn test_parse_expiry_caps_lifetime() {
        assert_eq!(parse_expiry("3650d"), Ok(MAX_EXPIRES_IN_SECS));
        assert!(parse_expiry("3651d").is_err());
        assert!(parse_expiry(&i64::MAX.to_string()).is_err());
        assert!(parse_expiry(&format!("{}d", i64::MAX / 2)).is_err());
    }

    #[test]
    fn test_huge_configured_lifetime_does_not_overflow() {
        let config = JwtConfig {
            secret: "secret-alpha".to_string(),
            expires_in_secs: i64::MAX,
        };
        let token = generate_token(1, "a@a.com", Rol::Empleado, &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.exp, i64::MAX);
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert!(parse_expiry("").is_err());
        assert!(parse_expiry("d").is_err());
        assert!(parse_expiry("7w").is_err());
        assert!(parse_expiry("0h").is_err());
        assert!(parse_expiry("-5m").is_err());
    }
}

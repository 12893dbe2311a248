//! Bearer token authentication and authority mapping.
//!
//! Tokens are JWTs issued by an external identity provider. They are verified
//! either with a shared HS256 secret or an RS256 public key. Authorities are
//! derived from two claims:
//!
//! - `roles`: each entry becomes `ROLE_<entry>`
//! - `resource_access.<client-id>.roles`: each entry is taken verbatim

use std::collections::{HashMap, HashSet};

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::principal::Principal;
use crate::error::AppError;

/// Default `resource_access` entry read for client roles.
pub const DEFAULT_CLIENT_ID: &str = "flight-booking-system";

/// A claim holding either one space-separated string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn entries(&self) -> Vec<&str> {
        match self {
            StringOrList::One(value) => value.split_whitespace().collect(),
            StringOrList::Many(values) => values
                .iter()
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .collect(),
        }
    }
}

/// Roles granted for one client under `resource_access`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// JWT claims read by the service.
///
/// Unknown claims are ignored. Missing role claims yield no authorities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub resource_access: HashMap<String, ResourceAccess>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<StringOrList>,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// Claims for `subject` holding `roles`, valid for `ttl` from now.
    pub fn for_subject(subject: impl Into<String>, roles: Vec<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: Some(subject.into()),
            preferred_username: None,
            roles: Some(StringOrList::Many(roles)),
            resource_access: HashMap::new(),
            iss: None,
            aud: None,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Authority set granted by these claims.
    pub fn authorities(&self, client_id: &str) -> HashSet<String> {
        let realm = self
            .roles
            .iter()
            .flat_map(StringOrList::entries)
            .map(|role| format!("ROLE_{role}"));

        let client = self
            .resource_access
            .get(client_id)
            .into_iter()
            .flat_map(|access| access.roles.iter().cloned());

        realm.chain(client).collect()
    }
}

/// Key used to verify token signatures.
#[derive(Debug, Clone)]
pub enum VerificationKey {
    /// HS256 shared secret.
    Secret(String),
    /// RS256 public key in PEM format.
    RsaPem(Vec<u8>),
}

/// Claim naming the principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrincipalClaim {
    #[default]
    Subject,
    PreferredUsername,
}

impl std::str::FromStr for PrincipalClaim {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sub" => Ok(PrincipalClaim::Subject),
            "preferred_username" => Ok(PrincipalClaim::PreferredUsername),
            other => Err(format!(
                "expected 'sub' or 'preferred_username', got '{other}'"
            )),
        }
    }
}

/// Token verification settings.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub key: VerificationKey,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub client_id: String,
    pub principal_claim: PrincipalClaim,
}

impl AuthSettings {
    /// HS256 settings with defaults for everything else.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            key: VerificationKey::Secret(secret.into()),
            issuer: None,
            audience: None,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            principal_claim: PrincipalClaim::Subject,
        }
    }
}

/// Service for authenticating API requests via Bearer tokens.
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
    client_id: String,
    principal_claim: PrincipalClaim,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Errors
    ///
    /// Returns an error if the RS256 public key is not valid PEM.
    pub fn new(settings: AuthSettings) -> jsonwebtoken::errors::Result<Self> {
        let (decoding_key, algorithm) = match &settings.key {
            VerificationKey::Secret(secret) => {
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
            VerificationKey::RsaPem(pem) => (DecodingKey::from_rsa_pem(pem)?, Algorithm::RS256),
        };

        let mut validation = Validation::new(algorithm);
        if let Some(issuer) = &settings.issuer {
            validation.set_issuer(&[issuer]);
            validation.required_spec_claims.insert("iss".to_string());
        }
        match &settings.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                validation.required_spec_claims.insert("aud".to_string());
            }
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key,
            validation,
            client_id: settings.client_id,
            principal_claim: settings.principal_claim,
        })
    }

    /// Verifies a raw bearer token and resolves the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - The signature does not verify
    /// - The token is expired
    /// - Issuer or audience do not match
    /// - The principal claim is missing
    pub fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "Token expired",
                ErrorKind::InvalidIssuer => "Invalid token issuer",
                ErrorKind::InvalidAudience => "Invalid token audience",
                _ => "Invalid token",
            };
            AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
        })?;

        let claims = data.claims;
        let name = match self.principal_claim {
            PrincipalClaim::Subject => claims.sub.clone(),
            PrincipalClaim::PreferredUsername => claims.preferred_username.clone(),
        }
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Token carries no principal name" }),
            )
        })?;

        Ok(Principal::new(name, claims.authorities(&self.client_id)))
    }
}

/// Signs `claims` as an HS256 token.
///
/// Used by the admin CLI and tests to mint tokens accepted by a service
/// configured with the same secret.
pub fn sign_token(claims: &Claims, secret: &str) -> jsonwebtoken::errors::Result<String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

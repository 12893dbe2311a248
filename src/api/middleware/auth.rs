//! Bearer token authentication middleware and role guards.

use std::marker::PhantomData;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::domain::principal::{Principal, Role};
use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <jwt>
/// ```
///
/// On success the resolved [`Principal`] is stored in the request extensions
/// for the [`Authorized`] guard of the matched handler.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token signature, expiry, issuer or audience do not verify
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/airplane", get(list_airplanes_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let principal = st.auth_service.authenticate(&token)?;
    tracing::debug!(principal = %principal.name, "Request authenticated");

    parts.extensions.insert(principal);
    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}

/// Set of roles allowed to call an endpoint.
pub trait RoleRequirement {
    const ROLES: &'static [Role];
}

/// Administrators only.
pub struct AdminOnly;

/// Regular users only.
pub struct UserOnly;

/// Administrators and users.
pub struct AdminOrUser;

impl RoleRequirement for AdminOnly {
    const ROLES: &'static [Role] = &[Role::Admin];
}

impl RoleRequirement for UserOnly {
    const ROLES: &'static [Role] = &[Role::User];
}

impl RoleRequirement for AdminOrUser {
    const ROLES: &'static [Role] = &[Role::Admin, Role::User];
}

/// Extractor granting access when the caller holds one of `R::ROLES`.
///
/// ```rust,ignore
/// async fn handler(Authorized { principal, .. }: Authorized<AdminOnly>) { ... }
/// ```
///
/// Responds `401` when no principal was attached by [`layer`] and `403` when
/// the principal lacks every allowed role.
pub struct Authorized<R> {
    pub principal: Principal,
    _requirement: PhantomData<fn() -> R>,
}

impl<R> Authorized<R> {
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            _requirement: PhantomData,
        }
    }
}

impl<R, S> FromRequestParts<S> for Authorized<R>
where
    R: RoleRequirement,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Authentication required"}),
                )
            })?;

        if !principal.has_any_role(R::ROLES) {
            tracing::debug!(
                principal = %principal.name,
                required = ?R::ROLES,
                "Access denied"
            );
            let required: Vec<String> = R::ROLES.iter().map(Role::to_string).collect();
            return Err(AppError::forbidden(
                "Access denied",
                json!({ "requiredRoles": required }),
            ));
        }

        Ok(Self::new(principal))
    }
}

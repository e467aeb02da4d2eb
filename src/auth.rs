use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use tracing::warn;

use crate::error::ApiError;

/// Checks the admin token. A bearer header takes precedence over the `token`
/// query parameter; an empty configured token disables admin routes.
pub fn verify_token(
    expected: &str,
    auth: Option<Authorization<Bearer>>,
    query_token: Option<&str>,
) -> Result<(), ApiError> {
    let presented = match &auth {
        Some(header) => Some(header.token()),
        None => query_token,
    };
    if expected.is_empty() || presented != Some(expected) {
        warn!(
            via_header = auth.is_some(),
            "rejected admin request with a missing or wrong token"
        );
        return Err(ApiError::Unauthorized("Invalid authentication token".into()));
    }
    Ok(())
}

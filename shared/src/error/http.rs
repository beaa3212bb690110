//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Business-rule rejections (payment already completed, day not yet
    /// delivered, not the first day, slot eligibility) stay 400 so clients
    /// treat them as input problems; only a lost concurrent write maps to 409.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::DayNotFound | Self::UserNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::AlreadyExists | Self::OrderVersionConflict => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            Self::PermissionDenied | Self::RoleRequired => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::DayNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_auth_status() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::RoleRequired.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_business_rules_are_bad_request() {
        assert_eq!(
            ErrorCode::PaymentAlreadyCompleted.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::PaymentNotFirstDay.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::PaymentNotDelivered.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::InvalidStatus.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::NoDeliverySlot.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_and_internal_status() {
        assert_eq!(
            ErrorCode::OrderVersionConflict.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

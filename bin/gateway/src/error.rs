//! HTTP error mapping.
//!
//! Domain errors become 4xx responses with a stable machine-readable `error`
//! code and a human-readable `message`. Validation failures additionally list
//! the per-field violations.

use crate::validate::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use token::TokenError;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    violations: Vec<Violation>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn validation(violations: Vec<Violation>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "validation_failed",
            message: "request validation failed".to_string(),
            violations,
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        let (status, code) = match &err {
            TokenError::ContractMissing => (StatusCode::NOT_FOUND, "contract_missing"),
            TokenError::InvalidAddress(_) => (StatusCode::BAD_REQUEST, "invalid_address"),
            TokenError::InvalidPrivateKey => (StatusCode::BAD_REQUEST, "invalid_private_key"),
            TokenError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "invalid_amount"),
            TokenError::SameAddressTransfer => (StatusCode::BAD_REQUEST, "same_address_transfer"),
            TokenError::InsufficientBalance => (StatusCode::BAD_REQUEST, "insufficient_balance"),
            TokenError::AllowanceTooLow => (StatusCode::BAD_REQUEST, "allowance_too_low"),
            TokenError::Submission(_) => (StatusCode::BAD_REQUEST, "submission_failed"),
        };
        Self {
            status,
            code,
            message: err.to_string(),
            violations: Vec::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.code,
                message: self.message,
                violations: self.violations,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_missing_maps_to_404() {
        let err = ApiError::from(TokenError::ContractMissing);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "contract_missing");
    }

    #[test]
    fn test_domain_errors_map_to_400() {
        for (err, code) in [
            (
                TokenError::InvalidAddress("0x1".to_string()),
                "invalid_address",
            ),
            (TokenError::InvalidPrivateKey, "invalid_private_key"),
            (
                TokenError::InvalidAmount("nope".to_string()),
                "invalid_amount",
            ),
            (TokenError::SameAddressTransfer, "same_address_transfer"),
            (TokenError::InsufficientBalance, "insufficient_balance"),
            (TokenError::AllowanceTooLow, "allowance_too_low"),
            (
                TokenError::Submission("reverted".to_string()),
                "submission_failed",
            ),
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.status(), StatusCode::BAD_REQUEST);
            assert_eq!(api.code(), code);
        }
    }

    #[test]
    fn test_validation_error_carries_violations() {
        let err = ApiError::validation(vec![Violation {
            field: "to",
            message: "must be a 0x-prefixed 20-byte hex address".to_string(),
        }]);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "validation_failed");
        assert_eq!(err.violations.len(), 1);
    }
}

//! Error types used throughout the domain crate, plus the error body the
//! Square API returns on non-2xx responses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impl_wire_enum;

/// Main error type for domain-level failures
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// One entry of the `errors` array in a Square error response.
///
/// ```json
/// {"errors": [{"category": "INVALID_REQUEST_ERROR", "code": "NOT_FOUND",
///              "detail": "Customer not found", "field": "customer_id"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl std::fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code.as_ref().map_or("UNKNOWN", ErrorCode::as_str);
        match (&self.detail, &self.field) {
            (Some(detail), Some(field)) => write!(f, "{code}: {detail} (field: {field})"),
            (Some(detail), None) => write!(f, "{code}: {detail}"),
            (None, Some(field)) => write!(f, "{code} (field: {field})"),
            (None, None) => f.write_str(code),
        }
    }
}

/// Envelope of a Square error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// High-level grouping Square assigns to each error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    ApiError,
    AuthenticationError,
    InvalidRequestError,
    RateLimitError,
    PaymentMethodError,
    RefundError,
    Unknown(String),
}

impl_wire_enum!(ErrorCategory {
    ApiError => "API_ERROR",
    AuthenticationError => "AUTHENTICATION_ERROR",
    InvalidRequestError => "INVALID_REQUEST_ERROR",
    RateLimitError => "RATE_LIMIT_ERROR",
    PaymentMethodError => "PAYMENT_METHOD_ERROR",
    RefundError => "REFUND_ERROR",
});

/// Machine-readable error code attached to each error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InternalServerError,
    Unauthorized,
    AccessTokenExpired,
    AccessTokenRevoked,
    Forbidden,
    InsufficientScopes,
    ApplicationDisabled,
    V1Application,
    V1AccessToken,
    BadRequest,
    MissingRequiredParameter,
    IncorrectType,
    InvalidTime,
    InvalidTimeRange,
    InvalidValue,
    InvalidCursor,
    UnknownQueryParameter,
    ConflictingParameters,
    ExpectedJsonBody,
    InvalidSortOrder,
    ValueRegexMismatch,
    ValueTooShort,
    ValueTooLong,
    ValueTooLow,
    ValueTooHigh,
    ValueEmpty,
    ArrayLengthTooLong,
    ArrayLengthTooShort,
    ArrayEmpty,
    ExpectedBoolean,
    ExpectedInteger,
    ExpectedFloat,
    ExpectedString,
    ExpectedObject,
    ExpectedArray,
    ExpectedMap,
    ExpectedBase64EncodedByteArray,
    InvalidArrayValue,
    InvalidEnumValue,
    InvalidContentType,
    InvalidFormValue,
    NoFieldsSet,
    TooManyMapEntries,
    MapKeyLengthTooShort,
    MapKeyLengthTooLong,
    CurrencyMismatch,
    LocationMismatch,
    IdempotencyKeyReused,
    UnexpectedValue,
    SandboxNotSupported,
    BadCertificate,
    InvalidSquareVersionFormat,
    ApiVersionIncompatible,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    RequestTimeout,
    Conflict,
    Gone,
    RequestEntityTooLarge,
    UnsupportedMediaType,
    UnprocessableEntity,
    RateLimited,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    Unknown(String),
}

impl_wire_enum!(ErrorCode {
    InternalServerError => "INTERNAL_SERVER_ERROR",
    Unauthorized => "UNAUTHORIZED",
    AccessTokenExpired => "ACCESS_TOKEN_EXPIRED",
    AccessTokenRevoked => "ACCESS_TOKEN_REVOKED",
    Forbidden => "FORBIDDEN",
    InsufficientScopes => "INSUFFICIENT_SCOPES",
    ApplicationDisabled => "APPLICATION_DISABLED",
    V1Application => "V1_APPLICATION",
    V1AccessToken => "V1_ACCESS_TOKEN",
    BadRequest => "BAD_REQUEST",
    MissingRequiredParameter => "MISSING_REQUIRED_PARAMETER",
    IncorrectType => "INCORRECT_TYPE",
    InvalidTime => "INVALID_TIME",
    InvalidTimeRange => "INVALID_TIME_RANGE",
    InvalidValue => "INVALID_VALUE",
    InvalidCursor => "INVALID_CURSOR",
    UnknownQueryParameter => "UNKNOWN_QUERY_PARAMETER",
    ConflictingParameters => "CONFLICTING_PARAMETERS",
    ExpectedJsonBody => "EXPECTED_JSON_BODY",
    InvalidSortOrder => "INVALID_SORT_ORDER",
    ValueRegexMismatch => "VALUE_REGEX_MISMATCH",
    ValueTooShort => "VALUE_TOO_SHORT",
    ValueTooLong => "VALUE_TOO_LONG",
    ValueTooLow => "VALUE_TOO_LOW",
    ValueTooHigh => "VALUE_TOO_HIGH",
    ValueEmpty => "VALUE_EMPTY",
    ArrayLengthTooLong => "ARRAY_LENGTH_TOO_LONG",
    ArrayLengthTooShort => "ARRAY_LENGTH_TOO_SHORT",
    ArrayEmpty => "ARRAY_EMPTY",
    ExpectedBoolean => "EXPECTED_BOOLEAN",
    ExpectedInteger => "EXPECTED_INTEGER",
    ExpectedFloat => "EXPECTED_FLOAT",
    ExpectedString => "EXPECTED_STRING",
    ExpectedObject => "EXPECTED_OBJECT",
    ExpectedArray => "EXPECTED_ARRAY",
    ExpectedMap => "EXPECTED_MAP",
    ExpectedBase64EncodedByteArray => "EXPECTED_BASE64_ENCODED_BYTE_ARRAY",
    InvalidArrayValue => "INVALID_ARRAY_VALUE",
    InvalidEnumValue => "INVALID_ENUM_VALUE",
    InvalidContentType => "INVALID_CONTENT_TYPE",
    InvalidFormValue => "INVALID_FORM_VALUE",
    NoFieldsSet => "NO_FIELDS_SET",
    TooManyMapEntries => "TOO_MANY_MAP_ENTRIES",
    MapKeyLengthTooShort => "MAP_KEY_LENGTH_TOO_SHORT",
    MapKeyLengthTooLong => "MAP_KEY_LENGTH_TOO_LONG",
    CurrencyMismatch => "CURRENCY_MISMATCH",
    LocationMismatch => "LOCATION_MISMATCH",
    IdempotencyKeyReused => "IDEMPOTENCY_KEY_REUSED",
    UnexpectedValue => "UNEXPECTED_VALUE",
    SandboxNotSupported => "SANDBOX_NOT_SUPPORTED",
    BadCertificate => "BAD_CERTIFICATE",
    InvalidSquareVersionFormat => "INVALID_SQUARE_VERSION_FORMAT",
    ApiVersionIncompatible => "API_VERSION_INCOMPATIBLE",
    NotFound => "NOT_FOUND",
    MethodNotAllowed => "METHOD_NOT_ALLOWED",
    NotAcceptable => "NOT_ACCEPTABLE",
    RequestTimeout => "REQUEST_TIMEOUT",
    Conflict => "CONFLICT",
    Gone => "GONE",
    RequestEntityTooLarge => "REQUEST_ENTITY_TOO_LARGE",
    UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
    UnprocessableEntity => "UNPROCESSABLE_ENTITY",
    RateLimited => "RATE_LIMITED",
    NotImplemented => "NOT_IMPLEMENTED",
    BadGateway => "BAD_GATEWAY",
    ServiceUnavailable => "SERVICE_UNAVAILABLE",
    GatewayTimeout => "GATEWAY_TIMEOUT",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_square_error_body() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"errors": [{
                "category": "INVALID_REQUEST_ERROR",
                "code": "VALUE_TOO_LONG",
                "detail": "Field must not be greater than 255 length",
                "field": "given_name"
            }]}"#,
        )
        .unwrap();

        assert_eq!(body.errors.len(), 1);
        let detail = &body.errors[0];
        assert_eq!(detail.category, Some(ErrorCategory::InvalidRequestError));
        assert_eq!(detail.code, Some(ErrorCode::ValueTooLong));
        assert_eq!(detail.field.as_deref(), Some("given_name"));
    }

    #[test]
    fn tolerates_missing_and_unknown_fields() {
        let detail: ApiErrorDetail =
            serde_json::from_str(r#"{"code": "BRAND_NEW_CODE", "extra": 1}"#).unwrap();

        assert_eq!(detail.category, None);
        assert_eq!(detail.code, Some(ErrorCode::Unknown("BRAND_NEW_CODE".into())));
        assert_eq!(detail.to_string(), "BRAND_NEW_CODE");
    }

    #[test]
    fn display_includes_detail_and_field() {
        let detail = ApiErrorDetail {
            category: None,
            code: Some(ErrorCode::InvalidValue),
            detail: Some("bad email".into()),
            field: Some("email_address".into()),
        };

        assert_eq!(detail.to_string(), "INVALID_VALUE: bad email (field: email_address)");
    }
}

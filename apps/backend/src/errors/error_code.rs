//! Error codes returned in Problem Details bodies.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string clients see.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Handler reached without a verified principal
    Unauthorized,
    MissingAuthorizationHeader,
    InvalidAuthorizationHeaderFormat,
    UnsupportedAuthorizationType,
    InvalidToken,
    ExpiredToken,
    /// Authenticated principal does not own the resource
    NotOwner,
    /// Unknown username or wrong password
    InvalidCredentials,

    // Request Validation
    ValidationError,
    InvalidUsername,
    InvalidPassword,
    InvalidTaskName,
    InvalidPagination,
    BadRequest,

    // Resource Not Found
    TaskNotFound,

    // Conflicts
    UsernameTaken,
    Conflict,

    // System Errors
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::MissingAuthorizationHeader => "MISSING_AUTHORIZATION_HEADER",
            Self::InvalidAuthorizationHeaderFormat => "INVALID_AUTHORIZATION_HEADER_FORMAT",
            Self::UnsupportedAuthorizationType => "UNSUPPORTED_AUTHORIZATION_TYPE",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::NotOwner => "NOT_OWNER",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidTaskName => "INVALID_TASK_NAME",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::BadRequest => "BAD_REQUEST",

            Self::TaskNotFound => "TASK_NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

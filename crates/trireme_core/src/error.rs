use std::fmt;

/// Stable error codes sent across the method channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A pick request is already outstanding.
    AlreadyShowing,
    /// A `getOpenedFile` call is already waiting on permission or import.
    AlreadyPending,
    /// The user backed out of the picker.
    Cancelled,
    Error,
    ImportError,
    /// Nothing to return for the query.
    NoData,
    /// The user refused the read permission.
    PermissionDenied,
    /// Unknown method name.
    NotImplemented,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::AlreadyShowing => "ALREADY_SHOWING",
            ErrorCode::AlreadyPending => "ALREADY_PENDING",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::Error => "ERROR",
            ErrorCode::ImportError => "IMPORT_ERROR",
            ErrorCode::NoData => "NODATA",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            ErrorCode::AlreadyShowing => "Already showing file picker",
            ErrorCode::AlreadyPending => "Already waiting for opened file",
            ErrorCode::Cancelled => "User cancelled action",
            ErrorCode::Error => "Unknown error",
            ErrorCode::ImportError => "Error importing file",
            ErrorCode::NoData => "No intent data",
            ErrorCode::PermissionDenied => "Read permission denied",
            ErrorCode::NotImplemented => "Method not implemented",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error half of a boundary reply: a wire code plus a readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct BridgeError {
    pub code: ErrorCode,
    pub message: String,
}

impl BridgeError {
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.default_message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Reply to a boundary call: a path or url on success.
pub type Reply = Result<String, BridgeError>;

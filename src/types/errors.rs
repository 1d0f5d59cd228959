use std::fmt;

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug)]
pub enum GeneratorError {
    /// The requested password length is negative.
    InvalidArgument(i64),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidArgument(length) => {
                write!(f, "Invalid password length: {}", length)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// === ValidationError ===

/// Errors raised by form validation, before any request is issued.
///
/// Display text is shown to the user verbatim, so the wording of each
/// variant is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field on a sign-in/sign-up/entry form is empty.
    MissingFields,
    /// A required field on a profile form is empty.
    MissingProfileFields,
    /// The email address does not match the accepted pattern.
    InvalidEmail,
    /// The password and its confirmation differ.
    PasswordMismatch,
    /// The password is shorter than 8 characters.
    PasswordTooShort,
    /// The new email and its confirmation differ.
    EmailMismatch,
    /// The new email equals the current one.
    EmailUnchanged,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => {
                write!(f, "Please fill in all the required fields.")
            }
            ValidationError::MissingProfileFields => {
                write!(f, "Please fill all the required fields.")
            }
            ValidationError::InvalidEmail => {
                write!(f, "Please enter a valid email address.")
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords don't match."),
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least 8 characters.")
            }
            ValidationError::EmailMismatch => write!(f, "Emails do not match."),
            ValidationError::EmailUnchanged => write!(f, "New email is already in use."),
        }
    }
}

impl std::error::Error for ValidationError {}

// === ApiError ===

/// Errors returned by the backend client.
#[derive(Debug)]
pub enum ApiError {
    /// The backend answered with an unexpected status code. `message` is
    /// extracted from the response body.
    Status { code: u16, message: String },
    /// The request could not be sent or the response never arrived.
    Network(String),
    /// The response body could not be decoded into the expected type.
    Decode(String),
    /// An authenticated operation was called with no active session.
    NotAuthenticated,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { code, message } => write!(f, "Error {}: {}", code, message),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            ApiError::NotAuthenticated => write!(f, "Not signed in"),
        }
    }
}

impl std::error::Error for ApiError {}

// === ExportError ===

/// Errors related to exporting entries to a file.
#[derive(Debug)]
pub enum ExportError {
    /// An I/O error occurred while writing the export file.
    IoError(String),
    /// Failed to serialize the entries.
    SerializationError(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::IoError(msg) => write!(f, "Export I/O error: {}", msg),
            ExportError::SerializationError(msg) => {
                write!(f, "Export serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ExportError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === AppError ===

/// Errors surfaced by app-level flows, which mix form validation, backend
/// calls, and file export. Each variant keeps the underlying error so the
/// UI can show its message verbatim.
#[derive(Debug)]
pub enum AppError {
    /// The form was rejected before any request was issued.
    Validation(ValidationError),
    /// The backend call failed.
    Api(ApiError),
    /// Writing the export file failed.
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::Api(e) => write!(f, "{}", e),
            AppError::Export(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Export(e)
    }
}

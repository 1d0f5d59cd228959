use passify::types::errors::*;

// === GeneratorError Tests ===

#[test]
fn generator_error_invalid_argument_display() {
    let err = GeneratorError::InvalidArgument(-5);
    assert_eq!(err.to_string(), "Invalid password length: -5");
}

#[test]
fn generator_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(GeneratorError::InvalidArgument(-1));
    assert!(err.source().is_none());
}

// === ValidationError Tests ===

#[test]
fn validation_error_display_variants() {
    assert_eq!(
        ValidationError::MissingFields.to_string(),
        "Please fill in all the required fields."
    );
    assert_eq!(
        ValidationError::MissingProfileFields.to_string(),
        "Please fill all the required fields."
    );
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
    assert_eq!(
        ValidationError::PasswordMismatch.to_string(),
        "Passwords don't match."
    );
    assert_eq!(
        ValidationError::PasswordTooShort.to_string(),
        "Password must be at least 8 characters."
    );
    assert_eq!(
        ValidationError::EmailMismatch.to_string(),
        "Emails do not match."
    );
    assert_eq!(
        ValidationError::EmailUnchanged.to_string(),
        "New email is already in use."
    );
}

#[test]
fn validation_error_profile_wording_differs_from_screens() {
    // The profile screens say "fill all", the other screens "fill in all".
    assert_ne!(
        ValidationError::MissingFields.to_string(),
        ValidationError::MissingProfileFields.to_string()
    );
}

// === ApiError Tests ===

#[test]
fn api_error_status_display() {
    let err = ApiError::Status {
        code: 400,
        message: "This password is too common.".to_string(),
    };
    assert_eq!(err.to_string(), "Error 400: This password is too common.");
}

#[test]
fn api_error_network_display() {
    let err = ApiError::Network("connection refused".to_string());
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn api_error_decode_display() {
    let err = ApiError::Decode("missing field `access`".to_string());
    assert_eq!(
        err.to_string(),
        "Failed to decode response: missing field `access`"
    );
}

#[test]
fn api_error_not_authenticated_display() {
    assert_eq!(ApiError::NotAuthenticated.to_string(), "Not signed in");
}

// === ExportError Tests ===

#[test]
fn export_error_display_variants() {
    assert_eq!(
        ExportError::IoError("permission denied".to_string()).to_string(),
        "Export I/O error: permission denied"
    );
    assert_eq!(
        ExportError::SerializationError("bad value".to_string()).to_string(),
        "Export serialization error: bad value"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("expected value".to_string()).to_string(),
        "Settings serialization error: expected value"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SettingsError::IoError("disk full".to_string()));
    assert!(err.source().is_none());
}

// === AppError Tests ===

#[test]
fn app_error_passes_through_inner_display() {
    let err = AppError::from(ValidationError::InvalidEmail);
    assert_eq!(err.to_string(), "Please enter a valid email address.");

    let err = AppError::from(ApiError::Status {
        code: 401,
        message: "Given token not valid for any token type".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "Error 401: Given token not valid for any token type"
    );

    let err = AppError::from(ExportError::IoError("read-only".to_string()));
    assert_eq!(err.to_string(), "Export I/O error: read-only");
}

#[test]
fn app_error_from_preserves_variant() {
    assert!(matches!(
        AppError::from(ValidationError::MissingFields),
        AppError::Validation(_)
    ));
    assert!(matches!(
        AppError::from(ApiError::NotAuthenticated),
        AppError::Api(_)
    ));
    assert!(matches!(
        AppError::from(ExportError::SerializationError(String::new())),
        AppError::Export(_)
    ));
}

#[test]
fn app_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(AppError::from(ApiError::NotAuthenticated));
    assert!(err.source().is_none());
}

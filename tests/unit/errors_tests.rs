/*!
 * Tests for error types
 */

use signweave::errors::{AppError, SignError};

#[test]
fn test_signError_corrupt_shouldNameSourceAndReason() {
    let error = SignError::corrupt("data", "video for HELLO has no url");
    assert_eq!(error.to_string(), "Corrupt sign index 'data': video for HELLO has no url");
}

#[test]
fn test_signError_fromIo_shouldWrap() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: SignError = io.into();
    assert!(matches!(error, SignError::Io(_)));
    assert!(error.to_string().contains("denied"));
}

#[test]
fn test_signError_fromSerde_shouldBeParseError() {
    let parse = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
    let error: SignError = parse.into();
    assert!(matches!(error, SignError::Parse(_)));
}

#[test]
fn test_appError_fromSignError_shouldWrap() {
    let error: AppError = SignError::InvalidGloss("\"\"".to_string()).into();
    assert!(matches!(error, AppError::Sign(SignError::InvalidGloss(_))));
    assert_eq!(error.to_string(), "Sign error: Invalid gloss: \"\"");
}

#[test]
fn test_appError_fromAnyhow_shouldBeUnknown() {
    let error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(error, AppError::Unknown(message) if message == "boom"));
}

//! # Vendor Error Translation
//!
//! Maps AWS SDK failures onto the store taxonomy. Classification is a
//! pure function over the vendor error code so it is testable without a
//! live call; transport-level timeouts are picked off first and are never
//! reclassified.

use aws_sdk_secretsmanager::error::{ProvideErrorMetadata, SdkError};

use crate::error::StoreError;

/// Normalized category for a vendor error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    AlreadyExists,
    NotFound,
    AccessDenied,
    Unknown,
}

/// Classify a vendor error code string.
///
/// `DecryptionFailure` is the modeled shape name, but the service has
/// also been observed reporting it with an `Exception` suffix, so both
/// spellings are accepted. Unmatched codes stay `Unknown`.
pub(crate) fn classify(code: Option<&str>) -> ErrorKind {
    match code {
        Some("ResourceExistsException") => ErrorKind::AlreadyExists,
        Some("ResourceNotFoundException") => ErrorKind::NotFound,
        Some("DecryptionFailure" | "DecryptionFailureException" | "AccessDeniedException") => {
            ErrorKind::AccessDenied
        }
        _ => ErrorKind::Unknown,
    }
}

/// True when the failure is a deadline elapsing in the transport layer
/// rather than a service response.
pub(crate) fn is_timeout<E, R>(err: &SdkError<E, R>) -> bool {
    match err {
        SdkError::TimeoutError(_) => true,
        SdkError::DispatchFailure(failure) => failure
            .as_connector_error()
            .is_some_and(|connector| connector.is_timeout()),
        _ => false,
    }
}

/// Translate an SDK failure into a [`StoreError`].
pub(crate) fn translate<E, R>(op: &'static str, name: &str, err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if is_timeout(&err) {
        return StoreError::Timeout { source: err.into() };
    }

    let kind = classify(err.as_service_error().and_then(|service| service.code()));
    match kind {
        ErrorKind::AlreadyExists => StoreError::AlreadyExists,
        ErrorKind::NotFound => StoreError::NotFound,
        ErrorKind::AccessDenied => StoreError::AccessDenied {
            name: name.to_string(),
            source: err.into(),
        },
        ErrorKind::Unknown => StoreError::unknown(op, name, err),
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, is_timeout, translate, ErrorKind};
    use crate::error::StoreError;
    use aws_sdk_secretsmanager::error::SdkError;
    use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
    use aws_smithy_runtime_api::client::result::ConnectorError;

    type TestError = SdkError<GetSecretValueError>;

    #[test]
    fn test_classify_resource_exists() {
        assert_eq!(
            classify(Some("ResourceExistsException")),
            ErrorKind::AlreadyExists
        );
    }

    #[test]
    fn test_classify_resource_not_found() {
        assert_eq!(
            classify(Some("ResourceNotFoundException")),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_classify_decryption_failure_both_spellings() {
        assert_eq!(classify(Some("DecryptionFailure")), ErrorKind::AccessDenied);
        assert_eq!(
            classify(Some("DecryptionFailureException")),
            ErrorKind::AccessDenied
        );
        assert_eq!(
            classify(Some("AccessDeniedException")),
            ErrorKind::AccessDenied
        );
    }

    #[test]
    fn test_classify_defaults_to_unknown() {
        assert_eq!(classify(Some("LimitExceededException")), ErrorKind::Unknown);
        assert_eq!(classify(None), ErrorKind::Unknown);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // Vendor codes are exact shape names; near-misses must not match.
        assert_eq!(
            classify(Some("resourceexistsexception")),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_timeout_error_is_timeout() {
        let err = TestError::timeout_error("deadline elapsed");
        assert!(is_timeout(&err));
    }

    #[test]
    fn test_connector_timeout_is_timeout() {
        let err = TestError::dispatch_failure(ConnectorError::timeout("deadline elapsed".into()));
        assert!(is_timeout(&err));
    }

    #[test]
    fn test_connector_io_failure_is_not_timeout() {
        let err = TestError::dispatch_failure(ConnectorError::io("connection reset".into()));
        assert!(!is_timeout(&err));
    }

    #[test]
    fn test_construction_failure_is_not_timeout() {
        let err = TestError::construction_failure("no identity");
        assert!(!is_timeout(&err));
    }

    #[test]
    fn test_translate_keeps_timeouts_distinct() {
        let err = TestError::timeout_error("deadline elapsed");
        assert!(matches!(
            translate("read", "db-key-1", err),
            StoreError::Timeout { .. }
        ));
    }

    #[test]
    fn test_translate_wraps_unmatched_failures_with_context() {
        let err = TestError::construction_failure("no identity");
        let translated = translate("read", "db-key-1", err);

        assert!(matches!(translated, StoreError::Unknown { op: "read", .. }));
        assert!(translated
            .to_string()
            .starts_with("failed to read 'db-key-1'"));
    }
}

use formstash_core::errors::*;

#[test]
fn invalid_scope_carries_scope_and_reason() {
    let err = StorageError::InvalidScope {
        scope: "a/b".into(),
        reason: "contains '/'".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("a/b"));
    assert!(msg.contains("contains '/'"));
}

#[test]
fn insufficient_sample_carries_counts() {
    let err = StatsError::InsufficientSample {
        operation: "stdev",
        required: 2,
        actual: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains("stdev"));
    assert!(msg.contains('2'));
    assert!(msg.contains('1'));
}

#[test]
fn invalid_number_carries_input() {
    let err = StatsError::InvalidNumber {
        value: "abc".into(),
    };
    assert!(err.to_string().contains("abc"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_formstash_error() {
    let storage_err = StorageError::BackendFailure {
        operation: "set".into(),
        message: "quota exceeded".into(),
    };
    let err: FormstashError = storage_err.into();
    assert!(matches!(err, FormstashError::StorageError(_)));
}

#[test]
fn stats_error_converts_to_formstash_error() {
    let err: FormstashError = StatsError::ZeroMean.into();
    assert!(matches!(err, FormstashError::StatsError(StatsError::ZeroMean)));
}

#[test]
fn io_error_converts_to_storage_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err: StorageError = io.into();
    assert!(matches!(err, StorageError::Io(_)));
}

#[test]
fn serialization_error_converts_to_formstash_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: FormstashError = json_err.into();
    assert!(matches!(err, FormstashError::SerializationError(_)));
}

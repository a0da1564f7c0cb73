use ldev_core::{ErrorInfo, LdevError};

#[test]
fn info_is_reachable_from_every_family() {
    let info = ErrorInfo::new("bad-bound", "upper bound below lower bound")
        .with_context("lower", "5")
        .with_context("upper", "3");
    let errors = [
        LdevError::Argument(info.clone()),
        LdevError::Range(info.clone()),
        LdevError::Graph(info.clone()),
        LdevError::Io(info.clone()),
    ];
    for err in errors {
        assert_eq!(err.info().code, "bad-bound");
        assert_eq!(err.info().context.get("upper").map(String::as_str), Some("3"));
    }
}

#[test]
fn display_mentions_code_message_and_context() {
    let err = LdevError::Range(
        ErrorInfo::new("value-out-of-range", "histogram increment outside [1, S]")
            .with_context("value", "0"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("value-out-of-range"));
    assert!(rendered.contains("histogram increment"));
    assert!(rendered.contains("value=0"));
}

#[test]
fn errors_roundtrip_through_serde() {
    let err = LdevError::Argument(
        ErrorInfo::new("invalid-answer", "expected y or n").with_context("token", "maybe"),
    );
    let json = serde_json::to_string(&err).expect("serialize error");
    let restored: LdevError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(err, restored);
}

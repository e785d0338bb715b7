use super::*;
use crate::ErrorCode;

#[test]
fn empty_collector_has_no_errors() {
    let diags = Diagnostics::new();
    assert!(diags.is_empty());
    assert!(!diags.has_errors());
    assert_eq!(diags.error_count(), 0);
}

#[test]
fn counts_by_severity() {
    let mut diags = Diagnostics::new();
    diags.report(Diagnostic::error(ErrorCode::E1001).with_message("a"));
    diags.report(Diagnostic::warning(ErrorCode::E1002).with_message("b"));
    diags.report(Diagnostic::error(ErrorCode::E2001).with_message("c"));

    assert_eq!(diags.len(), 3);
    assert!(diags.has_errors());
    assert_eq!(diags.error_count(), 2);
    assert_eq!(diags.warning_count(), 1);

    let messages: Vec<_> = diags.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["a", "b", "c"]);
}

#[test]
fn warnings_alone_are_not_errors() {
    let mut diags = Diagnostics::new();
    diags.report(Diagnostic::warning(ErrorCode::E1001));
    assert!(!diags.has_errors());
    assert_eq!(diags.into_vec().len(), 1);
}

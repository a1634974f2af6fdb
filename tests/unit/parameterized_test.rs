//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use taxostage::core::models::{BatchMode, SiblingScope, Status};
use test_case::test_case;

// =============================================================================
// Aggregation Tests
// =============================================================================

#[test_case(&[Status::Invalid, Status::Valid, Status::GranularityStaged], Status::Invalid ; "invalid beats everything")]
#[test_case(&[Status::CoverageStaged, Status::GranularityStaged], Status::CoverageStaged ; "coverage beats granularity")]
#[test_case(&[Status::GranularityStaged, Status::Valid], Status::GranularityStaged ; "granularity beats valid")]
#[test_case(&[Status::Valid], Status::Valid ; "single valid")]
#[test_case(&[Status::Valid, Status::Valid, Status::Valid], Status::Valid ; "repeated valid")]
#[test_case(&[Status::Valid, Status::CoverageStaged, Status::Invalid], Status::Invalid ; "invalid last")]
#[test_case(&[Status::CoverageStaged], Status::CoverageStaged ; "single coverage")]
fn test_aggregate(statuses: &[Status], expected: Status) {
    assert_eq!(Status::aggregate(statuses.iter().copied()), Some(expected));
}

// =============================================================================
// Status Parsing Tests
// =============================================================================

#[test_case("valid", Status::Valid ; "valid")]
#[test_case("invalid", Status::Invalid ; "invalid")]
#[test_case("granularity_staged", Status::GranularityStaged ; "granularity staged")]
#[test_case("coverage_staged", Status::CoverageStaged ; "coverage staged")]
#[test_case("VALID", Status::Valid ; "uppercase valid")]
#[test_case("Coverage_Staged", Status::CoverageStaged ; "mixed case coverage")]
fn test_status_parsing(input: &str, expected: Status) {
    let parsed: Status = input.parse().unwrap();
    assert_eq!(parsed, expected);
}

#[test_case("" ; "empty string")]
#[test_case("staged" ; "partial name")]
#[test_case("granularity-staged" ; "dash instead of underscore")]
fn test_status_parsing_errors(input: &str) {
    let result: Result<Status, _> = input.parse();
    assert!(result.is_err(), "Expected error for input: {input:?}");
}

#[test_case(Status::Invalid, "invalid")]
#[test_case(Status::CoverageStaged, "coverage_staged")]
#[test_case(Status::GranularityStaged, "granularity_staged")]
#[test_case(Status::Valid, "valid")]
fn test_status_text(status: Status, text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(status.to_string(), text);
}

// =============================================================================
// Option Parsing Tests
// =============================================================================

#[test_case("existing", SiblingScope::Existing ; "existing scope")]
#[test_case("ALL", SiblingScope::All ; "uppercase all")]
fn test_sibling_scope_parsing(input: &str, expected: SiblingScope) {
    assert_eq!(input.parse::<SiblingScope>(), Ok(expected));
}

#[test_case("atomic", BatchMode::Atomic ; "atomic mode")]
#[test_case("Sequential", BatchMode::Sequential ; "mixed case sequential")]
fn test_batch_mode_parsing(input: &str, expected: BatchMode) {
    assert_eq!(input.parse::<BatchMode>(), Ok(expected));
}

#[test_case("some" ; "unknown scope")]
#[test_case("" ; "empty scope")]
fn test_sibling_scope_parsing_errors(input: &str) {
    assert!(input.parse::<SiblingScope>().is_err());
}

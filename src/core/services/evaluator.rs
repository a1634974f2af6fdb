//! Evaluation service - compares computed statuses with expected ones
//!
//! Pure comparison logic, no I/O.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::error::TaxonomyError;
use crate::core::models::Status;

/// An item whose computed status differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Item name
    pub item: String,
    /// Status the fixture expects
    pub expected: Status,
    /// Status that was computed, `None` if the item was missing
    pub computed: Option<Status>,
}

/// Outcome of comparing two status mappings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Share of expected items that were computed correctly, in `[0, 1]`
    pub accuracy: f64,
    /// Number of expected items
    pub total: usize,
    /// Number of correctly computed items
    pub correct: usize,
    /// Items that were wrong or missing, sorted by item name
    pub mismatches: Vec<Mismatch>,
}

/// Share of expected items whose computed status matches.
///
/// Items absent from `computed` count as wrong; extra computed items are
/// ignored.
pub fn accuracy(
    expected: &BTreeMap<String, Status>,
    computed: &BTreeMap<String, Status>,
) -> Result<f64, TaxonomyError> {
    evaluate(expected, computed).map(|e| e.accuracy)
}

/// Compare `computed` against `expected` and list every mismatch
pub fn evaluate(
    expected: &BTreeMap<String, Status>,
    computed: &BTreeMap<String, Status>,
) -> Result<Evaluation, TaxonomyError> {
    if expected.is_empty() {
        return Err(TaxonomyError::InvalidInput(
            "expected status mapping is empty".to_string(),
        ));
    }

    let mismatches: Vec<Mismatch> = expected
        .iter()
        .filter_map(|(item, &want)| {
            let got = computed.get(item).copied();
            (got != Some(want)).then(|| Mismatch {
                item: item.clone(),
                expected: want,
                computed: got,
            })
        })
        .collect();

    let total = expected.len();
    let correct = total - mismatches.len();

    #[allow(clippy::cast_precision_loss)]
    let accuracy = correct as f64 / total as f64;

    Ok(Evaluation {
        accuracy,
        total,
        correct,
        mismatches,
    })
}

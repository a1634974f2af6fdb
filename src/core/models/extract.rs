//! Label and report mappings

use std::collections::BTreeMap;

use super::status::Status;

/// Item name to the class names it is labelled with
pub type Extract = BTreeMap<String, Vec<String>>;

/// Item name to its aggregated status
pub type StatusReport = BTreeMap<String, Status>;

use crate::domain::model::{ColumnMap, PhoneEntry, PhoneKind, SourceRecord};
use crate::domain::ports::PhoneClassifier;
use regex::Regex;

pub const DEFAULT_FAX_KEYWORD: &str = "fax";

/// Labels containing the keyword, ignoring case, are fax lines.
#[derive(Debug, Clone)]
pub struct SubstringClassifier {
    keyword: String,
}

impl SubstringClassifier {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.trim().to_lowercase(),
        }
    }
}

impl Default for SubstringClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FAX_KEYWORD)
    }
}

impl PhoneClassifier for SubstringClassifier {
    fn classify_label(&self, label: &str) -> PhoneKind {
        if label.to_lowercase().contains(&self.keyword) {
            PhoneKind::Fax
        } else {
            PhoneKind::Voice
        }
    }
}

/// Labels matching the pattern are fax lines.
#[derive(Debug, Clone)]
pub struct RegexClassifier {
    pattern: Regex,
}

impl RegexClassifier {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl PhoneClassifier for RegexClassifier {
    fn classify_label(&self, label: &str) -> PhoneKind {
        if self.pattern.is_match(label) {
            PhoneKind::Fax
        } else {
            PhoneKind::Voice
        }
    }
}

/// Classifies one phone slot with the default `fax` substring policy.
pub fn classify_phone(label: &str, value: &str) -> Option<PhoneEntry> {
    classify_phone_with(&SubstringClassifier::default(), label, value)
}

/// Blank values yield no entry regardless of label.
pub fn classify_phone_with(
    classifier: &dyn PhoneClassifier,
    label: &str,
    value: &str,
) -> Option<PhoneEntry> {
    let number = value.trim();
    if number.is_empty() {
        return None;
    }

    Some(PhoneEntry {
        kind: classifier.classify_label(label),
        number: number.to_string(),
    })
}

/// Walks phone slots `1..=slots` in order, keeping only slots with a value.
pub fn collect_phone_entries(
    row: &SourceRecord,
    columns: &ColumnMap,
    slots: usize,
    classifier: &dyn PhoneClassifier,
) -> Vec<PhoneEntry> {
    (1..=slots)
        .filter_map(|slot| {
            let label = row.get(&columns.phone_label_column(slot));
            let value = row.get(&columns.phone_value_column(slot));
            classify_phone_with(classifier, label, value)
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of phone (label, value) slots read from each source row.
pub const DEFAULT_PHONE_SLOTS: usize = 4;
/// Fax numbers kept per contact; the output schema has FAX1 and FAX2.
pub const FAX_COLUMNS: usize = 2;
/// Voice numbers kept per contact; the output schema has VOICE1 and VOICE2.
pub const VOICE_COLUMNS: usize = 2;
/// The fax tool rejects files with an empty NOTES column.
pub const NOTES_PLACEHOLDER: &str = " ";

pub const OUTPUT_HEADERS: [&str; 12] = [
    "ID",
    "NAME",
    "COMPANY",
    "ADDRESS",
    "CITYSTATE",
    "FAX1",
    "FAX2",
    "VOICE1",
    "VOICE2",
    "BILLCODE1",
    "BILLCODE2",
    "NOTES",
];

/// One input row keyed by source column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    data: HashMap<String, String>,
}

impl SourceRecord {
    pub fn new(data: HashMap<String, String>) -> Self {
        Self { data }
    }

    /// Value of `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.data.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SourceRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Source column names recognized in the contact export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub organization: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    /// `{n}` is replaced by the 1-based slot number.
    pub phone_label: String,
    pub phone_value: String,
}

impl ColumnMap {
    pub fn phone_label_column(&self, slot: usize) -> String {
        self.phone_label.replace("{n}", &slot.to_string())
    }

    pub fn phone_value_column(&self, slot: usize) -> String {
        self.phone_value.replace("{n}", &slot.to_string())
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            first_name: "First Name".to_string(),
            middle_name: "Middle Name".to_string(),
            last_name: "Last Name".to_string(),
            organization: "Organization Name".to_string(),
            street: "Address 1 - Street".to_string(),
            city: "Address 1 - City".to_string(),
            region: "Address 1 - Region".to_string(),
            postal_code: "Address 1 - Postal Code".to_string(),
            phone_label: "Phone {n} - Label".to_string(),
            phone_value: "Phone {n} - Value".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    Fax,
    Voice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEntry {
    pub kind: PhoneKind,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "COMPANY")]
    pub company: String,
    #[serde(rename = "ADDRESS")]
    pub address: String,
    #[serde(rename = "CITYSTATE")]
    pub citystate: String,
    #[serde(rename = "FAX1")]
    pub fax1: String,
    #[serde(rename = "FAX2")]
    pub fax2: String,
    #[serde(rename = "VOICE1")]
    pub voice1: String,
    #[serde(rename = "VOICE2")]
    pub voice2: String,
    #[serde(rename = "BILLCODE1")]
    pub billcode1: String,
    #[serde(rename = "BILLCODE2")]
    pub billcode2: String,
    #[serde(rename = "NOTES")]
    pub notes: String,
}

/// Hands out contiguous output IDs starting at 1.
///
/// Owned by a single conversion run; only successfully assembled rows
/// advance it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn advance(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn emitted(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    NoFaxNumber,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "no name"),
            SkipReason::NoFaxNumber => write!(f, "no fax number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Emitted(OutputRecord),
    Skipped(SkipReason),
}

impl RowOutcome {
    pub fn into_record(self) -> Option<OutputRecord> {
        match self {
            RowOutcome::Emitted(record) => Some(record),
            RowOutcome::Skipped(_) => None,
        }
    }
}

use crate::core::phone::{RegexClassifier, SubstringClassifier, DEFAULT_FAX_KEYWORD};
use crate::domain::model::{ColumnMap, DEFAULT_PHONE_SLOTS};
use crate::domain::ports::PhoneClassifier;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_slot_template, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PHONE_SLOTS: usize = 16;

/// Conversion settings. Every section is optional; defaults match the
/// standard contact export layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    pub columns: ColumnMap,
    pub phones: PhoneSettings,
    pub classifier: ClassifierSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneSettings {
    pub slots: usize,
}

impl Default for PhoneSettings {
    fn default() -> Self {
        Self {
            slots: DEFAULT_PHONE_SLOTS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierPolicy {
    #[default]
    Substring,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    pub policy: ClassifierPolicy,
    /// Used by the `substring` policy.
    pub keyword: String,
    /// Used by the `regex` policy.
    pub pattern: Option<String>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            policy: ClassifierPolicy::Substring,
            keyword: DEFAULT_FAX_KEYWORD.to_string(),
            pattern: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub line_ending: LineEnding,
}

impl ConverterSettings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${FAX_KEYWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn build_classifier(&self) -> Result<Box<dyn PhoneClassifier>> {
        match self.classifier.policy {
            ClassifierPolicy::Substring => {
                Ok(Box::new(SubstringClassifier::new(&self.classifier.keyword)))
            }
            ClassifierPolicy::Regex => {
                let pattern = self.classifier.pattern.as_deref().ok_or_else(|| {
                    ConvertError::ConfigError {
                        message: "classifier.pattern is required when policy = \"regex\""
                            .to_string(),
                    }
                })?;
                Ok(Box::new(RegexClassifier::new(Regex::new(pattern)?)))
            }
        }
    }
}

impl Validate for ConverterSettings {
    fn validate(&self) -> Result<()> {
        validate_range("phones.slots", self.phones.slots, 1, MAX_PHONE_SLOTS)?;
        validate_slot_template("columns.phone_label", &self.columns.phone_label)?;
        validate_slot_template("columns.phone_value", &self.columns.phone_value)?;

        match self.classifier.policy {
            ClassifierPolicy::Substring => {
                validate_non_empty_string("classifier.keyword", &self.classifier.keyword)
            }
            ClassifierPolicy::Regex => self.build_classifier().map(|_| ()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PhoneKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = ConverterSettings::from_toml_str("").unwrap();

        assert_eq!(settings, ConverterSettings::default());
        assert_eq!(settings.phones.slots, 4);
        assert_eq!(settings.columns.first_name, "First Name");
        assert_eq!(settings.output.line_ending, LineEnding::Crlf);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_content = r#"
[columns]
organization = "Company"
phone_label = "Tel {n} Type"

[phones]
slots = 6

[output]
line_ending = "lf"
"#;

        let settings = ConverterSettings::from_toml_str(toml_content).unwrap();

        assert_eq!(settings.columns.organization, "Company");
        assert_eq!(settings.columns.phone_label_column(2), "Tel 2 Type");
        assert_eq!(settings.columns.last_name, "Last Name");
        assert_eq!(settings.phones.slots, 6);
        assert_eq!(settings.output.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_regex_policy_builds_regex_classifier() {
        let toml_content = r#"
[classifier]
policy = "regex"
pattern = "(?i)^fax"
"#;

        let settings = ConverterSettings::from_toml_str(toml_content).unwrap();
        let classifier = settings.build_classifier().unwrap();

        assert_eq!(classifier.classify_label("Fax Work"), PhoneKind::Fax);
        assert_eq!(classifier.classify_label("Work Fax"), PhoneKind::Voice);
    }

    #[test]
    fn test_regex_policy_requires_pattern() {
        let settings = ConverterSettings::from_toml_str("[classifier]\npolicy = \"regex\"").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let settings =
            ConverterSettings::from_toml_str("[classifier]\npolicy = \"regex\"\npattern = \"(fax\"")
                .unwrap();
        assert!(matches!(
            settings.validate(),
            Err(ConvertError::PatternError(_))
        ));
    }

    #[test]
    fn test_slot_count_validated() {
        let settings = ConverterSettings::from_toml_str("[phones]\nslots = 0").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = ConverterSettings::from_toml_str("[classifier]\npolicy = \"ml\"");
        assert!(matches!(result, Err(ConvertError::TomlError(_))));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FAX_CONTACTS_TEST_KEYWORD", "telefax");

        let settings =
            ConverterSettings::from_toml_str("[classifier]\nkeyword = \"${FAX_CONTACTS_TEST_KEYWORD}\"")
                .unwrap();
        assert_eq!(settings.classifier.keyword, "telefax");

        std::env::remove_var("FAX_CONTACTS_TEST_KEYWORD");
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[columns]\nfirst_name = \"Given Name\"\n")
            .unwrap();

        let settings = ConverterSettings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.columns.first_name, "Given Name");
    }
}

use crate::config::toml_config::ConverterSettings;
use crate::core::assemble::assemble;
use crate::core::phone::{collect_phone_entries, SubstringClassifier};
use crate::domain::model::{ColumnMap, IdCounter, RowOutcome, SourceRecord, DEFAULT_PHONE_SLOTS};
use crate::domain::ports::PhoneClassifier;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Row-level transformation: phone classification followed by assembly.
pub struct ContactTransformer {
    columns: ColumnMap,
    slots: usize,
    classifier: Box<dyn PhoneClassifier>,
}

impl ContactTransformer {
    pub fn new(columns: ColumnMap, slots: usize, classifier: Box<dyn PhoneClassifier>) -> Self {
        Self {
            columns,
            slots,
            classifier,
        }
    }

    /// Rejects settings that fail validation.
    pub fn from_settings(settings: &ConverterSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(
            settings.columns.clone(),
            settings.phones.slots,
            settings.build_classifier()?,
        ))
    }

    pub fn transform(&self, row: &SourceRecord, ids: &mut IdCounter) -> RowOutcome {
        let phones = collect_phone_entries(row, &self.columns, self.slots, self.classifier.as_ref());
        assemble(row, &self.columns, &phones, ids)
    }
}

impl Default for ContactTransformer {
    fn default() -> Self {
        Self::new(
            ColumnMap::default(),
            DEFAULT_PHONE_SLOTS,
            Box::new(SubstringClassifier::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SkipReason;
    use crate::utils::error::ConvertError;

    #[test]
    fn test_fax_in_fifth_slot_ignored_by_default() {
        let row: SourceRecord = [
            ("First Name", "Jane"),
            ("Phone 5 - Label", "Fax"),
            ("Phone 5 - Value", "555"),
        ]
        .into_iter()
        .collect();
        let mut ids = IdCounter::new();

        let outcome = ContactTransformer::default().transform(&row, &mut ids);

        assert_eq!(outcome, RowOutcome::Skipped(SkipReason::NoFaxNumber));
    }

    #[test]
    fn test_configured_slots_extend_the_walk() {
        let row: SourceRecord = [
            ("First Name", "Jane"),
            ("Phone 5 - Label", "Fax"),
            ("Phone 5 - Value", "555"),
        ]
        .into_iter()
        .collect();
        let mut settings = ConverterSettings::default();
        settings.phones.slots = 5;
        let transformer = ContactTransformer::from_settings(&settings).unwrap();
        let mut ids = IdCounter::new();

        let record = transformer.transform(&row, &mut ids).into_record().unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.fax1, "555");
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let mut settings = ConverterSettings::default();
        settings.classifier.keyword = String::new();

        assert!(matches!(
            ContactTransformer::from_settings(&settings),
            Err(ConvertError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_zero_slots_rejected() {
        let mut settings = ConverterSettings::default();
        settings.phones.slots = 0;

        assert!(matches!(
            ContactTransformer::from_settings(&settings),
            Err(ConvertError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_second_fax_slot_lands_in_fax2() {
        let row: SourceRecord = [
            ("First Name", "Jane"),
            ("Phone 1 - Label", "Home Fax"),
            ("Phone 1 - Value", "111"),
            ("Phone 3 - Label", "work fax"),
            ("Phone 3 - Value", "333"),
        ]
        .into_iter()
        .collect();
        let mut ids = IdCounter::new();

        let record = ContactTransformer::default()
            .transform(&row, &mut ids)
            .into_record()
            .unwrap();

        assert_eq!(record.fax1, "111");
        assert_eq!(record.fax2, "333");
    }
}

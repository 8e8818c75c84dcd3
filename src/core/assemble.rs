use crate::core::normalize::{combine_name, normalize};
use crate::domain::model::{
    ColumnMap, IdCounter, OutputRecord, PhoneEntry, PhoneKind, RowOutcome, SkipReason,
    SourceRecord, FAX_COLUMNS, NOTES_PLACEHOLDER, VOICE_COLUMNS,
};

/// Builds the output row for one contact, or reports why it was dropped.
///
/// Rows without a name or without any fax entry are skipped and do not
/// consume an ID. `phones` must be in slot order.
pub fn assemble(
    row: &SourceRecord,
    columns: &ColumnMap,
    phones: &[PhoneEntry],
    ids: &mut IdCounter,
) -> RowOutcome {
    let name = combine_name(
        row.get(&columns.first_name),
        row.get(&columns.middle_name),
        row.get(&columns.last_name),
    );
    if name.is_empty() {
        return RowOutcome::Skipped(SkipReason::MissingName);
    }

    let (fax_numbers, voice_numbers): (Vec<&PhoneEntry>, Vec<&PhoneEntry>) = phones
        .iter()
        .partition(|entry| entry.kind == PhoneKind::Fax);
    if fax_numbers.is_empty() {
        return RowOutcome::Skipped(SkipReason::NoFaxNumber);
    }

    let company = normalize(row.get(&columns.organization));
    let street = normalize(row.get(&columns.street));
    let city = normalize(row.get(&columns.city));
    let region = normalize(row.get(&columns.region));
    let postal = normalize(row.get(&columns.postal_code));

    let [fax1, fax2] = leading_numbers::<FAX_COLUMNS>(&fax_numbers);
    let [voice1, voice2] = leading_numbers::<VOICE_COLUMNS>(&voice_numbers);

    RowOutcome::Emitted(OutputRecord {
        id: ids.advance(),
        name,
        company,
        address: street,
        citystate: format_citystate(&city, &region, &postal),
        fax1,
        fax2,
        voice1,
        voice2,
        billcode1: String::new(),
        billcode2: String::new(),
        notes: NOTES_PLACEHOLDER.to_string(),
    })
}

/// `"{city}, {region} {postal}"` with outer whitespace and commas stripped.
///
/// Partial addresses keep whatever inner punctuation the template leaves,
/// e.g. city and postal code alone give `"Austin,  78701"`.
pub fn format_citystate(city: &str, region: &str, postal: &str) -> String {
    if city.is_empty() && region.is_empty() && postal.is_empty() {
        return String::new();
    }

    format!("{}, {} {}", city, region, postal)
        .trim()
        .trim_matches(',')
        .trim()
        .to_string()
}

/// First `N` numbers, padded with empty strings.
fn leading_numbers<const N: usize>(entries: &[&PhoneEntry]) -> [String; N] {
    std::array::from_fn(|i| {
        entries
            .get(i)
            .map(|entry| entry.number.clone())
            .unwrap_or_default()
    })
}

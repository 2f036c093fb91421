//! Search filter over the base record list.

use crate::record::UserRecord;

/// Case-insensitive substring match against name, email or role.
///
/// `needle` must already be lowercased.
fn matches_lowercased(record: &UserRecord, needle: &str) -> bool {
    needle.is_empty()
        || [&record.name, &record.email, &record.role]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Indices into `records` of every matching record, in base order.
pub fn filter_indices(records: &[UserRecord], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_lowercased(record, &needle))
        .map(|(index, _)| index)
        .collect()
}

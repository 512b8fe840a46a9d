//! Filtering and distinct-value queries over loaded statistics rows.

use std::collections::BTreeSet;

use landcover_common::{FilterSelection, LandCoverRecord};

/// Select the rows matching a filter, preserving table order.
pub fn filter_records<'a>(
    records: &'a [LandCoverRecord],
    selection: &FilterSelection,
) -> Vec<&'a LandCoverRecord> {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .collect()
}

/// Distinct municipality names, sorted.
pub fn municipalities(records: &[LandCoverRecord]) -> Vec<String> {
    distinct(records, |record| record.municipality.clone())
}

/// Distinct state abbreviations, sorted.
pub fn states(records: &[LandCoverRecord]) -> Vec<String> {
    distinct(records, |record| record.state.clone())
}

/// Distinct years, ascending.
pub fn years(records: &[LandCoverRecord]) -> Vec<u16> {
    distinct(records, |record| record.year)
}

/// Distinct cover class names, sorted.
pub fn class_names(records: &[LandCoverRecord]) -> Vec<String> {
    distinct(records, |record| record.class_name.clone())
}

fn distinct<T, F>(records: &[LandCoverRecord], key: F) -> Vec<T>
where
    T: Ord,
    F: Fn(&LandCoverRecord) -> T,
{
    records
        .iter()
        .map(key)
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect()
}

//! Postal code dataset and read-only queries.
//!
//! The dataset is loaded once (see [`load`]) and then shared by reference.
//! Every query is a linear scan over the records:
//!
//! | Query                     | Result                                  |
//! |---------------------------|-----------------------------------------|
//! | `provinces`               | unique provinces, sorted                |
//! | `cantons_by_province`     | unique cantons of a province, sorted    |
//! | `districts_by_canton`     | entries of a canton, collated           |
//! | `districts_by_province`   | entries of a province, collated         |
//! | `find_district`           | first exact match                       |
//! | `search`                  | case-insensitive substring match        |

mod collate;
mod error;
mod load;
pub mod validate;

pub use collate::locale_cmp;
pub use error::DataError;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalCodeEntry {
    pub province: String,
    pub canton: String,
    pub district: String,
    pub postal_code: String,
}

impl PostalCodeEntry {
    pub fn new(
        province: impl Into<String>,
        canton: impl Into<String>,
        district: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            canton: canton.into(),
            district: district.into(),
            postal_code: postal_code.into(),
        }
    }

    /// Field values paired with their JSON names, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("province", &self.province),
            ("canton", &self.canton),
            ("district", &self.district),
            ("postal_code", &self.postal_code),
        ]
    }

    /// Whether any field contains the already-lowercased `needle`.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.fields()
            .iter()
            .any(|(_, value)| value.to_lowercase().contains(needle))
    }
}

/// Immutable postal code dataset.
#[derive(Debug, Clone, Default)]
pub struct PostalCodes {
    entries: Vec<PostalCodeEntry>,
}

impl PostalCodes {
    /// All entries in source order.
    #[inline]
    pub fn entries(&self) -> &[PostalCodeEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unique provinces in lexicographic order.
    pub fn provinces(&self) -> Vec<&str> {
        unique_sorted(self.entries.iter().map(|e| e.province.as_str()))
    }

    /// Unique cantons of `province` (exact, case-sensitive match) in lexicographic order.
    pub fn cantons_by_province(&self, province: &str) -> Vec<&str> {
        unique_sorted(
            self.entries
                .iter()
                .filter(|e| e.province == province)
                .map(|e| e.canton.as_str()),
        )
    }

    /// Entries of one canton, ordered by district name.
    pub fn districts_by_canton(&self, province: &str, canton: &str) -> Vec<&PostalCodeEntry> {
        collate_by_district(
            self.entries
                .iter()
                .filter(|e| e.province == province && e.canton == canton)
                .collect(),
        )
    }

    /// Entries of one province, ordered by district name.
    pub fn districts_by_province(&self, province: &str) -> Vec<&PostalCodeEntry> {
        collate_by_district(
            self.entries
                .iter()
                .filter(|e| e.province == province)
                .collect(),
        )
    }

    /// First entry matching all three names exactly.
    pub fn find_district(
        &self,
        province: &str,
        canton: &str,
        district: &str,
    ) -> Option<&PostalCodeEntry> {
        self.entries
            .iter()
            .find(|e| e.province == province && e.canton == canton && e.district == district)
    }

    /// Case-insensitive substring search across all four fields.
    ///
    /// Matches are returned in source order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&PostalCodeEntry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.matches_lowercase(&needle))
            .collect()
    }
}

impl From<Vec<PostalCodeEntry>> for PostalCodes {
    fn from(entries: Vec<PostalCodeEntry>) -> Self {
        Self { entries }
    }
}

/// Deduplicated in `str` order, which is code point order. JS sorts by UTF-16
/// units instead; the two differ only when a name mixes characters above
/// U+FFFF with ones in U+E000..=U+FFFF, none of which occur in place names.
fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Stable sort so equal district names keep source order.
fn collate_by_district(mut entries: Vec<&PostalCodeEntry>) -> Vec<&PostalCodeEntry> {
    entries.sort_by(|a, b| locale_cmp(&a.district, &b.district));
    entries
}

#[cfg(test)]
pub(crate) fn test_dataset() -> PostalCodes {
    PostalCodes::from(vec![
        PostalCodeEntry::new("San José", "San José", "Carmen", "10101"),
        PostalCodeEntry::new("San José", "San José", "Merced", "10102"),
        PostalCodeEntry::new("San José", "Escazú", "San Rafael", "10203"),
        PostalCodeEntry::new("San José", "Escazú", "Escazú", "10201"),
        PostalCodeEntry::new("Alajuela", "Alajuela", "Guácima", "20105"),
        PostalCodeEntry::new("Alajuela", "Alajuela", "Carrizal", "20103"),
        PostalCodeEntry::new("Alajuela", "San Ramón", "San Ramón", "20201"),
        PostalCodeEntry::new("Limón", "Pococí", "Jiménez", "70202"),
        PostalCodeEntry::new("Limón", "Pococí", "Guápiles", "70201"),
        // Duplicate row: loaders keep it, unique queries collapse it.
        PostalCodeEntry::new("Limón", "Pococí", "Guápiles", "70201"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provinces_unique_and_sorted() {
        let data = test_dataset();
        let provinces = data.provinces();
        assert_eq!(provinces, vec!["Alajuela", "Limón", "San José"]);

        let mut sorted = provinces.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(provinces, sorted);
    }

    #[test]
    fn test_provinces_empty_dataset() {
        let data = PostalCodes::default();
        assert!(data.provinces().is_empty());
        assert!(data.search("san").is_empty());
    }

    #[test]
    fn test_cantons_by_province() {
        let data = test_dataset();
        assert_eq!(data.cantons_by_province("San José"), vec!["Escazú", "San José"]);
        assert_eq!(data.cantons_by_province("Limón"), vec!["Pococí"]);
    }

    #[test]
    fn test_cantons_by_province_is_case_sensitive() {
        let data = test_dataset();
        assert!(data.cantons_by_province("san josé").is_empty());
        assert!(data.cantons_by_province("Heredia").is_empty());
    }

    #[test]
    fn test_districts_by_canton_collated() {
        let data = test_dataset();
        let districts: Vec<_> = data
            .districts_by_canton("Alajuela", "Alajuela")
            .iter()
            .map(|e| e.district.as_str())
            .collect();
        // "Guácima" folds to "guacima", after "carrizal"
        assert_eq!(districts, vec!["Carrizal", "Guácima"]);
    }

    #[test]
    fn test_districts_by_canton_keeps_duplicates() {
        let data = test_dataset();
        let districts = data.districts_by_canton("Limón", "Pococí");
        assert_eq!(districts.len(), 3);
        assert_eq!(districts[0].district, "Guápiles");
        assert_eq!(districts[1].district, "Guápiles");
        assert_eq!(districts[2].district, "Jiménez");
    }

    #[test]
    fn test_districts_by_province_all_match() {
        let data = test_dataset();
        for province in data.provinces() {
            let entries = data.districts_by_province(province);
            assert!(!entries.is_empty());
            assert!(entries.iter().all(|e| e.province == province));
        }
    }

    #[test]
    fn test_districts_by_province_order() {
        let data = test_dataset();
        let districts: Vec<_> = data
            .districts_by_province("San José")
            .iter()
            .map(|e| e.district.as_str())
            .collect();
        assert_eq!(districts, vec!["Carmen", "Escazú", "Merced", "San Rafael"]);
    }

    #[test]
    fn test_find_district() {
        let data = test_dataset();
        let entry = data.find_district("San José", "Escazú", "San Rafael").unwrap();
        assert_eq!(entry.postal_code, "10203");

        assert!(data.find_district("San José", "Escazú", "Carmen").is_none());
        assert!(data.find_district("san josé", "escazú", "san rafael").is_none());
    }

    #[test]
    fn test_search_case_insensitive() {
        let data = test_dataset();
        let upper = data.search("SAN");
        let lower = data.search("san");
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn test_search_matches_any_field_in_source_order() {
        let data = test_dataset();

        let by_code: Vec<_> = data.search("2010").iter().map(|e| e.postal_code.as_str()).collect();
        assert_eq!(by_code, vec!["20105", "20103"]);

        let by_canton = data.search("escazú");
        assert_eq!(by_canton.len(), 2);
        assert_eq!(by_canton[0].district, "San Rafael");

        // accents are not folded
        assert!(data.search("escazu").is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let data = test_dataset();
        assert_eq!(data.search("").len(), data.len());
    }

    #[test]
    fn test_entry_fields() {
        let entry = PostalCodeEntry::new("a", "b", "c", "d");
        let names: Vec<_> = entry.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["province", "canton", "district", "postal_code"]);
    }
}

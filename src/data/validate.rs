//! Dataset quality checks.
//!
//! The loader only rejects empty fields. These checks find problems that
//! still load but would produce odd pages: malformed postal codes, stray
//! whitespace, repeated records, and distinct districts sharing one URL.

use super::{PostalCodeEntry, PostalCodes};
use crate::route::district_url;
use rustc_hash::FxHashMap;
use std::fmt;

/// Costa Rica postal codes: five ASCII digits.
const POSTAL_CODE_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Postal code is not five ASCII digits.
    MalformedPostalCode(String),
    /// Field has leading, trailing or repeated whitespace.
    UntrimmedField(&'static str),
    /// Same four values as an earlier record.
    Duplicate { first: usize },
    /// A different district already produced this URL.
    UrlCollision { first: usize, url: String },
}

/// A problem found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetIssue {
    /// Zero-based record index.
    pub index: usize,
    pub kind: IssueKind,
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MalformedPostalCode(code) => {
                write!(f, "postal code `{code}` is not {POSTAL_CODE_LEN} digits")
            }
            IssueKind::UntrimmedField(field) => write!(f, "`{field}` has stray whitespace"),
            IssueKind::Duplicate { first } => write!(f, "duplicate of record {first}"),
            IssueKind::UrlCollision { first, url } => {
                write!(f, "url {url} already used by record {first}")
            }
        }
    }
}

/// Run every check, returning issues ordered by record index.
pub fn check_dataset(data: &PostalCodes) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();
    let mut seen: FxHashMap<&PostalCodeEntry, usize> = FxHashMap::default();
    let mut urls: FxHashMap<String, usize> = FxHashMap::default();

    for (index, entry) in data.entries().iter().enumerate() {
        if !is_valid_postal_code(&entry.postal_code) {
            issues.push(DatasetIssue {
                index,
                kind: IssueKind::MalformedPostalCode(entry.postal_code.clone()),
            });
        }

        for (field, value) in entry.fields() {
            if !is_normalized(value) {
                issues.push(DatasetIssue {
                    index,
                    kind: IssueKind::UntrimmedField(field),
                });
            }
        }

        if let Some(&first) = seen.get(entry) {
            issues.push(DatasetIssue {
                index,
                kind: IssueKind::Duplicate { first },
            });
            // Exact duplicates would also collide on url; report once.
            continue;
        }
        seen.insert(entry, index);

        let url = district_url(&entry.province, &entry.canton, &entry.district);
        match urls.get(&url) {
            Some(&first) => issues.push(DatasetIssue {
                index,
                kind: IssueKind::UrlCollision { first, url },
            }),
            None => {
                urls.insert(url, index);
            }
        }
    }

    issues
}

pub fn is_valid_postal_code(code: &str) -> bool {
    code.len() == POSTAL_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// No surrounding whitespace and only single spaces between words.
fn is_normalized(value: &str) -> bool {
    value.split_whitespace().collect::<Vec<_>>().join(" ") == value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(p: &str, c: &str, d: &str, code: &str) -> PostalCodeEntry {
        PostalCodeEntry::new(p, c, d, code)
    }

    #[test]
    fn test_clean_dataset_has_no_issues() {
        let data = PostalCodes::embedded().unwrap();
        assert!(check_dataset(&data).is_empty());
    }

    #[test]
    fn test_postal_code_format() {
        assert!(is_valid_postal_code("10101"));
        assert!(!is_valid_postal_code("1010"));
        assert!(!is_valid_postal_code("101010"));
        assert!(!is_valid_postal_code("1O101"));
        assert!(!is_valid_postal_code("１０１０１"));
    }

    #[test]
    fn test_malformed_postal_code() {
        let data = PostalCodes::from(vec![entry("Heredia", "Barva", "Barva", "4020")]);
        let issues = check_dataset(&data);
        assert_eq!(
            issues,
            vec![DatasetIssue {
                index: 0,
                kind: IssueKind::MalformedPostalCode("4020".into()),
            }]
        );
    }

    #[test]
    fn test_untrimmed_fields() {
        let data = PostalCodes::from(vec![entry(" Heredia", "Barva", "San  Pedro", "40202")]);
        let kinds: Vec<_> = check_dataset(&data).into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::UntrimmedField("province"),
                IssueKind::UntrimmedField("district"),
            ]
        );
    }

    #[test]
    fn test_duplicate_reported_once() {
        let data = PostalCodes::from(vec![
            entry("Heredia", "Barva", "Barva", "40201"),
            entry("Heredia", "Barva", "San Pedro", "40202"),
            entry("Heredia", "Barva", "Barva", "40201"),
        ]);
        let issues = check_dataset(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, 2);
        assert_eq!(issues[0].kind, IssueKind::Duplicate { first: 0 });
    }

    #[test]
    fn test_url_collision() {
        let data = PostalCodes::from(vec![
            entry("Limón", "Pococí", "Jiménez", "70202"),
            entry("Limón", "Pococí", "Jimenez", "70203"),
        ]);
        let issues = check_dataset(&data);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].kind,
            IssueKind::UrlCollision {
                first: 0,
                url: "/codigo-postal/limon/pococi/jimenez/".into(),
            }
        );
        assert_eq!(
            issues[0].to_string(),
            "url /codigo-postal/limon/pococi/jimenez/ already used by record 0"
        );
    }
}

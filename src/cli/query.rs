//! Query command: run one dataset or route operation and print JSON.

use std::fs;
use std::io::{Write, stdout};

use anyhow::{Result, bail};
use serde_json::{Value as JsonValue, json};

use crate::cli::args::{Query, QueryArgs};
use crate::data::PostalCodes;
use crate::log;
use crate::route::{canton_url, district_url, province_url, whatsapp_share_url};

/// Execute query command
pub fn run_query(args: &QueryArgs, data: &PostalCodes) -> Result<()> {
    let value = execute(&args.query, data)?;
    output_result(&value, args, &mut stdout().lock())
}

/// Evaluate a query against the dataset.
///
/// Absent districts are `null`, empty listings are `[]`.
fn execute(query: &Query, data: &PostalCodes) -> Result<JsonValue> {
    let value = match query {
        Query::Provinces => json!(data.provinces()),
        Query::Cantons { province } => json!(data.cantons_by_province(province)),
        Query::Districts { province, canton } => match canton {
            Some(canton) => json!(data.districts_by_canton(province, canton)),
            None => json!(data.districts_by_province(province)),
        },
        Query::Find {
            province,
            canton,
            district,
        } => json!(data.find_district(province, canton, district)),
        Query::Search { query } => json!(data.search(query)),
        Query::Url {
            province,
            canton,
            district,
        } => {
            let url = match (canton, district) {
                (Some(canton), Some(district)) => district_url(province, canton, district),
                (Some(canton), None) => canton_url(province, canton),
                (None, _) => province_url(province),
            };
            JsonValue::String(url)
        }
        Query::Share {
            province,
            canton,
            district,
        } => {
            let Some(entry) = data.find_district(province, canton, district) else {
                bail!("no district `{district}` in {canton}, {province}");
            };
            JsonValue::String(whatsapp_share_url(
                &entry.province,
                &entry.canton,
                &entry.district,
                &entry.postal_code,
            ))
        }
    };
    Ok(value)
}

/// Write the JSON to `--to` or to `out`. Nothing else goes to `out`, so stdout
/// stays parseable; status lines use the stderr logger.
fn output_result(value: &JsonValue, args: &QueryArgs, out: &mut impl Write) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(ref output_path) = args.to {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        writeln!(out, "{}", formatted)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_dataset;

    fn query(q: Query) -> JsonValue {
        execute(&q, &test_dataset()).unwrap()
    }

    #[test]
    fn test_query_provinces() {
        assert_eq!(
            query(Query::Provinces),
            json!(["Alajuela", "Limón", "San José"])
        );
    }

    #[test]
    fn test_query_districts_by_canton_sorted() {
        let value = query(Query::Districts {
            province: "San José".into(),
            canton: Some("Escazú".into()),
        });
        let names: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["district"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Escazú", "San Rafael"]);
    }

    #[test]
    fn test_query_find_missing_is_null() {
        let value = query(Query::Find {
            province: "Cartago".into(),
            canton: "Cartago".into(),
            district: "Oriental".into(),
        });
        assert!(value.is_null());
    }

    #[test]
    fn test_query_find_entry_fields() {
        let value = query(Query::Find {
            province: "San José".into(),
            canton: "San José".into(),
            district: "Carmen".into(),
        });
        assert_eq!(value["postal_code"], "10101");
    }

    #[test]
    fn test_query_url_levels() {
        let url = |canton: Option<&str>, district: Option<&str>| {
            query(Query::Url {
                province: "San José".into(),
                canton: canton.map(Into::into),
                district: district.map(Into::into),
            })
        };
        assert_eq!(url(None, None), "/codigo-postal/san-jose/");
        assert_eq!(url(Some("Escazú"), None), "/codigo-postal/san-jose/escazu/");
        assert_eq!(
            url(Some("Escazú"), Some("San Rafael")),
            "/codigo-postal/san-jose/escazu/san-rafael/"
        );
    }

    #[test]
    fn test_query_share() {
        let value = query(Query::Share {
            province: "San José".into(),
            canton: "San José".into(),
            district: "Carmen".into(),
        });
        let url = value.as_str().unwrap();
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.ends_with("10101"));
    }

    #[test]
    fn test_query_share_missing_district_errors() {
        let result = execute(
            &Query::Share {
                province: "Limón".into(),
                canton: "Pococí".into(),
                district: "Cariari".into(),
            },
            &test_dataset(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let args = QueryArgs {
            query: Query::Provinces,
            pretty: false,
            to: Some(path.clone()),
        };
        let mut out = Vec::new();
        output_result(&json!(["Limón"]), &args, &mut out).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[\"Limón\"]\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_is_only_json() {
        let data = test_dataset();
        let args = QueryArgs {
            query: Query::Provinces,
            pretty: true,
            to: None,
        };
        let value = execute(&args.query, &data).unwrap();
        let mut out = Vec::new();
        output_result(&value, &args, &mut out).unwrap();

        let parsed: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, ["Alajuela", "Limón", "San José"]);
    }
}

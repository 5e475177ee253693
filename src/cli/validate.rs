//! Dataset validation command.

use std::collections::BTreeMap;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::args::ValidateArgs;
use crate::data::PostalCodes;
use crate::data::validate::{DatasetIssue, check_dataset};
use crate::log;
use crate::utils::{plural_count, plural_s};

/// Check the dataset and print a report.
///
/// Fails when issues are found unless `--warn-only` is set.
pub fn validate_dataset(args: &ValidateArgs, data: &PostalCodes) -> Result<()> {
    log!("validate"; "checking {}", plural_count(data.len(), "record"));

    let issues = check_dataset(data);
    if issues.is_empty() {
        log!("validate"; "{}", "all checks passed".green());
        return Ok(());
    }

    print_report(data, &issues);

    let records = group_by_record(&issues).len();
    let summary = format!(
        "{} in {} record{}",
        plural_count(issues.len(), "issue"),
        records,
        plural_s(records)
    );

    if args.warn_only {
        log!("warning"; "{}", summary);
        Ok(())
    } else {
        anyhow::bail!("validation failed: {}", summary)
    }
}

fn group_by_record(issues: &[DatasetIssue]) -> BTreeMap<usize, Vec<&DatasetIssue>> {
    let mut grouped: BTreeMap<usize, Vec<&DatasetIssue>> = BTreeMap::new();
    for issue in issues {
        grouped.entry(issue.index).or_default().push(issue);
    }
    grouped
}

fn print_report(data: &PostalCodes, issues: &[DatasetIssue]) {
    eprintln!();
    for (index, record_issues) in group_by_record(issues) {
        let label = data
            .entries()
            .get(index)
            .map(|e| format!("#{index} {} / {} / {}", e.province, e.canton, e.district))
            .unwrap_or_else(|| format!("#{index}"));
        eprintln!("{}{}{}", "[".dimmed(), label.cyan(), "]".dimmed());
        for issue in record_issues {
            eprintln!("{} {}", "→".red(), issue);
        }
    }
    eprintln!();
}

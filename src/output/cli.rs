use crate::model::{CatalogKind, DetectionResult};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ManagerRow {
    #[tabled(rename = "Catalog")]
    catalog: String,
    #[tabled(rename = "Package Manager")]
    name: String,
}

#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Directory")]
    directory: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

pub fn print_cli_table(result: &DetectionResult) -> Result<()> {
    println!();
    println!("{}", format_cli_table(result));
    Ok(())
}

pub fn format_cli_table(result: &DetectionResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Scan completed at: {}\n\n",
        result.scan_time.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if result.is_empty() {
        out.push_str("No package managers found.\n");
    } else {
        out.push_str(&format!("Found {} package managers:\n\n", result.total()));

        let rows: Vec<ManagerRow> = [CatalogKind::Official, CatalogKind::Alternative]
            .into_iter()
            .flat_map(move |kind| {
                result.get(kind).iter().map(move |name| ManagerRow {
                    catalog: kind.display_name().to_string(),
                    name: name.clone(),
                })
            })
            .collect();

        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    if !result.failures.is_empty() {
        out.push_str(&format!(
            "\nSkipped {} unreadable directories:\n\n",
            result.failures.len()
        ));

        let rows: Vec<FailureRow> = result
            .failures
            .iter()
            .map(|f| FailureRow {
                directory: display_directory(&f.directory.display().to_string()),
                reason: truncate(&f.reason, 60),
            })
            .collect();

        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&summary(result));
    out
}

fn summary(result: &DetectionResult) -> String {
    format!(
        "Summary: {} official, {} alternative ({} of {} directories readable)",
        result.official.len(),
        result.alternative.len(),
        result.directories_scanned.saturating_sub(result.failures.len()),
        result.directories_scanned
    )
}

fn display_directory(directory: &str) -> String {
    if directory.is_empty() {
        "(empty entry)".to_string()
    } else {
        truncate(directory, 50)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

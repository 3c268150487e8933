// Console report printed after a run
use crate::model::RunSummary;
use crate::utils::truncate_chars;
use std::path::Path;

const RULE_WIDTH: usize = 80;
const TITLE_WIDTH: usize = 60;

pub fn reading(input: &Path) -> String {
    format!("Reading {}...", input.display())
}

pub fn missing_input(input: &Path) -> String {
    format!("Error: {} not found!", input.display())
}

/// First console line of a run. A missing input yields only the error line.
pub fn opening(input: &Path) -> Result<String, String> {
    if input.exists() {
        Ok(reading(input))
    } else {
        Err(missing_input(input))
    }
}

/// Renders the summary, a sample of `title -> label` pairs and the import
/// instructions.
pub fn render(summary: &RunSummary, output: &Path, sample_size: usize) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = format!(
        "Processed {} unique products\n\n[SUCCESS] Created {}\n\nSample output:\n{}\n",
        summary.records.len(),
        output.display(),
        rule
    );
    for record in summary.records.iter().take(sample_size) {
        let title = truncate_chars(&record.title, TITLE_WIDTH);
        out.push_str(&format!("{:<width$} -> {}\n", title, record.label, width = TITLE_WIDTH));
    }
    out.push_str(&rule);
    out.push('\n');

    if !summary.needs_review.is_empty() {
        out.push_str(&format!(
            "\n[REVIEW] {} products got an empty label:\n",
            summary.needs_review.len()
        ));
        for handle in &summary.needs_review {
            out.push_str(&format!("  - {}\n", handle));
        }
    }

    out.push_str(&format!(
        "\n[NEXT STEPS]\n\
         1. Review {}\n\
         2. Upload to Shopify via Matrixify app\n\
         3. Select 'Update' mode (not 'Replace')\n\
         4. Map columns and import",
        output.display()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRecord;

    fn record(n: usize, title: &str, label: &str) -> ProductRecord {
        ProductRecord {
            handle: format!("h{n}"),
            title: title.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn sample_is_capped_and_padded() {
        let summary = RunSummary {
            records: (0..12).map(|n| record(n, "Chef Knife", "Chef")).collect(),
            ..Default::default()
        };
        let text = render(&summary, Path::new("out.csv"), 10);

        assert!(text.starts_with("Processed 12 unique products"));
        let sample_lines: Vec<_> = text.lines().filter(|l| l.contains(" -> ")).collect();
        assert_eq!(sample_lines.len(), 10);
        assert_eq!(sample_lines[0], format!("{:<60} -> Chef", "Chef Knife"));
        assert!(text.ends_with("4. Map columns and import"));
    }

    #[test]
    fn long_titles_are_cut_to_sixty_chars() {
        let long = "x".repeat(75);
        let summary = RunSummary {
            records: vec![record(0, &long, "X")],
            ..Default::default()
        };
        let text = render(&summary, Path::new("out.csv"), 10);
        assert!(text.contains(&format!("{} -> X", "x".repeat(60))));
    }

    #[test]
    fn review_section_only_when_needed() {
        let mut summary = RunSummary {
            records: vec![record(0, "Chef Knife", "Chef")],
            ..Default::default()
        };
        assert!(!render(&summary, Path::new("o.csv"), 10).contains("[REVIEW]"));

        summary.needs_review.push("odd".into());
        let text = render(&summary, Path::new("o.csv"), 10);
        assert!(text.contains("[REVIEW] 1 products got an empty label:"));
        assert!(text.contains("  - odd"));
    }

    #[test]
    fn opening_line_depends_on_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("current_products.csv");

        let missing = opening(&input).unwrap_err();
        assert!(missing.starts_with("Error: "));
        assert!(!missing.contains("Reading"));

        std::fs::write(&input, "Handle,Title\n").unwrap();
        let found = opening(&input).unwrap();
        assert_eq!(found, format!("Reading {}...", input.display()));
    }

    #[test]
    fn missing_input_message() {
        assert_eq!(
            missing_input(Path::new("current_products.csv")),
            "Error: current_products.csv not found!"
        );
    }
}

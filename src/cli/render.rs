use crate::application::{ProfileSummary, Renderer, EMPTY_PLACEHOLDER};
use crate::domain::{format_display, format_signed, format_total, Operation};

/// Renders a profile's operations as a plain-text table.
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, profile: &str, operations: &[Operation]) {
        self.output.push_str(&format_operations(profile, operations));
    }
}

pub fn format_operations(profile: &str, operations: &[Operation]) -> String {
    let mut out = format!("Profile: {}\n", profile);

    if operations.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    out.push_str(&format!(
        "{:<22} {:>12} {:<15} COMMENT\n",
        "TIME", "AMOUNT", "CATEGORY"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for op in operations {
        out.push_str(&format!(
            "{:<22} {:>12} {:<15} {}\n",
            format_display(op.time),
            format_signed(op.amount, op.is_income()),
            truncate(&op.category, 15),
            truncate(&op.comment, 30)
        ));
    }
    out
}

pub fn format_summary(summary: &ProfileSummary) -> String {
    let mut out = format!("Summary for {} ({} operations)\n", summary.profile, summary.count);
    out.push_str(&format!("  Income:  {:>12}\n", format_total(summary.total_income)));
    out.push_str(&format!("  Expense: {:>12}\n", format_total(summary.total_expense)));
    out.push_str(&format!("  Net:     {:>12}\n", format_total(summary.net)));

    if !summary.categories.is_empty() {
        out.push_str(&format!("\n{:<20} {:>6} {:>12}\n", "CATEGORY", "COUNT", "TOTAL"));
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for category in &summary.categories {
            let total = if category.is_income {
                category.total
            } else {
                -category.total
            };
            out.push_str(&format!(
                "{:<20} {:>6} {:>12}\n",
                truncate(&category.category, 20),
                category.count,
                format_total(total)
            ));
        }
    }
    out
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

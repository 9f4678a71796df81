use serde::{Deserialize, Serialize};

use crate::errors::ChartError;
use crate::ledger::Category;

const CHART_TITLE: &str = "Percentage spent by category";
/// Width of an axis label plus its `|` separator (`"100|"`).
const AXIS_WIDTH: usize = 4;
/// Width of one category column: `" o "`, or a label char with padding.
const CELL_WIDTH: usize = 3;

/// Read-only spending summary for one category. The chart layout engine
/// consumes these instead of full ledgers, so it can be driven with
/// synthetic data in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub name: String,
    pub spent: f64,
}

impl CategorySpend {
    pub fn new(name: impl Into<String>, spent: f64) -> Self {
        Self {
            name: name.into(),
            spent,
        }
    }
}

impl From<&Category> for CategorySpend {
    fn from(category: &Category) -> Self {
        Self::new(category.name.clone(), category.spent())
    }
}

/// Charts each category's share of total spending, left to right in input
/// order. Convenience wrapper over [`render_spend_chart`].
pub fn create_spend_chart(categories: &[Category]) -> Result<String, ChartError> {
    let summaries: Vec<CategorySpend> = categories.iter().map(CategorySpend::from).collect();
    render_spend_chart(&summaries)
}

/// Draws the vertical ASCII bar chart: a title row, 11 axis rows from
/// `100|` down to `  0|`, a dashed rule, and vertical category-name labels.
///
/// Each category's share is bucketed as `floor((spent / total) * 10)`,
/// giving a bar of `o` marks from the bottom row up to its level. Every row
/// except the title carries a trailing space, and the final label row ends
/// without a newline; both reproduce the historical output exactly.
///
/// An empty slice or zero total spending is rejected rather than dividing
/// by zero.
pub fn render_spend_chart(categories: &[CategorySpend]) -> Result<String, ChartError> {
    if categories.is_empty() {
        return Err(ChartError::NoCategories);
    }
    let total: f64 = categories.iter().map(|c| c.spent).sum();
    if total <= 0.0 {
        return Err(ChartError::NothingSpent);
    }

    let mut rows: Vec<String> = (0..=10)
        .rev()
        .map(|step| format!("{:>3}|", step * 10))
        .collect();
    for category in categories {
        let level = ((category.spent / total) * 10.0).floor() as usize;
        // rows run 100 down to 0; fill each bar bottom-up.
        for (step, row) in rows.iter_mut().rev().enumerate() {
            if level >= step {
                row.push_str(" o ");
            } else {
                row.push_str("   ");
            }
        }
    }

    let row_width = AXIS_WIDTH + CELL_WIDTH * categories.len();

    let mut chart = String::from(CHART_TITLE);
    chart.push('\n');
    for row in &rows {
        chart.push_str(row);
        chart.push_str(" \n");
    }
    chart.push_str(&format!(
        "    {}\n",
        "-".repeat(row_width - AXIS_WIDTH + 1)
    ));

    let names: Vec<Vec<char>> = categories.iter().map(|c| c.name.chars().collect()).collect();
    let max_len = names.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..max_len {
        let mut row = String::from("    ");
        for name in &names {
            match name.get(i) {
                Some(ch) => {
                    row.push(' ');
                    row.push(*ch);
                    row.push(' ');
                }
                None => row.push_str("   "),
            }
        }
        chart.push_str(&row);
        chart.push(' ');
        if i + 1 < max_len {
            chart.push('\n');
        }
    }

    Ok(chart)
}

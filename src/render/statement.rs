use std::fmt;

use crate::ledger::Category;

/// Total width of every statement line.
const STATEMENT_WIDTH: usize = 30;
/// Width of the left-aligned description column.
const DESCRIPTION_WIDTH: usize = 23;
/// Width of the right-aligned amount column.
const AMOUNT_WIDTH: usize = 7;

/// Renders a category as a fixed-width statement block: a starred heading,
/// one row per transaction in insertion order, and a total line. Lines are
/// newline-joined with no trailing newline. Widths count `char`s.
pub fn render_statement(category: &Category) -> String {
    let mut lines = Vec::with_capacity(category.transactions().len() + 2);
    lines.push(render_heading(&category.name));
    for transaction in category.transactions() {
        lines.push(render_row(&transaction.description, transaction.amount));
    }
    lines.push(format!("Total: {:.2}", category.balance()));
    lines.join("\n")
}

/// Centers the name in a 30-column field of `*` fill. Names of 30 chars or
/// more are cut to the first 30 with no padding. When the remaining fill is
/// odd, the extra star goes on the right.
fn render_heading(name: &str) -> String {
    let len = name.chars().count();
    if len >= STATEMENT_WIDTH {
        return name.chars().take(STATEMENT_WIDTH).collect();
    }
    let remaining = STATEMENT_WIDTH - len;
    let left = remaining / 2;
    let right = remaining - left;
    format!("{}{}{}", "*".repeat(left), name, "*".repeat(right))
}

/// One 30-column row: the description cut or padded to 23 chars, then the
/// amount formatted to two decimals and left-padded to 7. Amounts whose
/// rendering exceeds 7 chars overflow the column untouched.
fn render_row(description: &str, amount: f64) -> String {
    let description: String = description.chars().take(DESCRIPTION_WIDTH).collect();
    format!(
        "{:<desc$}{:>amt$}",
        description,
        format!("{:.2}", amount),
        desc = DESCRIPTION_WIDTH,
        amt = AMOUNT_WIDTH
    )
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_statement(self))
    }
}

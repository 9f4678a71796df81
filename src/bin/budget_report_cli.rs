use std::process::ExitCode;

use budget_report::ledger::{transfer, Category};
use budget_report::render::{create_spend_chart, render_statement};

/// Prints the demo dataset as statements plus the aggregate spend chart.
fn main() -> ExitCode {
    budget_report::init();

    let mut business = Category::new("Business");
    let mut food = Category::new("Food");
    let mut entertainment = Category::new("Entertainment");

    business.deposit(900.0, "deposit");
    food.deposit(900.0, "deposit");
    entertainment.deposit(900.0, "deposit");
    business.withdraw(10.99, "");
    food.withdraw(105.55, "");
    entertainment.withdraw(33.40, "");
    transfer(50.0, &mut food, &mut entertainment);

    let categories = [business, food, entertainment];
    for category in &categories {
        println!("{}\n", render_statement(category));
    }

    match create_spend_chart(&categories) {
        Ok(chart) => {
            println!("{chart}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("spend chart unavailable: {err}");
            ExitCode::FAILURE
        }
    }
}

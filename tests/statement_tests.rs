use budget_report::ledger::Category;
use budget_report::render::render_statement;

fn heading_of(category: &Category) -> String {
    render_statement(category)
        .lines()
        .next()
        .unwrap()
        .to_string()
}

#[test]
fn heading_is_centered_with_extra_star_on_the_right() {
    let even = Category::new("Food");
    assert_eq!(heading_of(&even), "*************Food*************");

    // 13-char name leaves 17 stars: 8 left, 9 right
    let odd = Category::new("Entertainment");
    assert_eq!(heading_of(&odd), "********Entertainment*********");
}

#[test]
fn heading_is_always_thirty_chars_for_short_names() {
    for name in ["", "A", "Food", "Entertainment"] {
        assert_eq!(heading_of(&Category::new(name)).chars().count(), 30);
    }
}

#[test]
fn heading_longer_than_thirty_chars_is_truncated() {
    let long = Category::new("A very long category name that keeps going");
    assert_eq!(heading_of(&long), "A very long category name that");
}

#[test]
fn rows_truncate_descriptions_and_right_align_amounts() {
    let mut food = Category::new("Food");
    food.deposit(900.0, "deposit");
    assert!(food.withdraw(45.59, "milk, cereal, eggs, bacon, bread"));

    let statement = render_statement(&food);
    let lines: Vec<&str> = statement.lines().collect();
    assert_eq!(lines[1], "deposit                 900.00");
    assert_eq!(lines[2], "milk, cereal, eggs, bac -45.59");
    assert_eq!(lines[3], "Total: 854.41");
}

#[test]
fn oversized_amounts_overflow_their_column() {
    let mut venture = Category::new("Venture");
    venture.deposit(12345678.9, "seed");

    let statement = render_statement(&venture);
    let row = statement.lines().nth(1).unwrap();
    assert_eq!(row, "seed                   12345678.90");
    assert_eq!(row.chars().count(), 34);
}

#[test]
fn renders_full_statement_block() {
    let mut food = Category::new("Food");
    food.deposit(1000.0, "initial deposit");
    assert!(food.withdraw(10.15, "groceries"));
    assert!(food.withdraw(15.89, "restaurant and more food"));

    let expected = concat!(
        "*************Food*************\n",
        "initial deposit        1000.00\n",
        "groceries               -10.15\n",
        "restaurant and more foo -15.89\n",
        "Total: 973.96"
    );
    assert_eq!(render_statement(&food), expected);
}

#[test]
fn statement_matches_ledger_walkthrough() {
    let mut food = Category::new("Food");
    food.deposit(900.0, "deposit");
    assert!(food.withdraw(105.55, ""));

    let expected = concat!(
        "*************Food*************\n",
        "deposit                 900.00\n",
        "                       -105.55\n",
        "Total: 794.45"
    );
    assert_eq!(render_statement(&food), expected);
    // Display goes through the same renderer
    assert_eq!(food.to_string(), expected);
}

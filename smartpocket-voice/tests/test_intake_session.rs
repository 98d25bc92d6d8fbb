use chrono::NaiveDate;
use smartpocket_core::{Category, Direction, GoalNameLookup, SavingsGoal, Summary};
use smartpocket_voice::{DepositOutcome, Interpretation, interpret};

const MIN_CONFIDENCE: f64 = 0.7;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
}

/// A week of utterances run through the full intake path: deposits update
/// goals, confident transactions are committed, the rest are held back.
#[test]
fn test_week_of_utterances() {
    let mut goals = vec![
        SavingsGoal::new("g1", "New Phone", 15000.0),
        SavingsGoal::new("g2", "Bike", 6000.0),
    ];

    let utterances = [
        (1, "I received ₹500 as allowance"),
        (2, "I spent ₹100 on lunch"),
        (2, "save 200 to New Phone"),
        (3, "Paid ₹50 for bus fare"),
        (4, "save 100 to Phone"),
        (5, "pizza"),
        (6, "got 1000 rupees as a birthday gift"),
        (6, "put 300 for bike"),
    ];

    let mut ledger = Vec::new();
    let mut not_found = Vec::new();
    let mut held_back = Vec::new();

    for (i, (d, text)) in utterances.iter().enumerate() {
        let lookup = GoalNameLookup::from(goals.as_slice());
        match interpret(text, &lookup) {
            Interpretation::Deposit(DepositOutcome::Resolved { amount, goal_title }) => {
                let goal = goals.iter_mut().find(|g| g.title == goal_title).unwrap();
                goal.deposit(amount as f64);
            }
            Interpretation::Deposit(DepositOutcome::GoalNotFound { attempted_title, .. }) => {
                not_found.push(attempted_title);
            }
            Interpretation::Deposit(DepositOutcome::NoMatch) => unreachable!(),
            Interpretation::Transaction(p) if p.is_committable(MIN_CONFIDENCE) => {
                ledger.push(p.into_transaction(format!("tx-{i}"), day(*d)));
            }
            Interpretation::Transaction(p) => held_back.push(p),
        }
    }

    assert_eq!(goals[0].saved_amount, 200.0);
    assert_eq!(goals[1].saved_amount, 300.0);
    assert_eq!(goals[1].progress_percent(), 5);
    assert_eq!(not_found, vec!["Phone".to_string()]);

    assert_eq!(held_back.len(), 1);
    assert_eq!(held_back[0].source_text, "pizza");

    assert_eq!(ledger.len(), 4);
    let gift = ledger.last().unwrap();
    assert_eq!(gift.direction, Direction::Income);
    assert_eq!(gift.amount, 1000.0);

    let summary = Summary::from_transactions(&ledger, 3);
    assert_eq!(summary.total_income, 1500.0);
    assert_eq!(summary.total_expenses, 150.0);
    assert_eq!(summary.balance, 1350.0);
    assert_eq!(
        summary.expense_breakdown,
        vec![(Category::Food, 100.0), (Category::Transport, 50.0)]
    );
    assert_eq!(summary.recent[0].date, day(6));
}

#[test]
fn test_interpretation_json_shape() {
    let goals = GoalNameLookup::from_titles(["Bike"]);

    let deposit = serde_json::to_value(interpret("save 20 to bike", &goals)).unwrap();
    assert_eq!(deposit["kind"], "deposit");
    assert_eq!(deposit["result"]["outcome"], "resolved");
    assert_eq!(deposit["result"]["goal_title"], "Bike");

    let txn = serde_json::to_value(interpret("I spent ₹100 on lunch", &goals)).unwrap();
    assert_eq!(txn["kind"], "transaction");
    assert_eq!(txn["result"]["direction"], "expense");
    assert_eq!(txn["result"]["category"], "food");
    assert_eq!(txn["result"]["confidence"], 1.0);
}

//! Persisting an interpreted phrase: the `log` command minus the terminal.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use smartpocket_core::{SavingsGoal, Transaction};
use smartpocket_voice::{DepositOutcome, Interpretation};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::state::{GoalStore, Ledger};

#[derive(Debug, Clone, PartialEq)]
pub enum Committed {
    Deposited(SavingsGoal),
    /// Deposit command for a goal that does not exist; nothing written.
    GoalNotFound,
    Saved(Transaction),
    /// The user declined the confirmation prompt.
    Discarded,
}

/// Write `interpretation` to the store under `home`.
///
/// `confirm` is asked once before anything is written. A transaction that
/// fails the confidence gate is refused before asking.
pub async fn commit<F>(
    home: &Path,
    cfg: &Config,
    interpretation: Interpretation,
    id: String,
    date: NaiveDate,
    confirm: F,
) -> Result<Committed>
where
    F: FnOnce(&str) -> Result<bool>,
{
    match interpretation {
        Interpretation::Deposit(DepositOutcome::Resolved { amount, goal_title }) => {
            if !confirm("Save this deposit?")? {
                return Ok(Committed::Discarded);
            }
            let goal = GoalStore::in_dir(home)
                .deposit(&goal_title, amount as f64)
                .await?;
            info!(goal = %goal.title, amount, "deposit saved");
            Ok(Committed::Deposited(goal))
        }

        Interpretation::Deposit(_) => Ok(Committed::GoalNotFound),

        Interpretation::Transaction(parsed) => {
            if !parsed.is_committable(cfg.parser.min_confidence) {
                bail!(
                    "not saved: needs an amount and at least {:.0}% confidence",
                    cfg.parser.min_confidence * 100.0
                );
            }
            if !confirm("Save this transaction?")? {
                return Ok(Committed::Discarded);
            }
            let txn = parsed.into_transaction(id, date);
            Ledger::in_dir(home).append(txn.clone()).await?;
            info!(id = %txn.id, "transaction saved");
            Ok(Committed::Saved(txn))
        }
    }
}

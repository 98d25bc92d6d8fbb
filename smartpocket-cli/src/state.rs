//! File-backed ledger and goal store under the SmartPocket home directory.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use smartpocket_core::{GoalNameLookup, SavingsGoal, Transaction, goal_key};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn smartpocket_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SMARTPOCKET_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".smartpocket"))
}

pub fn ensure_smartpocket_home() -> Result<PathBuf> {
    let dir = smartpocket_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

async fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match tokio::fs::read_to_string(path).await {
        Ok(s) => serde_json::from_str(&s).with_context(|| format!("parse {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("write {}", path.display()))
}

/// Append-only list of confirmed transactions (`transactions.json`)
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("transactions.json"),
        }
    }

    pub async fn load(&self) -> Result<Vec<Transaction>> {
        read_json_or_default(&self.path).await
    }

    pub async fn append(&self, txn: Transaction) -> Result<()> {
        let mut txns = self.load().await?;
        debug!(id = %txn.id, amount = txn.amount, "append transaction");
        txns.push(txn);
        write_json(&self.path, &txns).await
    }
}

/// The user's savings goals (`goals.json`)
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("goals.json"),
        }
    }

    pub async fn load(&self) -> Result<Vec<SavingsGoal>> {
        read_json_or_default(&self.path).await
    }

    /// Title snapshot handed to the deposit command parser.
    pub async fn list_goals(&self) -> Result<GoalNameLookup> {
        let goals = self.load().await?;
        Ok(GoalNameLookup::from(goals.as_slice()))
    }

    pub async fn add(&self, goal: SavingsGoal) -> Result<()> {
        let mut goals = self.load().await?;
        let key = goal_key(&goal.title);
        if goals.iter().any(|g| goal_key(&g.title) == key) {
            bail!("a goal named '{}' already exists", goal.title.trim());
        }
        goals.push(goal);
        write_json(&self.path, &goals).await
    }

    /// Add `amount` to the goal with exactly this title; returns the updated goal.
    pub async fn deposit(&self, title: &str, amount: f64) -> Result<SavingsGoal> {
        let mut goals = self.load().await?;
        let goal = goals
            .iter_mut()
            .find(|g| g.title == title)
            .with_context(|| format!("goal '{}' disappeared from {}", title, self.path.display()))?;
        goal.deposit(amount);
        let updated = goal.clone();
        debug!(goal = %updated.title, saved = updated.saved_amount, "deposit");
        write_json(&self.path, &goals).await?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use smartpocket_core::{Category, Direction};

    #[tokio::test]
    async fn test_empty_dir_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Ledger::in_dir(dir.path()).load().await.unwrap().is_empty());
        assert!(GoalStore::in_dir(dir.path()).list_goals().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ledger_append_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::in_dir(dir.path());
        let date = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        ledger
            .append(Transaction::new("t1", date, 80.0, Direction::Expense, Category::Food, "snacks"))
            .await
            .unwrap();
        ledger
            .append(Transaction::new("t2", date, 500.0, Direction::Income, Category::Other, "gift"))
            .await
            .unwrap();

        let txns = ledger.load().await.unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].id, "t1");
        assert_eq!(txns[1].direction, Direction::Income);
    }

    #[tokio::test]
    async fn test_goal_add_and_deposit() {
        let dir = tempfile::tempdir().unwrap();
        let store = GoalStore::in_dir(dir.path());
        store.add(SavingsGoal::new("g1", "New Phone", 1000.0)).await.unwrap();

        let lookup = store.list_goals().await.unwrap();
        assert_eq!(lookup.find("new phone").unwrap().title, "New Phone");

        let updated = store.deposit("New Phone", 250.0).await.unwrap();
        assert_eq!(updated.saved_amount, 250.0);
        assert_eq!(updated.progress_percent(), 25);
        assert_eq!(store.load().await.unwrap()[0].saved_amount, 250.0);
    }

    #[tokio::test]
    async fn test_duplicate_goal_title_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = GoalStore::in_dir(dir.path());
        store.add(SavingsGoal::new("g1", "Bike", 6000.0)).await.unwrap();
        assert!(store.add(SavingsGoal::new("g2", " bike ", 10.0)).await.is_err());
    }

    #[tokio::test]
    async fn test_corrupt_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("goals.json"), "{not json").unwrap();
        let err = GoalStore::in_dir(dir.path()).load().await.unwrap_err();
        assert!(format!("{err:#}").contains("goals.json"));
    }
}

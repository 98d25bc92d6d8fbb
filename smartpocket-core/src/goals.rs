//! Savings goals and the read-only title lookup used by command parsing

use serde::{Deserialize, Serialize};

/// A named savings target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    #[serde(default)]
    pub saved_amount: f64,
    #[serde(default = "default_goal_glyph")]
    pub glyph: String,
}

fn default_goal_glyph() -> String {
    "🎯".to_string()
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(id: impl Into<String>, title: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            target_amount,
            saved_amount: 0.0,
            glyph: default_goal_glyph(),
        }
    }

    /// Whole-number progress, capped at 100
    pub fn progress_percent(&self) -> u32 {
        if self.target_amount <= 0.0 {
            return 0;
        }
        let pct = (self.saved_amount / self.target_amount * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    }

    pub fn deposit(&mut self, amount: f64) {
        self.saved_amount += amount;
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.saved_amount).max(0.0)
    }
}

/// Normalize a goal title into its lookup key.
pub fn goal_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// One entry of a [`GoalNameLookup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalName {
    pub title: String,
    pub key: String,
}

impl GoalName {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let key = goal_key(&title);
        Self { title, key }
    }
}

/// Ordered snapshot of a user's goal titles.
///
/// Lookups are exact on the normalized key, never substring; the first
/// entry with a matching key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalNameLookup {
    entries: Vec<GoalName>,
}

impl GoalNameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: titles.into_iter().map(GoalName::new).collect(),
        }
    }

    pub fn push(&mut self, title: impl Into<String>) {
        self.entries.push(GoalName::new(title));
    }

    /// Find the goal whose key equals the normalized `title`.
    pub fn find(&self, title: &str) -> Option<&GoalName> {
        let key = goal_key(title);
        self.entries.iter().find(|g| g.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoalName> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&[SavingsGoal]> for GoalNameLookup {
    fn from(goals: &[SavingsGoal]) -> Self {
        Self::from_titles(goals.iter().map(|g| g.title.clone()))
    }
}

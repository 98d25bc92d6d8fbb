//! Finance record types for logged transactions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A confirmed income or expense entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Unique identifier for this record
    pub id: String,
    /// Always non-negative; `direction` carries the sign
    pub amount: f64,
    pub category: Category,
    /// Free-form note, or the utterance the entry was parsed from
    pub description: String,
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Display glyph copied from the category at creation time
    pub glyph: String,
}

/// Spending categories, in classifier priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Entertainment,
    Transport,
    Shopping,
    Education,
    Health,
    Other,
}

impl Category {
    /// Every category in enumeration order; `Other` is last.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Entertainment,
        Category::Transport,
        Category::Shopping,
        Category::Education,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Entertainment => "entertainment",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Education => "education",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    /// Display glyph shown next to the category
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Food => "🍕",
            Category::Entertainment => "🎮",
            Category::Transport => "🚌",
            Category::Shopping => "🛍️",
            Category::Education => "📚",
            Category::Health => "🏥",
            Category::Other => "💰",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category or direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key: {}", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Category {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or(UnknownKey(key))
    }
}

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Direction::Income),
            "expense" => Ok(Direction::Expense),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

impl Transaction {
    /// Create a new Transaction; the glyph follows the category.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        direction: Direction,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount: amount.abs(),
            category,
            description: description.into(),
            direction,
            date,
            glyph: category.glyph().to_string(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.direction == Direction::Income
    }

    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Expense
    }

    /// Positive for income, negative for expenses
    pub fn signed_amount(&self) -> f64 {
        match self.direction {
            Direction::Income => self.amount,
            Direction::Expense => -self.amount,
        }
    }
}

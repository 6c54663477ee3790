//! Demo scripts.
//!
//! A script is a list of [`Step`]s. The built-in script is the stock demo;
//! other scripts are read from JSON files.

use std::path::{Path, PathBuf};

use giftstore_core::{Gift, GiftUpdate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Script loading errors.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Io {
        /// Script path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The script file is not a valid list of steps.
    #[error("invalid script {path}: {source}")]
    Parse {
        /// Script path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// One step of a demo script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Print a section header.
    Section {
        /// Header text.
        title: String,
    },
    /// Print every gift.
    ShowAll,
    /// Print the running total.
    ShowTotal,
    /// Append a gift.
    Add {
        /// The gift to append.
        gift: Gift,
    },
    /// Overwrite the gift at a position.
    Update {
        /// Catalog position.
        position: usize,
        /// Replacement values.
        #[serde(flatten)]
        update: GiftUpdate,
    },
    /// Apply a quantity delta at a position.
    Adjust {
        /// Catalog position.
        position: usize,
        /// Signed delta.
        delta: i64,
    },
    /// Look up a gift by name.
    Find {
        /// Exact name.
        name: String,
    },
    /// Sort gifts by name.
    Sort,
    /// Print the running total against the actual sum.
    CheckDrift,
}

impl Step {
    /// Create a section step.
    pub fn section(title: impl Into<String>) -> Self {
        Step::Section {
            title: title.into(),
        }
    }

    /// Create an update step.
    pub fn update(
        position: usize,
        name: impl Into<String>,
        quantity: u64,
        price: f64,
        extra: impl Into<String>,
    ) -> Self {
        Step::Update {
            position,
            update: GiftUpdate::new(name, quantity, price, extra),
        }
    }

    /// Create a lookup step.
    pub fn find(name: impl Into<String>) -> Self {
        Step::Find { name: name.into() }
    }
}

/// The gifts the demo starts with.
pub fn sample_gifts() -> Vec<Gift> {
    vec![
        Gift::toy("Мишка", 10, 500.0, "Мягкая игрушка"),
        Gift::toy("Конструктор", 15, 1200.0, "Развивающая игрушка"),
        Gift::toy("Кукла", 8, 800.0, "Кукла"),
        Gift::gift_set("Детский набор", 5, 1500.0, "Шоколад, игрушка, книга"),
        Gift::gift_set("Сладкий набор", 7, 1000.0, "Конфеты, мягкая игрушка"),
    ]
}

/// The stock demo sequence, run against [`sample_gifts`].
pub fn builtin() -> Vec<Step> {
    vec![
        Step::section("Первоначальный список подарков"),
        Step::ShowAll,
        Step::ShowTotal,
        Step::update(2, "Робот", 12, 1500.0, "Электронная игрушка"),
        Step::Adjust {
            position: 0,
            delta: 5,
        },
        Step::Adjust {
            position: 2,
            delta: 3,
        },
        Step::section("Обновленный список подарков"),
        Step::ShowAll,
        Step::ShowTotal,
        Step::Adjust {
            position: 4,
            delta: 2,
        },
        Step::section("Финальный список подарков"),
        Step::ShowAll,
        Step::ShowTotal,
        Step::section("Поиск подарка по имени"),
        Step::find("Чика"),
        Step::find("Робот"),
        Step::section("Сортировка подарков по имени"),
        Step::Sort,
        Step::ShowAll,
    ]
}

/// Parse a JSON list of steps.
pub fn parse(source: &str) -> Result<Vec<Step>, serde_json::Error> {
    serde_json::from_str(source)
}

/// Read a JSON list of steps from a file.
pub fn load(path: &Path) -> Result<Vec<Step>, ScriptError> {
    let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&source).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

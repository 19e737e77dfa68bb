//! Task status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum TaskStatus {
    /// Not started yet.
    #[serde(rename = "to do")]
    #[sqlx(rename = "to do")]
    ToDo,
    /// Actively being worked on.
    #[serde(rename = "in progress")]
    #[sqlx(rename = "in progress")]
    InProgress,
    /// Completed.
    #[serde(rename = "done")]
    #[sqlx(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "to do",
            Self::InProgress => "in progress",
            Self::Done => "done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::ToDo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = taskhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to do" => Ok(Self::ToDo),
            "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(taskhub_core::AppError::validation(format!(
                "Invalid task status: '{s}'. Expected one of: to do, in progress, done"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(TaskStatus::ToDo.as_str(), "to do");
        assert_eq!("in progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!("archived".parse::<TaskStatus>().is_err());
    }
}

//! Netted pool results and how they read at the table.

use serde::{Deserialize, Serialize};

/// A pool's totals after light and dark symbols cancel.
///
/// Success and failure share one signed total, as do advantage and threat.
/// Triumph and despair never cancel anything and are only ever added up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPoolResult {
    /// Successes minus failures.
    pub net_success: i64,
    /// Advantages minus threats.
    pub net_advantage: i64,
    /// Triumph symbols rolled.
    pub triumph: u32,
    /// Despair symbols rolled.
    pub despair: u32,
}

impl NetPoolResult {
    /// Whether the check passed. A net of zero is a failure.
    pub fn is_success(&self) -> bool {
        self.net_success > 0
    }

    /// The pass/fail reading of this result.
    pub fn outcome(&self) -> Outcome {
        if self.net_success > 0 {
            Outcome::Success {
                successes: self.net_success.unsigned_abs(),
            }
        } else {
            Outcome::Failure {
                failures: self.net_success.unsigned_abs(),
            }
        }
    }

    /// The advantage/threat reading of this result.
    pub fn edge(&self) -> Edge {
        match self.net_advantage {
            n if n > 0 => Edge::Advantage(n.unsigned_abs()),
            n if n < 0 => Edge::Threat(n.unsigned_abs()),
            _ => Edge::Even,
        }
    }
}

impl std::fmt::Display for NetPoolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = vec![self.outcome().to_string()];
        if self.edge() != Edge::Even {
            parts.push(self.edge().to_string());
        }
        if self.triumph > 0 {
            parts.push(format!("{} Triumph", self.triumph));
        }
        if self.despair > 0 {
            parts.push(format!("{} Despair", self.despair));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Whether a non-empty pool succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// More successes than failures.
    Success {
        /// Net successes, always at least one.
        successes: u64,
    },
    /// No net successes.
    Failure {
        /// Net failures; zero when successes and failures cancel exactly.
        failures: u64,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { successes } => write!(f, "{successes} Success"),
            Self::Failure { failures: 0 } => write!(f, "Failure"),
            Self::Failure { failures } => write!(f, "{failures} Failure"),
        }
    }
}

/// Net advantage or threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// More advantage than threat.
    Advantage(u64),
    /// More threat than advantage.
    Threat(u64),
    /// They cancel out.
    Even,
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advantage(n) => write!(f, "{n} Advantage"),
            Self::Threat(n) => write!(f, "{n} Threat"),
            Self::Even => write!(f, "Even"),
        }
    }
}

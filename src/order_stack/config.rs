//! Stack configuration.
//!
//! The defaults match the field sizes customers are used to (49 characters for the
//! name, 99 for the item) and hand out order numbers that are never reused.

use serde::{Deserialize, Serialize};

/// How the stack picks the number of a newly inserted order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberingPolicy {
    /// 1, 2, 3, ... for the lifetime of the stack. Numbers are never handed out twice,
    /// not even after a pop or a clear.
    #[default]
    Sequential,
    /// Current depth + 1. A number freed by a pop is handed out again by the next insert.
    StackDepth,
    /// Number of orders already in the stack, minimum 1. The first two orders of a
    /// fresh stack both get number 1; later duplicates follow from pops.
    ChainLength,
}

/// What to do with text longer than the configured limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Refuse the order with [`OrderStackError::FieldTooLong`](super::OrderStackError::FieldTooLong).
    #[default]
    Reject,
    /// Cut the text at the limit and log a warning.
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    pub numbering: NumberingPolicy,
    /// Maximum customer name length, in characters.
    pub max_customer_len: usize,
    /// Maximum item description length, in characters.
    pub max_item_len: usize,
    pub overflow: OverflowPolicy,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            numbering: NumberingPolicy::default(),
            max_customer_len: 49,
            max_item_len: 99,
            overflow: OverflowPolicy::default(),
        }
    }
}

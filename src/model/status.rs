use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment stage of an order.
///
/// Stages only move forward, one step at a time, and stop at [`OrderStatus::Delivered`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// The stage after this one, or `None` once delivered.
    pub fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Preparing => write!(f, "Preparing"),
            OrderStatus::Ready => write!(f, "Ready"),
            OrderStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

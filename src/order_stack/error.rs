//! Error types for the order stack.

use crate::model::OrderNumber;
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur during order stack operations.
///
/// None of these are fatal: the menu prints the message and carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderStackError {
    /// The stack could not grow to hold another order.
    #[error("Could not allocate memory for the new order: {0}")]
    ResourceExhausted(#[from] TryReserveError),

    /// Pop or lookup against a stack with no orders.
    #[error("The stack is empty.")]
    Empty,

    /// No order in the stack carries the requested number.
    #[error("Order {0} not found.")]
    NotFound(OrderNumber),

    /// The order is delivered and its status cannot move any further.
    #[error("The status of order {0} cannot be changed, it is already marked as 'Delivered'.")]
    AlreadyDelivered(OrderNumber),

    /// A text field exceeds its configured limit.
    #[error("The {field} is too long: {len} characters (maximum {max}).")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Orders must be for at least one item.
    #[error("The quantity must be at least 1.")]
    InvalidQuantity,
}

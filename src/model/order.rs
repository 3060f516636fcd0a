use crate::model::OrderStatus;
use crate::order_stack::OrderStackError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{info, warn};

/// Number shown to the user for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderNumber(pub u32);

impl From<u32> for OrderNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Represents one customer's food order.
///
/// # Ownership
/// An `Order` is owned by the [`OrderStack`](crate::order_stack::OrderStack) that holds it.
/// Popping hands ownership to the caller; clearing the stack drops it.
///
/// Only the status can change after creation, and only through
/// [`Order::advance_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    number: OrderNumber,
    customer_name: String,
    item_description: String,
    quantity: u32,
    status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub item_description: String,
    pub quantity: u32,
}

impl OrderCreate {
    pub fn new(customer_name: impl Into<String>, item_description: impl Into<String>, quantity: u32) -> Self {
        Self {
            customer_name: customer_name.into(),
            item_description: item_description.into(),
            quantity,
        }
    }
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `number` - Number assigned by the stack at insertion time
    /// * `params` - Customer, item and quantity, already validated
    ///
    /// # Notes
    /// The order is initialized with status `Pending`.
    pub fn new(number: OrderNumber, params: OrderCreate) -> Self {
        Self {
            number,
            customer_name: params.customer_name,
            item_description: params.item_description,
            quantity: params.quantity,
            status: OrderStatus::Pending,
        }
    }

    pub fn number(&self) -> OrderNumber {
        self.number
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn item_description(&self) -> &str {
        &self.item_description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Moves the order one stage forward and returns the stage reached.
    ///
    /// # Errors
    /// [`OrderStackError::AlreadyDelivered`] once the order is delivered. The order is
    /// left untouched, and every later call fails the same way.
    pub fn advance_status(&mut self) -> Result<OrderStatus, OrderStackError> {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                info!(number = %self.number, status = %next, "Status advanced");
                Ok(next)
            }
            None => {
                warn!(number = %self.number, "Status change rejected, already delivered");
                Err(OrderStackError::AlreadyDelivered(self.number))
            }
        }
    }
}

//! # Order Stack
//!
//! A last-in-first-out collection of [`Order`]s. The most recently inserted order is
//! the top: it is the only one that can be removed individually, and it is the first
//! one every lookup and listing sees.
//!
//! The stack is a plain owned value. Callers pass it (or a reference to it) to every
//! operation; there is no shared or global instance.
//!
//! ## Operations
//!
//! * **Insert** ([`OrderStack::insert`]): reserves room, assigns a number according to
//!   the [`NumberingPolicy`], validates the payload and pushes the new `Pending` order.
//! * **Pop** ([`OrderStack::pop`]): removes the top and hands it to the caller.
//! * **Find** ([`OrderStack::find_by_number`]): scans top to bottom, first match wins.
//! * **Advance** ([`OrderStack::advance_status`]): moves one order a stage forward.
//! * **Clear** ([`OrderStack::clear`]): drops every order.
//!
//! Rendering lives in [`display`].

pub mod config;
pub mod display;
pub mod error;

pub use config::*;
pub use display::*;
pub use error::*;

use crate::model::{Order, OrderCreate, OrderNumber, OrderStatus};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct OrderStack {
    // Bottom first; the top is the last element.
    orders: Vec<Order>,
    config: StackConfig,
    next_sequential: u32,
}

impl Default for OrderStack {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStack {
    /// Creates an empty stack with the default [`StackConfig`].
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    pub fn with_config(config: StackConfig) -> Self {
        Self {
            orders: Vec::new(),
            config,
            next_sequential: 1,
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The most recently inserted order, if any.
    pub fn peek(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// Iterates from the top of the stack down to the oldest order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().rev()
    }

    /// Builds a `Pending` order from `params`, applying the configured text limits.
    ///
    /// The order is not inserted; hand it to [`OrderStack::push`].
    pub fn create(&self, number: OrderNumber, params: OrderCreate) -> Result<Order, OrderStackError> {
        if params.quantity == 0 {
            warn!(%number, "Create failed: zero quantity");
            return Err(OrderStackError::InvalidQuantity);
        }
        let customer_name = self.fit("customer name", params.customer_name, self.config.max_customer_len)?;
        let item_description = self.fit("item description", params.item_description, self.config.max_item_len)?;

        Ok(Order::new(
            number,
            OrderCreate {
                customer_name,
                item_description,
                quantity: params.quantity,
            },
        ))
    }

    /// Places `order` on top of the stack.
    pub fn push(&mut self, order: Order) {
        info!(number = %order.number(), size = self.orders.len() + 1, "Pushed");
        self.orders.push(order);
    }

    /// Creates an order from `params` and pushes it, returning its number.
    ///
    /// Nothing is pushed and no number is consumed when creation fails.
    pub fn insert(&mut self, params: OrderCreate) -> Result<OrderNumber, OrderStackError> {
        debug!(?params, "Insert");
        self.orders.try_reserve(1).map_err(|e| {
            warn!(error = %e, "Insert failed: could not reserve space");
            OrderStackError::from(e)
        })?;

        let number = self.peek_next_number();
        let order = self.create(number, params)?;
        if self.config.numbering == NumberingPolicy::Sequential {
            self.next_sequential = self.next_sequential.saturating_add(1);
        }
        self.push(order);
        Ok(number)
    }

    /// Removes the top order and returns it.
    ///
    /// # Errors
    /// [`OrderStackError::Empty`] when there is nothing to pop; the stack is unchanged.
    pub fn pop(&mut self) -> Result<Order, OrderStackError> {
        match self.orders.pop() {
            Some(order) => {
                info!(number = %order.number(), size = self.orders.len(), "Popped");
                Ok(order)
            }
            None => {
                warn!("Pop on empty stack");
                Err(OrderStackError::Empty)
            }
        }
    }

    /// Returns the topmost order carrying `number`.
    pub fn find_by_number(&self, number: OrderNumber) -> Option<&Order> {
        let found = self.iter().find(|order| order.number() == number);
        debug!(%number, found = found.is_some(), "Find");
        found
    }

    /// Mutable twin of [`OrderStack::find_by_number`].
    pub fn find_by_number_mut(&mut self, number: OrderNumber) -> Option<&mut Order> {
        self.orders.iter_mut().rev().find(|order| order.number() == number)
    }

    /// Advances the status of the topmost order carrying `number`.
    ///
    /// # Errors
    /// * [`OrderStackError::Empty`] if the stack holds no orders.
    /// * [`OrderStackError::NotFound`] if no order carries `number`.
    /// * [`OrderStackError::AlreadyDelivered`] if the order is already delivered.
    pub fn advance_status(&mut self, number: OrderNumber) -> Result<OrderStatus, OrderStackError> {
        if self.is_empty() {
            warn!(%number, "Advance on empty stack");
            return Err(OrderStackError::Empty);
        }
        match self.find_by_number_mut(number) {
            Some(order) => order.advance_status(),
            None => {
                warn!(%number, "Not found");
                Err(OrderStackError::NotFound(number))
            }
        }
    }

    /// Drops every order and returns how many were released.
    pub fn clear(&mut self) -> usize {
        let released = self.orders.drain(..).count();
        info!(released, "Cleared");
        released
    }

    fn peek_next_number(&self) -> OrderNumber {
        match self.config.numbering {
            NumberingPolicy::Sequential => OrderNumber(self.next_sequential),
            NumberingPolicy::StackDepth => OrderNumber(self.depth().saturating_add(1)),
            NumberingPolicy::ChainLength => OrderNumber(self.depth().max(1)),
        }
    }

    fn depth(&self) -> u32 {
        u32::try_from(self.orders.len()).unwrap_or(u32::MAX)
    }

    fn fit(&self, field: &'static str, text: String, max: usize) -> Result<String, OrderStackError> {
        let len = text.chars().count();
        if len <= max {
            return Ok(text);
        }
        match self.config.overflow {
            OverflowPolicy::Reject => {
                warn!(field, len, max, "Create failed: field too long");
                Err(OrderStackError::FieldTooLong { field, len, max })
            }
            OverflowPolicy::Truncate => {
                warn!(field, len, max, "Field truncated");
                Ok(text.chars().take(max).collect())
            }
        }
    }
}

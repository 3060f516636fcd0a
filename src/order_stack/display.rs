//! Text rendering of orders for the terminal.

use super::OrderStack;
use crate::model::Order;
use std::fmt;
use std::io::{self, Write};

pub const NOT_FOUND_MESSAGE: &str = "Order not found.";
pub const NO_ORDERS_MESSAGE: &str = "No orders registered.";

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order No.: {}", self.number())?;
        writeln!(f, "Customer: {}", self.customer_name())?;
        writeln!(f, "Item: {}", self.item_description())?;
        writeln!(f, "Quantity: {}", self.quantity())?;
        write!(f, "Status: {}", self.status())
    }
}

/// Writes one order, or the not-found message when there is none.
pub fn display_one<W: Write>(out: &mut W, order: Option<&Order>) -> io::Result<()> {
    match order {
        Some(order) => writeln!(out, "{order}"),
        None => writeln!(out, "{NOT_FOUND_MESSAGE}"),
    }
}

/// Writes every order from the top of the stack down.
pub fn display_all<W: Write>(out: &mut W, stack: &OrderStack) -> io::Result<()> {
    if stack.is_empty() {
        return writeln!(out, "{NO_ORDERS_MESSAGE}");
    }
    for order in stack.iter() {
        display_one(out, Some(order))?;
    }
    Ok(())
}

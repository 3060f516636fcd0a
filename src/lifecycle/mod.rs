//! # Program Lifecycle
//!
//! Everything the binary sets up before the menu starts and tears down after it ends.
//!
//! - [`setup_tracing`] installs the log subscriber.
//! - [`run_session`] builds the stack, runs the menu over the given input and output,
//!   and releases whatever orders are still stacked when the menu returns.

pub mod tracing;

pub use self::tracing::*;

use crate::menu::{Menu, MenuError};
use crate::order_stack::{OrderStack, StackConfig};
use std::io::{BufRead, Write};

/// Runs one complete menu session on a fresh stack.
///
/// Returns how many orders were still on the stack when the session ended; they are
/// released before returning.
pub fn run_session<R: BufRead, W: Write>(
    config: StackConfig,
    input: R,
    output: W,
) -> Result<usize, MenuError> {
    let mut stack = OrderStack::with_config(config);
    let mut menu = Menu::new(input, output);
    menu.run(&mut stack)?;
    Ok(stack.clear())
}

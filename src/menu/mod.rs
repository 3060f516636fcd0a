//! # Menu Session
//!
//! The interactive loop that drives an [`OrderStack`] from the terminal. It is generic
//! over its input and output, so tests run whole sessions against in-memory buffers.
//!
//! Every order stack failure is printed and the loop resumes. The session ends on the
//! Exit entry or at end of input.

pub mod action;
pub mod error;

pub use action::*;
pub use error::*;

use crate::model::{OrderCreate, OrderNumber};
use crate::order_stack::{display_all, display_one, OrderStack};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const INVALID_OPTION_MESSAGE: &str = "Invalid option! Try again.";
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid number.";
pub const EXIT_MESSAGE: &str = "Exiting the system...";

/// Whether the loop keeps reading after an entry ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hands back the output, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or the input ends.
    pub fn run(&mut self, stack: &mut OrderStack) -> Result<(), MenuError> {
        info!("Menu started");
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            let flow = match line.parse::<MenuAction>() {
                Ok(action) => {
                    debug!(?action, "Selected");
                    self.dispatch(action, stack)?
                }
                Err(UnknownAction) => {
                    writeln!(self.output, "{INVALID_OPTION_MESSAGE}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        writeln!(self.output, "{EXIT_MESSAGE}")?;
        self.output.flush()?;
        info!(remaining = stack.len(), "Menu finished");
        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction, stack: &mut OrderStack) -> Result<Flow, MenuError> {
        match action {
            MenuAction::Insert => self.insert(stack),
            MenuAction::AdvanceStatus => self.advance_status(stack),
            MenuAction::Pop => {
                match stack.pop() {
                    Ok(order) => writeln!(self.output, "Order No. {} removed successfully.", order.number().0)?,
                    Err(e) => writeln!(self.output, "{e}")?,
                }
                Ok(Flow::Continue)
            }
            MenuAction::DisplayOne => {
                let Some(number) = self.prompt_number("Enter the order number: ")? else {
                    return Ok(Flow::Exit);
                };
                if let Some(number) = number {
                    display_one(&mut self.output, stack.find_by_number(number))?;
                }
                Ok(Flow::Continue)
            }
            MenuAction::DisplayAll => {
                display_all(&mut self.output, stack)?;
                Ok(Flow::Continue)
            }
            MenuAction::Clear => {
                stack.clear();
                writeln!(self.output, "Stack cleared successfully!")?;
                Ok(Flow::Continue)
            }
            MenuAction::Exit => Ok(Flow::Exit),
        }
    }

    fn insert(&mut self, stack: &mut OrderStack) -> Result<Flow, MenuError> {
        let Some(customer_name) = self.prompt("Enter the customer name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(item_description) = self.prompt("Enter the item description: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompt("Enter the quantity: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(quantity) = quantity.trim().parse::<u32>() else {
            writeln!(self.output, "{INVALID_NUMBER_MESSAGE}")?;
            return Ok(Flow::Continue);
        };

        match stack.insert(OrderCreate::new(customer_name, item_description, quantity)) {
            Ok(number) => writeln!(self.output, "Order No. {number} inserted.")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn advance_status(&mut self, stack: &mut OrderStack) -> Result<Flow, MenuError> {
        let Some(number) = self.prompt_number("Enter the order number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(number) = number else {
            return Ok(Flow::Continue);
        };
        match stack.advance_status(number) {
            Ok(status) => writeln!(self.output, "Status of order {} updated to: {status}", number.0)?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "\nMenu:")?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{}. {action}", action.key())?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>, MenuError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// `None` at end of input; `Some(None)` when the answer is not a number, after
    /// telling the user so.
    fn prompt_number(&mut self, question: &str) -> Result<Option<Option<OrderNumber>>, MenuError> {
        let Some(answer) = self.prompt(question)? else {
            return Ok(None);
        };
        match answer.trim().parse::<u32>() {
            Ok(number) => Ok(Some(Some(OrderNumber(number)))),
            Err(_) => {
                writeln!(self.output, "{INVALID_NUMBER_MESSAGE}")?;
                Ok(Some(None))
            }
        }
    }

    /// Reads one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, MenuError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

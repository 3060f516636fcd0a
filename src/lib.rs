//! # Order Board
//!
//! > **A last-in-first-out order board for a small kitchen, driven from the terminal.**
//!
//! Orders are stacked as they arrive. The newest one sits on top: it is the first one
//! listed, the first one a lookup sees, and the only one that can be removed on its own.
//! Each order walks through four stages, `Pending`, `Preparing`, `Ready` and
//! `Delivered`, and stops there.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: Plain records. An [`Order`](model::Order) is immutable apart from its
//!   [`OrderStatus`](model::OrderStatus), which only moves forward.
//!
//! ### 2. The Engine ([`order_stack`])
//! - **Role**: Owns the orders and enforces LIFO discipline, numbering and field limits.
//! - **Key items**: [`OrderStack`](order_stack::OrderStack),
//!   [`StackConfig`](order_stack::StackConfig),
//!   [`OrderStackError`](order_stack::OrderStackError).
//!
//! ### 3. The Interface ([`menu`])
//! - **Role**: The seven-entry text menu. Generic over input and output so whole
//!   sessions can be tested in memory.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Tracing setup and the session wrapper used by the binary.
//!
//! ## Architecture Notes
//!
//! ### Type-Safe Error Handling
//! [`OrderStackError`](order_stack::OrderStackError) lists every way an operation can be
//! refused. None of them are fatal: the menu prints the message and shows the menu again.
//!
//! ### Ownership
//! The stack is an ordinary value passed to each operation. Popping moves the order out
//! to the caller; clearing drops every order at once.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run with info logs on stderr
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_stack;

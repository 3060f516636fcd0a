//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for the
//! whole program.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable. Without it only
//!   errors are shown, so a normal session prints nothing but the menu.
//! - **Standard error output**, keeping log lines out of the menu on standard output.
//! - **Compact format** without module paths (`with_target(false)`).
//!
//! ## What Gets Traced
//!
//! - **Session lifecycle**: menu start and finish, with the number of orders left
//! - **Stack operations**: push, pop, find and clear, with the order number and stack size
//! - **Status changes**: every advance, and every rejection at `Delivered`
//! - **Failures**: empty stack, unknown numbers, invalid payloads and truncated fields
//!
//! ## Usage Examples
//!
//! ```bash
//! # Stack operations
//! RUST_LOG=info cargo run
//!
//! # Insert payloads and lookups as well
//! RUST_LOG=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Menu started
//! INFO Pushed number=001 size=1
//! INFO Status advanced number=001 status=Preparing
//! INFO Popped number=001 size=0
//! INFO Menu finished remaining=0
//! ```
//!
//! **With `RUST_LOG=debug`**, inserts also log their payload once:
//!
//! ```text
//! DEBUG Insert params=OrderCreate { customer_name: "Ana", item_description: "Pizza", quantity: 2 }
//! INFO Pushed number=001 size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

//! Terminal entry point: sets up tracing and runs one menu session on stdin/stdout.

use order_board::lifecycle::{run_session, setup_tracing};
use order_board::menu::MenuError;
use order_board::order_stack::StackConfig;
use std::io;
use tracing::info;

fn main() -> Result<(), MenuError> {
    setup_tracing();

    let stdin = io::stdin();
    let released = run_session(StackConfig::default(), stdin.lock(), io::stdout())?;

    info!(released, "Application completed successfully");
    Ok(())
}

#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod cell;
pub mod classify;
pub mod error;

pub use cell::{CellError, CellErrorKind, GatewayApiVersionMismatch};
pub use classify::matcher::NotFoundMatcher;
pub use classify::{
    MatchMode, build_not_found_pattern, is_cell_instance_not_found,
    is_cell_instance_not_found_with, message_indicates_not_found,
};
pub use error::Error;

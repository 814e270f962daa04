//! calccore — engine for a four-function desktop calculator
//!
//! The engine turns a stream of button presses into a running
//! computation. It owns two pieces of state, the number being typed and
//! the pending left operand with its operator, and after every event
//! hands back a [`View`] ready to be rendered.

pub mod config;
pub mod engine;
pub mod entry;
pub mod error;
pub mod number;
pub mod operator;
pub mod pending;

pub use config::CalcConfig;
pub use engine::{Engine, Event, View};
pub use entry::{Digit, EntryBuffer};
pub use error::CalcError;
pub use number::{normalize_number, Number};
pub use operator::Operator;
pub use pending::{Pending, Stage};

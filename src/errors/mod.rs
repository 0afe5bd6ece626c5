//! Error taxonomy shared by the lexer, validator and binder.
//!
//! Every failure aborts the whole parse. Line-scoped errors carry the
//! [`DocumentLine`](crate::base::DocumentLine) of the offending node and
//! render it 1-based in their message, so errors can be shown to users
//! verbatim.

mod error;
mod kind;

pub use error::{IonError, IonResult};
pub use kind::ErrorKind;

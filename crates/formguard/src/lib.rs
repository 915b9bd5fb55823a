//! Formguard runtime
//!
//! Connects the pure validation core to whatever environment actually owns
//! the form. Hosts implement [`FieldSource`] for reading current values and
//! [`MessageSink`] for the error-display slots, then call
//! [`run_submit_check`] from their submit handler and cancel the native
//! submit action when the decision is [`SubmitDecision::Block`].

mod error;
mod guard;
mod memory;

pub use error::GuardError;
pub use guard::{run_submit_check, FieldSource, MessageSink, SubmitDecision};
pub use memory::MemoryForm;

pub use formguard_core::{
    evaluate, is_valid_email, ContactFields, FieldName, ValidationReport,
};

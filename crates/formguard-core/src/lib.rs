//! Formguard Validation Core
//!
//! Pure validation logic for the contact form guard. No DOM access and no
//! I/O here: hosts snapshot the current field values, call [`evaluate`],
//! and render the resulting report however they display errors.

pub mod email;
pub mod evaluate;
pub mod field;
pub mod report;

pub use email::is_valid_email;
pub use evaluate::{
    evaluate, MSG_COMMENTS_REQUIRED, MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED,
    MSG_FIRST_NAME_REQUIRED, MSG_LAST_NAME_REQUIRED,
};
pub use field::{ContactFields, FieldName};
pub use report::ValidationReport;

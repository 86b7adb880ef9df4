//! Utility functions for input validation and display formatting.

pub mod format;
pub mod validation;

pub use format::{format_amount, mask_phone, truncate_string};
pub use validation::{
    validate_email, validate_password, validate_phone, validate_username, ValidationResult,
};

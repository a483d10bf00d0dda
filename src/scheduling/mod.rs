//! Scheduling rules: shift validation, candidate matching, swap review and
//! calendar projection. Everything here is pure and synchronous.

pub mod calendar;
pub mod errors;
pub mod matcher;
pub mod swap;
pub mod validator;

pub use calendar::{events_in_window, project};
pub use errors::{FieldError, SchedulingError, ValidationErrors};
pub use matcher::matching_employees;
pub use validator::validate_shift;

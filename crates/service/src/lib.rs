//! Service layer for activities.
//! - `errors`: typed failure taxonomy shared with the HTTP boundary.
//! - `activity`: store abstraction, validation step and the application service.

pub mod errors;
pub mod activity;
#[cfg(test)]
pub mod test_support;

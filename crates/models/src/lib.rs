pub mod errors;
pub mod db;
pub mod activity;

pub use activity::{Category, NewActivity, DEFAULT_STATUS};

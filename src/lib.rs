pub mod auction;
pub mod error;
pub mod format;
pub mod presenter;
pub mod rules;
pub mod users;

pub mod catalog;
pub mod chat;
pub mod schedule;
pub mod status;

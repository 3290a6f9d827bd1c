//! API endpoint handlers.

pub mod chat;
pub mod diagnose;
pub mod doctor;
pub mod health;

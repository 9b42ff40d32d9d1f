//! API request handlers

pub mod activity;
pub mod attendees;
pub mod auth;
pub mod events;
pub mod health;

//! Aplus+ Services notification dispatcher
//!
//! Receives booking and quote-request form submissions from the marketing
//! site, formats an owner-facing SMS alert, and relays it through one of
//! three interchangeable SMS providers (Twilio, MessageBird, Plivo). The
//! backend is picked at startup from whichever credential group is present
//! in the environment; with none configured the service degrades to logging
//! the alert and acknowledging the submission.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

pub mod alert;
pub mod messagebird;
pub mod plivo;
pub mod provider;
pub mod twilio;

pub mod dispatch;
pub mod submission;

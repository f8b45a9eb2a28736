// Service exports
pub mod feedback;

pub use feedback::{FeedbackError, FeedbackReceipt, FeedbackService};

use crate::models::{FeedbackRequest, FeedbackSubmission};
use thiserror::Error;

const ANONYMOUS_NAME: &str = "Anonymous";
const MISSING_EMAIL: &str = "No email provided";

/// Errors that can occur when accepting feedback
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Feedback message cannot be empty")]
    EmptyMessage,
}

/// Receipt for accepted feedback
#[derive(Debug, Clone)]
pub struct FeedbackReceipt {
    pub receipt_id: uuid::Uuid,
    pub submission: FeedbackSubmission,
}

/// Feedback intake
///
/// Submissions are recorded as structured log events addressed to the
/// configured recipient; no mail is sent.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    recipient: String,
}

impl FeedbackService {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Apply defaults and record a submission
    pub fn submit(&self, request: FeedbackRequest) -> Result<FeedbackReceipt, FeedbackError> {
        let feedback = request.feedback.trim();
        if feedback.is_empty() {
            tracing::warn!("Feedback submission rejected: message empty");
            return Err(FeedbackError::EmptyMessage);
        }

        let submission = FeedbackSubmission {
            name: non_blank(request.name).unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
            email: non_blank(request.email).unwrap_or_else(|| MISSING_EMAIL.to_string()),
            feedback: feedback.to_string(),
        };

        let receipt_id = uuid::Uuid::new_v4();

        tracing::info!(
            receipt_id = %receipt_id,
            name = %submission.name,
            email = %submission.email,
            recipient = %self.recipient,
            length = submission.feedback.len(),
            "Feedback received"
        );

        Ok(FeedbackReceipt {
            receipt_id,
            submission,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>, feedback: &str) -> FeedbackRequest {
        FeedbackRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            feedback: feedback.to_string(),
        }
    }

    #[test]
    fn test_defaults_applied() {
        let service = FeedbackService::new("team@travillo.example");

        let receipt = service.submit(request(None, Some("  "), " Loved Chopta! ")).unwrap();

        assert_eq!(receipt.submission.name, "Anonymous");
        assert_eq!(receipt.submission.email, "No email provided");
        assert_eq!(receipt.submission.feedback, "Loved Chopta!");
    }

    #[test]
    fn test_empty_message_rejected() {
        let service = FeedbackService::new("team@travillo.example");

        assert_eq!(
            service.submit(request(Some("Asha"), None, " \n\t ")).unwrap_err(),
            FeedbackError::EmptyMessage
        );
    }

    #[test]
    fn test_receipts_are_unique() {
        let service = FeedbackService::new("team@travillo.example");

        let a = service.submit(request(Some("Asha"), None, "one")).unwrap();
        let b = service.submit(request(Some("Asha"), None, "two")).unwrap();
        assert_ne!(a.receipt_id, b.receipt_id);
    }
}

use crate::models::VoteSubmission;

/// The only amount a submission may carry.
pub const UPVOTE: &str = "1";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Items can only be upvoted.")]
    InvalidAmount,
    #[error("Invalid item id.")]
    EmptyItemId,
}

/// Checks every rule and reports all failures, not just the first.
pub fn validate_submission(submission: &VoteSubmission) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if submission.amount.as_deref() != Some(UPVOTE) {
        errors.push(ValidationError::InvalidAmount);
    }
    if submission.id.is_empty() {
        errors.push(ValidationError::EmptyItemId);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

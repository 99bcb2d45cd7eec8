use crate::{Rejection, ServerStatus, SubmissionReceipt};

/// Result of a validated transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Parameters were submitted; convergence is observed later through status reads
    Accepted {
        target: ServerStatus,
        receipt: SubmissionReceipt,
    },
    /// Nothing was submitted
    Rejected(Rejection),
}

impl TransitionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

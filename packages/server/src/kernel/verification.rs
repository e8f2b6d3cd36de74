//! Automated verification decision.
//!
//! A stub rule: the outcome depends only on the document number. No image
//! content is inspected.

pub const REASON_MISSING_DOC_NUMBER: &str = "Missing document number";
pub const REASON_FAILED_CHECKS: &str = "Document failed automated checks";

/// Terminal decision for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected { reason: &'static str },
}

/// Evaluate the decision rule against the session's document number.
///
/// - no document number on file: rejected
/// - document number containing "REJ" (any case): rejected
/// - anything else: approved
pub fn evaluate(doc_number: Option<&str>) -> Decision {
    match doc_number {
        None => Decision::Rejected {
            reason: REASON_MISSING_DOC_NUMBER,
        },
        Some(number) if number.to_uppercase().contains("REJ") => Decision::Rejected {
            reason: REASON_FAILED_CHECKS,
        },
        Some(_) => Decision::Approved,
    }
}

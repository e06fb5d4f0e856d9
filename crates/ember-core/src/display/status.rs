//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Used for operations that have no resource to show, such as the
/// stale-counter sweep.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self { message }
    }

    /// Status line for a finished stale-counter sweep.
    pub fn counters_reset(count: usize) -> Self {
        let message = match count {
            0 => "No stale daily counters found".to_string(),
            1 => "Reset 1 stale daily counter".to_string(),
            n => format!("Reset {n} stale daily counters"),
        };
        Self::success(message)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed".to_string());
        assert_eq!(format!("{success}"), "Success: Operation completed\n");
    }

    #[test]
    fn test_counters_reset_wording() {
        assert_eq!(
            OperationStatus::counters_reset(0).to_string(),
            "Success: No stale daily counters found\n"
        );
        assert_eq!(
            OperationStatus::counters_reset(1).to_string(),
            "Success: Reset 1 stale daily counter\n"
        );
        assert_eq!(
            OperationStatus::counters_reset(3).to_string(),
            "Success: Reset 3 stale daily counters\n"
        );
    }
}

//! Display formatting for habits and operation results.
//!
//! Domain values are shown through wrapper types so the same data can be
//! rendered differently per context: a single card, the whole board, or a
//! one-line confirmation after a write. Everything renders as markdown, which
//! the CLI feeds to its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   HabitView &   │    │   Formatted     │
//! │ (Habit, DayKey) │───▶│ Result Wrappers │───▶│    Output       │
//! │                 │    │                 │    │   (markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`HabitBoard`], every habit as it looks today
//! - [`results`]: Operation result types (CreateResult, CompletionResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use ember_core::display::OperationStatus;
//!
//! let status = OperationStatus::counters_reset(2);
//! assert_eq!(status.to_string(), "Success: Reset 2 stale daily counters\n");
//! ```
//!
//! All wrappers also implement `serde::Serialize`, which is what the CLI's
//! `--json` flag prints.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::HabitBoard;
pub use datetime::LocalDateTime;
pub use results::{CompletionResult, CreateResult, DeleteResult};
pub use status::OperationStatus;

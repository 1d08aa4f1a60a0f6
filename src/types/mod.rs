//! Data types shared by the checkers, the report aggregator and the output
//! schema.

mod core;
mod issue;

pub use self::core::{Severity, SourceKind};
pub use self::issue::{Issue, IssueDetail, IssueKind};

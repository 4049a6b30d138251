//! pylint-exit-options - configurable exit codes for pylint
//!
//! pylint exits with a bitmask of the message categories it emitted. This
//! crate decodes that mask, keeps only the categories a project treats as
//! blocking, and produces a new status (0 = safe to proceed) plus a report.
//!
//! ```
//! use pylint_exit_options::{translate, CategorySet};
//!
//! // 24 = refactor + convention; only convention blocks here
//! let t = translate(24, "C".parse().unwrap());
//! assert_eq!(t.new_status, 16);
//!
//! // neither is reportable by default
//! assert_eq!(translate(24, CategorySet::DEFAULT_REPORTABLE).new_status, 0);
//! ```

pub mod config;
pub mod exit_codes;
pub mod models;
pub mod reporters;
pub mod translate;

pub use models::{Category, CategorySet, SelectorError};
pub use translate::{decode, messages, show_workings, translate, StatusTranslator, Translation};

//! Exit status translation
//!
//! Decodes pylint's bit-encoded exit status, keeps only the categories the
//! caller considers blocking, and recomputes a new status from them.

use crate::models::{Category, CategorySet};
use serde::Serialize;
use tracing::debug;

/// Outcome of translating one raw status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Status as received from pylint
    pub raw_status: i64,
    /// OR of the blocking categories' flags, always in 0..=63
    pub new_status: u8,
    /// Categories present in the raw status
    pub signaled: CategorySet,
    /// Signaled categories that are also reportable
    pub blocking: CategorySet,
    /// Reportable set the translation was computed with
    pub reportable: CategorySet,
}

impl Translation {
    /// Whether the run should be treated as a failure
    pub fn is_blocking(&self) -> bool {
        self.new_status != 0
    }

    pub fn signaled_categories(&self) -> Vec<Category> {
        self.signaled.iter().collect()
    }

    pub fn blocking_categories(&self) -> Vec<Category> {
        self.blocking.iter().collect()
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        i32::from(self.new_status)
    }
}

/// Translator bound to a fixed reportable set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTranslator {
    reportable: CategorySet,
}

impl Default for StatusTranslator {
    fn default() -> Self {
        Self::new(CategorySet::DEFAULT_REPORTABLE)
    }
}

impl StatusTranslator {
    pub fn new(reportable: CategorySet) -> Self {
        Self { reportable }
    }

    pub fn reportable(&self) -> CategorySet {
        self.reportable
    }

    pub fn translate(&self, raw_status: i64) -> Translation {
        translate(raw_status, self.reportable)
    }
}

/// Set of categories whose flag is set in `raw_status`.
///
/// Bits above the six category flags are ignored.
pub fn decode(raw_status: i64) -> CategorySet {
    Category::ALL
        .into_iter()
        .filter(|c| raw_status & i64::from(c.flag()) != 0)
        .collect()
}

/// Translate a raw pylint status against a reportable set
pub fn translate(raw_status: i64, reportable: CategorySet) -> Translation {
    let signaled = decode(raw_status);
    let blocking = signaled.intersection(reportable);
    let new_status = blocking.iter().fold(0u8, |acc, c| acc | c.flag());

    debug!(
        raw_status,
        new_status,
        signaled = %signaled,
        blocking = %blocking,
        reportable = %reportable,
        "translated exit status"
    );

    Translation {
        raw_status,
        new_status,
        signaled,
        blocking,
        reportable,
    }
}

/// Labels of every category signaled by `raw_status`
pub fn messages(raw_status: i64) -> Vec<&'static str> {
    decode(raw_status).iter().map(Category::label).collect()
}

/// One-line breakdown of a raw status: value, binary digits, signaled labels.
///
/// `12 (1100) = [Warning message issued, Refactor message issued]`
pub fn show_workings(raw_status: i64) -> String {
    let binary = if raw_status < 0 {
        format!("-{:b}", raw_status.unsigned_abs())
    } else {
        format!("{:b}", raw_status)
    };
    format!(
        "{} ({}) = [{}]",
        raw_status,
        binary,
        messages(raw_status).join(", ")
    )
}

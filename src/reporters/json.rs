//! JSON reporter
//!
//! Machine-readable form of a translation, for piping to jq or CI tooling.

use super::RenderOptions;
use crate::models::CategorySet;
use crate::translate::{show_workings, Translation};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    raw_status: i64,
    new_status: u8,
    exit_code: i32,
    signaled: Vec<&'a str>,
    blocking: Vec<&'a str>,
    reportable: CategorySet,
    #[serde(skip_serializing_if = "Option::is_none")]
    workings: Option<String>,
}

/// Render a translation as pretty-printed JSON
pub fn render(t: &Translation, opts: &RenderOptions) -> Result<String> {
    let report = JsonReport {
        raw_status: t.raw_status,
        new_status: t.new_status,
        exit_code: t.exit_code(),
        signaled: t.signaled.iter().map(|c| c.label()).collect(),
        blocking: t.blocking.iter().map(|c| c.label()).collect(),
        reportable: t.reportable,
        workings: opts.show_workings.then(|| show_workings(t.raw_status)),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

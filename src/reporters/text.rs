//! Text (terminal) reporter

use super::RenderOptions;
use crate::models::{Category, CategorySet};
use crate::translate::{show_workings, Translation};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

/// ANSI codes, blanked out when color is off
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
                red: RED,
                green: GREEN,
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
                red: "",
                green: "",
            }
        }
    }
}

/// Blocking categories in red, the rest in the default color
fn category_color(p: &Palette, category: Category, blocking: CategorySet) -> &'static str {
    if blocking.contains(category) {
        p.red
    } else {
        ""
    }
}

/// Render a translation as the human-readable report
pub fn render(t: &Translation, opts: &RenderOptions) -> Result<String> {
    let p = Palette::new(opts.color);
    let mut out = String::new();

    if opts.show_workings {
        out.push_str(&format!("{}{}{}\n\n", p.dim, show_workings(t.raw_status), p.reset));
    }

    if !t.signaled.is_empty() {
        out.push_str(&format!(
            "{}The following types of issues were found:{}\n\n",
            p.bold, p.reset
        ));
        for cat in t.signaled.iter() {
            let c = category_color(&p, cat, t.blocking);
            let reset = if c.is_empty() { "" } else { p.reset };
            out.push_str(&format!("  - {c}{}{reset}\n", cat.label()));
        }
        out.push('\n');
    }

    if t.is_blocking() {
        out.push_str(&format!(
            "{}The following types of issues are blockers:{}\n\n",
            p.bold, p.reset
        ));
        for cat in t.blocking.iter() {
            out.push_str(&format!("  - {}{}{}\n", p.red, cat.label(), p.reset));
        }
        out.push('\n');
        out.push_str(&format!("{}Exiting with issues...{}\n", p.red, p.reset));
    } else {
        out.push_str(&format!("{}Exiting gracefully...{}\n", p.green, p.reset));
    }

    Ok(out)
}

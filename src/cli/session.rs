//! Line-oriented interactive lookups
//!
//! Every input line is one submission. Each submission takes a new query
//! ticket, so a lookup started earlier can never render after a later one.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::application::services::EvolutionService;
use crate::cli::error::LOOKUP_FAILED_MESSAGE;
use crate::cli::render::render_text;

/// Input that ends the session.
pub const QUIT_COMMAND: &str = ":q";

/// Outcome counts of a finished session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub found: usize,
    pub failed: usize,
}

/// Read names from `input` until EOF or `:q`, rendering each gallery to `out`.
///
/// Blank lines are skipped. Lookup failures print the generic message and the
/// session continues.
pub fn run_session<R: BufRead, W: Write>(
    service: &EvolutionService,
    input: R,
    out: &mut W,
    prompt: Option<&dyn Fn()>,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    if let Some(p) = prompt {
        p();
    }
    for line in input.lines() {
        let line = line?;
        let query = line.trim();

        if query == QUIT_COMMAND {
            break;
        }
        if !query.is_empty() {
            match service.submit_query(query) {
                Ok(gallery) => {
                    write!(out, "{}", render_text(&gallery))?;
                    summary.found += 1;
                }
                Err(e) => {
                    debug!("lookup of {:?} failed: {}", query, e);
                    writeln!(out, "{}", LOOKUP_FAILED_MESSAGE)?;
                    summary.failed += 1;
                }
            }
            out.flush()?;
        }

        if let Some(p) = prompt {
            p();
        }
    }

    Ok(summary)
}

//! Command entry point for a host dispatcher.

use hostmark_core::config::HostmarkConfig;
use hostmark_core::constants::MAX_FAILURE_MESSAGE_CHARS;
use hostmark_core::errors::{AnnotationError, HostmarkErrorCode};
use hostmark_core::types::ElementId;
use hostmark_core::Document;

use crate::pass::AnnotationPass;
use crate::report::AnnotationReport;

/// What the dispatcher is told after the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Succeeded(AnnotationReport),
    /// Nothing was written. `elements` lists the elements to highlight.
    Failed {
        message: String,
        elements: Vec<ElementId>,
    },
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    fn failed(error: &AnnotationError) -> Self {
        Self::Failed {
            message: truncate_chars(&error.coded_string(), MAX_FAILURE_MESSAGE_CHARS),
            elements: error.elements(),
        }
    }
}

/// Build a pass from `config` and run it over `document`.
pub fn execute<D: Document + ?Sized>(document: &mut D, config: &HostmarkConfig) -> CommandResult {
    hostmark_core::tracing::init_tracing();

    let pass = match AnnotationPass::from_config(config) {
        Ok(pass) => pass,
        Err(e) => return CommandResult::failed(&AnnotationError::from(e)),
    };
    execute_pass(document, &pass)
}

/// Run a prepared pass and translate the outcome for the dispatcher.
pub fn execute_pass<D: Document + ?Sized>(document: &mut D, pass: &AnnotationPass) -> CommandResult {
    match pass.run(document) {
        Ok(report) => CommandResult::Succeeded(report),
        Err(e) => CommandResult::failed(&e),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

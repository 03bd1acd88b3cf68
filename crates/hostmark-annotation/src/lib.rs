//! # hostmark-annotation
//!
//! Classifies each reinforcement element's host and writes the host's
//! category label and mark onto the element, all-or-nothing per pass.
//! Three outcomes: classified host, unclassifiable host, no host.

pub mod classifier;
pub mod command;
pub mod outcome;
pub mod pass;
pub mod plan;
pub mod report;

pub use classifier::CategoryLookupTable;
pub use command::{execute, execute_pass, CommandResult};
pub use outcome::{AnnotationOutcome, AnnotationResult};
pub use pass::{AnnotationPass, AttributeNames};
pub use plan::{AnnotationPlan, HostFault, PlannedAnnotation};
pub use report::AnnotationReport;

//! AnnotationPass: plan every element, then apply all writes atomically.

use std::time::Instant;

use hostmark_core::config::{AnnotationConfig, HostmarkConfig};
use hostmark_core::constants::{
    DEFAULT_CATEGORY_ATTRIBUTE, DEFAULT_MARK_ATTRIBUTE, DEFAULT_TRANSACTION_NAME,
};
use hostmark_core::errors::{AnnotationError, ConfigError, HostmarkErrorCode};
use hostmark_core::events::types::{
    ElementAnnotatedEvent, HostFaultEvent, OutcomeKind, PassCommittedEvent,
    PassRolledBackEvent, PassStartedEvent,
};
use hostmark_core::events::EventDispatcher;
use hostmark_core::Document;

use crate::classifier::CategoryLookupTable;
use crate::outcome::AnnotationOutcome;
use crate::plan::{AnnotationPlan, HostFault, PlannedAnnotation};
use crate::report::AnnotationReport;

/// Names of the two attributes written onto each reinforcement element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNames {
    pub category: String,
    pub mark: String,
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY_ATTRIBUTE.to_string(),
            mark: DEFAULT_MARK_ATTRIBUTE.to_string(),
        }
    }
}

impl AttributeNames {
    pub fn from_config(config: &AnnotationConfig) -> Self {
        Self {
            category: config.effective_category_attribute().to_string(),
            mark: config.effective_mark_attribute().to_string(),
        }
    }
}

/// Host metadata propagation over every reinforcement element of a document.
#[derive(Debug)]
pub struct AnnotationPass {
    table: CategoryLookupTable,
    attributes: AttributeNames,
    transaction_name: String,
    events: EventDispatcher,
}

impl Default for AnnotationPass {
    fn default() -> Self {
        Self::new(CategoryLookupTable::default(), AttributeNames::default())
    }
}

impl AnnotationPass {
    /// A pass using the default transaction name and no event handlers.
    pub fn new(table: CategoryLookupTable, attributes: AttributeNames) -> Self {
        Self {
            table,
            attributes,
            transaction_name: DEFAULT_TRANSACTION_NAME.to_string(),
            events: EventDispatcher::new(),
        }
    }

    /// Validate `config` and build the pass it describes.
    pub fn from_config(config: &HostmarkConfig) -> Result<Self, ConfigError> {
        HostmarkConfig::validate(config)?;
        let annotation = &config.annotation;
        Ok(Self::new(
            CategoryLookupTable::from_config(annotation)?,
            AttributeNames::from_config(annotation),
        )
        .with_transaction_name(annotation.effective_transaction_name()))
    }

    pub fn with_transaction_name(mut self, name: impl Into<String>) -> Self {
        self.transaction_name = name.into();
        self
    }

    /// Send pass events to the handlers registered on `events`.
    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn table(&self) -> &CategoryLookupTable {
        &self.table
    }

    pub fn attributes(&self) -> &AttributeNames {
        &self.attributes
    }

    pub fn transaction_name(&self) -> &str {
        &self.transaction_name
    }

    /// Resolve and classify every reinforcement element without writing.
    ///
    /// Host lookups that fail are recorded in `host_faults` and planned as
    /// unlinked. Only enumeration failure is an error. No events are emitted;
    /// handlers hear about a plan only once `apply` commits it.
    pub fn plan<D: Document + ?Sized>(&self, document: &D) -> Result<AnnotationPlan, AnnotationError> {
        let elements = document.reinforcement_elements()?;
        let mut plan = AnnotationPlan {
            entries: Vec::with_capacity(elements.len()),
            host_faults: Vec::new(),
        };

        for element in &elements {
            let host = match document.resolve_host(element) {
                Ok(host) => host,
                Err(e) => {
                    tracing::warn!(
                        element = %element.id,
                        error = %e,
                        "host reference unusable, treating element as unlinked"
                    );
                    plan.host_faults.push(HostFault {
                        element: element.id,
                        error_code: e.error_code(),
                        message: e.to_string(),
                    });
                    None
                }
            };

            let outcome = AnnotationOutcome::decide(host.as_ref(), &self.table);
            tracing::debug!(element = %element.id, outcome = ?outcome.kind(), "planned");
            let result = outcome.result();
            plan.entries.push(PlannedAnnotation {
                element: element.id,
                outcome,
                result,
            });
        }

        Ok(plan)
    }

    /// Write `plan` in one transaction. On failure nothing from the plan
    /// remains in the document.
    pub fn apply<D: Document + ?Sized>(
        &self,
        document: &mut D,
        plan: &AnnotationPlan,
    ) -> Result<AnnotationReport, AnnotationError> {
        self.commit(document, plan, Instant::now())
    }

    /// Plan and apply in one call.
    pub fn run<D: Document + ?Sized>(&self, document: &mut D) -> Result<AnnotationReport, AnnotationError> {
        let start = Instant::now();
        let plan = self.plan(document)?;
        let report = self.commit(document, &plan, start)?;
        tracing::info!(
            transaction = %report.transaction_name,
            visited = report.visited,
            classified = report.classified,
            unclassified = report.unclassified,
            unlinked = report.unlinked,
            host_faults = report.host_faults.len(),
            "annotation pass committed"
        );
        Ok(report)
    }

    /// Per-element and fault events go out only after the document accepted
    /// every write. A rollback emits `pass_started` then `pass_rolled_back`.
    fn commit<D: Document + ?Sized>(
        &self,
        document: &mut D,
        plan: &AnnotationPlan,
        start: Instant,
    ) -> Result<AnnotationReport, AnnotationError> {
        self.events.emit_pass_started(&PassStartedEvent {
            transaction_name: self.transaction_name.clone(),
            element_count: plan.len(),
        });
        let writes = plan.writes(&self.attributes);

        if let Err(e) = document.apply_atomically(&self.transaction_name, &writes) {
            tracing::error!(
                transaction = %self.transaction_name,
                error = %e,
                "annotation pass rolled back"
            );
            self.events.emit_pass_rolled_back(&PassRolledBackEvent {
                transaction_name: self.transaction_name.clone(),
                error_code: e.error_code(),
                message: e.to_string(),
            });
            return Err(e.into());
        }

        for fault in &plan.host_faults {
            self.events.emit_host_fault(&HostFaultEvent {
                element: fault.element,
                message: fault.message.clone(),
            });
        }
        for entry in &plan.entries {
            self.events.emit_element_annotated(&ElementAnnotatedEvent {
                element: entry.element,
                outcome: entry.outcome.kind(),
            });
        }

        let report = AnnotationReport {
            transaction_name: self.transaction_name.clone(),
            visited: plan.len(),
            classified: plan.count(OutcomeKind::Classified),
            unclassified: plan.count(OutcomeKind::Unclassified),
            unlinked: plan.count(OutcomeKind::Unlinked),
            writes: writes.len(),
            host_faults: plan.host_faults.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        self.events.emit_pass_committed(&PassCommittedEvent {
            transaction_name: self.transaction_name.clone(),
            elements_written: report.visited,
            duration_ms: report.duration_ms,
        });
        Ok(report)
    }
}

//! SQLite-backed document.

use std::path::Path;

use hostmark_core::config::StorageConfig;
use hostmark_core::errors::{DocumentError, StorageError};
use hostmark_core::types::{
    AttributeWrite, Category, ElementId, HostElement, ReinforcementElement,
};
use hostmark_core::Document;
use rusqlite::Connection;

use crate::connection::{self, writer::with_immediate_transaction};
use crate::queries::annotation_runs::{self, AnnotationRunRow};
use crate::queries::{attributes, elements};

/// A document persisted in a SQLite database.
///
/// Every `apply_atomically` call is recorded in `annotation_runs`,
/// whether it committed or rolled back.
pub struct SqliteDocument {
    conn: Connection,
}

impl SqliteDocument {
    pub fn open(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        Ok(Self {
            conn: connection::open(path, config)?,
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: connection::open_in_memory(&StorageConfig::default())?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn add_host(
        &self,
        category: Option<Category>,
        mark: Option<&str>,
    ) -> Result<ElementId, StorageError> {
        self.add_host_raw(category.map(Category::name), mark)
    }

    /// Add a host whose stored category name is taken verbatim, so documents
    /// written by other tools with unrecognised names can be reproduced.
    pub fn add_host_raw(
        &self,
        category: Option<&str>,
        mark: Option<&str>,
    ) -> Result<ElementId, StorageError> {
        elements::insert_host(&self.conn, category, mark).map(ElementId)
    }

    /// Add a reinforcement element whose schema contains `attribute_names`.
    pub fn add_reinforcement(
        &self,
        host: Option<ElementId>,
        attribute_names: &[&str],
    ) -> Result<ElementId, StorageError> {
        with_immediate_transaction(&self.conn, |tx| -> Result<ElementId, StorageError> {
            let id = elements::insert_reinforcement(tx, host.map(ElementId::value))?;
            for name in attribute_names {
                attributes::define(tx, id, name)?;
            }
            Ok(ElementId(id))
        })
    }

    pub fn update_host(
        &self,
        host: ElementId,
        category: Option<Category>,
        mark: Option<&str>,
    ) -> Result<bool, StorageError> {
        elements::update_host(&self.conn, host.0, category.map(Category::name), mark)
            .map(|n| n > 0)
    }

    pub fn remove_element(&self, id: ElementId) -> Result<bool, StorageError> {
        elements::delete(&self.conn, id.0).map(|n| n > 0)
    }

    /// Most recent annotation runs first.
    pub fn recent_runs(&self, limit: usize) -> Result<Vec<AnnotationRunRow>, StorageError> {
        annotation_runs::query_recent(&self.conn, limit)
    }

    fn write_all(&self, writes: &[AttributeWrite]) -> Result<(), DocumentError> {
        with_immediate_transaction(&self.conn, |tx| -> Result<(), DocumentError> {
            for write in writes {
                let touched = attributes::update_value(
                    tx,
                    write.element.0,
                    &write.name,
                    write.value.as_deref(),
                )?;
                if touched == 0 {
                    return Err(DocumentError::AttributeNotFound {
                        element: write.element,
                        name: write.name.clone(),
                    });
                }
            }
            Ok(())
        })
    }
}

impl Document for SqliteDocument {
    fn reinforcement_elements(&self) -> Result<Vec<ReinforcementElement>, DocumentError> {
        let rows = elements::query_reinforcements(&self.conn)?;
        Ok(rows
            .into_iter()
            .map(|row| ReinforcementElement {
                id: ElementId(row.id),
                host: row.host_id.map(ElementId),
            })
            .collect())
    }

    fn resolve_host(
        &self,
        element: &ReinforcementElement,
    ) -> Result<Option<HostElement>, DocumentError> {
        let Some(host_id) = element.host else {
            return Ok(None);
        };
        let row = elements::get(&self.conn, host_id.0)?.ok_or_else(|| {
            DocumentError::CorruptReference {
                element: element.id,
                reason: format!("host {host_id} does not exist"),
            }
        })?;
        if row.kind != elements::KIND_HOST {
            return Err(DocumentError::CorruptReference {
                element: element.id,
                reason: format!("{host_id} is a {} element, not a host", row.kind),
            });
        }

        let category = row.category.as_deref().and_then(|name| {
            let parsed = Category::parse(name);
            if parsed.is_none() {
                tracing::debug!(host = %host_id, category = name, "unrecognised stored category");
            }
            parsed
        });
        Ok(Some(HostElement {
            id: host_id,
            category,
            mark: row.mark,
        }))
    }

    fn get_attribute(&self, element: ElementId, name: &str) -> Result<Option<String>, DocumentError> {
        match attributes::get_value(&self.conn, element.0, name)? {
            Some(value) => Ok(value),
            None => match elements::get(&self.conn, element.0)? {
                None => Err(DocumentError::ElementNotFound { id: element }),
                Some(_) => Err(DocumentError::AttributeNotFound {
                    element,
                    name: name.to_string(),
                }),
            },
        }
    }

    fn apply_atomically(
        &mut self,
        transaction_name: &str,
        writes: &[AttributeWrite],
    ) -> Result<(), DocumentError> {
        let result = self.write_all(writes);
        let (status, error) = match &result {
            Ok(()) => (annotation_runs::STATUS_COMMITTED, None),
            Err(e) => (annotation_runs::STATUS_ROLLED_BACK, Some(e.to_string())),
        };
        if let Err(e) = annotation_runs::insert(
            &self.conn,
            transaction_name,
            writes.len(),
            status,
            error.as_deref(),
        ) {
            tracing::warn!(error = %e, "failed to record annotation run");
        }
        result
    }
}

//! V001: elements and their named string attributes.

pub const MIGRATION_SQL: &str = r#"
-- Hosts and reinforcement elements share one table.
-- host_id is deliberately not a foreign key: documents may carry
-- references to elements that no longer exist.
CREATE TABLE IF NOT EXISTS elements (
    id INTEGER PRIMARY KEY,
    kind TEXT NOT NULL CHECK (kind IN ('host', 'reinforcement')),
    category TEXT,
    mark TEXT,
    host_id INTEGER
) STRICT;

CREATE INDEX IF NOT EXISTS idx_elements_kind ON elements(kind, id);

-- A row exists for every attribute in an element's schema;
-- value is NULL until written.
CREATE TABLE IF NOT EXISTS element_attributes (
    element_id INTEGER NOT NULL REFERENCES elements(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    value TEXT,
    PRIMARY KEY (element_id, name)
) STRICT;
"#;

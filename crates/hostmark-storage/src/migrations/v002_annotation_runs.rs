//! V002: history of annotation passes.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS annotation_runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    transaction_name TEXT NOT NULL,
    started_at INTEGER NOT NULL DEFAULT (unixepoch()),
    write_count INTEGER NOT NULL,
    status TEXT NOT NULL CHECK (status IN ('committed', 'rolled_back')),
    error TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_annotation_runs_started
    ON annotation_runs(started_at);
"#;

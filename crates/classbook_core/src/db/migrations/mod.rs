//! Address book schema steps and their executor.
//!
//! # Invariants
//! - Step versions start at 1 and increase by one.
//! - Pending steps run in a single transaction; a failing step leaves the
//!   file at its previous `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::{Connection, Transaction};

#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[
    SchemaStep {
        version: 1,
        name: "persons",
        sql: include_str!("0001_persons.sql"),
    },
    SchemaStep {
        version: 2,
        name: "tags_classes",
        sql: include_str!("0002_tags_classes.sql"),
    },
];

/// Newest schema version this build can read and write.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Brings the address book schema up to [`latest_version`].
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is newer than this build.
/// - `Migration` naming the step that failed.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let latest = latest_version();
    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > current)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in pending {
        apply_step(&tx, step).map_err(|source| DbError::Migration {
            version: step.version,
            name: step.name,
            source,
        })?;
        info!(
            "event=db_migrate module=db status=ok from_version={current} version={} step={}",
            step.version, step.name
        );
    }
    tx.commit()?;
    Ok(())
}

fn apply_step(tx: &Transaction<'_>, step: &SchemaStep) -> rusqlite::Result<()> {
    tx.execute_batch(step.sql)?;
    tx.pragma_update(None, "user_version", step.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_consecutively() {
        for (position, step) in SCHEMA_STEPS.iter().enumerate() {
            assert_eq!(step.version as usize, position + 1, "step {}", step.name);
        }
    }

    #[test]
    fn failing_step_is_named_and_leaves_version_untouched() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("0001_persons.sql")).unwrap();
        conn.execute_batch("CREATE INDEX person_tags ON persons(name); PRAGMA user_version = 1;")
            .unwrap();

        match apply_migrations(&mut conn).unwrap_err() {
            DbError::Migration { version, name, .. } => {
                assert_eq!(version, 2);
                assert_eq!(name, "tags_classes");
            }
            other => panic!("unexpected error: {other}"),
        }
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1);
    }
}

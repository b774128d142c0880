//! The digest writer: resolve rows against the vault, concatenate note
//! contents, and replace the single output document.

use tracing::debug;

use crate::config::DigestConfig;
use crate::error::CoreError;
use crate::model::{join_sections, DigestSection, Row};
use crate::vault::Vault;

/// Result of one writer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
    /// The digest was written (created or fully replaced).
    Written { path: String, sections: usize },
    /// No row resolved to readable content; nothing was written.
    Empty,
}

/// Build and persist the digest from an ordered row sequence.
///
/// Rows without a usable `path`, and paths that do not resolve to a readable
/// note, are skipped without failing the run. With zero sections the previous
/// digest (if any) is left untouched. The output is a deterministic function
/// of the resolved rows' content and order; it never accumulates across runs.
pub fn write_digest(
    vault: &Vault,
    rows: &[Row],
    config: &DigestConfig,
) -> Result<DigestOutcome, CoreError> {
    let mut sections = Vec::new();

    for row in rows {
        let Some(path) = row.path.as_deref() else {
            debug!("skipping row without a path field");
            continue;
        };
        let Some(item) = vault.item(path) else {
            debug!(path, "skipping row: not a readable note");
            continue;
        };
        let body = vault.read(&item)?;
        sections.push(DigestSection {
            title: item.base_name.clone(),
            path: item.path.clone(),
            body,
        });
    }

    if sections.is_empty() {
        debug!("no note contents found in query result");
        return Ok(DigestOutcome::Empty);
    }

    let document = join_sections(&sections);

    // Single-writer guard across the replace; a concurrent run fails fast
    // instead of racing on the output item.
    let _guard = vault.lock_run()?;
    let item = vault.write_note(&config.output, &document)?;
    debug!(path = %item.path, sections = sections.len(), "digest written");

    Ok(DigestOutcome::Written {
        path: item.path,
        sections: sections.len(),
    })
}

//! The audit run behind the `maxhit-audit` binary.

use std::path::Path;

use anyhow::{Context, Result};
use calc_content::MonsterCatalogue;
use calc_core::ReferenceEngine;

use crate::generator::{AuditOutcome, DiscrepancyGenerator};

/// Loads the catalogue at `path` and audits it with the reference engine.
///
/// Progress, the summary counts and the report digest go to the log.
pub fn audit_file(path: &Path) -> Result<AuditOutcome> {
    tracing::info!("Loading monster catalogue from {}", path.display());
    let catalogue = MonsterCatalogue::load(path)
        .with_context(|| format!("Failed to load catalogue: {}", path.display()))?;
    tracing::info!("Loaded {} monsters", catalogue.len());

    let generator = DiscrepancyGenerator::new(ReferenceEngine::new());
    let outcome = generator.run(&catalogue).inspect_err(|e| {
        tracing::error!(
            monster = e.monster(),
            code = e.error_code(),
            severity = e.severity().as_str(),
            "audit aborted"
        );
    })?;

    let summary = outcome.summary;
    tracing::info!(
        examined = summary.examined,
        skipped = summary.skipped(),
        compared = summary.compared,
        matched = summary.matched,
        mismatched = summary.mismatched,
        "audit complete"
    );
    tracing::info!("Report digest: {}", outcome.report.digest());

    Ok(outcome)
}

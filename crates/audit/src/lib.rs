//! Max-hit discrepancy audit.
//!
//! Compares the wiki max hit of every monster in the catalogue with the max
//! hit computed by a [`calc_core::MaxHitEngine`], and groups the monsters
//! that disagree by combat style.
//!
//! ```no_run
//! use calc_content::MonsterCatalogue;
//! use calc_core::ReferenceEngine;
//! use maxhit_audit::DiscrepancyGenerator;
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalogue = MonsterCatalogue::load("cdn/json/monsters.json".as_ref())?;
//! let outcome = DiscrepancyGenerator::new(ReferenceEngine::new()).run(&catalogue)?;
//! println!("{}", outcome.report.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod error;
pub mod generator;
pub mod logging;
pub mod report;

pub use error::{AuditError, Result};
pub use generator::{AuditOutcome, AuditSummary, DiscrepancyGenerator, Eligibility};
pub use report::{BLANK_BUCKET, MismatchReport};

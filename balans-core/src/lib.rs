//! balans-core: canonical transaction model, category taxonomy, and the
//! categorization stage of the statement-import pipeline.

pub mod category;
pub mod classifier;
pub mod counterparty;
pub mod error;
pub mod finalizer;
pub mod transaction;

pub use category::{Category, FlowKind};
pub use classifier::{Classifier, Rule, default_rules};
pub use counterparty::{DEFAULT_COUNTERPARTY, extract_counterparty};
pub use error::{Error, Result};
pub use finalizer::Finalizer;
pub use transaction::{Transaction, TxKind};

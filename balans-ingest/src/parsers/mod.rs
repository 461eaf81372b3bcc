//! Format-specific statement parsers. Every parser emits unclassified
//! `StatementEntry` rows; categorization happens in one downstream stage.

pub mod delimited;
pub mod halyk;
pub mod kaspi;

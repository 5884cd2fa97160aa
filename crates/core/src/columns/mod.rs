//! Header lookup by logical field name

pub mod resolver;

pub use resolver::{ColumnResolver, ResolveMode, SynonymRule, SynonymTable};

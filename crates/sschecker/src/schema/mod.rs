//! Declarative field rules grouped by section role.

mod rule;
mod table;
mod tso500;

pub use rule::Rule;
pub use table::{Schema, SchemaSet};

//! Dialect profiles and role-based views over parsed documents.

mod flatten;
mod profile;
mod sample_sheet;

pub use flatten::{find_duplicate_keys, flatten_records};
pub use profile::{Role, SheetProfile};
pub use sample_sheet::SampleSheet;

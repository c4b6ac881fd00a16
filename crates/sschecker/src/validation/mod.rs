//! Schema validation and sample-level checks.

mod index;
mod ordering;
mod pairing;
mod validator;

pub use index::{IndexMismatch, check_index_membership};
pub use ordering::{is_ordered, unordered_columns};
pub use pairing::{PairingReport, SampleType, UnpairedSample, check_pairs};
pub use validator::{ValidationResult, View, validate};

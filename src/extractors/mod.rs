//! Request extractors that decode, validate, and reject with `AppError::Validation`.

mod validated;
pub use validated::{ValidatedJson, ValidatedPath};

//! TodoService: existence checks and storage-to-domain error translation.

mod todo;
pub use todo::TodoService;

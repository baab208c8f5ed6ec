//! User data sources
//!
//! - [`UserSource`]: read-only access trait consumed by the handlers
//! - [`StaticUserSource`]: the built-in, process-lifetime collection
//! - [`RepositoryError`]: structured failures with operation context

mod error;
mod memory;
pub mod seed;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::StaticUserSource;
pub use traits::{RepositoryResult, UserSource};

//! Stream combinators for input pipelines

mod debounce;
mod distinct;

pub use debounce::{Debounce, DebounceExt};
pub use distinct::{DistinctExt, DistinctUntilChanged};

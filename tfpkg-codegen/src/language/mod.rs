//! Language-specific abstractions.

mod naming;
mod traits;

pub use naming::{GO_NAMING, NamingConvention, RUST_NAMING};
pub use traits::{LanguageCodegen, TypeMapper};

mod resolved;
mod traversal;
mod types;

pub use resolved::*;
pub use types::*;

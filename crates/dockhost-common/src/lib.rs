pub mod errors;
pub mod fs;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DockError, LayoutError, PersistError};
pub use fs::write_atomic;
pub use id::new_id;
pub use types::Rect;

pub type Result<T> = std::result::Result<T, DockError>;

//! Command implementations.

pub mod check;
pub mod extract;
pub mod summary;

pub use self::check::execute_check;
pub use self::extract::execute_extract;
pub use self::summary::execute_summary;

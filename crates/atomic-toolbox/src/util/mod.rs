//! Small helpers: identifiers, pagination, value formatting.

pub mod format;
pub mod ids;
pub mod pagination;

//! Name tracking for semantic analysis.
//!
//! The parser does not consult this module; it gives later passes a scoped
//! view of what has been declared.

pub mod symbol_table;

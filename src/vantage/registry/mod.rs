//! Column and layout registries.
//!
//! Both are built once per request context as immutable values from parsed
//! configuration, then copied through the access filter before resolution
//! reads them. Explicit builders keep each registry testable on its own.

pub mod columns;
pub mod layouts;

pub use columns::ColumnRegistry;
pub use layouts::LayoutRegistry;

//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; applications that want output set one up
//! themselves:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! For a readable view of a toolbar's element tree, see
//! [`Document::dump_tree`](crate::Document::dump_tree).

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "trellis_core";
    /// Document/element tree target.
    pub const DOCUMENT: &str = "trellis_core::document";
    /// Toolbar assembly target.
    pub const TOOLBAR: &str = "trellis::toolbar";
    /// Event adapter target.
    pub const ADAPTER: &str = "trellis::adapter";
    /// Identifier allocation target.
    pub const IDGEN: &str = "trellis::idgen";
}

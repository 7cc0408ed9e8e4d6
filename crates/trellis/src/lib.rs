//! Declarative plugin toolbars with a single delegate callback.
//!
//! Trellis builds small toolbars of interactive widgets (buttons, text
//! inputs, checkbox/label pairs, spacing gaps) inside a host page and
//! forwards every user interaction through one delegate contract instead of
//! per-widget handlers. Three pieces cooperate:
//!
//! - **Element factory** ([`factory`]): builds one native element per widget
//!   kind from a [`WidgetConfig`]
//! - **Event adapter** ([`EventAdapter`]): records per-widget handler
//!   registrations and translates native events into normalized
//!   notifications for the [`PluginsHost`]
//! - **Toolbar assembler** ([`ToolbarFactory`]): creates containers, appends
//!   widgets in call order, and links checkbox/label pairs via generated
//!   page-unique identifiers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::{Page, RecordingHost, ToolbarFactory, WidgetConfig};
//! use trellis_core::{ElementKind, EventObject};
//!
//! let page = Arc::new(Page::new());
//! let host = Arc::new(RecordingHost::new());
//! let factory = ToolbarFactory::new(page.clone(), host.clone());
//!
//! let body = page.create_element(ElementKind::Form);
//! let toolbar = factory.create_toolbar(body, "Tools", "nav", "pluginA")?;
//! factory.button(
//!     &WidgetConfig::new("b1", "Go").on("click", ["clientX", "clientY"]),
//!     "pluginA",
//!     toolbar,
//! )?;
//!
//! // The host environment delivers native events through the factory.
//! let button = page.children(toolbar)?[0];
//! factory.dispatch(button, "click", &EventObject::new().with("clientX", 10))?;
//! assert_eq!(host.notifications()[0].widget_id, "b1");
//! # Ok::<(), trellis::ToolbarError>(())
//! ```

mod adapter;
mod config;
mod delegate;
mod error;
pub mod factory;
mod idgen;
mod toolbar;


pub use adapter::EventAdapter;
pub use config::{HandlerMap, HandlerSpec, WidgetConfig};
pub use delegate::{Notification, PluginsHost, RecordingHost};
pub use error::{Result, ToolbarError};
pub use idgen::IdAllocator;
pub use toolbar::ToolbarFactory;

// Re-export the core surface that every caller touches.
pub use trellis_core::{
    Document, DocumentError, DocumentResult, ElementId, ElementKind, EventObject, EventValue,
    Page, WidgetValue,
};

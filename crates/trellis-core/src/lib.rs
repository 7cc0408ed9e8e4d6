//! Core systems for Trellis.
//!
//! This crate provides the host-page model that the `trellis` toolbar crate
//! builds against:
//!
//! - **Document**: An arena-backed element tree with attributes, native
//!   widget state, and identifier lookup
//! - **Events**: Property bags representing one native event occurrence
//! - **Logging**: `tracing` target names for filtering
//!
//! The toolbar system treats all of this as a given primitive surface: it
//! creates elements, appends them, assigns attributes, looks identifiers up,
//! and reads current values. It never removes elements; the tree is owned by
//! whoever holds the [`Page`].
//!
//! # Example
//!
//! ```
//! use trellis_core::{Document, ElementKind, WidgetValue};
//!
//! let mut doc = Document::new();
//! let form = doc.create_element(ElementKind::Form);
//! let input = doc.create_element(ElementKind::TextInput);
//! doc.append_child(form, input)?;
//!
//! doc.set_value(input, "hello")?;
//! assert_eq!(doc.current_value(input)?, WidgetValue::Text("hello".into()));
//! # Ok::<(), trellis_core::DocumentError>(())
//! ```

mod document;
mod event;
pub mod logging;

pub use document::{
    Document, DocumentError, DocumentResult, ElementId, ElementKind, Page, WidgetValue,
};
pub use event::{EventObject, EventValue};

//! Element tree model for Trellis.
//!
//! Provides the host-page document that toolbar construction mutates:
//! - Stable element identifiers via arena-based storage
//! - Parent-child containment with insertion-order preservation
//! - Free-form string attributes and native widget state (text value,
//!   checked flag)
//! - Page-wide and subtree-scoped identifier lookup
//!
//! The toolbar layer in the `trellis` crate treats everything here as a
//! given primitive surface: element creation, tree insertion, attribute
//! assignment, identifier lookup, subtree query.
//!
//! # Key Types
//!
//! - [`Document`] - The element arena and tree
//! - [`ElementId`] - Unique stable identifier for each element
//! - [`ElementKind`] - Finite enumeration of element kinds
//! - [`Page`] - Thread-safe wrapper around [`Document`]
//! - [`WidgetValue`] - Normalized current value read off an element

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A unique identifier for an element in the document.
    ///
    /// `ElementId`s are stable handles that remain valid as the tree grows.
    /// They become invalid only if the element is removed from the arena,
    /// which the toolbar system never does (containers are caller-owned).
    pub struct ElementId;
}

/// The kind of an element.
///
/// Each kind statically determines how the element's current value is read:
/// [`ElementKind::Checkbox`] reads its checked flag, every other kind reads
/// its text value. Keeping this a closed enumeration makes an invalid kind a
/// compile-time concern rather than a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A form container hosting an ordered run of widgets.
    Form,
    /// A clickable button.
    Button,
    /// A free-text input.
    TextInput,
    /// A two-state checkbox input.
    Checkbox,
    /// A text label associated with another element via its `for` attribute.
    Label,
    /// A non-interactive spacing element.
    Gap,
}

impl ElementKind {
    /// Whether this kind may contain children.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Form)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Form => "form",
            Self::Button => "button",
            Self::TextInput => "text",
            Self::Checkbox => "checkbox",
            Self::Label => "label",
            Self::Gap => "gap",
        };
        write!(f, "{name}")
    }
}

/// The normalized current value of an element.
///
/// This is what the event adapter reads immediately after a native event and
/// forwards to the plugins host, so the host never touches raw elements.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetValue {
    /// Text content: a text input's value, a button's label, a label's text.
    Text(String),
    /// A checkbox's checked state.
    Toggle(bool),
}

impl fmt::Display for WidgetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Toggle(checked) => write!(f, "{checked}"),
        }
    }
}

/// Errors that can occur during document operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The element ID is invalid or refers to a removed element.
    InvalidElementId,
    /// Attempted to append a child to a non-container element.
    NotAContainer,
    /// Attempted to append an element into its own subtree.
    CircularContainment,
    /// The child is already attached to a parent.
    AlreadyAttached,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElementId => write!(f, "Invalid or removed element ID"),
            Self::NotAContainer => write!(f, "Element kind cannot contain children"),
            Self::CircularContainment => {
                write!(f, "Cannot append an element into its own subtree")
            }
            Self::AlreadyAttached => write!(f, "Element is already attached to a parent"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Result type for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Internal data stored in the arena for each element.
struct ElementData {
    kind: ElementKind,
    /// Free-form string attributes (`title`, `data-type`, `for`, ...).
    attributes: HashMap<String, String>,
    /// Display text (button label, label text).
    text: String,
    /// Native text value (text inputs; buttons mirror their label here).
    value: String,
    /// Native checked state (checkboxes only; ignored elsewhere).
    checked: bool,
    /// The page-wide identifier attribute, if assigned.
    dom_id: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl ElementData {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: HashMap::new(),
            text: String::new(),
            value: String::new(),
            checked: false,
            dom_id: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The element arena and tree.
///
/// Uses arena-based storage via SlotMap for stable element IDs. Children are
/// kept in insertion order; appending never reorders existing siblings.
///
/// # Related Types
///
/// - [`Page`] - Thread-safe wrapper for shared access
/// - [`ElementId`] - Keys into this arena
pub struct Document {
    elements: SlotMap<ElementId, ElementData>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    /// Create a new detached element of the given kind.
    pub fn create_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.elements.insert(ElementData::new(kind));
        tracing::trace!(target: "trellis_core::document", ?id, %kind, "created element");
        id
    }

    /// Append a child to a container element.
    ///
    /// The child is placed after all existing children; sibling order is the
    /// order of `append_child` calls. A child can be attached at most once.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> DocumentResult<()> {
        let parent_kind = self
            .elements
            .get(parent)
            .map(|d| d.kind)
            .ok_or(DocumentError::InvalidElementId)?;
        if !parent_kind.is_container() {
            return Err(DocumentError::NotAContainer);
        }
        {
            let child_data = self
                .elements
                .get(child)
                .ok_or(DocumentError::InvalidElementId)?;
            if child_data.parent.is_some() {
                return Err(DocumentError::AlreadyAttached);
            }
        }
        if self.is_in_subtree_of(parent, child)? {
            return Err(DocumentError::CircularContainment);
        }

        if let Some(data) = self.elements.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.elements.get_mut(parent) {
            data.children.push(child);
        }
        tracing::trace!(target: "trellis_core::document", ?parent, ?child, "appended child");
        Ok(())
    }

    /// Check if `id` lies in the subtree rooted at `root` (including the root).
    fn is_in_subtree_of(&self, id: ElementId, root: ElementId) -> DocumentResult<bool> {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == root {
                return Ok(true);
            }
            current = self
                .elements
                .get(current_id)
                .ok_or(DocumentError::InvalidElementId)?
                .parent;
        }
        Ok(false)
    }

    /// Check if an element exists in the document.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Get the kind of an element.
    pub fn kind(&self, id: ElementId) -> DocumentResult<ElementKind> {
        self.elements
            .get(id)
            .map(|d| d.kind)
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: ElementId) -> DocumentResult<Option<ElementId>> {
        self.elements
            .get(id)
            .map(|d| d.parent)
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Get the children of an element, in insertion order.
    pub fn children(&self, id: ElementId) -> DocumentResult<&[ElementId]> {
        self.elements
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Set a free-form string attribute.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> DocumentResult<()> {
        let data = self
            .elements
            .get_mut(id)
            .ok_or(DocumentError::InvalidElementId)?;
        data.attributes.insert(name.into(), value.into());
        Ok(())
    }

    /// Get a free-form string attribute.
    pub fn attribute(&self, id: ElementId, name: &str) -> DocumentResult<Option<&str>> {
        let data = self.elements.get(id).ok_or(DocumentError::InvalidElementId)?;
        Ok(data.attributes.get(name).map(|s| s.as_str()))
    }

    /// Set the display text of an element.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> DocumentResult<()> {
        let data = self
            .elements
            .get_mut(id)
            .ok_or(DocumentError::InvalidElementId)?;
        data.text = text.into();
        Ok(())
    }

    /// Get the display text of an element.
    pub fn text(&self, id: ElementId) -> DocumentResult<&str> {
        self.elements
            .get(id)
            .map(|d| d.text.as_str())
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Set the native text value of an element.
    ///
    /// This is the state the host environment mutates when the user types
    /// into a text input, before delivering the corresponding event.
    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) -> DocumentResult<()> {
        let data = self
            .elements
            .get_mut(id)
            .ok_or(DocumentError::InvalidElementId)?;
        data.value = value.into();
        Ok(())
    }

    /// Get the native text value of an element.
    pub fn value(&self, id: ElementId) -> DocumentResult<&str> {
        self.elements
            .get(id)
            .map(|d| d.value.as_str())
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Set the native checked state of an element.
    pub fn set_checked(&mut self, id: ElementId, checked: bool) -> DocumentResult<()> {
        let data = self
            .elements
            .get_mut(id)
            .ok_or(DocumentError::InvalidElementId)?;
        data.checked = checked;
        Ok(())
    }

    /// Get the native checked state of an element.
    pub fn checked(&self, id: ElementId) -> DocumentResult<bool> {
        self.elements
            .get(id)
            .map(|d| d.checked)
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Assign the page-wide identifier attribute of an element.
    pub fn set_dom_id(&mut self, id: ElementId, dom_id: impl Into<String>) -> DocumentResult<()> {
        let data = self
            .elements
            .get_mut(id)
            .ok_or(DocumentError::InvalidElementId)?;
        data.dom_id = Some(dom_id.into());
        Ok(())
    }

    /// Get the page-wide identifier attribute of an element.
    pub fn dom_id(&self, id: ElementId) -> DocumentResult<Option<&str>> {
        let data = self.elements.get(id).ok_or(DocumentError::InvalidElementId)?;
        Ok(data.dom_id.as_deref())
    }

    /// Look up an element by its page-wide identifier, searching the whole
    /// document.
    ///
    /// If multiple elements carry the same identifier, an arbitrary one is
    /// returned; the toolbar layer's allocator prevents that situation for
    /// identifiers it generates.
    pub fn element_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, data)| data.dom_id.as_deref() == Some(dom_id))
            .map(|(id, _)| id)
    }

    /// Check whether any element in the subtree rooted at `root` carries the
    /// given page-wide identifier.
    pub fn subtree_has_dom_id(&self, root: ElementId, dom_id: &str) -> DocumentResult<bool> {
        let data = self.elements.get(root).ok_or(DocumentError::InvalidElementId)?;
        if data.dom_id.as_deref() == Some(dom_id) {
            return Ok(true);
        }
        for &child in &data.children {
            if self.subtree_has_dom_id(child, dom_id)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Read the element's current value via the kind-dispatched accessor.
    ///
    /// Checkboxes report their checked state; every other kind reports its
    /// native text value.
    pub fn current_value(&self, id: ElementId) -> DocumentResult<WidgetValue> {
        let data = self.elements.get(id).ok_or(DocumentError::InvalidElementId)?;
        Ok(match data.kind {
            ElementKind::Checkbox => WidgetValue::Toggle(data.checked),
            _ => WidgetValue::Text(data.value.clone()),
        })
    }

    /// Get the number of elements in the document.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Debug dump of the element tree rooted at `root`.
    pub fn dump_tree(&self, root: ElementId) -> DocumentResult<String> {
        let mut output = String::new();
        self.dump_tree_recursive(root, 0, &mut output)?;
        Ok(output)
    }

    fn dump_tree_recursive(
        &self,
        id: ElementId,
        depth: usize,
        output: &mut String,
    ) -> DocumentResult<()> {
        let data = self.elements.get(id).ok_or(DocumentError::InvalidElementId)?;
        let indent = "  ".repeat(depth);
        let dom_id = data.dom_id.as_deref().unwrap_or("-");
        output.push_str(&format!(
            "{}{} id={} text={:?}\n",
            indent, data.kind, dom_id, data.text
        ));
        for &child in &data.children {
            self.dump_tree_recursive(child, depth + 1, output)?;
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`Document`].
///
/// Provides concurrent read access with exclusive write access via `RwLock`.
/// Toolbar construction is single-threaded in practice; the wrapper exists so
/// the document can be handed out as `Arc<Page>` without further ceremony.
pub struct Page {
    inner: RwLock<Document>,
}

impl Page {
    /// Create a new page with an empty document.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Document::new()),
        }
    }

    /// Create a new detached element.
    pub fn create_element(&self, kind: ElementKind) -> ElementId {
        self.inner.write().create_element(kind)
    }

    /// Append a child to a container element.
    pub fn append_child(&self, parent: ElementId, child: ElementId) -> DocumentResult<()> {
        self.inner.write().append_child(parent, child)
    }

    /// Check if an element exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.inner.read().contains(id)
    }

    /// Get the kind of an element.
    pub fn kind(&self, id: ElementId) -> DocumentResult<ElementKind> {
        self.inner.read().kind(id)
    }

    /// Get the parent of an element.
    pub fn parent(&self, id: ElementId) -> DocumentResult<Option<ElementId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of an element (returns owned Vec for thread safety).
    pub fn children(&self, id: ElementId) -> DocumentResult<Vec<ElementId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Set a free-form string attribute.
    pub fn set_attribute(
        &self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> DocumentResult<()> {
        self.inner.write().set_attribute(id, name, value)
    }

    /// Get a free-form string attribute.
    pub fn attribute(&self, id: ElementId, name: &str) -> DocumentResult<Option<String>> {
        self.inner
            .read()
            .attribute(id, name)
            .map(|v| v.map(|s| s.to_string()))
    }

    /// Set the display text of an element.
    pub fn set_text(&self, id: ElementId, text: impl Into<String>) -> DocumentResult<()> {
        self.inner.write().set_text(id, text)
    }

    /// Get the display text of an element.
    pub fn text(&self, id: ElementId) -> DocumentResult<String> {
        self.inner.read().text(id).map(|s| s.to_string())
    }

    /// Set the native text value of an element.
    pub fn set_value(&self, id: ElementId, value: impl Into<String>) -> DocumentResult<()> {
        self.inner.write().set_value(id, value)
    }

    /// Get the native text value of an element.
    pub fn value(&self, id: ElementId) -> DocumentResult<String> {
        self.inner.read().value(id).map(|s| s.to_string())
    }

    /// Set the native checked state of an element.
    pub fn set_checked(&self, id: ElementId, checked: bool) -> DocumentResult<()> {
        self.inner.write().set_checked(id, checked)
    }

    /// Get the native checked state of an element.
    pub fn checked(&self, id: ElementId) -> DocumentResult<bool> {
        self.inner.read().checked(id)
    }

    /// Assign the page-wide identifier attribute of an element.
    pub fn set_dom_id(&self, id: ElementId, dom_id: impl Into<String>) -> DocumentResult<()> {
        self.inner.write().set_dom_id(id, dom_id)
    }

    /// Get the page-wide identifier attribute of an element.
    pub fn dom_id(&self, id: ElementId) -> DocumentResult<Option<String>> {
        self.inner
            .read()
            .dom_id(id)
            .map(|v| v.map(|s| s.to_string()))
    }

    /// Look up an element by its page-wide identifier.
    pub fn element_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.inner.read().element_by_dom_id(dom_id)
    }

    /// Check whether the subtree rooted at `root` contains the identifier.
    pub fn subtree_has_dom_id(&self, root: ElementId, dom_id: &str) -> DocumentResult<bool> {
        self.inner.read().subtree_has_dom_id(root, dom_id)
    }

    /// Read the element's current value via the kind-dispatched accessor.
    pub fn current_value(&self, id: ElementId) -> DocumentResult<WidgetValue> {
        self.inner.read().current_value(id)
    }

    /// Get the number of elements in the document.
    pub fn element_count(&self) -> usize {
        self.inner.read().element_count()
    }

    /// Debug dump of the element tree rooted at `root`.
    pub fn dump_tree(&self, root: ElementId) -> DocumentResult<String> {
        self.inner.read().dump_tree(root)
    }

    /// Access the document with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Document) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the document with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Document) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

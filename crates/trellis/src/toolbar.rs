//! Toolbar assembly.
//!
//! [`ToolbarFactory`] is the public surface callers use to build toolbars:
//! create a container, then add widgets in sequence. Every widget-creation
//! operation runs construct → wire → append, in that fixed order, and
//! mutates the live tree synchronously before returning. The factory holds
//! no back-reference to a toolbar after returning it; containers are owned
//! by the caller's tree.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trellis::{Page, RecordingHost, ToolbarFactory, WidgetConfig};
//! use trellis_core::ElementKind;
//!
//! let page = Arc::new(Page::new());
//! let host = Arc::new(RecordingHost::new());
//! let factory = ToolbarFactory::new(page.clone(), host);
//!
//! let root = page.create_element(ElementKind::Form);
//! let toolbar = factory.create_toolbar(root, "Map tools", "nav", "pluginA")?;
//!
//! factory.button(
//!     &WidgetConfig::new("zoom", "Zoom").on("click", ["clientX", "clientY"]),
//!     "pluginA",
//!     toolbar,
//! )?;
//! factory.gap(&WidgetConfig::new("spacer", ""), "pluginA", toolbar)?;
//! # Ok::<(), trellis::ToolbarError>(())
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use trellis_core::{ElementId, EventObject, Page};

use crate::adapter::EventAdapter;
use crate::config::WidgetConfig;
use crate::delegate::PluginsHost;
use crate::error::Result;
use crate::factory;
use crate::idgen::IdAllocator;

/// Builds declarative toolbars of widgets wired to a single plugins host.
pub struct ToolbarFactory {
    page: Arc<Page>,
    adapter: EventAdapter,
    ids: Mutex<IdAllocator>,
}

impl ToolbarFactory {
    /// Create a factory building into `page` and notifying `host`.
    pub fn new(page: Arc<Page>, host: Arc<dyn PluginsHost>) -> Self {
        Self::with_id_allocator(page, host, IdAllocator::new())
    }

    /// Create a factory with a caller-supplied identifier allocator.
    ///
    /// Tests use this with a seeded allocator to make checkbox identifier
    /// generation deterministic.
    pub fn with_id_allocator(
        page: Arc<Page>,
        host: Arc<dyn PluginsHost>,
        ids: IdAllocator,
    ) -> Self {
        let adapter = EventAdapter::new(page.clone(), host);
        Self {
            page,
            adapter,
            ids: Mutex::new(ids),
        }
    }

    /// The page this factory builds into.
    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    /// Create a toolbar container and append it to `parent`.
    ///
    /// `title`, `kind`, and `source` are set verbatim as attributes; no
    /// validation is performed, empty strings included.
    pub fn create_toolbar(
        &self,
        parent: ElementId,
        title: &str,
        kind: &str,
        source: &str,
    ) -> Result<ElementId> {
        let toolbar = factory::toolbar(&self.page, title, kind, source)?;
        self.page.append_child(parent, toolbar)?;
        tracing::debug!(
            target: "trellis::toolbar",
            ?toolbar,
            title,
            kind,
            source,
            "created toolbar"
        );
        Ok(toolbar)
    }

    /// Add a clickable button labeled with `config.text`.
    pub fn button(&self, config: &WidgetConfig, source: &str, toolbar: ElementId) -> Result<()> {
        let element = factory::button(&self.page, config)?;
        self.install(element, config, source, toolbar)
    }

    /// Add a free-text input with `config.text` as its placeholder.
    pub fn text(&self, config: &WidgetConfig, source: &str, toolbar: ElementId) -> Result<()> {
        let element = factory::text(&self.page, config)?;
        self.install(element, config, source, toolbar)
    }

    /// Add a checkbox and its companion label, linked by a generated
    /// page-unique identifier.
    ///
    /// The identifier is checked against the whole document and against the
    /// toolbar subtree, and retried until unique; once assigned it is never
    /// changed. The label's `for` attribute always equals the checkbox's
    /// identifier. One call appends two children: checkbox, then label.
    pub fn checkbox(&self, config: &WidgetConfig, source: &str, toolbar: ElementId) -> Result<()> {
        let checkbox = factory::checkbox(&self.page)?;
        self.install(checkbox, config, source, toolbar)?;

        let page = self.page.clone();
        let dom_id = self.ids.lock().allocate(|candidate| {
            page.element_by_dom_id(candidate).is_some()
                || page.subtree_has_dom_id(toolbar, candidate).unwrap_or(false)
        });
        self.page.set_dom_id(checkbox, dom_id.as_str())?;
        tracing::trace!(
            target: "trellis::toolbar",
            ?checkbox,
            dom_id,
            widget_id = config.id,
            "assigned checkbox identifier"
        );

        let label = factory::label(&self.page, config.text.as_str(), dom_id.as_str())?;
        self.install(label, config, source, toolbar)
    }

    /// Add a non-interactive spacing element.
    ///
    /// Gaps pass through event wiring like every other widget; a gap config
    /// typically declares no handlers, but the contract does not
    /// special-case empty handler maps.
    pub fn gap(&self, config: &WidgetConfig, source: &str, toolbar: ElementId) -> Result<()> {
        let element = factory::gap(&self.page)?;
        self.install(element, config, source, toolbar)
    }

    /// Deliver a native event to an element.
    ///
    /// This is the seam where the host environment hands events to the
    /// system; see [`EventAdapter::dispatch`](crate::EventAdapter::dispatch)
    /// for the delivery contract.
    pub fn dispatch(
        &self,
        element: ElementId,
        event_type: &str,
        event: &EventObject,
    ) -> Result<bool> {
        self.adapter.dispatch(element, event_type, event)
    }

    /// Wire and append one constructed widget, in that order.
    fn install(
        &self,
        element: ElementId,
        config: &WidgetConfig,
        source: &str,
        toolbar: ElementId,
    ) -> Result<()> {
        self.adapter.attach(element, &config.handle, &config.id, source);
        self.page.append_child(toolbar, element)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::RecordingHost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use trellis_core::{DocumentError, ElementKind, EventValue, WidgetValue};
    use crate::error::ToolbarError;

    fn setup() -> (Arc<Page>, Arc<RecordingHost>, ToolbarFactory, ElementId) {
        let page = Arc::new(Page::new());
        let host = Arc::new(RecordingHost::new());
        let factory = ToolbarFactory::with_id_allocator(
            page.clone(),
            host.clone(),
            IdAllocator::with_rng(StdRng::seed_from_u64(1)),
        );
        let root = page.create_element(ElementKind::Form);
        (page, host, factory, root)
    }

    #[test]
    fn test_create_toolbar_appends_and_tags() {
        let (page, _, factory, root) = setup();
        let toolbar = factory
            .create_toolbar(root, "Tools", "nav", "pluginA")
            .unwrap();

        assert_eq!(page.children(root).unwrap(), vec![toolbar]);
        assert_eq!(
            page.attribute(toolbar, "title").unwrap(),
            Some("Tools".to_string())
        );
        assert_eq!(
            page.attribute(toolbar, "data-source").unwrap(),
            Some("pluginA".to_string())
        );
    }

    #[test]
    fn test_create_toolbar_into_stale_parent_fails() {
        let (_, host, _, root) = setup();
        let other_page = Arc::new(Page::new());
        let factory = ToolbarFactory::new(other_page, host);
        assert_eq!(
            factory.create_toolbar(root, "t", "", ""),
            Err(ToolbarError::Document(DocumentError::InvalidElementId))
        );
    }

    #[test]
    fn test_child_order_matches_call_order() {
        let (page, _, factory, root) = setup();
        let toolbar = factory.create_toolbar(root, "Tools", "", "p").unwrap();

        factory
            .button(&WidgetConfig::new("b", "Go"), "p", toolbar)
            .unwrap();
        factory
            .gap(&WidgetConfig::new("g", ""), "p", toolbar)
            .unwrap();
        factory
            .text(&WidgetConfig::new("t", "type here"), "p", toolbar)
            .unwrap();

        let children = page.children(toolbar).unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(page.kind(children[0]), Ok(ElementKind::Button));
        assert_eq!(page.kind(children[1]), Ok(ElementKind::Gap));
        assert_eq!(page.kind(children[2]), Ok(ElementKind::TextInput));
    }

    #[test]
    fn test_checkbox_appends_pair_in_order() {
        let (page, _, factory, root) = setup();
        let toolbar = factory.create_toolbar(root, "Tools", "", "p").unwrap();

        factory
            .checkbox(&WidgetConfig::new("c", "Enable"), "p", toolbar)
            .unwrap();

        let children = page.children(toolbar).unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(page.kind(children[0]), Ok(ElementKind::Checkbox));
        assert_eq!(page.kind(children[1]), Ok(ElementKind::Label));

        let dom_id = page.dom_id(children[0]).unwrap().expect("id assigned");
        assert_eq!(
            page.attribute(children[1], "for").unwrap(),
            Some(dom_id)
        );
        assert_eq!(page.text(children[1]).unwrap(), "Enable");
    }

    #[test]
    fn test_button_click_round_trip() {
        let (page, host, factory, root) = setup();
        let toolbar = factory.create_toolbar(root, "Tools", "", "pluginA").unwrap();

        factory
            .button(
                &WidgetConfig::new("b1", "Go").on("click", ["clientX", "clientY"]),
                "pluginA",
                toolbar,
            )
            .unwrap();

        let button = page.children(toolbar).unwrap()[0];
        let event = EventObject::new().with("clientX", 10).with("clientY", 20);
        assert_eq!(factory.dispatch(button, "click", &event), Ok(true));

        let seen = host.notifications();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].source, "pluginA");
        assert_eq!(seen[0].widget_id, "b1");
        assert_eq!(seen[0].current_value, WidgetValue::Text("Go".to_string()));
        assert_eq!(
            seen[0].extracted,
            vec![EventValue::Int(10), EventValue::Int(20)]
        );
    }

    #[test]
    fn test_gap_with_no_handlers_stays_silent() {
        let (page, host, factory, root) = setup();
        let toolbar = factory.create_toolbar(root, "Tools", "", "p").unwrap();
        factory
            .gap(&WidgetConfig::new("g", ""), "p", toolbar)
            .unwrap();

        let gap = page.children(toolbar).unwrap()[0];
        assert_eq!(factory.dispatch(gap, "click", &EventObject::new()), Ok(false));
        assert!(host.is_empty());
    }

    #[test]
    fn test_gap_with_declared_handler_is_wired() {
        let (_, host, factory, root) = setup();
        let toolbar = factory.create_toolbar(root, "Tools", "", "p").unwrap();

        // Gaps go through the same wiring as every other widget; a declared
        // handler forwards like any button's would.
        factory
            .gap(
                &WidgetConfig::new("g1", "").on("click", ["clientX"]),
                "p",
                toolbar,
            )
            .unwrap();

        let gap = factory.page().children(toolbar).unwrap()[0];
        let event = EventObject::new().with("clientX", 7);
        assert_eq!(factory.dispatch(gap, "click", &event), Ok(true));

        let seen = host.notifications();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].widget_id, "g1");
        assert_eq!(seen[0].current_value, WidgetValue::Text(String::new()));
        assert_eq!(seen[0].extracted, vec![EventValue::Int(7)]);
    }

    #[test]
    fn test_empty_toolbar_metadata_accepted() {
        let (page, _, factory, root) = setup();
        let toolbar = factory.create_toolbar(root, "", "", "").unwrap();
        assert_eq!(page.attribute(toolbar, "title").unwrap(), Some(String::new()));
        assert_eq!(
            page.attribute(toolbar, "data-type").unwrap(),
            Some(String::new())
        );
    }
}

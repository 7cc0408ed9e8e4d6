//! Widget configuration.
//!
//! A [`WidgetConfig`] is the input to every widget-creation operation: a
//! caller-supplied widget identifier, display text, and a handler map naming
//! which native event types to forward and which event properties to extract
//! for each. Configs are never validated; callers are trusted (an empty id or
//! an empty handler map is accepted verbatim).

/// One handler slot: an event type and the ordered list of event-object
/// property names to extract when that event fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSpec {
    /// Native event type name (`"click"`, `"change"`, ...). Free-form; the
    /// set of event types is open.
    pub event_type: String,
    /// Property names to read off the event object, in extraction order.
    pub properties: Vec<String>,
}

/// Mapping from native event type to the properties to extract on that event.
///
/// Insertion is last-write-wins per event type, matching native single-slot
/// handler assignment: inserting `"click"` twice leaves only the second
/// property list attached.
///
/// # Example
///
/// ```
/// use trellis::HandlerMap;
///
/// let handle = HandlerMap::new()
///     .on("click", ["clientX", "clientY"])
///     .on("change", ["ctrlKey"]);
/// assert_eq!(handle.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerMap {
    specs: Vec<HandlerSpec>,
}

impl HandlerMap {
    /// Create an empty handler map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler slot, builder-style.
    pub fn on<S, I>(mut self, event_type: S, properties: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert(event_type, properties);
        self
    }

    /// Add a handler slot, replacing any existing slot for the same event
    /// type.
    pub fn insert<S, I>(&mut self, event_type: S, properties: I)
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let event_type = event_type.into();
        let properties: Vec<String> = properties.into_iter().map(Into::into).collect();
        if let Some(existing) = self.specs.iter_mut().find(|s| s.event_type == event_type) {
            existing.properties = properties;
        } else {
            self.specs.push(HandlerSpec {
                event_type,
                properties,
            });
        }
    }

    /// Iterate over the handler slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HandlerSpec> {
        self.specs.iter()
    }

    /// The number of handler slots.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no handlers are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Configuration for one widget-creation operation.
#[derive(Debug, Clone, Default)]
pub struct WidgetConfig {
    /// Caller-supplied widget identifier. Must be unique within the toolbar
    /// for correct event attribution; this is not enforced.
    pub id: String,
    /// Display text: a button's label, a text input's placeholder, a
    /// checkbox's label text.
    pub text: String,
    /// Events to forward and the properties to extract for each.
    pub handle: HandlerMap,
}

impl WidgetConfig {
    /// Create a config with the given widget id and display text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            handle: HandlerMap::new(),
        }
    }

    /// Declare a handler, builder-style.
    pub fn on<S, I>(mut self, event_type: S, properties: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.handle.insert(event_type, properties);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = WidgetConfig::new("b1", "Go").on("click", ["clientX", "clientY"]);
        assert_eq!(config.id, "b1");
        assert_eq!(config.text, "Go");
        let spec = config.handle.iter().next().unwrap();
        assert_eq!(spec.event_type, "click");
        assert_eq!(spec.properties, vec!["clientX", "clientY"]);
    }

    #[test]
    fn test_last_write_wins_per_event_type() {
        let handle = HandlerMap::new()
            .on("click", ["clientX"])
            .on("change", ["ctrlKey"])
            .on("click", ["button"]);

        assert_eq!(handle.len(), 2);
        let click = handle.iter().find(|s| s.event_type == "click").unwrap();
        assert_eq!(click.properties, vec!["button"]);
    }

    #[test]
    fn test_empty_config_accepted() {
        let config = WidgetConfig::new("", "");
        assert!(config.handle.is_empty());
    }
}

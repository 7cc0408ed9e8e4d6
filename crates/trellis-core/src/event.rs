//! Native event objects delivered by the host environment.

use std::collections::HashMap;
use std::fmt;

/// A single property value carried by a native event object.
///
/// [`EventValue::Absent`] is the absence marker produced when a handler map
/// names a property the event does not carry; lookups never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum EventValue {
    /// An integer property (`clientX`, `button`, ...).
    Int(i64),
    /// A floating-point property (`deltaY`, ...).
    Float(f64),
    /// A boolean property (`ctrlKey`, `shiftKey`, ...).
    Bool(bool),
    /// A text property (`key`, `code`, ...).
    Text(String),
    /// The named property does not exist on this event.
    Absent,
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

impl From<i64> for EventValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for EventValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for EventValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for EventValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for EventValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// The named properties of one native event occurrence.
///
/// Event type names are free-form strings supplied at dispatch time; the
/// object itself carries only the property bag.
///
/// # Example
///
/// ```
/// use trellis_core::{EventObject, EventValue};
///
/// let event = EventObject::new().with("clientX", 10).with("clientY", 20);
/// assert_eq!(event.property("clientX"), EventValue::Int(10));
/// assert_eq!(event.property("button"), EventValue::Absent);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventObject {
    properties: HashMap<String, EventValue>,
}

impl EventObject {
    /// Create an event object with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, builder-style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<EventValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set a property.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<EventValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Read a property, returning [`EventValue::Absent`] for unknown names.
    pub fn property(&self, name: &str) -> EventValue {
        self.properties
            .get(name)
            .cloned()
            .unwrap_or(EventValue::Absent)
    }

    /// The number of properties on this event.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether this event carries no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let event = EventObject::new()
            .with("clientX", 10)
            .with("key", "Enter")
            .with("ctrlKey", true)
            .with("deltaY", -1.5);

        assert_eq!(event.property("clientX"), EventValue::Int(10));
        assert_eq!(event.property("key"), EventValue::Text("Enter".to_string()));
        assert_eq!(event.property("ctrlKey"), EventValue::Bool(true));
        assert_eq!(event.property("deltaY"), EventValue::Float(-1.5));
    }

    #[test]
    fn test_missing_property_is_absent() {
        let event = EventObject::new();
        assert_eq!(event.property("clientX"), EventValue::Absent);
        assert!(event.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut event = EventObject::new().with("button", 0);
        event.set("button", 2);
        assert_eq!(event.property("button"), EventValue::Int(2));
        assert_eq!(event.len(), 1);
    }
}

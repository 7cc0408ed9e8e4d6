//! The plugins-host delegate contract.
//!
//! Widgets never call the host directly and the host never touches native
//! event objects. Every handled event is translated into one call to
//! [`PluginsHost::toolbar_item_changed`] carrying the owning source, the
//! widget id, the widget's current value, and the extracted event properties
//! in declared order.

use parking_lot::Mutex;
use trellis_core::{EventValue, WidgetValue};

/// The external collaborator receiving toolbar notifications.
///
/// Invoked synchronously, once per handled native event per widget, on
/// whatever thread the host environment delivers events. Implementations
/// must not block.
pub trait PluginsHost: Send + Sync {
    /// A toolbar widget's handled event fired.
    ///
    /// `extracted` holds the event-object properties named by the widget's
    /// handler map for this event type, in declared order;
    /// [`EventValue::Absent`] marks properties the event did not carry.
    fn toolbar_item_changed(
        &self,
        source: &str,
        widget_id: &str,
        current_value: WidgetValue,
        extracted: &[EventValue],
    );
}

/// An owned record of one delegate invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Opaque identifier of the owning source/plugin.
    pub source: String,
    /// The caller-supplied widget identifier.
    pub widget_id: String,
    /// The widget's value at delivery time.
    pub current_value: WidgetValue,
    /// Extracted event properties, in handler-map order.
    pub extracted: Vec<EventValue>,
}

/// A [`PluginsHost`] that records every notification it receives.
///
/// Useful as a test double and for debugging toolbar wiring.
#[derive(Default)]
pub struct RecordingHost {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingHost {
    /// Create an empty recording host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of all notifications received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// The number of notifications received so far.
    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    /// Whether no notifications have been received.
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }
}

impl PluginsHost for RecordingHost {
    fn toolbar_item_changed(
        &self,
        source: &str,
        widget_id: &str,
        current_value: WidgetValue,
        extracted: &[EventValue],
    ) {
        self.notifications.lock().push(Notification {
            source: source.to_string(),
            widget_id: widget_id.to_string(),
            current_value,
            extracted: extracted.to_vec(),
        });
    }
}

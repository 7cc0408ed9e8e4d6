//! Event adapter: translates native events into delegate notifications.
//!
//! For each widget the adapter keeps an explicit registration record (widget
//! id, owning source, one handler slot per event type) instead of capturing
//! state in per-listener closures. When the host environment delivers an
//! event via [`EventAdapter::dispatch`], the adapter reads the element's
//! current value through the kind-dispatched accessor, extracts the declared
//! event properties in order, and invokes the plugins host with the
//! normalized payload. This is the system's only abstraction boundary:
//! widgets never call the host, the host never sees raw events.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use trellis_core::{ElementId, EventObject, EventValue, Page};

use crate::config::HandlerMap;
use crate::delegate::PluginsHost;
use crate::error::Result;

/// One handler slot recorded for an element.
#[derive(Clone)]
struct HandlerSlot {
    event_type: String,
    properties: Vec<String>,
}

/// The registration record for one wired widget.
#[derive(Clone)]
struct WidgetRegistration {
    widget_id: String,
    source: String,
    /// One slot per event type, in declaration order.
    slots: Vec<HandlerSlot>,
}

/// Attaches handler registrations to elements and dispatches native events
/// to the plugins host.
pub struct EventAdapter {
    page: Arc<Page>,
    host: Arc<dyn PluginsHost>,
    registrations: Mutex<HashMap<ElementId, WidgetRegistration>>,
}

impl EventAdapter {
    /// Create an adapter forwarding to the given plugins host.
    pub fn new(page: Arc<Page>, host: Arc<dyn PluginsHost>) -> Self {
        Self {
            page,
            host,
            registrations: Mutex::new(HashMap::new()),
        }
    }

    /// Record handler slots for an element.
    ///
    /// One slot is kept per event type; a repeated event type within the map
    /// is last-write-wins, and re-attaching to the same element replaces the
    /// whole registration (native single-slot handler assignment, not
    /// multi-listener accumulation). An empty handler map still registers
    /// the widget; it simply matches no events.
    pub fn attach(&self, element: ElementId, handle: &HandlerMap, widget_id: &str, source: &str) {
        let mut slots: Vec<HandlerSlot> = Vec::new();
        for spec in handle.iter() {
            if let Some(slot) = slots.iter_mut().find(|s| s.event_type == spec.event_type) {
                slot.properties = spec.properties.clone();
            } else {
                slots.push(HandlerSlot {
                    event_type: spec.event_type.clone(),
                    properties: spec.properties.clone(),
                });
            }
        }
        tracing::trace!(
            target: "trellis::adapter",
            ?element,
            widget_id,
            source,
            slot_count = slots.len(),
            "attached event handlers"
        );
        self.registrations.lock().insert(
            element,
            WidgetRegistration {
                widget_id: widget_id.to_string(),
                source: source.to_string(),
                slots,
            },
        );
    }

    /// Deliver a native event to an element.
    ///
    /// Returns `Ok(true)` if the element had a handler slot for the event
    /// type and the delegate was invoked, `Ok(false)` if the event was
    /// unhandled (no registration, or no slot for this event type). The
    /// current value is read at delivery time, after the environment has
    /// applied any native state mutation for the event.
    pub fn dispatch(
        &self,
        element: ElementId,
        event_type: &str,
        event: &EventObject,
    ) -> Result<bool> {
        // Copy the matched slot out before invoking anything; the delegate
        // may re-enter the adapter to build more widgets.
        let matched = {
            let registrations = self.registrations.lock();
            registrations.get(&element).and_then(|registration| {
                registration
                    .slots
                    .iter()
                    .find(|slot| slot.event_type == event_type)
                    .map(|slot| {
                        (
                            registration.widget_id.clone(),
                            registration.source.clone(),
                            slot.properties.clone(),
                        )
                    })
            })
        };

        let Some((widget_id, source, properties)) = matched else {
            return Ok(false);
        };

        let current_value = self.page.current_value(element)?;
        let extracted: Vec<EventValue> = properties
            .iter()
            .map(|name| event.property(name))
            .collect();

        tracing::debug!(
            target: "trellis::adapter",
            %source,
            %widget_id,
            event_type,
            ?current_value,
            "forwarding toolbar notification"
        );
        self.host
            .toolbar_item_changed(&source, &widget_id, current_value, &extracted);
        Ok(true)
    }
}

//! Element factory: pure construction of one native element per widget kind.
//!
//! No event wiring happens here; the [`EventAdapter`](crate::EventAdapter)
//! attaches listeners and the [`ToolbarFactory`](crate::ToolbarFactory)
//! appends to the container. Each function is stateless and idempotent for a
//! given config; the checkbox identifier randomness lives in the assembler,
//! not here.

use trellis_core::{DocumentResult, ElementId, ElementKind, Page};

use crate::config::WidgetConfig;

/// Build a toolbar container: a form element carrying the display title, a
/// free-form classification, and the owning source as attributes.
pub fn toolbar(page: &Page, title: &str, kind: &str, source: &str) -> DocumentResult<ElementId> {
    let element = page.create_element(ElementKind::Form);
    page.set_attribute(element, "class", "toolbar")?;
    page.set_attribute(element, "title", title)?;
    page.set_attribute(element, "data-type", kind)?;
    page.set_attribute(element, "data-source", source)?;
    Ok(element)
}

/// Build a clickable button whose label is `config.text`.
pub fn button(page: &Page, config: &WidgetConfig) -> DocumentResult<ElementId> {
    let element = page.create_element(ElementKind::Button);
    page.set_attribute(element, "type", "button")?;
    page.set_text(element, config.text.as_str())?;
    // A button's current value is its label text.
    page.set_value(element, config.text.as_str())?;
    Ok(element)
}

/// Build a free-text input whose placeholder is `config.text`.
pub fn text(page: &Page, config: &WidgetConfig) -> DocumentResult<ElementId> {
    let element = page.create_element(ElementKind::TextInput);
    page.set_attribute(element, "placeholder", config.text.as_str())?;
    Ok(element)
}

/// Build a checkbox input. The text goes on the companion label, not here.
pub fn checkbox(page: &Page) -> DocumentResult<ElementId> {
    Ok(page.create_element(ElementKind::Checkbox))
}

/// Build a label associated with another element via its `for` attribute.
pub fn label(page: &Page, text: &str, for_id: &str) -> DocumentResult<ElementId> {
    let element = page.create_element(ElementKind::Label);
    page.set_attribute(element, "for", for_id)?;
    page.set_text(element, text)?;
    Ok(element)
}

/// Build a non-interactive spacing element.
pub fn gap(page: &Page) -> DocumentResult<ElementId> {
    let element = page.create_element(ElementKind::Gap);
    page.set_attribute(element, "class", "gap")?;
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_construction() {
        let page = Page::new();
        let config = WidgetConfig::new("b1", "Run");
        let element = button(&page, &config).unwrap();

        assert_eq!(page.kind(element), Ok(ElementKind::Button));
        assert_eq!(page.text(element).unwrap(), "Run");
        assert_eq!(page.value(element).unwrap(), "Run");
        assert_eq!(
            page.attribute(element, "type").unwrap(),
            Some("button".to_string())
        );
    }

    #[test]
    fn test_text_uses_placeholder() {
        let page = Page::new();
        let config = WidgetConfig::new("t1", "Search...");
        let element = text(&page, &config).unwrap();

        assert_eq!(page.kind(element), Ok(ElementKind::TextInput));
        assert_eq!(
            page.attribute(element, "placeholder").unwrap(),
            Some("Search...".to_string())
        );
        // The placeholder is display text only; the value starts empty.
        assert_eq!(page.value(element).unwrap(), "");
    }

    #[test]
    fn test_label_links_for_attribute() {
        let page = Page::new();
        let element = label(&page, "Enabled", "c17").unwrap();
        assert_eq!(page.kind(element), Ok(ElementKind::Label));
        assert_eq!(
            page.attribute(element, "for").unwrap(),
            Some("c17".to_string())
        );
        assert_eq!(page.text(element).unwrap(), "Enabled");
    }

    #[test]
    fn test_toolbar_attributes_verbatim() {
        let page = Page::new();
        let element = toolbar(&page, "", "nav", "pluginA").unwrap();
        assert_eq!(page.kind(element), Ok(ElementKind::Form));
        assert_eq!(page.attribute(element, "title").unwrap(), Some(String::new()));
        assert_eq!(
            page.attribute(element, "data-type").unwrap(),
            Some("nav".to_string())
        );
        assert_eq!(
            page.attribute(element, "data-source").unwrap(),
            Some("pluginA".to_string())
        );
    }

    #[test]
    fn test_construction_is_detached() {
        let page = Page::new();
        let element = gap(&page).unwrap();
        assert_eq!(page.parent(element), Ok(None));
    }
}

//! Canned page layouts shared by the integration suites.

use pagefx_core::{ElementBox, Point, Size};

use crate::page::{FakeElement, FakePage};

/// Landing page with revealable sections, a back-to-top control and buttons.
#[derive(Debug, Clone)]
pub struct LandingPage {
    /// The page surface.
    pub page: FakePage,
    /// Elements carrying the `fade-in` marker, in document order.
    pub sections: Vec<FakeElement>,
    /// The `backToTop` control.
    pub back_to_top: FakeElement,
    /// Wide call-to-action button at (40, 300), 160x48.
    pub primary_button: FakeElement,
    /// Square icon button at (400, 120), 32x32.
    pub icon_button: FakeElement,
}

/// Build the landing page layout. The document is not yet marked parsed.
#[must_use]
pub fn landing_page() -> LandingPage {
    let page = FakePage::new();
    let sections = (0..3)
        .map(|_| page.add_element("section", &["fade-in"]))
        .collect();
    let primary_button = page.add_element("button", &["btn", "btn-primary"]);
    primary_button.set_metrics(ElementBox {
        origin: Point::new(40.0, 300.0),
        size: Size::new(160.0, 48.0),
    });
    let icon_button = page.add_element("a", &["btn"]);
    icon_button.set_metrics(ElementBox {
        origin: Point::new(400.0, 120.0),
        size: Size::new(32.0, 32.0),
    });
    let back_to_top = page.add_element_with_id("button", "backToTop");

    LandingPage {
        page,
        sections,
        back_to_top,
        primary_button,
        icon_button,
    }
}

//! Click ripple markers on interactive buttons.
//!
//! Each button holds at most one ripple marker. A new click removes the
//! previous marker straight away, even mid-animation, then appends the new
//! one. Markers are never removed on a timer.

use tracing::{debug, info, warn};

use crate::config::RippleSettings;
use crate::error::SurfaceError;
use crate::surface::{ClickPoint, ElementBox, ElementFactory, EventHub, MarkerQuery, PageElement};

/// Size and placement of a ripple marker inside its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Circle diameter: the larger button dimension.
    pub diameter: f64,
    /// Left edge relative to the button origin.
    pub left: f64,
    /// Top edge relative to the button origin.
    pub top: f64,
}

impl RippleGeometry {
    /// Centre a circle on `click`, relative to `button`. A button that has
    /// not been laid out yields a zero-diameter circle.
    #[must_use]
    pub fn for_click(button: ElementBox, click: ClickPoint) -> Self {
        let diameter = button.size.max_side();
        let radius = diameter / 2.0;
        Self {
            diameter,
            left: click.x - button.origin.x - radius,
            top: click.y - button.origin.y - radius,
        }
    }

    /// Inline style declarations for the marker.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 4] {
        [
            ("width", px(self.diameter)),
            ("height", px(self.diameter)),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ]
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Attaches click ripples to every interactive button.
#[derive(Debug, Clone)]
pub struct RippleEffect {
    settings: RippleSettings,
}

impl RippleEffect {
    /// Build the behavior from its settings.
    #[must_use]
    pub const fn new(settings: RippleSettings) -> Self {
        Self { settings }
    }

    /// Register a click handler on every marked button. Returns the number
    /// of buttons wired.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Listener`] if a click handler cannot be registered.
    pub fn install<S>(&self, surface: &S) -> Result<usize, SurfaceError>
    where
        S: MarkerQuery + ElementFactory + EventHub,
    {
        let buttons = surface.query_marker(&self.settings.button_class);
        for button in &buttons {
            let effect = self.clone();
            let page = surface.clone();
            let owner = button.clone();
            surface.on_click(
                button,
                Box::new(move |click| {
                    if let Err(err) = effect.spawn(&page, &owner, click) {
                        warn!(error = %err, "failed to spawn ripple");
                    }
                }),
            )?;
        }
        info!(
            count = buttons.len(),
            marker = %self.settings.button_class,
            "button ripples armed"
        );
        Ok(buttons.len())
    }

    /// Click handler: build a marker centred on `click`, drop any marker the
    /// button still holds, and append the new one.
    ///
    /// # Errors
    ///
    /// Returns the first [`SurfaceError`] hit while creating or inserting the
    /// marker.
    pub fn spawn<S: ElementFactory>(
        &self,
        surface: &S,
        button: &S::Element,
        click: ClickPoint,
    ) -> Result<S::Element, SurfaceError> {
        let geometry = RippleGeometry::for_click(button.box_metrics(), click);
        let marker = surface.create_element(&self.settings.element_tag)?;
        for (property, value) in geometry.declarations() {
            marker.set_style(property, &value)?;
        }
        marker.add_class(&self.settings.ripple_class)?;

        if let Some(previous) = button.first_descendant_with_class(&self.settings.ripple_class) {
            previous.detach();
        }
        button.append_child(&marker)?;
        debug!(
            diameter = geometry.diameter,
            left = geometry.left,
            top = geometry.top,
            "ripple spawned"
        );
        Ok(marker)
    }
}

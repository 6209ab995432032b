//! Back-to-top control visibility and the scroll-to-top action.

use tracing::{trace, warn};

use crate::config::BackToTopSettings;
use crate::error::SurfaceError;
use crate::surface::{IdQuery, PageElement, ScrollBehavior, ScrollRequest, Viewport};

/// Whether the back-to-top control should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Control carries the visible class.
    Shown,
    /// Control lacks the visible class.
    Hidden,
}

/// Toggles the floating back-to-top control from the scroll offset.
#[derive(Debug, Clone)]
pub struct BackToTop {
    settings: BackToTopSettings,
}

impl BackToTop {
    /// Build the behavior from its settings.
    #[must_use]
    pub const fn new(settings: BackToTopSettings) -> Self {
        Self { settings }
    }

    /// Visibility for a scroll offset. Shown only strictly above the threshold.
    #[must_use]
    pub fn visibility_for(&self, offset: f64) -> Visibility {
        if offset > self.settings.scroll_threshold {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    /// Scroll handler: look up the control and apply the visibility for the
    /// current offset. Missing controls are ignored.
    pub fn sync<S>(&self, surface: &S)
    where
        S: IdQuery + Viewport,
    {
        let Some(control) = surface.query_id(&self.settings.element_id) else {
            return;
        };
        let offset = surface.scroll_offset();
        let visibility = self.visibility_for(offset);
        trace!(offset, ?visibility, "back-to-top visibility");
        if let Err(err) = self.apply(&control, visibility) {
            warn!(error = %err, "failed to toggle back-to-top control");
        }
    }

    /// Add or remove the visible class on `control`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ClassList`] if the class list rejects the change.
    pub fn apply<E: PageElement>(
        &self,
        control: &E,
        visibility: Visibility,
    ) -> Result<(), SurfaceError> {
        match visibility {
            Visibility::Shown => control.add_class(&self.settings.visible_class),
            Visibility::Hidden => control.remove_class(&self.settings.visible_class),
        }
    }
}

/// Request a smooth scroll back to the top of the page.
pub fn scroll_to_top<S: Viewport>(surface: &S) {
    surface.scroll_to(ScrollRequest {
        top: 0.0,
        behavior: ScrollBehavior::Smooth,
    });
}

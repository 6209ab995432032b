//! Fade-in reveal for marked elements as they scroll into view.
//!
//! Concealed elements start transparent and pushed down; the first time an
//! element crosses the visibility threshold it is restored for good.

use tracing::{debug, info, warn};

use crate::config::{RevealSettings, css_seconds};
use crate::error::SurfaceError;
use crate::surface::{IntersectionEntry, IntersectionWatch, MarkerQuery, PageElement};

/// Scroll-triggered reveal of elements carrying the marker class.
#[derive(Debug, Clone)]
pub struct RevealOnScroll {
    settings: RevealSettings,
}

impl RevealOnScroll {
    /// Build the behavior from its settings.
    #[must_use]
    pub const fn new(settings: RevealSettings) -> Self {
        Self { settings }
    }

    /// Conceal every marked element and register one shared watcher over
    /// them. Returns the number of elements being watched.
    ///
    /// The watcher is registered even when no element matches.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Observer`] when the watcher cannot be registered.
    pub fn install<S>(&self, surface: &S) -> Result<usize, SurfaceError>
    where
        S: MarkerQuery + IntersectionWatch,
    {
        let targets = surface.query_marker(&self.settings.marker_class);
        for element in &targets {
            if let Err(err) = self.conceal(element) {
                warn!(error = %err, "failed to conceal revealable element");
            }
        }

        surface.watch_intersections(
            &targets,
            self.settings.threshold,
            Box::new(|entries: &[IntersectionEntry<S::Element>]| reveal_entries(entries)),
        )?;
        info!(
            count = targets.len(),
            marker = %self.settings.marker_class,
            "scroll reveal armed"
        );
        Ok(targets.len())
    }

    /// Put an element in its initial hidden, offset state with a transition
    /// so the later reveal animates.
    ///
    /// # Errors
    ///
    /// Returns the first style write the element rejects.
    pub fn conceal<E: PageElement>(&self, element: &E) -> Result<(), SurfaceError> {
        element.set_style("opacity", "0")?;
        element.set_style(
            "transform",
            &format!("translateY({}px)", self.settings.initial_offset_px),
        )?;
        element.set_style(
            "transition",
            &format!(
                "all {} {}",
                css_seconds(self.settings.transition),
                self.settings.easing
            ),
        )
    }
}

/// Reveal every entry that is currently intersecting. Entries leaving the
/// viewport are left as they are.
pub fn reveal_entries<E: PageElement>(entries: &[IntersectionEntry<E>]) {
    for entry in entries.iter().filter(|entry| entry.is_intersecting) {
        match reveal(&entry.target) {
            Ok(()) => debug!("revealed element"),
            Err(err) => warn!(error = %err, "failed to reveal element"),
        }
    }
}

/// Make an element fully visible at its natural position.
///
/// # Errors
///
/// Returns the first style write the element rejects.
pub fn reveal<E: PageElement>(element: &E) -> Result<(), SurfaceError> {
    element.set_style("opacity", "1")?;
    element.set_style("transform", "translateY(0)")
}

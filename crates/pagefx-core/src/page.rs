//! Page-load bootstrap wiring every effect to its trigger.
//!
//! # Design
//! - The stylesheet is injected at install time, before page-ready.
//! - The scroll listener is registered at install time and never removed.
//! - Reveal and ripple wiring wait for page-ready so the marked elements exist.

use tracing::warn;

use crate::back_to_top::{self, BackToTop};
use crate::config::EffectsSettings;
use crate::error::Result;
use crate::reveal::RevealOnScroll;
use crate::ripple::RippleEffect;
use crate::styles::StyleInjector;
use crate::surface::{
    ElementFactory, EventHub, IdQuery, IntersectionWatch, MarkerQuery, StyleSink, Viewport,
};

/// All page effects, built from one validated settings value.
#[derive(Debug, Clone)]
pub struct PageEffects {
    styles: StyleInjector,
    reveal: RevealOnScroll,
    back_to_top: BackToTop,
    ripple: RippleEffect,
}

impl PageEffects {
    /// Validate `settings` and build every effect from them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PageFxError::Config`] when validation fails.
    pub fn new(settings: EffectsSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            styles: StyleInjector::new(&settings),
            reveal: RevealOnScroll::new(settings.reveal),
            back_to_top: BackToTop::new(settings.back_to_top),
            ripple: RippleEffect::new(settings.ripple),
        })
    }

    /// Install every effect on `surface`. Call once per page load.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PageFxError::Surface`] if the stylesheet cannot be
    /// injected or a listener cannot be registered. Failures while wiring
    /// reveal and ripples at page-ready are logged instead, since no caller
    /// is left to receive them.
    pub fn install<S>(&self, surface: &S) -> Result<()>
    where
        S: MarkerQuery
            + IdQuery
            + StyleSink
            + ElementFactory
            + IntersectionWatch
            + Viewport
            + EventHub,
    {
        self.styles.inject(surface)?;

        let control = self.back_to_top.clone();
        let page = surface.clone();
        surface.on_scroll(Box::new(move || control.sync(&page)))?;

        let reveal = self.reveal.clone();
        let ripple = self.ripple.clone();
        let page = surface.clone();
        surface.on_ready(Box::new(move || {
            if let Err(err) = reveal.install(&page) {
                warn!(error = %err, "scroll reveal unavailable");
            }
            if let Err(err) = ripple.install(&page) {
                warn!(error = %err, "button ripples unavailable");
            }
        }))?;
        Ok(())
    }

    /// Smoothly scroll `surface` back to the top.
    pub fn scroll_to_top<S: Viewport>(surface: &S) {
        back_to_top::scroll_to_top(surface);
    }

    /// Stylesheet this instance injects.
    #[must_use]
    pub fn stylesheet(&self) -> &str {
        self.styles.css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageFxError;

    #[test]
    fn invalid_settings_are_rejected_before_install() {
        let mut settings = EffectsSettings::default();
        settings.reveal.marker_class = String::new();
        assert!(matches!(
            PageEffects::new(settings),
            Err(PageFxError::Config(_))
        ));
    }

    #[test]
    fn default_effects_render_stylesheet() -> Result<()> {
        let effects = PageEffects::new(EffectsSettings::default())?;
        assert!(effects.stylesheet().contains("@keyframes ripple"));
        Ok(())
    }
}

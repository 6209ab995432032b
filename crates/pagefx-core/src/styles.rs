//! Stylesheet backing the ripple markers and the back-to-top control.

use tracing::info;

use crate::config::{EffectsSettings, css_seconds};
use crate::error::SurfaceError;
use crate::surface::StyleSink;

/// Renders and injects the effect stylesheet.
#[derive(Debug, Clone)]
pub struct StyleInjector {
    css: String,
}

impl StyleInjector {
    /// Render the stylesheet for `settings`.
    #[must_use]
    pub fn new(settings: &EffectsSettings) -> Self {
        Self {
            css: render(settings),
        }
    }

    /// Rendered stylesheet text.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Append the stylesheet to the page. Call once per page load.
    ///
    /// # Errors
    ///
    /// Propagates the [`SurfaceError`] raised by the style sink.
    pub fn inject<S: StyleSink>(&self, surface: &S) -> Result<(), SurfaceError> {
        surface.append_style_block(&self.css)?;
        info!(bytes = self.css.len(), "effect stylesheet injected");
        Ok(())
    }
}

fn render(settings: &EffectsSettings) -> String {
    let ripple = &settings.ripple;
    let control = &settings.back_to_top;
    format!(
        r"
  .{ripple_class} {{
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    animation: {keyframes} {ripple_duration} linear;
    transform: scale(0);
    pointer-events: none;
  }}
  @keyframes {keyframes} {{
    to {{
      transform: scale({scale});
      opacity: 0;
    }}
  }}
  .{button_class} {{
    position: relative;
    overflow: hidden;
  }}
  #{control_id} {{
    position: fixed;
    bottom: 25px;
    right: 25px;
    background: #0d6efd;
    color: #fff;
    border: none;
    border-radius: 50%;
    width: 44px;
    height: 44px;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(0,0,0,0.2);
    opacity: 0;
    visibility: hidden;
    transition: all {control_transition} ease;
    z-index: 999;
  }}
  #{control_id}.{visible_class} {{
    opacity: 1;
    visibility: visible;
  }}
",
        ripple_class = ripple.ripple_class,
        keyframes = ripple.keyframes,
        ripple_duration = css_seconds(ripple.duration),
        scale = ripple.final_scale,
        button_class = ripple.button_class,
        control_id = control.element_id,
        control_transition = css_seconds(control.transition),
        visible_class = control.visible_class,
    )
}

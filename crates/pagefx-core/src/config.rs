//! Typed settings for the page effects.
//!
//! # Design
//! - Pages get no configuration surface; [`EffectsSettings::default`] carries
//!   the fixed values every behavior and the injected stylesheet read.
//! - Selectors used by the handlers and by the stylesheet come from the same
//!   fields so they cannot drift apart.

use std::time::Duration;

use crate::error::ConfigError;

/// Marker class flagging elements for the scroll reveal.
pub const DEFAULT_REVEAL_MARKER: &str = "fade-in";
/// Fraction of an element's area that must be visible before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;
/// Initial downward offset of concealed elements, in CSS pixels.
pub const DEFAULT_REVEAL_OFFSET_PX: f64 = 20.0;
/// Identifier of the floating back-to-top control.
pub const DEFAULT_BACK_TO_TOP_ID: &str = "backToTop";
/// Class toggled on the back-to-top control while it should be shown.
pub const DEFAULT_VISIBLE_CLASS: &str = "show";
/// Scroll offset the page must exceed before the control is shown.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 200.0;
/// Marker class for buttons that receive a ripple.
pub const DEFAULT_BUTTON_MARKER: &str = "btn";
/// Class carried by ripple markers.
pub const DEFAULT_RIPPLE_CLASS: &str = "ripple";

/// Complete settings for every page effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EffectsSettings {
    /// Scroll reveal settings.
    pub reveal: RevealSettings,
    /// Back-to-top control settings.
    pub back_to_top: BackToTopSettings,
    /// Button ripple settings.
    pub ripple: RippleSettings,
}

/// Settings for [`crate::RevealOnScroll`].
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSettings {
    /// Marker class selecting revealable elements.
    pub marker_class: String,
    /// Visible-area ratio that triggers the reveal.
    pub threshold: f64,
    /// Vertical offset applied while concealed, in CSS pixels.
    pub initial_offset_px: f64,
    /// Duration of the reveal transition.
    pub transition: Duration,
    /// CSS easing function for the reveal transition.
    pub easing: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_REVEAL_MARKER.to_string(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
            initial_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            transition: Duration::from_millis(800),
            easing: "ease".to_string(),
        }
    }
}

/// Settings for [`crate::BackToTop`].
#[derive(Debug, Clone, PartialEq)]
pub struct BackToTopSettings {
    /// Identifier of the control element.
    pub element_id: String,
    /// Class added while the control is visible.
    pub visible_class: String,
    /// Offset strictly above which the control is visible.
    pub scroll_threshold: f64,
    /// Duration of the show/hide transition in the stylesheet.
    pub transition: Duration,
}

impl Default for BackToTopSettings {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_BACK_TO_TOP_ID.to_string(),
            visible_class: DEFAULT_VISIBLE_CLASS.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            transition: Duration::from_millis(400),
        }
    }
}

/// Settings for [`crate::RippleEffect`].
#[derive(Debug, Clone, PartialEq)]
pub struct RippleSettings {
    /// Marker class selecting interactive buttons.
    pub button_class: String,
    /// Class carried by each ripple marker.
    pub ripple_class: String,
    /// Name of the keyframes animation.
    pub keyframes: String,
    /// Tag used when creating ripple markers.
    pub element_tag: String,
    /// Duration of the expand/fade animation.
    pub duration: Duration,
    /// Scale the marker reaches at the end of the animation.
    pub final_scale: f64,
}

impl Default for RippleSettings {
    fn default() -> Self {
        Self {
            button_class: DEFAULT_BUTTON_MARKER.to_string(),
            ripple_class: DEFAULT_RIPPLE_CLASS.to_string(),
            keyframes: DEFAULT_RIPPLE_CLASS.to_string(),
            element_tag: "span".to_string(),
            duration: Duration::from_millis(600),
            final_scale: 4.0,
        }
    }
}

impl EffectsSettings {
    /// Check every field for a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reveal = &self.reveal;
        name("reveal", "marker_class", &reveal.marker_class)?;
        name("reveal", "easing", &reveal.easing)?;
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(out_of_range(
                "reveal",
                "threshold",
                reveal.threshold,
                "must be within [0, 1]",
            ));
        }
        non_negative("reveal", "initial_offset_px", reveal.initial_offset_px)?;
        positive_duration("reveal", "transition", reveal.transition)?;

        let control = &self.back_to_top;
        name("back_to_top", "element_id", &control.element_id)?;
        name("back_to_top", "visible_class", &control.visible_class)?;
        non_negative("back_to_top", "scroll_threshold", control.scroll_threshold)?;
        positive_duration("back_to_top", "transition", control.transition)?;

        let ripple = &self.ripple;
        name("ripple", "button_class", &ripple.button_class)?;
        name("ripple", "ripple_class", &ripple.ripple_class)?;
        name("ripple", "keyframes", &ripple.keyframes)?;
        name("ripple", "element_tag", &ripple.element_tag)?;
        positive_duration("ripple", "duration", ripple.duration)?;
        if !ripple.final_scale.is_finite() || ripple.final_scale <= 0.0 {
            return Err(out_of_range(
                "ripple",
                "final_scale",
                ripple.final_scale,
                "must be a positive number",
            ));
        }
        Ok(())
    }
}

fn name(section: &'static str, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidName {
            section,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn non_negative(section: &'static str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(out_of_range(
            section,
            field,
            value,
            "must be a finite, non-negative number",
        ))
    }
}

fn positive_duration(
    section: &'static str,
    field: &'static str,
    value: Duration,
) -> Result<(), ConfigError> {
    if value.is_zero() {
        return Err(ConfigError::OutOfRange {
            section,
            field,
            value: format!("{value:?}"),
            reason: "must be longer than zero",
        });
    }
    Ok(())
}

fn out_of_range(
    section: &'static str,
    field: &'static str,
    value: f64,
    reason: &'static str,
) -> ConfigError {
    ConfigError::OutOfRange {
        section,
        field,
        value: value.to_string(),
        reason,
    }
}

/// Render a duration the way CSS expects it (`0.8s`).
pub(crate) fn css_seconds(duration: Duration) -> String {
    format!("{}s", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(EffectsSettings::default().validate(), Ok(()));
    }

    #[test]
    fn defaults_match_page_contract() {
        let settings = EffectsSettings::default();
        assert_eq!(settings.reveal.marker_class, "fade-in");
        assert_eq!(settings.back_to_top.element_id, "backToTop");
        assert_eq!(settings.ripple.button_class, "btn");
        assert!((settings.reveal.threshold - 0.2).abs() < f64::EPSILON);
        assert!((settings.back_to_top.scroll_threshold - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn threshold_outside_unit_range_is_rejected() {
        let mut settings = EffectsSettings::default();
        settings.reveal.threshold = 1.5;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::OutOfRange {
                section: "reveal",
                field: "threshold",
                ..
            })
        ));

        settings.reveal.threshold = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn names_with_whitespace_are_rejected() {
        let mut settings = EffectsSettings::default();
        settings.ripple.button_class = "btn primary".to_string();
        assert_eq!(
            settings.validate(),
            Err(ConfigError::InvalidName {
                section: "ripple",
                field: "button_class",
                value: "btn primary".to_string(),
            })
        );

        let mut settings = EffectsSettings::default();
        settings.back_to_top.element_id = String::new();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidName {
                field: "element_id",
                ..
            })
        ));
    }

    #[test]
    fn negative_scroll_threshold_and_zero_durations_are_rejected() {
        let mut settings = EffectsSettings::default();
        settings.back_to_top.scroll_threshold = -1.0;
        assert!(settings.validate().is_err());

        let mut settings = EffectsSettings::default();
        settings.ripple.duration = Duration::ZERO;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::OutOfRange {
                field: "duration",
                ..
            })
        ));

        let mut settings = EffectsSettings::default();
        settings.ripple.final_scale = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn css_seconds_formats_fractional_values() {
        assert_eq!(css_seconds(Duration::from_millis(800)), "0.8s");
        assert_eq!(css_seconds(Duration::from_millis(600)), "0.6s");
        assert_eq!(css_seconds(Duration::from_secs(2)), "2s");
    }
}

//! Wasm entry point and the global scroll-to-top action.

use anyhow::{Context, anyhow};
use pagefx_core::{EffectsSettings, PageEffects};
use tracing::info;
use wasm_bindgen::prelude::*;

use crate::surface::{WebSurface, describe};
use crate::telemetry::{LoggingConfig, init_logging};

const GLOBAL_SCROLL_TO_TOP: &str = "scrollToTop";

/// Module start hook: install logging and every page effect.
///
/// # Errors
///
/// Returns the boot failure rendered as a `JsValue` string.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot().map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

/// Smoothly scroll the page back to the top.
#[wasm_bindgen(js_name = scrollToTop)]
pub fn scroll_to_top() {
    if let Some(surface) = WebSurface::current() {
        PageEffects::scroll_to_top(&surface);
    }
}

fn boot() -> anyhow::Result<()> {
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        gloo::console::warn!(format!("page effects logging disabled: {err:#}"));
    }

    let surface = WebSurface::current().context("page effects need a window with a document")?;
    let effects = PageEffects::new(EffectsSettings::default())?;
    effects.install(&surface)?;
    expose_scroll_to_top(&surface)?;
    info!("page effects installed");
    Ok(())
}

/// Assign `window.scrollToTop` so inline `onclick` markup can reach it.
fn expose_scroll_to_top(surface: &WebSurface) -> anyhow::Result<()> {
    let page = surface.clone();
    let action = Closure::<dyn Fn()>::new(move || PageEffects::scroll_to_top(&page));
    let target: &JsValue = surface.window().as_ref();
    js_sys::Reflect::set(
        target,
        &JsValue::from_str(GLOBAL_SCROLL_TO_TOP),
        action.as_ref(),
    )
    .map_err(|err| anyhow!("failed to expose {GLOBAL_SCROLL_TO_TOP}: {}", describe(&err)))?;
    action.forget();
    Ok(())
}

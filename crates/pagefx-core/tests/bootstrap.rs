use pagefx_core::{
    EffectsSettings, PageEffects, PageFxError, Point, ScrollBehavior, SurfaceError,
};
use pagefx_test_support::FakePage;
use pagefx_test_support::fixtures::landing_page;

#[test]
fn install_injects_stylesheet_once_before_ready() -> anyhow::Result<()> {
    let landing = landing_page();
    let effects = PageEffects::new(EffectsSettings::default())?;

    effects.install(&landing.page)?;

    let blocks = landing.page.style_blocks();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains("@keyframes ripple"));
    assert!(blocks[0].contains("#backToTop.show"));
    assert_eq!(blocks[0], effects.stylesheet());

    landing.page.fire_ready();
    assert_eq!(landing.page.style_blocks().len(), 1);
    Ok(())
}

#[test]
fn scroll_listener_is_live_before_ready() -> anyhow::Result<()> {
    let landing = landing_page();
    PageEffects::new(EffectsSettings::default())?.install(&landing.page)?;

    assert_eq!(landing.page.scroll_listener_count(), 1);
    landing.page.scroll(450.0);
    assert!(landing.back_to_top.has_class("show"));
    landing.page.scroll(30.0);
    assert!(!landing.back_to_top.has_class("show"));
    Ok(())
}

#[test]
fn reveal_and_ripples_wait_for_ready() -> anyhow::Result<()> {
    let landing = landing_page();
    PageEffects::new(EffectsSettings::default())?.install(&landing.page)?;

    assert!(landing.page.watcher_thresholds().is_empty());
    assert_eq!(landing.sections[0].style("opacity"), None);
    landing
        .page
        .click(&landing.primary_button, Point::new(60.0, 310.0));
    assert!(landing.primary_button.children().is_empty());

    landing.page.fire_ready();

    assert_eq!(landing.sections[0].style("opacity").as_deref(), Some("0"));
    landing.page.intersect(&[(&landing.sections[0], true)]);
    assert_eq!(landing.sections[0].style("opacity").as_deref(), Some("1"));

    landing
        .page
        .click(&landing.primary_button, Point::new(60.0, 310.0));
    landing
        .page
        .click(&landing.primary_button, Point::new(70.0, 320.0));
    assert_eq!(landing.primary_button.children_with_class("ripple").len(), 1);
    Ok(())
}

#[test]
fn install_after_parse_wires_immediately() -> anyhow::Result<()> {
    let landing = landing_page();
    landing.page.fire_ready();
    PageEffects::new(EffectsSettings::default())?.install(&landing.page)?;

    assert_eq!(landing.page.watcher_thresholds().len(), 1);
    assert_eq!(landing.page.pending_ready_count(), 0);
    Ok(())
}

#[test]
fn missing_furniture_is_tolerated() -> anyhow::Result<()> {
    let page = FakePage::new();
    PageEffects::new(EffectsSettings::default())?.install(&page)?;
    page.fire_ready();
    page.scroll(999.0);
    page.intersect(&[]);
    assert_eq!(page.style_blocks().len(), 1);
    Ok(())
}

#[test]
fn observer_failure_does_not_block_ripples() -> anyhow::Result<()> {
    let landing = landing_page();
    landing.page.reject_observers();
    PageEffects::new(EffectsSettings::default())?.install(&landing.page)?;
    landing.page.fire_ready();

    landing
        .page
        .click(&landing.icon_button, Point::new(410.0, 130.0));
    assert_eq!(landing.icon_button.children_with_class("ripple").len(), 1);
    Ok(())
}

#[test]
fn missing_style_host_fails_install() -> anyhow::Result<()> {
    let page = FakePage::without_style_host();
    let result = PageEffects::new(EffectsSettings::default())?.install(&page);
    assert!(matches!(
        result,
        Err(PageFxError::Surface(SurfaceError::MissingStyleHost))
    ));
    assert_eq!(page.scroll_listener_count(), 0);
    Ok(())
}

#[test]
fn exposed_action_scrolls_to_top() {
    let page = FakePage::new();
    PageEffects::scroll_to_top(&page);
    let requests = page.scroll_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].top.abs() < f64::EPSILON);
    assert_eq!(requests[0].behavior, ScrollBehavior::Smooth);
}

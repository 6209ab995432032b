use pagefx_core::{
    BackToTop, BackToTopSettings, ElementBox, ElementFactory, PageElement, Point, RevealOnScroll,
    RevealSettings, RippleEffect, RippleSettings, ScrollBehavior, ScrollRequest, Size,
    SurfaceError, back_to_top,
};
use pagefx_test_support::FakePage;
use pagefx_test_support::fixtures::landing_page;

fn is_concealed(element: &pagefx_test_support::FakeElement) -> bool {
    element.style("opacity").as_deref() == Some("0")
        && element.style("transform").as_deref() == Some("translateY(20px)")
}

fn is_revealed(element: &pagefx_test_support::FakeElement) -> bool {
    element.style("opacity").as_deref() == Some("1")
        && element.style("transform").as_deref() == Some("translateY(0)")
}

#[test]
fn reveal_conceals_marked_elements_and_watches_at_twenty_percent() -> anyhow::Result<()> {
    let landing = landing_page();
    let reveal = RevealOnScroll::new(RevealSettings::default());

    let watched = reveal.install(&landing.page)?;

    assert_eq!(watched, 3);
    assert_eq!(landing.page.watcher_thresholds(), vec![0.2]);
    for section in &landing.sections {
        assert!(is_concealed(section));
        assert_eq!(section.style("transition").as_deref(), Some("all 0.8s ease"));
    }
    assert_eq!(landing.primary_button.style("opacity"), None);
    Ok(())
}

#[test]
fn only_intersecting_elements_are_revealed() -> anyhow::Result<()> {
    let landing = landing_page();
    RevealOnScroll::new(RevealSettings::default()).install(&landing.page)?;
    let [first, second, third] = [
        &landing.sections[0],
        &landing.sections[1],
        &landing.sections[2],
    ];

    landing.page.intersect(&[(first, true), (second, false)]);

    assert!(is_revealed(first));
    assert!(is_concealed(second));
    assert!(is_concealed(third));
    Ok(())
}

#[test]
fn revealed_elements_stay_revealed_after_leaving_viewport() -> anyhow::Result<()> {
    let landing = landing_page();
    RevealOnScroll::new(RevealSettings::default()).install(&landing.page)?;
    let section = &landing.sections[1];

    landing.page.intersect(&[(section, true)]);
    landing.page.intersect(&[(section, false)]);

    assert!(is_revealed(section));
    Ok(())
}

#[test]
fn reveal_registers_watcher_without_marked_elements() -> anyhow::Result<()> {
    let page = FakePage::new();
    let watched = RevealOnScroll::new(RevealSettings::default()).install(&page)?;
    assert_eq!(watched, 0);
    assert_eq!(page.watcher_thresholds().len(), 1);
    Ok(())
}

#[test]
fn reveal_skips_elements_that_reject_styles() -> anyhow::Result<()> {
    let landing = landing_page();
    landing.sections[0].lock_styles();
    RevealOnScroll::new(RevealSettings::default()).install(&landing.page)?;

    landing
        .page
        .intersect(&[(&landing.sections[0], true), (&landing.sections[1], true)]);

    assert_eq!(landing.sections[0].style("opacity"), None);
    assert!(is_revealed(&landing.sections[1]));
    Ok(())
}

#[test]
fn reveal_reports_watcher_registration_failure() {
    let landing = landing_page();
    landing.page.reject_observers();
    let result = RevealOnScroll::new(RevealSettings::default()).install(&landing.page);
    assert!(matches!(result, Err(SurfaceError::Observer { .. })));
}

#[test]
fn back_to_top_tracks_threshold() {
    let landing = landing_page();
    let control = BackToTop::new(BackToTopSettings::default());

    for (offset, shown) in [(0.0, false), (200.0, false), (201.0, true), (1_500.0, true), (150.0, false)] {
        landing.page.scroll(offset);
        control.sync(&landing.page);
        assert_eq!(
            landing.back_to_top.has_class("show"),
            shown,
            "offset {offset}"
        );
    }
}

#[test]
fn back_to_top_sync_is_idempotent() {
    let landing = landing_page();
    let control = BackToTop::new(BackToTopSettings::default());

    landing.page.scroll(640.0);
    control.sync(&landing.page);
    control.sync(&landing.page);

    assert!(landing.back_to_top.has_class("show"));
    let debug = format!("{:?}", landing.back_to_top);
    assert_eq!(debug.matches("\"show\"").count(), 1);
}

#[test]
fn back_to_top_without_control_is_a_no_op() {
    let page = FakePage::new();
    page.scroll(900.0);
    BackToTop::new(BackToTopSettings::default()).sync(&page);
    assert!(page.scroll_requests().is_empty());
}

#[test]
fn scroll_to_top_requests_smooth_scroll_to_zero() {
    let page = FakePage::new();
    page.scroll(3_000.0);
    back_to_top::scroll_to_top(&page);
    back_to_top::scroll_to_top(&page);
    let expected = ScrollRequest {
        top: 0.0,
        behavior: ScrollBehavior::Smooth,
    };
    assert_eq!(page.scroll_requests(), vec![expected, expected]);
}

#[test]
fn ripple_marker_is_sized_and_centred_on_click() -> anyhow::Result<()> {
    let landing = landing_page();
    let ripple = RippleEffect::new(RippleSettings::default());

    let marker = ripple.spawn(&landing.page, &landing.primary_button, Point::new(120.0, 324.0))?;

    assert_eq!(marker.tag(), "span");
    assert!(marker.has_class("ripple"));
    assert_eq!(marker.style("width").as_deref(), Some("160px"));
    assert_eq!(marker.style("height").as_deref(), Some("160px"));
    assert_eq!(marker.style("left").as_deref(), Some("0px"));
    assert_eq!(marker.style("top").as_deref(), Some("-56px"));
    assert_eq!(landing.primary_button.children(), vec![marker]);
    Ok(())
}

#[test]
fn rapid_clicks_leave_a_single_ripple() -> anyhow::Result<()> {
    let landing = landing_page();
    let wired = RippleEffect::new(RippleSettings::default()).install(&landing.page)?;
    assert_eq!(wired, 2);

    landing
        .page
        .click(&landing.icon_button, Point::new(405.0, 125.0));
    let first = landing.icon_button.children_with_class("ripple");
    landing
        .page
        .click(&landing.icon_button, Point::new(428.0, 150.0));
    let second = landing.icon_button.children_with_class("ripple");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(first[0], second[0]);
    assert!(!first[0].is_attached());
    assert_eq!(second[0].style("left").as_deref(), Some("12px"));
    Ok(())
}

#[test]
fn ripples_are_owned_per_button() -> anyhow::Result<()> {
    let landing = landing_page();
    RippleEffect::new(RippleSettings::default()).install(&landing.page)?;

    landing
        .page
        .click(&landing.primary_button, Point::new(60.0, 310.0));
    landing
        .page
        .click(&landing.icon_button, Point::new(410.0, 130.0));

    assert_eq!(landing.primary_button.children_with_class("ripple").len(), 1);
    assert_eq!(landing.icon_button.children_with_class("ripple").len(), 1);
    Ok(())
}

#[test]
fn ripple_replaces_nested_marker() -> anyhow::Result<()> {
    let landing = landing_page();
    let wrapper = landing.page.create_element("span")?;
    landing.primary_button.append_child(&wrapper)?;
    let stale = landing.page.create_element("span")?;
    stale.add_class("ripple")?;
    wrapper.append_child(&stale)?;

    RippleEffect::new(RippleSettings::default()).spawn(
        &landing.page,
        &landing.primary_button,
        Point::new(50.0, 310.0),
    )?;

    assert!(!stale.is_attached());
    assert_eq!(landing.primary_button.children_with_class("ripple").len(), 1);
    Ok(())
}

#[test]
fn unlaid_button_gets_zero_diameter_marker() -> anyhow::Result<()> {
    let page = FakePage::new();
    let button = page.add_element("button", &["btn"]);
    button.set_metrics(ElementBox {
        origin: Point::new(10.0, 10.0),
        size: Size::new(0.0, 0.0),
    });

    let marker = RippleEffect::new(RippleSettings::default()).spawn(
        &page,
        &button,
        Point::new(12.0, 14.0),
    )?;

    assert_eq!(marker.style("width").as_deref(), Some("0px"));
    assert_eq!(marker.style("left").as_deref(), Some("2px"));
    assert_eq!(marker.style("top").as_deref(), Some("4px"));
    Ok(())
}

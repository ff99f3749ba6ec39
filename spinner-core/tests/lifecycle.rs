use spinner_core::memory::MemoryDom;
use spinner_core::{PageEvent, ReadyState, SpinnerConfig, SpinnerController, Visibility};

const ID: &str = "admin-spinner";

fn submit(tag: &str) -> PageEvent {
    PageEvent::Submit {
        target_tag: tag.to_string(),
    }
}

fn setup(config: SpinnerConfig) -> (SpinnerController<MemoryDom>, MemoryDom) {
    let dom = MemoryDom::new();
    (SpinnerController::new(dom.clone(), config), dom)
}

#[test]
fn test_content_ready_then_load() {
    let (mut ctl, dom) = setup(SpinnerConfig::default());
    assert_eq!(ctl.handle(&PageEvent::ContentReady), Visibility::Visible);
    assert_eq!(dom.count_by_id(ID), 1);
    assert_eq!(ctl.handle(&PageEvent::WindowLoad), Visibility::Hidden);
    assert_eq!(dom.count_by_id(ID), 0);
}

#[test]
fn test_form_submit_shows_after_load() {
    let (mut ctl, dom) = setup(SpinnerConfig::default());
    ctl.handle(&PageEvent::ContentReady);
    ctl.handle(&PageEvent::WindowLoad);
    assert_eq!(ctl.handle(&submit("FORM")), Visibility::Visible);
    assert_eq!(dom.count_by_id(ID), 1);
}

#[test]
fn test_non_form_submit_ignored() {
    let (mut ctl, dom) = setup(SpinnerConfig::default());
    assert_eq!(ctl.handle(&submit("DIV")), Visibility::Hidden);
    assert_eq!(ctl.handle(&submit("")), Visibility::Hidden);
    assert_eq!(dom.count_by_id(ID), 0);
}

#[test]
fn test_repeated_submits_single_overlay() {
    let (mut ctl, dom) = setup(SpinnerConfig::default());
    ctl.handle(&PageEvent::ContentReady);
    ctl.handle(&submit("FORM"));
    ctl.handle(&submit("FORM"));
    assert_eq!(dom.count_by_id(ID), 1);
}

#[test]
fn test_tab_hidden_then_visible() {
    let (mut ctl, dom) = setup(SpinnerConfig::default());
    ctl.handle(&PageEvent::ContentReady);
    assert_eq!(
        ctl.handle(&PageEvent::VisibilityChange { hidden: true }),
        Visibility::Hidden
    );
    assert_eq!(
        ctl.handle(&PageEvent::VisibilityChange { hidden: false }),
        Visibility::Hidden
    );
    assert_eq!(dom.count_by_id(ID), 0);
}

#[test]
fn test_page_hide_respects_config() {
    let (mut ctl, _dom) = setup(SpinnerConfig::default());
    ctl.handle(&submit("FORM"));
    assert_eq!(ctl.handle(&PageEvent::PageHide), Visibility::Visible);

    let config = SpinnerConfig {
        hide_on_page_hide: true,
        ..SpinnerConfig::default()
    };
    let (mut ctl, dom) = setup(config);
    ctl.handle(&submit("FORM"));
    assert_eq!(ctl.handle(&PageEvent::PageHide), Visibility::Hidden);
    assert_eq!(dom.count_by_id(ID), 0);
}

#[test]
fn test_late_install_replay() {
    let (mut ctl, dom) = setup(SpinnerConfig::default());
    if let Some(event) = ReadyState::Interactive.missed_event() {
        ctl.handle(&event);
    }
    assert_eq!(dom.count_by_id(ID), 1);

    let (mut ctl, dom) = setup(SpinnerConfig::default());
    if let Some(event) = ReadyState::Complete.missed_event() {
        ctl.handle(&event);
    }
    assert_eq!(ctl.visibility(), Visibility::Hidden);
    assert_eq!(dom.count_by_id(ID), 0);
}

#[test]
fn test_config_from_json_drives_controller() {
    let config = SpinnerConfig::from_json(
        r#"{"element_id": "busy", "overlay_class": "busy-layer", "spinner_class": "busy-wheel"}"#,
    )
    .unwrap();
    let (mut ctl, dom) = setup(config);
    ctl.handle(&PageEvent::ContentReady);

    let children = dom.body_children();
    assert_eq!(children.len(), 1);
    let root = &children[0];
    assert_eq!(root.id.as_deref(), Some("busy"));
    assert_eq!(root.children[0].class_name.as_deref(), Some("busy-layer"));
    assert_eq!(
        root.children[0].children[0].class_name.as_deref(),
        Some("busy-wheel")
    );
}

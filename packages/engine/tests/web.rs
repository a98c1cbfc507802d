#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlButtonElement, MouseEvent, MouseEventInit};

use tilebox_engine::{init, DomBindings, SandboxApp, SandboxConfig, TileKind};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_controls() {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(
        r#"<select id="selection"><option value="0">Block</option><option value="1">Variable</option></select>
           <button id="start">Start</button><button id="stop">Stop</button>"#,
    );
}

fn button(id: &str) -> HtmlButtonElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn start_and_stop_buttons_toggle_controls() {
    mount_controls();
    let config = SandboxConfig::default();
    let dom = DomBindings::from_window(&config).unwrap();
    let app = SandboxApp::new(dom.clone(), &config).unwrap();

    assert!(!dom.start.disabled());
    assert!(dom.stop.disabled());

    button("start").click();
    assert!(app.is_running());
    assert!(dom.selection.disabled());
    assert!(dom.start.disabled());
    assert!(!dom.stop.disabled());

    button("stop").click();
    assert!(!app.is_running());
    assert!(!dom.selection.disabled());
}

fn mount_app() -> (DomBindings, SandboxApp) {
    mount_controls();
    let config = SandboxConfig::default();
    let dom = DomBindings::from_window(&config).unwrap();
    let app = SandboxApp::new(dom.clone(), &config).unwrap();
    (dom, app)
}

fn press(dom: &DomBindings, button: i16) {
    let init = MouseEventInit::new();
    init.set_button(button);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    dom.canvas.dispatch_event(&event).unwrap();
}

fn choose_kind(dom: &DomBindings, value: &str) {
    dom.selection.set_value(value);
    let event = Event::new("change").unwrap();
    dom.selection.dispatch_event(&event).unwrap();
}

fn only_tile_kind(app: &SandboxApp) -> Option<TileKind> {
    app.with_core(|core| core.tiles().next().map(|(_, tile)| tile.kind))
}

#[wasm_bindgen_test]
fn primary_mousedown_places_block_and_secondary_removes_it() {
    let (dom, app) = mount_app();

    press(&dom, 0);
    assert_eq!(app.tile_count(), 1);
    assert_eq!(only_tile_kind(&app), Some(TileKind::Block));

    // Same offsets, so the same cell
    press(&dom, 2);
    assert_eq!(app.tile_count(), 0);
    assert_eq!(app.with_core(|core| core.body_count()), 0);
}

#[wasm_bindgen_test]
fn selector_change_switches_kind_for_next_tile() {
    let (dom, app) = mount_app();

    choose_kind(&dom, "1");
    assert_eq!(app.with_core(|core| core.tile_kind()), TileKind::Variable);

    press(&dom, 0);
    assert_eq!(only_tile_kind(&app), Some(TileKind::Variable));
}

#[wasm_bindgen_test]
fn unknown_selector_value_keeps_current_kind() {
    let (dom, app) = mount_app();

    choose_kind(&dom, "1");
    choose_kind(&dom, "7");
    assert_eq!(app.with_core(|core| core.tile_kind()), TileKind::Variable);
}

#[wasm_bindgen_test]
fn context_menu_is_suppressed_on_canvas() {
    let (dom, _app) = mount_app();

    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("contextmenu", &init).unwrap();
    dom.canvas.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn pointer_is_ignored_while_running() {
    let (dom, app) = mount_app();

    button("start").click();
    press(&dom, 0);
    assert_eq!(app.tile_count(), 0);
}

#[wasm_bindgen_test]
fn init_can_be_called_twice() {
    init();
    init();
    log::info!("logger still installed");
}

//! Browser bootstrap and JS-callable entry points for the customize panel.

use crate::components::customize::{CustomizePanel, CustomizePanelProps};
use crate::core::config::{CONFIG_ELEMENT_ID, MOUNT_ELEMENT_ID, PanelConfig};
use crate::core::controller::{LoadOutcome, PreferenceController};
use crate::core::error::PrefsError;
use dom::DomSurface;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use storage::LocalStore;
use wasm_bindgen::prelude::wasm_bindgen;

mod dom;
mod storage;

type WebController = PreferenceController<LocalStore, DomSurface>;

thread_local! {
    static CONTROLLER: RefCell<Option<ControllerHandle>> = const { RefCell::new(None) };
}

/// Shared controller for the component and the JS exports.
#[derive(Clone)]
pub(crate) struct ControllerHandle(Rc<RefCell<WebController>>);

impl PartialEq for ControllerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ControllerHandle {
    fn new(config: PanelConfig) -> Self {
        Self(Rc::new(RefCell::new(PreferenceController::new(
            LocalStore,
            DomSurface::new(),
            config,
        ))))
    }

    pub(crate) fn config(&self) -> PanelConfig {
        self.0.borrow().config().clone()
    }

    pub(crate) fn open_panel(&self) {
        if let Err(err) = self.0.borrow_mut().open_panel() {
            report("open", &err);
        }
    }

    pub(crate) fn close_panel(&self) {
        if let Err(err) = self.0.borrow_mut().close_panel() {
            report("close", &err);
        }
    }

    pub(crate) fn apply_and_persist(&self) {
        if let Err(err) = self.0.borrow_mut().apply_and_persist() {
            report("apply", &err);
        }
    }

    pub(crate) fn load_and_apply(&self) {
        match self.0.borrow_mut().load_and_apply() {
            Ok(LoadOutcome::Corrupt { detail }) => {
                console::warn!("Failed to load UI settings", detail);
            }
            Ok(LoadOutcome::Empty | LoadOutcome::Restored(_)) => {}
            Err(err) => report("load", &err),
        }
    }
}

fn report(operation: &'static str, err: &PrefsError) {
    console::error!("customize panel operation failed", operation, err.kind(), err.to_string());
}

fn with_controller(action: impl FnOnce(&ControllerHandle)) {
    let handle = CONTROLLER.with(|slot| slot.borrow().clone());
    match handle {
        Some(handle) => action(&handle),
        None => console::warn!("customize panel is not initialised"),
    }
}

/// Shows the customize modal.
#[wasm_bindgen(js_name = openCustomize)]
pub fn open_customize() {
    with_controller(ControllerHandle::open_panel);
}

/// Hides the customize modal.
#[wasm_bindgen(js_name = closeCustomize)]
pub fn close_customize() {
    with_controller(ControllerHandle::close_panel);
}

/// Applies the panel's current selections, saves them and closes the modal.
#[wasm_bindgen(js_name = applyCustomize)]
pub fn apply_customize() {
    with_controller(ControllerHandle::apply_and_persist);
}

fn load_config() -> PanelConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return PanelConfig::default();
    };
    PanelConfig::from_json(&raw).unwrap_or_else(|err| {
        console::warn!("ignoring customize config", err.to_string());
        PanelConfig::default()
    })
}

fn when_ready(action: impl FnOnce() + 'static) {
    let document = document();
    if document.ready_state() != "loading" {
        action();
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", move |_| action()).forget();
}

fn mount(handle: ControllerHandle) {
    if let Some(root) = document().get_element_by_id(MOUNT_ELEMENT_ID) {
        yew::Renderer::<CustomizePanel>::with_root_and_props(
            root,
            CustomizePanelProps { controller: handle },
        )
        .render();
    } else {
        handle.load_and_apply();
    }
}

/// Wires the controller to the page and restores saved preferences once the document is ready.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let handle = ControllerHandle::new(load_config());
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(handle.clone()));
    when_ready(move || mount(handle));
}

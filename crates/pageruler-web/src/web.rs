//! WebAssembly entry points for the in-page ruler.

use crate::dom::{DomPage, dom_error};
use crate::overlay::DomOverlay;
use pageruler_core::message::{self, Request};
use pageruler_core::{Ruler, RulerConfig, RulerError, RulerResult};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, MouseEvent};

type DomRuler = Ruler<DomPage, DomOverlay>;

thread_local! {
    static CONFIG: RefCell<RulerConfig> = RefCell::new(RulerConfig::default());
    static RULER: RefCell<Option<DomRuler>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Option<Listeners>> = const { RefCell::new(None) };
}

fn to_js(err: RulerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Run `f` against the ruler, if one exists and is not already borrowed.
fn with_ruler<R>(f: impl FnOnce(&mut DomRuler) -> R) -> Option<R> {
    RULER.with(|cell| {
        let mut ruler = cell.try_borrow_mut().ok()?;
        ruler.as_mut().map(f)
    })
}

/// Document listeners that live while the ruler is attached.
///
/// Dropping the value unregisters them.
struct Listeners {
    document: Document,
    on_click: Closure<dyn FnMut(MouseEvent)>,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    on_scroll: Closure<dyn FnMut(Event)>,
}

impl Listeners {
    fn install(document: Document) -> RulerResult<Self> {
        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            let consumed = with_ruler(|ruler| ruler.on_confirm().consumed()).unwrap_or(false);
            if consumed {
                e.prevent_default();
                e.stop_propagation();
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let on_mouse_move = Closure::wrap(Box::new(move |e: MouseEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                with_ruler(|ruler| ruler.on_pointer_move(target));
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let on_scroll = Closure::wrap(Box::new(move |_e: Event| {
            with_ruler(|ruler| ruler.on_scroll());
        }) as Box<dyn FnMut(Event)>);

        // Clicks are caught in the capture phase so the page never sees a confirm.
        document
            .add_event_listener_with_callback_and_bool("click", on_click.as_ref().unchecked_ref(), true)
            .map_err(|e| dom_error("addEventListener(click)", e))?;
        document
            .add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())
            .map_err(|e| dom_error("addEventListener(mousemove)", e))?;
        document
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .map_err(|e| dom_error("addEventListener(scroll)", e))?;

        Ok(Self {
            document,
            on_click,
            on_mouse_move,
            on_scroll,
        })
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        let results = [
            self.document.remove_event_listener_with_callback_and_bool(
                "click",
                self.on_click.as_ref().unchecked_ref(),
                true,
            ),
            self.document
                .remove_event_listener_with_callback("mousemove", self.on_mouse_move.as_ref().unchecked_ref()),
            self.document
                .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref()),
        ];
        for result in results {
            if let Err(e) = result {
                log::warn!("{}", dom_error("removeEventListener", e));
            }
        }
    }
}

fn create_ruler() -> RulerResult<DomRuler> {
    let page = DomPage::new()?;
    let overlay = DomOverlay::new(page.document())?;
    let config = CONFIG.with(|c| c.borrow().clone());
    log::debug!("Created ruler overlay");
    Ok(Ruler::new(page, overlay, &config))
}

/// Register or drop the document listeners to match the attachment flag.
fn sync_listeners(attached: bool) -> RulerResult<()> {
    let installed = LISTENERS.with(|l| l.borrow().is_some());
    if attached && !installed {
        let document = DomPage::new()?.document().clone();
        let listeners = Listeners::install(document)?;
        LISTENERS.with(|l| *l.borrow_mut() = Some(listeners));
    } else if !attached && installed {
        LISTENERS.with(|l| *l.borrow_mut() = None);
    }
    Ok(())
}

/// Install the panic hook. Runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Apply a configuration object (see `RulerConfig`) and set up logging.
///
/// Must be called before the first toggle to affect the ruler; `undefined`
/// selects the defaults.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: RulerConfig = if config.is_undefined() || config.is_null() {
        RulerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| to_js(RulerError::Config(e.to_string())))?
    };
    config.validate().map_err(to_js)?;

    let level = config.log_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
    log::info!("PageRuler configured (log level {})", level);

    CONFIG.with(|c| *c.borrow_mut() = config);
    Ok(())
}

/// Answer an activation-channel message such as `{action: "toggle"}`.
#[wasm_bindgen(js_name = handleMessage)]
pub fn handle_message(request: JsValue) -> Result<JsValue, JsValue> {
    let request: Request = serde_wasm_bindgen::from_value(request)
        .map_err(|e| to_js(RulerError::InvalidRequest(e.to_string())))?;
    log::debug!("Received {:?}", request);

    let response = RULER
        .with(|cell| {
            let mut ruler = cell
                .try_borrow_mut()
                .map_err(|_| RulerError::Dom("ruler is busy".to_string()))?;
            message::dispatch(&mut *ruler, request, create_ruler, sync_listeners)
        })
        .map_err(to_js)?;

    serde_wasm_bindgen::to_value(&response).map_err(|e| to_js(RulerError::Dom(e.to_string())))
}

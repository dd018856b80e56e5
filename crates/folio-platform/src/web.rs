//! Web runner (wasm32): composes the page on demand and patches the DOM.
//!
//! Elements are reconciled by position; an element is reused when its tag
//! still matches. Handlers are not bound per element: two listeners on the
//! mount root look up the clicked or edited element's `data-id` in the
//! handler table of the latest frame.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use folio_core::*;

use crate::html::{BASE_CSS, Element as Spec, MANAGED_ATTRS, element_for};
use crate::registry::{ObserverRegistry, effective_ratio};

pub struct WebOptions {
    /// Id of the element the page is mounted into; the body when absent.
    pub mount_id: Option<String>,
    /// Page CSS installed next to [`BASE_CSS`].
    pub extra_css: String,
}

impl WebOptions {
    pub fn new(mount_id: Option<String>) -> Self {
        Self {
            mount_id,
            extra_css: String::new(),
        }
    }

    pub fn extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = css.into();
        self
    }
}

fn js_err(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

pub fn run_web_app(root: impl FnMut() -> View + 'static, options: WebOptions) -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
    let document = window.document().ok_or_else(|| js_err("no document"))?;
    install_css(&document, &options.extra_css)?;

    let mount: Element = match &options.mount_id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| js_err(&format!("no element #{id}")))?,
        None => document.body().ok_or_else(|| js_err("no body"))?.into(),
    };

    let observer = Rc::new(WebObserver::new(&window));
    let scheduler = Rc::new(WebScheduler::new(window.clone()));
    let host = Host::new(scheduler, observer.clone());
    let handlers = Rc::new(RefCell::new(Handlers::default()));

    install_listeners(&mount, handlers.clone())?;

    let frames = Rc::new(FrameLoop {
        window,
        pending: Cell::new(false),
        runner: RefCell::new(Runner {
            root: Box::new(root),
            host,
            observer,
            document,
            mount,
            handlers,
        }),
    });

    {
        let frames = frames.clone();
        set_invalidator(move || FrameLoop::request(&frames));
    }
    frames.run();
    log::info!(
        "folio web runner started on {}",
        options.mount_id.as_deref().unwrap_or("<body>")
    );
    Ok(())
}

/// Schedules `fut` on the browser's microtask queue.
pub fn spawn(fut: impl std::future::Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(fut);
}

fn install_css(document: &Document, extra: &str) -> Result<(), JsValue> {
    if document.query_selector("style[data-folio]")?.is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_attribute("data-folio", "")?;
    style.set_text_content(Some(&format!("{BASE_CSS}{extra}")));
    let head = document.head().ok_or_else(|| js_err("no head"))?;
    head.append_child(&style)?;
    Ok(())
}

#[derive(Default)]
struct Handlers {
    clicks: HashMap<ViewId, Callback>,
    inputs: HashMap<ViewId, TextCallback>,
}

fn collect_handlers(view: &View, out: &mut Handlers) {
    match &view.kind {
        ViewKind::Button {
            on_click: Some(cb), ..
        }
        | ViewKind::Link {
            on_click: Some(cb), ..
        } => {
            out.clicks.insert(view.id, cb.clone());
        }
        ViewKind::TextField {
            on_change: Some(cb),
            ..
        } => {
            out.inputs.insert(view.id, cb.clone());
        }
        _ => {}
    }
    for c in &view.children {
        collect_handlers(c, out);
    }
}

fn target_id(ev: &web_sys::Event, selector: &str) -> Option<(Element, ViewId)> {
    let target: Element = ev.target()?.dyn_into().ok()?;
    let el = target.closest(selector).ok()??;
    let id = el.get_attribute("data-id")?.parse().ok()?;
    Some((el, id))
}

fn install_listeners(mount: &Element, handlers: Rc<RefCell<Handlers>>) -> Result<(), JsValue> {
    let clicks = {
        let handlers = handlers.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some((_, id)) = target_id(&ev, "[data-click]") else {
                return;
            };
            let cb = handlers.borrow().clicks.get(&id).cloned();
            if let Some(cb) = cb {
                cb();
            }
        })
    };
    mount.add_event_listener_with_callback("click", clicks.as_ref().unchecked_ref())?;
    clicks.forget();

    let inputs = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some((el, id)) = target_id(&ev, "[data-input]") else {
            return;
        };
        let value = if let Some(i) = el.dyn_ref::<HtmlInputElement>() {
            i.value()
        } else if let Some(t) = el.dyn_ref::<HtmlTextAreaElement>() {
            t.value()
        } else {
            return;
        };
        let cb = handlers.borrow().inputs.get(&id).cloned();
        if let Some(cb) = cb {
            cb(value);
        }
    });
    mount.add_event_listener_with_callback("input", inputs.as_ref().unchecked_ref())?;
    inputs.forget();
    Ok(())
}

struct Runner {
    root: Box<dyn FnMut() -> View>,
    host: Host,
    observer: Rc<WebObserver>,
    document: Document,
    mount: Element,
    handlers: Rc<RefCell<Handlers>>,
}

impl Runner {
    fn frame(&mut self) -> Result<(), JsValue> {
        let _ = take_invalidated();
        let root = &mut self.root;
        let view = with_host(self.host.clone(), || compose(|| root()));

        let mut handlers = Handlers::default();
        collect_handlers(&view, &mut handlers);
        *self.handlers.borrow_mut() = handlers;

        patch_children(&self.document, &self.mount, std::slice::from_ref(&view))?;
        self.observer.attach(&self.document);
        Ok(())
    }
}

struct FrameLoop {
    window: Window,
    pending: Cell<bool>,
    runner: RefCell<Runner>,
}

impl FrameLoop {
    fn request(this: &Rc<Self>) {
        if this.pending.replace(true) {
            return;
        }
        let me = this.clone();
        let cb = Closure::once_into_js(move || {
            me.pending.set(false);
            me.run();
        });
        if let Err(e) = this.window.request_animation_frame(cb.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {e:?}");
            this.pending.set(false);
        }
    }

    fn run(&self) {
        match self.runner.try_borrow_mut() {
            Ok(mut runner) => {
                if let Err(e) = runner.frame() {
                    log::error!("frame failed: {e:?}");
                }
            }
            Err(_) => log::warn!("frame requested while a frame is running; skipped"),
        }
    }
}

fn patch_children(doc: &Document, parent: &Element, views: &[View]) -> Result<(), JsValue> {
    let existing = parent.children();
    for (i, view) in views.iter().enumerate() {
        let spec = element_for(view);
        let el = match existing.item(i as u32) {
            Some(el) if el.tag_name().eq_ignore_ascii_case(spec.tag) => el,
            Some(old) => {
                let fresh = doc.create_element(spec.tag)?;
                parent.replace_child(&fresh, &old)?;
                fresh
            }
            None => {
                let fresh = doc.create_element(spec.tag)?;
                parent.append_child(&fresh)?;
                fresh
            }
        };
        patch_element(doc, &el, &spec, view)?;
    }
    while existing.length() as usize > views.len() {
        match parent.last_element_child() {
            Some(last) => {
                parent.remove_child(&last)?;
            }
            None => break,
        }
    }
    Ok(())
}

fn patch_element(doc: &Document, el: &Element, spec: &Spec, view: &View) -> Result<(), JsValue> {
    for name in MANAGED_ATTRS {
        if spec.attr(name).is_none() && el.has_attribute(name) {
            el.remove_attribute(name)?;
        }
    }
    for (k, v) in &spec.attrs {
        if el.get_attribute(k).as_deref() != Some(v.as_str()) {
            el.set_attribute(k, v)?;
        }
    }

    if let Some(value) = &spec.value {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            // Only on change, or the caret jumps to the end.
            if input.value() != *value {
                input.set_value(value);
            }
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            if area.value() != *value {
                area.set_value(value);
            }
        } else if el.get_attribute("value").as_deref() != Some(value.as_str()) {
            el.set_attribute("value", value)?;
        }
    }

    match &spec.text {
        Some(t) if view.children.is_empty() => {
            if el.text_content().as_deref() != Some(t.as_str()) {
                el.set_text_content(Some(t));
            }
            Ok(())
        }
        _ if spec.is_void() || spec.tag == "textarea" => Ok(()),
        _ => patch_children(doc, el, &view.children),
    }
}

/// [`Scheduler`] backed by `setTimeout`.
pub struct WebScheduler {
    window: Window,
    next_id: Cell<u64>,
    live: Rc<RefCell<HashMap<u64, i32>>>,
}

impl WebScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next_id: Cell::new(1),
            live: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let live = self.live.clone();
        let cb = Closure::once_into_js(move || {
            let alive = live.borrow_mut().remove(&id).is_some();
            if alive {
                callback();
            }
        });
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        {
            Ok(timeout) => {
                self.live.borrow_mut().insert(id, timeout);
            }
            Err(e) => log::error!("setTimeout failed: {e:?}"),
        }
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let timeout = self.live.borrow_mut().remove(&handle.0);
        if let Some(t) = timeout {
            self.window.clear_timeout_with_handle(t);
        }
    }
}

type Registrations = Rc<RefCell<ObserverRegistry<Element>>>;
type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// [`VisibilityObserver`] backed by `IntersectionObserver`, one per
/// distinct threshold. Targets are resolved by `data-node` after each
/// patch, so registrations made during composition attach once their
/// element exists.
pub struct WebObserver {
    supported: bool,
    registrations: Registrations,
    observers: RefCell<Vec<(f32, IntersectionObserver, EntriesCallback)>>,
}

impl WebObserver {
    pub fn new(window: &Window) -> Self {
        let supported =
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);
        if !supported {
            log::warn!("IntersectionObserver unavailable; content will not wait to be revealed");
        }
        Self {
            supported,
            registrations: Rc::new(RefCell::new(ObserverRegistry::new())),
            observers: RefCell::new(Vec::new()),
        }
    }

    fn observer_for(&self, threshold: f32) -> Result<IntersectionObserver, JsValue> {
        if let Some((_, io, _)) = self
            .observers
            .borrow()
            .iter()
            .find(|(t, ..)| *t == threshold)
        {
            return Ok(io.clone());
        }
        let regs = self.registrations.clone();
        let cb: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            deliver(&regs, threshold, &entries);
        });
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold as f64));
        let io = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        self.observers
            .borrow_mut()
            .push((threshold, io.clone(), cb));
        Ok(io)
    }

    /// Resolves pending or detached registrations against the document.
    pub fn attach(&self, document: &Document) {
        let pending = self.registrations.borrow().unattached(|el| el.is_connected());
        for (handle, target, threshold) in pending {
            let selector = format!("[data-node=\"{target}\"]");
            let Ok(Some(el)) = document.query_selector(&selector) else {
                continue;
            };
            match self.observer_for(threshold) {
                Ok(io) => {
                    io.observe(&el);
                    self.registrations.borrow_mut().attach(handle, el);
                }
                Err(e) => log::error!("IntersectionObserver for {target}: {e:?}"),
            }
        }
    }
}

fn deliver(regs: &Registrations, threshold: f32, entries: &js_sys::Array) {
    let mut calls: Vec<(IntersectionCallback, f32)> = Vec::new();
    {
        let regs = regs.borrow();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(key) = entry.target().get_attribute("data-node") else {
                continue;
            };
            let ratio = effective_ratio(entry.intersection_ratio(), entry.is_intersecting());
            calls.extend(
                regs.callbacks_for(&key, threshold)
                    .into_iter()
                    .map(|cb| (cb, ratio)),
            );
        }
    }
    for (cb, ratio) in calls {
        cb(ratio);
    }
}

impl VisibilityObserver for WebObserver {
    fn observe(
        &self,
        target: &str,
        threshold: f32,
        on_change: IntersectionCallback,
    ) -> Result<ObservationHandle, ObserveError> {
        if !self.supported {
            return Err(ObserveError::Unsupported);
        }
        Ok(self
            .registrations
            .borrow_mut()
            .insert(target, threshold, on_change))
    }

    fn unobserve(&self, handle: ObservationHandle) {
        let Some(released) = self.registrations.borrow_mut().remove(handle) else {
            return;
        };
        if let Some((_, io, _)) = self
            .observers
            .borrow()
            .iter()
            .find(|(t, ..)| *t == released.threshold)
        {
            io.unobserve(&released.element);
        }
    }
}

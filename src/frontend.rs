use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use js_sys::{Array, Date};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, Node, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::contact::{
    ContactFields, ContactFlow, ContactSubmitter, SubmitControl, SubmitError, CONTACT_FORM_ID,
    SIMULATED_SUBMIT_DELAY_MS, SUBMIT_BUTTON_SELECTOR,
};
use crate::effects::{
    ripple_style, CardRect, Tilt, BUTTON_SELECTOR, PROJECT_CARD_SELECTOR, RIPPLE_LIFETIME_MS,
    SKILL_CARD_SELECTOR, SKILL_ICON_HOVER, SKILL_ICON_REST, SKILL_ICON_SELECTOR,
};
use crate::menu::{MenuState, MENU_OPEN_CLASS};
use crate::notification::{
    NotificationId, NotificationKind, NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS,
    NOTIFICATION_HIDDEN_TRANSFORM, NOTIFICATION_SELECTOR, NOTIFICATION_SHOWN_TRANSFORM,
};
use crate::reveal::{
    bar_width, transition_delay, PROGRESS_ATTRIBUTE, PROGRESS_CONTAINERS, PROGRESS_DELAY_MS,
    PROGRESS_FILL_SELECTOR, PROGRESS_THRESHOLD, REVEALED_CLASS, REVEAL_CLASS, REVEAL_ROOT_MARGIN,
    REVEAL_SELECTORS, REVEAL_THRESHOLD,
};
use crate::scroll::{
    self, is_active_link, parallax_transform, AnchorTarget, SectionPosition, ANCHOR_SETTLE_MS,
    NAV_ACTIVE_CLASS,
};
use crate::session::{AnchorAction, Session};
use crate::styles::{INJECTED_CSS, LOADED_CLASS, STYLE_ELEMENT_ID};
use crate::theme::{THEME_ATTRIBUTE, THEME_SPIN_MS, THEME_SPIN_TRANSFORM};

const THEME_TOGGLE_ID: &str = "themeToggle";
const THEME_ICON_SELECTOR: &str = ".theme-toggle__icon";
const NAV_TOGGLE_ID: &str = "navToggle";
const NAV_MENU_SELECTOR: &str = ".nav__menu";
const NAV_LINK_SELECTOR: &str = ".nav__link";
const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const HEADER_SELECTOR: &str = ".header";
const HERO_BACKGROUND_SELECTOR: &str = ".hero__background";
const SECTION_SELECTOR: &str = "section[id]";
const NOTIFICATION_ID_ATTRIBUTE: &str = "data-notification-id";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

thread_local! {
    static APP: RefCell<Option<PortfolioApp>> = const { RefCell::new(None) };
}

fn now_ms() -> f64 {
    Date::now()
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector))
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn header_height(document: &Document) -> Option<f64> {
    query(document, HEADER_SELECTOR)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
}

fn element_top(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|element| f64::from(element.offset_top()))
}

fn card_rect(element: &Element) -> CardRect {
    let rect = element.get_bounding_client_rect();
    CardRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn event_node(event: &Event) -> Option<Node> {
    event.target().and_then(|target| target.dyn_into::<Node>().ok())
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_with_scroll_to_options(&options);
}

#[derive(Clone)]
struct MenuElements {
    toggle: Element,
    panel: Element,
}

impl MenuElements {
    fn find(document: &Document) -> Option<Self> {
        Some(Self {
            toggle: document.get_element_by_id(NAV_TOGGLE_ID)?,
            panel: query(document, NAV_MENU_SELECTOR)?,
        })
    }

    fn render(&self, state: MenuState) {
        let open = state.is_open();
        let _ = self.toggle.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
        let _ = self.panel.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
    }
}

struct DomSubmitControl {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
}

impl SubmitControl for DomSubmitControl {
    fn label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        if let Some(button) = self.button.as_ref() {
            button.set_text_content(Some(label));
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.button.as_ref() {
            button.set_disabled(disabled);
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

/// Stands in for a real transport: waits, then reports success.
struct SimulatedSubmitter;

impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
        TimeoutFuture::new(SIMULATED_SUBMIT_DELAY_MS).await;
        Ok(())
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(field) = form
        .query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
    else {
        return String::new();
    };

    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

fn find_notification(document: &Document, id: NotificationId) -> Option<Element> {
    query(
        document,
        &format!("[{NOTIFICATION_ID_ATTRIBUTE}=\"{}\"]", id.as_u64()),
    )
}

fn slide_out_and_remove(element: Element) {
    set_style(&element, "transform", NOTIFICATION_HIDDEN_TRANSFORM);
    Timeout::new(NOTIFICATION_EXIT_MS, move || {
        if element.parent_element().is_some() {
            element.remove();
        }
    })
    .forget();
}

fn show_notification(session: &Rc<RefCell<Session>>, kind: NotificationKind, message: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(container) = document.create_element("div") else {
        return;
    };

    let notification = session.borrow_mut().notify(kind, message, now_ms());
    container.set_class_name(&kind.class_name());
    let _ = container.set_attribute(NOTIFICATION_ID_ATTRIBUTE, &notification.id.as_u64().to_string());
    let _ = container.set_attribute("style", &kind.style());

    let Ok(content) = document.create_element("div") else {
        return;
    };
    content.set_class_name("notification__content");

    if let Ok(icon) = document.create_element("span") {
        icon.set_class_name("notification__icon");
        icon.set_text_content(Some(kind.icon()));
        let _ = content.append_child(&icon);
    }
    if let Ok(text) = document.create_element("span") {
        text.set_class_name("notification__message");
        text.set_text_content(Some(message));
        let _ = content.append_child(&text);
    }
    if let Ok(close) = document.create_element("button") {
        close.set_class_name("notification__close");
        let _ = close.set_attribute("type", "button");
        let _ = close.set_attribute("aria-label", "Close");
        close.set_text_content(Some("×"));

        let session = session.clone();
        let container = container.clone();
        let id = notification.id;
        EventListener::once(&close, "click", move |_| {
            session.borrow_mut().dismiss(id);
            container.remove();
        })
        .forget();
        let _ = content.append_child(&close);
    }

    let _ = container.append_child(&content);
    if body.append_child(&container).is_err() {
        session.borrow_mut().dismiss(notification.id);
        return;
    }

    {
        let container = container.clone();
        Timeout::new(NOTIFICATION_ENTER_DELAY_MS, move || {
            if container.is_connected() {
                set_style(&container, "transform", NOTIFICATION_SHOWN_TRANSFORM);
            }
        })
        .forget();
    }

    let session = session.clone();
    let deadline = notification.expires_at_ms();
    let lifetime_ms = (deadline - notification.created_at_ms).max(0.0) as u32;
    Timeout::new(lifetime_ms, move || {
        let expired = session
            .borrow_mut()
            .expire_notifications(deadline.max(now_ms()));
        for id in expired {
            if let Some(element) = find_notification(&document, id) {
                slide_out_and_remove(element);
            }
        }
    })
    .forget();
}

fn inject_styles(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(INJECTED_CSS));
        let _ = head.append_child(&style);
    }
}

/// Page controller. Owns the session state and every registered callback.
struct PortfolioApp {
    window: Window,
    document: Document,
    session: Rc<RefCell<Session>>,
    contact: Rc<ContactFlow>,
    listeners: Vec<EventListener>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl PortfolioApp {
    fn mount(window: Window, document: Document) -> Self {
        let theme_attribute = document
            .document_element()
            .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));

        let mut app = Self {
            session: Rc::new(RefCell::new(Session::new(theme_attribute.as_deref()))),
            contact: Rc::new(ContactFlow::default()),
            window,
            document,
            listeners: Vec::new(),
            observers: Vec::new(),
        };

        app.setup_theme_toggle();
        app.setup_mobile_menu();
        app.setup_smooth_scroll();
        app.setup_scroll_reveal();
        app.setup_progress_bars();
        app.setup_contact_form();
        app.setup_scroll_effects();
        app.setup_hover_effects();
        app.setup_keyboard();
        app
    }

    fn setup_theme_toggle(&mut self) {
        let Some(toggle) = self.document.get_element_by_id(THEME_TOGGLE_ID) else {
            console::warn!("theme toggle missing, theme switching disabled");
            return;
        };
        let Some(root) = self.document.document_element() else {
            return;
        };
        let icon = toggle.query_selector(THEME_ICON_SELECTOR).ok().flatten();

        let current = self.session.borrow().theme();
        if let Some(icon) = icon.as_ref() {
            icon.set_text_content(Some(current.icon()));
        }
        let _ = toggle.set_attribute("aria-label", &current.toggle_label());

        let session = self.session.clone();
        let target = toggle.clone();
        self.listeners.push(EventListener::new(&target, "click", move |_| {
            let attribute = root.get_attribute(THEME_ATTRIBUTE);
            let next = session.borrow_mut().toggle_theme(attribute.as_deref());

            let _ = root.set_attribute(THEME_ATTRIBUTE, next.as_str());
            if let Some(icon) = icon.as_ref() {
                icon.set_text_content(Some(next.icon()));
            }
            let _ = toggle.set_attribute("aria-label", &next.toggle_label());

            set_style(&toggle, "transform", THEME_SPIN_TRANSFORM);
            let toggle = toggle.clone();
            Timeout::new(THEME_SPIN_MS, move || set_style(&toggle, "transform", "")).forget();
        }));
    }

    fn setup_mobile_menu(&mut self) {
        let Some(menu) = MenuElements::find(&self.document) else {
            console::warn!("navigation toggle or menu missing, mobile menu disabled");
            return;
        };

        {
            let session = self.session.clone();
            let menu = menu.clone();
            self.listeners
                .push(EventListener::new(&menu.toggle.clone(), "click", move |_| {
                    let state = session.borrow_mut().toggle_menu();
                    menu.render(state);
                }));
        }

        for link in query_all(&self.document, NAV_LINK_SELECTOR) {
            let session = self.session.clone();
            let menu = menu.clone();
            self.listeners.push(EventListener::new(&link, "click", move |_| {
                let mut session = session.borrow_mut();
                session.close_menu();
                menu.render(session.menu());
            }));
        }

        let session = self.session.clone();
        self.listeners
            .push(EventListener::new(&self.document, "click", move |event| {
                let Some(node) = event_node(event) else {
                    return;
                };
                let inside_toggle = menu.toggle.contains(Some(&node));
                let inside_menu = menu.panel.contains(Some(&node));
                let mut session = session.borrow_mut();
                if session.document_click(inside_toggle, inside_menu) {
                    menu.render(session.menu());
                }
            }));
    }

    fn setup_smooth_scroll(&mut self) {
        let session = self.session.clone();
        let window = self.window.clone();
        let document = self.document.clone();

        self.listeners
            .push(EventListener::new(&self.document.clone(), "click", move |event| {
                let Some(link) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|element| element.closest(IN_PAGE_ANCHOR_SELECTOR).ok().flatten())
                else {
                    return;
                };
                event.prevent_default();

                let Some(target) = link
                    .get_attribute("href")
                    .and_then(|href| AnchorTarget::parse(&href))
                else {
                    return;
                };
                let element = match &target {
                    AnchorTarget::Fragment(id) => document.get_element_by_id(id),
                    AnchorTarget::Top => None,
                };
                let target_top = element.as_ref().and_then(element_top);

                let action =
                    session
                        .borrow_mut()
                        .anchor_click(&target, target_top, header_height(&document));

                match action {
                    AnchorAction::ScrollToTop => smooth_scroll_to(&window, 0.0),
                    AnchorAction::ScrollTo {
                        offset,
                        menu_closed,
                    } => {
                        if menu_closed {
                            if let Some(menu) = MenuElements::find(&document) {
                                menu.render(session.borrow().menu());
                            }
                        }
                        let Some(element) = element else {
                            return;
                        };
                        let window = window.clone();
                        let document = document.clone();
                        // measure again once the closing menu has reflowed
                        Timeout::new(ANCHOR_SETTLE_MS, move || {
                            let offset = element_top(&element)
                                .map(|top| {
                                    scroll::scroll_target_offset(top, header_height(&document))
                                })
                                .unwrap_or(offset);
                            smooth_scroll_to(&window, offset);
                        })
                        .forget();
                    }
                    AnchorAction::Missing(id) => {
                        if cfg!(debug_assertions) {
                            console::debug!(format!("no element with id `{id}`, anchor ignored"));
                        }
                    }
                }
            }));
    }

    fn setup_scroll_reveal(&mut self) {
        let targets = query_all(&self.document, REVEAL_SELECTORS);
        if targets.is_empty() {
            return;
        }

        let callback: ObserverCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(REVEALED_CLASS);
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            console::warn!("intersection observer unavailable, scroll reveal disabled");
            return;
        };

        for (index, element) in targets.iter().enumerate() {
            let _ = element.class_list().add_1(REVEAL_CLASS);
            set_style(element, "transition-delay", &transition_delay(index));
            observer.observe(element);
        }

        self.observers.push((observer, callback));
    }

    fn setup_progress_bars(&mut self) {
        let containers: Vec<Element> = PROGRESS_CONTAINERS
            .iter()
            .filter_map(|selector| query(&self.document, selector))
            .collect();
        if containers.is_empty() {
            return;
        }

        let session = self.session.clone();
        let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let container = entry.target();
                observer.unobserve(&container);

                let Some(key) = PROGRESS_CONTAINERS
                    .iter()
                    .find(|selector| container.matches(selector).unwrap_or(false))
                else {
                    continue;
                };
                if !session.borrow_mut().progress_intersection(key) {
                    continue;
                }

                for fill in elements(container.query_selector_all(PROGRESS_FILL_SELECTOR)) {
                    let Some(width) = bar_width(fill.get_attribute(PROGRESS_ATTRIBUTE).as_deref())
                    else {
                        continue;
                    };
                    Timeout::new(PROGRESS_DELAY_MS, move || set_style(&fill, "width", &width))
                        .forget();
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(PROGRESS_THRESHOLD));
        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        else {
            console::warn!("intersection observer unavailable, progress bars disabled");
            return;
        };

        for container in &containers {
            observer.observe(container);
        }
        self.observers.push((observer, callback));
    }

    fn setup_contact_form(&mut self) {
        let Some(form) = self
            .document
            .get_element_by_id(CONTACT_FORM_ID)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        let session = self.session.clone();
        let contact = self.contact.clone();
        self.listeners
            .push(EventListener::new(&form.clone(), "submit", move |event| {
                event.prevent_default();

                let fields = ContactFields::new(
                    &field_value(&form, "name"),
                    &field_value(&form, "email"),
                    &field_value(&form, "message"),
                );
                let control = DomSubmitControl {
                    button: form
                        .query_selector(SUBMIT_BUTTON_SELECTOR)
                        .ok()
                        .flatten()
                        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok()),
                    form: form.clone(),
                };
                let session = session.clone();
                let contact = contact.clone();

                spawn_local(async move {
                    let outcome = contact.submit(fields, &control, &SimulatedSubmitter).await;
                    if let Some((kind, message)) = outcome.notification() {
                        show_notification(&session, kind, &message);
                    }
                });
            }));
    }

    fn setup_scroll_effects(&mut self) {
        if let Some(hero) = query(&self.document, HERO_BACKGROUND_SELECTOR) {
            let window = self.window.clone();
            self.listeners
                .push(EventListener::new(&self.window.clone(), "scroll", move |_| {
                    let scrolled = window.page_y_offset().unwrap_or(0.0);
                    set_style(&hero, "transform", &parallax_transform(scrolled));
                }));
        }

        let Some(header) = query(&self.document, HEADER_SELECTOR) else {
            console::warn!("header missing, scroll effects disabled");
            return;
        };

        let session = self.session.clone();
        let window = self.window.clone();
        let document = self.document.clone();
        self.listeners
            .push(EventListener::new(&self.window.clone(), "scroll", move |_| {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let sections: Vec<SectionPosition> = query_all(&document, SECTION_SELECTOR)
                    .into_iter()
                    .filter_map(|section| {
                        Some(SectionPosition {
                            top: element_top(&section)?,
                            id: section.id(),
                        })
                    })
                    .collect();

                let frame = session
                    .borrow_mut()
                    .scroll_frame(scroll_y, header_height(&document), &sections);

                set_style(&header, "transform", frame.header.transform());
                set_style(&header, "background", frame.header.background.background());
                set_style(
                    &header,
                    "backdrop-filter",
                    frame.header.background.backdrop_filter(),
                );

                let current = frame.active_section.as_deref();
                for link in query_all(&document, NAV_LINK_SELECTOR) {
                    let active = is_active_link(link.get_attribute("href").as_deref(), current);
                    let _ = link.class_list().toggle_with_force(NAV_ACTIVE_CLASS, active);
                }
            }));
    }

    fn setup_hover_effects(&mut self) {
        for card in query_all(&self.document, SKILL_CARD_SELECTOR) {
            for (event_type, transform) in [("mouseenter", SKILL_ICON_HOVER), ("mouseleave", SKILL_ICON_REST)] {
                let target = card.clone();
                self.listeners.push(EventListener::new(&card, event_type, move |_| {
                    if let Some(icon) = target.query_selector(SKILL_ICON_SELECTOR).ok().flatten() {
                        set_style(&icon, "transform", transform);
                    }
                }));
            }
        }

        for card in query_all(&self.document, PROJECT_CARD_SELECTOR) {
            let target = card.clone();
            self.listeners.push(EventListener::new(&card, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = card_rect(&target);
                let tilt = Tilt::from_pointer(
                    &rect,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                set_style(&target, "transform", &tilt.transform());
            }));

            let target = card.clone();
            self.listeners.push(EventListener::new(&card, "mouseleave", move |_| {
                set_style(&target, "transform", "");
            }));
        }

        for button in query_all(&self.document, BUTTON_SELECTOR) {
            let target = button.clone();
            let document = self.document.clone();
            self.listeners.push(EventListener::new(&button, "click", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let Ok(ripple) = document.create_element("span") else {
                    return;
                };
                let rect = card_rect(&target);
                let style = ripple_style(
                    &rect,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                let _ = ripple.set_attribute("style", &style);
                if target.append_child(&ripple).is_ok() {
                    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
                }
            }));
        }
    }

    fn setup_keyboard(&mut self) {
        let session = self.session.clone();
        let document = self.document.clone();
        self.listeners
            .push(EventListener::new(&self.document.clone(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() != "Escape" {
                    return;
                }

                let action = session.borrow_mut().escape();
                if action.menu_closed {
                    if let Some(menu) = MenuElements::find(&document) {
                        menu.render(session.borrow().menu());
                    }
                }
                for notification in query_all(&document, NOTIFICATION_SELECTOR) {
                    notification.remove();
                }
            }));
    }
}

fn mount() {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let app = PortfolioApp::mount(window, document.clone());
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(LOADED_CLASS);
    }
    console::log!(format!(
        "portfolio behaviors mounted ({} listeners, {} observers)",
        app.listeners.len(),
        app.observers.len()
    ));

    APP.with(|slot| *slot.borrow_mut() = Some(app));
}

pub fn run() {
    let Some(document) = window().and_then(|w| w.document()) else {
        console::error!("no document, portfolio behaviors not started");
        return;
    };

    inject_styles(&document);

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| mount()).forget();
    } else {
        mount();
    }
}

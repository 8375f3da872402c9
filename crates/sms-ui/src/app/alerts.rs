//! Alert banners.

use crate::app::config;
use crate::app::dom::{by_id, js_error, query, query_all, query_in};
use crate::core::alerts::{
    ALERT_SELECTOR, ALERTS_CONTAINER_CLASS, ALERTS_CONTAINER_ID, AlertKind, AlertRequest,
    CLOSE_BUTTON_SELECTOR, ContainerAnchor, CONTAINER_FLUID_SELECTOR, MAIN_CONTENT_SELECTOR,
    MANAGED_ALERT_ATTR,
};
use crate::core::config::UiConfig;
use anyhow::anyhow;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use gloo_timers::callback::Timeout;
use web_sys::{Element, Node};

/// Show a dismissible banner in the alerts container.
///
/// `duration_ms` of `None` uses the configured default; zero or negative keeps the banner
/// until it is closed.
pub fn show_alert(message: &str, kind: AlertKind, duration_ms: Option<i64>) {
    let request = AlertRequest::new(message, kind, duration_ms, config().alert_duration_ms);
    if let Err(err) = render_alert(&request) {
        console::error!("alert rendering failed", err.to_string());
    }
}

fn render_alert(request: &AlertRequest) -> anyhow::Result<()> {
    let container = alerts_container()?;
    let document = document();

    let banner = create(&document, "div")?;
    banner.set_class_name(&request.kind.banner_class());
    set(&banner, "role", "alert")?;
    set(&banner, MANAGED_ALERT_ATTR, "true")?;

    let icon = create(&document, "i")?;
    icon.set_class_name(&format!("{} me-2", request.kind.icon_class()));
    append(&banner, &icon)?;
    append(&banner, &document.create_text_node(&request.message))?;

    let close = create(&document, "button")?;
    set(&close, "type", "button")?;
    close.set_class_name("btn-close");
    set(&close, "data-bs-dismiss", "alert")?;
    set(&close, "aria-label", "Close")?;
    let target = banner.clone();
    EventListener::new(&close, "click", move |_| target.remove()).forget();
    append(&banner, &close)?;

    append(&container, &banner)?;
    if let Some(delay_ms) = request.dismiss_after_ms {
        schedule_removal(banner, delay_ms);
    }
    Ok(())
}

fn alerts_container() -> anyhow::Result<Element> {
    if let Some(existing) = by_id(ALERTS_CONTAINER_ID) {
        return Ok(existing);
    }
    let document = document();
    let container = create(&document, "div")?;
    container.set_id(ALERTS_CONTAINER_ID);
    container.set_class_name(ALERTS_CONTAINER_CLASS);

    let anchor = ContainerAnchor::choose(
        query(MAIN_CONTENT_SELECTOR).is_some(),
        query(CONTAINER_FLUID_SELECTOR).is_some(),
    );
    let parent: Node = match anchor.selector().and_then(query) {
        Some(element) => element.into(),
        None => document
            .body()
            .ok_or_else(|| anyhow!("document has no body"))?
            .into(),
    };
    parent
        .insert_before(&container, parent.first_child().as_ref())
        .map_err(|err| js_error("alerts container insert", &err))?;
    Ok(container)
}

/// Schedule removal of server-rendered dismissible alerts shortly after load.
pub(crate) fn schedule_sweep(config: &UiConfig) {
    let dismiss_ms = config.alert_sweep_dismiss_ms;
    Timeout::new(config.alert_sweep_delay_ms, move || {
        for alert in query_all(ALERT_SELECTOR) {
            if alert.has_attribute(MANAGED_ALERT_ATTR) {
                continue;
            }
            if query_in(&alert, CLOSE_BUTTON_SELECTOR).is_some() {
                schedule_removal(alert, dismiss_ms);
            }
        }
    })
    .forget();
}

fn schedule_removal(element: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        if element.parent_node().is_some() {
            element.remove();
        }
    })
    .forget();
}

fn create(document: &web_sys::Document, tag: &'static str) -> anyhow::Result<Element> {
    document
        .create_element(tag)
        .map_err(|err| js_error("element create", &err))
}

fn set(element: &Element, name: &str, value: &str) -> anyhow::Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|err| js_error("attribute set", &err))
}

fn append(parent: &Node, child: &Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(drop)
        .map_err(|err| js_error("append", &err))
}

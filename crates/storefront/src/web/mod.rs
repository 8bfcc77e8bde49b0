//! Browser entry point.
//!
//! Reads configuration overrides from `<body>`, fetches the catalog, paints
//! the first page and binds one delegated listener per interactive region.

mod event;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::Storefront;
use crate::client::HttpCatalogSource;
use crate::config::StorefrontConfig;
use crate::dom::Region;
use crate::intent::UiEvent;

pub use surface::DomSurface;

type SharedStorefront = Rc<RefCell<Storefront<DomSurface>>>;

/// WASM entry point, run when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("invalid storefront configuration: {err:#}").into());
            StorefrontConfig::default()
        }
    };
    storefront_observability::init_with_filter(&config.log_filter);

    spawn_local(async move {
        if let Err(err) = run(config).await {
            tracing::error!(error = %format!("{err:#}"), "storefront did not start");
        }
    });
}

fn load_config() -> anyhow::Result<StorefrontConfig> {
    let body = document()?.body().ok_or_else(|| anyhow!("document has no <body>"))?;
    let api_url = body.get_attribute("data-api-url");
    let page_size = body.get_attribute("data-page-size");
    StorefrontConfig::default()
        .with_overrides(api_url, page_size.as_deref())
        .context("reading <body> data attributes")
}

async fn run(config: StorefrontConfig) -> anyhow::Result<()> {
    let document = document()?;
    let source = HttpCatalogSource::from_config(&config);
    let storefront = Storefront::start(&source, &config, DomSurface::new(document.clone()))
        .await
        .context("loading catalog")?;

    let shared: SharedStorefront = Rc::new(RefCell::new(storefront));
    for region in Region::INTERACTIVE {
        bind(&document, region, &shared)?;
    }
    tracing::info!("storefront ready");
    Ok(())
}

fn bind(document: &web_sys::Document, region: Region, shared: &SharedStorefront) -> anyhow::Result<()> {
    let Some(element) = document
        .query_selector(region.selector())
        .map_err(|e| anyhow!("bad selector {}: {e:?}", region.selector()))?
    else {
        tracing::debug!(?region, "region missing from page; not bound");
        return Ok(());
    };

    for &kind in region.events() {
        let shared = Rc::clone(shared);
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(source) = event::snapshot(&event) else {
                return;
            };
            let ui_event = UiEvent { kind, source };
            match shared.try_borrow_mut() {
                Ok(mut storefront) => storefront.handle(region, &ui_event),
                Err(_) => tracing::warn!(?region, "event arrived while storefront busy; dropped"),
            }
        });
        element
            .add_event_listener_with_callback(kind.as_str(), listener.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("binding {} on {region:?}: {e:?}", kind.as_str()))?;
        // Listeners live as long as the page.
        listener.forget();
    }
    Ok(())
}

fn document() -> anyhow::Result<web_sys::Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no window document"))
}

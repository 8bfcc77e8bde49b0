//! `storefront-web`
//!
//! **Responsibility:** the product listing page.
//!
//! This crate provides:
//! - Catalog fetch from the product service (one GET at startup)
//! - Markup rendering for the product grid, filter panels and cart badge
//! - Event interpretation and dispatch onto the listing state
//! - The wasm32 browser entry point binding all of the above to the DOM
//!
//! The page is a **thin shell** around `storefront-catalog`: every decision
//! about which products are shown lives there.

pub mod app;
pub mod client;
pub mod config;
pub mod dom;
pub mod intent;
pub mod render;
pub mod surface;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::Storefront;
pub use client::{CatalogError, CatalogSource, HttpCatalogSource};
pub use config::StorefrontConfig;
pub use dom::{Region, Target};
pub use intent::{EventKind, EventSource, Intent, UiEvent};
pub use render::Renderer;
pub use surface::{MemorySurface, Surface};
pub use view::{Overlay, Panel, Section, ViewState};

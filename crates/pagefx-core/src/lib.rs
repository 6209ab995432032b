#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Cosmetic page behaviors expressed against an injected page surface.
//!
//! # Design
//! - Every behavior depends only on the surface capabilities it touches, so
//!   the browser binding and the in-memory fake are interchangeable.
//! - Handlers run to completion on the page event queue; nothing awaits.
//! - Runtime failures inside a handler are logged and swallowed; only
//!   bootstrap registration failures reach the caller.

pub mod back_to_top;
pub mod config;
pub mod error;
pub mod page;
pub mod reveal;
pub mod ripple;
pub mod styles;
pub mod surface;

pub use back_to_top::{BackToTop, Visibility};
pub use config::{BackToTopSettings, EffectsSettings, RevealSettings, RippleSettings};
pub use error::{ConfigError, PageFxError, Result, SurfaceError};
pub use page::PageEffects;
pub use reveal::RevealOnScroll;
pub use ripple::{RippleEffect, RippleGeometry};
pub use styles::StyleInjector;
pub use surface::{
    ClickPoint, ElementBox, ElementFactory, EventHub, IdQuery, IntersectionEntry,
    IntersectionHandler, IntersectionWatch, MarkerQuery, PageElement, PageSurface, Point,
    ScrollBehavior, ScrollRequest, Size, StyleSink, Viewport,
};

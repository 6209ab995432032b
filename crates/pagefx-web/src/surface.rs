//! `web-sys` implementation of the page surface.

use gloo::events::EventListener;
use pagefx_core::{
    ClickPoint, ElementBox, ElementFactory, EventHub, IdQuery, IntersectionEntry,
    IntersectionHandler, IntersectionWatch, MarkerQuery, PageElement, PageSurface, Point,
    ScrollBehavior, ScrollRequest, Size, StyleSink, SurfaceError, Viewport,
};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlCollection, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollToOptions, Window,
};

/// Render a thrown JS value for error messages.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}

fn collect(collection: &HtmlCollection) -> Vec<WebElement> {
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .map(WebElement)
        .collect()
}

/// Live DOM element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(pub Element);

impl PageElement for WebElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), SurfaceError> {
        let Some(html) = self.0.dyn_ref::<HtmlElement>() else {
            return Err(SurfaceError::StyleWrite {
                property: property.to_string(),
                reason: format!("<{}> has no inline style", self.0.tag_name()),
            });
        };
        html.style()
            .set_property(property, value)
            .map_err(|err| SurfaceError::StyleWrite {
                property: property.to_string(),
                reason: describe(&err),
            })
    }

    fn add_class(&self, class: &str) -> Result<(), SurfaceError> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|err| SurfaceError::ClassList {
                class: class.to_string(),
                reason: describe(&err),
            })
    }

    fn remove_class(&self, class: &str) -> Result<(), SurfaceError> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|err| SurfaceError::ClassList {
                class: class.to_string(),
                reason: describe(&err),
            })
    }

    fn box_metrics(&self) -> ElementBox {
        let rect = self.0.get_bounding_client_rect();
        ElementBox {
            origin: Point::new(rect.left(), rect.top()),
            size: Size::new(
                f64::from(self.0.client_width()),
                f64::from(self.0.client_height()),
            ),
        }
    }

    fn first_descendant_with_class(&self, class: &str) -> Option<Self> {
        self.0.get_elements_by_class_name(class).item(0).map(Self)
    }

    fn detach(&self) {
        self.0.remove();
    }

    fn append_child(&self, child: &Self) -> Result<(), SurfaceError> {
        self.0
            .append_child(&child.0)
            .map(|_| ())
            .map_err(|err| SurfaceError::AppendChild {
                reason: describe(&err),
            })
    }
}

/// Browser window and document.
#[derive(Clone, Debug)]
pub struct WebSurface {
    window: Window,
    document: Document,
}

impl WebSurface {
    /// Surface for the current browsing context, if it has a document.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Underlying window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }
}

impl PageSurface for WebSurface {
    type Element = WebElement;
}

impl MarkerQuery for WebSurface {
    fn query_marker(&self, class: &str) -> Vec<WebElement> {
        collect(&self.document.get_elements_by_class_name(class))
    }
}

impl IdQuery for WebSurface {
    fn query_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }
}

impl StyleSink for WebSurface {
    fn append_style_block(&self, css: &str) -> Result<(), SurfaceError> {
        let head = self.document.head().ok_or(SurfaceError::MissingStyleHost)?;
        let style = self.create_element("style")?;
        style.0.set_text_content(Some(css));
        head.append_child(&style.0)
            .map(|_| ())
            .map_err(|err| SurfaceError::AppendChild {
                reason: describe(&err),
            })
    }
}

impl ElementFactory for WebSurface {
    fn create_element(&self, tag: &str) -> Result<WebElement, SurfaceError> {
        self.document
            .create_element(tag)
            .map(WebElement)
            .map_err(|err| SurfaceError::ElementCreation {
                tag: tag.to_string(),
                reason: describe(&err),
            })
    }
}

impl IntersectionWatch for WebSurface {
    fn watch_intersections(
        &self,
        targets: &[WebElement],
        threshold: f64,
        mut handler: IntersectionHandler<WebElement>,
    ) -> Result<(), SurfaceError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |records: js_sys::Array, _observer: IntersectionObserver| {
                let entries: Vec<IntersectionEntry<WebElement>> = records
                    .iter()
                    .filter_map(|record| record.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|record| IntersectionEntry {
                        is_intersecting: record.is_intersecting(),
                        target: WebElement(record.target()),
                    })
                    .collect();
                handler(entries.as_slice());
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| SurfaceError::Observer {
                    reason: describe(&err),
                })?;
        for target in targets {
            observer.observe(&target.0);
        }
        // Observed targets keep the observer alive for the page lifetime.
        callback.forget();
        Ok(())
    }
}

impl Viewport for WebSurface {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl EventHub for WebSurface {
    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), SurfaceError> {
        if self.document.ready_state() == "loading" {
            EventListener::once(&self.document, "DOMContentLoaded", move |_| {
                debug!("document parsed");
                handler();
            })
            .forget();
        } else {
            handler();
        }
        Ok(())
    }

    fn on_scroll(&self, mut handler: Box<dyn FnMut()>) -> Result<(), SurfaceError> {
        EventListener::new(&self.window, "scroll", move |_| handler()).forget();
        Ok(())
    }

    fn on_click(
        &self,
        target: &WebElement,
        mut handler: Box<dyn FnMut(ClickPoint)>,
    ) -> Result<(), SurfaceError> {
        EventListener::new(&target.0, "click", move |event| {
            if let Some(click) = event.dyn_ref::<MouseEvent>() {
                handler(Point::new(
                    f64::from(click.client_x()),
                    f64::from(click.client_y()),
                ));
            }
        })
        .forget();
        Ok(())
    }
}

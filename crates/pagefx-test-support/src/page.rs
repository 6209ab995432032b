//! In-memory page surface.
//!
//! `FakePage` keeps a small element tree plus every registered handler, and
//! lets tests fire page-ready, scroll, click and intersection triggers by hand.
//! Handlers are taken out of the page while they run so they may call back
//! into it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use pagefx_core::{
    ClickPoint, ElementBox, ElementFactory, EventHub, IdQuery, IntersectionEntry,
    IntersectionHandler, IntersectionWatch, MarkerQuery, PageElement, PageSurface,
    ScrollRequest, StyleSink, SurfaceError, Viewport,
};

const ROOT: usize = 0;

type ClickHandler = Box<dyn FnMut(ClickPoint)>;

struct Node {
    tag: String,
    dom_id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    styles_locked: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    metrics: ElementBox,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            dom_id: None,
            classes: Vec::new(),
            styles: BTreeMap::new(),
            styles_locked: false,
            parent: None,
            children: Vec::new(),
            metrics: ElementBox::default(),
        }
    }
}

struct Watcher {
    targets: Vec<usize>,
    threshold: f64,
    handler: IntersectionHandler<FakeElement>,
}

struct PageState {
    nodes: Vec<Node>,
    ready: bool,
    has_style_host: bool,
    reject_observers: bool,
    ready_handlers: Vec<Box<dyn FnOnce()>>,
    scroll_handlers: Vec<Box<dyn FnMut()>>,
    click_handlers: Vec<(usize, ClickHandler)>,
    watchers: Vec<Watcher>,
    style_blocks: Vec<String>,
    scroll_offset: f64,
    scroll_requests: Vec<ScrollRequest>,
}

impl PageState {
    fn descendants(&self, root: usize) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack: Vec<usize> = self.nodes[root].children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }
        order
    }

    fn is_ancestor(&self, ancestor: usize, mut node: usize) -> bool {
        while let Some(parent) = self.nodes[node].parent {
            if parent == ancestor {
                return true;
            }
            node = parent;
        }
        false
    }

    fn detach(&mut self, index: usize) {
        if let Some(parent) = self.nodes[index].parent.take() {
            self.nodes[parent].children.retain(|child| *child != index);
        }
    }
}

/// In-memory page implementing every surface capability.
#[derive(Clone)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FakePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FakePage")
            .field("elements", &state.nodes.len())
            .field("ready", &state.ready)
            .field("scroll_offset", &state.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl FakePage {
    /// Empty page whose document has not finished parsing yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState {
                nodes: vec![Node::new("body")],
                ready: false,
                has_style_host: true,
                reject_observers: false,
                ready_handlers: Vec::new(),
                scroll_handlers: Vec::new(),
                click_handlers: Vec::new(),
                watchers: Vec::new(),
                style_blocks: Vec::new(),
                scroll_offset: 0.0,
                scroll_requests: Vec::new(),
            })),
        }
    }

    /// Page with no region able to receive style blocks.
    #[must_use]
    pub fn without_style_host() -> Self {
        let page = Self::new();
        page.state.borrow_mut().has_style_host = false;
        page
    }

    /// Make every future intersection watcher registration fail.
    pub fn reject_observers(&self) {
        self.state.borrow_mut().reject_observers = true;
    }

    /// Append a `tag` element carrying `classes` to the page body.
    #[must_use]
    pub fn add_element(&self, tag: &str, classes: &[&str]) -> FakeElement {
        let mut node = Node::new(tag);
        node.classes = classes.iter().map(ToString::to_string).collect();
        self.insert(node)
    }

    /// Append a `tag` element with identifier `id` to the page body.
    #[must_use]
    pub fn add_element_with_id(&self, tag: &str, id: &str) -> FakeElement {
        let mut node = Node::new(tag);
        node.dom_id = Some(id.to_string());
        self.insert(node)
    }

    fn insert(&self, mut node: Node) -> FakeElement {
        let mut state = self.state.borrow_mut();
        let index = state.nodes.len();
        node.parent = Some(ROOT);
        state.nodes.push(node);
        state.nodes[ROOT].children.push(index);
        FakeElement {
            page: Rc::clone(&self.state),
            index,
        }
    }

    /// Mark the document parsed and run every queued ready handler.
    pub fn fire_ready(&self) {
        let handlers = {
            let mut state = self.state.borrow_mut();
            state.ready = true;
            std::mem::take(&mut state.ready_handlers)
        };
        for handler in handlers {
            handler();
        }
    }

    /// Move the viewport to `offset` and dispatch a scroll event.
    pub fn scroll(&self, offset: f64) {
        let mut handlers = {
            let mut state = self.state.borrow_mut();
            state.scroll_offset = offset;
            std::mem::take(&mut state.scroll_handlers)
        };
        for handler in &mut handlers {
            handler();
        }
        let mut state = self.state.borrow_mut();
        handlers.append(&mut state.scroll_handlers);
        state.scroll_handlers = handlers;
    }

    /// Dispatch a click at `point` on `target`.
    pub fn click(&self, target: &FakeElement, point: ClickPoint) {
        let mut handlers = std::mem::take(&mut self.state.borrow_mut().click_handlers);
        for (index, handler) in &mut handlers {
            if *index == target.index {
                handler(point);
            }
        }
        let mut state = self.state.borrow_mut();
        handlers.append(&mut state.click_handlers);
        state.click_handlers = handlers;
    }

    /// Report intersection changes to every watcher observing the elements.
    pub fn intersect(&self, changes: &[(&FakeElement, bool)]) {
        let mut watchers = std::mem::take(&mut self.state.borrow_mut().watchers);
        for watcher in &mut watchers {
            let entries: Vec<IntersectionEntry<FakeElement>> = changes
                .iter()
                .filter(|(element, _)| watcher.targets.contains(&element.index))
                .map(|(element, is_intersecting)| IntersectionEntry {
                    target: (*element).clone(),
                    is_intersecting: *is_intersecting,
                })
                .collect();
            if !entries.is_empty() {
                (watcher.handler)(entries.as_slice());
            }
        }
        let mut state = self.state.borrow_mut();
        watchers.append(&mut state.watchers);
        state.watchers = watchers;
    }

    /// Style blocks appended so far, in order.
    #[must_use]
    pub fn style_blocks(&self) -> Vec<String> {
        self.state.borrow().style_blocks.clone()
    }

    /// Scroll requests issued so far, in order.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.state.borrow().scroll_requests.clone()
    }

    /// Thresholds of the registered intersection watchers.
    #[must_use]
    pub fn watcher_thresholds(&self) -> Vec<f64> {
        self.state
            .borrow()
            .watchers
            .iter()
            .map(|watcher| watcher.threshold)
            .collect()
    }

    /// Number of registered scroll handlers.
    #[must_use]
    pub fn scroll_listener_count(&self) -> usize {
        self.state.borrow().scroll_handlers.len()
    }

    /// Number of ready handlers still waiting for the document.
    #[must_use]
    pub fn pending_ready_count(&self) -> usize {
        self.state.borrow().ready_handlers.len()
    }
}

/// Handle to an element of a [`FakePage`].
#[derive(Clone)]
pub struct FakeElement {
    page: Rc<RefCell<PageState>>,
    index: usize,
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.page, &other.page) && self.index == other.index
    }
}

impl fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.page.borrow();
        let node = &state.nodes[self.index];
        f.debug_struct("FakeElement")
            .field("index", &self.index)
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .finish()
    }
}

impl FakeElement {
    fn handle(&self, index: usize) -> Self {
        Self {
            page: Rc::clone(&self.page),
            index,
        }
    }

    /// Set the origin and client size reported by [`PageElement::box_metrics`].
    pub fn set_metrics(&self, metrics: ElementBox) {
        self.page.borrow_mut().nodes[self.index].metrics = metrics;
    }

    /// Make every inline style write on this element fail.
    pub fn lock_styles(&self) {
        self.page.borrow_mut().nodes[self.index].styles_locked = true;
    }

    /// Current inline value of `property`.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.page.borrow().nodes[self.index]
            .styles
            .get(property)
            .cloned()
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.page.borrow().nodes[self.index]
            .classes
            .iter()
            .any(|existing| existing == class)
    }

    /// Element tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.page.borrow().nodes[self.index].tag.clone()
    }

    /// Direct children, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        let children = self.page.borrow().nodes[self.index].children.clone();
        children.into_iter().map(|index| self.handle(index)).collect()
    }

    /// Direct children carrying `class`.
    #[must_use]
    pub fn children_with_class(&self, class: &str) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| child.has_class(class))
            .collect()
    }

    /// Whether the element is reachable from the page body.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.page.borrow().is_ancestor(ROOT, self.index)
    }
}

fn class_token(class: &str) -> Result<(), SurfaceError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(SurfaceError::ClassList {
            class: class.to_string(),
            reason: "invalid token".to_string(),
        });
    }
    Ok(())
}

impl PageElement for FakeElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), SurfaceError> {
        let mut state = self.page.borrow_mut();
        let node = &mut state.nodes[self.index];
        if node.styles_locked {
            return Err(SurfaceError::StyleWrite {
                property: property.to_string(),
                reason: "styles locked".to_string(),
            });
        }
        node.styles.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn add_class(&self, class: &str) -> Result<(), SurfaceError> {
        class_token(class)?;
        let mut state = self.page.borrow_mut();
        let classes = &mut state.nodes[self.index].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), SurfaceError> {
        class_token(class)?;
        self.page.borrow_mut().nodes[self.index]
            .classes
            .retain(|existing| existing != class);
        Ok(())
    }

    fn box_metrics(&self) -> ElementBox {
        self.page.borrow().nodes[self.index].metrics
    }

    fn first_descendant_with_class(&self, class: &str) -> Option<Self> {
        let state = self.page.borrow();
        state
            .descendants(self.index)
            .into_iter()
            .find(|index| state.nodes[*index].classes.iter().any(|c| c == class))
            .map(|index| self.handle(index))
    }

    fn detach(&self) {
        self.page.borrow_mut().detach(self.index);
    }

    fn append_child(&self, child: &Self) -> Result<(), SurfaceError> {
        if !Rc::ptr_eq(&self.page, &child.page) {
            return Err(SurfaceError::AppendChild {
                reason: "child belongs to another page".to_string(),
            });
        }
        let mut state = self.page.borrow_mut();
        if child.index == self.index
            || child.index == ROOT
            || state.is_ancestor(child.index, self.index)
        {
            return Err(SurfaceError::AppendChild {
                reason: "child would contain its parent".to_string(),
            });
        }
        state.detach(child.index);
        state.nodes[child.index].parent = Some(self.index);
        state.nodes[self.index].children.push(child.index);
        Ok(())
    }
}

impl PageSurface for FakePage {
    type Element = FakeElement;
}

impl MarkerQuery for FakePage {
    fn query_marker(&self, class: &str) -> Vec<FakeElement> {
        let state = self.state.borrow();
        state
            .descendants(ROOT)
            .into_iter()
            .filter(|index| state.nodes[*index].classes.iter().any(|c| c == class))
            .map(|index| FakeElement {
                page: Rc::clone(&self.state),
                index,
            })
            .collect()
    }
}

impl IdQuery for FakePage {
    fn query_id(&self, id: &str) -> Option<FakeElement> {
        let state = self.state.borrow();
        state
            .descendants(ROOT)
            .into_iter()
            .find(|index| state.nodes[*index].dom_id.as_deref() == Some(id))
            .map(|index| FakeElement {
                page: Rc::clone(&self.state),
                index,
            })
    }
}

impl StyleSink for FakePage {
    fn append_style_block(&self, css: &str) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        if !state.has_style_host {
            return Err(SurfaceError::MissingStyleHost);
        }
        state.style_blocks.push(css.to_string());
        Ok(())
    }
}

impl ElementFactory for FakePage {
    fn create_element(&self, tag: &str) -> Result<FakeElement, SurfaceError> {
        if tag.is_empty() {
            return Err(SurfaceError::ElementCreation {
                tag: tag.to_string(),
                reason: "empty tag name".to_string(),
            });
        }
        let mut state = self.state.borrow_mut();
        let index = state.nodes.len();
        state.nodes.push(Node::new(tag));
        Ok(FakeElement {
            page: Rc::clone(&self.state),
            index,
        })
    }
}

impl IntersectionWatch for FakePage {
    fn watch_intersections(
        &self,
        targets: &[FakeElement],
        threshold: f64,
        handler: IntersectionHandler<FakeElement>,
    ) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        if state.reject_observers {
            return Err(SurfaceError::Observer {
                reason: "intersection watching unsupported".to_string(),
            });
        }
        state.watchers.push(Watcher {
            targets: targets.iter().map(|target| target.index).collect(),
            threshold,
            handler,
        });
        Ok(())
    }
}

impl Viewport for FakePage {
    fn scroll_offset(&self) -> f64 {
        self.state.borrow().scroll_offset
    }

    fn scroll_to(&self, request: ScrollRequest) {
        self.state.borrow_mut().scroll_requests.push(request);
    }
}

impl EventHub for FakePage {
    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), SurfaceError> {
        let ready = self.state.borrow().ready;
        if ready {
            handler();
        } else {
            self.state.borrow_mut().ready_handlers.push(handler);
        }
        Ok(())
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<(), SurfaceError> {
        self.state.borrow_mut().scroll_handlers.push(handler);
        Ok(())
    }

    fn on_click(
        &self,
        target: &FakeElement,
        handler: Box<dyn FnMut(ClickPoint)>,
    ) -> Result<(), SurfaceError> {
        if !Rc::ptr_eq(&self.state, &target.page) {
            return Err(SurfaceError::Listener {
                event: "click",
                reason: "target belongs to another page".to_string(),
            });
        }
        self.state.borrow_mut().click_handlers.push((target.index, handler));
        Ok(())
    }
}

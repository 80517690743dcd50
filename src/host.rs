//! Host Document Seam
//!
//! The surface this crate consumes from the embedding document, plus a
//! recording stub host for tests and demos.

use std::collections::HashMap;

use crate::vendor::Vendor;

/// Opaque handle to a host element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// CSS display-mode media feature values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Browser,
    MinimalUi,
    Standalone,
    Fullscreen,
}

impl DisplayMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "browser" => Some(Self::Browser),
            "minimal-ui" => Some(Self::MinimalUi),
            "standalone" => Some(Self::Standalone),
            "fullscreen" => Some(Self::Fullscreen),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::MinimalUi => "minimal-ui",
            Self::Standalone => "standalone",
            Self::Fullscreen => "fullscreen",
        }
    }
}

/// Everything consumed from the embedding document.
///
/// Fullscreen state belongs to the host; callers re-query it instead of
/// caching. `try_enter`/`try_exit` invoke the vendor's method if present
/// and report presence, never outcome — a request may be denied or granted
/// later, observable only through `fullscreen_element` or a change
/// notification.
pub trait DocumentHost {
    /// Root document element, the only fullscreen target
    fn root_element(&self) -> NodeId;

    /// Invoke the vendor's enter method on `target` if present
    fn try_enter(&mut self, vendor: Vendor, target: NodeId) -> bool;

    /// Invoke the vendor's exit method if present. Exit is document-global,
    /// not per-element.
    fn try_exit(&mut self, vendor: Vendor) -> bool;

    /// The vendor's current-fullscreen-element property. Pure query.
    fn fullscreen_element(&self, vendor: Vendor) -> Option<NodeId>;

    /// Evaluate a display-mode media query
    fn matches_display_mode(&self, mode: DisplayMode) -> bool;

    /// Legacy standalone navigation flag
    fn standalone_flag(&self) -> bool;

    /// Set a style variable on the root element
    fn set_style_variable(&mut self, name: &str, value: &str);

    /// Scroll the viewport
    fn scroll_to(&mut self, x: i32, y: i32);

    /// Dispatch a synthetic event by name
    fn dispatch_event(&mut self, name: &str);
}

impl<T: DocumentHost + ?Sized> DocumentHost for Box<T> {
    fn root_element(&self) -> NodeId {
        (**self).root_element()
    }

    fn try_enter(&mut self, vendor: Vendor, target: NodeId) -> bool {
        (**self).try_enter(vendor, target)
    }

    fn try_exit(&mut self, vendor: Vendor) -> bool {
        (**self).try_exit(vendor)
    }

    fn fullscreen_element(&self, vendor: Vendor) -> Option<NodeId> {
        (**self).fullscreen_element(vendor)
    }

    fn matches_display_mode(&self, mode: DisplayMode) -> bool {
        (**self).matches_display_mode(mode)
    }

    fn standalone_flag(&self) -> bool {
        (**self).standalone_flag()
    }

    fn set_style_variable(&mut self, name: &str, value: &str) {
        (**self).set_style_variable(name, value)
    }

    fn scroll_to(&mut self, x: i32, y: i32) {
        (**self).scroll_to(x, y)
    }

    fn dispatch_event(&mut self, name: &str) {
        (**self).dispatch_event(name)
    }
}

/// Stub host document.
///
/// Records every invocation so callers can assert on what reached the
/// host. A `try_enter` call never flips fullscreen state by itself;
/// simulate the host granting with `grant_fullscreen`, then deliver the
/// change notification.
#[derive(Debug, Default)]
pub struct StubHost {
    supported: Vec<Vendor>,
    elements: HashMap<Vendor, NodeId>,
    matching_modes: Vec<DisplayMode>,
    standalone: bool,
    style_variables: HashMap<String, String>,
    scroll_position: (i32, i32),
    dispatched: Vec<String>,
    enter_calls: HashMap<Vendor, u32>,
    exit_calls: HashMap<Vendor, u32>,
}

impl StubHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose one vendor's API flavor (enter and exit)
    pub fn support_vendor(&mut self, vendor: Vendor) {
        if !self.supported.contains(&vendor) {
            self.supported.push(vendor);
        }
    }

    /// Make a display-mode media query match
    pub fn match_display_mode(&mut self, mode: DisplayMode) {
        if !self.matching_modes.contains(&mode) {
            self.matching_modes.push(mode);
        }
    }

    pub fn set_standalone_flag(&mut self, standalone: bool) {
        self.standalone = standalone;
    }

    // === Host-side state transitions ===

    /// Simulate the host granting fullscreen on the given vendor's slot
    pub fn grant_fullscreen(&mut self, vendor: Vendor) {
        let root = self.root_element();
        self.elements.insert(vendor, root);
    }

    /// Simulate the host leaving fullscreen
    pub fn clear_fullscreen(&mut self) {
        self.elements.clear();
    }

    // === Recorded observations ===

    pub fn enter_calls(&self, vendor: Vendor) -> u32 {
        self.enter_calls.get(&vendor).copied().unwrap_or(0)
    }

    pub fn exit_calls(&self, vendor: Vendor) -> u32 {
        self.exit_calls.get(&vendor).copied().unwrap_or(0)
    }

    pub fn style_variable(&self, name: &str) -> Option<&str> {
        self.style_variables.get(name).map(String::as_str)
    }

    pub fn scroll_position(&self) -> (i32, i32) {
        self.scroll_position
    }

    /// How many times an event name was dispatched
    pub fn dispatch_count(&self, name: &str) -> usize {
        self.dispatched.iter().filter(|n| *n == name).count()
    }
}

impl DocumentHost for StubHost {
    fn root_element(&self) -> NodeId {
        NodeId(1)
    }

    fn try_enter(&mut self, vendor: Vendor, _target: NodeId) -> bool {
        if !self.supported.contains(&vendor) {
            return false;
        }
        *self.enter_calls.entry(vendor).or_insert(0) += 1;
        true
    }

    fn try_exit(&mut self, vendor: Vendor) -> bool {
        if !self.supported.contains(&vendor) {
            return false;
        }
        *self.exit_calls.entry(vendor).or_insert(0) += 1;
        true
    }

    fn fullscreen_element(&self, vendor: Vendor) -> Option<NodeId> {
        self.elements.get(&vendor).copied()
    }

    fn matches_display_mode(&self, mode: DisplayMode) -> bool {
        self.matching_modes.contains(&mode)
    }

    fn standalone_flag(&self) -> bool {
        self.standalone
    }

    fn set_style_variable(&mut self, name: &str, value: &str) {
        self.style_variables.insert(name.to_string(), value.to_string());
    }

    fn scroll_to(&mut self, x: i32, y: i32) {
        self.scroll_position = (x, y);
    }

    fn dispatch_event(&mut self, name: &str) {
        self.dispatched.push(name.to_string());
    }
}

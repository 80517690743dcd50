//! Vendor Naming Conventions
//!
//! The four vendor variants of the fullscreen API and their probe order.

/// Vendor flavor of the fullscreen API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Standard,
    Webkit,
    Ms,
    Moz,
}

impl Vendor {
    /// Fixed probe order. A host implements at most one naming convention,
    /// so the first present method wins.
    pub const PRIORITY: [Vendor; 4] = [Self::Standard, Self::Webkit, Self::Ms, Self::Moz];

    /// Enter-fullscreen method name on the target element
    pub fn enter_method(&self) -> &'static str {
        match self {
            Self::Standard => "requestFullscreen",
            Self::Webkit => "webkitRequestFullscreen",
            Self::Ms => "msRequestFullscreen",
            Self::Moz => "mozRequestFullScreen",
        }
    }

    /// Exit-fullscreen method name on the document
    pub fn exit_method(&self) -> &'static str {
        match self {
            Self::Standard => "exitFullscreen",
            Self::Webkit => "webkitExitFullscreen",
            Self::Ms => "msExitFullscreen",
            Self::Moz => "mozCancelFullScreen",
        }
    }

    /// Current-fullscreen-element property name on the document
    pub fn element_property(&self) -> &'static str {
        match self {
            Self::Standard => "fullscreenElement",
            Self::Webkit => "webkitFullscreenElement",
            Self::Ms => "msFullscreenElement",
            Self::Moz => "mozFullScreenElement",
        }
    }

    /// State-change notification name
    pub fn change_event(&self) -> &'static str {
        match self {
            Self::Standard => "fullscreenchange",
            Self::Webkit => "webkitfullscreenchange",
            Self::Ms => "msfullscreenchange",
            Self::Moz => "mozfullscreenchange",
        }
    }

    /// Reverse lookup for change-notification routing
    pub fn from_change_event(name: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|v| v.change_event() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            Vendor::PRIORITY,
            [Vendor::Standard, Vendor::Webkit, Vendor::Ms, Vendor::Moz]
        );
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Vendor::Standard.enter_method(), "requestFullscreen");
        assert_eq!(Vendor::Webkit.enter_method(), "webkitRequestFullscreen");
        assert_eq!(Vendor::Moz.exit_method(), "mozCancelFullScreen");
        assert_eq!(Vendor::Ms.element_property(), "msFullscreenElement");
    }

    #[test]
    fn test_change_event_round_trip() {
        for vendor in Vendor::PRIORITY {
            assert_eq!(Vendor::from_change_event(vendor.change_event()), Some(vendor));
        }
        assert_eq!(Vendor::from_change_event("resize"), None);
    }
}

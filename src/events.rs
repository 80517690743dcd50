//! Host Notifications
//!
//! Typed view of the document events the shell subscribes to, and the
//! one-shot user-gesture registration.

use crate::vendor::Vendor;

/// User-interaction kinds that can carry a fullscreen request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    TouchStart,
    Click,
    KeyDown,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [Self::TouchStart, Self::Click, Self::KeyDown];

    pub fn event_name(&self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::Click => "click",
            Self::KeyDown => "keydown",
        }
    }
}

/// A host notification the shell reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Document finished loading
    Ready,
    /// Fullscreen state changed, on any vendor's event name
    FullscreenChange,
    OrientationChange,
    Resize,
    Interaction(InteractionKind),
}

impl HostEvent {
    /// Map a document event name to a typed notification. Names outside
    /// the subscription set map to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "DOMContentLoaded" {
            return Some(Self::Ready);
        }
        if Vendor::from_change_event(name).is_some() {
            return Some(Self::FullscreenChange);
        }
        match name {
            "orientationchange" => Some(Self::OrientationChange),
            "resize" => Some(Self::Resize),
            _ => InteractionKind::ALL
                .into_iter()
                .find(|kind| kind.event_name() == name)
                .map(Self::Interaction),
        }
    }
}

/// One-shot gesture registration.
///
/// All three interaction kinds arm together and the first one to fire
/// consumes the opportunity for the whole group, mirroring listeners that
/// deregister each other on first invocation.
#[derive(Debug, Default)]
pub struct GestureListeners {
    armed: Vec<InteractionKind>,
}

impl GestureListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register all three interaction kinds. Idempotent.
    pub fn arm(&mut self) {
        self.armed = InteractionKind::ALL.to_vec();
    }

    /// Consume the group opportunity if `kind` is registered. Returns
    /// whether it was; afterwards no kind is registered.
    pub fn consume(&mut self, kind: InteractionKind) -> bool {
        if !self.armed.contains(&kind) {
            return false;
        }
        self.armed.clear();
        true
    }

    pub fn is_armed(&self) -> bool {
        !self.armed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_mapping() {
        assert_eq!(HostEvent::from_name("DOMContentLoaded"), Some(HostEvent::Ready));
        assert_eq!(HostEvent::from_name("orientationchange"), Some(HostEvent::OrientationChange));
        assert_eq!(HostEvent::from_name("resize"), Some(HostEvent::Resize));
        assert_eq!(
            HostEvent::from_name("click"),
            Some(HostEvent::Interaction(InteractionKind::Click))
        );
        assert_eq!(
            HostEvent::from_name("touchstart"),
            Some(HostEvent::Interaction(InteractionKind::TouchStart))
        );
        assert_eq!(HostEvent::from_name("scroll"), None);
    }

    #[test]
    fn test_all_vendor_change_events_map() {
        for vendor in Vendor::PRIORITY {
            assert_eq!(
                HostEvent::from_name(vendor.change_event()),
                Some(HostEvent::FullscreenChange)
            );
        }
    }

    #[test]
    fn test_gestures_consume_as_a_group() {
        let mut gestures = GestureListeners::new();
        gestures.arm();
        assert!(gestures.is_armed());

        assert!(gestures.consume(InteractionKind::Click));

        // The click consumed touchstart and keydown too
        assert!(!gestures.consume(InteractionKind::TouchStart));
        assert!(!gestures.consume(InteractionKind::KeyDown));
        assert!(!gestures.is_armed());
    }

    #[test]
    fn test_unarmed_gestures_do_not_consume() {
        let mut gestures = GestureListeners::new();
        assert!(!gestures.consume(InteractionKind::Click));
    }
}

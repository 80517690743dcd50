//! PWA Fullscreen Shell
//!
//! Fullscreen activation and safe-area management for pages running as
//! installed web apps. Normalizes the four vendor flavors of the
//! fullscreen API behind one capability surface, requests fullscreen
//! automatically in installed-app contexts (with a user-gesture fallback
//! for hosts that forbid unprompted requests), and keeps safe-area inset
//! adjustments synchronized with fullscreen and orientation changes.
//!
//! The embedding document is consumed only through the [`DocumentHost`]
//! trait; fullscreen state always lives on the host and is re-queried
//! rather than cached.

/// Vendor naming conventions and probe order
pub mod vendor;
/// Host document seam and stub host
pub mod host;
/// Vendor-agnostic enter/exit/query operations
pub mod capability;
/// Typed host notifications and gesture registration
pub mod events;
/// Fire-and-forget deferred actions
pub mod schedule;
/// Activation policy state machine
pub mod policy;
/// Per-document composition root and control facade
pub mod shell;
/// Process-wide shell installation
pub mod global;

pub use events::{HostEvent, InteractionKind};
pub use host::{DisplayMode, DocumentHost, NodeId, StubHost};
pub use policy::{ActivationPolicy, AUTO_ENTER_DELAY_MS, ORIENTATION_SETTLE_MS};
pub use shell::FullscreenShell;
pub use vendor::Vendor;

//! Vendor-Agnostic Fullscreen Operations
//!
//! Normalizes the four vendor API flavors into one enter/exit/query surface.

use crate::host::{DocumentHost, NodeId};
use crate::vendor::Vendor;

/// Request fullscreen on `target`, trying each vendor method in priority
/// order and stopping at the first one present.
///
/// Silently a no-op when the host exposes none of them: the caller cannot
/// distinguish "unsupported" from "not yet granted" and must not assume
/// success either way.
pub fn request_fullscreen(host: &mut dyn DocumentHost, target: NodeId) {
    for vendor in Vendor::PRIORITY {
        if host.try_enter(vendor, target) {
            log::debug!("Fullscreen requested via {}", vendor.enter_method());
            return;
        }
    }
    log::debug!("No fullscreen capability on this host");
}

/// Exit fullscreen, same vendor walk. Exit is document-global.
pub fn exit_fullscreen(host: &mut dyn DocumentHost) {
    for vendor in Vendor::PRIORITY {
        if host.try_exit(vendor) {
            log::debug!("Fullscreen exit via {}", vendor.exit_method());
            return;
        }
    }
    log::debug!("No fullscreen capability on this host");
}

/// True iff any vendor's current-fullscreen-element property is set.
/// Pure query, safe at arbitrary frequency.
pub fn is_fullscreen(host: &dyn DocumentHost) -> bool {
    Vendor::PRIORITY
        .into_iter()
        .any(|vendor| host.fullscreen_element(vendor).is_some())
}

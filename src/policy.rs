//! Fullscreen Activation Policy
//!
//! Decides when to request fullscreen and keeps safe-area adjustments in
//! step with fullscreen and orientation changes. Fullscreen state itself
//! lives on the host and is re-queried at every decision point.

use crate::capability;
use crate::events::{GestureListeners, InteractionKind};
use crate::host::{DisplayMode, DocumentHost};
use crate::schedule::{DeferredAction, DeferredQueue};

/// Delay between document-ready and the automatic fullscreen request,
/// letting the host finish its initial layout and paint
pub const AUTO_ENTER_DELAY_MS: u64 = 1000;

/// Settle delay after an orientation change before reapplying
/// layout-dependent adjustments
pub const ORIENTATION_SETTLE_MS: u64 = 300;

/// Style variables zeroed while hiding system UI
pub const SAFE_AREA_VARS: [&str; 4] = [
    "--safe-area-inset-top",
    "--safe-area-inset-bottom",
    "--safe-area-inset-left",
    "--safe-area-inset-right",
];

/// Zero the safe-area insets and nudge the scroll position to collapse a
/// mobile address bar. Idempotent and best-effort; the nudge is never
/// verified.
pub fn hide_system_ui(host: &mut dyn DocumentHost) {
    host.scroll_to(0, 1);
    for name in SAFE_AREA_VARS {
        host.set_style_variable(name, "0px");
    }
}

/// True when the page runs as an installed app rather than inside normal
/// browser chrome
pub fn installed_app_mode(host: &dyn DocumentHost) -> bool {
    host.matches_display_mode(DisplayMode::Fullscreen)
        || host.matches_display_mode(DisplayMode::Standalone)
        || host.standalone_flag()
}

/// Snapshot of the policy's transient state
#[derive(Debug, Clone, Copy)]
pub struct PolicyStats {
    pub gestures_armed: bool,
    pub pending_deferrals: usize,
}

/// Event-driven activation state machine
#[derive(Debug, Default)]
pub struct ActivationPolicy {
    gestures: GestureListeners,
    deferred: DeferredQueue,
}

impl ActivationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document finished loading. In installed-app mode, schedule the
    /// automatic fullscreen request and hide system UI right away. The
    /// gesture fallback arms either way.
    pub fn document_ready(&mut self, host: &mut dyn DocumentHost, now_ms: u64) {
        if installed_app_mode(host) {
            log::info!("Installed-app mode detected, enabling fullscreen activation");
            self.deferred
                .schedule(DeferredAction::AutoEnter, now_ms + AUTO_ENTER_DELAY_MS);
            hide_system_ui(host);
        }
        self.gestures.arm();
    }

    /// First user gesture of any registered kind requests fullscreen,
    /// then the whole group deregisters. Later gestures do nothing.
    pub fn handle_interaction(&mut self, host: &mut dyn DocumentHost, kind: InteractionKind) {
        if !self.gestures.consume(kind) {
            return;
        }
        log::debug!("User {} consumed the activation gesture", kind.event_name());
        if !capability::is_fullscreen(host) {
            let root = host.root_element();
            capability::request_fullscreen(host, root);
        }
    }

    /// Host reported a fullscreen state change. Entering hides system UI
    /// and dispatches one synthetic resize so dependent layout
    /// recalculates. Leaving reverts nothing.
    pub fn fullscreen_changed(&mut self, host: &mut dyn DocumentHost) {
        if capability::is_fullscreen(host) {
            log::info!("Entered fullscreen");
            hide_system_ui(host);
            host.dispatch_event("resize");
        } else {
            log::info!("Exited fullscreen");
        }
    }

    /// Orientation changed; reapply adjustments once the host has had a
    /// settle window. The fullscreen check happens at fire time.
    pub fn orientation_changed(&mut self, now_ms: u64) {
        self.deferred
            .schedule(DeferredAction::OrientationSettle, now_ms + ORIENTATION_SETTLE_MS);
    }

    /// Viewport resized; keep adjustments applied while fullscreen
    pub fn resized(&mut self, host: &mut dyn DocumentHost) {
        if capability::is_fullscreen(host) {
            hide_system_ui(host);
        }
    }

    /// Run deferred actions that have come due
    pub fn tick(&mut self, host: &mut dyn DocumentHost, now_ms: u64) {
        for action in self.deferred.take_due(now_ms) {
            match action {
                DeferredAction::AutoEnter => {
                    if !capability::is_fullscreen(host) {
                        let root = host.root_element();
                        capability::request_fullscreen(host, root);
                    }
                }
                DeferredAction::OrientationSettle => {
                    if capability::is_fullscreen(host) {
                        hide_system_ui(host);
                        host.dispatch_event("resize");
                    }
                }
            }
        }
    }

    pub fn stats(&self) -> PolicyStats {
        PolicyStats {
            gestures_armed: self.gestures.is_armed(),
            pending_deferrals: self.deferred.pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StubHost;
    use crate::vendor::Vendor;

    fn standalone_host() -> StubHost {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        host.match_display_mode(DisplayMode::Standalone);
        host
    }

    #[test]
    fn test_installed_app_predicate() {
        let mut host = StubHost::new();
        assert!(!installed_app_mode(&host));

        host.match_display_mode(DisplayMode::Fullscreen);
        assert!(installed_app_mode(&host));

        let mut host = StubHost::new();
        host.set_standalone_flag(true);
        assert!(installed_app_mode(&host));
    }

    #[test]
    fn test_auto_enter_waits_for_delay() {
        let mut host = standalone_host();
        let mut policy = ActivationPolicy::new();

        policy.document_ready(&mut host, 0);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);

        policy.tick(&mut host, 999);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);

        policy.tick(&mut host, 1000);
        assert_eq!(host.enter_calls(Vendor::Standard), 1);
    }

    #[test]
    fn test_auto_enter_skipped_when_already_fullscreen() {
        let mut host = standalone_host();
        let mut policy = ActivationPolicy::new();

        policy.document_ready(&mut host, 0);
        host.grant_fullscreen(Vendor::Standard);

        policy.tick(&mut host, 1000);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);
    }

    #[test]
    fn test_ready_outside_installed_app_schedules_nothing() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        policy.document_ready(&mut host, 0);
        assert_eq!(policy.stats().pending_deferrals, 0);
        assert!(policy.stats().gestures_armed);

        policy.tick(&mut host, 60_000);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);
    }

    #[test]
    fn test_ready_in_installed_app_hides_ui_immediately() {
        let mut host = standalone_host();
        let mut policy = ActivationPolicy::new();

        policy.document_ready(&mut host, 0);

        for name in SAFE_AREA_VARS {
            assert_eq!(host.style_variable(name), Some("0px"));
        }
        assert_eq!(host.scroll_position(), (0, 1));
    }

    #[test]
    fn test_first_gesture_requests_once_across_kinds() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        policy.document_ready(&mut host, 0);
        policy.handle_interaction(&mut host, InteractionKind::Click);
        policy.handle_interaction(&mut host, InteractionKind::TouchStart);
        policy.handle_interaction(&mut host, InteractionKind::KeyDown);

        assert_eq!(host.enter_calls(Vendor::Standard), 1);
    }

    #[test]
    fn test_gesture_before_ready_is_ignored() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        policy.handle_interaction(&mut host, InteractionKind::Click);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);
    }

    #[test]
    fn test_gesture_while_fullscreen_consumes_without_request() {
        let mut host = standalone_host();
        let mut policy = ActivationPolicy::new();

        policy.document_ready(&mut host, 0);
        host.grant_fullscreen(Vendor::Standard);

        policy.handle_interaction(&mut host, InteractionKind::KeyDown);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);

        // The opportunity is gone even though no request was issued
        host.clear_fullscreen();
        policy.handle_interaction(&mut host, InteractionKind::Click);
        assert_eq!(host.enter_calls(Vendor::Standard), 0);
    }

    #[test]
    fn test_change_to_active_dispatches_one_resize() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        host.grant_fullscreen(Vendor::Standard);
        policy.fullscreen_changed(&mut host);

        assert_eq!(host.dispatch_count("resize"), 1);
        assert_eq!(host.style_variable("--safe-area-inset-top"), Some("0px"));
    }

    #[test]
    fn test_change_to_inactive_reverts_nothing() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        host.grant_fullscreen(Vendor::Standard);
        policy.fullscreen_changed(&mut host);

        host.clear_fullscreen();
        policy.fullscreen_changed(&mut host);

        // Insets stay zeroed and no extra resize is dispatched
        assert_eq!(host.style_variable("--safe-area-inset-bottom"), Some("0px"));
        assert_eq!(host.dispatch_count("resize"), 1);
    }

    #[test]
    fn test_orientation_settle_waits_and_reapplies() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        host.grant_fullscreen(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        policy.orientation_changed(1000);

        policy.tick(&mut host, 1299);
        assert_eq!(host.dispatch_count("resize"), 0);

        policy.tick(&mut host, 1300);
        assert_eq!(host.dispatch_count("resize"), 1);
        assert_eq!(host.style_variable("--safe-area-inset-left"), Some("0px"));
    }

    #[test]
    fn test_orientation_settle_noop_when_not_fullscreen() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        policy.orientation_changed(0);
        policy.tick(&mut host, 300);

        assert_eq!(host.dispatch_count("resize"), 0);
        assert_eq!(host.style_variable("--safe-area-inset-top"), None);
    }

    #[test]
    fn test_resize_reapplies_only_while_fullscreen() {
        let mut host = StubHost::new();
        host.support_vendor(Vendor::Standard);
        let mut policy = ActivationPolicy::new();

        policy.resized(&mut host);
        assert_eq!(host.style_variable("--safe-area-inset-top"), None);

        host.grant_fullscreen(Vendor::Standard);
        policy.resized(&mut host);
        assert_eq!(host.style_variable("--safe-area-inset-top"), Some("0px"));
    }

    #[test]
    fn test_hide_system_ui_idempotent() {
        let mut host = StubHost::new();

        hide_system_ui(&mut host);
        let first: Vec<_> = SAFE_AREA_VARS
            .iter()
            .map(|name| host.style_variable(name).map(str::to_string))
            .collect();

        hide_system_ui(&mut host);
        let second: Vec<_> = SAFE_AREA_VARS
            .iter()
            .map(|name| host.style_variable(name).map(str::to_string))
            .collect();

        assert_eq!(first, second);
        assert_eq!(host.scroll_position(), (0, 1));
    }
}

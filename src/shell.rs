//! Fullscreen Shell
//!
//! Composition root tying the host document to the activation policy.
//! One instance per host context; the host loop feeds it events by name
//! and pumps its clock.

use crate::capability;
use crate::events::HostEvent;
use crate::host::DocumentHost;
use crate::policy::{ActivationPolicy, PolicyStats};

/// Shell state snapshot
#[derive(Debug, Clone, Copy)]
pub struct ShellStats {
    pub clock_ms: u64,
    pub policy: PolicyStats,
}

/// Fullscreen management for one host document
#[derive(Debug)]
pub struct FullscreenShell<H: DocumentHost> {
    host: H,
    policy: ActivationPolicy,
    clock_ms: u64,
}

impl<H: DocumentHost> FullscreenShell<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            policy: ActivationPolicy::new(),
            clock_ms: 0,
        }
    }

    /// Route a host notification to the policy
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Ready => self.policy.document_ready(&mut self.host, self.clock_ms),
            HostEvent::Interaction(kind) => self.policy.handle_interaction(&mut self.host, kind),
            HostEvent::FullscreenChange => self.policy.fullscreen_changed(&mut self.host),
            HostEvent::OrientationChange => self.policy.orientation_changed(self.clock_ms),
            HostEvent::Resize => self.policy.resized(&mut self.host),
        }
    }

    /// Route a raw document event by name. Names outside the subscription
    /// set are ignored.
    pub fn handle_event_named(&mut self, name: &str) {
        if let Some(event) = HostEvent::from_name(name) {
            self.handle_event(event);
        }
    }

    /// Advance the host loop clock and run due deferred actions
    pub fn tick(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
        self.policy.tick(&mut self.host, now_ms);
    }

    // === Control facade ===
    //
    // Forwards straight to the capability layer; does not touch the
    // gesture opportunity or any other policy state.

    pub fn enter_fullscreen(&mut self) {
        let root = self.host.root_element();
        capability::request_fullscreen(&mut self.host, root);
    }

    pub fn exit_fullscreen(&mut self) {
        capability::exit_fullscreen(&mut self.host);
    }

    pub fn is_fullscreen(&self) -> bool {
        capability::is_fullscreen(&self.host)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn stats(&self) -> ShellStats {
        ShellStats {
            clock_ms: self.clock_ms,
            policy: self.policy.stats(),
        }
    }
}

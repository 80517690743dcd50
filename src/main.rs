//! PWA Fullscreen Shell - Demo Entry Point

use pwa_fullscreen::{global, DisplayMode, FullscreenShell, StubHost, Vendor};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting fullscreen shell demo...");

    // A host that supports only the standard API and runs standalone
    let mut host = StubHost::new();
    host.support_vendor(Vendor::Standard);
    host.match_display_mode(DisplayMode::Standalone);

    let mut shell = FullscreenShell::new(host);

    // Document loads; the automatic request is scheduled
    shell.handle_event_named("DOMContentLoaded");
    log::info!("Pending deferrals: {}", shell.stats().policy.pending_deferrals);

    // Host loop pumps past the post-ready delay; the request goes out
    shell.tick(1000);
    log::info!(
        "Enter invocations on {}: {}",
        Vendor::Standard.enter_method(),
        shell.host().enter_calls(Vendor::Standard)
    );

    // The host grants and notifies
    shell.host_mut().grant_fullscreen(Vendor::Standard);
    shell.handle_event_named("fullscreenchange");
    log::info!("Fullscreen active: {}", shell.is_fullscreen());
    log::info!("Synthetic resizes: {}", shell.host().dispatch_count("resize"));

    // Device rotates; adjustments reapply after the settle window
    shell.handle_event_named("orientationchange");
    shell.tick(1300);
    log::info!("Synthetic resizes: {}", shell.host().dispatch_count("resize"));

    // Process-wide installation for application code
    let mut app_host = StubHost::new();
    app_host.support_vendor(Vendor::Webkit);
    if let Err(e) = global::install(app_host) {
        log::warn!("{}", e);
    }
    global::enter_fullscreen();
    log::info!("Installed shell fullscreen: {}", global::is_fullscreen());
}

//! Input-Bridge relay entry point.
//!
//! Wires the platform injector, the fail-safe guard, and the stdio relay
//! loop, then blocks on standard input until the supervisor closes it.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ build_platform_injector()  -- cfg-selected OS backend
//!  └─ RelayCommandUseCase        -- dispatch + corner fail-safe
//!  └─ RelayLoop::run()           -- stdin line → command → injection → stdout line
//! ```
//!
//! # Process contract
//!
//! - stdin:  one JSON command object per line.
//! - stdout: one JSON status object per parsed line, flushed immediately.
//! - stderr: diagnostics only (`tracing`, `RUST_LOG` tunes verbosity).
//! - exit:   when stdin reaches end-of-file; bad commands never exit.

use std::io;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bridge_relay::application::relay_command::{
    FailSafeConfig, PlatformInputInjector, RelayCommandUseCase,
};
use bridge_relay::infrastructure::stdio::RelayLoop;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr: stdout is the protocol stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    info!("input bridge starting");

    let injector = build_platform_injector()?;
    // The corner fail-safe is always enabled; it is a safety property of the
    // bridge, not something the protocol can switch off.
    let use_case = RelayCommandUseCase::new(injector, FailSafeConfig::default());

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    RelayLoop::new(stdin, stdout, use_case).run();

    info!("input stream closed; shutting down");
    Ok(())
}

#[cfg(target_os = "windows")]
fn build_platform_injector() -> anyhow::Result<Arc<dyn PlatformInputInjector>> {
    use bridge_relay::infrastructure::input_injection::windows::WindowsSendInputInjector;
    Ok(Arc::new(WindowsSendInputInjector::new()))
}

#[cfg(target_os = "linux")]
fn build_platform_injector() -> anyhow::Result<Arc<dyn PlatformInputInjector>> {
    use bridge_relay::infrastructure::input_injection::linux::LinuxXTestInjector;
    Ok(Arc::new(LinuxXTestInjector::new()?))
}

#[cfg(target_os = "macos")]
fn build_platform_injector() -> anyhow::Result<Arc<dyn PlatformInputInjector>> {
    use bridge_relay::infrastructure::input_injection::macos::MacosEventTapInjector;
    Ok(Arc::new(MacosEventTapInjector::new()?))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn build_platform_injector() -> anyhow::Result<Arc<dyn PlatformInputInjector>> {
    use bridge_relay::infrastructure::input_injection::mock::MockInputInjector;
    tracing::warn!("no input backend for this platform; commands will be recorded, not injected");
    Ok(Arc::new(MockInputInjector::new()))
}

//! Penrelay host entry point.
//!
//! Wires the byte source, the core event pipeline, and a pointer driver
//! into one synchronous loop:
//!
//! ```text
//! main()
//!  └─ AppConfig::load()          -- TOML config, defaults for everything
//!  └─ RecordDecoder / TypeSelector
//!       ├─ debug_events mode -> run_inspector (JSON lines on stdout)
//!       └─ otherwise         -> GestureStateMachine [-> RateLimited]
//!                               -> Runtime -> PointerDriver
//! ```
//!
//! The pipeline is deliberately single-threaded: every stage is a pull-based
//! iterator, and the only blocking points are the byte-source read and the
//! rate limiter's pacing sleep.  Closing the byte source (e.g. the remote
//! shell feeding stdin goes away) unwinds the whole pipeline through the
//! terminal error.
//!
//! The pointer driver wired here is the recording mock.  In a production
//! build it is replaced by an OS-level backend (X11 XTest, Win32
//! `SendInput`, CoreGraphics) implementing the same `PointerDriver` trait.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use penrelay_core::domain::ecodes;
use penrelay_core::{
    GestureSource, GestureStateMachine, PositionScaler, RateLimited, RecordDecoder, ScalerConfig,
    TypeSelector,
};
use penrelay_host::application::dispatch::{PointerDriver, Runtime};
use penrelay_host::application::inspect::run_inspector;
use penrelay_host::infrastructure::pointer::mock::MockPointerDriver;
use penrelay_host::AppConfig;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "penrelay.toml".to_string());
    let config = AppConfig::load(Path::new(&config_path))
        .with_context(|| format!("loading configuration from {config_path}"))?;

    // Initialise structured logging; RUST_LOG overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    debug!(?config, "configuration loaded");

    // ── Byte source ───────────────────────────────────────────────────────────
    let source: Box<dyn Read> = if config.tablet.event_source == "-" {
        Box::new(std::io::stdin())
    } else {
        Box::new(
            File::open(&config.tablet.event_source)
                .with_context(|| format!("opening event source {}", config.tablet.event_source))?,
        )
    };
    let decoder = RecordDecoder::new(source);

    // ── Debug mode: dump admitted events instead of driving the pointer ──────
    if config.behavior.debug_events {
        info!("penrelay connected and running (debug event stream)");
        let selector = TypeSelector::new(decoder, vec![ecodes::EV_ABS]);
        run_inspector(selector, &mut std::io::stdout().lock())
            .context("event inspector terminated")?;
        return Ok(());
    }

    // ── Pointer driver and scaler ─────────────────────────────────────────────
    // Production builds swap the mock for an OS backend here.
    let mut driver = MockPointerDriver::new();
    let (screen_w, screen_h) = match (config.screen.width, config.screen.height) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            let (w, h) = driver
                .surface_size()
                .context("querying pointer surface size")?;
            (
                config.screen.width.unwrap_or(w),
                config.screen.height.unwrap_or(h),
            )
        }
    };
    let scaler = PositionScaler::new(ScalerConfig {
        orientation: config.behavior.orientation,
        tablet_width: config.tablet.width,
        tablet_height: config.tablet.height,
        target_width: screen_w,
        target_height: screen_h,
        offset_x: config.screen.offset_x,
        offset_y: config.screen.offset_y,
    });

    // ── Gesture pipeline ──────────────────────────────────────────────────────
    // EV_KEY is admitted alongside EV_ABS so the tool keys can toggle
    // secondary (eraser) mode.
    let selector = TypeSelector::new(decoder, vec![ecodes::EV_ABS, ecodes::EV_KEY]);
    let machine: Box<dyn GestureSource> = if config.behavior.drag {
        Box::new(GestureStateMachine::with_drag(
            selector,
            config.tablet.pressure_threshold,
        ))
    } else {
        Box::new(GestureStateMachine::new(
            selector,
            config.tablet.pressure_threshold,
        ))
    };
    let gestures: Box<dyn GestureSource> = match config.behavior.rate_limit_ms {
        Some(ms) => Box::new(RateLimited::new(machine, Duration::from_millis(ms))),
        None => machine,
    };

    // ── Dispatch loop ─────────────────────────────────────────────────────────
    let mut runtime = Runtime::new(gestures, scaler, driver);
    info!("penrelay connected and running");
    runtime.run();
    runtime.close().context("pipeline terminated")?;
    info!("event stream ended; shutting down");
    Ok(())
}

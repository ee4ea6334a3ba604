//! Horae Runner - Clock Widget Controller
//!
//! Wires the engines to the host:
//!
//! - **Scheduler**: cancellable periodic tick tasks, one per engine
//! - **Controller**: owns all widget state, applies input events and ticks
//! - **Input**: console command parsing into input events
//! - **Config**: intervals, initial preferences, world-clock cities
//! - **Console / Notifier**: terminal render sink and notification adapters
//!
//! ## Architecture
//!
//! ```text
//!   stdin ──► InputEvent ─┐
//!                         ▼
//!                ┌──────────────────┐      ┌───────────────┐
//!                │ WidgetController │ ◄─── │ TickScheduler │
//!                │                  │ Tick │ clock / sw /  │
//!                │  ClockEngine     │      │ timer tasks   │
//!                │  Stopwatch       │      └───────────────┘
//!                │  CountdownTimer  │
//!                └────────┬─────────┘
//!                         │ formatted text
//!                         ▼
//!                ┌──────────────────┐      ┌───────────────┐
//!                │   RenderSink     │      │   Notifier    │
//!                └──────────────────┘      └───────────────┘
//! ```
//!
//! Everything runs on the controller's task; ticks and inputs are handled
//! one at a time, so engine state needs no locking.

pub mod config;
pub mod console;
pub mod controller;
pub mod input;
pub mod notifier;
pub mod scheduler;

// Re-export main types
pub use config::{ConfigError, WidgetConfig};
pub use console::ConsoleSink;
pub use controller::WidgetController;
pub use input::{InputError, InputEvent};
pub use notifier::{LogNotifier, SilentNotifier};
pub use scheduler::{Tick, TickHandle, TickScheduler, TickSource};

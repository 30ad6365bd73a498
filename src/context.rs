//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::monitor::{FlowKind, FlowMonitor};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the session changes (login/logout) - read
    pub session_version: ReadSignal<u32>,
    /// Bumped whenever the session changes (login/logout) - write
    set_session_version: WriteSignal<u32>,
    /// Auth-flow timing metrics, one instance for the whole app
    monitor: StoredValue<FlowMonitor>,
}

impl AppContext {
    pub fn new() -> Self {
        let (session_version, set_session_version) = signal(0u32);
        Self {
            session_version,
            set_session_version,
            monitor: StoredValue::new(FlowMonitor::new()),
        }
    }

    /// Re-runs every gate effect that reads `session_version`.
    pub fn session_changed(&self) {
        self.set_session_version.update(|v| *v += 1);
    }

    /// Records a finished auth flow and logs a one-line summary.
    pub fn record_flow(
        &self,
        kind: FlowKind,
        started_ms: f64,
        success: bool,
        error: Option<String>,
    ) {
        let duration = js_sys::Date::now() - started_ms;
        self.monitor
            .update_value(|m| m.record(kind, duration, success, error));
        web_sys::console::log_1(
            &format!(
                "[monitor] {} flow {} in {duration:.1}ms",
                kind.label(),
                if success { "succeeded" } else { "failed" },
            )
            .into(),
        );
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Flow Monitor
//!
//! Timing and success bookkeeping for the auth flows. One `FlowMonitor`
//! instance owns its metric list and is handed around by reference; there
//! is no ambient global map.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowKind {
    Login,
    Registration,
    Logout,
    PasswordReset,
}

impl FlowKind {
    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Login => "login",
            FlowKind::Registration => "registration",
            FlowKind::Logout => "logout",
            FlowKind::PasswordReset => "password-reset",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowMetric {
    pub kind: FlowKind,
    pub duration_ms: f64,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct FlowMonitor {
    metrics: Vec<FlowMetric>,
}

impl FlowMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        kind: FlowKind,
        duration_ms: f64,
        success: bool,
        error: Option<String>,
    ) {
        self.metrics.push(FlowMetric {
            kind,
            duration_ms,
            success,
            error,
        });
    }

    pub fn metrics(&self) -> &[FlowMetric] {
        &self.metrics
    }

    /// Mean duration over completed flows, optionally filtered by kind.
    pub fn average_duration(&self, kind: Option<FlowKind>) -> f64 {
        let durations: Vec<f64> = self
            .metrics
            .iter()
            .filter(|m| kind.map_or(true, |k| m.kind == k))
            .map(|m| m.duration_ms)
            .collect();
        if durations.is_empty() {
            return 0.0;
        }
        durations.iter().sum::<f64>() / durations.len() as f64
    }

    /// Percentage of successful flows, optionally filtered by kind.
    pub fn success_rate(&self, kind: Option<FlowKind>) -> f64 {
        let selected: Vec<&FlowMetric> = self
            .metrics
            .iter()
            .filter(|m| kind.map_or(true, |k| m.kind == k))
            .collect();
        if selected.is_empty() {
            return 0.0;
        }
        let successful = selected.iter().filter(|m| m.success).count();
        successful as f64 / selected.len() as f64 * 100.0
    }
}

//! Alert Service
//!
//! Transient success/warning/error notifications. The capability is a
//! `Copy` bundle of signals provided via Leptos context, so every screen
//! receives it explicitly instead of reaching for a global.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long an alert stays on screen before auto-dismissing
pub const ALERT_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A single live notification
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u32,
    pub severity: Severity,
    pub message: String,
}

/// Alert capability handed to screens via context
#[derive(Clone, Copy)]
pub struct Alerts {
    /// Live alerts, newest last - read
    pub alerts: ReadSignal<Vec<Alert>>,
    set_alerts: WriteSignal<Vec<Alert>>,
    next_id: StoredValue<u32>,
}

impl Alerts {
    pub fn new() -> Self {
        let (alerts, set_alerts) = signal(Vec::new());
        Self {
            alerts,
            set_alerts,
            next_id: StoredValue::new(0),
        }
    }

    /// Push an alert and schedule its auto-dismiss timer.
    pub fn show(&self, severity: Severity, message: impl Into<String>) {
        let id = self.next_id.with_value(|v| *v) + 1;
        self.next_id.set_value(id);

        let alert = Alert {
            id,
            severity,
            message: message.into(),
        };
        self.set_alerts.update(|alerts| alerts.push(alert));

        let set_alerts = self.set_alerts;
        Timeout::new(ALERT_DISMISS_MS, move || {
            set_alerts.update(|alerts| alerts.retain(|a| a.id != id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Severity::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(Severity::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Severity::Error, message);
    }

    /// Dismiss one alert ahead of its timer.
    pub fn dismiss(&self, id: u32) {
        self.set_alerts.update(|alerts| alerts.retain(|a| a.id != id));
    }
}

/// Get the alert capability from context
pub fn use_alerts() -> Alerts {
    expect_context::<Alerts>()
}

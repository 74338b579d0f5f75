//! Host lifecycle that triggers the demos.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    config::DemoConfig,
    demos,
    output::Console,
    subscribe::{Subscription, Unsubscribeable},
    SourceError, SubscriptionError,
};

/// Lifecycle callbacks a host invokes on a screen.
pub trait Activity {
    /// Called once when the activity is created.
    fn on_create(&mut self);

    /// Called when the activity goes away. Releases whatever is still running.
    fn on_destroy(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Initialized,
    Created,
    Destroyed,
}

/// Runs the four demos, in order, from `on_create`.
pub struct MainActivity {
    config: DemoConfig,
    console: Arc<dyn Console>,
    lifecycle: Lifecycle,
    greeting: Option<String>,
    ticks: Option<Subscription>,
}

impl MainActivity {
    pub fn new(config: DemoConfig, console: Arc<dyn Console>) -> Self {
        MainActivity {
            config,
            console,
            lifecycle: Lifecycle::Initialized,
            greeting: None,
            ticks: None,
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Value captured by the single value demo.
    #[must_use]
    pub fn captured_greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }

    /// Waits for the interval demo to emit its last tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the task driving the interval failed.
    pub async fn wait_for_ticks(&mut self) -> Result<(), SubscriptionError> {
        match self.ticks.take() {
            Some(ticks) => ticks.join_concurrent().await,
            None => Ok(()),
        }
    }
}

impl Activity for MainActivity {
    fn on_create(&mut self) {
        if self.lifecycle != Lifecycle::Initialized {
            warn!(lifecycle = ?self.lifecycle, "on_create called again, ignoring");
            return;
        }
        info!(greeting = %self.config.greeting, "running demos");

        self.greeting = Some(demos::just_demo(&self.config.greeting, &self.console));

        let letters: Vec<Result<String, SourceError>> =
            self.config.letters.iter().cloned().map(Ok).collect();
        demos::emit_demo(letters, &self.console);

        self.ticks = Some(demos::interval_demo(
            self.config.interval,
            self.config.interval_count,
            &self.console,
        ));

        demos::dispose_demo(&self.config.greeting, &self.console);

        self.lifecycle = Lifecycle::Created;
    }

    fn on_destroy(&mut self) {
        if let Some(ticks) = self.ticks.take() {
            info!("cancelling interval demo");
            ticks.unsubscribe();
        }
        self.lifecycle = Lifecycle::Destroyed;
    }
}

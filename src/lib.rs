//! Walkthrough of the basic reactive primitives: a single value captured into a
//! local, a manual emitter with error propagation, a timed interval truncated with
//! `take`, and batch disposal of subscriptions.
//!
//! The crate carries just enough of an observable model for those four demos.
//! Observables are cold, subscribers receive at most one terminal signal, and
//! unsubscribing stops delivery at once.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use rx_basics::subscribe::Subscriber;
//! use rx_basics::{Observable, ObservableExt, Subscribeable};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen_c = Arc::clone(&seen);
//!
//! Observable::just("Hello")
//!     .take(1)
//!     .subscribe(Subscriber::on_next(move |v| seen_c.lock().unwrap().push(v)));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["Hello"]);
//! ```

pub mod activity;
pub mod config;
pub mod demos;
mod errors;
pub mod observable;
mod observer;
pub mod output;
mod subscription;

pub use errors::*;
pub use observable::{Observable, ObservableExt};
pub use observer::Observer;
pub use subscription::{composite, subscribe};

pub use composite::CompositeSubscription;
pub use subscribe::{Subscribeable, Unsubscribeable};

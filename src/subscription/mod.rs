//! Provides structures and traits related to subscription management.
//!
//! This module includes `Subscriber` for handling observed values, errors and
//! completions, `Subscription` for controlling a single subscription, and
//! `CompositeSubscription` for disposing a group of subscriptions at once.
pub mod composite;
pub mod subscribe;

//! The four demonstrations run by [`MainActivity`](crate::activity::MainActivity).
//!
//! Each demo owns its local state and does not depend on the others. Sources are
//! exposed separately from the demos so their signals can be observed directly.

use std::{error::Error, sync::Arc, time::Duration};

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::{
    output::Console,
    subscribe::{Subscriber, Subscription},
    CompositeSubscription, Observable, ObservableExt, Observer, Subscribeable,
};

/// Captures the single value of `Observable::just(greeting)` into a local, prints
/// it and returns it.
///
/// The source is synchronous, so the value is in place before `subscribe` returns.
pub fn just_demo(greeting: &str, console: &Arc<dyn Console>) -> String {
    let result = Arc::new(Mutex::new(String::new()));
    let result_c = Arc::clone(&result);

    let mut observable = Observable::just(greeting.to_owned());
    observable.subscribe(Subscriber::on_next(move |s| *result_c.lock() = s));

    let result = result.lock().clone();
    console.print_line(&result);
    result
}

/// Pushes every item of `items` in order and completes. The first `Err` item ends
/// the sequence on the error channel instead.
pub fn letters_observable<I, E>(items: I) -> Observable<String>
where
    I: IntoIterator<Item = Result<String, E>> + Clone + Send + Sync + 'static,
    E: Error + Send + Sync + 'static,
{
    Observable::create(move |emitter| {
        for item in items.clone() {
            emitter.next(item?);
        }
        emitter.complete();
        Ok::<(), E>(())
    })
}

/// Prints each value of [`letters_observable`]. A failing item is logged.
pub fn emit_demo<I, E>(items: I, console: &Arc<dyn Console>) -> Subscription
where
    I: IntoIterator<Item = Result<String, E>> + Clone + Send + Sync + 'static,
    E: Error + Send + Sync + 'static,
{
    let console = Arc::clone(console);
    let mut observer = Subscriber::on_next(move |s: String| console.print_line(&s));
    observer.on_error(|e| error!(error = %e, "letters source failed"));

    letters_observable(items).subscribe(observer)
}

/// A counter ticking once per `period`, completed after `count` values.
pub fn ticker_observable(period: Duration, count: usize) -> Observable<u64> {
    Observable::interval(period).take(count)
}

/// Prints each tick of [`ticker_observable`].
///
/// Returns immediately; await the returned subscription to wait for the last tick.
pub fn interval_demo(period: Duration, count: usize, console: &Arc<dyn Console>) -> Subscription {
    let console = Arc::clone(console);
    let mut observer = Subscriber::on_next(move |tick: u64| console.print_line(&tick.to_string()));
    observer.on_complete(move || debug!(count, "interval demo completed"));
    observer.on_error(|e| error!(error = %e, "interval demo failed"));

    ticker_observable(period, count).subscribe(observer)
}

/// Subscribes to `Observable::just(greeting)`, adds the subscription to a
/// composite and disposes the composite right away.
pub fn dispose_demo(greeting: &str, console: &Arc<dyn Console>) -> CompositeSubscription {
    let composite = CompositeSubscription::new();
    let console = Arc::clone(console);

    composite.add(
        Observable::just(greeting.to_owned())
            .subscribe(Subscriber::on_next(move |s: String| console.print_line(&s))),
    );
    composite.dispose();
    composite
}

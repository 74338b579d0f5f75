//! The `observable` module provides the sources used by the demos and the `take`
//! operator that truncates them.

use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use parking_lot::Mutex;
use tokio::{runtime, sync::mpsc, time};
use tracing::debug;

use crate::observer::Observer;
use crate::subscription::subscribe::{
    Subscribeable, Subscriber, Subscription, SubscriptionHandle, Unsubscribeable,
    UnsubscribeLogic,
};
use crate::ObservableError;

/// The `Observable` struct represents a cold source of values.
///
/// Nothing is emitted until `subscribe` is called, and every subscription runs the
/// subscribe function again from the start.
///
/// # Example: basic synchronous `Observable`
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use rx_basics::subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic};
/// use rx_basics::{Observable, Observer, Subscribeable};
///
/// let mut emit_3_observable = Observable::new(|mut subscriber| {
///     for i in 1..=3 {
///         subscriber.next(i);
///     }
///     subscriber.complete();
///     Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
/// });
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let seen_c = Arc::clone(&seen);
/// emit_3_observable.subscribe(Subscriber::on_next(move |v| seen_c.lock().unwrap().push(v)));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
/// ```
pub struct Observable<T> {
    subscribe_fn: Box<dyn FnMut(Subscriber<T>) -> Subscription + Send + Sync>,
}

impl<T> Observable<T> {
    /// Creates a new `Observable` with the provided subscribe function.
    ///
    /// The function is handed the `Subscriber` and must return a `Subscription`
    /// describing how to stop the source and, for asynchronous sources, which task
    /// to await.
    pub fn new(sf: impl FnMut(Subscriber<T>) -> Subscription + Send + Sync + 'static) -> Self {
        Observable {
            subscribe_fn: Box::new(sf),
        }
    }
}

impl<T: 'static> Observable<T> {
    /// Creates an `Observable` from a fallible emission routine.
    ///
    /// The routine receives the subscriber as its emitter. If it returns `Err`, the
    /// error is delivered on the error channel. Since a subscriber accepts only one
    /// terminal signal, an error returned after `complete` is dropped.
    pub fn create<F, E>(mut emit: F) -> Self
    where
        F: FnMut(&mut Subscriber<T>) -> Result<(), E> + Send + Sync + 'static,
        E: Error + Send + Sync + 'static,
    {
        Observable::new(move |mut o| {
            if let Err(e) = emit(&mut o) {
                o.error(Arc::new(e));
            }
            Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Emits `value` once and completes, synchronously.
    pub fn just(value: T) -> Self {
        Observable::new(move |mut o| {
            o.next(value.clone());
            o.complete();
            Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
        })
    }
}

impl Observable<u64> {
    /// Emits `0, 1, 2, ...` on a Tokio task, one value per `period`. The first
    /// value arrives one `period` after subscribing.
    ///
    /// The sequence never completes on its own; combine it with
    /// [`take`](ObservableExt::take) or unsubscribe.
    ///
    /// Subscribing outside a Tokio runtime, or with a zero `period`, delivers an
    /// [`ObservableError`] instead of values.
    pub fn interval(period: Duration) -> Self {
        Observable::new(move |mut o: Subscriber<u64>| {
            if period.is_zero() {
                o.error(Arc::new(ObservableError::InvalidPeriod {
                    name: "interval",
                    period,
                }));
                return Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil);
            }

            let Ok(rt) = runtime::Handle::try_current() else {
                o.error(Arc::new(ObservableError::NoRuntime { name: "interval" }));
                return Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil);
            };

            let (tx, mut rx) = mpsc::channel::<()>(1);
            let start = time::Instant::now() + period;

            let join_handle = rt.spawn(async move {
                let mut ticker = time::interval_at(start, period);
                let mut tick: u64 = 0;

                loop {
                    tokio::select! {
                        _ = ticker.tick() => {
                            if o.is_closed() {
                                break;
                            }
                            o.next(tick);
                            tick += 1;
                        }
                        Some(()) = rx.recv() => break,
                    }
                }
                debug!(ticks = tick, "interval stopped");
            });

            Subscription::new(
                UnsubscribeLogic::Future(Box::pin(async move {
                    // The task may already be gone, nothing to signal then.
                    let _ = tx.send(()).await;
                })),
                SubscriptionHandle::JoinTask(join_handle),
            )
        })
    }
}

/// Extension methods available on every subscribeable source.
pub trait ObservableExt<T: 'static>: Subscribeable<ObsType = T> {
    /// Emits only the first `n` values, then completes and unsubscribes from the
    /// source.
    ///
    /// Completion is delivered right after the `n`th value, without waiting for
    /// the source to emit again. `take(0)` completes without subscribing to the
    /// source at all.
    fn take(mut self, n: usize) -> Observable<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Observable::new(move |o| {
            if n == 0 {
                let mut o = o;
                o.complete();
                return Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil);
            }

            let o_shared = Arc::new(Mutex::new(o));
            let o_cloned_e = Arc::clone(&o_shared);
            let o_cloned_c = Arc::clone(&o_shared);

            let upstream: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
            let upstream_c = Arc::clone(&upstream);
            let limit_reached = Arc::new(AtomicBool::new(false));
            let limit_reached_c = Arc::clone(&limit_reached);

            let mut taken = 0;
            let u = Subscriber::new(
                move |v| {
                    if limit_reached_c.load(Ordering::SeqCst) {
                        return;
                    }
                    taken += 1;
                    {
                        let mut o = o_shared.lock();
                        o.next(v);
                        if taken < n {
                            return;
                        }
                        limit_reached_c.store(true, Ordering::SeqCst);
                        o.complete();
                    }
                    // Still `None` when the source emits synchronously inside
                    // `subscribe`, the caller unsubscribes in that case.
                    let upstream = upstream_c.lock().take();
                    if let Some(s) = upstream {
                        s.unsubscribe();
                    }
                },
                move |observable_error| {
                    o_cloned_e.lock().error(observable_error);
                },
                move || {
                    o_cloned_c.lock().complete();
                },
            );

            let mut subscription = self.subscribe(u);
            let handle = subscription.take_handle();

            let mut guard = upstream.lock();
            if limit_reached.load(Ordering::SeqCst) {
                drop(guard);
                subscription.unsubscribe();
                return Subscription::new(UnsubscribeLogic::Nil, handle);
            }
            *guard = Some(subscription);
            drop(guard);

            Subscription::new(
                UnsubscribeLogic::Logic(Box::new(move || {
                    let upstream = upstream.lock().take();
                    if let Some(s) = upstream {
                        s.unsubscribe();
                    }
                })),
                handle,
            )
        })
    }
}

impl<T: 'static> Subscribeable for Observable<T> {
    type ObsType = T;

    fn subscribe(&mut self, v: Subscriber<Self::ObsType>) -> Subscription {
        let gate = Arc::clone(&v.closed);
        let mut subscription = (self.subscribe_fn)(v);
        subscription.closed = gate;
        subscription
    }
}

impl<O, T: 'static> ObservableExt<T> for O where O: Subscribeable<ObsType = T> {}

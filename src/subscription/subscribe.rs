use std::{
    error::Error,
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use tokio::runtime;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::{observer::Observer, SubscriptionError};

/// A trait for types that can be subscribed to, allowing consumers to receive
/// values emitted by an observable stream.
pub trait Subscribeable {
    /// The type of items emitted by the observable stream.
    type ObsType;

    /// Subscribes to the observable stream.
    ///
    /// The returned `Subscription` can be used to unsubscribe, or to await the
    /// task backing an asynchronous observable.
    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription;
}

/// A trait for types that can be unsubscribed, signalling the source to stop
/// emitting and releasing whatever the subscription holds.
pub trait Unsubscribeable {
    /// Consumes the subscription. Once this returns, no further values reach
    /// the subscriber.
    fn unsubscribe(self);
}

type NextFn<T> = Box<dyn FnMut(T) + Send>;
type CompleteFn = Box<dyn FnMut() + Send>;
type ErrorFn = Box<dyn FnMut(Arc<dyn Error + Send + Sync>) + Send>;

/// A type that acts as an observer, allowing users to handle emitted values, errors,
/// and completion when subscribing to an `Observable`.
///
/// A `Subscriber` delivers at most one terminal signal. After `complete` or `error`
/// has been delivered, every further call is ignored. The same holds once the
/// `Subscription` it was subscribed with has been unsubscribed.
pub struct Subscriber<NextFnType> {
    next_fn: NextFn<NextFnType>,
    complete_fn: Option<CompleteFn>,
    error_fn: Option<ErrorFn>,
    terminated: bool,
    pub(crate) closed: Arc<AtomicBool>,
}

impl<NextFnType> Subscriber<NextFnType> {
    /// Creates a new `Subscriber` instance with custom handling functions for emitted
    /// values, errors, and completion.
    pub fn new(
        next_fn: impl FnMut(NextFnType) + 'static + Send,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send,
        complete_fn: impl FnMut() + 'static + Send,
    ) -> Self {
        Subscriber {
            next_fn: Box::new(next_fn),
            complete_fn: Some(Box::new(complete_fn)),
            error_fn: Some(Box::new(error_fn)),
            terminated: false,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a new Subscriber with the provided `next` function.
    pub fn on_next(next_fn: impl FnMut(NextFnType) + 'static + Send) -> Self {
        Subscriber {
            next_fn: Box::new(next_fn),
            complete_fn: None,
            error_fn: None,
            terminated: false,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the completion function for the Subscriber.
    pub fn on_complete(&mut self, complete_fn: impl FnMut() + 'static + Send) {
        self.complete_fn = Some(Box::new(complete_fn));
    }

    /// Set the error-handling function for the Subscriber.
    ///
    /// Without one, errors are logged and otherwise dropped.
    pub fn on_error(
        &mut self,
        error_fn: impl FnMut(Arc<dyn Error + Send + Sync>) + 'static + Send,
    ) {
        self.error_fn = Some(Box::new(error_fn));
    }

    /// Returns `true` once the subscription this subscriber belongs to has been
    /// unsubscribed. Long running sources should check it and stop emitting.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Returns `true` after `complete` or `error` has been delivered.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    fn accepts_signals(&self) -> bool {
        !self.terminated && !self.is_closed()
    }
}

impl<T> Observer for Subscriber<T> {
    type NextFnType = T;

    fn next(&mut self, v: Self::NextFnType) {
        if !self.accepts_signals() {
            return;
        }
        (self.next_fn)(v);
    }

    fn complete(&mut self) {
        if !self.accepts_signals() {
            return;
        }
        self.terminated = true;
        if let Some(cfn) = &mut self.complete_fn {
            (cfn)();
        }
    }

    fn error(&mut self, observable_error: Arc<dyn Error + Send + Sync>) {
        if !self.accepts_signals() {
            return;
        }
        self.terminated = true;
        match &mut self.error_fn {
            Some(efn) => (efn)(observable_error),
            None => warn!(error = %observable_error, "observable error without an error handler"),
        }
    }
}

/// Handle used to await the task backing an asynchronous observable.
pub enum SubscriptionHandle {
    /// Nothing to await, the observable is synchronous.
    Nil,

    /// Holds a join handle for awaiting an asynchronous observable using a Tokio task.
    JoinTask(JoinHandle<()>),
}

/// Represents a subscription to an observable, allowing control over the
/// subscription.
///
/// Unsubscribing closes the delivery gate of the subscriber first and then runs
/// the source's unsubscribe logic, so no value is delivered after `unsubscribe`
/// returns even if the source is slow to notice.
pub struct Subscription {
    pub(crate) unsubscribe_logic: UnsubscribeLogic,
    pub(crate) subscription_future: SubscriptionHandle,
    pub(crate) runtime_handle: Option<runtime::Handle>,
    pub(crate) closed: Arc<AtomicBool>,
}

impl Subscription {
    /// Creates a new Subscription instance with the specified unsubscribe logic and
    /// subscription handle.
    #[must_use]
    pub fn new(
        unsubscribe_logic: UnsubscribeLogic,
        subscription_future: SubscriptionHandle,
    ) -> Self {
        Subscription {
            unsubscribe_logic,
            subscription_future,
            runtime_handle: runtime::Handle::try_current().ok(),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` once this subscription has been unsubscribed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub(crate) fn take_handle(&mut self) -> SubscriptionHandle {
        std::mem::replace(&mut self.subscription_future, SubscriptionHandle::Nil)
    }

    /// Awaits the completion of the Tokio task associated with this subscription.
    ///
    /// Returns immediately for synchronous observables.
    ///
    /// # Errors
    ///
    /// Returns an error if the task backing the observable panicked or was
    /// cancelled.
    pub async fn join_concurrent(self) -> Result<(), SubscriptionError> {
        match self.subscription_future {
            SubscriptionHandle::JoinTask(task_handle) => Ok(task_handle.await?),
            SubscriptionHandle::Nil => Ok(()),
        }
    }
}

impl Unsubscribeable for Subscription {
    fn unsubscribe(self) {
        self.closed.store(true, Ordering::SeqCst);
        self.unsubscribe_logic
            .unsubscribe(self.runtime_handle.as_ref());
    }
}

/// Enumerates various unsubscribe logic options for a subscription.
pub enum UnsubscribeLogic {
    /// No specific unsubscribe logic.
    Nil,

    /// Unsubscribe logic defined by a function.
    Logic(Box<dyn FnOnce() + Send>),

    /// Asynchronous unsubscribe logic represented by a future. Use if you need to
    /// `.await` as a part of the unsubscribe logic. The future is spawned on the
    /// runtime that was current when the `Subscription` was created.
    Future(Pin<Box<dyn Future<Output = ()> + Send>>),
}

impl UnsubscribeLogic {
    fn unsubscribe(self, runtime_handle: Option<&runtime::Handle>) {
        match self {
            UnsubscribeLogic::Nil => (),
            UnsubscribeLogic::Logic(fnc) => fnc(),
            UnsubscribeLogic::Future(future) => match runtime_handle {
                Some(handle) => {
                    handle.spawn(future);
                }
                None => warn!("asynchronous unsubscribe logic dropped, no Tokio runtime"),
            },
        }
    }
}

use std::sync::{Arc, Mutex};

use rx_basics::subscribe::Subscriber;

/// Signals seen by a subscriber built with `register_emissions_subscriber`.
pub struct Emissions<T> {
    pub nexts: Arc<Mutex<Vec<T>>>,
    pub completes: Arc<Mutex<usize>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl<T: Clone> Emissions<T> {
    pub fn nexts(&self) -> Vec<T> {
        self.nexts.lock().unwrap().clone()
    }

    pub fn completes(&self) -> usize {
        *self.completes.lock().unwrap()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

pub fn register_emissions_subscriber<T: Send + 'static>() -> (Subscriber<T>, Emissions<T>) {
    let emissions = Emissions {
        nexts: Arc::new(Mutex::new(Vec::with_capacity(10))),
        completes: Arc::new(Mutex::new(0)),
        errors: Arc::new(Mutex::new(Vec::new())),
    };
    let nexts_c = Arc::clone(&emissions.nexts);
    let completes_c = Arc::clone(&emissions.completes);
    let errors_c = Arc::clone(&emissions.errors);

    let subscriber = Subscriber::new(
        move |n| {
            // Track next() calls.
            nexts_c.lock().unwrap().push(n);
        },
        move |e| {
            // Track error() calls.
            errors_c.lock().unwrap().push(e.to_string());
        },
        move || {
            // Track complete() calls.
            *completes_c.lock().unwrap() += 1;
        },
    );
    (subscriber, emissions)
}

mod register_emissions;

use register_emissions::register_emissions_subscriber;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rx_basics::{
    demos,
    output::{Console, Transcript},
    subscribe::{Subscriber, Subscription, SubscriptionHandle, UnsubscribeLogic},
    CompositeSubscription, Observable, Observer, SourceError, Subscribeable,
};

fn transcript_console() -> (Transcript, Arc<dyn Console>) {
    let transcript = Transcript::new();
    let console: Arc<dyn Console> = Arc::new(transcript.clone());
    (transcript, console)
}

fn letters(items: &[&str]) -> Vec<Result<String, SourceError>> {
    items.iter().map(|s| Ok(s.to_string())).collect()
}

#[test]
fn just_demo_captures_value_before_returning() {
    let (transcript, console) = transcript_console();

    let captured = demos::just_demo("Hello", &console);

    assert_eq!(captured, "Hello");
    assert_eq!(transcript.lines(), vec!["Hello"]);
}

#[test]
fn letters_are_delivered_in_order_then_complete() {
    let (s, emissions) = register_emissions_subscriber();

    demos::letters_observable(letters(&["A", "B", "C"])).subscribe(s);

    assert_eq!(emissions.nexts(), vec!["A", "B", "C"]);
    assert_eq!(emissions.completes(), 1);
    assert!(emissions.errors().is_empty());
}

#[test]
fn failing_letter_ends_with_single_error() {
    let (s, emissions) = register_emissions_subscriber();
    let items = vec![
        Ok("A".to_string()),
        Err(SourceError::new(1, "unreadable")),
        Ok("C".to_string()),
    ];

    demos::letters_observable(items).subscribe(s);

    assert_eq!(emissions.nexts(), vec!["A"]);
    assert_eq!(emissions.completes(), 0);
    let errors = emissions.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("item #1"), "unexpected error: {}", errors[0]);
}

#[test]
fn emit_demo_prints_each_letter() {
    let (transcript, console) = transcript_console();

    demos::emit_demo(letters(&["A", "B", "C"]), &console);

    assert_eq!(transcript.lines(), vec!["A", "B", "C"]);
}

#[test]
fn emit_demo_stops_printing_at_failure() {
    let (transcript, console) = transcript_console();
    let items = vec![Ok("A".to_string()), Err(SourceError::new(1, "unreadable"))];

    demos::emit_demo(items, &console);

    assert_eq!(transcript.lines(), vec!["A"]);
}

#[tokio::test(start_paused = true)]
async fn interval_demo_prints_ten_ticks() {
    let (transcript, console) = transcript_console();
    let started = tokio::time::Instant::now();

    let subscription = demos::interval_demo(Duration::from_secs(1), 10, &console);
    assert!(transcript.lines().is_empty(), "first tick is one period away");
    subscription.join_concurrent().await.unwrap();

    let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    assert_eq!(transcript.lines(), expected);
    assert!(started.elapsed() >= Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn ticker_observable_completes_after_count() {
    let (s, emissions) = register_emissions_subscriber();

    let subscription = demos::ticker_observable(Duration::from_millis(250), 4).subscribe(s);
    subscription.join_concurrent().await.unwrap();

    assert_eq!(emissions.nexts(), vec![0, 1, 2, 3]);
    assert_eq!(emissions.completes(), 1);
}

#[test]
fn dispose_demo_disposes_idempotently() {
    let (transcript, console) = transcript_console();

    let composite = demos::dispose_demo("Hello", &console);

    // The source is synchronous, the value is printed before disposal.
    assert_eq!(transcript.lines(), vec!["Hello"]);
    assert!(composite.is_disposed());
    assert!(composite.is_empty());
    composite.dispose();
    assert!(composite.is_disposed());
}

#[test]
fn disposed_subscription_receives_nothing() {
    let emitter = Arc::new(Mutex::new(None));
    let emitter_c = Arc::clone(&emitter);

    // Keep the subscriber around so values can be pushed after subscribing.
    let mut observable = Observable::new(move |s: Subscriber<u32>| {
        *emitter_c.lock().unwrap() = Some(s);
        Subscription::new(UnsubscribeLogic::Nil, SubscriptionHandle::Nil)
    });

    let (s, emissions) = register_emissions_subscriber();
    let composite = CompositeSubscription::new();
    composite.add(observable.subscribe(s));

    emitter.lock().unwrap().as_mut().unwrap().next(1);
    composite.dispose();
    emitter.lock().unwrap().as_mut().unwrap().next(2);
    emitter.lock().unwrap().as_mut().unwrap().complete();
    composite.dispose();

    assert_eq!(emissions.nexts(), vec![1]);
    assert_eq!(emissions.completes(), 0);
}

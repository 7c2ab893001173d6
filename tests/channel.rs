use debug_overlay::{emit, DataChannel, Payload};
use serial_test::serial;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn recorder(channel: &DataChannel) -> (debug_overlay::Subscription, Arc<Mutex<Vec<Payload>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = channel.subscribe(move |p| sink.lock().unwrap().push((*p).clone()));
    (sub, seen)
}

#[test]
fn publish_reaches_every_subscriber() {
    let channel = DataChannel::new("fanout");
    let (_a, seen_a) = recorder(&channel);
    let (_b, seen_b) = recorder(&channel);

    channel.publish(serde_json::json!({"a": 1}));

    let expected = vec![Payload::Value(serde_json::json!({"a": 1}))];
    assert_eq!(*seen_a.lock().unwrap(), expected);
    assert_eq!(*seen_b.lock().unwrap(), expected);
}

#[test]
fn publish_without_subscribers_is_a_noop() {
    let channel = DataChannel::new("empty");
    channel.publish(serde_json::json!("nobody listens"));
    assert_eq!(channel.subscriber_count(), 0);
}

#[test]
fn dropping_subscription_stops_delivery() {
    let channel = DataChannel::new("drop");
    let (sub, seen) = recorder(&channel);
    channel.publish(serde_json::json!(1));
    drop(sub);
    channel.publish(serde_json::json!(2));

    assert_eq!(channel.subscriber_count(), 0);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn late_subscriber_gets_no_backlog() {
    let channel = DataChannel::new("late");
    channel.publish(serde_json::json!({"early": true}));
    let (_sub, seen) = recorder(&channel);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unserializable_value_becomes_placeholder_payload() {
    let mut map = HashMap::new();
    map.insert((1, 2), "tuple keys are not valid JSON object keys");
    let payload = Payload::from_serialize(&map);
    assert!(matches!(payload, Payload::Unformattable(_)));
}

#[test]
#[serial]
fn emit_uses_the_global_channel() {
    let (_sub, seen) = recorder(DataChannel::global());
    emit(&serde_json::json!({"tick": 7}));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Payload::Value(serde_json::json!({"tick": 7}))]
    );
}

#[test]
#[serial]
fn emit_without_listener_does_not_panic() {
    assert_eq!(DataChannel::global().subscriber_count(), 0);
    emit(&vec![1, 2, 3]);
}

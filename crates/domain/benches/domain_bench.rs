use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    CheckItemOut, CheckItemOutHandler, Handler, InventoryBucket, InventoryEvent, LoggingHandler,
    encode_events,
};
use event_store::{AggregateId, EventStore, InMemoryEventStore};

fn checked_in_history(events: u32) -> Vec<InventoryEvent> {
    (0..events)
        .map(|_| InventoryEvent::ItemCheckedIn { quantity: 1 })
        .collect()
}

fn bench_replay_100(c: &mut Criterion) {
    let history = checked_in_history(100);

    c.bench_function("domain/replay_100_events", |b| {
        b.iter(|| {
            let bucket = InventoryBucket::from_history(history.clone());
            assert_eq!(bucket.quantity_on_hand(), 100);
        });
    });
}

fn bench_replay_1000(c: &mut Criterion) {
    let history = checked_in_history(1000);

    c.bench_function("domain/replay_1000_events", |b| {
        b.iter(|| {
            let bucket = InventoryBucket::from_history(history.clone());
            assert_eq!(bucket.quantity_on_hand(), 1000);
        });
    });
}

fn bench_full_command_cycle(c: &mut Criterion) {
    c.bench_function("domain/full_check_out_cycle", |b| {
        b.iter(|| {
            let store = InMemoryEventStore::new();
            let bucket_id = AggregateId::new();
            let envelopes =
                encode_events(bucket_id, &[InventoryEvent::ItemCheckedIn { quantity: 100 }])
                    .unwrap();
            store.append(bucket_id, envelopes).unwrap();

            let pipeline = LoggingHandler::new(CheckItemOutHandler::new(store, bucket_id));
            pipeline.handle(CheckItemOut::new(10)).unwrap();
        });
    });
}

fn bench_check_out_over_long_history(c: &mut Criterion) {
    let store = InMemoryEventStore::new();
    let bucket_id = AggregateId::new();
    let envelopes = encode_events(bucket_id, &checked_in_history(1000)).unwrap();
    store.append(bucket_id, envelopes).unwrap();
    let handler = CheckItemOutHandler::new(store, bucket_id);

    c.bench_function("domain/load_over_1000_events", |b| {
        b.iter(|| {
            let bucket = handler.load().unwrap();
            assert!(bucket.quantity_on_hand() >= 1000);
        });
    });
}

criterion_group!(
    benches,
    bench_replay_100,
    bench_replay_1000,
    bench_full_command_cycle,
    bench_check_out_over_long_history,
);
criterion_main!(benches);

// Integration tests for the structure variants' operational laws

use std::time::{Duration, Instant};

use structty::sim::{Engine, EngineConfig, Severity};
use structty::structures::{Structure, StructureKind};

/// Engine with a zero step duration: every operation completes
/// synchronously, which is the documented non-visual contract.
fn engine(kind: StructureKind, capacity: usize) -> Engine {
    Engine::new(EngineConfig {
        kind,
        capacity,
        step: Duration::ZERO,
        cadence: Duration::ZERO,
        ..EngineConfig::default()
    })
}

fn now() -> Instant {
    Instant::now()
}

/// Success messages logged since the initial ready line.
fn success_messages(engine: &Engine) -> Vec<String> {
    engine
        .log()
        .entries()
        .iter()
        .filter(|e| e.severity == Severity::Success)
        .map(|e| e.message.clone())
        .collect()
}

fn last_entry(engine: &Engine) -> (Severity, String) {
    let entry = engine.log().entries().last().expect("log entry");
    (entry.severity, entry.message.clone())
}

#[test]
fn stack_pops_in_reverse_push_order() {
    let mut eng = engine(StructureKind::Stack, 8);
    for v in [11, 22, 33, 44, 55] {
        eng.insert(now(), Some(v)).expect("push");
    }
    for _ in 0..5 {
        eng.remove(now()).expect("pop");
    }
    let pops: Vec<String> = success_messages(&eng)
        .into_iter()
        .filter(|m| m.starts_with("POP"))
        .collect();
    assert_eq!(
        pops,
        [
            "POP() -> 55",
            "POP() -> 44",
            "POP() -> 33",
            "POP() -> 22",
            "POP() -> 11"
        ]
    );
    assert!(eng.structure().is_empty());
}

#[test]
fn overflow_leaves_state_unchanged_in_every_variant() {
    for kind in StructureKind::ALL {
        let mut eng = engine(kind, 4);
        // Fill to the variant's own fullness rule.
        for v in 0..64 {
            if eng.structure().is_full() {
                break;
            }
            eng.insert(now(), Some(v % 100)).expect("insert");
        }
        assert!(eng.structure().is_full(), "{:?} should be full", kind);
        let occupancy = eng.structure().occupancy();
        let log_len = eng.log().len();

        eng.insert(now(), Some(7)).expect("attempt starts");
        assert_eq!(eng.structure().occupancy(), occupancy, "{:?}", kind);
        assert_eq!(eng.log().len(), log_len + 1);
        let (severity, message) = last_entry(&eng);
        assert_eq!(severity, Severity::Error);
        assert!(message.starts_with("Overflow"), "{:?}: {}", kind, message);
        assert!(!eng.is_busy());
    }
}

#[test]
fn underflow_leaves_state_unchanged_in_every_variant() {
    for kind in StructureKind::ALL {
        let mut eng = engine(kind, 4);
        eng.remove(now()).expect("attempt starts");
        assert!(eng.structure().is_empty());
        let (severity, message) = last_entry(&eng);
        assert_eq!(severity, Severity::Error);
        assert!(message.starts_with("Underflow"), "{:?}: {}", kind, message);
        assert!(!eng.is_busy());
    }
}

#[test]
fn circular_queue_reuses_freed_slot() {
    let mut eng = engine(StructureKind::CircularQueue, 4);
    for v in [1, 2, 3, 4] {
        eng.insert(now(), Some(v)).expect("enqueue");
    }
    assert!(eng.structure().is_full());
    assert_eq!(eng.structure().pointers(), Some((0, 3)));

    eng.remove(now()).expect("dequeue");
    eng.insert(now(), Some(5)).expect("enqueue into freed slot");

    // rear wrapped from 3 to (3+1) % 4 = 0: the dequeued slot came back.
    assert_eq!(eng.structure().pointers(), Some((1, 0)));
    assert_eq!(eng.structure().occupancy(), 4);
    let (severity, message) = last_entry(&eng);
    assert_eq!(severity, Severity::Success);
    assert_eq!(message, "ENQUEUE(5) -> slot 0");
}

#[test]
fn linear_queue_refuses_where_circular_recycles() {
    // The identical sequence against the linear queue: the freed slot is
    // spent, so the extra enqueue overflows.
    let mut eng = engine(StructureKind::LinearQueue, 4);
    for v in [1, 2, 3, 4] {
        eng.insert(now(), Some(v)).expect("enqueue");
    }
    eng.remove(now()).expect("dequeue");
    assert_eq!(eng.structure().occupancy(), 3);

    eng.insert(now(), Some(5)).expect("attempt starts");
    assert_eq!(eng.structure().occupancy(), 3);
    assert_eq!(eng.structure().pointers(), Some((1, 3)));
    let (severity, message) = last_entry(&eng);
    assert_eq!(severity, Severity::Error);
    assert!(message.starts_with("Overflow"));
}

#[test]
fn circular_queue_capacity_boundary() {
    // The exact boundary walk: 3 enqueues leave (rear+1)%4 = 3 != front,
    // the 4th succeeds, and only the 5th reports Overflow.
    let mut eng = engine(StructureKind::CircularQueue, 4);
    for v in [10, 20, 30] {
        eng.insert(now(), Some(v)).expect("enqueue");
    }
    assert_eq!(eng.structure().pointers(), Some((0, 2)));
    assert!(!eng.structure().is_full());

    eng.insert(now(), Some(40)).expect("4th enqueue");
    assert_eq!(eng.structure().pointers(), Some((0, 3)));
    assert_eq!(eng.structure().occupancy(), 4);
    assert!(eng.structure().is_full());

    eng.insert(now(), Some(50)).expect("attempt starts");
    let (severity, message) = last_entry(&eng);
    assert_eq!(severity, Severity::Error);
    assert!(message.starts_with("Overflow"));
    assert_eq!(eng.structure().occupancy(), 4);
}

#[test]
fn priority_queue_is_sorted_and_stable() {
    let mut eng = engine(StructureKind::PriorityQueue, 8);
    for v in [5, 9, 3, 9] {
        eng.insert(now(), Some(v)).expect("insert");
    }

    let Structure::PriorityQueue(q) = eng.structure() else {
        panic!("expected priority queue");
    };
    let values: Vec<i64> = q.items().iter().map(|e| e.value).collect();
    assert_eq!(values, [9, 9, 5, 3]);
    // The 9 inserted earlier keeps the head slot.
    assert!(q.items()[0].id < q.items()[1].id);

    for _ in 0..4 {
        eng.remove(now()).expect("remove");
    }
    let removals: Vec<String> = success_messages(&eng)
        .into_iter()
        .filter(|m| m.starts_with("REMOVE"))
        .collect();
    assert_eq!(
        removals,
        [
            "REMOVE() -> 9 from head",
            "REMOVE() -> 9 from head",
            "REMOVE() -> 5 from head",
            "REMOVE() -> 3 from head"
        ]
    );
}

#[test]
fn linear_queue_drains_to_empty_but_spent() {
    let mut eng = engine(StructureKind::LinearQueue, 6);
    for v in [1, 2] {
        eng.insert(now(), Some(v)).expect("enqueue");
    }
    eng.remove(now()).expect("dequeue");
    eng.remove(now()).expect("dequeue");

    // Logically empty, but front ran past rear instead of resetting.
    assert!(eng.structure().is_empty());
    assert_eq!(eng.structure().pointers(), Some((2, 1)));

    // Still room: rear has not reached the last slot yet.
    eng.insert(now(), Some(3)).expect("enqueue");
    assert_eq!(eng.structure().pointers(), Some((2, 2)));

    eng.reset().expect("reset");
    assert_eq!(eng.structure().pointers(), Some((-1, -1)));
    assert_eq!(eng.structure().occupancy(), 0);
}

#[test]
fn resize_clears_elements_and_pointers() {
    let mut eng = engine(StructureKind::CircularQueue, 4);
    for v in [1, 2, 3] {
        eng.insert(now(), Some(v)).expect("enqueue");
    }
    eng.set_capacity(10).expect("resize");
    assert_eq!(eng.structure().capacity(), 10);
    assert_eq!(eng.structure().occupancy(), 0);
    assert_eq!(eng.structure().pointers(), Some((-1, -1)));
    // Full reset: the log restarts with the ready line.
    assert_eq!(eng.log().len(), 1);
}

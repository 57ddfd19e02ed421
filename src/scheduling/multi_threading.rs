//! Multi-threaded back-end of the event generation

use crate::{event::Event, random::RandomGenerator};
use std::{ops::Range, sync::Mutex};

/// Generate events in multi-threaded mode
///
/// Each batch of events is generated by a separate rayon task. The random
/// number generator state of each task is set up exactly as in sequential
/// mode, and results are stored per batch, so the output does not depend on
/// task scheduling.
///
pub fn run_generation_impl(
    batches: impl Iterator<Item = Range<usize>>,
    mut rng: RandomGenerator,
    generate_events: impl Send + Sync + Fn(Range<usize>, &mut RandomGenerator) -> Vec<Event>,
) -> Vec<Event> {
    let batches = batches.collect::<Vec<_>>();
    assert!(!batches.is_empty(), "There should be at least one batch");

    // Storage for the events of each batch
    let results = (0..batches.len())
        .map(|_| Mutex::new(None))
        .collect::<Vec<Mutex<Option<Vec<Event>>>>>();

    // This function is a synchronization scope: it will only return
    // once all inner tasks have been executed
    rayon::scope(|scope| {
        for (batch, result) in batches.into_iter().zip(&results) {
            // Spawn a task which is responsible for generating this batch
            let mut task_rng = rng.clone();
            rng.jump();
            let generate_events = &generate_events;
            scope.spawn(move |_| {
                let events = generate_events(batch, &mut task_rng);
                let mut lock = result.lock().expect("Mutex data should be valid");
                assert!(lock.is_none(), "Tasks should not report results twice");
                *lock = Some(events);
            });
        }
    });

    // Concatenate the batches in event number order
    results
        .into_iter()
        .flat_map(|result| {
            result
                .into_inner()
                .expect("Mutex data should be valid")
                .expect("Result should be ready")
        })
        .collect()
}

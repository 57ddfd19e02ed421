//! Sequential back-end of the event generation

use crate::{event::Event, random::RandomGenerator};
use std::ops::Range;

/// Generate events in sequential mode
///
/// We use batched logic even in sequential mode, in order to achieve
/// reproducibility with respect to multi-threaded runs: each batch starts
/// from the state of the previous one, jumped ahead once.
///
pub fn run_generation_impl(
    batches: impl Iterator<Item = Range<usize>>,
    mut rng: RandomGenerator,
    generate_events: impl Fn(Range<usize>, &mut RandomGenerator) -> Vec<Event>,
) -> Vec<Event> {
    let mut events = Vec::new();
    for batch in batches {
        let mut batch_rng = rng.clone();
        rng.jump();
        events.extend(generate_events(batch, &mut batch_rng));
    }
    events
}

//! This module takes care of scheduling the generation work, encapsulating use
//! of multiple threads and anything else that will come in the future

#[cfg(feature = "multi-threading")]
mod multi_threading;
#[cfg(not(feature = "multi-threading"))]
mod sequential;

use crate::{event::Event, random::RandomGenerator};
use std::ops::Range;

/// Size of the generated event batches
///
/// Events are generated in batches of a certain size, each batch drawing from
/// its own random number stream. This achieves perfect reproducibility
/// between sequential and parallel runs.
///
/// Batches should be large enough for scheduling overhead to be negligible
/// with respect to event generation, and small enough for parallel runs to be
/// load-balanced. Event generation is cheap, so this errs on the large side.
///
pub const EVENT_BATCH_SIZE: usize = 10_000;

/// Run the event generation in the manner that was configured at build time.
///
/// Takes as parameters the total number of events to be generated, the seed of
/// the random number generator, and a kernel that generates a certain range of
/// event numbers given an initial random number generator state.
///
/// Returns the generated events, ordered by event number
///
pub fn run_generation(
    num_events: usize,
    seed: u64,
    generate_events: impl Send + Sync + Fn(Range<usize>, &mut RandomGenerator) -> Vec<Event>,
) -> Vec<Event> {
    // Check that the user is being reasonable (should have already been checked
    // at configuration time, but bugs can happen...)
    assert!(num_events > 0, "Must generate at least one event");

    // Initialize the random number generator
    let rng = RandomGenerator::new(seed);

    // Split the work into batches of consecutive event numbers
    let batches = (0..num_events)
        .step_by(EVENT_BATCH_SIZE)
        .map(|start| start..(start + EVENT_BATCH_SIZE).min(num_events));

    // Generate events...
    let events = {
        // ...in sequential mode
        #[cfg(not(feature = "multi-threading"))]
        {
            sequential::run_generation_impl(batches, rng, generate_events)
        }

        // ...in multi-threaded mode
        #[cfg(feature = "multi-threading")]
        {
            multi_threading::run_generation_impl(batches, rng, generate_events)
        }
    };
    debug_assert_eq!(events.len(), num_events);
    events
}

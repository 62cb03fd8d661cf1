//! Sampling many events in parallel

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::error::KinematicsError;
use crate::output::{EventSink, OutputError};
use crate::system::{System, ReactionSystem};

mod pool;
mod queue;

pub use pool::ThreadPool;
pub use queue::EventQueue;

type Job = Box<dyn FnOnce() + Send>;

/// Generates `samples` events, using one worker thread per system, and
/// writes them to `sink` from the calling thread. `on_write` is called
/// with the running total after each event is written.
///
/// The first worker takes the remainder when `samples` does not divide
/// evenly. If any worker fails, the others stop after their current
/// sample and the failure is returned.
///
/// Returns the number of events written.
pub fn run<S, W>(systems: Vec<System>, samples: usize, sink: &mut S, mut on_write: W) -> Result<usize, OutputError>
where
    S: EventSink + ?Sized,
    W: FnMut(usize),
{
    let n = systems.len();
    if n == 0 {
        return Err(OutputError::thread("no reaction systems to run"));
    }

    let queue = Arc::new(EventQueue::new());
    let abort = Arc::new(AtomicBool::new(false));
    let failure: Arc<Mutex<Option<KinematicsError>>> = Arc::new(Mutex::new(None));

    let mut pool: ThreadPool<Job> = ThreadPool::new(n)
        .map_err(|e| OutputError::thread(&e.to_string()))?;

    let (q, r) = (samples / n, samples % n);
    for (i, mut system) in systems.into_iter().enumerate() {
        let count = if i == 0 {q + r} else {q};
        let queue = Arc::clone(&queue);
        let abort = Arc::clone(&abort);
        let failure = Arc::clone(&failure);

        pool.push_job(Box::new(move || {
            for _j in 0..count {
                if abort.load(Ordering::SeqCst) {
                    break;
                }
                match system.run_system() {
                    Ok(()) => queue.push(system.nuclei()),
                    Err(e) => {
                        log::error!("Worker {} stopping: {}", i, e);
                        let mut slot = failure.lock().unwrap_or_else(|p| p.into_inner());
                        if slot.is_none() {
                            *slot = Some(e);
                        }
                        abort.store(true, Ordering::SeqCst);
                        break;
                    }
                }
            }
            log::debug!("Worker {} done.", i);
        }));
    }

    let mut written = 0;
    loop {
        // checked before draining, so nothing pushed before the workers
        // finish can be left behind
        let finished = pool.is_finished();

        let mut idle = true;
        while let Some(event) = queue.pop() {
            idle = false;
            if let Err(e) = sink.write_event(&event) {
                abort.store(true, Ordering::SeqCst);
                return Err(e);
            }
            written += 1;
            on_write(written);
        }

        if finished {
            break;
        }

        if idle {
            thread::sleep(Duration::from_micros(100));
        }
    }

    let panicked = pool.shutdown();
    if panicked > 0 {
        return Err(OutputError::thread(&format!("{} worker(s) panicked", panicked)));
    }

    let failure = failure.lock().unwrap_or_else(|e| e.into_inner()).take();
    match failure {
        Some(e) => Err(OutputError::Worker(e)),
        None => Ok(written),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KinematicsErrorKind;
    use crate::nucleus::{MassTable, Nucleus};
    use crate::system::*;
    use crate::target::{LayeredTarget, TargetLayer};

    #[derive(Default)]
    struct Counter {
        events: usize,
        nuclei: usize,
    }

    impl EventSink for Counter {
        fn write_event(&mut self, nuclei: &[Nucleus]) -> Result<(), OutputError> {
            self.events += 1;
            self.nuclei += nuclei.len();
            Ok(())
        }
    }

    fn chain() -> ChainParameters {
        ChainParameters::new(vec![
            StepParameters::reaction(&[6, 2, 2], &[12, 3, 4])
                .with_beam_energy(20.0, 0.1)
                .with_excitation(0.0, 0.0),
        ])
    }

    fn systems(n: usize, bind: bool) -> Vec<System> {
        let masses = MassTable::bundled().unwrap();
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[6], &[12], &[1], 40.0, &masses).unwrap());
        let target = Arc::new(target);

        rng_streams(0, n).into_iter()
            .map(|rng| {
                let mut system = create_system(&chain(), &masses, rng).unwrap();
                if bind {
                    system.bind_target(Arc::clone(&target)).unwrap();
                }
                system
            })
            .collect()
    }

    #[test]
    fn event_count_is_independent_of_threads() {
        let samples = 1003;
        for &threads in [1, 4].iter() {
            let mut counter = Counter::default();
            let mut last = 0;
            let written = run(systems(threads, true), samples, &mut counter, |n| last = n).unwrap();
            println!("{} threads: {} events written", threads, written);
            assert_eq!(written, samples);
            assert_eq!(counter.events, samples);
            assert_eq!(counter.nuclei, 4 * samples);
            assert_eq!(last, samples);
        }
    }

    #[test]
    fn worker_failure_is_reported() {
        let mut counter = Counter::default();
        let err = run(systems(3, false), 100, &mut counter, |_| {}).unwrap_err();
        println!("{}", err);
        match err {
            OutputError::Worker(e) => assert_eq!(e.kind(), KinematicsErrorKind::UnboundTarget),
            _ => panic!("expected a worker error"),
        }
        assert_eq!(counter.events, 0);
    }
}

//! A fixed-size pool of worker threads

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

struct Shared<F> {
    jobs: Mutex<VecDeque<F>>,
    available: Condvar,
    stop: AtomicBool,
    running: AtomicUsize,
}

/// Decrements the count of running jobs when dropped, even if the
/// job panics.
struct RunningGuard<'a>(&'a AtomicUsize);

impl<'a> Drop for RunningGuard<'a> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Runs jobs of type `F` on a fixed number of threads. Each idle worker
/// waits on a condition variable until a job is pushed or the pool is
/// shut down.
pub struct ThreadPool<F: FnOnce() + Send + 'static> {
    shared: Arc<Shared<F>>,
    workers: Vec<JoinHandle<()>>,
}

impl<F: FnOnce() + Send + 'static> ThreadPool<F> {
    /// Starts `n` worker threads (at least one).
    pub fn new(n: usize) -> std::io::Result<Self> {
        let shared = Arc::new(Shared {
            jobs: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            stop: AtomicBool::new(false),
            running: AtomicUsize::new(0),
        });

        let mut pool = ThreadPool {
            shared,
            workers: Vec::with_capacity(n.max(1)),
        };

        for i in 0..n.max(1) {
            let shared = Arc::clone(&pool.shared);
            let handle = thread::Builder::new()
                .name(format!("mask-worker-{}", i))
                .spawn(move || work(&shared))?;
            pool.workers.push(handle);
        }

        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn push_job(&self, job: F) {
        let mut jobs = self.shared.jobs.lock().unwrap_or_else(|e| e.into_inner());
        jobs.push_back(job);
        self.shared.available.notify_one();
    }

    /// True if no job is waiting or running.
    pub fn is_finished(&self) -> bool {
        let jobs = self.shared.jobs.lock().unwrap_or_else(|e| e.into_inner());
        jobs.is_empty() && self.shared.running.load(Ordering::SeqCst) == 0
    }

    /// Stops the workers once their current jobs are complete, discarding
    /// any jobs that have not started, and waits for them to exit.
    /// Returns the number of workers that panicked.
    pub fn shutdown(&mut self) -> usize {
        {
            let mut jobs = self.shared.jobs.lock().unwrap_or_else(|e| e.into_inner());
            jobs.clear();
            self.shared.stop.store(true, Ordering::SeqCst);
            self.shared.available.notify_all();
        }

        self.workers.drain(..)
            .map(|handle| handle.join())
            .filter(|result| result.is_err())
            .count()
    }
}

impl<F: FnOnce() + Send + 'static> Drop for ThreadPool<F> {
    fn drop(&mut self) {
        let panicked = self.shutdown();
        if panicked > 0 {
            log::error!("{} worker thread(s) panicked.", panicked);
        }
    }
}

fn work<F: FnOnce()>(shared: &Shared<F>) {
    loop {
        let job = {
            let mut jobs = shared.jobs.lock().unwrap_or_else(|e| e.into_inner());

            loop {
                if shared.stop.load(Ordering::SeqCst) {
                    return;
                }
                if let Some(job) = jobs.pop_front() {
                    // counted while the queue is locked, so the pool is never
                    // seen as empty and idle between pop and run
                    shared.running.fetch_add(1, Ordering::SeqCst);
                    break job;
                }
                jobs = shared.available.wait(jobs).unwrap_or_else(|e| e.into_inner());
            }
        };

        let _guard = RunningGuard(&shared.running);
        job();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn runs_every_job() {
        let total = Arc::new(AtomicUsize::new(0));
        let mut pool: ThreadPool<Box<dyn FnOnce() + Send>> = ThreadPool::new(4).unwrap();
        assert_eq!(pool.len(), 4);

        for i in 1..=100 {
            let total = Arc::clone(&total);
            pool.push_job(Box::new(move || {
                total.fetch_add(i, Ordering::SeqCst);
            }));
        }

        while !pool.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }

        assert_eq!(total.load(Ordering::SeqCst), 5050);
        assert_eq!(pool.shutdown(), 0);
    }

    #[test]
    fn survives_a_panicking_job() {
        let mut pool: ThreadPool<Box<dyn FnOnce() + Send>> = ThreadPool::new(2).unwrap();
        pool.push_job(Box::new(|| panic!("job failed")));
        while !pool.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(pool.shutdown(), 1);
    }
}

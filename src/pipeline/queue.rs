//! Buffer between the workers and the writer

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::nucleus::Nucleus;

/// A queue of completed events, filled by any number of workers and
/// drained by a single writer. The lock is held only to push or pop.
#[derive(Default)]
pub struct EventQueue {
    events: Mutex<VecDeque<Vec<Nucleus>>>,
    size: AtomicUsize,
}

impl EventQueue {
    pub fn new() -> Self {
        Default::default()
    }

    /// Pushes a copy of `nuclei`.
    pub fn push(&self, nuclei: &[Nucleus]) {
        let event = nuclei.to_vec();
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push_back(event);
        self.size.fetch_add(1, Ordering::SeqCst);
    }

    pub fn pop(&self) -> Option<Vec<Nucleus>> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        let event = events.pop_front();
        if event.is_some() {
            self.size.fetch_sub(1, Ordering::SeqCst);
        }
        event
    }

    /// Number of buffered events, without taking the lock
    pub fn len(&self) -> usize {
        self.size.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use super::*;
    use crate::nucleus::MassTable;

    #[test]
    fn concurrent_push() {
        let masses = MassTable::bundled().unwrap();
        let alpha = Nucleus::new(2, 4, &masses).unwrap();
        let queue = Arc::new(EventQueue::new());

        let handles: Vec<_> = (0..4).map(|_| {
            let queue = Arc::clone(&queue);
            let event = vec![alpha.clone(); 3];
            thread::spawn(move || {
                for _i in 0..250 {
                    queue.push(&event);
                }
            })
        }).collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(queue.len(), 1000);
        let mut popped = 0;
        while let Some(event) = queue.pop() {
            assert_eq!(event.len(), 3);
            popped += 1;
        }
        assert_eq!(popped, 1000);
        assert!(queue.is_empty());
    }
}

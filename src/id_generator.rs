use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::ElementId;

/// Strictly monotonic source of element ids.
///
/// Wall-clock sampling is not good enough here: two inserts can land in the
/// same clock tick. A `fetch_add` on an atomic counter never hands out the
/// same id twice, even if a future multi-window host shares the generator.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> ElementId {
        ElementId(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let ids = IdGenerator::new();
        let mut previous = ids.next_id();
        for _ in 0..1000 {
            let next = ids.next_id();
            assert!(next > previous);
            previous = next;
        }
    }
}

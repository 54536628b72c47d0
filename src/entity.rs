use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

// 0 is never handed out, so a zeroed snapshot field is recognizably "no entity".
static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque identity of an entity.
///
/// A handle carries no data and no generation: it is only a key into the stores.
/// Every call to [`EntityHandle::new`] returns a handle strictly greater than all the
/// handles constructed before it in this process, including those rebuilt with
/// [`EntityHandle::from_raw`] or loaded from a snapshot. Ids are never recycled, so a
/// handle is "alive" exactly as long as some store still contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityHandle(u32);

impl EntityHandle {
    /// Allocates a fresh handle from the process-wide counter.
    ///
    /// # Panics
    ///
    /// Panics if the `u32` id space is exhausted. Ids are not recycled, so this only
    /// happens after ~4 billion entities were created in a single process.
    #[allow(clippy::new_without_default)]
    pub fn new() -> EntityHandle {
        allocate(&NEXT_ID)
    }

    /// Rebuilds a handle from a raw id, typically one read back from a save snapshot.
    ///
    /// The process counter is moved past `id`, so handles created afterwards never
    /// collide with it.
    #[inline]
    pub fn from_raw(id: u32) -> EntityHandle {
        NEXT_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
        EntityHandle(id)
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

// The counter always holds the next id to hand out; `u32::MAX` itself is never issued.
fn allocate(counter: &AtomicU32) -> EntityHandle {
    let id = counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
        .unwrap_or_else(|_| {
            panic!("entity id space exhausted: #{} was the last handle", u32::MAX - 1)
        });
    EntityHandle(id)
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

use crate::model::UserId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<UserId, Arc<AsyncMutex<()>>>;

/// One async mutex per user, created on first use and dropped once nobody
/// holds or waits on it.
///
/// Holding the guard serialises every read-modify-write on that user's cart.
/// Different users never wait on each other.
#[derive(Clone, Default)]
pub(crate) struct UserLocks {
    locks: Arc<Mutex<LockMap>>,
}

impl UserLocks {
    pub(crate) async fn acquire(&self, user_id: &UserId) -> UserGuard {
        let lock = self.map().entry(user_id.clone()).or_default().clone();
        UserGuard {
            guard: lock.lock_owned().await,
            user_id: user_id.clone(),
            locks: self.locks.clone(),
        }
    }

    fn map(&self) -> MutexGuard<'_, LockMap> {
        lock_map(&self.locks)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map().len()
    }
}

// Poisoning needs a panic while the map is held; the map stays usable.
fn lock_map(locks: &Mutex<LockMap>) -> MutexGuard<'_, LockMap> {
    locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Held lock for one user. Dropping it releases the lock and prunes the map
/// entry when no other task holds a handle to the same mutex.
pub(crate) struct UserGuard {
    guard: OwnedMutexGuard<()>,
    user_id: UserId,
    locks: Arc<Mutex<LockMap>>,
}

impl Drop for UserGuard {
    fn drop(&mut self) {
        let mut locks = lock_map(&self.locks);
        // Two handles left: the map entry and this guard. Waiters clone the
        // entry under the map lock, so none can appear while it is held.
        if Arc::strong_count(OwnedMutexGuard::mutex(&self.guard)) == 2 {
            locks.remove(&self.user_id);
        }
    }
}

//! # Synchronization Utilities
//!
//! Mutex handling for the crate's process-wide state: the parse cache and
//! the [`ColorLogger`](crate::logging::ColorLogger) sink.
//!
//! Rust's standard library mutexes become "poisoned" when a thread panics while
//! holding the lock. Both guarded values here tolerate that. A parse cache
//! entry is either fully written or absent, and a log sink at worst loses a
//! partial line. So every lock in library code goes through [`lock_recover`]
//! or [`lock_recover_debug`], which take the data back out of the poison
//! error.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Need context when debugging | [`lock_recover_debug`] |
//! | Test code | `.lock().unwrap()` |

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use super_color::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Lock a mutex, logging the recovery site when the mutex was poisoned.
///
/// `context` names where the lock is taken (e.g. `"parse cache"`).
#[inline]
pub fn lock_recover_debug<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|e| {
        log::debug!("mutex poison recovered at: {context}");
        e.into_inner()
    })
}

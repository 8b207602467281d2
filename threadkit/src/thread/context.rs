use super::id::ThreadId;

use std::cell::Cell;

thread_local! {
    /// Id of the thread running this code.
    ///
    /// Installed by the start routine of threads spawned through this
    /// crate; allocated lazily for any other thread (such as `main`).
    static CURRENT_THREAD_ID: Cell<ThreadId> = const { Cell::new(ThreadId::NONE) };
}

/// Runs `f` with `id` installed as the current thread's id.
///
/// The previous id is restored afterwards.
pub(crate) fn enter_thread<R>(id: ThreadId, f: impl FnOnce() -> R) -> R {
    CURRENT_THREAD_ID.with(|current| {
        let previous = current.replace(id);

        let out = f();

        current.set(previous);
        out
    })
}

/// Returns the current thread's id, allocating one on first use.
pub(crate) fn current_id() -> ThreadId {
    CURRENT_THREAD_ID.with(|current| {
        let id = current.get();
        if !id.is_none() {
            return id;
        }

        let id = ThreadId::allocate();
        current.set(id);
        id
    })
}

use std::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "bookpost"; // Must NOT contain "/" or "-"

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Unique DOM id for elements that need a `<label for=…>` target but got no id from the caller.
pub fn use_random_id_for(element: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{element}_{PREFIX}_{n}")
}

//! A minimal, runtime-agnostic [`Future`] for [`crate::scan_async`] and
//! [`crate::scan_async_with_config`].<br><br>
//!
//! This crate depends on no async runtime, so the future is hand-rolled: a
//! detached `std::thread` does the actual scan and stores its outcome in a
//! shared slot, waking whatever executor is polling once it's done. Any
//! executor (tokio, async-std, a hand-rolled `block_on`) can drive it.

use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, Waker};
use std::thread;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::executor;
use crate::pattern::Pattern;
use crate::region::Region;

type ScanOutcome = Result<Vec<u64>, ScanError>;

struct Shared {
    result: Mutex<Option<ScanOutcome>>,
    waker: Mutex<Option<Waker>>,
}

/// A scan running on a background thread. Resolves exactly once, to the
/// same [`Result`] a synchronous [`crate::scan_with_config`] call against
/// the same arguments would produce.
pub struct ScanFuture {
    shared: Arc<Shared>,
}

impl ScanFuture {
    pub(crate) fn spawn(
        path: PathBuf,
        pattern: Pattern,
        max_matches: usize,
        config: ScanConfig,
    ) -> Self {
        let shared = Arc::new(Shared {
            result: Mutex::new(None),
            waker: Mutex::new(None),
        });

        let worker_shared = Arc::clone(&shared);
        thread::spawn(move || {
            let outcome = run(&path, &pattern, max_matches, &config);

            *worker_shared.result.lock().unwrap() = Some(outcome);
            if let Some(waker) = worker_shared.waker.lock().unwrap().take() {
                waker.wake();
            }
        });

        Self { shared }
    }
}

fn run(path: &Path, pattern: &Pattern, max_matches: usize, config: &ScanConfig) -> ScanOutcome {
    let region = Region::open(path)?;
    executor::scan(region.as_slice(), pattern, max_matches, config)
}

impl std::future::Future for ScanFuture {
    type Output = ScanOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.shared.result.lock().unwrap().take() {
            return Poll::Ready(outcome);
        }

        *self.shared.waker.lock().unwrap() = Some(cx.waker().clone());

        // The worker thread may have finished and called `wake()` between
        // the check above and registering the waker; re-check once more
        // under the lock so that wakeup is never lost.
        if let Some(outcome) = self.shared.result.lock().unwrap().take() {
            return Poll::Ready(outcome);
        }

        Poll::Pending
    }
}

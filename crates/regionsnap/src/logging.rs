// Author: Dustin Pilgrim
// License: MIT

use std::future::Future;
use std::path::Path;
use std::pin::pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

use eventline::debug;
use eventline::runtime::{self, LogLevel};

use crate::paths::ensure_parent_dir;

/// File log always; console only with `--verbose` (stdout stays reserved
/// for request bodies, the console sink writes to the terminal alongside).
pub fn init_logging(log_path: &Path, verbose: bool) -> Result<(), String> {
    ensure_parent_dir(log_path).map_err(|e| format!("create log dir: {e}"))?;

    block_on(runtime::init());

    runtime::enable_file_output(log_path).map_err(|e| format!("enable file output: {e}"))?;
    runtime::enable_console_output(verbose);
    runtime::enable_console_color(verbose);
    runtime::set_log_level(if verbose { LogLevel::Debug } else { LogLevel::Info });

    debug!("logging to {}", log_path.display());
    Ok(())
}

struct Spin;

impl Wake for Spin {
    fn wake(self: Arc<Self>) {}
}

/// Drive a one-shot future to completion on this thread.
fn block_on<F: Future>(fut: F) -> F::Output {
    let waker = Waker::from(Arc::new(Spin));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);

    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(v) => return v,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}

use crate::Activation;
use parking_lot::{Condvar, Mutex};
use thiserror::Error;
use tracing::{error, info};

/// The ways a [`SuspendHook`] can fail to suspend execution.
#[derive(Debug, Error)]
pub enum SuspendError {
    /// No debugger attachment is configured for this process.
    #[error("cannot break at `{token}`: no debugger attachment is configured")]
    Unavailable {
        /// The token that triggered the breakpoint.
        token: String,
    },

    /// Raising the trap signal failed.
    #[error("failed to raise the trap signal")]
    Signal(#[source] std::io::Error),
}

/// Capability to suspend the calling thread at an active breakpoint.
///
/// [`suspend`](SuspendHook::suspend) returns once execution is released
/// externally, however the implementation defines that.
pub trait SuspendHook: Send + Sync {
    /// Suspends the calling thread on behalf of the given (active)
    /// activation.
    fn suspend(&self, activation: &Activation<'_>) -> Result<(), SuspendError>;
}

impl<F> SuspendHook for F
where
    F: Fn(&Activation<'_>) -> Result<(), SuspendError> + Send + Sync,
{
    fn suspend(&self, activation: &Activation<'_>) -> Result<(), SuspendError> {
        self(activation)
    }
}

/// The default [`SuspendHook`]: refuses to suspend, loudly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDebugger;

impl SuspendHook for NoDebugger {
    fn suspend(&self, activation: &Activation<'_>) -> Result<(), SuspendError> {
        let token = activation.token().unwrap_or_default().to_string();

        error!(
            group = activation.group().name(),
            token = token.as_str(),
            "Breakpoint hit, but no debugger attachment is configured",
        );

        Err(SuspendError::Unavailable { token })
    }
}

/// A [`SuspendHook`] that parks the calling thread until another thread calls
/// [`release`](BlockingHook::release).
///
/// A release wakes every thread suspended at that moment. Threads suspending
/// afterwards wait for the next release.
#[derive(Debug, Default)]
pub struct BlockingHook {
    state: Mutex<BlockingState>,
    condvar: Condvar,
}

#[derive(Debug, Default)]
struct BlockingState {
    generation: u64,
    suspended: usize,
}

impl BlockingHook {
    /// Creates a hook with no suspended threads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes every thread currently suspended on this hook.
    pub fn release(&self) {
        let mut state = self.state.lock();
        state.generation = state.generation.wrapping_add(1);

        self.condvar.notify_all();
    }

    /// Reports how many threads are suspended on this hook right now.
    pub fn suspended(&self) -> usize {
        self.state.lock().suspended
    }
}

impl SuspendHook for BlockingHook {
    fn suspend(&self, activation: &Activation<'_>) -> Result<(), SuspendError> {
        let mut state = self.state.lock();
        let generation = state.generation;
        state.suspended += 1;

        info!(
            group = activation.group().name(),
            token = activation.token().unwrap_or_default(),
            "Suspended at breakpoint",
        );

        while state.generation == generation {
            self.condvar.wait(&mut state);
        }

        state.suspended -= 1;

        Ok(())
    }
}

/// A [`SuspendHook`] that raises `SIGTRAP`, stopping an attached native
/// debugger (`gdb`, `lldb`) right at the call site.
///
/// Without a debugger attached, the default disposition of `SIGTRAP`
/// terminates the process.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct TrapHook;

#[cfg(unix)]
impl SuspendHook for TrapHook {
    fn suspend(&self, activation: &Activation<'_>) -> Result<(), SuspendError> {
        info!(
            group = activation.group().name(),
            token = activation.token().unwrap_or_default(),
            "Raising SIGTRAP at breakpoint",
        );

        // SAFETY: `raise` has no memory-safety preconditions
        let result = unsafe { libc::raise(libc::SIGTRAP) };

        if result != 0 {
            return Err(SuspendError::Signal(std::io::Error::last_os_error()));
        }

        Ok(())
    }
}

//! External termination requests.
//!
//! Interrupt (Ctrl-C) and terminate are treated the same way. The watcher
//! reports the first request once and stays subscribed afterwards, so a
//! second Ctrl-C does not fall through to the default handler mid-session.

use tokio::sync::oneshot;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

enum Source {
    #[cfg(unix)]
    Signals {
        interrupt: Signal,
        terminate: Signal,
    },
    #[cfg(not(unix))]
    CtrlC,
    Manual(oneshot::Receiver<()>),
    Never,
}

/// Fires once when the process is asked to stop.
pub struct InterruptWatcher {
    source: Source,
    fired: bool,
}

/// Fires a manual [`InterruptWatcher`]. Dropping it without firing means the
/// watcher never fires.
#[derive(Debug)]
pub struct InterruptTrigger(oneshot::Sender<()>);

impl InterruptTrigger {
    pub fn fire(self) {
        let _ = self.0.send(());
    }
}

impl InterruptWatcher {
    /// Subscribe to the operating system's interrupt and terminate signals.
    #[cfg(unix)]
    pub fn from_signals() -> std::io::Result<Self> {
        Ok(Self::with_source(Source::Signals {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        }))
    }

    /// Subscribe to Ctrl-C.
    #[cfg(not(unix))]
    pub fn from_signals() -> std::io::Result<Self> {
        Ok(Self::with_source(Source::CtrlC))
    }

    /// A watcher driven by hand through the returned trigger.
    pub fn manual() -> (InterruptTrigger, Self) {
        let (tx, rx) = oneshot::channel();
        (InterruptTrigger(tx), Self::with_source(Source::Manual(rx)))
    }

    /// A watcher that never fires.
    pub fn never() -> Self {
        Self::with_source(Source::Never)
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Wait for the first termination request.
    ///
    /// Completes at most once per watcher; later calls wait forever.
    /// Cancel safe.
    pub async fn wait(&mut self) {
        if self.fired {
            return std::future::pending().await;
        }

        let received = match &mut self.source {
            #[cfg(unix)]
            Source::Signals {
                interrupt,
                terminate,
            } => {
                tokio::select! {
                    Some(()) = interrupt.recv() => {
                        tracing::debug!("received SIGINT");
                        true
                    }
                    Some(()) = terminate.recv() => {
                        tracing::debug!("received SIGTERM");
                        true
                    }
                    else => false,
                }
            }
            #[cfg(not(unix))]
            Source::CtrlC => tokio::signal::ctrl_c().await.is_ok(),
            Source::Manual(rx) => rx.await.is_ok(),
            Source::Never => false,
        };

        if !received {
            self.source = Source::Never;
            return std::future::pending().await;
        }
        self.fired = true;
    }
}

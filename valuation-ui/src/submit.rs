//! Asynchronous submission handle.
//!
//! The app holds at most one [`Submission`] at a time and only spawns a new
//! one when none is held, so a single outstanding request per form is
//! guaranteed by construction. The worker reports back over a channel the
//! UI polls once per frame; if the app is torn down mid-request the
//! receiver is dropped and the outcome evaporates. There is no abort.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use tokio::runtime::Handle;
use tracing::debug;

use valuation_core::{ServiceError, Valuation, ValuationRequest, ValuationService};

/// Handle to one in-flight evaluation request.
pub struct Submission {
    rx: Receiver<Result<Valuation, ServiceError>>,
}

/// What polling an in-flight submission produced this frame.
#[derive(Debug)]
pub enum Poll {
    /// Still waiting on the service.
    Pending,
    /// The request finished with this outcome.
    Done(Result<Valuation, ServiceError>),
}

impl Submission {
    /// Spawns the one network call on the runtime and returns a handle
    /// to it.
    ///
    /// `on_done` runs on the worker after the outcome is queued; the UI
    /// passes a repaint request so the result is applied promptly instead
    /// of on the next natural frame.
    pub fn spawn(
        runtime: &Handle,
        service: Arc<dyn ValuationService>,
        request: ValuationRequest,
        on_done: impl Fn() + Send + 'static,
    ) -> Self {
        let (tx, rx) = channel();

        runtime.spawn(async move {
            let outcome = service.evaluate(&request).await;
            debug!(ok = outcome.is_ok(), "evaluation finished");
            let _ = tx.send(outcome);
            on_done();
        });

        Self { rx }
    }

    /// Non-blocking check for the outcome.
    ///
    /// A worker that disappeared without reporting (panic inside the
    /// service) is folded into a transport error, so the caller always
    /// gets a terminal outcome and can release the busy state.
    pub fn poll(&self) -> Poll {
        match self.rx.try_recv() {
            Ok(outcome) => Poll::Done(outcome),
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => Poll::Done(Err(ServiceError::Transport(
                "evaluation worker disappeared before reporting".to_string(),
            ))),
        }
    }
}

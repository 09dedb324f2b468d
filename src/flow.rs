//! Request flow state machine.
//!
//! Each backend interaction (image analysis, weather lookup) is tracked by
//! its own `Flow` value, so one flow failing never clobbers another's
//! result. Starting a request moves the input into `Pending` and completion
//! replaces the whole state with the result. Failure replaces the result
//! with a user-facing message but keeps the staged input, so the user can
//! re-trigger the action without re-staging anything.

use tracing::warn;

use crate::error::TrichofyError;

/// Lifecycle of a single backend request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Flow<I, T> {
    /// Nothing selected yet.
    #[default]
    Idle,
    /// Input staged, request not started.
    Selected(I),
    /// Request in flight for the held input.
    Pending(I),
    /// Last request finished with this result.
    Succeeded(T),
    /// Last request failed with this user-facing message. The input that
    /// failed is kept so the request can be re-triggered.
    Failed { input: Option<I>, message: String },
}

impl<I: Clone, T> Flow<I, T> {
    /// Stage a new input. Any previous result or failure is discarded.
    pub fn select(&mut self, input: I) {
        *self = Flow::Selected(input);
    }

    /// Move into `Pending` and hand back the input to send. Works from
    /// `Selected` and from `Failed` with a retained input, so a failed
    /// request can be retried without re-staging.
    ///
    /// Fails with `InputMissing` from any other state, including `Pending`,
    /// so a request cannot be started twice for the same selection.
    pub fn begin(&mut self) -> Result<I, TrichofyError> {
        match self {
            Flow::Selected(input)
            | Flow::Failed {
                input: Some(input), ..
            } => {
                let input = input.clone();
                *self = Flow::Pending(input.clone());
                Ok(input)
            }
            _ => Err(TrichofyError::InputMissing),
        }
    }

    /// Record a successful result. Only meaningful from `Pending`; a stray
    /// completion in any other state is logged and ignored.
    pub fn complete(&mut self, result: T) {
        match self {
            Flow::Pending(_) => *self = Flow::Succeeded(result),
            _ => warn!("Dropping completion for a flow that is not pending"),
        }
    }

    /// Record a failure with a user-facing message. Clears any previous
    /// result so stale data cannot be shown next to the error, but keeps
    /// the staged input for a retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        let input = self.input().cloned();
        *self = Flow::Failed {
            input,
            message: message.into(),
        };
    }

    /// Return to `Idle`, dropping input, result and failure alike.
    pub fn reset(&mut self) {
        *self = Flow::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Flow::Pending(_))
    }

    pub fn input(&self) -> Option<&I> {
        match self {
            Flow::Selected(input) | Flow::Pending(input) => Some(input),
            Flow::Failed { input, .. } => input.as_ref(),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Flow::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Flow::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

//! Session state container for the generation workflow.
//!
//! Holds the current request, the last result, and the busy/error status,
//! and owns the full dispatch→resolution cycle of a generation call. The
//! remote service sits behind the [`GenerateBackend`] trait so the
//! controller can be exercised without a network.

use std::cell::RefCell;
use std::fmt;

use log::warn;

use crate::{
    validate_request, ApiError, ArticleResult, GenerateResponse, GenerationRequest,
    ValidationErrors, WireGenerateRequest,
};

/// Generic message shown for any failed generation; the underlying cause
/// is only logged.
pub const GENERATE_ERROR_MESSAGE: &str = "Failed to generate article. Please try again.";
pub const TEST_GENERATE_ERROR_MESSAGE: &str = "Failed to run test generation. Please try again.";

/// The two generation endpoints of the remote service.
#[allow(async_fn_in_trait)]
pub trait GenerateBackend {
    async fn generate(&self, request: WireGenerateRequest) -> Result<GenerateResponse, ApiError>;
    async fn generate_test(&self) -> Result<GenerateResponse, ApiError>;
}

/// Snapshot of one browser session's generation state.
///
/// After a resolution, `current_result` and `last_error` are mutually
/// exclusive: success clears the error, failure leaves the previous
/// result untouched and sets the error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub current_request: GenerationRequest,
    pub current_result: Option<ArticleResult>,
    pub is_busy: bool,
    pub last_error: Option<String>,
}

/// A submit that never reached the network.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    /// The request failed field validation.
    Invalid(ValidationErrors),
    /// A generation call is already outstanding.
    InFlight,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::Invalid(_) => write!(f, "Request failed validation"),
            SubmitRejected::InFlight => write!(f, "A generation request is already running"),
        }
    }
}

/// State container driving the request/response cycle.
///
/// Explicitly constructed and passed by handle to whichever view needs
/// it; there is no ambient singleton. All methods take `&self`, state
/// lives behind a `RefCell`, and a registered change listener fires on
/// every transition so the view layer can re-render.
pub struct SessionController<B> {
    backend: B,
    state: RefCell<SessionState>,
    on_change: RefCell<Option<Box<dyn Fn()>>>,
}

impl<B: GenerateBackend> SessionController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: RefCell::new(SessionState::default()),
            on_change: RefCell::new(None),
        }
    }

    /// Replace the change listener. Fires on every state transition.
    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(listener));
    }

    /// Cloned view of the current state for rendering.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Validate and dispatch a generation request.
    ///
    /// Fails fast, without a network call, when the request is invalid or
    /// another call is still outstanding. The outcome of a dispatched call
    /// lands in the session state, not in the return value.
    pub async fn submit(&self, request: GenerationRequest) -> Result<(), SubmitRejected> {
        let errors = validate_request(&request);
        if !errors.is_empty() {
            return Err(SubmitRejected::Invalid(errors));
        }
        self.begin(Some(request.clone()))?;

        let outcome = self.backend.generate(WireGenerateRequest::from(&request)).await;
        self.resolve(outcome, Some(&request), GENERATE_ERROR_MESSAGE);
        Ok(())
    }

    /// Dispatch the parameterless test generation.
    ///
    /// No request is synthesized; the mapped result carries empty
    /// name/description fields.
    pub async fn submit_test_generation(&self) -> Result<(), SubmitRejected> {
        self.begin(None)?;

        let outcome = self.backend.generate_test().await;
        self.resolve(outcome, None, TEST_GENERATE_ERROR_MESSAGE);
        Ok(())
    }

    /// Drop the current result and error. Leaves the current request and
    /// the busy flag untouched.
    pub fn clear(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.current_result = None;
            state.last_error = None;
        }
        self.notify();
    }

    // Enter the busy span. Rejects overlapping dispatches so a second
    // submit cannot race the first.
    fn begin(&self, request: Option<GenerationRequest>) -> Result<(), SubmitRejected> {
        {
            let mut state = self.state.borrow_mut();
            if state.is_busy {
                return Err(SubmitRejected::InFlight);
            }
            if let Some(request) = request {
                state.current_request = request;
            }
            state.is_busy = true;
            state.last_error = None;
        }
        self.notify();
        Ok(())
    }

    fn resolve(
        &self,
        outcome: Result<GenerateResponse, ApiError>,
        request: Option<&GenerationRequest>,
        error_message: &str,
    ) {
        match outcome {
            Ok(response) if response.success => {
                let result = ArticleResult::from_response(response, request);
                let mut state = self.state.borrow_mut();
                state.current_result = Some(result);
                state.last_error = None;
                state.is_busy = false;
            }
            Ok(response) => {
                // Well-formed payload whose success flag is down: treated
                // as a failed generation, never mapped into a result.
                warn!(
                    "generation reported failure, messages: {:?}",
                    response.messages
                );
                let mut state = self.state.borrow_mut();
                state.last_error = Some(error_message.to_string());
                state.is_busy = false;
            }
            Err(err) => {
                warn!("generation request failed: {}", err);
                let mut state = self.state.borrow_mut();
                state.last_error = Some(error_message.to_string());
                state.is_busy = false;
            }
        }
        self.notify();
    }

    fn notify(&self) {
        if let Some(listener) = self.on_change.borrow().as_ref() {
            listener();
        }
    }
}

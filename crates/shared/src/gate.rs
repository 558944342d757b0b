/// Readiness of the client-side mapping engine.
///
/// The engine is loaded once. `Ready` and `Failed` are terminal: a failed load
/// is not retried, the user reloads the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineGate {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl EngineGate {
    /// Apply the outcome of the one-shot load. Has no effect once terminal.
    pub fn resolve<E: std::fmt::Display>(self, outcome: Result<(), E>) -> Self {
        match self {
            EngineGate::Loading => match outcome {
                Ok(()) => EngineGate::Ready,
                Err(e) => EngineGate::Failed(e.to_string()),
            },
            terminal => terminal,
        }
    }

    /// Gate for a load that may still be pending (`None`).
    pub fn from_pending<E: std::fmt::Display>(outcome: Option<Result<(), E>>) -> Self {
        match outcome {
            Some(result) => EngineGate::Loading.resolve(result),
            None => EngineGate::Loading,
        }
    }

    /// Markers may only be drawn once this holds.
    pub fn is_ready(&self) -> bool {
        matches!(self, EngineGate::Ready)
    }
}

use crate::worker::WorkerMessage;

/// Side effects the event handler asks the main loop to perform.
///
/// Handlers stay pure over `AppState`; anything that touches the outside
/// world is returned as an action instead of executed inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Forward a request to the search worker.
    PostToWorker(WorkerMessage),
}

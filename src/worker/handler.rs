//! Catalog worker implementation.
//!
//! Runs catalog requests in spawned tasks so the controller keeps accepting
//! input while fetches are outstanding. Each completed request is sent back
//! over the controller's feedback channel. Requests are never cancelled; the
//! controller decides on arrival whether a response still matters.

use crate::catalog::Catalog;
use crate::worker::{WorkerMessage, WorkerResponse};
use futures_util::future;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Executes [`WorkerMessage`]s against a shared [`Catalog`].
///
/// `T` is the controller's feedback type; responses are converted into it
/// before sending.
pub struct CatalogWorker<T> {
    catalog: Arc<dyn Catalog>,
    responses: UnboundedSender<T>,
}

impl<T> std::fmt::Debug for CatalogWorker<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogWorker").finish_non_exhaustive()
    }
}

impl<T> CatalogWorker<T>
where
    T: From<WorkerResponse> + Send + 'static,
{
    pub fn new(catalog: Arc<dyn Catalog>, responses: UnboundedSender<T>) -> Self {
        Self { catalog, responses }
    }

    /// Spawns a task executing `message` and reporting its response.
    ///
    /// A closed feedback channel means the controller is gone; the response
    /// is dropped.
    pub fn post(&self, message: WorkerMessage) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let responses = self.responses.clone();
        let span = tracing::debug_span!("worker_message", message = ?message);

        tokio::spawn(
            async move {
                let response = handle_message(catalog.as_ref(), message).await;
                if responses.send(T::from(response)).is_err() {
                    tracing::debug!("controller gone, dropping worker response");
                }
            }
            .instrument(span),
        )
    }
}

/// Executes one message and produces its response.
///
/// Detail and trailer lookups are issued together and awaited as a pair.
pub async fn handle_message(catalog: &dyn Catalog, message: WorkerMessage) -> WorkerResponse {
    match message {
        WorkerMessage::FetchList { ticket, request, mode } => {
            let result = catalog.list(&request).await;
            match &result {
                Ok(movies) => tracing::debug!(count = movies.len(), page = request.page(), "list page loaded"),
                Err(e) => tracing::debug!(error = %e, page = request.page(), "list page failed"),
            }
            WorkerResponse::ListLoaded {
                ticket,
                request,
                mode,
                result,
            }
        }
        WorkerMessage::FetchDetail { ticket, id } => {
            let (detail, trailer) = future::join(catalog.get_detail(id), catalog.get_trailer(id)).await;
            if let Err(e) = &detail {
                tracing::debug!(movie_id = %id, error = %e, "detail lookup failed");
            }
            WorkerResponse::DetailLoaded {
                ticket,
                id,
                detail,
                trailer,
            }
        }
    }
}

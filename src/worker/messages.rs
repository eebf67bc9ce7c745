//! Worker message types.
//!
//! This module defines the request and response protocol between the
//! controller and the catalog worker. Every request carries the generation
//! [`Ticket`] it was issued under, and the matching response hands it back so
//! the controller can discard results that arrive too late.

use crate::app::generation::Ticket;
use crate::app::modes::ListMode;
use crate::catalog::ListRequest;
use crate::domain::{CatalogResult, Movie, MovieId, Trailer};

/// Macro to generate builder methods for `WorkerMessage` variants.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    fetch_list(FetchList { ticket: Ticket, request: ListRequest, mode: ListMode }),
    fetch_detail(FetchDetail { ticket: Ticket, id: MovieId }),
}

/// Requests sent from the controller to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch one list page.
    FetchList {
        /// Generation ticket of the list slot.
        ticket: Ticket,

        /// Which page of which list.
        request: ListRequest,

        /// How the page merges into the displayed results.
        mode: ListMode,
    },

    /// Fetch a movie's detail and trailer together.
    FetchDetail {
        /// Generation ticket of the detail slot.
        ticket: Ticket,

        /// Movie to look up.
        id: MovieId,
    },
}

/// Responses sent from the worker back to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// A list page request completed.
    ListLoaded {
        ticket: Ticket,
        request: ListRequest,
        mode: ListMode,
        result: CatalogResult<Vec<Movie>>,
    },

    /// Detail and trailer lookups both completed.
    DetailLoaded {
        ticket: Ticket,
        id: MovieId,
        detail: CatalogResult<Movie>,

        /// Trailer failures are already absorbed into `None`.
        trailer: Option<Trailer>,
    },
}

impl WorkerResponse {
    /// Ticket of the request this response answers.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        match self {
            Self::ListLoaded { ticket, .. } | Self::DetailLoaded { ticket, .. } => *ticket,
        }
    }
}

//! essaygrade-api — The grading endpoint, independent of any transport.
//!
//! Validates incoming requests, runs them through `essaygrade-core`, and
//! packages the result. A routing layer (HTTP, stdio, ...) only needs to
//! hand a request body to [`handle_body`] and send back the [`Reply`].

pub mod config;
pub mod error;
pub mod handler;
pub mod model;

pub use config::{load_config, load_config_from, EssaygradeConfig};
pub use error::ApiError;
pub use handler::{handle, handle_body};
pub use model::{ErrorBody, GradeRequest, GradeResponse, Reply, ReplyBody};

/// Path under which routing layers should mount the handler.
pub const ROUTE: &str = "/koreksi_esai";

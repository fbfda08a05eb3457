//! Remote data gateway for the zarada task board.
//!
//! [`TaskGateway`] is the seam the board controller talks to;
//! [`HttpGateway`] implements it over the clinic's REST API.

pub(crate) mod error;
pub(crate) mod gateway;
pub(crate) mod http_gateway;
pub(crate) mod requests;
pub(crate) mod retry;


pub use error::{GatewayError, GatewayResult};
pub use gateway::TaskGateway;
pub use http_gateway::{HttpGateway, unwrap_envelope};
pub use requests::{CreateCommentRequest, CreateTaskRequest, UpdateTaskRequest};
pub use retry::{IsRetryable, with_retry};

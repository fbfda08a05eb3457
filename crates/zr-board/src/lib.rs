//! Task board state and the controller that drives it.
//!
//! [`TaskBoardController`] owns a [`BoardStore`] and talks to the server
//! through a [`zr_gateway::TaskGateway`]. Mutations are checked against the
//! actor's menu permissions before any remote call is made.

pub mod controller;
pub mod drag;
pub mod error;
pub mod notice;
pub mod store;
pub mod unmount;


pub use controller::TaskBoardController;
pub use drag::{DragEnd, DragLocation, DragOutcome};
pub use error::{BoardError, BoardResult};
pub use notice::{Notice, NoticeKind, NoticeLog};
pub use store::{BoardStore, Placement};
pub use unmount::UnmountSignal;

mod error;
mod health;
pub mod router;
mod state;

pub use self::error::{ApiError, ErrorBody};
pub use self::state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};

pub mod consts;
pub mod context;
pub mod error;
pub mod network;
pub mod program;
mod utils;

pub use context::Context;
pub use error::{HorizonError, ResultCodes};
pub use network::{Network, SubmitResponse};
pub use utils::*;

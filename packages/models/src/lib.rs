pub mod failure;
pub mod model_state;

pub use failure::*;
pub use model_state::*;

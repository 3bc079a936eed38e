pub mod requires_valid_state;

pub use requires_valid_state::RequiresValidState;

pub mod keys;
pub mod shared_params;

pub use keys::{KeyState, PrivateKey};
pub use shared_params::GroupParameters;

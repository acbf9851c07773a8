mod error;
pub use error::{Error, Result};

pub mod layers;
pub use layers::{Dense, Layer, Relu, Sigmoid};

mod network;
pub use network::Network;

pub mod loss;

mod trainer;
pub use trainer::Trainer;

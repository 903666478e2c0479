pub mod classifier;
pub use classifier::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod rejection;
pub use rejection::*;

pub mod shape;
pub use shape::*;

pub mod state;
pub use state::*;

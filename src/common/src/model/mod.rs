pub mod game;
pub mod round;

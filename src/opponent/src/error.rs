use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("a round was recorded before any game was started")]
    NoActiveGame,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown strategy {0:?}, expected one of uniform, biased or adaptive")]
    UnknownStrategy(String),
}

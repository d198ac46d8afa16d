#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lower limit is above the upper limit")]
    InvertedLimits,

    #[error("{0} limit used on the wrong side of an interval")]
    MisplacedLimit(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

use crate::error::UniStegError;

pub type Result<T> = std::result::Result<T, UniStegError>;

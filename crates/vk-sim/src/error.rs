use thiserror::Error;
use vk_core::VkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Invalid(#[from] VkError),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;

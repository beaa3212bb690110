use thiserror::Error;

use crate::auth::JwtError;
use crate::orders::StorageError;

/// 启动阶段错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("JWT 配置错误: {0}")]
    Jwt(#[from] JwtError),

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

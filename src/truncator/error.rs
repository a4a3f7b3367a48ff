use thiserror::Error;

/// 截断过程中唯一可能出现的错误
///
/// 只有参数校验会失败；其余任何输入（空文本、零权重 span、
/// 比整个预算还长的替代标记）都会走正常算法路径产出确定结果。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TruncateError {
    // 长度参数为负数，携带参数名
    #[error("{0} must be greater than or equal to 0")]
    InvalidArgument(&'static str),
}

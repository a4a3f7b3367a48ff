//! ellipsis：按最大显示长度截断文本的中间部分，
//! 用替代标记（默认 "…"）连接保留的头尾内容。
//!
//! 输入可以是原始文本，也可以是预先切分好的带权 span 序列，
//! 因此调用方可以按「视觉宽度」「字符数」「token 数」
//! 或任意自定义度量来截断，而不是按码元数。
//!
//! ```
//! use ellipsis::{truncate_text, TruncateOptions};
//!
//! let result = truncate_text(
//!     "This is a long string that will be trimmed",
//!     27,
//!     TruncateOptions::default(),
//! );
//! assert_eq!(result.unwrap(), "This is a lon…ll be trimmed");
//! ```
#![warn(clippy::all, clippy::pedantic)]

pub use prelude::Length;
pub use truncator::{
    default_normalizer, truncate, truncate_text, width_normalizer, Content, Normalizer, Span,
    TruncateError, TruncateOptions, DEFAULT_MAX_LENGTH, DEFAULT_REPLACER,
};

mod prelude;
mod truncator;

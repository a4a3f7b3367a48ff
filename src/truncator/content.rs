use std::fmt::{self, Display};

use super::Span;

/// 输入/输出的两种形态：原始文本，或已切分好的 span 序列
///
/// 输出形态永远与输入形态一致：文本进、文本出；span 进、span 出。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Spans(Vec<Span>),
}

impl Content {
    /// 按照 `self` 的形态把 span 序列重新序列化成输出
    ///
    /// - 原始文本形态：把所有 span 的 text 拼接成一个字符串
    /// - span 序列形态：直接返回 span 序列
    pub(crate) fn reshape(&self, spans: Vec<Span>) -> Self {
        match self {
            Self::Text(_) => Self::Text(spans.into_iter().map(|span| span.text).collect()),
            Self::Spans(_) => Self::Spans(spans),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Span>> for Content {
    fn from(spans: Vec<Span>) -> Self {
        Self::Spans(spans)
    }
}

impl Display for Content {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(text) => write!(formatter, "{text}"),
            Self::Spans(spans) => {
                for span in spans {
                    write!(formatter, "{}", span.text)?;
                }
                Ok(())
            }
        }
    }
}

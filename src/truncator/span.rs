use crate::prelude::Length;

/// 内容中不可分割的原子单元
///
/// 截断永远不会拆开一个 span：要么整个保留，要么整个丢弃。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    // 该单元的字面内容
    pub text: String,
    // 该单元占用预算的权重
    // 不要求等于 text 的字符数，调用方可以注入自定义度量
    // （比如每个字素 1、每个终端列 1、每个 token 1）
    pub length: Length,
}

impl Span {
    pub fn new(text: &str, length: Length) -> Self {
        Self {
            text: String::from(text),
            length,
        }
    }
}

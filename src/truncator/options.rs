use crate::prelude::Length;

use super::{Content, Normalizer};

/// `truncate` 的可选配置，所有字段都可以缺省
#[derive(Default)]
pub struct TruncateOptions {
    // 替代被裁剪中段的标记（缺省为单个省略号 "…"）
    // 可以是文本，也可以是带权 span 序列，归一化方式与输入相同
    pub replacer: Option<Content>,
    // 头部保留内容的最大权重长度
    pub max_head_length: Option<Length>,
    // 尾部保留内容的最大权重长度
    pub max_tail_length: Option<Length>,
    // 覆盖默认的文本切分策略
    pub normalizer: Option<Box<Normalizer>>,
}

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::Span;

/// 归一化函数的契约：原始文本 -> 有序、无缝隙、不重叠的带权 span 序列
///
/// 只有原始文本会被归一化；span 序列输入原样通过，不会被二次切分。
pub type Normalizer = dyn Fn(&str) -> Vec<Span>;

/// 默认归一化策略
///
/// 使用 `.graphemes(true)` 把文本拆分成字素（grapheme clusters），
/// 每个字素权重为 1。字素是人类可感知的字符单位，
/// 可能由多个 Unicode 码点组成（旗帜、肤色修饰符、ZWJ 组合 emoji 等），
/// 截断永远不会落在一个字素的中间。
pub fn default_normalizer(text: &str) -> Vec<Span> {
    text.graphemes(true)
        .map(|grapheme| Span {
            text: String::from(grapheme),
            length: 1,
        })
        .collect()
}

/// 按终端显示宽度归一化
///
/// 宽度为 0 或 1 的字素占 1 列，其余（全角字符、多数 emoji）占 2 列。
/// 供按终端列宽截断的调用方使用。
pub fn width_normalizer(text: &str) -> Vec<Span> {
    text.graphemes(true)
        .map(|grapheme| {
            let rendered_width = match grapheme.width() {
                0 | 1 => 1,
                _ => 2,
            };
            Span {
                text: String::from(grapheme),
                length: rendered_width,
            }
        })
        .collect()
}

use std::cmp::min;

use crate::prelude::Length;

pub use content::Content;
pub use error::TruncateError;
pub use normalizer::{default_normalizer, width_normalizer, Normalizer};
pub use options::TruncateOptions;
pub use span::Span;

mod content;
mod error;
mod normalizer;
mod options;
mod span;

/// `max_length` 的缺省值
pub const DEFAULT_MAX_LENGTH: Length = 16;

/// 替代标记的缺省值
pub const DEFAULT_REPLACER: &str = "…";

/// 把内容截断到最大显示长度以内：裁掉中段，用替代标记连接保留的头尾
///
/// 输出形态与输入形态一致（文本进、文本出；span 进、span 出）。
/// 纯函数，不修改调用方的任何数据，没有共享状态。
///
/// # 参数
/// - `input`: 原始文本或带权 span 序列。
/// - `max_length`: 输出允许的最大权重长度（必须 >= 0）。
/// - `options`: 可选配置，见 [`TruncateOptions`]。
///
/// # 返回值
/// 截断后的内容；长度参数为负数时返回 [`TruncateError::InvalidArgument`]。
///
/// # 算法
/// 1. 把输入和替代标记归一化成 span 序列，分别求总权重。
/// 2. 预算连替代标记都装不下时，只输出替代标记本身能装下的前缀。
/// 3. 输入本来就不超长时，原样返回输入。
/// 4. 在剩余预算内协商头尾各自的配额。
/// 5. 按 span 个数切分头尾候选，再按权重贪心装入，
///    头部从前往后、尾部从后往前。
pub fn truncate(
    input: Content,
    max_length: Length,
    options: TruncateOptions,
) -> Result<Content, TruncateError> {
    if max_length < 0 {
        return Err(TruncateError::InvalidArgument("max_length"));
    }
    if let Some(max_head_length) = options.max_head_length {
        if max_head_length < 0 {
            return Err(TruncateError::InvalidArgument("max_head_length"));
        }
    }
    if let Some(max_tail_length) = options.max_tail_length {
        if max_tail_length < 0 {
            return Err(TruncateError::InvalidArgument("max_tail_length"));
        }
    }

    let normalizer: &Normalizer = match options.normalizer.as_ref() {
        Some(normalizer) => normalizer.as_ref(),
        None => &default_normalizer,
    };

    let normalized_text = normalize(&input, normalizer);
    let text_length = total_length(&normalized_text);

    let replacer = options
        .replacer
        .unwrap_or_else(|| Content::Text(String::from(DEFAULT_REPLACER)));
    let normalized_replacer = normalize(&replacer, normalizer);
    let replacer_length = total_length(&normalized_replacer);

    // 预算连替代标记都装不下：只保留标记本身能装下的前缀，
    // 原始内容一个都不显示。这个分支要先于下面的「不需要截断」判断。
    if max_length <= replacer_length {
        let clipped = fit(max_length, &normalized_replacer, false);
        return Ok(input.reshape(clipped));
    }

    // 不需要截断：原样返回输入，不让归一化的痕迹泄漏到输出里
    if text_length <= max_length {
        return Ok(input);
    }

    // 此处 remainder 一定 > 0（上面已经排除了 max_length <= replacer_length）
    let remainder = max_length - replacer_length;
    let (head_budget, tail_budget) =
        head_tail_budgets(remainder, options.max_head_length, options.max_tail_length);

    // 按 span 个数（位置计数）切分头尾候选集，而不是按累计权重。
    // 当 span 权重不为 1 时，切分点会和权重预算暗示的位置不一致，
    // 随后的 fit 仍按权重兜底，保证头部不超出配额。
    let split_idx =
        usize::try_from(head_budget).map_or(0, |budget| min(budget, normalized_text.len()));
    let (head_candidates, tail_candidates) = normalized_text.split_at(split_idx);

    let mut output = fit(head_budget, head_candidates, false);
    output.extend(normalized_replacer);
    output.extend(fit(tail_budget, tail_candidates, true));

    Ok(input.reshape(output))
}

/// 文本进、文本出的便捷封装
pub fn truncate_text(
    text: &str,
    max_length: Length,
    options: TruncateOptions,
) -> Result<String, TruncateError> {
    let output = truncate(Content::from(text), max_length, options)?;
    Ok(output.to_string())
}

/// 把内容归一化成 span 序列
///
/// span 序列输入是恒等变换，永远不会被二次切分。
fn normalize(content: &Content, normalizer: &Normalizer) -> Vec<Span> {
    match content {
        Content::Text(text) => normalizer(text),
        Content::Spans(spans) => spans.clone(),
    }
}

/// 求 span 序列的总权重
fn total_length(spans: &[Span]) -> Length {
    spans.iter().map(|span| span.length).sum()
}

/// 在剩余预算内协商头尾各自的配额
///
/// 按头尾上限是否给定分四种情况：
/// - 都未给定：对半切分，头部拿走向上取整的一半。
/// - 只给定一侧：该侧钳制到预算以内，余下的全部给另一侧。
/// - 都给定且超出预算：超出量由两侧分摊，头部承担向上取整的一半。
/// - 都给定且装得下：按请求原样分配，剩余预算不会回填给任何一侧。
fn head_tail_budgets(
    remainder: Length,
    max_head_length: Option<Length>,
    max_tail_length: Option<Length>,
) -> (Length, Length) {
    match (max_head_length, max_tail_length) {
        (None, None) => {
            let head_budget = ceil_half(remainder);
            (head_budget, remainder - head_budget)
        }
        (Some(max_head_length), None) => {
            let head_budget = min(max_head_length, remainder);
            (head_budget, remainder - head_budget)
        }
        (None, Some(max_tail_length)) => {
            let tail_budget = min(max_tail_length, remainder);
            (remainder - tail_budget, tail_budget)
        }
        (Some(max_head_length), Some(max_tail_length)) => {
            let requested = max_head_length + max_tail_length;
            if requested > remainder {
                // 请求超出预算：头部承担向上取整的一半削减量。
                // 一侧的上限远小于另一侧时，这里可能把某侧的配额削成负数，
                // 负配额一侧不保留任何内容。
                let overflow = requested - remainder;
                let half_overflow = ceil_half(overflow);
                (
                    max_head_length - half_overflow,
                    max_tail_length - (overflow - half_overflow),
                )
            } else {
                (max_head_length, max_tail_length)
            }
        }
    }
}

/// 向上取整的一半（参数非负）
const fn ceil_half(length: Length) -> Length {
    (length + 1) / 2
}

/// 在给定预算内贪心装入 span
///
/// 从前往后（`reverse` 时从后往前）逐个累计权重，
/// 遇到第一个会超出预算的 span 就停止，不跳过继续找更小的。
/// 返回结果保持原有的从左到右顺序。
fn fit(space: Length, spans: &[Span], reverse: bool) -> Vec<Span> {
    let mut length: Length = 0;
    let mut result: Vec<Span> = Vec::new();

    let spans: Box<dyn Iterator<Item = &Span>> = if reverse {
        Box::new(spans.iter().rev())
    } else {
        Box::new(spans.iter())
    };

    for span in spans {
        if length + span.length <= space {
            length += span.length;
            result.push(span.clone());
        } else {
            break;
        }
    }

    if reverse {
        result.reverse();
    }

    result
}

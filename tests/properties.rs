use ellipsis::{
    default_normalizer, truncate, truncate_text, Content, Length, Span, TruncateOptions,
};
use proptest::prelude::*;

/// 按默认归一化求文本的权重长度（每个字素 1）
fn grapheme_length(text: &str) -> Length {
    default_normalizer(text)
        .iter()
        .map(|span| span.length)
        .sum()
}

fn arb_spans() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec(
        ("[a-z]{0,3}", 0..4i64).prop_map(|(text, length)| Span { text, length }),
        0..20,
    )
}

proptest! {
    // 输出的权重长度永远不超过 max_length（默认配置下）
    #[test]
    fn output_never_exceeds_budget(text in "[a-zA-Z0-9 ]{0,80}", max_length in 0..40i64) {
        let output = truncate_text(&text, max_length, TruncateOptions::default()).unwrap();
        prop_assert!(grapheme_length(&output) <= max_length);
    }

    // 不超长的输入原样返回
    #[test]
    fn identity_when_within_budget(text in "[a-zA-Z0-9 ]{0,40}") {
        let output = truncate_text(&text, 40, TruncateOptions::default()).unwrap();
        prop_assert_eq!(output, text);
    }

    // 截断发生时，标记左侧是输入的前缀、右侧是输入的后缀，两者不重叠
    #[test]
    fn head_is_prefix_and_tail_is_suffix(
        text in "[a-zA-Z0-9 ]{0,80}",
        max_length in 2..40i64,
    ) {
        let output = truncate_text(&text, max_length, TruncateOptions::default()).unwrap();
        // 受限的字符集保证 '…' 只可能来自替代标记
        if let Some(marker_idx) = output.find('…') {
            let head = &output[..marker_idx];
            let tail = &output[marker_idx + '…'.len_utf8()..];
            prop_assert!(text.starts_with(head));
            prop_assert!(text.ends_with(tail));
            prop_assert!(head.len() + tail.len() < text.len());
        } else {
            prop_assert_eq!(output, text);
        }
    }

    // span 进、span 出，且输出权重不超过预算
    #[test]
    fn spans_keep_shape_and_budget(input in arb_spans(), max_length in 0..30i64) {
        let result =
            truncate(Content::Spans(input), max_length, TruncateOptions::default()).unwrap();
        match result {
            Content::Spans(spans) => {
                let total: Length = spans.iter().map(|span| span.length).sum();
                prop_assert!(total <= max_length);
            }
            Content::Text(_) => prop_assert!(false, "output shape must match input shape"),
        }
    }
}

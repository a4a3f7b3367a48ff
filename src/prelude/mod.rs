/// 带权长度的单位
///
/// 注意这里用的是有符号整数：
/// - 负数的 `max_length` / `max_head_length` / `max_tail_length`
///   需要在入口处被校验并拒绝；
/// - 头尾上限同时给定且超出预算时，协商出的预算可能为负数，
///   此时对应一侧不保留任何内容。
pub type Length = i64;

//! 未收录标签的回退颜色.

use crate::catalog::{Category, Rgb};

/// SplitMix64 的输出混合函数.
#[inline]
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// 由 `(category, label_id)` 派生的确定性颜色.
///
/// 同一输入在任何平台、任何运行中都得到相同颜色. 每个通道取 16 bit, 位于 `[0, 1]`.
pub(crate) fn fallback_color(category: Category, label_id: u32) -> Rgb {
    let seed = ((category.index() as u64) << 32) | label_id as u64;
    let bits = mix64(seed.wrapping_add(0x9e37_79b9_7f4a_7c15));
    let channel = |shift: u32| ((bits >> shift) & 0xffff) as f64 / 65535.0;
    Rgb::new(channel(0), channel(16), channel(32))
}

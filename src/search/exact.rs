//! 反向搜索引擎：从模式末尾逐符号收窄 [top, bottom] 秩区间。

use crate::index::RankIndex;

/// 匹配的秩区间（闭区间）。空区间不会被构造出来，
/// 搜索失败以 `None` 表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub top: usize,
    pub bottom: usize,
}

impl MatchRange {
    /// 区间内的匹配数。
    #[inline]
    pub fn count(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// 区间覆盖的全部秩。
    #[inline]
    pub fn ranks(&self) -> std::ops::RangeInclusive<usize> {
        self.top..=self.bottom
    }
}

/// 反向搜索：返回与模式匹配的旋转秩区间，找不到时返回 None。
///
/// 从 `[0, n-1]` 出发，对模式自尾向首的每个符号 c 计算
/// `top_count = count_symbol(c, top)`、`bottom_count = count_symbol(c, bottom+1)`；
/// 两者相等说明区间内不存在 c，搜索失败；否则
/// `top = first_occurrence[c] + top_count`，
/// `bottom = first_occurrence[c] + bottom_count - 1`。
/// 模式含字母表外符号时同样按"未找到"处理。空模式匹配整个区间。
///
/// ```
/// use bwtmatch::index::RankIndex;
/// use bwtmatch::search::backward_search;
///
/// let index = RankIndex::from_transform(b"smnpbnnaaaaa$a", 5);
/// let range = backward_search(&index, b"ana").unwrap();
/// assert_eq!(range.count(), 3);
/// ```
pub fn backward_search(index: &RankIndex, pattern: &[u8]) -> Option<MatchRange> {
    let n = index.len();
    if n == 0 {
        return None;
    }
    let mut top = 0usize;
    let mut bottom = n - 1;
    for &b in pattern.iter().rev() {
        let code = index.alphabet().encode(b)?;
        let top_count = index.count_symbol(code, top);
        let bottom_count = index.count_symbol(code, bottom + 1);
        if top_count == bottom_count {
            return None;
        }
        let first = index.first_occurrence(code);
        top = first + top_count;
        bottom = first + bottom_count - 1;
    }
    Some(MatchRange { top, bottom })
}

/// 模式在文本中的精确出现次数。
pub fn count_matches(index: &RankIndex, pattern: &[u8]) -> usize {
    backward_search(index, pattern).map_or(0, |r| r.count())
}

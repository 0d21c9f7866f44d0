//! 种子扩展近似匹配：允许至多 d 个替换失配的模式定位。
//!
//! 模式切成 d+1 个种子后，鸽笼原理保证 ≤ d 个失配的对齐中至少有一个
//! 种子零失配，可被反向搜索精确命中；因此候选集合无漏报，
//! 最终以 Hamming 距离逐一核验排除误报。只考虑替换，不考虑插入/删除。

use std::collections::BTreeSet;

use crate::index::{PartialSuffixArray, RankIndex};
use crate::search::exact::backward_search;

/// 模式切分出的种子区间（在模式内的 [start, end)）。
/// 前 d 个种子等长，最后一个吸收余数。
fn seed_spans(pattern_len: usize, d: usize) -> Vec<(usize, usize)> {
    let seed_len = pattern_len / (d + 1);
    let mut spans = Vec::with_capacity(d + 1);
    for i in 0..d {
        spans.push((i * seed_len, (i + 1) * seed_len));
    }
    spans.push((d * seed_len, pattern_len));
    spans
}

/// 将旋转秩解析为文本偏移：未采样的秩沿 last-to-first 行走到
/// 最近的采样秩，步数补偿到采样偏移上。
/// 偏移 0 一定被采样，行走必然终止。
pub fn resolve_offset(index: &RankIndex, psa: &PartialSuffixArray, rank: usize) -> usize {
    let mut rank = rank;
    let mut steps = 0usize;
    loop {
        if let Some(offset) = psa.get(rank) {
            return offset + steps;
        }
        rank = index.lf(rank);
        steps += 1;
    }
}

/// window 与 pattern 的 Hamming 距离是否 ≤ d（超过即提前放弃）。
fn hamming_within(window: &[u8], pattern: &[u8], d: usize) -> bool {
    debug_assert_eq!(window.len(), pattern.len());
    let mut mismatches = 0usize;
    for (&w, &p) in window.iter().zip(pattern) {
        if w != p {
            mismatches += 1;
            if mismatches > d {
                return false;
            }
        }
    }
    true
}

/// 返回模式在文本中所有 ≤ d 个替换失配的起始偏移（升序、去重）。
///
/// `text` 为不含终止符的原文；`index` 与 `psa` 须基于
/// 同一文本（加终止符）构建。
///
/// 模式短于 d+1 个符号时种子长度退化为 0，此时直接核验
/// 每个可能的起点，完备性保证不变。
pub fn approximate_match(
    text: &[u8],
    index: &RankIndex,
    psa: &PartialSuffixArray,
    pattern: &[u8],
    d: usize,
) -> Vec<usize> {
    let plen = pattern.len();
    if plen == 0 || plen > text.len() {
        return Vec::new();
    }

    let mut candidates: BTreeSet<usize> = BTreeSet::new();
    let seed_len = plen / (d + 1);
    if seed_len == 0 {
        candidates.extend(0..=text.len() - plen);
    } else {
        for (start, end) in seed_spans(plen, d) {
            let Some(range) = backward_search(index, &pattern[start..end]) else {
                continue;
            };
            for rank in range.ranks() {
                let hit = resolve_offset(index, psa, rank);
                // 种子命中推回整模式起点；起点落到文本之前的丢弃
                if hit >= start {
                    candidates.insert(hit - start);
                }
            }
        }
    }

    candidates
        .into_iter()
        .filter(|&c| c + plen <= text.len())
        .filter(|&c| hamming_within(&text[c..c + plen], pattern, d))
        .collect()
}

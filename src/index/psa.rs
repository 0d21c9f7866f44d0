//! 部分后缀数组：只保留文本偏移能被 K 整除的秩到偏移的稀疏映射。
//!
//! 采样规则保证任意秩沿 last-to-first 行走至多 K 步即可到达采样点，
//! 定位开销与采样密度成正比（参照 FM 索引的 SA 采样做法）。

use std::collections::HashMap;

use crate::index::rotations::rotation_order;
use crate::util::alphabet::{with_sentinel, Alphabet};

#[derive(Debug, Clone)]
pub struct PartialSuffixArray {
    step: usize,
    /// rank -> 文本偏移
    samples: HashMap<usize, usize>,
}

impl PartialSuffixArray {
    /// 全量排序所有旋转后按 `offset % k == 0` 采样（离线参考构建）。
    /// 末尾无终止符时自动追加。
    pub fn from_text(text: &[u8], k: usize) -> Self {
        let text = with_sentinel(text);
        let alphabet = Alphabet::from_text(&text);
        let codes = alphabet
            .encode_seq(&text)
            .expect("alphabet covers its own text");
        let order = rotation_order(&codes);
        Self::with_order(&order, k)
    }

    /// 复用已计算的旋转序构建，避免重复排序。
    pub fn with_order(order: &[u32], k: usize) -> Self {
        assert!(k >= 1, "suffix array step must be positive");
        let mut samples = HashMap::new();
        for (rank, &offset) in order.iter().enumerate() {
            let offset = offset as usize;
            if offset % k == 0 {
                samples.insert(rank, offset);
            }
        }
        Self { step: k, samples }
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// 秩对应的文本偏移；未采样的秩返回 None。
    #[inline]
    pub fn get(&self, rank: usize) -> Option<usize> {
        self.samples.get(&rank).copied()
    }

    /// 采样条目数。
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 按秩升序排列的 (rank, offset) 采样对。
    pub fn entries(&self) -> Vec<(usize, usize)> {
        let mut v: Vec<(usize, usize)> = self.samples.iter().map(|(&r, &o)| (r, o)).collect();
        v.sort_unstable();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_only_multiples_of_k() {
        let psa = PartialSuffixArray::from_text(b"panamabananas", 5);
        // 文本加终止符共 14 个偏移，其中 0、5、10 被采样
        assert_eq!(psa.len(), 3);
        let offsets: Vec<usize> = psa.entries().iter().map(|&(_, o)| o).collect();
        assert!(offsets.contains(&0));
        assert!(offsets.contains(&5));
        assert!(offsets.contains(&10));
    }

    #[test]
    fn offset_zero_is_always_sampled() {
        for k in 1..=8 {
            let psa = PartialSuffixArray::from_text(b"ACATGCTACTTT", k);
            assert!(
                psa.entries().iter().any(|&(_, o)| o == 0),
                "offset 0 missing for k={k}"
            );
        }
    }

    #[test]
    fn step_one_samples_every_rank() {
        let psa = PartialSuffixArray::from_text(b"panamabananas", 1);
        assert_eq!(psa.len(), 14);
        for rank in 0..14 {
            assert!(psa.get(rank).is_some());
        }
    }

    #[test]
    fn entries_match_full_rotation_order() {
        // k=1 时采样即完整后缀数组
        let text = b"AATCGGGTTCAATCGGGGT";
        let psa = PartialSuffixArray::from_text(text, 1);
        let augmented = crate::util::alphabet::with_sentinel(text);
        let alphabet = Alphabet::from_text(&augmented);
        let codes = alphabet.encode_seq(&augmented).unwrap();
        let order = rotation_order(&codes);
        for (rank, &offset) in order.iter().enumerate() {
            assert_eq!(psa.get(rank), Some(offset as usize));
        }
    }
}

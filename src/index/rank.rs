//! 变换之上的秩索引：首次出现表 + 定长检查点计数表。
//!
//! 对应概念上的首列/末列结构：`first_occurrence[c]` 是符号 c 的块在排序后
//! 变换（首列）中的起点；检查点表每 C 个位置采样一次各符号的累计计数，
//! 使 `count_symbol` 的补偿扫描不超过 C 个字符，以内存换查询时间。

use crate::index::bwt::transform_with_order;
use crate::index::rotations::rotation_order;
use crate::util::alphabet::{with_sentinel, Alphabet};

/// 默认检查点间隔。
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 5;

#[derive(Debug, Clone)]
pub struct RankIndex {
    alphabet: Alphabet,
    /// 数值化的变换序列
    bwt: Vec<u8>,
    /// first_occurrence[c] = 首列中符号 c 的块起点 = 比 c 小的符号总数
    first_occurrence: Vec<usize>,
    /// 检查点（按行平铺）：checkpoints[cp_id * sigma + c]
    /// = bwt[0 .. cp_id * interval) 中 c 的出现次数。
    /// cp_id 覆盖 0..=n/interval，因此位置 0 一定有检查点，
    /// 当 n 是 interval 的倍数时位置 n 也有。
    checkpoints: Vec<usize>,
    interval: usize,
}

impl RankIndex {
    /// 从文本构建（末尾无终止符时自动追加）。
    pub fn from_text(text: &[u8], interval: usize) -> Self {
        let text = with_sentinel(text);
        let alphabet = Alphabet::from_text(&text);
        let codes = alphabet
            .encode_seq(&text)
            .expect("alphabet covers its own text");
        let order = rotation_order(&codes);
        let bwt = transform_with_order(&codes, &order);
        Self::build(alphabet, bwt, interval)
    }

    /// 直接从已有的变换串构建（如 count 类输入格式，第一行即变换）。
    pub fn from_transform(bwt: &[u8], interval: usize) -> Self {
        let alphabet = Alphabet::from_text(bwt);
        let codes = alphabet
            .encode_seq(bwt)
            .expect("alphabet covers its own text");
        Self::build(alphabet, codes, interval)
    }

    fn build(alphabet: Alphabet, bwt: Vec<u8>, interval: usize) -> Self {
        assert!(interval >= 1, "checkpoint interval must be positive");
        let n = bwt.len();
        let sigma = alphabet.sigma();

        // first_occurrence：各符号计数的前缀和
        let mut counts = vec![0usize; sigma];
        for &c in &bwt {
            counts[c as usize] += 1;
        }
        let mut first_occurrence = vec![0usize; sigma];
        let mut acc = 0usize;
        for (i, &cnt) in counts.iter().enumerate() {
            first_occurrence[i] = acc;
            acc += cnt;
        }

        // 检查点：在每个 interval 倍数位置消费该位置符号之前快照
        let num_cp = n / interval + 1;
        let mut checkpoints = vec![0usize; num_cp * sigma];
        let mut running = vec![0usize; sigma];
        for (i, &c) in bwt.iter().enumerate() {
            if i % interval == 0 {
                checkpoints[(i / interval) * sigma..(i / interval + 1) * sigma]
                    .copy_from_slice(&running);
            }
            running[c as usize] += 1;
        }
        if n % interval == 0 {
            checkpoints[(n / interval) * sigma..].copy_from_slice(&running);
        }

        Self {
            alphabet,
            bwt,
            first_occurrence,
            checkpoints,
            interval,
        }
    }

    /// 索引覆盖的变换长度。
    #[inline]
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    pub fn interval(&self) -> usize {
        self.interval
    }

    /// 排序后变换中符号 `code` 首次出现的位置。
    /// 查询未知符号属于构建期缺陷，直接 panic。
    #[inline]
    pub fn first_occurrence(&self, code: u8) -> usize {
        assert!(
            (code as usize) < self.first_occurrence.len(),
            "symbol code {} not in index alphabet",
            code
        );
        self.first_occurrence[code as usize]
    }

    /// bwt[0..limit) 中符号 `code` 的出现次数。
    /// 从最近的检查点取基数，再顺扫补偿不足 interval 的余量。
    /// 对所有 0 <= limit <= len 成立；越界 limit 直接 panic。
    pub fn count_symbol(&self, code: u8, limit: usize) -> usize {
        let sigma = self.alphabet.sigma();
        assert!(
            (code as usize) < sigma,
            "symbol code {} not in index alphabet",
            code
        );
        assert!(
            limit <= self.bwt.len(),
            "rank query limit {} exceeds transform length {}",
            limit,
            self.bwt.len()
        );
        let cp_id = limit / self.interval;
        let base = self.checkpoints[cp_id * sigma + code as usize];
        let mut add = 0usize;
        for &c in &self.bwt[cp_id * self.interval..limit] {
            if c == code {
                add += 1;
            }
        }
        base + add
    }

    /// 变换第 `rank` 行的符号编码。
    #[inline]
    pub fn symbol_at(&self, rank: usize) -> u8 {
        assert!(
            rank < self.bwt.len(),
            "rank {} exceeds transform length {}",
            rank,
            self.bwt.len()
        );
        self.bwt[rank]
    }

    /// last-to-first 映射：末列第 `rank` 行的符号在首列中的行号。
    #[inline]
    pub fn lf(&self, rank: usize) -> usize {
        let c = self.symbol_at(rank);
        self.first_occurrence(c) + self.count_symbol(c, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_count(bwt: &[u8], code: u8, limit: usize) -> usize {
        bwt[..limit].iter().filter(|&&c| c == code).count()
    }

    fn encoded(index: &RankIndex, raw: &[u8]) -> Vec<u8> {
        index.alphabet().encode_seq(raw).unwrap()
    }

    #[test]
    fn first_occurrence_blocks() {
        let index = RankIndex::from_transform(b"smnpbnnaaaaa$a", 5);
        let a = index.alphabet();
        // 排序后：$ aaaaaa b m nnn p s
        assert_eq!(index.first_occurrence(a.encode(b'$').unwrap()), 0);
        assert_eq!(index.first_occurrence(a.encode(b'a').unwrap()), 1);
        assert_eq!(index.first_occurrence(a.encode(b'b').unwrap()), 7);
        assert_eq!(index.first_occurrence(a.encode(b'm').unwrap()), 8);
        assert_eq!(index.first_occurrence(a.encode(b'n').unwrap()), 9);
        assert_eq!(index.first_occurrence(a.encode(b'p').unwrap()), 12);
        assert_eq!(index.first_occurrence(a.encode(b's').unwrap()), 13);
    }

    #[test]
    fn count_matches_naive_for_all_limits_and_intervals() {
        let raw = b"smnpbnnaaaaa$a";
        for interval in 1..=raw.len() + 2 {
            let index = RankIndex::from_transform(raw, interval);
            let codes = encoded(&index, raw);
            for code in 0..index.alphabet().sigma() as u8 {
                for limit in 0..=raw.len() {
                    assert_eq!(
                        index.count_symbol(code, limit),
                        naive_count(&codes, code, limit),
                        "interval={interval} code={code} limit={limit}"
                    );
                }
            }
        }
    }

    #[test]
    fn interval_granularity_does_not_change_counts() {
        let raw = b"smnpbnnaaaaa$a";
        let fine = RankIndex::from_transform(raw, 1);
        let coarse = RankIndex::from_transform(raw, 7);
        for code in 0..fine.alphabet().sigma() as u8 {
            for limit in 0..=raw.len() {
                assert_eq!(
                    fine.count_symbol(code, limit),
                    coarse.count_symbol(code, limit)
                );
            }
        }
    }

    #[test]
    fn lf_walk_visits_every_rank_once() {
        let index = RankIndex::from_text(b"panamabananas", 5);
        let n = index.len();
        let mut seen = vec![false; n];
        let mut rank = 0usize;
        for _ in 0..n {
            assert!(!seen[rank]);
            seen[rank] = true;
            rank = index.lf(rank);
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "exceeds transform length")]
    fn out_of_bounds_limit_panics() {
        let index = RankIndex::from_transform(b"smnpbnnaaaaa$a", 5);
        index.count_symbol(0, 15);
    }

    #[test]
    #[should_panic(expected = "not in index alphabet")]
    fn unknown_symbol_code_panics() {
        let index = RankIndex::from_transform(b"smnpbnnaaaaa$a", 5);
        index.count_symbol(100, 0);
    }
}

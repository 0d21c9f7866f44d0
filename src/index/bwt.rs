//! Burrows-Wheeler 变换的构建与逆变换。

use crate::index::rotations::rotation_order;
use crate::util::alphabet::Alphabet;

/// 根据旋转序提取变换（排序旋转矩阵的最后一列）。
/// text 为数值化文本，order 为 `rotation_order` 的结果。
pub fn transform_with_order(text: &[u8], order: &[u32]) -> Vec<u8> {
    let n = text.len();
    let mut bwt = Vec::with_capacity(n);
    for &p in order {
        let i = p as usize;
        // 旋转起点的前驱（循环回绕）
        let prev = if i == 0 { text[n - 1] } else { text[i - 1] };
        bwt.push(prev);
    }
    bwt
}

/// 构建文本的 Burrows-Wheeler 变换。
/// 调用方负责保证文本以唯一终止符结尾（见 [`crate::util::alphabet::with_sentinel`]）。
///
/// ```
/// use bwtmatch::index::bwt::transform;
///
/// assert_eq!(transform(b"panamabananas$"), b"smnpbnnaaaaa$a");
/// ```
pub fn transform(text: &[u8]) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    let alphabet = Alphabet::from_text(text);
    let codes = alphabet
        .encode_seq(text)
        .expect("alphabet covers its own text");
    let order = rotation_order(&codes);
    let bwt = transform_with_order(&codes, &order);
    alphabet.decode_seq(&bwt)
}

/// 从变换重建原文（含末尾终止符）。
///
/// 给每个符号标注出现序号（第 k 次出现的 'a' 记为 a_k）后，所有标注符号
/// 唯一；首列即标注符号的排序。从终止符所在行出发，沿 last-to-first
/// 对应关系 `lf(i) = first_occurrence[bwt[i]] + ordinal[i]` 反向行走，
/// 即可逐字符还原文本。
///
/// 变换中必须恰好含一个终止符；解析层负责校验，这里仅作断言。
pub fn invert(bwt: &[u8]) -> Vec<u8> {
    let n = bwt.len();
    if n == 0 {
        return Vec::new();
    }

    let alphabet = Alphabet::from_text(bwt);
    let codes = alphabet
        .encode_seq(bwt)
        .expect("alphabet covers its own text");
    let sigma = alphabet.sigma();

    // 计数排序得到首列各符号块的起点
    let mut counts = vec![0usize; sigma];
    for &c in &codes {
        counts[c as usize] += 1;
    }
    assert_eq!(counts[0], 1, "transform must contain exactly one sentinel");
    let mut first_occurrence = vec![0usize; sigma];
    let mut acc = 0usize;
    for (i, &cnt) in counts.iter().enumerate() {
        first_occurrence[i] = acc;
        acc += cnt;
    }

    // 出现序号：ordinal[i] = codes[i] 在 codes[0..i] 中的出现次数
    let mut running = vec![0usize; sigma];
    let mut ordinal = Vec::with_capacity(n);
    for &c in &codes {
        ordinal.push(running[c as usize]);
        running[c as usize] += 1;
    }

    let primary = codes
        .iter()
        .position(|&c| c == 0)
        .expect("sentinel presence checked above");

    // 从终止符行反向行走，文本以终止符收尾
    let mut out = vec![0u8; n];
    let mut row = primary;
    for slot in out.iter_mut().take(n - 1).rev() {
        row = first_occurrence[codes[row] as usize] + ordinal[row];
        *slot = codes[row];
    }
    alphabet.decode_seq(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alphabet::with_sentinel;

    #[test]
    fn transform_known_value() {
        assert_eq!(transform(b"panamabananas$"), b"smnpbnnaaaaa$a");
    }

    #[test]
    fn roundtrip_panamabananas() {
        let text = b"panamabananas$";
        assert_eq!(invert(&transform(text)), text);
    }

    #[test]
    fn roundtrip_single_sentinel() {
        assert_eq!(invert(&transform(b"$")), b"$");
    }

    #[test]
    fn roundtrip_dna() {
        let text = with_sentinel(b"ACATGCTACTTT");
        assert_eq!(invert(&transform(&text)), text);
    }

    #[test]
    fn roundtrip_repeated_chars() {
        let text = with_sentinel(b"aaaaaa");
        assert_eq!(invert(&transform(&text)), text);
    }

    #[test]
    fn roundtrip_small_random_texts() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut x: u32 = 42;
        for len in 1..=64 {
            let mut t = Vec::with_capacity(len + 1);
            for _ in 0..len {
                x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                t.push(bases[(x >> 16) as usize % 4]);
            }
            let text = with_sentinel(&t);
            assert_eq!(invert(&transform(&text)), text, "len={len}");
        }
    }

    #[test]
    fn transform_length_preserved() {
        let text = b"panamabananas$";
        assert_eq!(transform(text).len(), text.len());
    }
}

/// 文本终止符。约定其字典序小于所有其他符号，且在文本中恰好出现一次。
pub const SENTINEL: u8 = b'$';

/// 稠密字母表编码：将文本中出现的每个字节映射到 0..sigma 的小整数。
/// 0 预留给终止符，其余符号按字节升序编号。
/// 编码后检查点表可以用平铺二维数组实现，避免哈希开销。
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// byte -> code，未出现的字节为 -1
    codes: [i16; 256],
    /// code -> byte
    symbols: Vec<u8>,
}

impl Alphabet {
    /// 从文本构建字母表。文本中除终止符以外的符号按字节升序获得编码 1..sigma。
    /// 终止符不要求出现在 `text` 中，编码 0 总是为它保留。
    pub fn from_text(text: &[u8]) -> Self {
        let mut seen = [false; 256];
        for &b in text {
            seen[b as usize] = true;
        }
        seen[SENTINEL as usize] = false;

        let mut symbols = Vec::with_capacity(8);
        symbols.push(SENTINEL);
        for (b, &present) in seen.iter().enumerate() {
            if present {
                symbols.push(b as u8);
            }
        }

        let mut codes = [-1i16; 256];
        for (code, &b) in symbols.iter().enumerate() {
            codes[b as usize] = code as i16;
        }

        Self { codes, symbols }
    }

    /// 字母表大小（含终止符）。
    #[inline]
    pub fn sigma(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn encode(&self, b: u8) -> Option<u8> {
        let c = self.codes[b as usize];
        if c < 0 {
            None
        } else {
            Some(c as u8)
        }
    }

    #[inline]
    pub fn decode(&self, code: u8) -> u8 {
        assert!(
            (code as usize) < self.symbols.len(),
            "code {} out of alphabet range {}",
            code,
            self.symbols.len()
        );
        self.symbols[code as usize]
    }

    /// 整段编码；遇到字母表外的字节返回 None（查询层把它当作不匹配处理）。
    pub fn encode_seq(&self, seq: &[u8]) -> Option<Vec<u8>> {
        seq.iter().map(|&b| self.encode(b)).collect()
    }

    /// 整段解码回原始字节。
    pub fn decode_seq(&self, codes: &[u8]) -> Vec<u8> {
        codes.iter().map(|&c| self.decode(c)).collect()
    }
}

/// 若文本末尾没有终止符则追加一个。
pub fn with_sentinel(text: &[u8]) -> Vec<u8> {
    let mut t = text.to_vec();
    if t.last() != Some(&SENTINEL) {
        t.push(SENTINEL);
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dense_and_ordered() {
        let a = Alphabet::from_text(b"panamabananas$");
        // $ < a < b < m < n < p < s
        assert_eq!(a.sigma(), 7);
        assert_eq!(a.encode(b'$'), Some(0));
        assert_eq!(a.encode(b'a'), Some(1));
        assert_eq!(a.encode(b's'), Some(6));
        assert_eq!(a.encode(b'z'), None);
    }

    #[test]
    fn sentinel_reserved_even_if_absent() {
        let a = Alphabet::from_text(b"ACGT");
        assert_eq!(a.encode(b'$'), Some(0));
        assert_eq!(a.encode(b'A'), Some(1));
        assert_eq!(a.sigma(), 5);
    }

    #[test]
    fn roundtrip_encode_decode() {
        let a = Alphabet::from_text(b"ACATGCTACTTT$");
        let codes = a.encode_seq(b"ACATGCTACTTT$").unwrap();
        assert_eq!(a.decode_seq(&codes), b"ACATGCTACTTT$");
    }

    #[test]
    fn with_sentinel_appends_once() {
        assert_eq!(with_sentinel(b"abc"), b"abc$");
        assert_eq!(with_sentinel(b"abc$"), b"abc$");
    }
}

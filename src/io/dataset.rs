//! 课程练习输入格式的解析。
//!
//! 每个练习读取一个小文本文件，按行分隔记录。格式错误（缺行、
//! 终止符数目不对、K/d 不是数字）在这里立即报错，算法层不再校验。

use anyhow::{bail, Context, Result};

use crate::util::alphabet::SENTINEL;

/// 精确计数练习：第一行变换，第二行空格分隔的模式。
#[derive(Debug, Clone)]
pub struct CountDataset {
    pub transform: Vec<u8>,
    pub patterns: Vec<Vec<u8>>,
}

/// 近似匹配练习：第一行文本，第二行模式，第三行失配上限 d。
#[derive(Debug, Clone)]
pub struct ApproxDataset {
    pub text: Vec<u8>,
    pub patterns: Vec<Vec<u8>>,
    pub max_mismatches: usize,
}

/// 部分后缀数组练习：第一行文本，第二行采样间隔 K。
#[derive(Debug, Clone)]
pub struct PsaDataset {
    pub text: Vec<u8>,
    pub step: usize,
}

fn lines(input: &str) -> Vec<&str> {
    input.lines().map(str::trim_end).collect()
}

fn require_line<'a>(lines: &[&'a str], idx: usize, what: &str) -> Result<&'a str> {
    let line = lines
        .get(idx)
        .copied()
        .filter(|l| !l.is_empty())
        .with_context(|| format!("missing {} on line {}", what, idx + 1))?;
    Ok(line)
}

fn parse_patterns(line: &str) -> Result<Vec<Vec<u8>>> {
    let patterns: Vec<Vec<u8>> = line
        .split_whitespace()
        .map(|p| p.as_bytes().to_vec())
        .collect();
    if patterns.is_empty() {
        bail!("pattern line contains no patterns");
    }
    Ok(patterns)
}

/// 文本行允许以一个终止符结尾（随课程输入习惯），剥掉后返回；
/// 出现在中间的终止符是格式错误。
fn strip_sentinel(mut text: Vec<u8>) -> Result<Vec<u8>> {
    if text.last() == Some(&SENTINEL) {
        text.pop();
    }
    if text.contains(&SENTINEL) {
        bail!(
            "text may only carry the sentinel '{}' at its end",
            SENTINEL as char
        );
    }
    Ok(text)
}

/// 构建练习：单行文本（返回值不含终止符，调用方追加）。
pub fn parse_text(input: &str) -> Result<Vec<u8>> {
    let lines = lines(input);
    strip_sentinel(require_line(&lines, 0, "text")?.as_bytes().to_vec())
}

/// 逆变换练习：单行变换，必须恰好含一个终止符。
pub fn parse_transform(input: &str) -> Result<Vec<u8>> {
    let lines = lines(input);
    let transform = require_line(&lines, 0, "transform")?.as_bytes().to_vec();
    let sentinels = transform.iter().filter(|&&b| b == SENTINEL).count();
    if sentinels != 1 {
        bail!(
            "transform must contain exactly one sentinel '{}', found {}",
            SENTINEL as char,
            sentinels
        );
    }
    Ok(transform)
}

pub fn parse_count(input: &str) -> Result<CountDataset> {
    let all = lines(input);
    let transform = parse_transform(require_line(&all, 0, "transform")?)?;
    let patterns = parse_patterns(require_line(&all, 1, "patterns")?)?;
    Ok(CountDataset {
        transform,
        patterns,
    })
}

pub fn parse_approx(input: &str) -> Result<ApproxDataset> {
    let all = lines(input);
    let text = strip_sentinel(require_line(&all, 0, "text")?.as_bytes().to_vec())?;
    let patterns = parse_patterns(require_line(&all, 1, "patterns")?)?;
    let d_line = require_line(&all, 2, "mismatch limit")?;
    let max_mismatches: usize = d_line
        .trim()
        .parse()
        .with_context(|| format!("mismatch limit '{}' is not a number", d_line))?;
    Ok(ApproxDataset {
        text,
        patterns,
        max_mismatches,
    })
}

pub fn parse_psa(input: &str) -> Result<PsaDataset> {
    let all = lines(input);
    let text = strip_sentinel(require_line(&all, 0, "text")?.as_bytes().to_vec())?;
    let k_line = require_line(&all, 1, "sampling step")?;
    let step: usize = k_line
        .trim()
        .parse()
        .with_context(|| format!("sampling step '{}' is not a number", k_line))?;
    if step == 0 {
        bail!("sampling step must be positive");
    }
    Ok(PsaDataset { text, step })
}

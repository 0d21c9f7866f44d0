//! # bwtmatch
//!
//! 基于 Burrows-Wheeler 变换的全文索引与近似匹配。
//!
//! 本 crate 实现了课程风格的 BWT 流水线，包括：
//!
//! - **变换构建 / 逆变换**：循环旋转排序取末列，及由末列还原原文
//! - **秩索引**：首次出现表 + 每 C 位置采样的检查点计数表，O(C) 秩查询
//! - **部分后缀数组**：偏移被 K 整除的秩采样，last-to-first 行走定位
//! - **反向搜索**：自模式尾部逐符号收窄 [top, bottom] 区间的精确匹配
//! - **近似匹配**：d+1 种子切分 + 候选去重 + Hamming 距离核验
//!
//! ## 快速示例
//!
//! ```rust
//! use bwtmatch::index::{bwt, PartialSuffixArray, RankIndex};
//! use bwtmatch::search::{approximate_match, count_matches};
//!
//! // 变换与逆变换互逆
//! let t = bwt::transform(b"panamabananas$");
//! assert_eq!(t, b"smnpbnnaaaaa$a");
//! assert_eq!(bwt::invert(&t), b"panamabananas$");
//!
//! // 精确计数
//! let index = RankIndex::from_transform(&t, 5);
//! assert_eq!(count_matches(&index, b"ana"), 3);
//!
//! // 近似匹配（至多 1 个替换失配）
//! let text = b"ACATGCTACTTT";
//! let index = RankIndex::from_text(text, 5);
//! let psa = PartialSuffixArray::from_text(text, 5);
//! let hits = approximate_match(text, &index, &psa, b"ATT", 1);
//! assert!(hits.contains(&8));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — 课程练习输入文件解析
//! - [`index`] — 旋转排序、BWT 构建/逆变换、秩索引、部分后缀数组
//! - [`search`] — 反向搜索与种子扩展近似匹配
//! - [`util`] — 稠密字母表编码

pub mod index;
pub mod io;
pub mod search;
pub mod util;

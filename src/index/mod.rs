//! 索引构建：旋转排序、BWT 构建/逆变换、秩索引与部分后缀数组。
//!
//! 变换、秩索引、部分后缀数组均在输入文本上一次性构建，
//! 之后对所有查询只读共享。

pub mod bwt;
pub mod psa;
pub mod rank;
pub mod rotations;

pub use psa::PartialSuffixArray;
pub use rank::{RankIndex, DEFAULT_CHECKPOINT_INTERVAL};

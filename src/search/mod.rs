//! 查询层：精确反向搜索与种子扩展近似匹配。

pub mod approx;
pub mod exact;

pub use approx::approximate_match;
pub use exact::{backward_search, count_matches, MatchRange};

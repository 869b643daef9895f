//! 跳棋 AI 库
//!
//! 提供棋盘评估与 Alpha-Beta 搜索：
//! - 位置权重矩阵评估，权重可从文本文件加载
//! - 确定性的 Minimax 搜索，按推进增量排序候选走法

mod evaluate;
mod search;
mod weights;

pub use evaluate::{EvalWeights, Evaluator, WeightMatrix};
pub use search::{AiConfig, AiEngine};
pub use weights::{format_matrix, parse_matrix, WeightsError};

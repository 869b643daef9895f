//! 搜索引擎
//!
//! Minimax + Alpha-Beta 剪枝。候选走法按即时推进增量排序以提高
//! 剪枝效率；递归在每层的私有棋局副本上进行，剪枝提前返回时
//! 没有需要回滚的状态。

use serde::{Deserialize, Serialize};
use tracing::info;

use checkers_core::{BoardState, Move, MoveGenerator, Side};

use crate::evaluate::{EvalWeights, Evaluator};

/// 默认终局饱和分值
const DEFAULT_WIN_SCORE: f64 = 100_000.0;

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// 评估权重
    pub weights: EvalWeights,
    /// 终局饱和分值（胜 +，负 -）
    pub win_score: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

/// AI 引擎
///
/// 单线程同步搜索，深度是唯一的耗时控制；调用方如需限时
/// 应在外层自行包装。
pub struct AiEngine {
    evaluator: Evaluator,
    win_score: f64,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.weights),
            win_score: config.win_score,
            nodes_searched: 0,
        }
    }

    /// 上次搜索访问的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 为当前走子方选择最佳走法
    ///
    /// `depth < 0` 按 0 处理，绝不负向递归。返回排序后第一个达到
    /// 最佳分值的候选，结果完全确定；只有无子可动时返回 `None`。
    pub fn get_move(
        &mut self,
        state: &BoardState,
        depth: i32,
        alpha: f64,
        beta: f64,
    ) -> Option<Move> {
        self.nodes_searched = 0;
        let depth = depth.max(0);
        let maximizer = state.current_turn;

        let candidates = self.ordered_moves(state, maximizer);
        if candidates.is_empty() {
            return None;
        }

        let mut alpha = alpha;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;
        for mv in candidates {
            let mut child = state.clone();
            child.board.move_pawn(mv.from(), mv.to());
            child.switch_turn();

            let score = self.alpha_beta(&child, maximizer, depth - 1, alpha, beta);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        }

        info!(
            "Search finished: depth={}, nodes={}, score={}",
            depth, self.nodes_searched, best_score
        );
        best_move
    }

    /// Alpha-Beta 递归
    ///
    /// 分值始终从根节点最大化方的视角计算。
    fn alpha_beta(
        &mut self,
        state: &BoardState,
        maximizer: Side,
        depth: i32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes_searched += 1;

        // 终局：某方 10 子全部到达对方营地，饱和分值不随深度变化
        if let Some(winner) = state.board.winner() {
            return if winner == maximizer {
                self.win_score
            } else {
                -self.win_score
            };
        }

        if depth <= 0 {
            return self.evaluator.score(&state.board, maximizer);
        }

        let candidates = self.ordered_moves(state, maximizer);
        // 无子可动按走子方立即失败处理
        if candidates.is_empty() {
            return if state.current_turn == maximizer {
                -self.win_score
            } else {
                self.win_score
            };
        }

        if state.current_turn == maximizer {
            let mut value = f64::NEG_INFINITY;
            for mv in candidates {
                let mut child = state.clone();
                child.board.move_pawn(mv.from(), mv.to());
                child.switch_turn();

                let score = self.alpha_beta(&child, maximizer, depth - 1, alpha, beta);
                if score > value {
                    value = score;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for mv in candidates {
                let mut child = state.clone();
                child.board.move_pawn(mv.from(), mv.to());
                child.switch_turn();

                let score = self.alpha_beta(&child, maximizer, depth - 1, alpha, beta);
                if score < value {
                    value = score;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }

    /// 生成候选走法并按即时推进增量排序
    ///
    /// 最大化方降序、最小化方升序；稳定排序保证平分候选之间的
    /// 相对顺序确定。
    fn ordered_moves(&self, state: &BoardState, maximizer: Side) -> Vec<Move> {
        let mut moves = MoveGenerator::generate_moves(state);
        let side = state.current_turn;
        let maximizing = side == maximizer;
        moves.sort_by(|a, b| {
            let da = self.evaluator.advancement_delta(a, side);
            let db = self.evaluator.advancement_delta(b, side);
            if maximizing {
                db.total_cmp(&da)
            } else {
                da.total_cmp(&db)
            }
        });
        moves
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

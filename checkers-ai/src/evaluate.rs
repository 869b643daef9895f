//! 局面评估函数
//!
//! 推进值按 8x8 格子权重矩阵累加；矩阵作为可注入配置而非
//! 固定常量，外部调优产物可直接替换默认值。

use serde::{Deserialize, Serialize};

use checkers_core::{Board, Move, Position, Side, BOARD_SIZE};

/// 8x8 格子权重矩阵，按行优先存储
pub type WeightMatrix = [[f64; BOARD_SIZE]; BOARD_SIZE];

/// 默认权重：随靠近目标营地二次增长（白方视角，黑方中心对称使用）
const DEFAULT_MATRIX: WeightMatrix = [
    [0.0, 1.0, 4.0, 9.0, 16.0, 25.0, 36.0, 49.0],
    [1.0, 2.0, 5.0, 10.0, 17.0, 26.0, 37.0, 50.0],
    [4.0, 5.0, 8.0, 13.0, 20.0, 29.0, 40.0, 53.0],
    [9.0, 10.0, 13.0, 18.0, 25.0, 34.0, 45.0, 58.0],
    [16.0, 17.0, 20.0, 25.0, 32.0, 41.0, 52.0, 65.0],
    [25.0, 26.0, 29.0, 34.0, 41.0, 50.0, 62.0, 74.0],
    [36.0, 37.0, 40.0, 45.0, 52.0, 62.0, 72.0, 85.0],
    [49.0, 50.0, 53.0, 58.0, 65.0, 74.0, 85.0, 98.0],
];

/// 评估权重配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// 己方推进权重矩阵
    pub win: WeightMatrix,
    /// 对方推进权重矩阵
    pub lose: WeightMatrix,
    /// 己方推进值的放大系数
    pub own_factor: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            win: DEFAULT_MATRIX,
            lose: DEFAULT_MATRIX,
            own_factor: 6.0,
        }
    }
}

/// 评估器
#[derive(Debug, Clone)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    /// 用指定权重创建评估器
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// 当前权重配置
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// 单个格子对指定阵营的权重
    ///
    /// 矩阵按白方视角书写，黑方通过中心对称 (7-x, 7-y) 读取。
    fn cell_weight(matrix: &WeightMatrix, pos: Position, side: Side) -> f64 {
        let n = BOARD_SIZE - 1;
        match side {
            Side::White => matrix[pos.x as usize][pos.y as usize],
            Side::Black => matrix[n - pos.x as usize][n - pos.y as usize],
        }
    }

    /// 一方所有棋子的推进值总和
    fn advancement(board: &Board, side: Side, matrix: &WeightMatrix) -> f64 {
        board
            .pawns(side)
            .iter()
            .map(|pos| Self::cell_weight(matrix, *pos, side))
            .sum()
    }

    /// 评估局面：perspective 方视角的得分，越高越有利
    pub fn score(&self, board: &Board, perspective: Side) -> f64 {
        self.weights.own_factor * Self::advancement(board, perspective, &self.weights.win)
            - Self::advancement(board, perspective.opponent(), &self.weights.lose)
    }

    /// 一次走子的即时推进增量（用于搜索的走法排序）
    pub fn advancement_delta(&self, mv: &Move, side: Side) -> f64 {
        Self::cell_weight(&self.weights.win, mv.to(), side)
            - Self::cell_weight(&self.weights.win, mv.from(), side)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalWeights::default())
    }
}

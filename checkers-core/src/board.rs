//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, HOME_ZONE_SUM, PAWNS_PER_SIDE};
use crate::piece::{Position, Side};

/// 棋盘
///
/// 占用状态唯一由 `squares` 维护，随走子增量更新，不从棋子列表重建。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 y * 8 + x，使用 Vec 以支持 serde
    squares: Vec<Option<Side>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// 创建初始棋盘
    ///
    /// 白方占据 x + y <= 3 的 10 格，黑方占据其中心对称位置。
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let n = BOARD_SIZE as u8;
        for x in 0..=HOME_ZONE_SUM {
            for y in 0..=HOME_ZONE_SUM {
                if x + y <= HOME_ZONE_SUM {
                    board.set(Position::new_unchecked(x, y), Some(Side::White));
                    board.set(Position::new_unchecked(n - 1 - x, n - 1 - y), Some(Side::Black));
                }
            }
        }
        board
    }

    /// 获取指定位置的占用状态
    pub fn get(&self, pos: Position) -> Option<Side> {
        self.squares[pos.to_index()]
    }

    /// 设置指定位置的占用状态
    pub fn set(&mut self, pos: Position, occupant: Option<Side>) {
        self.squares[pos.to_index()] = occupant;
    }

    /// 检查指定位置是否被占用
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// 移动棋子（不检查规则）
    pub fn move_pawn(&mut self, from: Position, to: Position) {
        let occupant = self.get(from);
        self.set(from, None);
        self.set(to, occupant);
    }

    /// 获取指定阵营的所有棋子位置（按行优先顺序，保证确定性）
    pub fn pawns(&self, side: Side) -> Vec<Position> {
        let mut result = Vec::with_capacity(PAWNS_PER_SIDE);
        for (index, occupant) in self.squares.iter().enumerate() {
            if *occupant == Some(side) {
                if let Some(pos) = Position::from_index(index) {
                    result.push(pos);
                }
            }
        }
        result
    }

    /// 统计指定阵营的棋子数
    pub fn count(&self, side: Side) -> usize {
        self.squares.iter().filter(|o| **o == Some(side)).count()
    }

    /// 判断胜者：某方 10 个棋子全部进入对方营地时获胜
    pub fn winner(&self) -> Option<Side> {
        for side in [Side::White, Side::Black] {
            let pawns = self.pawns(side);
            if pawns.len() == PAWNS_PER_SIDE && pawns.iter().all(|p| p.is_in_target(side)) {
                return Some(side);
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// 完整的棋局状态（棋盘加走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
}

impl BoardState {
    /// 创建初始状态（白方先行）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Side::White,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Side) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

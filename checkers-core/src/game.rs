//! 对局控制
//!
//! 串行处理走子请求：先完整验证，再原子应用，最后重新判定胜负。

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::BoardState;
use crate::error::{CheckersError, Result};
use crate::moves::{Move, MoveGenerator, MoveKind, MoveValidator};
use crate::piece::{Position, Side};

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// 对局进行中
    Ongoing,
    /// 白方获胜
    WhiteWon,
    /// 黑方获胜
    BlackWon,
}

/// 对局控制器
#[derive(Debug, Clone)]
pub struct Game {
    state: BoardState,
}

impl Game {
    /// 创建新对局（初始布局，白方先行）
    pub fn new() -> Self {
        Self {
            state: BoardState::initial(),
        }
    }

    /// 重置为初始布局
    pub fn new_game(&mut self) {
        self.state = BoardState::initial();
    }

    /// 当前棋局状态
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// 尝试走子
    ///
    /// 任何检查失败都不会改动棋盘；走法整体应用，单个棋子从
    /// 路径起点移到终点。
    pub fn try_play(&mut self, side: Side, path: &[(i8, i8)]) -> Result<()> {
        if self.state_of_game() != GameState::Ongoing {
            return Err(CheckersError::GameOver);
        }

        // 边界检查并转换坐标
        let mut cells = Vec::with_capacity(path.len());
        for &(x, y) in path {
            let pos = Position::new(x, y).ok_or(CheckersError::InvalidPosition { x, y })?;
            cells.push(pos);
        }

        let Some(&start) = cells.first() else {
            return Err(CheckersError::IllegalMove);
        };
        if self.state.board.get(start) != Some(side) {
            return Err(CheckersError::NoPawn {
                x: start.x,
                y: start.y,
            });
        }
        if side != self.state.current_turn {
            return Err(CheckersError::NotYourTurn);
        }
        if MoveValidator::classify_move(&self.state.board, &cells) == MoveKind::Illegal {
            return Err(CheckersError::IllegalMove);
        }

        let end = cells[cells.len() - 1];
        self.state.board.move_pawn(start, end);
        self.state.switch_turn();

        if let Some(winner) = self.state.board.winner() {
            info!("Game over: {:?} wins", winner);
        }
        Ok(())
    }

    /// 走子，返回是否被接受
    pub fn play(&mut self, side: Side, path: &[(i8, i8)]) -> bool {
        match self.try_play(side, path) {
            Ok(()) => true,
            Err(e) => {
                debug!("Move rejected: {}", e);
                false
            }
        }
    }

    /// 指定格子上棋子可到达的所有格子（用于界面高亮）
    pub fn legal_destinations(&self, cell: (i8, i8)) -> Vec<Position> {
        match Position::new(cell.0, cell.1) {
            Some(pos) if self.state.board.is_occupied(pos) => {
                MoveGenerator::reachable_cells(&self.state.board, pos)
            }
            _ => Vec::new(),
        }
    }

    /// 指定格子上棋子的所有完整走法路径（用于界面绘制箭头）
    pub fn legal_paths(&self, cell: (i8, i8)) -> Vec<Move> {
        match Position::new(cell.0, cell.1) {
            Some(pos) if self.state.board.is_occupied(pos) => {
                MoveGenerator::reachable_paths(&self.state.board, pos)
            }
            _ => Vec::new(),
        }
    }

    /// 对局状态（每次走子后重新判定）
    pub fn state_of_game(&self) -> GameState {
        match self.state.board.winner() {
            Some(Side::White) => GameState::WhiteWon,
            Some(Side::Black) => GameState::BlackWon,
            None => GameState::Ongoing,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PAWNS_PER_SIDE;
    use crate::board::Board;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.state_of_game(), GameState::Ongoing);
        assert_eq!(game.state().current_turn, Side::White);
        assert_eq!(game.state().board.count(Side::White), PAWNS_PER_SIDE);
        assert_eq!(game.state().board.count(Side::Black), PAWNS_PER_SIDE);
    }

    #[test]
    fn test_accept_step_move() {
        let mut game = Game::new();
        assert!(game.play(Side::White, &[(3, 0), (4, 0)]));
        assert_eq!(game.state().current_turn, Side::Black);
        assert_eq!(
            game.state().board.get(Position::new_unchecked(4, 0)),
            Some(Side::White)
        );
    }

    #[test]
    fn test_reject_wrong_turn() {
        let mut game = Game::new();
        // 黑方不能先行
        assert!(!game.play(Side::Black, &[(4, 7), (4, 6)]));
        assert_eq!(game.state().current_turn, Side::White);
    }

    #[test]
    fn test_reject_out_of_bounds() {
        let mut game = Game::new();
        let before = game.state().clone();
        assert!(!game.play(Side::White, &[(3, 0), (8, 0)]));
        assert!(!game.play(Side::White, &[(-1, 0), (0, 0)]));
        assert_eq!(game.state(), &before, "被拒绝的走法不应改动棋盘");
    }

    #[test]
    fn test_reject_no_pawn() {
        let mut game = Game::new();
        // 起点为空格
        assert!(!game.play(Side::White, &[(4, 4), (4, 5)]));
        // 起点是对方棋子
        assert!(!game.play(Side::White, &[(7, 7), (6, 7)]));
    }

    #[test]
    fn test_reject_illegal_path() {
        let mut game = Game::new();
        // 目标被占
        assert!(!game.play(Side::White, &[(0, 0), (1, 0)]));
        // 方向不共线
        assert!(!game.play(Side::White, &[(3, 0), (4, 1)]));
        // 空路径
        assert!(!game.play(Side::White, &[]));
    }

    #[test]
    fn test_chain_all_or_nothing() {
        let mut game = Game::new();
        // 前缀合法但末段非法的跳跃链必须整体拒绝
        let before = game.state().clone();
        assert!(!game.play(Side::White, &[(1, 1), (1, 3), (1, 4)]));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_move_round_trip() {
        // 合法走法沿原路返回后棋盘恢复原状
        let mut game = Game::new();
        let before = game.state().board.clone();

        assert!(game.play(Side::White, &[(3, 0), (4, 0)]));
        assert!(game.play(Side::Black, &[(4, 7), (3, 7)]));
        assert!(game.play(Side::White, &[(4, 0), (3, 0)]));
        assert!(game.play(Side::Black, &[(3, 7), (4, 7)]));

        assert_eq!(game.state().board, before);
    }

    #[test]
    fn test_jump_chain_round_trip() {
        // 双跳链沿原路返回后棋盘恢复原状
        let mut board = Board::empty();
        board.set(Position::new_unchecked(0, 0), Some(Side::White));
        board.set(Position::new_unchecked(1, 0), Some(Side::Black));
        board.set(Position::new_unchecked(3, 0), Some(Side::Black));
        board.set(Position::new_unchecked(7, 7), Some(Side::Black));

        let mut game = Game {
            state: BoardState::from_board(board, Side::White),
        };
        let before = game.state().board.clone();

        assert!(game.play(Side::White, &[(0, 0), (2, 0), (4, 0)]));
        assert!(game.play(Side::Black, &[(7, 7), (6, 7)]));
        assert!(game.play(Side::White, &[(4, 0), (2, 0), (0, 0)]));
        assert!(game.play(Side::Black, &[(6, 7), (7, 7)]));

        assert_eq!(game.state().board, before);
    }

    #[test]
    fn test_pawn_counts_after_sequence() {
        let mut game = Game::new();
        let seq: Vec<(Side, Vec<(i8, i8)>)> = vec![
            (Side::White, vec![(1, 2), (2, 2)]),
            (Side::Black, vec![(6, 5), (5, 5)]),
            // 跳跃：越过 (2, 1) 落到 (2, 2) 失败后改走单步
            (Side::White, vec![(2, 0), (2, 2)]),
            (Side::White, vec![(3, 0), (4, 0)]),
            (Side::Black, vec![(4, 7), (4, 6)]),
        ];
        for (side, path) in seq {
            let accepted = game.play(side, &path);
            assert_eq!(game.state().board.count(Side::White), PAWNS_PER_SIDE);
            assert_eq!(game.state().board.count(Side::Black), PAWNS_PER_SIDE);
            let _ = accepted;
        }
    }

    #[test]
    fn test_legal_destinations() {
        let game = Game::new();

        // 空格和界外没有可达格
        assert!(game.legal_destinations((4, 4)).is_empty());
        assert!(game.legal_destinations((9, 9)).is_empty());

        // 棋子有可达格，且不包含起点
        let dests = game.legal_destinations((3, 0));
        assert!(!dests.is_empty());
        assert!(!dests.contains(&Position::new_unchecked(3, 0)));
    }

    #[test]
    fn test_legal_paths_match_destinations() {
        let game = Game::new();
        let dests = game.legal_destinations((0, 0));
        let paths = game.legal_paths((0, 0));
        let path_ends: Vec<Position> = paths.iter().map(|m| m.to()).collect();
        assert_eq!(dests, path_ends);
    }

    #[test]
    fn test_win_detection_and_game_over() {
        // 构造黑方只差一步获胜的局面
        let mut board = Board::empty();
        let targets: Vec<Position> = (0..64)
            .filter_map(Position::from_index)
            .filter(|p| p.is_in_home(Side::White))
            .collect();
        // 9 个黑子已就位，只剩 (0, 3) 空着，最后一个黑子在营地边上
        for pos in targets.iter().take(9) {
            board.set(*pos, Some(Side::Black));
        }
        assert_eq!(targets[9], Position::new_unchecked(0, 3));
        board.set(Position::new_unchecked(0, 4), Some(Side::Black));
        // 白方棋子放在中立区域，避免形成另一方的胜局
        for (x, y) in [
            (4, 2),
            (5, 2),
            (6, 2),
            (7, 2),
            (4, 3),
            (5, 3),
            (6, 3),
            (7, 3),
            (4, 4),
            (5, 4),
        ] {
            board.set(Position::new_unchecked(x, y), Some(Side::White));
        }

        let mut game = Game {
            state: BoardState::from_board(board, Side::Black),
        };
        assert_eq!(game.state_of_game(), GameState::Ongoing);

        // (0, 4) -> (0, 3) 补上最后一格
        assert!(game.play(Side::Black, &[(0, 4), (0, 3)]));
        assert_eq!(game.state_of_game(), GameState::BlackWon);

        // 对局结束后拒绝任何走子
        assert!(!game.play(Side::White, &[(7, 7), (6, 7)]));
    }
}

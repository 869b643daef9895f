//! 中国跳棋规则核心库
//!
//! 包含:
//! - 位置、阵营、棋盘等核心数据结构
//! - 走法生成（单步与跳跃链）和走法分类
//! - 对局控制与胜负判定

mod board;
mod constants;
mod error;
mod game;
mod moves;
mod piece;

pub use board::{Board, BoardState};
pub use constants::*;
pub use error::{CheckersError, Result};
pub use game::{Game, GameState};
pub use moves::{Move, MoveGenerator, MoveKind, MoveValidator};
pub use piece::{Position, Side};

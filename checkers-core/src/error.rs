//! 错误类型定义

use thiserror::Error;

/// 跳棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// 无效的位置
    #[error("Invalid position: ({x}, {y})")]
    InvalidPosition { x: i8, y: i8 },

    /// 起点没有己方棋子
    #[error("No pawn of the moving side at ({x}, {y})")]
    NoPawn { x: u8, y: u8 },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 非法走法
    #[error("Illegal move path")]
    IllegalMove,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, CheckersError>;

//! 阵营和棋盘位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, HOME_ZONE_SUM};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 白方（先手，起始三角形靠近 (0, 0)）
    White,
    /// 黑方（后手，起始三角形靠近 (7, 7)）
    Black,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// 获取阵营编号（白方 0，黑方 1）
    pub fn index(&self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// 从编号解析阵营
    pub fn from_index(index: usize) -> Option<Side> {
        match index {
            0 => Some(Side::White),
            1 => Some(Side::Black),
            _ => None,
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-7)
    pub x: u8,
    /// 行 (0-7)
    pub y: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: i8, y: i8) -> Option<Self> {
        if x >= 0 && (x as usize) < BOARD_SIZE && y >= 0 && (y as usize) < BOARD_SIZE {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        Position::new(self.x as i8 + dx, self.y as i8 + dy)
    }

    /// 检查位置是否在指定阵营的营地内
    pub fn is_in_home(&self, side: Side) -> bool {
        match side {
            Side::White => self.x + self.y <= HOME_ZONE_SUM,
            Side::Black => self.x + self.y >= 2 * (BOARD_SIZE as u8 - 1) - HOME_ZONE_SUM,
        }
    }

    /// 检查位置是否在指定阵营的目标营地（即对方营地）内
    pub fn is_in_target(&self, side: Side) -> bool {
        self.is_in_home(side.opponent())
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Position {
                x: (index % BOARD_SIZE) as u8,
                y: (index / BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

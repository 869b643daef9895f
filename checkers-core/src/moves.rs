//! 走法生成和分类
//!
//! 单步走法和跳跃链共用同一套分类逻辑：生成器和验证器都把
//! 正在移动的棋子视为已离开起点，保证两条路径判定结果一致。

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardState};
use crate::constants::{BOARD_SIZE, DIRECTIONS};
use crate::piece::Position;

/// 走法：一条有序的格子路径
///
/// 路径长度至少为 2，要么是一次单步，要么是一条纯跳跃链。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 途经的格子，首元素为起点，末元素为终点
    pub path: Vec<Position>,
}

impl Move {
    /// 创建单步走法
    pub fn step(from: Position, to: Position) -> Self {
        Self {
            path: vec![from, to],
        }
    }

    /// 起点
    pub fn from(&self) -> Position {
        self.path[0]
    }

    /// 终点
    pub fn to(&self) -> Position {
        self.path[self.path.len() - 1]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from(), self.to())
    }
}

/// 走法种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// 单步：移动到相邻空格
    Step,
    /// 跳跃：越过正好位于路径段中点的棋子
    Jump,
    /// 非法
    Illegal,
}

/// 走法验证器
pub struct MoveValidator;

impl MoveValidator {
    /// 分类一条路径段
    ///
    /// 跳跃允许任意偶数距离：被跳过的棋子必须正好在段的中点，
    /// 段上其余格子必须为空。
    pub fn classify_segment(board: &Board, from: Position, to: Position) -> MoveKind {
        if from == to || board.is_occupied(to) {
            return MoveKind::Illegal;
        }

        let dx = to.x as i8 - from.x as i8;
        let dy = to.y as i8 - from.y as i8;

        // 方向必须与六个邻接方向之一共线
        if !(dx == 0 || dy == 0 || dx == -dy) {
            return MoveKind::Illegal;
        }

        let dist = dx.abs().max(dy.abs());
        if dist == 1 {
            return MoveKind::Step;
        }
        if dist % 2 != 0 {
            // 奇数距离没有中点格
            return MoveKind::Illegal;
        }

        let (sx, sy) = (dx.signum(), dy.signum());
        let mid = dist / 2;
        for k in 1..dist {
            let Some(cell) = from.offset(sx * k, sy * k) else {
                return MoveKind::Illegal;
            };
            if (k == mid) != board.is_occupied(cell) {
                return MoveKind::Illegal;
            }
        }
        MoveKind::Jump
    }

    /// 分类一条完整路径
    ///
    /// 路径首段决定走法种类：单步路径长度必须为 2，跳跃路径的
    /// 每一段都必须是跳跃。路径中任何格子重复即非法。
    pub fn classify_move(board: &Board, path: &[Position]) -> MoveKind {
        if path.len() < 2 {
            return MoveKind::Illegal;
        }
        for i in 0..path.len() {
            for j in (i + 1)..path.len() {
                if path[i] == path[j] {
                    return MoveKind::Illegal;
                }
            }
        }

        // 走子本身已离开起点，不阻挡也不充当后续跳跃的支点
        let mut scratch = board.clone();
        scratch.set(path[0], None);

        match Self::classify_segment(&scratch, path[0], path[1]) {
            MoveKind::Illegal => MoveKind::Illegal,
            MoveKind::Step => {
                if path.len() == 2 {
                    MoveKind::Step
                } else {
                    MoveKind::Illegal
                }
            }
            MoveKind::Jump => {
                for pair in path.windows(2).skip(1) {
                    if Self::classify_segment(&scratch, pair[0], pair[1]) != MoveKind::Jump {
                        return MoveKind::Illegal;
                    }
                }
                MoveKind::Jump
            }
        }
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 从单个格子出发可跳到的落点
    ///
    /// 沿每个方向逐格扫描找到第一个棋子（偏移 k），落点是该棋子
    /// 关于起跳点的反射（偏移 2k）；落点合法要求在棋盘内、为空，
    /// 且被跳棋子与落点之间的格子全部为空。
    fn jump_landings(board: &Board, from: Position) -> Vec<Position> {
        let mut landings = Vec::new();

        for (dx, dy) in DIRECTIONS {
            let mut k = 1i8;
            while let Some(over) = from.offset(dx * k, dy * k) {
                if !board.is_occupied(over) {
                    k += 1;
                    continue;
                }

                if let Some(landing) = from.offset(dx * 2 * k, dy * 2 * k) {
                    if !board.is_occupied(landing) {
                        let clear = ((k + 1)..(2 * k)).all(|l| {
                            from.offset(dx * l, dy * l)
                                .is_some_and(|cell| !board.is_occupied(cell))
                        });
                        if clear {
                            landings.push(landing);
                        }
                    }
                }
                break;
            }
        }
        landings
    }

    /// 枚举一个棋子的所有走法（单步和完整跳跃链）
    ///
    /// 跳跃部分是对跳跃图的广度优先搜索，已访问集合只增不减且
    /// 上界为 64 格，因此必然终止；前驱链用于重建完整路径。
    pub fn reachable_paths(board: &Board, origin: Position) -> Vec<Move> {
        let mut result = Vec::new();

        // 单步落点：在棋盘内且为空的相邻格
        for (dx, dy) in DIRECTIONS {
            if let Some(to) = origin.offset(dx, dy) {
                if !board.is_occupied(to) {
                    result.push(Move::step(origin, to));
                }
            }
        }

        // 跳跃链：移动中的棋子视为已离开起点
        let mut scratch = board.clone();
        scratch.set(origin, None);

        let mut visited = [false; BOARD_SIZE * BOARD_SIZE];
        let mut prev: [Option<Position>; BOARD_SIZE * BOARD_SIZE] =
            [None; BOARD_SIZE * BOARD_SIZE];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[origin.to_index()] = true;
        queue.push_back(origin);

        while let Some(current) = queue.pop_front() {
            for landing in Self::jump_landings(&scratch, current) {
                let index = landing.to_index();
                if !visited[index] {
                    visited[index] = true;
                    prev[index] = Some(current);
                    order.push(landing);
                    queue.push_back(landing);
                }
            }
        }

        // 沿前驱链重建完整路径
        for landing in order {
            let mut path = vec![landing];
            let mut current = landing;
            while let Some(parent) = prev[current.to_index()] {
                path.push(parent);
                current = parent;
            }
            path.reverse();
            result.push(Move { path });
        }

        result
    }

    /// 枚举一个棋子可到达的所有格子
    pub fn reachable_cells(board: &Board, origin: Position) -> Vec<Position> {
        Self::reachable_paths(board, origin)
            .iter()
            .map(|mv| mv.to())
            .collect()
    }

    /// 生成当前走子方的所有候选走法
    pub fn generate_moves(state: &BoardState) -> Vec<Move> {
        let mut moves = Vec::new();
        for pawn in state.board.pawns(state.current_turn) {
            moves.extend(Self::reachable_paths(&state.board, pawn));
        }
        moves
    }
}

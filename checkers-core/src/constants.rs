//! 规则常量定义

/// 棋盘边长（行数和列数）
pub const BOARD_SIZE: usize = 8;

/// 每方棋子数
pub const PAWNS_PER_SIDE: usize = 10;

/// 六个相邻方向（嵌入方格棋盘的六边形邻接）
pub const DIRECTIONS: [(i8, i8); 6] = [(1, 0), (0, 1), (-1, 0), (0, -1), (1, -1), (-1, 1)];

/// 营地大小：起始三角形内满足 x + y <= HOME_ZONE_SUM 的格子
pub const HOME_ZONE_SUM: u8 = 3;

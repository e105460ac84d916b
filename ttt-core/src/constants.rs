//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 最大步数（棋盘下满）
pub const MAX_MOVES: u8 = CELL_COUNT as u8;

/// 四个角的坐标 (row, col)
pub const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// 中心坐标 (row, col)
pub const CENTER: (u8, u8) = (1, 1);

/// 所有可能连成一线的位置：3 行、3 列、2 条对角线
pub const LINES: [[(u8, u8); 3]; 8] = [
    // 行
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // 列
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // 对角线
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

//! 棋子与格子定义

use serde::{Deserialize, Serialize};

/// 阵营（玩家标识）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// X 方
    X,
    /// O 方
    O,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// 获取记号字符
    pub fn to_char(&self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    /// 从记号字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'x' | 'X' => Some(Side::X),
            'o' | 'O' => Some(Side::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘上的一个格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空格
    #[default]
    Empty,
    /// 被某一方占据
    Occupied(Side),
}

impl Cell {
    /// 是否为空
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 占据该格的阵营
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(*side),
        }
    }

    /// 记号字符，空格为 '.'
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(side) => side.to_char(),
        }
    }

    /// 从记号字符解析
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            _ => Side::from_char(c).map(Cell::Occupied),
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        Cell::Occupied(side)
    }
}

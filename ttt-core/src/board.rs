//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, LINES, MAX_MOVES};
use crate::error::{BoardError, Result};
use crate::moves::{Move, MoveSet};
use crate::piece::{Cell, Side};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// 对局进行中
    InProgress,
    /// 和棋（棋盘下满且无人连线）
    Draw,
    /// 某一方连成一线
    Win(Side),
}

impl GameResult {
    /// 是否已分出结果
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// 胜方
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Win(side) => Some(*side),
            _ => None,
        }
    }
}

/// 棋盘快照
///
/// 快照一经创建便不再修改：`apply_move` 返回新的快照。
/// 可走集合随落子增量维护，始终满足 `move_count + available.len() == 9`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BoardState {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    move_count: u8,
    available: MoveSet,
}

impl BoardState {
    /// 创建空棋盘
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            move_count: 0,
            available: MoveSet::full(),
        }
    }

    /// 从任意格子布局创建快照
    ///
    /// 步数取已占格子数，可走集合取所有空格。不检查双方子数是否交替。
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut available = MoveSet::empty();
        for (row, line) in cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if cell.is_empty() {
                    available.insert(Move::new(row as u8, col as u8));
                }
            }
        }

        Self {
            cells,
            move_count: (CELL_COUNT - available.len()) as u8,
            available,
        }
    }

    /// 在新快照上落子
    pub fn apply_move(&self, mv: Move, side: Side) -> Result<BoardState> {
        if !mv.is_valid() {
            return Err(BoardError::OutOfBounds { row: mv.row, col: mv.col });
        }
        if !self.cell(mv).is_empty() {
            return Err(BoardError::Occupied { row: mv.row, col: mv.col });
        }

        let mut next = self.clone();
        next.cells[mv.row as usize][mv.col as usize] = Cell::Occupied(side);
        next.move_count += 1;
        next.available.remove(mv);
        debug_assert_eq!(next.move_count as usize + next.available.len(), CELL_COUNT);
        Ok(next)
    }

    /// 获取指定位置的格子，越界时视为空格
    pub fn cell(&self, mv: Move) -> Cell {
        if mv.is_valid() {
            self.cells[mv.row as usize][mv.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// 全部格子（行优先）
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// 已落子数
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// 当前可走位置
    pub fn available_moves(&self) -> &MoveSet {
        &self.available
    }

    /// 判定对局结果：连线优先于和棋
    pub fn terminal_result(&self) -> GameResult {
        if let Some(line) = self.winning_line() {
            let (row, col) = line[0];
            if let Cell::Occupied(side) = self.cells[row as usize][col as usize] {
                return GameResult::Win(side);
            }
        }

        if self.available.is_empty() {
            GameResult::Draw
        } else {
            GameResult::InProgress
        }
    }

    /// 是否已终局
    pub fn is_terminal(&self) -> bool {
        self.terminal_result().is_over()
    }

    /// 已连成的一条线（如有）
    pub fn winning_line(&self) -> Option<[(u8, u8); 3]> {
        LINES.iter().copied().find(|line| {
            let [a, b, c] = (*line).map(|(row, col)| self.cells[row as usize][col as usize]);
            !a.is_empty() && a == b && b == c
        })
    }

    /// 剩余可落子数
    pub fn remaining_moves(&self) -> u8 {
        MAX_MOVES - self.move_count
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardState {
    /// 控制台显示：行号、列号从 1 开始
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "    1   2   3")?;
        writeln!(f, "  -------------")?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "{} |", row + 1)?;
            for cell in line {
                let symbol = match cell {
                    Cell::Empty => ' ',
                    Cell::Occupied(side) => side.to_char(),
                };
                write!(f, " {} |", symbol)?;
            }
            writeln!(f)?;
            writeln!(f, "  -------------")?;
        }
        Ok(())
    }
}

impl From<BoardState> for String {
    fn from(state: BoardState) -> Self {
        state.to_notation()
    }
}

impl TryFrom<String> for BoardState {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

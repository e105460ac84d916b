//! 棋盘记号解析和生成
//!
//! 记号格式：三行以 `/` 分隔，每行三个字符，`X`、`O` 表示棋子，`.` 表示空格。
//!
//! 示例：`XX./O../...`

use std::str::FromStr;

use crate::board::BoardState;
use crate::constants::BOARD_SIZE;
use crate::error::BoardError;
use crate::piece::Cell;

/// 空棋盘记号
pub const EMPTY_BOARD: &str = ".../.../...";

impl BoardState {
    /// 转换为紧凑记号
    pub fn to_notation(&self) -> String {
        self.cells()
            .iter()
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for BoardState {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row_idx, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(BoardError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        chars.len(),
                        BOARD_SIZE
                    ),
                });
            }

            for (col_idx, c) in chars.into_iter().enumerate() {
                cells[row_idx][col_idx] = Cell::from_char(c).ok_or_else(|| {
                    BoardError::InvalidNotation {
                        reason: format!("Invalid cell character: {}", c),
                    }
                })?;
            }
        }

        Ok(BoardState::from_cells(cells))
    }
}

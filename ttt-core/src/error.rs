//! 错误类型定义

use thiserror::Error;

/// 棋盘规则错误
///
/// `OutOfBounds` 与 `Occupied` 都属于非法走法，调用方可以通过
/// [`BoardError::is_invalid_move`] 统一判断。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 坐标超出 3x3 棋盘
    #[error("Invalid move: ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// 目标格子已有棋子
    #[error("Invalid move: ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    /// 无效的棋盘记号
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

impl BoardError {
    /// 是否为非法走法（越界或已占用）
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, BoardError::OutOfBounds { .. } | BoardError::Occupied { .. })
    }
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, BoardError>;

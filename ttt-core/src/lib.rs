//! 井字棋共享规则库
//!
//! 包含:
//! - 阵营、格子、走法等核心数据结构
//! - 不可变棋盘快照与增量维护的可走集合
//! - 终局判定
//! - 棋盘记号（解析与生成）

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod piece;

pub use board::{BoardState, GameResult};
pub use constants::*;
pub use error::{BoardError, Result};
pub use moves::{Move, MoveSet, MoveSetIter};
pub use notation::EMPTY_BOARD;
pub use piece::{Cell, Side};

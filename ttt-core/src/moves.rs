//! 走法与可走集合

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 走法：落子位置 (row, col)
///
/// 坐标可能越界（例如来自用户输入），由 `BoardState::apply_move` 负责拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Move {
    /// 创建新走法（不检查边界）
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 创建新走法，越界时返回 None
    pub fn checked(row: u8, col: u8) -> Option<Self> {
        let mv = Self::new(row, col);
        mv.is_valid().then_some(mv)
    }

    /// 检查走法是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为行优先索引 (0-8)，调用方保证坐标合法
    pub(crate) fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从行优先索引创建
    pub(crate) fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 可走位置集合
///
/// 以 9 位掩码保存，增删查均为 O(1)。迭代顺序固定为行优先
/// (0,0), (0,1) ... (2,2)，保证搜索结果可复现。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveSet {
    bits: u16,
}

impl MoveSet {
    const FULL: u16 = (1u16 << CELL_COUNT as u32) - 1;

    /// 空集合
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// 包含全部 9 个位置的集合
    pub const fn full() -> Self {
        Self { bits: Self::FULL }
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// 是否包含指定走法（越界走法永远不在集合中）
    pub fn contains(&self, mv: Move) -> bool {
        mv.is_valid() && self.bits & (1 << mv.to_index()) != 0
    }

    /// 加入走法，越界走法被忽略
    pub fn insert(&mut self, mv: Move) {
        if mv.is_valid() {
            self.bits |= 1 << mv.to_index();
        }
    }

    /// 移除走法，返回移除前是否存在
    pub fn remove(&mut self, mv: Move) -> bool {
        let present = self.contains(mv);
        if present {
            self.bits &= !(1 << mv.to_index());
        }
        present
    }

    /// 第一个走法（行优先）
    pub fn first(&self) -> Option<Move> {
        self.iter().next()
    }

    /// 按行优先顺序迭代
    pub fn iter(&self) -> MoveSetIter {
        MoveSetIter { bits: self.bits }
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = MoveSet::empty();
        for mv in iter {
            set.insert(mv);
        }
        set
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = MoveSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &MoveSet {
    type Item = Move;
    type IntoIter = MoveSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`MoveSet`] 的迭代器
#[derive(Debug, Clone)]
pub struct MoveSetIter {
    bits: u16,
}

impl Iterator for MoveSetIter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // 清除最低位
        self.bits &= self.bits - 1;
        Some(Move::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MoveSetIter {}

//! Negamax + Alpha-Beta 搜索
//!
//! 分数始终从当前走子方的视角给出，父节点对子节点取反。
//! 搜索被取消时返回 `None`，调用方必须整体丢弃该深度的结果。

use serde::{Deserialize, Serialize};
use ttt_core::{BoardState, Move, Side};

use crate::cancel::{Deadline, StopFlag};
use crate::evaluate::Evaluator;
use crate::minimax::minimax;
use crate::search::SearchStrategy;

/// 搜索窗口的边界，大于任何可能的分数
pub const SCORE_INFINITY: i32 = 1_000;

/// 根节点的一个候选走法及其分数（搜索方视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub mv: Move,
    pub score: i32,
}

/// 单次搜索的上下文
///
/// 记录节点数、是否在非终局处截断，以及取消信号。
#[derive(Debug)]
pub struct SearchContext {
    stop: StopFlag,
    deadline: Deadline,
    nodes: u64,
    truncated: bool,
}

impl SearchContext {
    pub fn new(stop: StopFlag, deadline: Deadline) -> Self {
        Self {
            stop,
            deadline,
            nodes: 0,
            truncated: false,
        }
    }

    /// 进入一个节点：计数，并在需要停止时返回 `None`
    pub(crate) fn visit(&mut self) -> Option<()> {
        self.nodes += 1;
        if self.should_stop() {
            None
        } else {
            Some(())
        }
    }

    /// 停止标志已升起或已到截止时间
    pub fn should_stop(&self) -> bool {
        self.stop.is_stopped() || self.deadline.is_expired()
    }

    /// 标记本深度在非终局处截断
    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    /// 开始新一轮深度
    pub fn begin_depth(&mut self) {
        self.truncated = false;
    }

    /// 本深度是否有分支因深度限制被截断（为 false 时博弈树已完全求解）
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// 累计搜索的节点数
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }
}

/// Negamax 搜索，返回 `side` 视角的分数
pub fn negamax(
    board: &BoardState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    side: Side,
    ctx: &mut SearchContext,
) -> Option<i32> {
    ctx.visit()?;

    if let Some(score) = Evaluator::terminal_score(board.terminal_result(), board.move_count(), side) {
        return Some(score);
    }

    // 到达深度限制，返回静态评估
    if depth == 0 {
        ctx.mark_truncated();
        return Some(Evaluator::score(board, side));
    }

    let mut best = -SCORE_INFINITY;
    for mv in board.available_moves() {
        // 可走集合中的位置必为空
        let Ok(child) = board.apply_move(mv, side) else {
            continue;
        };

        let score = -negamax(&child, depth - 1, -beta, -alpha, side.opponent(), ctx)?;

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break; // Beta 剪枝
        }
    }

    Some(best)
}

/// 根节点搜索
///
/// 每个根走法都用完整窗口评估，得到精确分数。`depth` 包含根走法这一层。
pub fn search_root(
    board: &BoardState,
    side: Side,
    depth: u8,
    strategy: SearchStrategy,
    ctx: &mut SearchContext,
) -> Option<Vec<SearchOutcome>> {
    ctx.visit()?;

    let child_depth = depth.saturating_sub(1);
    let mut outcomes = Vec::with_capacity(board.available_moves().len());

    for mv in board.available_moves() {
        let Ok(child) = board.apply_move(mv, side) else {
            continue;
        };

        let score = match strategy {
            SearchStrategy::Negamax => -negamax(
                &child,
                child_depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                side.opponent(),
                ctx,
            )?,
            SearchStrategy::Minimax => minimax(
                &child,
                child_depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                side.opponent(),
                side,
                ctx,
            )?,
        };

        outcomes.push(SearchOutcome { mv, score });
    }

    Some(outcomes)
}

/// 选出分数严格最高的走法，同分时保留迭代顺序中的第一个
pub fn best_outcome(outcomes: &[SearchOutcome]) -> Option<SearchOutcome> {
    outcomes.iter().copied().fold(None, |best, outcome| match best {
        Some(current) if current.score >= outcome.score => Some(current),
        _ => Some(outcome),
    })
}

//! 经典 Minimax + Alpha-Beta
//!
//! 分数固定从 `maximizer` 视角给出，按走子方分为取大、取小两支。
//! 与 negamax 使用同一套计分，根节点分数完全一致。

use ttt_core::{BoardState, Side};

use crate::evaluate::Evaluator;
use crate::negamax::{SearchContext, SCORE_INFINITY};

/// Minimax 搜索，返回 `maximizer` 视角的分数；被取消时返回 `None`
pub fn minimax(
    board: &BoardState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    side: Side,
    maximizer: Side,
    ctx: &mut SearchContext,
) -> Option<i32> {
    ctx.visit()?;

    if let Some(score) =
        Evaluator::terminal_score(board.terminal_result(), board.move_count(), maximizer)
    {
        return Some(score);
    }

    if depth == 0 {
        ctx.mark_truncated();
        return Some(Evaluator::score(board, maximizer));
    }

    if side == maximizer {
        let mut best = -SCORE_INFINITY;
        for mv in board.available_moves() {
            let Ok(child) = board.apply_move(mv, side) else {
                continue;
            };
            let score = minimax(&child, depth - 1, alpha, beta, side.opponent(), maximizer, ctx)?;
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        Some(best)
    } else {
        let mut best = SCORE_INFINITY;
        for mv in board.available_moves() {
            let Ok(child) = board.apply_move(mv, side) else {
                continue;
            };
            let score = minimax(&child, depth - 1, alpha, beta, side.opponent(), maximizer, ctx)?;
            best = best.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                break;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negamax::tests::{exhaustive, reachable_states, unbounded};
    use crate::negamax::search_root;
    use crate::search::SearchStrategy;

    #[test]
    fn test_minimizer_view_is_negated() {
        let state: BoardState = "XO./.X./...".parse().unwrap();
        let mut ctx = unbounded();
        // 轮到 O，从 X 视角评估
        let score = minimax(&state, 5, -SCORE_INFINITY, SCORE_INFINITY, Side::O, Side::X, &mut ctx);
        assert_eq!(score, Some(-exhaustive(&state, 5, Side::O)));
    }

    #[test]
    fn test_matches_negamax_at_root() {
        for (state, side) in reachable_states().iter().step_by(17) {
            if state.is_terminal() {
                continue;
            }
            for depth in 1..=state.remaining_moves() {
                let negamax = search_root(state, *side, depth, SearchStrategy::Negamax, &mut unbounded());
                let minimax = search_root(state, *side, depth, SearchStrategy::Minimax, &mut unbounded());
                assert_eq!(negamax, minimax, "board {} depth {}", state.to_notation(), depth);
            }
        }
    }

    #[test]
    fn test_empty_board_root_scores() {
        let outcomes =
            search_root(&BoardState::new(), Side::X, 9, SearchStrategy::Minimax, &mut unbounded()).unwrap();
        assert_eq!(outcomes.len(), 9);
        assert!(outcomes.iter().all(|o| o.score == 0), "every opening move draws with best play");
    }
}

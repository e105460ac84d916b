//! 局面评估函数

use ttt_core::{BoardState, Cell, GameResult, Move, Side, CENTER, CORNERS, MAX_MOVES};

/// 终局分数基准：胜 = WIN_BASE - 步数，负 = -WIN_BASE + 步数
pub const WIN_BASE: i32 = 100;

/// 角的权重
pub const CORNER_WEIGHT: i32 = 2;

/// 中心的权重
pub const CENTER_WEIGHT: i32 = 10;

/// 启发式分数绝对值上限（四角 + 中心全部归一方）
pub const HEURISTIC_BOUND: i32 = CORNER_WEIGHT * CORNERS.len() as i32 + CENTER_WEIGHT;

/// 终局分数绝对值下限（最慢的胜利）
pub const MIN_TERMINAL_SCORE: i32 = WIN_BASE - MAX_MOVES as i32;

// 启发式分数必须严格落在终局分数之内
const _: () = assert!(HEURISTIC_BOUND < MIN_TERMINAL_SCORE);

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 静态评估（`side` 视角，正值对 `side` 有利）
    ///
    /// 只在搜索到达深度限制且未终局时使用：角 ±2，中心 ±10，其余为 0。
    pub fn score(board: &BoardState, side: Side) -> i32 {
        let corners: i32 = CORNERS
            .iter()
            .map(|&(row, col)| Self::ownership(board.cell(Move::new(row, col)), side) * CORNER_WEIGHT)
            .sum();

        let (row, col) = CENTER;
        let center = Self::ownership(board.cell(Move::new(row, col)), side) * CENTER_WEIGHT;

        corners + center
    }

    /// 终局分数（`side` 视角）
    ///
    /// 用步数修正，偏好更快的胜利和更慢的失败；未终局返回 None。
    pub fn terminal_score(result: GameResult, move_count: u8, side: Side) -> Option<i32> {
        match result {
            GameResult::InProgress => None,
            GameResult::Draw => Some(0),
            GameResult::Win(winner) if winner == side => Some(WIN_BASE - move_count as i32),
            GameResult::Win(_) => Some(-WIN_BASE + move_count as i32),
        }
    }

    /// 分数是否代表已确定的胜负
    pub fn is_decisive(score: i32) -> bool {
        score.abs() >= MIN_TERMINAL_SCORE
    }

    /// 格子归属：己方 1，对方 -1，空 0
    fn ownership(cell: Cell, side: Side) -> i32 {
        match cell {
            Cell::Empty => 0,
            Cell::Occupied(owner) if owner == side => 1,
            Cell::Occupied(_) => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> BoardState {
        notation.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_balanced() {
        let state = BoardState::new();
        assert_eq!(Evaluator::score(&state, Side::X), 0);
        assert_eq!(Evaluator::score(&state, Side::O), 0);
    }

    #[test]
    fn test_center_and_corners() {
        // X 占中心和一个角，O 占一个角和一条边
        let state = board("X.O/.X./.O.");
        assert_eq!(Evaluator::score(&state, Side::X), 2 - 2 + 10);
        assert_eq!(Evaluator::score(&state, Side::O), -10);
    }

    #[test]
    fn test_edges_are_worth_nothing() {
        let state = board(".X./O.X/.O.");
        assert_eq!(Evaluator::score(&state, Side::X), 0);
    }

    #[test]
    fn test_symmetry() {
        let state = board("XO./.X./O..");
        assert_eq!(Evaluator::score(&state, Side::X), -Evaluator::score(&state, Side::O));
    }

    #[test]
    fn test_heuristic_bound() {
        let state = board("X.X/.X./X.X");
        assert_eq!(Evaluator::score(&state, Side::X), HEURISTIC_BOUND);
        assert_eq!(Evaluator::score(&state, Side::O), -HEURISTIC_BOUND);
        assert!(HEURISTIC_BOUND < WIN_BASE - 9);
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(Evaluator::terminal_score(GameResult::InProgress, 4, Side::X), None);
        assert_eq!(Evaluator::terminal_score(GameResult::Draw, 9, Side::X), Some(0));
        assert_eq!(Evaluator::terminal_score(GameResult::Win(Side::X), 5, Side::X), Some(95));
        assert_eq!(Evaluator::terminal_score(GameResult::Win(Side::X), 5, Side::O), Some(-95));
        assert_eq!(Evaluator::terminal_score(GameResult::Win(Side::O), 9, Side::O), Some(91));
    }

    #[test]
    fn test_faster_win_scores_higher() {
        let fast = Evaluator::terminal_score(GameResult::Win(Side::X), 5, Side::X).unwrap();
        let slow = Evaluator::terminal_score(GameResult::Win(Side::X), 7, Side::X).unwrap();
        assert!(fast > slow);
        assert!(Evaluator::is_decisive(slow));
        assert!(!Evaluator::is_decisive(HEURISTIC_BOUND));
    }
}

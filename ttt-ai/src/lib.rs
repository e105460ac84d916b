//! 井字棋 AI 引擎
//!
//! 包含:
//! - 局面评估函数
//! - Negamax + Alpha-Beta 搜索
//! - 经典 Minimax（备选策略）
//! - 迭代加深与时间预算
//! - 协作式取消

mod cancel;
mod evaluate;
mod minimax;
mod negamax;
mod search;

pub use cancel::{Deadline, StopFlag};
pub use evaluate::{Evaluator, CENTER_WEIGHT, CORNER_WEIGHT, HEURISTIC_BOUND, WIN_BASE};
pub use minimax::minimax;
pub use negamax::{best_outcome, negamax, search_root, SearchContext, SearchOutcome, SCORE_INFINITY};
pub use search::{AiConfig, AiEngine, EngineError, SearchResult, SearchStrategy};

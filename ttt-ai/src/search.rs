//! 搜索引擎
//!
//! 迭代加深：从深度 1 开始逐层调用根搜索，只采用完整跑完的深度的结果。
//! 时间到或停止标志升起时，正在进行的深度整体作废。

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ttt_core::{BoardState, GameResult, Move, Side};

use crate::cancel::{Deadline, StopFlag};
use crate::negamax::{best_outcome, search_root, SearchContext, SearchOutcome};

/// 引擎错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Game is already over: {0:?}")]
    GameOver(GameResult),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),
}

/// 搜索策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    #[default]
    Negamax,
    Minimax,
}

impl SearchStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Negamax => "negamax",
            SearchStrategy::Minimax => "minimax",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "negamax" => Ok(SearchStrategy::Negamax),
            "minimax" => Ok(SearchStrategy::Minimax),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub strategy: SearchStrategy,
    /// 名义时间预算（毫秒）
    pub time_budget_ms: u64,
    pub max_depth: u8,
    /// 是否把内部预算缩放为 sqrt(名义秒数)
    pub scale_budget: bool,
}

impl AiConfig {
    /// 实际使用的搜索预算
    pub fn budget(&self) -> Duration {
        let nominal = Duration::from_millis(self.time_budget_ms);
        if self.scale_budget {
            Deadline::scaled(nominal)
        } else {
            nominal
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Negamax,
            time_budget_ms: 5000,
            max_depth: 9,
            scale_budget: true,
        }
    }
}

/// 一次搜索的结果
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// 最佳走法的分数；没有完成任何深度时为 None
    pub score: Option<i32>,
    /// 最后完成的深度
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
    /// 最后完成深度中每个根走法的分数
    pub outcomes: Vec<SearchOutcome>,
    /// 博弈树已完全求解
    pub solved: bool,
    /// 因停止标志或时间到而提前结束
    pub cancelled: bool,
    /// 未完成任何深度，使用第一个可走位置
    pub fallback: bool,
}

/// AI 引擎
///
/// 只保存配置，每次搜索的状态都在 [`SearchContext`] 中。
#[derive(Debug, Clone, Default)]
pub struct AiEngine {
    config: AiConfig,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 搜索最佳走法
    pub fn find_move(&self, board: &BoardState, side: Side) -> Result<Move, EngineError> {
        self.search(board, side).map(|result| result.best_move)
    }

    /// 搜索并返回完整统计
    pub fn search(&self, board: &BoardState, side: Side) -> Result<SearchResult, EngineError> {
        self.search_with_stop(board, side, &StopFlag::new())
    }

    /// 搜索，同时响应外部升起的停止标志
    pub fn search_with_stop(
        &self,
        board: &BoardState,
        side: Side,
        stop: &StopFlag,
    ) -> Result<SearchResult, EngineError> {
        let result = board.terminal_result();
        if result.is_over() {
            return Err(EngineError::GameOver(result));
        }

        let mut ctx = SearchContext::new(stop.clone(), Deadline::after(self.config.budget()));
        let depth_limit = self.config.max_depth.min(board.remaining_moves());

        let mut completed: Option<(u8, Vec<SearchOutcome>)> = None;
        let mut solved = false;
        let mut cancelled = false;

        for depth in 1..=depth_limit {
            if ctx.should_stop() {
                cancelled = true;
                break;
            }

            ctx.begin_depth();
            let Some(outcomes) = search_root(board, side, depth, self.config.strategy, &mut ctx) else {
                // 未完成的深度整体丢弃
                debug!("深度 {} 搜索被中断，丢弃部分结果", depth);
                cancelled = true;
                break;
            };

            if let Some(best) = best_outcome(&outcomes) {
                debug!(
                    depth,
                    score = best.score,
                    nodes = ctx.nodes(),
                    elapsed_ms = ctx.deadline().elapsed().as_millis() as u64,
                    best_move = %best.mv,
                    "深度搜索完成"
                );
            }

            solved = !ctx.truncated();
            completed = Some((depth, outcomes));
            if solved {
                break;
            }
        }

        let elapsed = ctx.deadline().elapsed();
        let best = completed
            .as_ref()
            .and_then(|(_, outcomes)| best_outcome(outcomes));

        let search_result = match (best, completed) {
            (Some(best), Some((depth, outcomes))) => SearchResult {
                best_move: best.mv,
                score: Some(best.score),
                depth,
                nodes: ctx.nodes(),
                elapsed,
                outcomes,
                solved,
                cancelled,
                fallback: false,
            },
            _ => {
                // 非终局必有可走位置
                let first = board
                    .available_moves()
                    .first()
                    .ok_or(EngineError::GameOver(result))?;
                warn!("没有完成任何深度的搜索，使用第一个可走位置 {}", first);
                SearchResult {
                    best_move: first,
                    score: None,
                    depth: 0,
                    nodes: ctx.nodes(),
                    elapsed,
                    outcomes: Vec::new(),
                    solved: false,
                    cancelled,
                    fallback: true,
                }
            }
        };

        info!(
            side = %side,
            best_move = %search_result.best_move,
            depth = search_result.depth,
            nodes = search_result.nodes,
            "AI 选择走法"
        );

        Ok(search_result)
    }
}

//! 玩家
//!
//! 人类玩家从控制台读取坐标；电脑玩家在阻塞线程池中搜索，
//! 超过硬超时后通知搜索停止并取用已完成深度的结果。

use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::warn;
use ttt_ai::{AiEngine, StopFlag};
use ttt_core::{BoardState, Move, Side};

use crate::console::{Console, INPUT_ERROR_MESSAGE};
use crate::settings::GameSettings;

const ROW_PROMPT: &str = "Please type the row of the next move: ";
const COLUMN_PROMPT: &str = "Please type the column of the next move: ";

/// 玩家
pub enum Player {
    Human { side: Side },
    Computer(ComputerPlayer),
}

impl Player {
    pub fn human(side: Side) -> Self {
        Player::Human { side }
    }

    pub fn computer(side: Side, settings: &GameSettings) -> Result<Self> {
        Ok(Player::Computer(ComputerPlayer::new(side, settings)?))
    }

    pub fn side(&self) -> Side {
        match self {
            Player::Human { side } => *side,
            Player::Computer(computer) => computer.side,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human { .. })
    }

    /// 显示名称
    pub fn kind(&self) -> &'static str {
        match self {
            Player::Human { .. } => "Human",
            Player::Computer(_) => "Computer",
        }
    }

    /// 给出下一步走法
    ///
    /// 人类玩家的走法可能不合法，由调用方负责校验和重新询问。
    pub async fn choose_move(&self, board: &BoardState, console: &mut Console) -> Result<Move> {
        match self {
            Player::Human { .. } => read_move(console),
            Player::Computer(computer) => computer.choose_move(board).await,
        }
    }
}

/// 读取 1 起始的行号和列号
fn read_move(console: &mut Console) -> Result<Move> {
    loop {
        console.say("")?;
        console.prompt(ROW_PROMPT)?;
        let row = console.read_int(Some(ROW_PROMPT))?;
        console.prompt(COLUMN_PROMPT)?;
        let col = console.read_int(Some(COLUMN_PROMPT))?;

        match (to_index(row), to_index(col)) {
            (Some(row), Some(col)) => return Ok(Move::new(row, col)),
            _ => console.say(INPUT_ERROR_MESSAGE)?,
        }
    }
}

fn to_index(value: i64) -> Option<u8> {
    u8::try_from(value.checked_sub(1)?).ok()
}

/// 电脑玩家
pub struct ComputerPlayer {
    side: Side,
    engine: AiEngine,
    hard_timeout: Duration,
}

impl ComputerPlayer {
    pub fn new(side: Side, settings: &GameSettings) -> Result<Self> {
        Ok(Self {
            side,
            engine: AiEngine::new(settings.ai_config()?),
            hard_timeout: settings.hard_timeout(),
        })
    }

    /// 在阻塞线程池中搜索，硬超时到期后升起停止标志并等待搜索收尾
    pub async fn choose_move(&self, board: &BoardState) -> Result<Move> {
        let stop = StopFlag::new();
        let engine = self.engine.clone();
        let state = board.clone();
        let side = self.side;
        let task_stop = stop.clone();

        let mut handle =
            tokio::task::spawn_blocking(move || engine.search_with_stop(&state, side, &task_stop));

        let joined = match tokio::time::timeout(self.hard_timeout, &mut handle).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!("AI 思考超过 {:?}，通知搜索停止", self.hard_timeout);
                stop.stop();
                handle.await
            }
        };

        match joined {
            Ok(result) => Ok(result?.best_move),
            Err(e) => {
                warn!("AI 搜索任务失败: {}，使用第一个可走位置", e);
                board
                    .available_moves()
                    .first()
                    .ok_or_else(|| anyhow!("没有可走位置"))
            }
        }
    }
}

//! 对局管理
//!
//! 主菜单、对局类型选择和回合循环。

use anyhow::Result;
use rand::Rng;
use tracing::info;
use ttt_core::{BoardState, GameResult, Side};

use crate::console::{Console, INPUT_ERROR_MESSAGE};
use crate::player::Player;
use crate::settings::GameSettings;

const NEW_GAME_OPTION: i64 = 1;
const EXIT_OPTION: i64 = 2;

const HUMAN_VS_HUMAN_OPTION: i64 = 1;
const COMPUTER_VS_HUMAN_OPTION: i64 = 2;
const COMPUTER_VS_COMPUTER_OPTION: i64 = 3;

/// 对局管理器
pub struct GameManager {
    settings: GameSettings,
    console: Console,
}

impl GameManager {
    /// 创建管理器，设置中的搜索策略必须有效
    pub fn new(settings: GameSettings, console: Console) -> Result<Self> {
        settings.ai_config()?;
        info!("对局管理器已创建");
        Ok(Self { settings, console })
    }

    /// 运行主菜单直到用户选择退出
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let exit = self.start_screen().await?;
            self.console.say("")?;
            if exit {
                return Ok(());
            }
        }
    }

    /// 主菜单，返回是否退出
    async fn start_screen(&mut self) -> Result<bool> {
        self.console.say("Select an option:")?;
        self.console.say(format!("{}) New Game", NEW_GAME_OPTION))?;
        self.console.say(format!("{}) Exit", EXIT_OPTION))?;

        match self.console.read_int(None)? {
            NEW_GAME_OPTION => {
                self.new_game_screen().await?;
                Ok(false)
            }
            EXIT_OPTION => Ok(true),
            _ => {
                self.console.say(INPUT_ERROR_MESSAGE)?;
                Ok(false)
            }
        }
    }

    /// 选择对局类型
    async fn new_game_screen(&mut self) -> Result<()> {
        self.console.say("")?;
        self.console.say("What type of game would you like to play/watch?")?;
        self.console.say(format!("{}) Human vs. Human", HUMAN_VS_HUMAN_OPTION))?;
        self.console.say(format!("{}) Computer vs. Human", COMPUTER_VS_HUMAN_OPTION))?;
        self.console.say(format!("{}) Computer vs. Computer", COMPUTER_VS_COMPUTER_OPTION))?;

        let players = match self.console.read_int(None)? {
            HUMAN_VS_HUMAN_OPTION => [Player::human(Side::X), Player::human(Side::O)],
            COMPUTER_VS_HUMAN_OPTION => [
                Player::computer(Side::X, &self.settings)?,
                Player::human(Side::O),
            ],
            COMPUTER_VS_COMPUTER_OPTION => [
                Player::computer(Side::X, &self.settings)?,
                Player::computer(Side::O, &self.settings)?,
            ],
            _ => {
                self.console.say(INPUT_ERROR_MESSAGE)?;
                return Ok(());
            }
        };

        // 随机决定先手
        let first = rand::thread_rng().gen_range(0..players.len());
        self.play_game(&players, first).await?;
        Ok(())
    }

    /// 进行一局，`first` 为先手玩家的下标
    pub async fn play_game(&mut self, players: &[Player; 2], first: usize) -> Result<GameResult> {
        info!(
            "新对局: {} {} vs {} {}，{} 先手",
            players[0].kind(),
            players[0].side(),
            players[1].kind(),
            players[1].side(),
            players[first].side()
        );

        let mut board = BoardState::new();
        self.console.say(&board)?;

        let mut turn = first;
        let result = loop {
            let player = &players[turn];
            board = self.take_turn(player, &board).await?;
            self.console.say(&board)?;

            let result = board.terminal_result();
            if result.is_over() {
                break result;
            }
            turn = (turn + 1) % players.len();
        };

        self.console.say("")?;
        match result {
            GameResult::Win(side) => self.console.say(format!("Player {} wins!", side))?,
            _ => self.console.say("It is a tie!")?,
        }
        self.console.say("")?;

        info!("对局结束: {:?}", result);
        Ok(result)
    }

    /// 一个回合：直到给出合法走法为止
    async fn take_turn(&mut self, player: &Player, board: &BoardState) -> Result<BoardState> {
        loop {
            self.console
                .say(format!("{} Player {}'s Turn.", player.kind(), player.side()))?;

            let mv = player.choose_move(board, &mut self.console).await?;
            match board.apply_move(mv, player.side()) {
                Ok(next) => {
                    info!("{} 落子 {}", player.side(), mv);
                    return Ok(next);
                }
                Err(e) if player.is_human() => self.console.say(e)?,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::scripted;

    fn quick_settings() -> GameSettings {
        GameSettings {
            time_budget_ms: 600_000,
            hard_timeout_ms: 600_000,
            scale_budget: false,
            ..GameSettings::default()
        }
    }

    #[tokio::test]
    async fn test_human_vs_human_row_win() {
        // X: (1,1) (1,2) (1,3)，O: (2,1) (2,2)
        let console = scripted("1 1\n2 1\n1 2\n2 2\n1 3\n");
        let mut manager = GameManager::new(quick_settings(), console).unwrap();

        let players = [Player::human(Side::X), Player::human(Side::O)];
        let result = manager.play_game(&players, 0).await.unwrap();
        assert_eq!(result, GameResult::Win(Side::X));
    }

    #[tokio::test]
    async fn test_occupied_cell_is_reprompted() {
        // O 先手；X 试图落在已占的 (1,1) 后改走 (3,3)
        let console = scripted("1 1\n1 1\n3 3\n1 2\n2 2\n1 3\n");
        let mut manager = GameManager::new(quick_settings(), console).unwrap();

        let players = [Player::human(Side::X), Player::human(Side::O)];
        let result = manager.play_game(&players, 1).await.unwrap();
        assert_eq!(result, GameResult::Win(Side::O));
    }

    #[tokio::test]
    async fn test_computer_vs_computer_draws() {
        let mut manager = GameManager::new(quick_settings(), scripted("")).unwrap();
        let settings = quick_settings();
        let players = [
            Player::computer(Side::X, &settings).unwrap(),
            Player::computer(Side::O, &settings).unwrap(),
        ];

        let result = manager.play_game(&players, 1).await.unwrap();
        assert_eq!(result, GameResult::Draw);
    }

    #[tokio::test]
    async fn test_menu_exit() {
        let mut manager = GameManager::new(quick_settings(), scripted("7\n2\n")).unwrap();
        manager.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_menu_new_game_then_exit() {
        // 人人对局：无论谁先手，输入序列都以连线结束
        let input = "1\n1\n1 1\n2 1\n1 2\n2 2\n1 3\n2\n";
        let mut manager = GameManager::new(quick_settings(), scripted(input)).unwrap();
        manager.run().await.unwrap();
    }

    #[test]
    fn test_invalid_strategy_rejected_at_startup() {
        let settings = GameSettings {
            strategy: "alphazero".to_string(),
            ..GameSettings::default()
        };
        assert!(GameManager::new(settings, scripted("")).is_err());
    }
}

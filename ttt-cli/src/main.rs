mod console;
mod game;
mod player;
mod settings;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::console::Console;
use crate::game::GameManager;
use crate::settings::GameSettings;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志（输出到 stderr，避免与棋盘混在一起）
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ttt_cli=info".parse()?))
        .init();

    info!("井字棋启动中...");

    let settings = GameSettings::load()?;
    let mut manager = GameManager::new(settings, Console::stdio())?;
    manager.run().await
}

use anyhow::Result;
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Grid snake arcade game for the terminal")]
struct Cli {
    /// Playfield width in pixels (one cell is 20 pixels)
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Playfield height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Simulation rate in ticks per second
    #[arg(long, default_value_t = 10)]
    tick_rate: u64,

    /// End the game on wall or self collision instead of freezing the snake
    #[arg(long)]
    end_on_collision: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        tick_rate: cli.tick_rate,
        end_on_collision: cli.end_on_collision,
        ..Default::default()
    };

    // Fail on a bad playfield before the terminal is taken over
    config.validate()?;

    let mut app = App::new(config)?;
    app.run().await
}

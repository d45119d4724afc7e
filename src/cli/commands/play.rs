//! Play command - Interactive games at the terminal

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section},
    config::AgentConfig,
    game::{Game, PlayerSlot},
    player::{PlayerKind, PlayerSpec},
};

#[derive(Parser, Debug)]
#[command(about = "Play games at the terminal")]
pub struct PlayArgs {
    /// Who plays X (`human` or `computer`)
    #[arg(long, short = 'x', default_value = "human")]
    pub player_x: PlayerKind,

    /// Who plays O (`human` or `computer`)
    #[arg(long, short = 'o', default_value = "computer")]
    pub player_o: PlayerKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Exploration rate of computer players
    #[arg(long, default_value_t = 0.0)]
    pub epsilon: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let spec = |kind: PlayerKind, offset: u64| match kind {
        PlayerKind::Human => PlayerSpec::human(),
        PlayerKind::Computer => {
            let mut config = AgentConfig::new().with_epsilon(args.epsilon);
            if let Some(seed) = args.seed {
                config = config.with_seed(seed.wrapping_add(offset));
            }
            PlayerSpec::Agent(config)
        }
    };
    let player_x = spec(args.player_x, 0);
    let player_o = spec(args.player_o, 1);

    let mut game = Game::new(player_x, player_o)?;
    for _ in 0..args.games {
        game.play()?;
        game.reset();
    }

    print_section("Final Score");
    for slot in [PlayerSlot::PlayerX, PlayerSlot::PlayerO] {
        let points: f64 = game.scores(slot).iter().sum();
        print_kv(&game.player(slot).to_string(), &points.to_string());
    }
    Ok(())
}

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use fogfleet::{
    init_logging, place_fleet_randomly, render, ui, AiPlayer, Battle, CliPlayer, GameStatus,
    Grid, Player, Seat, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the automated opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet randomly instead of typing placements")]
        auto_place: bool,
        #[arg(long, help = "Skip the title, briefing and instructions")]
        no_intro: bool,
    },
    /// Watch two automated opponents play each other.
    Duel {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn ask(question: &str) -> anyhow::Result<bool> {
    print!("{} (y/n)? ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_lowercase().starts_with('y'))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            auto_place,
            no_intro,
        } => {
            let mut rng = make_rng(seed);
            if !no_intro {
                println!("welcome to...{}", ui::TITLE);
                println!("{}\n", ui::INTRO);
                if ask("Do you need instructions")? {
                    println!("{}\n", ui::INSTRUCTIONS);
                }
            }
            loop {
                play(&mut rng, auto_place)?;
                if !ask("Do you want to play again")? {
                    break;
                }
            }
        }
        Commands::Duel { seed } => {
            let mut rng = make_rng(seed);
            let mut battle = Battle::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()));
            battle.place_fleets(&mut rng)?;
            let winner = battle.run(&mut rng, 2 * BOARD_SIZE * BOARD_SIZE)?;
            for seat in [Seat::First, Seat::Second] {
                println!("[{:?} fleet, {} shots fired]", seat, battle.shots(seat));
                println!("{}", render(battle.grid(seat), true));
            }
            println!("{:?} wins.", winner);
        }
    }
    Ok(())
}

fn play(rng: &mut SmallRng, auto_place: bool) -> anyhow::Result<()> {
    let mut human = CliPlayer::stdio();
    let mut human_grid = Grid::standard();
    if auto_place {
        place_fleet_randomly(&mut human_grid, rng)?;
    } else {
        human.place_ships(rng, &mut human_grid)?;
    }

    let mut battle = Battle::with_grids(
        Box::new(human),
        human_grid,
        Box::new(AiPlayer::new()),
        Grid::standard(),
    );
    battle.place_fleets(rng)?;

    while battle.status() == GameStatus::InProgress {
        if battle.turn() == Seat::Second {
            println!("[AI TURN]");
        }
        battle.play_turn(rng)?;
    }

    println!("[Your fleet]");
    println!("{}", render(battle.grid(Seat::First), true));
    println!("[Enemy fleet]");
    println!("{}", render(battle.grid(Seat::Second), true));
    match battle.status() {
        GameStatus::Won(Seat::First) => println!("PLAYER VICTORY!"),
        GameStatus::Won(Seat::Second) => println!("AI VICTORY!"),
        GameStatus::InProgress => {}
    }
    Ok(())
}

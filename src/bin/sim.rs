use fogfleet::{init_logging, place_fleet_randomly, Grid, ShipKind, ShotOutcome, TargetingEngine};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct GameRecord {
    seed: u64,
    shots: usize,
    sinking_order: Vec<ShipKind>,
}

/// Let the targeting engine clear one randomly placed fleet.
fn play_one(seed: u64) -> anyhow::Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::standard();
    place_fleet_randomly(&mut grid, &mut rng)?;

    let mut engine = TargetingEngine::new();
    let mut last = ShotOutcome::seed();
    let mut sinking_order = Vec::new();
    let limit = grid.width() * grid.width();
    let mut shots = 0;
    while !grid.game_over() {
        if shots >= limit {
            anyhow::bail!("seed {}: fleet still afloat after {} shots", seed, shots);
        }
        let target = engine.next_shot(grid.revealed(), &last, &mut rng)?;
        last = grid.shoot(target)?;
        shots += 1;
        if last.is_sunk() {
            sinking_order.extend(last.ship);
        }
    }
    Ok(GameRecord {
        seed,
        shots,
        sinking_order,
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <games> [seed]", args[0]);
        std::process::exit(1);
    }
    let games: u64 = args[1].parse()?;
    let base_seed: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 0,
    };

    let records = (0..games)
        .map(|g| play_one(base_seed.wrapping_add(g)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let shots: Vec<usize> = records.iter().map(|r| r.shots).collect();
    let mean = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };
    let result = json!({
        "games": records.len(),
        "mean_shots": mean,
        "min_shots": shots.iter().min(),
        "max_shots": shots.iter().max(),
        "records": records,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

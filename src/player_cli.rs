#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::{
    common::{Coord, ShotOutcome},
    grid::{Grid, RevealedGrid},
    input::{parse_fire, parse_placement},
    placement,
    player::Player,
    ui::{coord_label, incoming_message, outcome_message, render, render_view},
};

/// Human player typing commands into a terminal.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self) -> anyhow::Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow::anyhow!("input closed"));
        }
        Ok(line.trim().to_uppercase())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> anyhow::Result<()> {
        writeln!(self.output, "{}", render(grid, true))?;
        while !grid.fleet_complete() {
            writeln!(self.output, "Ships to place:")?;
            writeln!(self.output, "Code| Ship")?;
            for kind in grid.unplaced() {
                writeln!(self.output, "{}   | {} ({})", kind.code(), kind, kind.length())?;
            }
            writeln!(
                self.output,
                "Enter ship code, number, letter and orientation (H/V) separated by space"
            )?;
            writeln!(
                self.output,
                "e.g [C 5 J H] places a carrier horizontally starting at 5 J. Press enter to place the rest randomly."
            )?;
            let line = self.prompt()?;
            if line.is_empty() {
                placement::place_fleet_randomly(grid, rng)?;
            } else {
                let placed = parse_placement(&line, grid.width())
                    .map_err(anyhow::Error::from)
                    .and_then(|cmd| {
                        grid.place(cmd.kind, cmd.origin, cmd.orientation)
                            .map_err(anyhow::Error::from)
                    });
                if let Err(e) = placed {
                    writeln!(self.output, "Invalid placement: {}", e)?;
                    continue;
                }
            }
            writeln!(self.output, "{}", render(grid, true))?;
        }
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Grid,
        target: &RevealedGrid,
    ) -> anyhow::Result<Coord> {
        writeln!(self.output, "[PLAYER TURN]")?;
        writeln!(self.output, "Your fleet:\n{}", render(own, true))?;
        writeln!(self.output, "Enemy fleet:\n{}", render_view(target))?;
        loop {
            writeln!(
                self.output,
                "Enter firing coordinates (number then letter separated by space e.g 0 A)"
            )?;
            let line = self.prompt()?;
            match parse_fire(&line, target.width()) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "Invalid firing coordinates: {}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: &ShotOutcome) {
        let _ = writeln!(
            self.output,
            "You fired at {}: {}",
            coord_label(coord),
            outcome_message(outcome)
        );
    }

    fn handle_opponent_shot(&mut self, coord: Coord, outcome: &ShotOutcome) {
        let _ = writeln!(self.output, "{}", incoming_message(coord, outcome));
    }
}

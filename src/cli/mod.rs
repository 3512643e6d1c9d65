//! Command-line front end.
//!
//! Parses [`Args`], validates `n` into a [`Pile`] before any evaluation,
//! and prints one report line per método:
//!
//! ```text
//! n = 5 -> Vence (método: trampolim)
//! ```
mod args;

pub use args::*;

use crate::Error;
use crate::Method;
use crate::Outcome;
use crate::Pile;
use crate::Solver;
use clap::Parser;

/// Report line for a solved pile.
pub fn report(pile: Pile, outcome: Outcome, method: Method) -> String {
    format!("n = {} -> {} (método: {})", pile, outcome, method)
}

/// Outcomes of piles `0..k`, bracketed and comma separated.
/// Fails up front when the largest pile is past the solver's limit.
pub fn table(solver: &mut dyn Solver, k: u64) -> Result<String, Error> {
    if let Some(last) = k.checked_sub(1) {
        solver.method().guard(Pile::from(last))?;
    }
    let outcomes = (0..k)
        .map(Pile::from)
        .map(|pile| solver.solve(pile))
        .collect::<Result<Vec<Outcome>, Error>>()?;
    Ok(format!(
        "[{}]",
        outcomes
            .iter()
            .map(Outcome::to_string)
            .collect::<Vec<String>>()
            .join(", ")
    ))
}

pub struct CLI(Args);

impl From<Args> for CLI {
    fn from(args: Args) -> Self {
        Self(args)
    }
}

impl CLI {
    /// Parse process arguments, install logging, and run.
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::from(Args::parse());
        crate::log(cli.0.level());
        for line in cli.lines()? {
            println!("{}", line);
        }
        Ok(())
    }

    /// Every line the invocation prints. Fails on invalid `n` before solving.
    /// With `--todos`, a método past its limit reports its error in place.
    pub fn lines(&self) -> Result<Vec<String>, Error> {
        let pile = Pile::try_from(self.0.n.as_str())?;
        log::info!("evaluating n = {}", pile);
        match self.0.all {
            false => self.lines_for(pile, self.0.method),
            true => Ok(Method::all()
                .into_iter()
                .flat_map(|method| match self.lines_for(pile, method) {
                    Ok(lines) => lines,
                    Err(e) => vec![e.to_string()],
                })
                .collect()),
        }
    }

    /// The report line, then the table or the reason it could not be built.
    fn lines_for(&self, pile: Pile, method: Method) -> Result<Vec<String>, Error> {
        let mut solver = method.solver();
        let mut lines = vec![report(pile, solver.solve(pile)?, method)];
        if let Some(k) = self.0.table {
            lines.push(table(solver.as_mut(), k).unwrap_or_else(|e| e.to_string()));
        }
        Ok(lines)
    }
}

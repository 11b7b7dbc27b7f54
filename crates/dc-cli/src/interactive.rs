//! Prompt loop over any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::Result;
use dc_core::{DistributionFamily, Error};
use dc_viz::NormalGrid;

use crate::present::{self, BinomialInput, NormalInput, Presenter};

const BANNER: &str = "Distribution calculator. Choose 'normal' or 'binomial' ('q' to quit).";

/// Run prompts until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    presenter: &Presenter,
    grid: &NormalGrid,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    loop {
        let Some(choice) = prompt(&mut input, &mut out, "distribution> ")? else {
            break;
        };
        let choice = choice.trim();
        if choice.is_empty() {
            continue;
        }
        if matches!(choice, "q" | "quit" | "exit") {
            break;
        }
        let family = match choice.parse::<DistributionFamily>() {
            Ok(f) => f,
            Err(e) => {
                writeln!(out, "Input error: {e}")?;
                continue;
            }
        };

        let evaluated = match family {
            DistributionFamily::Normal => {
                let Some(fields) = read_normal(&mut input, &mut out)? else { break };
                present::evaluate_normal(&fields, grid)
            }
            DistributionFamily::Binomial => {
                let Some(fields) = read_binomial(&mut input, &mut out)? else { break };
                present::evaluate_binomial(&fields)
            }
        };

        match evaluated {
            Ok(result) => match presenter.present(result) {
                Ok(shown) => writeln!(out, "{}", shown.summary())?,
                Err(e) => writeln!(out, "Error: {e:#}")?,
            },
            Err(Error::Validation(msg)) => writeln!(out, "Input error: {msg}")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    out.flush()?;
    Ok(())
}

fn read_normal<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<NormalInput>> {
    let mut fields = NormalInput::default();
    for (label, slot) in [
        ("Mean (μ): ", &mut fields.mean),
        ("Standard deviation (σ): ", &mut fields.stddev),
        ("Lower limit (a): ", &mut fields.lower),
        ("Upper limit (b): ", &mut fields.upper),
    ] {
        match prompt(input, out, label)? {
            Some(text) => *slot = text,
            None => return Ok(None),
        }
    }
    Ok(Some(fields))
}

fn read_binomial<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<BinomialInput>> {
    let mut fields = BinomialInput::default();
    for (label, slot) in [
        ("Number of trials (n): ", &mut fields.trials),
        ("Probability of success (p): ", &mut fields.success_prob),
        ("Number of successes (x): ", &mut fields.target_count),
    ] {
        match prompt(input, out, label)? {
            Some(text) => *slot = text,
            None => return Ok(None),
        }
    }
    Ok(Some(fields))
}

/// `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

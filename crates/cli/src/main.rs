// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoebox dealer hands simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use rand::{SeedableRng, rngs::StdRng};

use shoebox_eval::{AceRule, CutoffScale, Shoe, ShoeConfig};

pub mod dealer;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of decks in the shoe.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..=8))]
    decks: u16,
    /// The reshuffle cutoff as a fraction of the shoe.
    #[clap(long, short, default_value_t = ShoeConfig::DEFAULT_CUTOFF)]
    cutoff: f64,
    /// Compare the cutoff with the fraction of remaining cards.
    #[clap(long)]
    fraction: bool,
    /// Count aces as 11 or 1.
    #[clap(long)]
    standard_aces: bool,
    /// Number of dealer hands to play.
    #[clap(long, short, default_value_t = 1000)]
    rounds: usize,
    /// Seed for the shoe shuffles.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn run(cli: Cli) -> Result<()> {
    let scale = if cli.fraction {
        CutoffScale::Fraction
    } else {
        CutoffScale::Literal
    };

    let rule = if cli.standard_aces {
        AceRule::Standard
    } else {
        AceRule::Literal
    };

    let config = ShoeConfig::default()
        .with_decks(cli.decks as usize)
        .with_cutoff(cli.cutoff)
        .with_scale(scale);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let shoe = Shoe::with_rng(config, rng)?;
    let summary = dealer::Dealer::new(shoe, rule).run(cli.rounds)?;
    println!("{summary}");

    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
    }
}

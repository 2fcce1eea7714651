use crate::deal::random_deal;
use crate::driver::run_auction;
use crate::evaluator::{evaluate, Scorecard};
use crate::policy::BidPolicy;
use crate::SimError;
use parbid_core::{Deal, Seat, TrickTable, Vulnerability};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// The external trick-taking-potential provider: a pure function from a
/// deal to its double-dummy table.
pub trait TrickOracle: Sync {
    fn trick_potential(&self, deal: &Deal) -> TrickTable;
}

impl<F> TrickOracle for F
where
    F: Fn(&Deal) -> TrickTable + Sync,
{
    fn trick_potential(&self, deal: &Deal) -> TrickTable {
        self(deal)
    }
}

#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub trials: usize,
    pub seed: u64,
}

/// Aggregate results of a batch of independent deals.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub trials: usize,
    pub passed_out: usize,
    /// Mean signed distance from par, per seat (N, E, S, W).
    pub mean_differential: [f64; 4],
    /// Mean fitness reduction, per seat; zero means always exactly par.
    pub mean_fitness: [f64; 4],
    /// Final contracts seen, keyed by rendering ("2HX"), with counts.
    pub contracts: BTreeMap<String, usize>,
}

/// Run independent trials in parallel. Each trial derives its own RNG from
/// the base seed and the trial index, deals a fresh board with random
/// dealer and vulnerability, drives one auction with policies built by
/// `policy_for`, and scores it against the oracle's table. Trials share
/// nothing; any policy failure aborts the whole batch, since it is a bug
/// rather than noise.
pub fn run_trials<F>(
    config: &TrialConfig,
    policy_for: &F,
    oracle: &impl TrickOracle,
) -> Result<TrialReport, SimError>
where
    F: Fn(Seat) -> Box<dyn BidPolicy> + Sync,
{
    let cards: Vec<Scorecard> = (0..config.trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let deal = random_deal(&mut rng);
            let dealer = Seat::ALL[rng.gen_range(0..4)];
            let vulnerability = Vulnerability::ALL[rng.gen_range(0..4)];
            let policies = Seat::ALL.map(|seat| policy_for(seat));
            let auction = run_auction(&deal, dealer, vulnerability, policies)?;
            let table = oracle.trick_potential(&deal);
            evaluate(&auction, vulnerability, &table)
        })
        .collect::<Result<_, _>>()?;

    let mut report = TrialReport {
        trials: cards.len(),
        passed_out: 0,
        mean_differential: [0.0; 4],
        mean_fitness: [0.0; 4],
        contracts: BTreeMap::new(),
    };
    for card in &cards {
        match &card.contract {
            Some(c) => *report.contracts.entry(c.render()).or_default() += 1,
            None => report.passed_out += 1,
        }
        for (i, s) in card.seats.iter().enumerate() {
            report.mean_differential[i] += f64::from(s.differential());
            report.mean_fitness[i] += f64::from(s.fitness());
        }
    }
    if report.trials > 0 {
        for i in 0..4 {
            report.mean_differential[i] /= report.trials as f64;
            report.mean_fitness[i] /= report.trials as f64;
        }
    }
    Ok(report)
}

use anyhow::{anyhow, Context};
use clap::Parser;
use parbid_core::{Auction, Deal, Seat, TrickTable, Vulnerability};
use parbid_sim::{
    evaluate, random_deal, run_trials, BidPolicy, BiddingTable, PointCount, TrialConfig,
    TrickOracle, UniformRandom,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Simulate bridge auctions and score each side against double-dummy par"
)]
struct Args {
    /// Play a single deal and print the hands, auction, and scorecard
    #[arg(long)]
    demo: bool,

    /// Number of deals in batch mode
    #[arg(short = 'n', long, default_value_t = 200)]
    count: usize,

    /// Random seed for reproducible runs (random if omitted, always printed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Bid with the uniform-random policy instead of the point-count one
    #[arg(long)]
    random: bool,

    /// Vulnerability for the demo deal: none, ns, ew, both (random if omitted)
    #[arg(long)]
    vulnerability: Option<String>,

    /// Dealer seat for the demo deal: N, E, S, W (random if omitted)
    #[arg(long)]
    dealer: Option<String>,

    /// Emit the batch report as JSON
    #[arg(long)]
    json: bool,
}

// ── double dummy oracle ────────────────────────────────────────────────

struct DoubleDummyOracle;

impl TrickOracle for DoubleDummyOracle {
    fn trick_potential(&self, deal: &Deal) -> TrickTable {
        parbid_dds::solve(deal).expect("double dummy solver failed")
    }
}

// ── helpers ────────────────────────────────────────────────────────────

fn policy_for(args: &Args, seed: u64) -> impl Fn(Seat) -> Box<dyn BidPolicy> + Sync {
    let random = args.random;
    move |seat: Seat| {
        if random {
            Box::new(UniformRandom::seeded(seed ^ seat.idx() as u64))
        } else {
            Box::new(PointCount)
        }
    }
}

fn render_auction(auction: &Auction) -> String {
    auction
        .calls()
        .iter()
        .map(|c| c.render())
        .collect::<Vec<_>>()
        .join(" ")
}

fn pct(n: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * n as f64 / total as f64
    }
}

// ── demo mode ──────────────────────────────────────────────────────────

fn run_demo(args: &Args, seed: u64) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let deal = random_deal(&mut rng);

    let dealer = match &args.dealer {
        Some(s) => s
            .chars()
            .next()
            .and_then(Seat::from_char)
            .ok_or_else(|| anyhow!("unknown dealer seat: {s}"))?,
        None => Seat::ALL[rng.gen_range(0..4)],
    };
    let vulnerability = match &args.vulnerability {
        Some(s) => s
            .parse()
            .map_err(|_| anyhow!("unknown vulnerability: {s}"))?,
        None => Vulnerability::ALL[rng.gen_range(0..4)],
    };

    println!("Seed: {seed}");
    println!("Dealer: {dealer} | Vulnerability: {vulnerability}");
    for seat in Seat::ALL {
        println!("  {seat}: {}", deal.hand(seat));
    }

    let make_policy = policy_for(args, seed);
    let mut table = BiddingTable::new(
        &deal,
        dealer,
        vulnerability,
        Seat::ALL.map(|seat| make_policy(seat)),
    );
    table.run()?;
    let auction = table.into_auction();
    println!("Auction: {}", render_auction(&auction));

    tracing::info!("solving double dummy table");
    let tricks = parbid_dds::solve(&deal).context("double dummy solve")?;
    let card = evaluate(&auction, vulnerability, &tricks)?;

    match &card.contract {
        Some(c) => println!(
            "Contract: {c}, double dummy tricks: {}",
            card.tricks_made.unwrap_or(0)
        ),
        None => println!("Contract: passed out"),
    }
    match &card.par {
        Some(p) => println!("Par: {p} for {}", p.score),
        None => println!("Par: pass out"),
    }

    println!("{:>6} {:>9} {:>9} {:>9}", "seat", "realized", "par", "diff");
    for s in &card.seats {
        println!(
            "{:>6} {:>9} {:>9} {:>9}",
            s.seat.to_string(),
            s.realized,
            s.benchmark,
            s.differential()
        );
    }
    Ok(())
}

// ── batch mode ─────────────────────────────────────────────────────────

fn run_batch(args: &Args, seed: u64) -> anyhow::Result<()> {
    tracing::info!(trials = args.count, seed, "running batch");

    let config = TrialConfig {
        trials: args.count,
        seed,
    };
    let report = run_trials(&config, &policy_for(args, seed), &DoubleDummyOracle)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Seed: {seed}");
    println!(
        "Deals: {} | Passed out: {} ({:.1}%)",
        report.trials,
        report.passed_out,
        pct(report.passed_out, report.trials)
    );
    println!();

    if !report.contracts.is_empty() {
        let mut contracts: Vec<(&str, usize)> = report
            .contracts
            .iter()
            .map(|(contract, n)| (contract.as_str(), *n))
            .collect();
        contracts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        let max_count = contracts.first().map(|(_, n)| *n).unwrap_or(1);
        let bar_width = 20;

        println!("Contracts reached:");
        for (contract, n) in contracts {
            let bar_len = (n * bar_width / max_count).max(1);
            let bar: String = "\u{2588}".repeat(bar_len);
            println!(
                "  {:<6} {:>4}  {:<20} ({:>4.1}%)",
                contract,
                n,
                bar,
                pct(n, report.trials)
            );
        }
        println!();
    }

    println!(
        "{:>6} {:>12} {:>12}",
        "seat", "mean diff", "mean fitness"
    );
    for (i, seat) in Seat::ALL.iter().enumerate() {
        println!(
            "{:>6} {:>12.1} {:>12.1}",
            seat.to_string(),
            report.mean_differential[i],
            report.mean_fitness[i]
        );
    }
    Ok(())
}

// ── main ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());

    if args.demo {
        run_demo(&args, seed)
    } else {
        run_batch(&args, seed)
    }
}

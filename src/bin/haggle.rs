//! Haggle Binary
//!
//! Runs one multilateral session of the concession strategy against two
//! random counterparties, on a scenario file or a randomly drawn one.
//!
//! Options: --scenario, --rounds, --seconds, --seed, --issues, --values,
//! --reservation, --report, --verbose

use clap::Parser;
use colored::Colorize;
use haggle::*;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;
use std::time::Duration;

const AGENT: &str = "agent";
const OPPONENTS: [&str; 2] = ["fish-1", "fish-2"];

#[derive(Debug, Parser)]
#[command(version, about = "Simulate an alternating-offers negotiation")]
struct Args {
    /// JSON scenario with profiles for "agent", "fish-1", and "fish-2".
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Rounds before the deadline.
    #[arg(long, default_value_t = 180)]
    rounds: usize,
    /// Wall-clock session length; --rounds then only caps the round count.
    #[arg(long)]
    seconds: Option<f64>,
    /// Seed for every random source; entropy if omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Issues in a random scenario.
    #[arg(long, default_value_t = 4)]
    issues: usize,
    /// Values per issue in a random scenario.
    #[arg(long, default_value_t = 5)]
    values: usize,
    /// Utility the random counterparties settle for.
    #[arg(long, default_value_t = 0.6)]
    reservation: Utility,
    /// Dump the learned opponent models after the session.
    #[arg(long)]
    report: bool,
    /// Print every turn to the terminal.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let scenario = match args.scenario.as_ref() {
        Some(path) => Scenario::load(path)?,
        None => {
            let parties = std::iter::once(AGENT).chain(OPPONENTS).collect::<Vec<_>>();
            Scenario::random(args.issues, args.values, &parties, rng)
        }
    };
    log::info!("{:<32}{:<32}", "issues", scenario.issues.len());
    log::info!("{:<32}{:<32}", "outcomes", scenario.domain().size());
    let clock = Clock::default();
    let mut session = Session::new(clock.clone(), args.rounds);
    if let Some(seconds) = args.seconds {
        session = session.timed(Deadline::from(Duration::try_from_secs_f64(seconds)?));
    }
    let space = scenario.space(AGENT)?;
    match args.seed {
        Some(_) => session.sit(AGENT, Agent::seeded(space, clock.clone(), SmallRng::seed_from_u64(rng.next_u64()))),
        None => session.sit(AGENT, Agent::initialize(space, clock.clone())),
    }
    for name in OPPONENTS {
        let space = scenario.space(name)?;
        match args.seed {
            Some(_) => session.sit(
                name,
                Fish::seeded(space, clock.clone(), args.reservation, SmallRng::seed_from_u64(rng.next_u64())),
            ),
            None => session.sit(name, Fish::initialize(space, clock.clone(), args.reservation)),
        }
    }
    for name in session.names() {
        log::info!("{:<32}{:<32}", "seated", name);
    }
    let outcome = session.run()?;
    match outcome {
        Outcome::Agreement { .. } => log::info!("{}", outcome.to_string().green()),
        Outcome::Breakdown { .. } => log::info!("{}", outcome.to_string().red()),
        Outcome::Timeout { .. } => log::info!("{}", outcome.to_string().yellow()),
    }
    if args.report {
        if let Some(agent) = session.party(AGENT) {
            log::info!("{}\n{}", agent.describe().bold(), agent.report());
        }
    }
    Ok(())
}

//! Opponent-modelling concession strategy for alternating-offers negotiation.
//!
//! The strategy holds a private preference model over a discrete multi-issue
//! domain, learns time-decayed frequency models of up to two counterparties,
//! and on every turn accepts, offers, or walks away.
//!
//! # Module Structure
//!
//! - `domain` — Issues, values, and complete bids
//! - `space` — Read-only collaborators (utility space, timeline) plus reference impls
//! - `preference` — Own per-issue disutility model
//! - `opponent` — Per-opponent frequency models and the two-slot registry
//! - `generator` — Opponent-informed concession bid sampling
//! - `policy` — Turn-level accept/offer/end decisions
//! - `session` — Minimal multilateral driver for simulation
mod domain;
mod error;
mod generator;
mod opponent;
mod policy;
mod preference;
mod session;
mod space;

pub use domain::*;
pub use error::*;
pub use generator::*;
pub use opponent::*;
pub use policy::*;
pub use preference::*;
pub use session::*;
pub use space::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Normalized session time in [0, 1].
pub type Time = f64;
/// Aggregate self-value of a bid, as computed by the utility space.
pub type Utility = f64;
/// Relative importance of an issue. Weights across issues sum to 1.
pub type Weight = f64;
/// Normalized loss of a value relative to the issue's best value. Always <= 0.
pub type Disutility = f64;
/// Accumulated, time-decayed evidence of an opponent's preference.
pub type Frequency = f64;
/// Integer evaluation of a discrete value.
pub type Score = u32;

// ============================================================================
// OPPONENT MODELLING
// Observations decay with elapsed time: w(t) = 1 - t^α.
// ============================================================================
/// Decay exponent (α). Early offers outweigh late, more tactical ones.
pub const ALPHA: f64 = 1.3;
/// Blend weight (ω) between opponent slot A and slot B.
pub const OMEGA: f64 = 0.5;

// ============================================================================
// CONCESSION SCHEDULE
// Floor decreases linearly from 1.0 at t = 0 to 0.8 at the deadline.
// ============================================================================
/// Utility conceded per unit of normalized time.
pub const CONCESSION_RATE: Utility = 0.2;
/// Floor value past the deadline.
pub const CONCESSION_MINIMUM: Utility = 0.8;
/// Before this time the strategy only ever offers its best bid.
pub const SELFISH_PHASE: Time = 0.5;
/// Normalized time at which the strategy walks away.
pub const DEADLINE: Time = 1.0;

/// Static human-readable identifier of the strategy.
pub const DESCRIPTION: &str = "Agent Get Lucky";

/// Minimum utility an incoming offer must exceed to be accepted at time `t`.
pub fn concession(t: Time) -> Utility {
    if t > DEADLINE {
        CONCESSION_MINIMUM
    } else {
        1.0 - CONCESSION_RATE * t
    }
}

/// Weight of an opponent observation made at time `t`.
pub fn decay(t: Time) -> Frequency {
    1.0 - t.powf(ALPHA)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Log every turn to `logs/haggle-<unix seconds>.log`, and INFO to the
/// terminal (DEBUG when `verbose`).
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let quiet = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let terminal = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = format!("logs/haggle-{}.log", stamp);
    std::fs::create_dir_all("logs")?;
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            terminal,
            quiet.clone(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, quiet, std::fs::File::create(&path)?),
    ])?;
    log::debug!("{:<32}{:<32}", "log file", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn concession_is_linear_until_deadline() {
        assert_eq!(concession(0.0), 1.0);
        assert!((concession(0.5) - 0.9).abs() < 1e-12);
        assert!((concession(0.9) - 0.82).abs() < 1e-12);
        assert!((concession(1.0) - 0.8).abs() < 1e-12);
    }
    #[test]
    fn concession_is_clamped_past_deadline() {
        assert_eq!(concession(1.5), CONCESSION_MINIMUM);
    }
    #[test]
    fn decay_is_one_at_start_and_zero_at_deadline() {
        assert_eq!(decay(0.0), 1.0);
        assert_eq!(decay(1.0), 0.0);
    }
    #[test]
    fn decay_decreases_with_time() {
        let samples = (0..=10).map(|i| decay(i as Time / 10.0)).collect::<Vec<_>>();
        assert!(samples.windows(2).all(|w| w[0] > w[1]));
        assert!(samples.iter().all(|w| *w >= 0.0));
    }
}

use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use haggle::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

criterion_group! {
    name = negotiation;
    config = Criterion::default()
        .sample_size(50)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2));
    targets = generating_concession_bid, observing_opponent_offer, running_random_session
}
criterion_main!(negotiation);

const PARTIES: [&str; 3] = ["agent", "fish-1", "fish-2"];

fn scenario() -> Scenario {
    let ref mut rng = SmallRng::seed_from_u64(0);
    Scenario::random(8, 8, &PARTIES, rng)
}

fn generating_concession_bid(c: &mut Criterion) {
    let scenario = scenario();
    let space = scenario.space("agent").expect("agent profile");
    let domain = scenario.domain();
    let preference = Preference::from(&space);
    let opponents = Opponents::from(&domain);
    let generator = Generator::new(&domain, &preference, &opponents);
    let ref mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("generate a concession Bid over 8x8 issues", |b| {
        b.iter(|| generator.generate(0.9, rng).expect("every issue has values"))
    });
}

fn observing_opponent_offer(c: &mut Criterion) {
    let scenario = scenario();
    let space = scenario.space("fish-1").expect("fish profile");
    let bid = space.best().expect("non-empty domain");
    let mut opponent = Opponent::from(&scenario.domain());
    c.bench_function("observe an Offer in an Opponent model", |b| {
        b.iter(|| opponent.observe(&bid, 0.5))
    });
}

fn running_random_session(c: &mut Criterion) {
    let scenario = scenario();
    c.bench_function("run a 180-round Session against two Fish", |b| {
        b.iter(|| {
            let clock = Clock::default();
            let mut session = Session::new(clock.clone(), 180);
            session.sit(
                "agent",
                Agent::seeded(scenario.space("agent").expect("profile"), clock.clone(), SmallRng::seed_from_u64(2)),
            );
            for (i, name) in ["fish-1", "fish-2"].into_iter().enumerate() {
                session.sit(
                    name,
                    Fish::seeded(scenario.space(name).expect("profile"), clock.clone(), 0.6, SmallRng::seed_from_u64(i as u64)),
                );
            }
            session.run().expect("session runs")
        })
    });
}

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_hand_database,
        joining_session,
        reconstructing_turn_order,
        expanding_training_examples,
}

const PLAYERS: [&str; 6] = ["alice", "bob", "carol", "dave", "erin", "frank"];
const HANDS: usize = 1_000;

/// Synthetic session of six-handed hands that all reach the river.
fn session() -> (String, String, Vec<(&'static str, String)>) {
    let mut hdb = String::new();
    let mut roster = String::new();
    let mut logs = PLAYERS
        .iter()
        .map(|user| (*user, String::new()))
        .collect::<Vec<_>>();
    for n in 1..=HANDS {
        let local = format!("{:06}", n);
        hdb.push_str(&format!(
            "{} {} {} 6 6/60 4/140 3/200 2/260 As Kd Qh Jc Ts\n",
            local,
            n % 6 + 1,
            n
        ));
        roster.push_str(&format!("{} 6 {}\n", local, PLAYERS.join(" ")));
        for (seat, (user, log)) in logs.iter_mut().enumerate() {
            let bets = match seat {
                0 | 1 => "Bc kb kc k",
                2 | 3 => "cr kc b -",
                _ => "f - - -",
            };
            log.push_str(&format!("{} {} 6 {} {} 1000 40 0 2c 7d\n", user, local, seat + 1, bets));
        }
    }
    (hdb, roster, logs)
}

fn join(session: &(String, String, Vec<(&'static str, String)>)) -> irchands::join::Joined {
    let (hdb, roster, logs) = session;
    let mut joiner = Joiner::new(Layout::new("holdem", "199505"));
    joiner.hdb(hdb.as_bytes()).unwrap();
    joiner.roster(roster.as_bytes()).unwrap();
    for (user, log) in logs {
        joiner.actions(user, log.as_bytes()).unwrap();
    }
    joiner.finish()
}

fn parsing_hand_database(c: &mut criterion::Criterion) {
    let (hdb, _, _) = session();
    c.bench_function("parse 1k hand database lines", |b| {
        b.iter(|| {
            let mut joiner = Joiner::new(Layout::new("holdem", "199505"));
            joiner.hdb(hdb.as_bytes()).unwrap();
            joiner
        })
    });
}

fn joining_session(c: &mut criterion::Criterion) {
    let session = session();
    c.bench_function("join a 1k hand six-handed session", |b| {
        b.iter(|| join(&session))
    });
}

fn reconstructing_turn_order(c: &mut criterion::Criterion) {
    let joined = join(&session());
    let hand = joined.hands.values().next().unwrap();
    c.bench_function("reconstruct a six-handed turn order", |b| {
        b.iter(|| reconstruct(hand).unwrap())
    });
}

fn expanding_training_examples(c: &mut criterion::Criterion) {
    let joined = join(&session());
    c.bench_function("expand 1k hands into training examples", |b| {
        b.iter(|| {
            joined
                .hands
                .values()
                .map(|hand| expand(hand).unwrap().len())
                .sum::<usize>()
        })
    });
}

use irchands::expand::expand;
use irchands::expand::reconstruct;
use irchands::join::Joiner;
use irchands::join::Layout;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terminplan::candidate::{fallback_candidates, CandidatePreference};
use terminplan::input::demo_roster;
use terminplan::schedule::Session;
use terminplan::time::{Day, TimeRange};

fn tue_afternoon() -> CandidatePreference {
    CandidatePreference::new(Day::Tue, TimeRange::parse("14:00", "17:00").unwrap())
}

fn validate_and_sweep(c: &mut Criterion) {
    c.bench_function("validate_roster", |b| {
        let mut roster = demo_roster();

        b.iter(|| black_box(roster.validate()));
    });

    c.bench_function("feasibility_sweep", |b| {
        let session = Session::new(demo_roster(), fallback_candidates(), tue_afternoon());

        b.iter(|| {
            black_box(
                session
                    .grid()
                    .iter()
                    .filter(|slot| session.is_feasible(slot.day, slot.start_min))
                    .count(),
            )
        });
    });

    c.bench_function("slot_state_sweep", |b| {
        let session = Session::new(demo_roster(), fallback_candidates(), tue_afternoon());

        b.iter(|| {
            for slot in session.grid() {
                black_box(session.slot_state(slot.day, slot.start_min));
            }
        });
    });
}

criterion_group!(benches, validate_and_sweep);
criterion_main!(benches);

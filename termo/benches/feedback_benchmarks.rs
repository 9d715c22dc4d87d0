use criterion::{Criterion, criterion_group, criterion_main};
use termo::game::{GameRules, GameSession, Word, score_guess};

/// Benchmark feedback scoring on the duplicate-letter worst case
fn bench_score_guess(c: &mut Criterion) {
    let secret = Word::parse("CASAL", true).expect("valid word");
    let guess = Word::parse("ALCAR", true).expect("valid word");

    c.bench_function("score_guess_duplicates", |b| {
        b.iter(|| score_guess(&guess, &secret));
    });
}

/// Benchmark a full six-guess round including validation and bookkeeping
fn bench_full_round(c: &mut Criterion) {
    let secret = Word::parse("CASAL", true).expect("valid word");

    c.bench_function("full_round_six_guesses", |b| {
        b.iter(|| {
            let mut session = GameSession::new(GameRules::default());
            session
                .begin_round(secret.clone())
                .expect("fresh session starts");
            for guess in ["porto", "carro", "alcar", "lindo", "festa", "casal"] {
                let _ = session.guess(guess);
            }
            session.score()
        });
    });
}

criterion_group!(benches, bench_score_guess, bench_full_round);
criterion_main!(benches);

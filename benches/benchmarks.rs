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
        sampling_random_hand,
        evaluating_random_hand,
        parsing_hand_tokens,
        decoding_account_block,
        rendering_account_block,
        building_nested_selector,
}

fn sampling_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("sample a random 5-card Hand", |b| b.iter(|| Hand::random()));
}

fn evaluating_random_hand(c: &mut criterion::Criterion) {
    let hand = Hand::random();
    c.bench_function("classify a 5-card Hand", |b| {
        b.iter(|| Evaluator::from(criterion::black_box(hand)).find_ranking())
    });
}

fn parsing_hand_tokens(c: &mut criterion::Criterion) {
    c.bench_function("parse a Hand from card tokens", |b| {
        b.iter(|| Hand::try_from(criterion::black_box("A♠ 4♠ 3♠ 5♠ 2♠")))
    });
}

fn decoding_account_block(c: &mut criterion::Criterion) {
    let block = Grid::from(AccountNumber::try_from(823856989u64).unwrap()).to_string();
    c.bench_function("decode a 9-digit account block", |b| {
        b.iter(|| decode(criterion::black_box(&block)))
    });
}

fn rendering_account_block(c: &mut criterion::Criterion) {
    let number = AccountNumber::try_from(123456789u64).unwrap();
    c.bench_function("render a 9-digit account block", |b| {
        b.iter(|| Grid::from(criterion::black_box(number)).to_string())
    });
}

fn building_nested_selector(c: &mut criterion::Criterion) {
    c.bench_function("build a three-level combined selector", |b| {
        b.iter(|| {
            combine(
                element("div").id("main").and_then(|s| s.class("container")).unwrap(),
                Combinator::Adjacent,
                combine(
                    element("table").id("data").unwrap(),
                    Combinator::Sibling,
                    combine(
                        element("tr").pseudo_class("nth-of-type(even)").unwrap(),
                        Combinator::Descendant,
                        element("td").pseudo_class("nth-of-type(even)").unwrap(),
                    ),
                ),
            )
        })
    });
}

use katas::Arbitrary;
use katas::account::AccountNumber;
use katas::account::Grid;
use katas::account::decode;
use katas::cards::Hand;
use katas::evaluation::Evaluator;
use katas::selector::Combinator;
use katas::selector::combine;
use katas::selector::element;

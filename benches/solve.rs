use criterion::black_box;
use criterion::{criterion_group, criterion_main, Criterion};

use crossword_fill::arc_consistency::ac3;
use crossword_fill::domain::Domains;
use crossword_fill::structure::Structure;
use crossword_fill::{Solver, WordList};

const STRUCTURE_PATH: &str = "tests/fixtures/structure0.txt";
const WORDS_PATH: &str = "tests/fixtures/words0.txt";
const SQUARE_WORDS: &str = "tab\nore\npet\ntop\nare\nbet\ntap\nrot\nbee\noar\nape\nten\nart\nbar\n";

pub fn criterion_benchmark(c: &mut Criterion) {
    let structure = Structure::load(STRUCTURE_PATH).expect("failed to read structure");
    let puzzle = structure.puzzle().expect("failed to build puzzle");
    let word_list = WordList::load(WORDS_PATH).expect("failed to read words");

    c.bench_function("solve_fixture_structure", |b| {
        b.iter(|| {
            let solution = Solver::new(black_box(&puzzle), black_box(&word_list))
                .solve()
                .expect("search shouldn't time out");
            assert!(solution.outcome.is_solved());
        });
    });

    let square = Structure::parse("___\n___\n___").expect("failed to parse structure");
    let square_puzzle = square.puzzle().expect("failed to build puzzle");
    let square_words = WordList::parse(SQUARE_WORDS);

    c.bench_function("solve_open_3x3", |b| {
        b.iter(|| {
            Solver::new(black_box(&square_puzzle), black_box(&square_words))
                .solve()
                .expect("search shouldn't time out")
        });
    });

    c.bench_function("ac3_open_3x3", |b| {
        b.iter(|| {
            let mut domains = Domains::initialize(&square_puzzle, &square_words);
            domains.enforce_node_consistency(&square_puzzle, &square_words);
            let _ = ac3(
                black_box(&mut domains),
                &square_puzzle,
                &square_words,
                None,
            );
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

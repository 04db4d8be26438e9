//! Set detection benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use set_game::{build_full_deck, find_sets, is_valid_set, GameConfig, IdentityAllocator, SetGame};

fn bench_is_valid_set(c: &mut Criterion) {
    let deck = build_full_deck(&mut IdentityAllocator::new());

    c.bench_function("is_valid_set", |b| {
        b.iter(|| is_valid_set(black_box(&deck[0]), black_box(&deck[40]), black_box(&deck[80])))
    });
}

fn bench_find_sets(c: &mut Criterion) {
    let mut game = SetGame::new(GameConfig::default().with_seed(42)).unwrap();
    game.deal(15);
    let table: Vec<_> = game.cards_in_play().iter().cloned().collect();

    c.bench_function("find_sets_15_cards", |b| b.iter(|| find_sets(black_box(&table))));
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("perfect_game", |b| {
        b.iter(|| {
            let mut game = SetGame::new(GameConfig::default().with_seed(7)).unwrap();
            game.deal_opening_hand();
            while !game.is_finished() {
                match game.available_sets().first().copied() {
                    Some([x, y, z]) => {
                        game.change_selection(x);
                        game.change_selection(y);
                        game.change_selection(z);
                        game.replace_matched();
                    }
                    None => {
                        game.deal_more();
                    }
                }
            }
            game.score()
        })
    });
}

criterion_group!(benches, bench_is_valid_set, bench_find_sets, bench_full_game);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use fleamarket_catalog::{
    CatalogStore, Handbook, HandbookEntry, InMemoryCatalog, InMemoryMarketIndex, ItemDefinition,
    ItemTable, PriceTable, Slot,
};
use fleamarket_core::ItemId;
use fleamarket_infra::MarketRefresher;
use fleamarket_pricing::{BasePriceResolver, RefreshConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

const ARMOR: &str = "5448e54d4bdc2dcc718b4568";
const PLATE: &str = "644120aa86ffbe10ee032b6f";

/// Catalog shaped like the live one: most items plain, every tenth an armor
/// with two required plates.
fn synthetic_catalog(n: usize) -> InMemoryCatalog {
    let mut items = ItemTable::with_capacity(n + 2);
    let mut handbook = Vec::with_capacity(n + 2);
    let mut prices = PriceTable::new();

    for plate in ["plate-front", "plate-back"] {
        items.insert(ItemId::new(plate), ItemDefinition::new(plate, PLATE));
        handbook.push(HandbookEntry::new(plate, 15_000.0));
    }

    for i in 0..n {
        let id = format!("item{i:06}");
        let mut def = ItemDefinition::new(id.as_str(), ARMOR);
        if i % 10 == 0 {
            def = def
                .with_slot(Slot::required_plate("Front_plate", "plate-front"))
                .with_slot(Slot::required_plate("Back_plate", "plate-back"));
        }
        items.insert(ItemId::new(id.as_str()), def);
        handbook.push(HandbookEntry::new(id.as_str(), 1_000.0 + i as f64));
        prices.set(ItemId::new(id.as_str()), 1.0);
    }

    InMemoryCatalog::new(items, Handbook::new(handbook), prices)
}

fn bench_run_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_pass");

    for n in [1_000usize, 10_000] {
        let refresher = MarketRefresher::new(
            Arc::new(synthetic_catalog(n)),
            Arc::new(InMemoryMarketIndex::new()),
            Arc::new(RefreshConfig::default()),
        );
        let mut rng = StdRng::seed_from_u64(7);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(refresher.run_pass_with_rng(&mut rng).unwrap()))
        });
    }

    group.finish();
}

fn bench_resolve_with_plates(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000);
    let resolver = BasePriceResolver::new(catalog.items(), catalog.handbook());
    let id = ItemId::new("item000010");

    c.bench_function("resolve_base_price_with_plates", |b| {
        b.iter(|| black_box(resolver.resolve(black_box(&id)).unwrap()))
    });
}

criterion_group!(benches, bench_run_pass, bench_resolve_with_plates);
criterion_main!(benches);

//! Handbook base prices, including built-in plates.

use tracing::info;

use fleamarket_catalog::{Handbook, ItemDefinition, ItemTable};
use fleamarket_core::{ItemId, PricingError, PricingResult};

/// Resolves an item's base price from the handbook.
///
/// Model:
/// - Start from the item's own handbook price ([`NO_PRICE`](fleamarket_catalog::NO_PRICE) if absent).
/// - For every required slot whose first filter names a plate that exists in the
///   catalog, resolve the plate recursively and add it when strictly positive.
///
/// A plate chain that loops back onto an item still being resolved yields
/// [`PricingError::CyclicPartReference`]. The same plate reached along two
/// different slots is not a cycle and is counted twice.
#[derive(Debug, Clone, Copy)]
pub struct BasePriceResolver<'a> {
    items: &'a ItemTable,
    handbook: &'a Handbook,
    log_parts: bool,
}

impl<'a> BasePriceResolver<'a> {
    pub fn new(items: &'a ItemTable, handbook: &'a Handbook) -> Self {
        Self {
            items,
            handbook,
            log_parts: false,
        }
    }

    /// Log items whose base price changed because of their plates.
    pub fn with_parts_logging(mut self, enabled: bool) -> Self {
        self.log_parts = enabled;
        self
    }

    /// Base price of a catalog identifier. Identifiers missing from the
    /// catalog only get their direct handbook price.
    pub fn resolve(&self, id: &ItemId) -> PricingResult<f64> {
        match self.items.get(id) {
            Some(item) => self.resolve_item(item),
            None => Ok(self.handbook.price(id)),
        }
    }

    pub fn resolve_item(&self, item: &ItemDefinition) -> PricingResult<f64> {
        let mut path = Vec::new();
        self.resolve_on_path(item, &mut path)
    }

    fn resolve_on_path<'p>(
        &self,
        item: &'p ItemDefinition,
        path: &mut Vec<&'p ItemId>,
    ) -> PricingResult<f64>
    where
        'a: 'p,
    {
        if path.contains(&&item.id) {
            return Err(PricingError::cyclic(item.id.clone()));
        }

        let direct = self.handbook.price(&item.id);
        if !item.has_slots() {
            return Ok(direct);
        }

        path.push(&item.id);
        let mut total = direct;
        for plate_id in item.slots().iter().filter_map(|s| s.required_plate_id()) {
            let Some(plate) = self.items.get(plate_id) else {
                continue;
            };
            let plate_price = self.resolve_on_path(plate, path)?;
            if plate_price > 0.0 {
                total += plate_price;
            }
        }
        path.pop();

        if self.log_parts && total != direct {
            info!(
                item = %item.id,
                "Updating {} base price from {} to {} because of slots!",
                item.display_name(),
                direct,
                total
            );
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use fleamarket_catalog::{HandbookEntry, NO_PRICE, Slot};
    use proptest::prelude::*;

    const VEST: &str = "5448e5284bdc2dcb718b4567";
    const PLATE: &str = "644120aa86ffbe10ee032b6f";

    fn table(items: Vec<ItemDefinition>) -> ItemTable {
        items.into_iter().map(|i| (i.id.clone(), i)).collect()
    }

    #[test]
    fn plain_item_uses_handbook_price() {
        let items = table(vec![ItemDefinition::new("a", VEST)]);
        let handbook = Handbook::new(vec![HandbookEntry::new("a", 1000.0)]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert_eq!(resolver.resolve(&ItemId::new("a")).unwrap(), 1000.0);
    }

    #[test]
    fn missing_handbook_entry_is_sentinel() {
        let items = table(vec![ItemDefinition::new("a", VEST)]);
        let handbook = Handbook::default();
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert_eq!(resolver.resolve(&ItemId::new("a")).unwrap(), NO_PRICE);
    }

    #[test]
    fn required_plate_is_folded_in() {
        let items = table(vec![
            ItemDefinition::new("vest", VEST).with_slot(Slot::required_plate("Front_plate", "plate")),
            ItemDefinition::new("plate", PLATE),
        ]);
        let handbook = Handbook::new(vec![
            HandbookEntry::new("vest", 1000.0),
            HandbookEntry::new("plate", 150.0),
        ]);
        let resolver = BasePriceResolver::new(&items, &handbook).with_parts_logging(true);
        assert_eq!(resolver.resolve(&ItemId::new("vest")).unwrap(), 1150.0);
    }

    #[test]
    fn parts_line_follows_its_toggle() {
        let items = table(vec![
            ItemDefinition::new("vest", VEST)
                .with_name("Plate carrier")
                .with_slot(Slot::required_plate("Front_plate", "plate")),
            ItemDefinition::new("plate", PLATE),
        ]);
        let handbook = Handbook::new(vec![
            HandbookEntry::new("vest", 1000.0),
            HandbookEntry::new("plate", 150.0),
        ]);
        let id = ItemId::new("vest");

        let silent = capture_logs(|| {
            BasePriceResolver::new(&items, &handbook).resolve(&id).unwrap();
        });
        assert!(silent.is_empty(), "unexpected output: {silent}");

        let logged = capture_logs(|| {
            BasePriceResolver::new(&items, &handbook)
                .with_parts_logging(true)
                .resolve(&id)
                .unwrap();
        });
        assert!(logged.contains("Updating Plate carrier base price from 1000 to 1150 because of slots!"));
    }

    #[test]
    fn parts_line_needs_a_price_change() {
        let items = table(vec![
            ItemDefinition::new("vest", VEST).with_slot(Slot::required_plate("Front_plate", "plate")),
            ItemDefinition::new("plate", PLATE),
        ]);
        let handbook = Handbook::new(vec![HandbookEntry::new("vest", 1000.0)]);

        let logged = capture_logs(|| {
            BasePriceResolver::new(&items, &handbook)
                .with_parts_logging(true)
                .resolve(&ItemId::new("vest"))
                .unwrap();
        });
        assert!(logged.is_empty(), "unexpected output: {logged}");
    }

    #[test]
    fn optional_or_unpriced_plates_are_ignored() {
        let mut optional = Slot::required_plate("Back_plate", "plate");
        optional.required = false;
        let items = table(vec![
            ItemDefinition::new("vest", VEST)
                .with_slot(optional)
                .with_slot(Slot::required_plate("Left_side_plate", "free"))
                .with_slot(Slot::required_plate("Right_side_plate", "not-in-catalog")),
            ItemDefinition::new("plate", PLATE),
            ItemDefinition::new("free", PLATE),
        ]);
        let handbook = Handbook::new(vec![
            HandbookEntry::new("vest", 1000.0),
            HandbookEntry::new("plate", 150.0),
            HandbookEntry::new("free", 0.0),
            HandbookEntry::new("not-in-catalog", 500.0),
        ]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert_eq!(resolver.resolve(&ItemId::new("vest")).unwrap(), 1000.0);
    }

    #[test]
    fn nested_plates_recurse() {
        let items = table(vec![
            ItemDefinition::new("rig", VEST).with_slot(Slot::required_plate("insert", "vest")),
            ItemDefinition::new("vest", VEST).with_slot(Slot::required_plate("Front_plate", "plate")),
            ItemDefinition::new("plate", PLATE),
        ]);
        let handbook = Handbook::new(vec![
            HandbookEntry::new("rig", 10.0),
            HandbookEntry::new("vest", 100.0),
            HandbookEntry::new("plate", 1.0),
        ]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert_eq!(resolver.resolve(&ItemId::new("rig")).unwrap(), 111.0);
    }

    #[test]
    fn same_plate_in_two_slots_counts_twice() {
        let items = table(vec![
            ItemDefinition::new("vest", VEST)
                .with_slot(Slot::required_plate("Front_plate", "plate"))
                .with_slot(Slot::required_plate("Back_plate", "plate")),
            ItemDefinition::new("plate", PLATE),
        ]);
        let handbook = Handbook::new(vec![
            HandbookEntry::new("vest", 1000.0),
            HandbookEntry::new("plate", 150.0),
        ]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert_eq!(resolver.resolve(&ItemId::new("vest")).unwrap(), 1300.0);
    }

    #[test]
    fn unpriced_parent_with_priced_plate_sums_from_sentinel() {
        // The sentinel is a plain number: -1 + 150.
        let items = table(vec![
            ItemDefinition::new("vest", VEST).with_slot(Slot::required_plate("Front_plate", "plate")),
            ItemDefinition::new("plate", PLATE),
        ]);
        let handbook = Handbook::new(vec![HandbookEntry::new("plate", 150.0)]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert_eq!(resolver.resolve(&ItemId::new("vest")).unwrap(), 149.0);
    }

    #[test]
    fn plate_cycle_is_an_error() {
        let items = table(vec![
            ItemDefinition::new("a", VEST).with_slot(Slot::required_plate("s", "b")),
            ItemDefinition::new("b", VEST).with_slot(Slot::required_plate("s", "a")),
        ]);
        let handbook = Handbook::new(vec![
            HandbookEntry::new("a", 1.0),
            HandbookEntry::new("b", 1.0),
        ]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        let err = resolver.resolve(&ItemId::new("a")).unwrap_err();
        assert_eq!(err, PricingError::CyclicPartReference(ItemId::new("a")));
    }

    #[test]
    fn self_referencing_plate_is_an_error() {
        let items = table(vec![
            ItemDefinition::new("a", VEST).with_slot(Slot::required_plate("s", "a")),
        ]);
        let handbook = Handbook::new(vec![HandbookEntry::new("a", 1.0)]);
        let resolver = BasePriceResolver::new(&items, &handbook);
        assert!(matches!(
            resolver.resolve(&ItemId::new("a")),
            Err(PricingError::CyclicPartReference(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: resolution over a fixed acyclic catalog is deterministic.
        #[test]
        fn resolution_is_deterministic(
            prices in prop::collection::vec(0u32..100_000u32, 1..8)
        ) {
            // Chain: item0 -> item1 -> ... each carrying the next as a required plate.
            let n = prices.len();
            let mut defs = Vec::with_capacity(n);
            for i in 0..n {
                let mut def = ItemDefinition::new(format!("item{i}"), VEST);
                if i + 1 < n {
                    def = def.with_slot(Slot::required_plate("plate", format!("item{}", i + 1)));
                }
                defs.push(def);
            }
            let items = table(defs);
            let handbook: Handbook = prices
                .iter()
                .enumerate()
                .map(|(i, p)| HandbookEntry::new(format!("item{i}"), *p as f64))
                .collect();

            let resolver = BasePriceResolver::new(&items, &handbook);
            let first = resolver.resolve(&ItemId::new("item0")).unwrap();
            let second = resolver.resolve(&ItemId::new("item0")).unwrap();

            prop_assert_eq!(first, second);
            prop_assert_eq!(first, prices.iter().map(|p| *p as f64).sum::<f64>());
        }
    }
}

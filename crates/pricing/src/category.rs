//! Category classification from an item's parent-type identifier.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use fleamarket_core::PricingError;

macro_rules! categories {
    ($($variant:ident => $tag:literal, $parent:literal;)*) => {
        /// Coarse item category used to look up category multipliers.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Category {
            $($variant,)*
            /// Parent-type identifier not in the table.
            Unknown,
        }

        impl Category {
            /// Every known category (excludes [`Category::Unknown`]).
            pub const KNOWN: &'static [Category] = &[$(Category::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Category::$variant => $tag,)*
                    Category::Unknown => "UNKNOWN",
                }
            }

            /// Parent-type identifier this category is derived from.
            pub fn parent_id(&self) -> Option<&'static str> {
                match self {
                    $(Category::$variant => Some($parent),)*
                    Category::Unknown => None,
                }
            }
        }

        impl core::str::FromStr for Category {
            type Err = PricingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Category::$variant),)*
                    "UNKNOWN" => Ok(Category::Unknown),
                    other => Err(PricingError::validation(format!("unknown category tag: {other}"))),
                }
            }
        }
    };
}

categories! {
    Weapon => "WEAPON", "5422acb9af1c889c16000029";
    Ubgl => "UBGL", "55818b014bdc2ddc698b456b";
    Armor => "ARMOR", "5448e54d4bdc2dcc718b4568";
    ArmoredEquipment => "ARMORED_EQUIPMENT", "57bef4c42459772e8d35a53b";
    RepairKits => "REPAIR_KITS", "616eb7aea207f41933308f46";
    Headwear => "HEADWEAR", "5a341c4086f77401f2541505";
    Facecover => "FACECOVER", "5a341c4686f77469e155819e";
    Vest => "VEST", "5448e5284bdc2dcb718b4567";
    Backpack => "BACKPACK", "5448e53e4bdc2d60728b4567";
    Compound => "COMPOUND", "566162e44bdc2d3f298b4573";
    Visors => "VISORS", "5448e5724bdc2ddf718b4568";
    Food => "FOOD", "5448e8d04bdc2ddf718b4569";
    GasBlock => "GAS_BLOCK", "56ea9461d2720b67698b456f";
    RailCover => "RAIL_COVER", "55818b1d4bdc2d5b648b4572";
    Drink => "DRINK", "5448e8d64bdc2dce718b4568";
    BarterItem => "BARTER_ITEM", "5448eb774bdc2d0a728b4567";
    Info => "INFO", "5448ecbe4bdc2d60728b4568";
    Medkit => "MEDKIT", "5448f39d4bdc2d0a728b4568";
    Drugs => "DRUGS", "5448f3a14bdc2d27728b4569";
    Stimulator => "STIMULATOR", "5448f3a64bdc2d60728b456a";
    Medical => "MEDICAL", "5448f3ac4bdc2dce718b4569";
    MedicalSupplies => "MEDICAL_SUPPLIES", "57864c8c245977548867e7f1";
    Mod => "MOD", "5448fe124bdc2da5018b4567";
    FunctionalMod => "FUNCTIONAL_MOD", "550aa4154bdc2dd8348b456b";
    Fuel => "FUEL", "5d650c3e815116009f6201d2";
    GearMod => "GEAR_MOD", "55802f3e4bdc2de7118b4584";
    Stock => "STOCK", "55818a594bdc2db9688b456a";
    Foregrip => "FOREGRIP", "55818af64bdc2d5b648b4570";
    MasterMod => "MASTER_MOD", "55802f4a4bdc2ddb688b4569";
    Mount => "MOUNT", "55818b224bdc2dde698b456f";
    Muzzle => "MUZZLE", "5448fe394bdc2d0d028b456c";
    Sights => "SIGHTS", "5448fe7a4bdc2d6f028b456b";
    Meds => "MEDS", "543be5664bdc2dd4348b4569";
    Map => "MAP", "567849dd4bdc2d150f8b456e";
    Money => "MONEY", "543be5dd4bdc2deb348b4569";
    Nightvision => "NIGHTVISION", "5a2c3a9486f774688b05e574";
    ThermalVision => "THERMAL_VISION", "5d21f59b6dbe99052b54ef83";
    Key => "KEY", "543be5e94bdc2df1348b4568";
    KeyMechanical => "KEY_MECHANICAL", "5c99f98d86f7745c314214b3";
    Keycard => "KEYCARD", "5c164d2286f774194c5e69fa";
    Equipment => "EQUIPMENT", "543be5f84bdc2dd4348b456a";
    ThrowWeapon => "THROW_WEAPON", "543be6564bdc2df4348b4568";
    FoodDrink => "FOOD_DRINK", "543be6674bdc2df1348b4569";
    Pistol => "PISTOL", "5447b5cf4bdc2d65278b4567";
    Revolver => "REVOLVER", "617f1ef5e8b54b0998387733";
    Smg => "SMG", "5447b5e04bdc2d62278b4567";
    AssaultRifle => "ASSAULT_RIFLE", "5447b5f14bdc2d61278b4567";
    AssaultCarbine => "ASSAULT_CARBINE", "5447b5fc4bdc2d87278b4567";
    Shotgun => "SHOTGUN", "5447b6094bdc2dc3278b4567";
    MarksmanRifle => "MARKSMAN_RIFLE", "5447b6194bdc2d67278b4567";
    SniperRifle => "SNIPER_RIFLE", "5447b6254bdc2dc3278b4568";
    MachineGun => "MACHINE_GUN", "5447bed64bdc2d97278b4568";
    GrenadeLauncher => "GRENADE_LAUNCHER", "5447bedf4bdc2d87278b4568";
    SpecialWeapon => "SPECIAL_WEAPON", "5447bee84bdc2dc3278b4569";
    SpecItem => "SPEC_ITEM", "5447e0e74bdc2d3c308b4567";
    SpringDrivenCylinder => "SPRING_DRIVEN_CYLINDER", "627a137bf21bc425b06ab944";
    Knife => "KNIFE", "5447e1d04bdc2dff2f8b4567";
    Ammo => "AMMO", "5485a8684bdc2da71d8b4567";
    AmmoBox => "AMMO_BOX", "543be5cb4bdc2deb348b4568";
    LootContainer => "LOOT_CONTAINER", "566965d44bdc2d814c8b4571";
    MobContainer => "MOB_CONTAINER", "5448bf274bdc2dfc2f8b456a";
    SearchableItem => "SEARCHABLE_ITEM", "566168634bdc2d144c8b456c";
    Stash => "STASH", "566abbb64bdc2d144c8b457d";
    SortingTable => "SORTING_TABLE", "6050cac987d3f925bf016837";
    LockableContainer => "LOCKABLE_CONTAINER", "5671435f4bdc2d96058b4569";
    SimpleContainer => "SIMPLE_CONTAINER", "5795f317245977243854e041";
    Inventory => "INVENTORY", "55d720f24bdc2d88028b456d";
    StationaryContainer => "STATIONARY_CONTAINER", "567583764bdc2d98058b456e";
    Pockets => "POCKETS", "557596e64bdc2dc2118b4571";
    Armband => "ARMBAND", "5b3f15d486f77432d0509248";
    Jewelry => "JEWELRY", "57864a3d24597754843f8721";
    Electronics => "ELECTRONICS", "57864a66245977548f04a81f";
    BuildingMaterial => "BUILDING_MATERIAL", "57864ada245977548638de91";
    Tool => "TOOL", "57864bb7245977548b3b66c2";
    HouseholdGoods => "HOUSEHOLD_GOODS", "57864c322459775490116fbf";
    Lubricant => "LUBRICANT", "57864e4c24597754843f8723";
    Battery => "BATTERY", "57864ee62459775490116fc1";
    AssaultScope => "ASSAULT_SCOPE", "55818add4bdc2d5b648b456f";
    TacticalCombo => "TACTICAL_COMBO", "55818b164bdc2ddc698b456c";
    Flashlight => "FLASHLIGHT", "55818b084bdc2d5b648b4571";
    Magazine => "MAGAZINE", "5448bc234bdc2d3c308b4569";
    LightLaserDesignator => "LIGHT_LASER_DESIGNATOR", "55818b0e4bdc2dde698b456e";
    FlashHider => "FLASH_HIDER", "550aa4bf4bdc2dd6348b456b";
    Collimator => "COLLIMATOR", "55818ad54bdc2ddc698b4569";
    IronSight => "IRON_SIGHT", "55818ac54bdc2d5b648b456e";
    CompactCollimator => "COMPACT_COLLIMATOR", "55818acf4bdc2dde698b456b";
    Compensator => "COMPENSATOR", "550aa4af4bdc2dd4348b456e";
    OpticScope => "OPTIC_SCOPE", "55818ae44bdc2dde698b456c";
    SpecialScope => "SPECIAL_SCOPE", "55818aeb4bdc2ddc698b456a";
    Other => "OTHER", "590c745b86f7743cc433c5f2";
    Silencer => "SILENCER", "550aa4cd4bdc2dd8348b456c";
    PortableRangeFinder => "PORTABLE_RANGE_FINDER", "61605ddea09d851a0a0c1bbc";
    CylinderMagazine => "CYLINDER_MAGAZINE", "610720f290b75a49ff2e5e25";
    AuxiliaryMod => "AUXILIARY_MOD", "5a74651486f7744e73386dd1";
    Bipod => "BIPOD", "55818afb4bdc2dde698b456d";
    Headphones => "HEADPHONES", "5645bcb74bdc2ded0b8b4578";
    RandomLootContainer => "RANDOM_LOOT_CONTAINER", "62f109593b54472778797866";
    StackableItem => "STACKABLE_ITEM", "5661632d4bdc2d903d8b456b";
    BuiltInInserts => "BUILT_IN_INSERTS", "65649eb40bf0ed77b8044453";
    ArmorPlate => "ARMOR_PLATE", "644120aa86ffbe10ee032b6f";
    CultistAmulet => "CULTIST_AMULET", "64b69b0c8f3be32ed22682f8";
    RadioTransmitter => "RADIO_TRANSMITTER", "62e9103049c018f425059f38";
    Handguard => "HANDGUARD", "55818a104bdc2db9688b4569";
    PistolGrip => "PISTOL_GRIP", "55818a684bdc2ddd698b456d";
    Receiver => "RECEIVER", "55818a304bdc2db5418b457d";
    Barrel => "BARREL", "555ef6e44bdc2de9068b457e";
    ChargingHandle => "CHARGING_HANDLE", "55818a6f4bdc2db9688b456b";
    CombMuzzleDevice => "COMB_MUZZLE_DEVICE", "550aa4dd4bdc2dc9348b4569";
    HideoutAreaContainer => "HIDEOUT_AREA_CONTAINER", "63da6da4784a55176c018dba";}

static BY_PARENT: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    Category::KNOWN
        .iter()
        .filter_map(|c| c.parent_id().map(|id| (id, *c)))
        .collect()
});

/// Map a parent-type identifier to its category; unrecognised input is [`Category::Unknown`].
pub fn classify(parent_id: &str) -> Category {
    BY_PARENT.get(parent_id).copied().unwrap_or(Category::Unknown)
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

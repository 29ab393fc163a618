use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fleamarket_core::ItemId;

/// All item templates keyed by identifier.
pub type ItemTable = HashMap<ItemId, ItemDefinition>;

/// An item template as exported by the host catalog.
///
/// Items without a properties block are placeholders and never priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(rename = "_id")]
    pub id: ItemId,

    /// Parent-type identifier, used for category classification.
    #[serde(rename = "_parent", default)]
    pub parent: String,

    #[serde(rename = "_props", default, skip_serializing_if = "Option::is_none")]
    pub props: Option<ItemProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemProperties {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Slots", default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Slot>>,
}

/// An attachment slot on an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(rename = "_name", default)]
    pub name: String,

    #[serde(rename = "_required", default)]
    pub required: bool,

    #[serde(rename = "_props", default, skip_serializing_if = "Option::is_none")]
    pub props: Option<SlotProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotProperties {
    #[serde(default)]
    pub filters: Vec<SlotFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotFilter {
    /// Built-in plate occupying the slot, if any.
    #[serde(rename = "Plate", default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<ItemId>,

    #[serde(rename = "Filter", default)]
    pub filter: Vec<ItemId>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            props: Some(ItemProperties::default()),
        }
    }

    /// A template with no properties block (never priced).
    pub fn placeholder(id: impl Into<ItemId>, parent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            props: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.props.get_or_insert_with(ItemProperties::default).name = Some(name.into());
        self
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.props
            .get_or_insert_with(ItemProperties::default)
            .slots
            .get_or_insert_with(Vec::new)
            .push(slot);
        self
    }

    pub fn is_tradeable(&self) -> bool {
        self.props.is_some()
    }

    /// Display name for diagnostics, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.props
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or(self.id.as_str())
    }

    pub fn slots(&self) -> &[Slot] {
        self.props
            .as_ref()
            .and_then(|p| p.slots.as_deref())
            .unwrap_or(&[])
    }

    pub fn has_slots(&self) -> bool {
        self.props.as_ref().is_some_and(|p| p.slots.is_some())
    }
}

impl Slot {
    /// A required slot holding a built-in plate.
    pub fn required_plate(name: impl Into<String>, plate: impl Into<ItemId>) -> Self {
        Self {
            name: name.into(),
            required: true,
            props: Some(SlotProperties {
                filters: vec![SlotFilter {
                    plate: Some(plate.into()),
                    filter: Vec::new(),
                }],
            }),
        }
    }

    /// Plate named by the first filter, regardless of `required`.
    pub fn plate(&self) -> Option<&ItemId> {
        self.props
            .as_ref()
            .and_then(|p| p.filters.first())
            .and_then(|f| f.plate.as_ref())
    }

    /// Required and carrying a plate: the only slots folded into a base price.
    pub fn required_plate_id(&self) -> Option<&ItemId> {
        if self.required { self.plate() } else { None }
    }
}

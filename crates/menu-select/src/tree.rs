//! Selection tree types
//!
//! A [`SelectedModifiers`] tree is created once per customization session by
//! the builder, mutated only through the state machine operations, and read
//! by pricing and diff. Groups and items keep the catalog's insertion order.

use indexmap::IndexMap;
use menu_catalog::EntityRef;
use serde::{Deserialize, Serialize};

/// One selected (or deselected) item inside a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedItem {
    /// Current quantity; zero means deselected
    pub quantity: u32,
    /// Bare id of the chosen intensity modifier or size variant
    ///
    /// Always names a member of the item's own first referenced modifier
    /// group (or one of its size variants). A quantity of zero with a stale
    /// id is a defined state, not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_item_id: Option<String>,
    /// Id of the nested product group this entry was chosen from (accordion)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Nested selection, present only for items composed of sub-ingredients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectedModifiers>,
}

impl SelectedItem {
    /// Entry with the given quantity and nothing else set
    #[inline]
    #[must_use]
    pub fn with_quantity(quantity: u32) -> Self {
        Self {
            quantity,
            ..Self::default()
        }
    }

    /// Whether the item counts as selected
    #[inline]
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.quantity >= 1
    }
}

/// Items of one group, keyed by item reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedGroup(IndexMap<EntityRef, SelectedItem>);

impl SelectedGroup {
    /// Empty group
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Item entry, if present
    #[inline]
    #[must_use]
    pub fn get(&self, item_ref: &EntityRef) -> Option<&SelectedItem> {
        self.0.get(item_ref)
    }

    /// Mutable item entry, if present
    #[inline]
    pub fn get_mut(&mut self, item_ref: &EntityRef) -> Option<&mut SelectedItem> {
        self.0.get_mut(item_ref)
    }

    /// Item entry, inserted as the default entry when missing
    #[inline]
    pub fn entry(&mut self, item_ref: &EntityRef) -> &mut SelectedItem {
        self.0.entry(item_ref.clone()).or_default()
    }

    /// Insert or replace an item entry
    #[inline]
    pub fn insert(&mut self, item_ref: EntityRef, item: SelectedItem) {
        self.0.insert(item_ref, item);
    }

    /// Iterate items in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&EntityRef, &SelectedItem)> {
        self.0.iter()
    }

    /// Iterate items mutably in insertion order
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&EntityRef, &mut SelectedItem)> {
        self.0.iter_mut()
    }

    /// Sum of all item quantities
    #[inline]
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.0.values().map(|item| item.quantity).sum()
    }

    /// Count of items with quantity ≥ 1
    #[inline]
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.0.values().filter(|item| item.is_selected()).count()
    }

    /// Number of entries (selected or not)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the group has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A full selection tree: groups keyed by group reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedModifiers(IndexMap<EntityRef, SelectedGroup>);

impl SelectedModifiers {
    /// Empty tree
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group entry, if present
    #[inline]
    #[must_use]
    pub fn group(&self, group_ref: &EntityRef) -> Option<&SelectedGroup> {
        self.0.get(group_ref)
    }

    /// Mutable group entry, if present
    #[inline]
    pub fn group_mut(&mut self, group_ref: &EntityRef) -> Option<&mut SelectedGroup> {
        self.0.get_mut(group_ref)
    }

    /// Group entry, inserted empty when missing
    #[inline]
    pub fn group_entry(&mut self, group_ref: &EntityRef) -> &mut SelectedGroup {
        self.0.entry(group_ref.clone()).or_default()
    }

    /// Insert or replace a group
    #[inline]
    pub fn insert(&mut self, group_ref: EntityRef, group: SelectedGroup) {
        self.0.insert(group_ref, group);
    }

    /// Item entry addressed by group and item reference
    #[inline]
    #[must_use]
    pub fn item(&self, group_ref: &EntityRef, item_ref: &EntityRef) -> Option<&SelectedItem> {
        self.0.get(group_ref).and_then(|group| group.get(item_ref))
    }

    /// Mutable item entry addressed by group and item reference
    #[inline]
    pub fn item_mut(
        &mut self,
        group_ref: &EntityRef,
        item_ref: &EntityRef,
    ) -> Option<&mut SelectedItem> {
        self.0.get_mut(group_ref).and_then(|group| group.get_mut(item_ref))
    }

    /// Iterate groups in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&EntityRef, &SelectedGroup)> {
        self.0.iter()
    }

    /// Number of groups
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tree has no groups
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

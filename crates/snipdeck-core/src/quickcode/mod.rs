//! The quick code store: CRUD and ordering over user snippet groups.
//!
//! The service owns the full collection, loads it once at construction and
//! is the sole writer afterwards; every mutating call persists immediately
//! through the [`StateStore`] collaborator. Name validation rejections are
//! reported as `Ok(false)` with no mutation so callers can keep their form
//! open.

pub mod models;
pub mod storage;

use crate::error::{Result, SnipdeckError};
use crate::imports;

pub use models::{CodeGroup, CodeItem};
pub use storage::{JsonFileStore, MemoryStore, StateStore};

const FIRST_ORDER: f64 = 1.0;
const ORDER_GAP: f64 = 1.0;

pub struct QuickCodeService<S: StateStore> {
    store: S,
    groups: Vec<CodeGroup>,
}

impl<S: StateStore> QuickCodeService<S> {
    pub fn new(store: S) -> Result<Self> {
        let mut groups = store.load()?;
        sort_state(&mut groups);
        Ok(QuickCodeService { store, groups })
    }

    /// All groups, sorted ascending by order key. Items within each group
    /// are kept sorted the same way.
    pub fn groups(&self) -> &[CodeGroup] {
        &self.groups
    }

    pub fn find_group(&self, name: &str) -> Option<&CodeGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// The persistence collaborator backing this service.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add a new group at the end of the collection.
    /// Rejects a blank name or one already used by an existing group.
    pub fn add_group(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.groups.iter().any(|g| g.name == name) {
            return Ok(false);
        }
        let order = self
            .groups
            .last()
            .map(|g| g.order + ORDER_GAP)
            .unwrap_or(FIRST_ORDER);
        self.groups.push(CodeGroup {
            name: name.to_string(),
            code_items: Vec::new(),
            order,
            enabled: true,
        });
        self.persist()?;
        Ok(true)
    }

    /// Rename and/or toggle a group. Rejects a blank name or a collision
    /// with a different group.
    pub fn edit_group(&mut self, name: &str, new_name: &str, enabled: bool) -> Result<bool> {
        let idx = self.group_index(name)?;
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Ok(false);
        }
        if self
            .groups
            .iter()
            .enumerate()
            .any(|(i, g)| i != idx && g.name == new_name)
        {
            return Ok(false);
        }
        self.groups[idx].name = new_name.to_string();
        self.groups[idx].enabled = enabled;
        self.persist()?;
        Ok(true)
    }

    /// Remove a group and all of its snippets. Removing a group that is
    /// already gone is a no-op.
    pub fn delete_group(&mut self, name: &str) -> Result<()> {
        let before = self.groups.len();
        self.groups.retain(|g| g.name != name);
        if self.groups.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Move a group to `new_index`, recomputing only the moved group's
    /// order key.
    pub fn move_group(&mut self, name: &str, new_index: usize) -> Result<()> {
        let idx = self.group_index(name)?;
        let orders: Vec<f64> = self.groups.iter().map(|g| g.order).collect();
        self.groups[idx].order = reorder_key(&orders, idx, new_index);
        sort_groups(&mut self.groups);
        self.persist()
    }

    /// Add a snippet at the end of a group. Rejects a blank name; imports
    /// and code are normalized from their raw pasted form.
    pub fn add_code_item(
        &mut self,
        group: &str,
        raw_name: &str,
        raw_imports: &str,
        raw_code: &str,
    ) -> Result<bool> {
        let idx = self.group_index(group)?;
        let name = raw_name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        let items = &mut self.groups[idx].code_items;
        let order = items
            .last()
            .map(|i| i.order + ORDER_GAP)
            .unwrap_or(FIRST_ORDER);
        items.push(CodeItem {
            name: name.to_string(),
            imports: imports::parse_imports(raw_imports),
            code: imports::normalize_code(raw_code),
            order,
            enabled: true,
        });
        self.persist()?;
        Ok(true)
    }

    /// Replace a snippet's fields, preserving its order key and enabled
    /// flag. `index` addresses the item in the group's sorted list.
    pub fn edit_code_item(
        &mut self,
        group: &str,
        index: usize,
        raw_name: &str,
        raw_imports: &str,
        raw_code: &str,
    ) -> Result<bool> {
        let gidx = self.group_index(group)?;
        let name = raw_name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        let item = match self.groups[gidx].code_items.get_mut(index) {
            Some(item) => item,
            None => return Ok(false),
        };
        item.name = name.to_string();
        item.imports = imports::parse_imports(raw_imports);
        item.code = imports::normalize_code(raw_code);
        self.persist()?;
        Ok(true)
    }

    pub fn set_code_item_enabled(
        &mut self,
        group: &str,
        index: usize,
        enabled: bool,
    ) -> Result<()> {
        let gidx = self.group_index(group)?;
        if let Some(item) = self.groups[gidx].code_items.get_mut(index) {
            item.enabled = enabled;
            self.persist()?;
        }
        Ok(())
    }

    pub fn delete_code_item(&mut self, group: &str, index: usize) -> Result<()> {
        let gidx = self.group_index(group)?;
        let items = &mut self.groups[gidx].code_items;
        if index < items.len() {
            items.remove(index);
            self.persist()?;
        }
        Ok(())
    }

    /// Move a snippet within its group; same midpoint policy as groups.
    pub fn move_code_item(&mut self, group: &str, index: usize, new_index: usize) -> Result<()> {
        let gidx = self.group_index(group)?;
        let items = &mut self.groups[gidx].code_items;
        if index >= items.len() {
            return Ok(());
        }
        let orders: Vec<f64> = items.iter().map(|i| i.order).collect();
        items[index].order = reorder_key(&orders, index, new_index);
        sort_items(items);
        self.persist()
    }

    fn group_index(&self, name: &str) -> Result<usize> {
        self.groups
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| SnipdeckError::CodeGroupNotFound(name.to_string()))
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.groups)
    }
}

/// New order key for moving the element at `from` (in a sorted order list)
/// to `to`: the midpoint of its new neighbors, or an edge offset at the
/// boundaries. Sibling keys are never rewritten.
fn reorder_key(orders: &[f64], from: usize, to: usize) -> f64 {
    let mut rest: Vec<f64> = orders.to_vec();
    rest.remove(from);
    if rest.is_empty() {
        return FIRST_ORDER;
    }
    let to = to.min(rest.len());
    if to == 0 {
        rest[0] - ORDER_GAP
    } else if to == rest.len() {
        rest[rest.len() - 1] + ORDER_GAP
    } else {
        (rest[to - 1] + rest[to]) / 2.0
    }
}

fn sort_state(groups: &mut [CodeGroup]) {
    sort_groups(groups);
    for group in groups {
        sort_items(&mut group.code_items);
    }
}

fn sort_groups(groups: &mut [CodeGroup]) {
    groups.sort_by(|a, b| a.order.total_cmp(&b.order));
}

fn sort_items(items: &mut [CodeItem]) {
    items.sort_by(|a, b| a.order.total_cmp(&b.order));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> QuickCodeService<MemoryStore> {
        QuickCodeService::new(MemoryStore::new()).unwrap()
    }

    #[test]
    fn add_group_appears_once_with_enabled_default() {
        let mut svc = service();
        assert!(svc.add_group("Sales").unwrap());
        let groups = svc.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Sales");
        assert!(groups[0].enabled);
        assert_eq!(groups[0].order, 1.0);
    }

    #[test]
    fn duplicate_group_name_is_rejected_without_mutation() {
        let mut svc = service();
        assert!(svc.add_group("Sales").unwrap());
        assert!(!svc.add_group("Sales").unwrap());
        assert_eq!(svc.groups().len(), 1);
    }

    #[test]
    fn blank_group_name_is_rejected() {
        let mut svc = service();
        assert!(!svc.add_group("   ").unwrap());
        assert!(svc.groups().is_empty());
    }

    #[test]
    fn edit_group_rejects_collision_with_other_group() {
        let mut svc = service();
        svc.add_group("Sales").unwrap();
        svc.add_group("Auth").unwrap();
        assert!(!svc.edit_group("Auth", "Sales", true).unwrap());
        // Renaming a group to its own name is fine
        assert!(svc.edit_group("Auth", "Auth", false).unwrap());
        assert!(!svc.find_group("Auth").unwrap().enabled);
    }

    #[test]
    fn moving_a_group_to_the_front_offsets_below_the_first_key() {
        let mut svc = service();
        svc.add_group("A").unwrap();
        svc.add_group("B").unwrap();
        svc.add_group("C").unwrap();
        // orders are [1.0, 2.0, 3.0]
        svc.move_group("C", 0).unwrap();
        let groups = svc.groups();
        assert_eq!(groups[0].name, "C");
        assert!(groups[0].order < 1.0);
        assert_eq!(svc.find_group("A").unwrap().order, 1.0);
        assert_eq!(svc.find_group("B").unwrap().order, 2.0);
    }

    #[test]
    fn midpoint_reordering_subdivides_without_renumbering() {
        let mut svc = service();
        svc.add_group("G").unwrap();
        for name in ["a", "b", "c"] {
            assert!(svc.add_code_item("G", name, "", "code").unwrap());
        }
        // item orders are [1.0, 2.0, 3.0]; move the first item to the
        // end -> edge offset 4.0
        svc.move_code_item("G", 0, 2).unwrap();
        let orders: Vec<f64> = svc.find_group("G").unwrap().code_items.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![2.0, 3.0, 4.0]);

        // move the last item between 2.0 and 3.0 -> midpoint 2.5
        svc.move_code_item("G", 2, 1).unwrap();
        let orders: Vec<f64> = svc.find_group("G").unwrap().code_items.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![2.0, 2.5, 3.0]);

        // now move the new last item between 2.0 and 2.5 -> 2.25,
        // with no sibling rewrites
        svc.move_code_item("G", 2, 1).unwrap();
        let orders: Vec<f64> = svc.find_group("G").unwrap().code_items.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![2.0, 2.25, 2.5]);
    }

    #[test]
    fn snippet_moved_between_two_and_four_gets_three() {
        let mut svc = QuickCodeService::new(MemoryStore::with_groups(vec![CodeGroup {
            name: "G".to_string(),
            code_items: vec![
                CodeItem {
                    name: "a".to_string(),
                    imports: vec![],
                    code: "a".to_string(),
                    order: 2.0,
                    enabled: true,
                },
                CodeItem {
                    name: "b".to_string(),
                    imports: vec![],
                    code: "b".to_string(),
                    order: 4.0,
                    enabled: true,
                },
                CodeItem {
                    name: "c".to_string(),
                    imports: vec![],
                    code: "c".to_string(),
                    order: 9.0,
                    enabled: true,
                },
            ],
            order: 1.0,
            enabled: true,
        }]))
        .unwrap();
        svc.move_code_item("G", 2, 1).unwrap();
        assert_eq!(svc.find_group("G").unwrap().code_items[1].order, 3.0);
    }

    #[test]
    fn add_code_item_parses_and_dedups_imports() {
        let mut svc = service();
        svc.add_group("G").unwrap();
        assert!(svc
            .add_code_item("G", "Snippet", "import a.b.C\nimport a.b.C\nimport x.Y", "code()")
            .unwrap());
        let item = &svc.find_group("G").unwrap().code_items[0];
        assert_eq!(item.imports, vec!["a.b.C".to_string(), "x.Y".to_string()]);
    }

    #[test]
    fn add_code_item_rejects_blank_name() {
        let mut svc = service();
        svc.add_group("G").unwrap();
        assert!(!svc.add_code_item("G", "  ", "", "code").unwrap());
        assert!(svc.find_group("G").unwrap().code_items.is_empty());
    }

    #[test]
    fn add_code_item_to_unknown_group_is_an_error() {
        let mut svc = service();
        let err = svc.add_code_item("Nope", "n", "", "c").unwrap_err();
        assert!(matches!(err, SnipdeckError::CodeGroupNotFound(_)));
    }

    #[test]
    fn edit_code_item_preserves_order() {
        let mut svc = service();
        svc.add_group("G").unwrap();
        svc.add_code_item("G", "a", "", "a()").unwrap();
        svc.add_code_item("G", "b", "", "b()").unwrap();
        let order_before = svc.find_group("G").unwrap().code_items[1].order;
        assert!(svc
            .edit_code_item("G", 1, "renamed", "import x.Y", "\n\nnew()\n")
            .unwrap());
        let item = &svc.find_group("G").unwrap().code_items[1];
        assert_eq!(item.name, "renamed");
        assert_eq!(item.imports, vec!["x.Y".to_string()]);
        assert_eq!(item.code, "new()");
        assert_eq!(item.order, order_before);
    }

    #[test]
    fn delete_group_drops_all_its_snippets() {
        let mut svc = service();
        svc.add_group("G").unwrap();
        svc.add_group("H").unwrap();
        svc.add_code_item("G", "a", "", "a").unwrap();
        svc.add_code_item("G", "b", "", "b").unwrap();
        svc.add_code_item("H", "c", "", "c").unwrap();
        let total: usize = svc.groups().iter().map(|g| g.code_items.len()).sum();
        assert_eq!(total, 3);

        svc.delete_group("G").unwrap();
        assert_eq!(svc.groups().len(), 1);
        let total: usize = svc.groups().iter().map(|g| g.code_items.len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn every_mutation_persists_immediately() {
        let mut svc = service();
        svc.add_group("G").unwrap();
        assert_eq!(svc.store.save_count(), 1);
        svc.add_code_item("G", "a", "", "a").unwrap();
        assert_eq!(svc.store.save_count(), 2);
        svc.set_code_item_enabled("G", 0, false).unwrap();
        assert_eq!(svc.store.save_count(), 3);
        svc.delete_code_item("G", 0).unwrap();
        assert_eq!(svc.store.save_count(), 4);
        // rejected validation does not write
        svc.add_group("G").unwrap();
        assert_eq!(svc.store.save_count(), 4);
        // deleting a vanished target does not write either
        svc.delete_group("Missing").unwrap();
        assert_eq!(svc.store.save_count(), 4);
    }

    #[test]
    fn state_reloads_sorted_by_order() {
        let store = MemoryStore::with_groups(vec![
            CodeGroup {
                name: "second".to_string(),
                code_items: vec![],
                order: 2.0,
                enabled: true,
            },
            CodeGroup {
                name: "first".to_string(),
                code_items: vec![],
                order: 0.5,
                enabled: false,
            },
        ]);
        let svc = QuickCodeService::new(store).unwrap();
        let names: Vec<&str> = svc.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}

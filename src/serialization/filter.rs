//! Attribute filtering over the JSON form of a resource.
//!
//! Works on the already merged JSON object so that core attributes,
//! extension objects and arbitrary complex attributes are handled alike.
//! Key matching is ASCII case-insensitive.

use crate::serialization::options::Selection;
use crate::serialization::path::AttributePath;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A set of attribute paths arranged by key.
///
/// A node marked `whole` selects its entire sub-tree.
#[derive(Debug, Default)]
struct PathTree {
    whole: bool,
    children: BTreeMap<String, PathTree>,
}

impl PathTree {
    fn from_keys<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut tree = Self::default();
        for keys in paths {
            tree.insert(keys);
        }
        tree
    }

    fn insert(&mut self, keys: &[String]) {
        let mut node = self;
        for key in keys {
            node = node.children.entry(key.to_ascii_lowercase()).or_default();
        }
        node.whole = true;
    }

    fn child(&self, key: &str) -> Option<&PathTree> {
        self.children.get(&key.to_ascii_lowercase())
    }
}

/// Apply a selection to a resource's JSON object.
///
/// `always_returned` top-level attributes survive any selection and
/// `never_returned` paths are dropped in every mode.
pub(crate) fn apply(
    value: Value,
    selection: &Selection,
    always_returned: &[String],
    never_returned: &[String],
) -> Value {
    let Value::Object(mut object) = value else {
        return value;
    };

    match selection {
        Selection::All => {}
        Selection::Include(paths) => {
            let tree = PathTree::from_keys(paths.iter().map(AttributePath::keys));
            let mut kept = retain_object(&object, &tree);
            for (key, value) in object {
                if is_listed(always_returned, &key) {
                    kept.insert(key, value);
                }
            }
            object = kept;
        }
        Selection::Exclude(paths) => {
            let tree = PathTree::from_keys(paths.iter().map(AttributePath::keys));
            remove_from_object(&mut object, &tree, always_returned);
        }
    }

    let never: Vec<Vec<String>> = never_returned
        .iter()
        .map(|path| path.split('.').map(str::to_string).collect())
        .collect();
    let tree = PathTree::from_keys(never.iter().map(Vec::as_slice));
    remove_from_object(&mut object, &tree, &[]);

    Value::Object(object)
}

fn is_listed(list: &[String], key: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(key))
}

fn retain_object(object: &Map<String, Value>, tree: &PathTree) -> Map<String, Value> {
    let mut kept = Map::new();
    for (key, value) in object {
        let Some(node) = tree.child(key) else {
            continue;
        };
        if node.whole {
            kept.insert(key.clone(), value.clone());
        } else if let Some(value) = retain_value(value, node) {
            kept.insert(key.clone(), value);
        }
    }
    kept
}

fn retain_value(value: &Value, tree: &PathTree) -> Option<Value> {
    match value {
        Value::Object(object) => {
            let kept = retain_object(object, tree);
            (!kept.is_empty()).then_some(Value::Object(kept))
        }
        Value::Array(items) => {
            let kept: Vec<Value> = items
                .iter()
                .filter_map(|item| retain_value(item, tree))
                .collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        _ => None,
    }
}

fn remove_from_object(object: &mut Map<String, Value>, tree: &PathTree, protected: &[String]) {
    let keys: Vec<String> = object.keys().cloned().collect();
    for key in keys {
        let Some(node) = tree.child(&key) else {
            continue;
        };
        if is_listed(protected, &key) {
            continue;
        }

        let emptied = if node.whole {
            true
        } else {
            object
                .get_mut(&key)
                .is_some_and(|value| remove_from_value(value, node))
        };
        if emptied {
            object.remove(&key);
        }
    }
}

/// Returns true when filtering emptied a previously non-empty value.
fn remove_from_value(value: &mut Value, tree: &PathTree) -> bool {
    match value {
        Value::Object(object) => {
            let had_content = !object.is_empty();
            remove_from_object(object, tree, &[]);
            had_content && object.is_empty()
        }
        Value::Array(items) => {
            let had_content = !items.is_empty();
            items.retain_mut(|item| match item {
                Value::Object(object) => {
                    let item_had_content = !object.is_empty();
                    remove_from_object(object, tree, &[]);
                    !(item_had_content && object.is_empty())
                }
                _ => true,
            });
            had_content && items.is_empty()
        }
        _ => false,
    }
}

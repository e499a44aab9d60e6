//! Property tests: random operation sequences against tree invariants

use fs_tree::{Entry, EntryId, EntryPath};
use proptest::prelude::*;
use services_namespace::{Namespace, NamespaceOperations};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone)]
enum Op {
    File(String, Option<String>),
    Dir(String, Option<String>),
    Delete(String),
    Move(String, String),
}

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]).prop_map(str::to_string)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (name(), prop::option::of(name())).prop_map(|(n, p)| Op::File(n, p)),
        (name(), prop::option::of(name())).prop_map(|(n, p)| Op::Dir(n, p)),
        name().prop_map(Op::Delete),
        (name(), name()).prop_map(|(n, d)| Op::Move(n, d)),
    ]
}

fn apply(ns: &mut Namespace, op: &Op) {
    // Failures are expected for random input; only the invariants matter
    let _ = match op {
        Op::File(n, p) => ns.create_file(n, p.as_deref()).map(|_| ()),
        Op::Dir(n, p) => ns.create_directory(n, p.as_deref()).map(|_| ()),
        Op::Delete(n) => ns.delete(n).map(|_| ()),
        Op::Move(n, d) => ns.move_entry(n, d).map(|_| ()),
    };
}

/// Every (path, entry) pair reachable from the roots
fn walk(ns: &Namespace) -> Vec<(EntryPath, &Entry)> {
    let mut out = Vec::new();
    for root in ns.roots() {
        let mut trail: Vec<&str> = Vec::new();
        for (depth, entry) in root.iter() {
            trail.truncate(depth);
            trail.push(entry.name());
            out.push((EntryPath::from_components(trail.iter().copied()), entry));
        }
    }
    out
}

proptest! {
    #[test]
    fn sibling_names_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut ns = Namespace::new();
        for op in &ops {
            apply(&mut ns, op);
        }

        let top: Vec<&str> = ns.roots().into_iter().map(Entry::name).collect();
        let unique: BTreeSet<&str> = top.iter().copied().collect();
        prop_assert_eq!(top.len(), unique.len());

        for (_, entry) in walk(&ns) {
            if let Some(dir) = entry.as_directory() {
                let names = dir.child_names();
                let unique: BTreeSet<&str> = names.iter().copied().collect();
                prop_assert_eq!(names.len(), unique.len());
            }
        }
    }

    #[test]
    fn every_entry_appears_once(ops in prop::collection::vec(op(), 0..40)) {
        let mut ns = Namespace::new();
        for op in &ops {
            apply(&mut ns, op);
        }

        let mut seen: HashSet<EntryId> = HashSet::new();
        for (path, entry) in walk(&ns) {
            prop_assert!(seen.insert(entry.id()), "{} reachable twice", path);
        }
        prop_assert_eq!(seen.len(), ns.entry_count());
    }

    #[test]
    fn index_matches_reachable_directories(ops in prop::collection::vec(op(), 0..40)) {
        let mut ns = Namespace::new();
        for op in &ops {
            apply(&mut ns, op);
        }

        let reachable: BTreeSet<EntryPath> = walk(&ns)
            .into_iter()
            .filter(|(_, entry)| entry.is_directory())
            .map(|(path, _)| path)
            .collect();
        let indexed: BTreeSet<EntryPath> =
            ns.directory_index().locations().cloned().collect();

        prop_assert_eq!(indexed, reachable);
    }

    #[test]
    fn locate_returns_full_ancestry(depth in 1usize..12) {
        let mut ns = Namespace::new();
        let mut expected = String::new();
        let mut parent: Option<String> = None;

        for level in 0..depth {
            let dir = format!("d{}", level);
            ns.create_directory(&dir, parent.as_deref()).unwrap();
            expected.push('/');
            expected.push_str(&dir);
            parent = Some(dir);
        }
        ns.create_file("leaf", parent.as_deref()).unwrap();
        expected.push_str("/leaf");

        prop_assert_eq!(ns.locate("leaf").unwrap().to_string(), expected);
    }
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let mut ns = Namespace::new();
    let mut parent: Option<String> = None;
    for level in 0..1_000 {
        let dir = format!("d{}", level);
        ns.create_directory(&dir, parent.as_deref()).unwrap();
        parent = Some(dir);
    }

    assert!(ns.exists("d999"));
    assert_eq!(ns.locate("d999").unwrap().depth(), 1_000);
    assert_eq!(ns.render_tree().lines().count(), 1_000);
}

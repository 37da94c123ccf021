mod common;

use common::{engine, link_rows, sorted, targets_of, TestEngine};
use wbasket_core::Workbasket;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn redeclare(t: &TestEngine, id: &str, targets: &[&str]) -> Workbasket {
    let mut wb = t.workbaskets().get(id).expect("get should succeed");
    wb.distribution_targets = ids(targets);
    t.workbaskets().update(wb).expect("update should succeed")
}

#[test]
fn update_converges_on_declared_targets() {
    let cases: &[(&[&str], &[&str])] = &[
        (&[], &["T-1"]),
        (&["T-1"], &[]),
        (&["T-1", "T-2"], &["T-2", "T-3"]),
        (&["T-1", "T-2", "T-3"], &["T-3", "T-1"]),
        (&["T-1"], &["T-4", "T-5", "T-6"]),
        (&["T-1", "T-2"], &["T-2", "T-1"]),
    ];

    for (before, after) in cases {
        let t = engine(false);
        t.workbaskets()
            .create(Workbasket::new("WBI-src", "Source").with_targets(before.iter().copied()))
            .expect("create should succeed");

        let updated = redeclare(&t, "WBI-src", after);

        let expected = sorted(ids(after));
        assert_eq!(targets_of(&t, "WBI-src"), expected, "{before:?} -> {after:?}");
        assert_eq!(sorted(updated.distribution_targets), expected);
        for target in *after {
            assert!(t.workbaskets().get(target).is_ok(), "{target} should exist");
        }
    }
}

#[test]
fn empty_declaration_removes_every_link() {
    let t = engine(false);
    t.workbaskets()
        .create(Workbasket::new("WBI-src", "Source").with_targets(["T-1", "T-2", "T-3"]))
        .expect("create should succeed");

    let updated = redeclare(&t, "WBI-src", &[]);

    assert!(updated.distribution_targets.is_empty());
    assert!(link_rows(&t, "WBI-src").is_empty());
}

#[test]
fn unchanged_declaration_leaves_links_untouched() {
    let t = engine(false);
    t.workbaskets()
        .create(Workbasket::new("WBI-src", "Source").with_targets(["T-1", "T-2"]))
        .expect("create should succeed");
    let before = link_rows(&t, "WBI-src");

    redeclare(&t, "WBI-src", &["T-2", "T-1"]);

    assert_eq!(link_rows(&t, "WBI-src"), before);
}

#[test]
fn only_the_difference_is_written() {
    let t = engine(false);
    t.workbaskets()
        .create(Workbasket::new("WBI-src", "Source").with_targets(["T-1", "T-2", "T-3"]))
        .expect("create should succeed");
    let kept: Vec<(i64, String)> = link_rows(&t, "WBI-src")
        .into_iter()
        .filter(|(_, target)| target != "T-1")
        .collect();

    redeclare(&t, "WBI-src", &["T-2", "T-3", "T-4"]);

    let after = link_rows(&t, "WBI-src");
    assert_eq!(
        after.iter().map(|(_, t)| t.as_str()).collect::<Vec<_>>(),
        vec!["T-2", "T-3", "T-4"]
    );
    for link in &kept {
        assert!(after.contains(link), "{link:?} should keep its row");
    }
}

#[test]
fn duplicate_declarations_produce_one_link() {
    let t = engine(false);
    t.workbaskets()
        .create(Workbasket::new("WBI-src", "Source"))
        .expect("create should succeed");

    redeclare(&t, "WBI-src", &["T-1", "T-1", "T-2"]);

    assert_eq!(targets_of(&t, "WBI-src"), vec!["T-1", "T-2"]);
}

#[test]
fn self_link_is_allowed() {
    let t = engine(false);
    t.workbaskets()
        .create(Workbasket::new("WBI-loop", "Loop").with_targets(["WBI-loop"]))
        .expect("create should succeed");

    assert_eq!(targets_of(&t, "WBI-loop"), vec!["WBI-loop"]);
    assert_eq!(
        t.workbaskets().get("WBI-loop").expect("get should succeed").name,
        "Loop"
    );
}

#[test]
fn links_are_per_source() {
    let t = engine(false);
    t.workbaskets()
        .create(Workbasket::new("WBI-a", "A").with_targets(["T-shared"]))
        .expect("create should succeed");
    t.workbaskets()
        .create(Workbasket::new("WBI-b", "B").with_targets(["T-shared"]))
        .expect("create should succeed");

    redeclare(&t, "WBI-a", &[]);

    assert!(targets_of(&t, "WBI-a").is_empty());
    assert_eq!(targets_of(&t, "WBI-b"), vec!["T-shared"]);
}

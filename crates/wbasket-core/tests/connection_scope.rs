mod common;

use common::{engine_with_pool_size, targets_of};
use wbasket_core::{AccessItem, Permission, PrincipalContext, Workbasket};

#[test]
fn single_connection_pool_survives_failures() {
    let t = engine_with_pool_size(true, 1);

    for _ in 0..5 {
        assert!(t.workbaskets().get("WBI-missing").is_err());
        assert!(t.workbaskets().delete("WBI-missing").is_err());
        assert!(t
            .workbaskets()
            .update(Workbasket::new("WBI-missing", "x"))
            .is_err());
        assert!(t.access().create(AccessItem::new("WBI-missing", "u")).is_err());
        assert!(t
            .workbaskets()
            .check_authorization("WBI-missing", Permission::Read, &PrincipalContext::new("u"))
            .is_err());
    }

    t.workbaskets()
        .create(Workbasket::new("WBI-1", "After failures"))
        .expect("pool should still hand out its connection");
}

#[test]
fn failed_create_leaves_nothing_behind() {
    let t = engine_with_pool_size(false, 1);
    t.workbaskets()
        .create(Workbasket::new("WBI-1", "First"))
        .expect("create should succeed");

    let dup = Workbasket::new("WBI-1", "Second").with_targets(["WBI-new-target"]);
    assert!(t.workbaskets().create(dup).is_err());

    assert!(t.workbaskets().get("WBI-new-target").is_err());
    assert!(targets_of(&t, "WBI-1").is_empty());
    assert_eq!(
        t.workbaskets().get("WBI-1").expect("get should succeed").name,
        "First"
    );
}

#[test]
fn engine_clones_share_the_database() {
    let t = engine_with_pool_size(false, 2);
    let other = t.engine.clone();

    other
        .workbaskets()
        .create(Workbasket::new("WBI-shared", "Shared"))
        .expect("create should succeed");

    assert_eq!(
        t.workbaskets().get("WBI-shared").expect("get should succeed").name,
        "Shared"
    );
}

#[test]
fn concurrent_creates_all_land() {
    let t = engine_with_pool_size(false, 4);

    std::thread::scope(|s| {
        for n in 0..4 {
            let engine = t.engine.clone();
            s.spawn(move || {
                for i in 0..5 {
                    engine
                        .workbaskets()
                        .create(Workbasket::new(format!("WBI-{n}-{i}"), "Concurrent"))
                        .expect("create should succeed");
                }
            });
        }
    });

    assert_eq!(t.workbaskets().list_all().expect("list should succeed").len(), 20);
}

mod common;

use common::{engine, sorted, TestEngine};
use wbasket_core::{AccessItem, Permission, PrincipalContext, ServiceError, Workbasket};

fn grant(t: &TestEngine, workbasket_id: &str, access_id: &str, permissions: &[Permission]) {
    t.access()
        .create(AccessItem::new(workbasket_id, access_id).with_permissions(permissions.iter().copied()))
        .expect("grant should succeed");
}

fn setup(security_enabled: bool) -> TestEngine {
    let t = engine(security_enabled);
    for id in ["WBI-1", "WBI-2", "WBI-3"] {
        t.workbaskets()
            .create(Workbasket::new(id, id))
            .expect("create should succeed");
    }
    t
}

fn visible_ids(t: &TestEngine, ctx: &PrincipalContext, permissions: &[Permission]) -> Vec<String> {
    sorted(
        t.workbaskets()
            .list_by_permission(permissions, ctx)
            .expect("list should succeed")
            .into_iter()
            .map(|wb| wb.id)
            .collect(),
    )
}

#[test]
fn disabled_security_passes_everything() {
    let t = engine(false);
    let ctx = PrincipalContext::new("nobody");
    for permission in Permission::ALL {
        t.workbaskets()
            .check_authorization("WBI-does-not-exist", permission, &ctx)
            .expect("check should pass with security disabled");
    }
}

#[test]
fn missing_grant_is_not_authorized() {
    let t = setup(true);
    let ctx = PrincipalContext::new("user_1").with_groups(["group_1"]);

    let err = t
        .workbaskets()
        .check_authorization("WBI-1", Permission::Append, &ctx)
        .expect_err("should be denied");
    match err {
        ServiceError::NotAuthorized {
            principal,
            permission,
            workbasket_id,
        } => {
            assert_eq!(principal, "user_1");
            assert_eq!(permission, Permission::Append);
            assert_eq!(workbasket_id, "WBI-1");
        }
        other => panic!("expected NotAuthorized, got {other:?}"),
    }
}

#[test]
fn grant_to_principal_is_honoured() {
    let t = setup(true);
    grant(&t, "WBI-1", "user_1", &[Permission::Open]);
    let ctx = PrincipalContext::new("user_1");

    t.workbaskets()
        .check_authorization("WBI-1", Permission::Open, &ctx)
        .expect("direct grant should pass");
}

#[test]
fn grant_to_group_is_honoured() {
    let t = setup(true);
    grant(&t, "WBI-1", "group_2", &[Permission::Transfer]);
    let ctx = PrincipalContext::new("user_1").with_groups(["group_1", "group_2"]);

    t.workbaskets()
        .check_authorization("WBI-1", Permission::Transfer, &ctx)
        .expect("group grant should pass");
}

#[test]
fn grant_is_scoped_to_permission_and_workbasket() {
    let t = setup(true);
    grant(&t, "WBI-1", "user_1", &[Permission::Read]);
    let ctx = PrincipalContext::new("user_1");

    assert!(t
        .workbaskets()
        .check_authorization("WBI-1", Permission::Distribute, &ctx)
        .is_err());
    assert!(t
        .workbaskets()
        .check_authorization("WBI-2", Permission::Read, &ctx)
        .is_err());
}

#[test]
fn revoked_grant_stops_passing() {
    let t = setup(true);
    let item = t
        .access()
        .create(AccessItem::new("WBI-1", "user_1").with_permissions([Permission::Read]))
        .expect("grant should succeed");
    let ctx = PrincipalContext::new("user_1");
    assert!(t
        .workbaskets()
        .check_authorization("WBI-1", Permission::Read, &ctx)
        .is_ok());

    t.access().delete(&item.id).expect("delete should succeed");

    assert!(t
        .workbaskets()
        .check_authorization("WBI-1", Permission::Read, &ctx)
        .is_err());
}

#[test]
fn list_by_permission_merges_access_ids_without_duplicates() {
    let t = setup(true);
    grant(&t, "WBI-1", "user_1", &[Permission::Read]);
    grant(&t, "WBI-1", "group_1", &[Permission::Read, Permission::Open]);
    grant(&t, "WBI-2", "group_1", &[Permission::Open]);
    grant(&t, "WBI-3", "user_2", &[Permission::Read]);
    let ctx = PrincipalContext::new("user_1").with_groups(["group_1"]);

    assert_eq!(visible_ids(&t, &ctx, &[Permission::Read]), vec!["WBI-1"]);
    assert_eq!(visible_ids(&t, &ctx, &[Permission::Read, Permission::Open]), vec!["WBI-1", "WBI-2"]);
    assert_eq!(
        visible_ids(&t, &ctx, &[Permission::Open, Permission::Read]),
        visible_ids(&t, &ctx, &[Permission::Read, Permission::Open])
    );
    assert!(visible_ids(&t, &ctx, &[Permission::Distribute]).is_empty());
    assert!(visible_ids(&t, &ctx, &[]).is_empty());
}

#[test]
fn list_by_permission_does_not_check_security_flag() {
    let t = setup(false);
    grant(&t, "WBI-2", "user_1", &[Permission::Append]);
    let ctx = PrincipalContext::new("user_1");

    let found = t
        .workbaskets()
        .list_by_permission(&[Permission::Append], &ctx)
        .expect("list should succeed");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "WBI-2");
}

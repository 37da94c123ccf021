//! Column enumerations for the three workbasket tables.
//!
//! Declaration order is significant: column lists, insert value tuples and
//! row mappers in `wbasket-core` all follow it.

use wbasket_types::Permission;

/// A fixed, ordered enumeration of the columns of one table.
pub trait ColumnSet: Copy + PartialEq + 'static {
    /// Name of the table the columns belong to.
    const TABLE: &'static str;

    /// All columns in declaration order.
    fn all() -> &'static [Self];

    /// The column name as it appears in SQL.
    fn name(self) -> &'static str;
}

/// Joins every column of `C` except `excluding`, in declaration order.
pub fn column_list<C: ColumnSet>(excluding: &[C]) -> String {
    C::all()
        .iter()
        .filter(|column| !excluding.contains(column))
        .map(|column| column.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Like [`column_list`], with each column prefixed by a table alias.
pub fn qualified_column_list<C: ColumnSet>(alias: &str, excluding: &[C]) -> String {
    C::all()
        .iter()
        .filter(|column| !excluding.contains(column))
        .map(|column| format!("{alias}.{}", column.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Columns of a workbasket as seen by queries.
///
/// `DistributionTargets` and `Permissions` are not stored in the
/// `WORKBASKET` row; they live in the link and access tables and are always
/// excluded from the base row via [`WorkbasketColumn::NOT_IN_ROW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkbasketColumn {
    Id,
    Created,
    Modified,
    Name,
    LongName,
    Description,
    Owner,
    Email,
    Phone,
    OrgLevel1,
    OrgLevel2,
    OrgLevel3,
    OrgLevel4,
    Data,
    DistributionTargets,
    Permissions,
}

impl WorkbasketColumn {
    /// Columns that belong to other tables.
    pub const NOT_IN_ROW: [WorkbasketColumn; 2] = [Self::DistributionTargets, Self::Permissions];

    /// Columns an update must never touch, on top of [`Self::NOT_IN_ROW`].
    pub const IMMUTABLE: [WorkbasketColumn; 2] = [Self::Id, Self::Created];
}

impl ColumnSet for WorkbasketColumn {
    const TABLE: &'static str = "WORKBASKET";

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::Created,
            Self::Modified,
            Self::Name,
            Self::LongName,
            Self::Description,
            Self::Owner,
            Self::Email,
            Self::Phone,
            Self::OrgLevel1,
            Self::OrgLevel2,
            Self::OrgLevel3,
            Self::OrgLevel4,
            Self::Data,
            Self::DistributionTargets,
            Self::Permissions,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Created => "CREATED",
            Self::Modified => "MODIFIED",
            Self::Name => "NAME",
            Self::LongName => "LONG_NAME",
            Self::Description => "DESCRIPTION",
            Self::Owner => "OWNER",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::OrgLevel1 => "ORG_LEVEL_1",
            Self::OrgLevel2 => "ORG_LEVEL_2",
            Self::OrgLevel3 => "ORG_LEVEL_3",
            Self::OrgLevel4 => "ORG_LEVEL_4",
            Self::Data => "DATA",
            Self::DistributionTargets => "DISTRIBUTION_TARGETS",
            Self::Permissions => "PERMISSIONS",
        }
    }
}

/// Columns of the source/target link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionColumn {
    SourceId,
    TargetId,
}

impl ColumnSet for DistributionColumn {
    const TABLE: &'static str = "DISTRIBUTION_TARGETS";

    fn all() -> &'static [Self] {
        &[Self::SourceId, Self::TargetId]
    }

    fn name(self) -> &'static str {
        match self {
            Self::SourceId => "SOURCE_ID",
            Self::TargetId => "TARGET_ID",
        }
    }
}

/// Columns of an access-control entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessColumn {
    Id,
    WorkbasketId,
    AccessId,
    PermRead,
    PermOpen,
    PermAppend,
    PermTransfer,
    PermDistribute,
}

impl AccessColumn {
    /// Columns an update must never touch.
    pub const IMMUTABLE: [AccessColumn; 2] = [Self::Id, Self::WorkbasketId];

    /// The flag column that stores `permission`.
    pub fn for_permission(permission: Permission) -> Self {
        match permission {
            Permission::Read => Self::PermRead,
            Permission::Open => Self::PermOpen,
            Permission::Append => Self::PermAppend,
            Permission::Transfer => Self::PermTransfer,
            Permission::Distribute => Self::PermDistribute,
        }
    }
}

impl ColumnSet for AccessColumn {
    const TABLE: &'static str = "WORKBASKET_ACCESS_LIST";

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::WorkbasketId,
            Self::AccessId,
            Self::PermRead,
            Self::PermOpen,
            Self::PermAppend,
            Self::PermTransfer,
            Self::PermDistribute,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::WorkbasketId => "WORKBASKET_ID",
            Self::AccessId => "ACCESS_ID",
            Self::PermRead => "PERM_READ",
            Self::PermOpen => "PERM_OPEN",
            Self::PermAppend => "PERM_APPEND",
            Self::PermTransfer => "PERM_TRANSFER",
            Self::PermDistribute => "PERM_DISTRIBUTE",
        }
    }
}

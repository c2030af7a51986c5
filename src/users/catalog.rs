//! Fixed set of known users. The first entry is the sentinel served whenever
//! a lookup finds nothing.

pub const DEFAULT_USER_ID: i64 = 999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: &'static str,
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: DEFAULT_USER_ID, name: "Default" },
    CatalogEntry { id: 1, name: "Adam" },
    CatalogEntry { id: 2, name: "Ben" },
    CatalogEntry { id: 3, name: "Chris" },
];

pub fn default_entry() -> &'static CatalogEntry {
    &CATALOG[0]
}

/// First entry with `id`, in catalog order.
pub fn find(id: i64) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}

// Data loader for the embedded catalog
// The default emoji catalog ships inside the binary

/// Embedded catalog data (JSON array of emoji records)
pub const CATALOG_DATA: &str = include_str!("../data/catalog.json");

/// Data loader utility
pub struct DataLoader;

impl DataLoader {
    /// Get the embedded catalog document
    pub fn catalog_data() -> &'static str {
        CATALOG_DATA
    }

    /// Size of the embedded catalog in bytes
    pub fn catalog_size() -> usize {
        CATALOG_DATA.len()
    }
}

//! Transaction constants and category validation.

/// Allowed expense categories.
///
/// The labels are part of the wire format and must stay verbatim; clients
/// and stored documents reference them by exact string.
pub const ALLOWED_CATEGORIES: [&str; 8] = [
    "Makanan & Minuman",
    "Transportasi",
    "Belanja",
    "Tagihan",
    "Hiburan",
    "Pendidikan",
    "Kesehatan",
    "Lainnya",
];

/// Calendar date format accepted for transaction dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks whether `category` is an allowed expense category.
///
/// The match is case-sensitive and exact; anything outside the fixed set
/// is rejected.
pub fn is_valid_category(category: &str) -> bool {
    ALLOWED_CATEGORIES.contains(&category)
}

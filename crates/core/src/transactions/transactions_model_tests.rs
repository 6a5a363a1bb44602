//! Tests for transaction models, category validation, and date parsing.

#[cfg(test)]
mod tests {
    use crate::transactions::{
        is_valid_category, parse_tanggal, TransactionType, ALLOWED_CATEGORIES,
    };
    use chrono::NaiveDate;

    // ==================== Category Validation Tests ====================

    #[test]
    fn test_all_allowed_categories_are_valid() {
        for category in ALLOWED_CATEGORIES {
            assert!(is_valid_category(category), "{} should be valid", category);
        }
    }

    #[test]
    fn test_allowed_categories_count_and_order() {
        assert_eq!(ALLOWED_CATEGORIES.len(), 8);
        assert_eq!(ALLOWED_CATEGORIES[0], "Makanan & Minuman");
        assert_eq!(ALLOWED_CATEGORIES[7], "Lainnya");
    }

    #[test]
    fn test_unknown_category_is_invalid() {
        assert!(!is_valid_category("Groceries"));
        assert!(!is_valid_category(""));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        assert!(is_valid_category("Tagihan"));
        assert!(!is_valid_category("tagihan"));
        assert!(!is_valid_category("TAGIHAN"));
        assert!(!is_valid_category("Makanan & minuman"));
    }

    #[test]
    fn test_category_no_trimming() {
        assert!(!is_valid_category(" Tagihan"));
        assert!(!is_valid_category("Tagihan "));
    }

    // ==================== Date Parsing Tests ====================

    #[test]
    fn test_parse_tanggal_valid() {
        assert_eq!(
            parse_tanggal("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_tanggal_rejects_other_formats() {
        assert!(parse_tanggal("15-03-2024").is_err());
        assert!(parse_tanggal("2024/03/15").is_err());
        assert!(parse_tanggal("2024-3-15").is_err());
        assert!(parse_tanggal("March 15, 2024").is_err());
        assert!(parse_tanggal("").is_err());
    }

    #[test]
    fn test_parse_tanggal_requires_zero_padding() {
        assert!(parse_tanggal("2024-3-15").is_err());
        assert!(parse_tanggal("2024-03-5").is_err());
        assert!(parse_tanggal("2024-3-5").is_err());
        assert!(parse_tanggal("24-03-15").is_err());
    }

    #[test]
    fn test_parse_tanggal_rejects_invalid_calendar_dates() {
        assert!(parse_tanggal("2024-02-30").is_err());
        assert!(parse_tanggal("2024-13-01").is_err());
        assert!(parse_tanggal("2024-00-10").is_err());
    }

    // ==================== TransactionType Serialization Tests ====================

    #[test]
    fn test_transaction_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Pemasukan).unwrap(),
            "\"pemasukan\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Pengeluaran).unwrap(),
            "\"pengeluaran\""
        );
    }

    #[test]
    fn test_transaction_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"pemasukan\"").unwrap(),
            TransactionType::Pemasukan
        );
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"pengeluaran\"").unwrap(),
            TransactionType::Pengeluaran
        );
        assert!(serde_json::from_str::<TransactionType>("\"income\"").is_err());
    }
}

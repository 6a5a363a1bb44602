//! Tests for the statistics aggregation functions.

#[cfg(test)]
mod tests {
    use crate::stats::{ExpenseByCategory, IncomeVsExpense, Summary};
    use crate::transactions::{Transaction, TransactionType};
    use chrono::{NaiveDate, Utc};

    fn tx(tipe: TransactionType, nominal: f64, kategori: &str) -> Transaction {
        Transaction {
            id: "tx".to_string(),
            user_id: "user-1".to_string(),
            tipe,
            nominal,
            kategori: kategori.to_string(),
            catatan: String::new(),
            tanggal: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn income(nominal: f64) -> Transaction {
        tx(TransactionType::Pemasukan, nominal, "")
    }

    fn expense(nominal: f64, kategori: &str) -> Transaction {
        tx(TransactionType::Pengeluaran, nominal, kategori)
    }

    // ==================== Summary Tests ====================

    #[test]
    fn test_summary_empty_is_all_zeros() {
        let summary = Summary::from_transactions(&[]);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_summary_income_minus_expense() {
        let summary = Summary::from_transactions(&[income(100.0), expense(40.0, "Tagihan")]);
        assert_eq!(summary.total_pemasukan, 100.0);
        assert_eq!(summary.total_pengeluaran, 40.0);
        assert_eq!(summary.saldo, 60.0);
    }

    #[test]
    fn test_summary_bills_scenario() {
        let transactions = vec![
            expense(50_000.0, "Tagihan"),
            expense(25_000.0, "Tagihan"),
            income(200_000.0),
        ];
        let summary = Summary::from_transactions(&transactions);
        assert_eq!(summary.total_pemasukan, 200_000.0);
        assert_eq!(summary.total_pengeluaran, 75_000.0);
        assert_eq!(summary.saldo, 125_000.0);
    }

    // ==================== ExpenseByCategory Tests ====================

    #[test]
    fn test_expense_by_category_empty() {
        let result = ExpenseByCategory::from_transactions(&[]);
        assert!(result.categories.is_empty());
        assert_eq!(result.grand_total, 0.0);
    }

    #[test]
    fn test_expense_by_category_ignores_income() {
        let result = ExpenseByCategory::from_transactions(&[income(500_000.0)]);
        assert!(result.categories.is_empty());
        assert_eq!(result.grand_total, 0.0);
    }

    #[test]
    fn test_expense_by_category_single_category() {
        let transactions = vec![
            expense(50_000.0, "Tagihan"),
            expense(25_000.0, "Tagihan"),
            income(200_000.0),
        ];
        let result = ExpenseByCategory::from_transactions(&transactions);
        assert_eq!(result.grand_total, 75_000.0);
        assert_eq!(result.categories.len(), 1);
        let bills = &result.categories[0];
        assert_eq!(bills.kategori, "Tagihan");
        assert_eq!(bills.total, 75_000.0);
        assert_eq!(bills.count, 2);
        assert_eq!(bills.percentage, 100.0);
    }

    #[test]
    fn test_expense_by_category_sorted_by_total_desc() {
        let transactions = vec![
            expense(10_000.0, "Hiburan"),
            expense(60_000.0, "Tagihan"),
            expense(30_000.0, "Transportasi"),
        ];
        let result = ExpenseByCategory::from_transactions(&transactions);
        let order: Vec<&str> = result
            .categories
            .iter()
            .map(|c| c.kategori.as_str())
            .collect();
        assert_eq!(order, vec!["Tagihan", "Transportasi", "Hiburan"]);
    }

    #[test]
    fn test_expense_by_category_ties_broken_by_name() {
        let transactions = vec![
            expense(20_000.0, "Transportasi"),
            expense(20_000.0, "Belanja"),
            expense(20_000.0, "Hiburan"),
        ];
        let result = ExpenseByCategory::from_transactions(&transactions);
        let order: Vec<&str> = result
            .categories
            .iter()
            .map(|c| c.kategori.as_str())
            .collect();
        assert_eq!(order, vec!["Belanja", "Hiburan", "Transportasi"]);
    }

    #[test]
    fn test_expense_by_category_percentages_sum_to_100() {
        let transactions = vec![
            expense(12_345.0, "Belanja"),
            expense(67_890.0, "Tagihan"),
            expense(11_111.0, "Kesehatan"),
            expense(22_222.0, "Belanja"),
        ];
        let result = ExpenseByCategory::from_transactions(&transactions);
        let sum: f64 = result.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    // ==================== IncomeVsExpense Tests ====================

    #[test]
    fn test_income_vs_expense_empty() {
        let result = IncomeVsExpense::from_transactions(&[]);
        assert_eq!(result.grand_total, 0.0);
        assert_eq!(result.data.len(), 2);
        for row in &result.data {
            assert_eq!(row.total, 0.0);
            assert_eq!(row.count, 0);
            assert_eq!(row.percentage, 0.0);
        }
    }

    #[test]
    fn test_income_vs_expense_rows_and_order() {
        let transactions = vec![
            income(300_000.0),
            expense(100_000.0, "Belanja"),
            expense(100_000.0, "Tagihan"),
        ];
        let result = IncomeVsExpense::from_transactions(&transactions);
        assert_eq!(result.grand_total, 500_000.0);

        let pemasukan = &result.data[0];
        assert_eq!(pemasukan.tipe, TransactionType::Pemasukan);
        assert_eq!(pemasukan.total, 300_000.0);
        assert_eq!(pemasukan.count, 1);
        assert!((pemasukan.percentage - 60.0).abs() < 1e-9);

        let pengeluaran = &result.data[1];
        assert_eq!(pengeluaran.tipe, TransactionType::Pengeluaran);
        assert_eq!(pengeluaran.total, 200_000.0);
        assert_eq!(pengeluaran.count, 2);
        assert!((pengeluaran.percentage - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_income_vs_expense_percentages_sum_to_100() {
        let transactions = vec![income(123_456.0), expense(78_901.0, "Lainnya")];
        let result = IncomeVsExpense::from_transactions(&transactions);
        let sum: f64 = result.data.iter().map(|r| r.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}

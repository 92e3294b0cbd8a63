//! Tabular report export.
//!
//! Reports are first flattened into a [`ReportTable`] of display strings and
//! then handed to a [`ReportExporter`]. [`PdfExporter`] is the only format
//! today.

mod pdf;

pub use pdf::PdfExporter;

use laundry_shared::AppError;
use laundry_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::period::MonthKey;
use crate::reports::MonthlyReport;

/// Errors that can occur while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF backend failed.
    #[error("failed to render PDF: {0}")]
    Pdf(String),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A report flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    /// Document title.
    pub title: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Body rows, one cell per column.
    pub rows: Vec<Vec<String>>,
    /// Heading of the summary block.
    pub summary_title: String,
    /// Summary labels.
    pub summary_columns: Vec<String>,
    /// Summary values, one per label.
    pub summary_row: Vec<String>,
}

/// Renders a [`ReportTable`] into a downloadable document.
pub trait ReportExporter: Send + Sync {
    /// Renders `table` to bytes.
    fn render(&self, table: &ReportTable) -> Result<Vec<u8>, ExportError>;

    /// MIME type of the rendered bytes.
    fn content_type(&self) -> &'static str;
}

/// Flattens a monthly report into a table.
///
/// Dates are `dd/mm/yyyy` and every amount is formatted in `currency`.
#[must_use]
pub fn monthly_report_table(report: &MonthlyReport, currency: Currency) -> ReportTable {
    let money = |amount: Decimal| Money::new(amount, currency).to_string();

    let rows = report
        .records
        .iter()
        .map(|record| {
            vec![
                record.date.format("%d/%m/%Y").to_string(),
                money(record.income),
                money(record.expenses),
                money(record.daily_result),
                money(record.running_balance),
            ]
        })
        .collect();

    ReportTable {
        title: format!("Monthly Report - {}", report.month.label()),
        columns: to_strings(&["Date", "Income", "Expenses", "Daily Result", "Balance"]),
        rows,
        summary_title: "Monthly Summary".to_string(),
        summary_columns: to_strings(&[
            "Total Income",
            "Total Expenses",
            "Net Result",
            "Final Balance",
        ]),
        summary_row: vec![
            money(report.totals.total_income),
            money(report.totals.total_expenses),
            money(report.totals.net_result),
            money(report.totals.final_balance),
        ],
    }
}

/// Download name for a month's export, e.g. `monthly-report-2024-01.pdf`.
#[must_use]
pub fn export_file_name(month: MonthKey) -> String {
    format!("monthly-report-{month}.pdf")
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::NewDailyEntry;
    use crate::reports::ReportService;
    use chrono::{NaiveDate, Utc};
    use laundry_shared::types::{DailyEntryId, UserId};
    use rust_decimal_macros::dec;

    fn january_report() -> MonthlyReport {
        let user = UserId::new();
        let entries = vec![
            NewDailyEntry::new(
                user,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                dec!(100000),
                dec!(20000),
                dec!(0),
            )
            .unwrap(),
            NewDailyEntry::new(
                user,
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                dec!(50000),
                dec!(10000),
                dec!(80000),
            )
            .unwrap(),
        ]
        .into_iter()
        .map(|e| e.into_entry(DailyEntryId::new(), Utc::now()))
        .collect::<Vec<_>>();

        ReportService::build_monthly_report(MonthKey::new(2024, 1).unwrap(), &entries)
    }

    #[test]
    fn test_monthly_report_table() {
        let table = monthly_report_table(&january_report(), Currency::Idr);

        assert_eq!(table.title, "Monthly Report - January 2024");
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0],
            vec![
                "01/01/2024",
                "Rp 100.000,00",
                "Rp 20.000,00",
                "Rp 80.000,00",
                "Rp 80.000,00"
            ]
        );
        assert_eq!(table.rows[1][4], "Rp 120.000,00");
        assert_eq!(table.summary_columns.len(), table.summary_row.len());
        assert_eq!(table.summary_row[3], "Rp 120.000,00");
    }

    #[test]
    fn test_export_file_name() {
        let month = MonthKey::new(2024, 3).unwrap();
        assert_eq!(export_file_name(month), "monthly-report-2024-03.pdf");
    }
}

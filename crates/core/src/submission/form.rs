//! Form state and input validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use laundry_shared::types::UserId;
use rust_decimal::Decimal;

use super::error::SubmissionError;
use crate::entry::{AMOUNT_SCALE, DailyEntry, fits_storage};

/// Numeric input fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    /// Daily income.
    Income,
    /// Daily expenses.
    Expenses,
    /// Previous balance override.
    PreviousBalance,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expenses => write!(f, "Expenses"),
            Self::PreviousBalance => write!(f, "Previous balance"),
        }
    }
}

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Validated and waiting on the store.
    Submitting,
    /// Stored; carries the persisted entry.
    Succeeded(DailyEntry),
    /// The store failed; carries the user-facing message.
    Failed(String),
}

/// Input that passed validation and is ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    /// Owner of the new entry.
    pub user_id: UserId,
    /// Entry date, never after today.
    pub date: NaiveDate,
    /// Non-negative income.
    pub income: Decimal,
    /// Non-negative expenses.
    pub expenses: Decimal,
    /// Previous balance typed by the user, if any.
    pub previous_balance_override: Option<Decimal>,
}

/// Raw daily report input plus its submission state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReportForm {
    /// Selected date.
    pub date: Option<NaiveDate>,
    /// Income as typed.
    pub income: String,
    /// Expenses as typed.
    pub expenses: String,
    /// Optional previous balance override as typed.
    pub previous_balance: Option<String>,
    state: SubmissionState,
}

impl DailyReportForm {
    /// An empty form with yesterday pre-selected.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.pred_opt(),
            income: String::new(),
            expenses: String::new(),
            previous_balance: None,
            state: SubmissionState::Idle,
        }
    }

    /// A form filled with the given input.
    #[must_use]
    pub fn filled(
        date: Option<NaiveDate>,
        income: impl Into<String>,
        expenses: impl Into<String>,
        previous_balance: Option<String>,
    ) -> Self {
        Self {
            date,
            income: income.into(),
            expenses: expenses.into(),
            previous_balance,
            state: SubmissionState::Idle,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Validates the input and moves to `Submitting`.
    ///
    /// On a validation error the state and fields are left untouched.
    pub fn begin(
        &mut self,
        user: Option<UserId>,
        today: NaiveDate,
    ) -> Result<ValidatedSubmission, SubmissionError> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmissionError::AlreadySubmitting);
        }
        let validated = self.validate(user, today)?;
        self.state = SubmissionState::Submitting;
        Ok(validated)
    }

    /// Records a stored entry and clears the inputs.
    pub fn succeed(&mut self, entry: DailyEntry) {
        self.date = None;
        self.income.clear();
        self.expenses.clear();
        self.previous_balance = None;
        self.state = SubmissionState::Succeeded(entry);
    }

    /// Records a failure, keeping the inputs for a retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = SubmissionState::Failed(message.into());
    }

    /// Returns an in-flight form to `Idle` after a late validation error.
    pub(crate) fn reject(&mut self) {
        self.state = SubmissionState::Idle;
    }

    fn validate(
        &self,
        user: Option<UserId>,
        today: NaiveDate,
    ) -> Result<ValidatedSubmission, SubmissionError> {
        let user_id = user.ok_or(SubmissionError::MissingIdentity)?;
        let date = self.date.ok_or(SubmissionError::MissingDate)?;
        if date > today {
            return Err(SubmissionError::FutureDate { date, today });
        }

        let income = parse_non_negative(AmountField::Income, &self.income)?;
        let expenses = parse_non_negative(AmountField::Expenses, &self.expenses)?;
        let previous_balance_override = match self.previous_balance.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                Some(parse_amount(AmountField::PreviousBalance, raw)?)
            }
            _ => None,
        };

        Ok(ValidatedSubmission {
            user_id,
            date,
            income,
            expenses,
            previous_balance_override,
        })
    }
}

/// Parses a two-decimal amount that fits the money columns.
fn parse_amount(field: AmountField, raw: &str) -> Result<Decimal, SubmissionError> {
    let invalid = || SubmissionError::InvalidAmount {
        field,
        value: raw.to_string(),
    };
    let amount = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(invalid());
    }
    if !fits_storage(amount) {
        return Err(SubmissionError::AmountTooLarge { field });
    }
    Ok(amount)
}

fn parse_non_negative(field: AmountField, raw: &str) -> Result<Decimal, SubmissionError> {
    let amount = parse_amount(field, raw)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(SubmissionError::NegativeAmount { field });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 3, 10)
    }

    #[test]
    fn test_new_form_defaults_to_yesterday() {
        let form = DailyReportForm::new(today());

        assert_eq!(form.date, Some(date(2024, 3, 9)));
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert!(form.income.is_empty());
    }

    #[test]
    fn test_begin_moves_to_submitting() {
        let user = UserId::new();
        let mut form = DailyReportForm::filled(Some(today()), "100", " 20.50 ", None);

        let validated = form.begin(Some(user), today()).unwrap();

        assert_eq!(form.state(), &SubmissionState::Submitting);
        assert_eq!(validated.user_id, user);
        assert_eq!(validated.income, dec!(100));
        assert_eq!(validated.expenses, dec!(20.50));
        assert_eq!(validated.previous_balance_override, None);
    }

    #[test]
    fn test_begin_rejects_reentry() {
        let mut form = DailyReportForm::filled(Some(today()), "1", "0", None);
        form.begin(Some(UserId::new()), today()).unwrap();

        let result = form.begin(Some(UserId::new()), today());

        assert_eq!(result, Err(SubmissionError::AlreadySubmitting));
    }

    #[test]
    fn test_missing_identity() {
        let mut form = DailyReportForm::filled(Some(today()), "1", "0", None);
        assert_eq!(
            form.begin(None, today()),
            Err(SubmissionError::MissingIdentity)
        );
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_missing_date() {
        let mut form = DailyReportForm::filled(None, "1", "0", None);
        assert_eq!(
            form.begin(Some(UserId::new()), today()),
            Err(SubmissionError::MissingDate)
        );
    }

    #[test]
    fn test_future_date_keeps_form() {
        let tomorrow = date(2024, 3, 11);
        let mut form = DailyReportForm::filled(Some(tomorrow), "10", "5", None);
        let before = form.clone();

        let result = form.begin(Some(UserId::new()), today());

        assert_eq!(
            result,
            Err(SubmissionError::FutureDate {
                date: tomorrow,
                today: today(),
            })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_today_is_allowed() {
        let mut form = DailyReportForm::filled(Some(today()), "0", "0", None);
        assert!(form.begin(Some(UserId::new()), today()).is_ok());
    }

    #[rstest]
    #[case("abc", "0", AmountField::Income)]
    #[case("", "0", AmountField::Income)]
    #[case("10", "1,5", AmountField::Expenses)]
    #[case("0.00004", "0", AmountField::Income)]
    #[case("10", "2.505", AmountField::Expenses)]
    fn test_invalid_amount(#[case] income: &str, #[case] expenses: &str, #[case] field: AmountField) {
        let mut form = DailyReportForm::filled(Some(today()), income, expenses, None);

        let result = form.begin(Some(UserId::new()), today());

        assert!(matches!(
            result,
            Err(SubmissionError::InvalidAmount { field: f, .. }) if f == field
        ));
    }

    #[rstest]
    #[case("-1", "0", AmountField::Income)]
    #[case("10", "-0.01", AmountField::Expenses)]
    fn test_negative_amount(#[case] income: &str, #[case] expenses: &str, #[case] field: AmountField) {
        let mut form = DailyReportForm::filled(Some(today()), income, expenses, None);

        assert_eq!(
            form.begin(Some(UserId::new()), today()),
            Err(SubmissionError::NegativeAmount { field })
        );
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let mut form = DailyReportForm::filled(Some(today()), "10.5000", "0.10", None);

        let validated = form.begin(Some(UserId::new()), today()).unwrap();

        assert_eq!(validated.income, dec!(10.5));
        assert_eq!(validated.expenses, dec!(0.1));
    }

    #[test]
    fn test_overlong_override_precision_is_invalid() {
        let mut form =
            DailyReportForm::filled(Some(today()), "0", "0", Some("0.00004".to_string()));

        assert!(matches!(
            form.begin(Some(UserId::new()), today()),
            Err(SubmissionError::InvalidAmount {
                field: AmountField::PreviousBalance,
                ..
            })
        ));
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[rstest]
    #[case("79228162514264337593543950335", "0", None, AmountField::Income)]
    #[case("1000000000000000", "0", None, AmountField::Income)]
    #[case("0", "1000000000000000.00", None, AmountField::Expenses)]
    #[case("1", "0", Some("-1000000000000000"), AmountField::PreviousBalance)]
    fn test_amount_too_large(
        #[case] income: &str,
        #[case] expenses: &str,
        #[case] previous_balance: Option<&str>,
        #[case] field: AmountField,
    ) {
        let mut form = DailyReportForm::filled(
            Some(today()),
            income,
            expenses,
            previous_balance.map(str::to_string),
        );

        assert_eq!(
            form.begin(Some(UserId::new()), today()),
            Err(SubmissionError::AmountTooLarge { field })
        );
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_largest_storable_amount_is_accepted() {
        let mut form =
            DailyReportForm::filled(Some(today()), "999999999999999.99", "0", None);

        let validated = form.begin(Some(UserId::new()), today()).unwrap();

        assert_eq!(validated.income, dec!(999999999999999.99));
    }

    #[test]
    fn test_previous_balance_override_may_be_negative() {
        let mut form =
            DailyReportForm::filled(Some(today()), "10", "5", Some("-250.75".to_string()));

        let validated = form.begin(Some(UserId::new()), today()).unwrap();

        assert_eq!(validated.previous_balance_override, Some(dec!(-250.75)));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut form = DailyReportForm::filled(Some(today()), "10", "5", Some("  ".to_string()));

        let validated = form.begin(Some(UserId::new()), today()).unwrap();

        assert_eq!(validated.previous_balance_override, None);
    }

    #[test]
    fn test_fail_keeps_fields() {
        let mut form = DailyReportForm::filled(Some(today()), "10", "5", None);
        form.begin(Some(UserId::new()), today()).unwrap();

        form.fail("store down");

        assert_eq!(form.state(), &SubmissionState::Failed("store down".to_string()));
        assert_eq!(form.income, "10");
        assert_eq!(form.expenses, "5");
        assert_eq!(form.date, Some(today()));
    }
}

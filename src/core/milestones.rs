//! Milestone badges, re-derived from the current records on every call.
use crate::core::analytics;
use crate::core::currency::{Converter, Currency};
use crate::core::ledger::Ledger;
use crate::core::settings::Settings;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    GoalAchiever,
    AlmostThere,
    GoalSet,
    NoSpendDay,
    ExpenseTracker,
    BudgetKeeper,
    MultiCurrencyUser,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::GoalAchiever => "Goal Achiever",
            Badge::AlmostThere => "Almost There",
            Badge::GoalSet => "Goal Set",
            Badge::NoSpendDay => "No Spend Day",
            Badge::ExpenseTracker => "Expense Tracker",
            Badge::BudgetKeeper => "Budget Keeper",
            Badge::MultiCurrencyUser => "Multi-Currency User",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Badge::GoalAchiever => "🏆",
            Badge::AlmostThere => "🥈",
            Badge::GoalSet => "🎯",
            Badge::NoSpendDay => "🛡️",
            Badge::ExpenseTracker => "📈",
            Badge::BudgetKeeper => "💰",
            Badge::MultiCurrencyUser => "🌐",
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Badge::GoalAchiever => 100,
            Badge::AlmostThere => 50,
            Badge::GoalSet => 10,
            Badge::NoSpendDay => 5,
            Badge::ExpenseTracker => 20,
            Badge::BudgetKeeper => 30,
            Badge::MultiCurrencyUser => 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Milestones {
    pub badges: Vec<Badge>,
    pub points: u32,
}

impl Milestones {
    fn award(&mut self, badge: Badge) {
        self.points += badge.points();
        self.badges.push(badge);
    }

    pub fn has(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

const TRACKER_MIN_RECORDS: usize = 10;
const ALMOST_THERE_FACTOR: f64 = 1.5;

/// Evaluates every badge condition against the current state.
pub fn evaluate(
    ledger: &Ledger,
    settings: &Settings,
    converter: &Converter,
    today: NaiveDate,
) -> Milestones {
    let mut milestones = Milestones::default();
    let expenses = &ledger.expenses;

    if let Some(goal) = settings.monthly_goal {
        let month_spent = analytics::monthly_spent(expenses, converter, today);
        if month_spent <= goal {
            milestones.award(Badge::GoalAchiever);
        } else if month_spent <= goal * ALMOST_THERE_FACTOR {
            milestones.award(Badge::AlmostThere);
        }
        milestones.award(Badge::GoalSet);
    }

    // Unconverted total for today
    if analytics::raw_spent_on(expenses, today) == 0.0 {
        milestones.award(Badge::NoSpendDay);
    }

    if expenses.len() >= TRACKER_MIN_RECORDS {
        milestones.award(Badge::ExpenseTracker);
    }

    let total = analytics::total_spent(expenses, converter);
    if total < converter.convert(ledger.total_budget) {
        milestones.award(Badge::BudgetKeeper);
    }

    if settings.currency != Currency::Inr {
        milestones.award(Badge::MultiCurrencyUser);
    }

    milestones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyTable;
    use crate::core::expense::{Category, ExpenseFields};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn ledger_with(budget: f64, items: &[(f64, NaiveDate)]) -> Ledger {
        let mut ledger = Ledger::with_budget(budget);
        for (amount, date) in items {
            ledger.add(ExpenseFields {
                amount: *amount,
                category: Category::Food,
                description: "meal".to_string(),
                date: *date,
            });
        }
        ledger
    }

    fn converter(settings: &Settings) -> Converter {
        CurrencyTable::default().converter(settings.currency)
    }

    #[test]
    fn test_no_goal_quiet_day_under_budget() {
        let ledger = ledger_with(50000.0, &[(100.0, date(1)), (200.0, date(2)), (50.0, date(3)), (75.0, date(4)), (25.0, date(5))]);
        let settings = Settings::default();
        let m = evaluate(&ledger, &settings, &converter(&settings), date(19));

        assert_eq!(m.badges, vec![Badge::NoSpendDay, Badge::BudgetKeeper]);
        assert_eq!(m.points, 35);
    }

    #[test]
    fn test_goal_tiers_are_exclusive() {
        let today = date(19);
        let settings = Settings {
            monthly_goal: Some(1000.0),
            ..Settings::default()
        };
        let conv = converter(&settings);

        let under = evaluate(&ledger_with(50000.0, &[(900.0, today)]), &settings, &conv, today);
        assert!(under.has(Badge::GoalAchiever));
        assert!(!under.has(Badge::AlmostThere));
        assert!(under.has(Badge::GoalSet));
        assert!(!under.has(Badge::NoSpendDay));
        // 100 + 10 + 30
        assert_eq!(under.points, 140);

        let close = evaluate(&ledger_with(50000.0, &[(1500.0, today)]), &settings, &conv, today);
        assert!(!close.has(Badge::GoalAchiever));
        assert!(close.has(Badge::AlmostThere));
        assert_eq!(close.points, 90);

        let far = evaluate(&ledger_with(50000.0, &[(1500.01, today)]), &settings, &conv, today);
        assert!(!far.has(Badge::GoalAchiever));
        assert!(!far.has(Badge::AlmostThere));
        assert!(far.has(Badge::GoalSet));
        assert_eq!(far.points, 40);
    }

    #[test]
    fn test_tracker_budget_and_currency_badges() {
        let items: Vec<(f64, NaiveDate)> = (1..=10).map(|d| (1000.0, date(d))).collect();
        let ledger = ledger_with(5000.0, &items);
        let settings = Settings {
            currency: Currency::Usd,
            ..Settings::default()
        };
        let m = evaluate(&ledger, &settings, &converter(&settings), date(19));

        assert_eq!(
            m.badges,
            vec![Badge::NoSpendDay, Badge::ExpenseTracker, Badge::MultiCurrencyUser]
        );
        assert_eq!(m.points, 35);
    }

    #[test]
    fn test_points_match_badges() {
        let today = date(19);
        let ledger = ledger_with(50000.0, &[(10.0, today)]);
        let settings = Settings {
            monthly_goal: Some(5.0),
            currency: Currency::Eur,
            ..Settings::default()
        };
        let m = evaluate(&ledger, &settings, &converter(&settings), today);
        let expected: u32 = m.badges.iter().map(Badge::points).sum();
        assert_eq!(m.points, expected);
        assert_eq!(m.badges.first().map(Badge::label), Some("Goal Achiever"));
    }

    #[test]
    fn test_goal_tiers_use_converted_monthly_spend() {
        let today = date(19);
        let ledger = ledger_with(50000.0, &[(1000.0, date(2))]);

        // 1000 INR is 12 USD: above a 10 USD goal, within 1.5x of it
        let settings = Settings {
            monthly_goal: Some(10.0),
            currency: Currency::Usd,
            ..Settings::default()
        };
        let m = evaluate(&ledger, &settings, &converter(&settings), today);
        assert!(!m.has(Badge::GoalAchiever));
        assert!(m.has(Badge::AlmostThere));

        // The same raw spend meets a 20 USD goal
        let settings = Settings {
            monthly_goal: Some(20.0),
            ..settings
        };
        let m = evaluate(&ledger, &settings, &converter(&settings), today);
        assert!(m.has(Badge::GoalAchiever));
    }
}

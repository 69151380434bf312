//! The account behavior matrix
//!
//! Every balance-mutating operation lives here as a single match over
//! [`AccountKind`], so the complete rule set per kind can be audited in one
//! place rather than spread across per-kind implementations.
//!
//! # Outcomes, not errors
//!
//! Business-rule rejections (insufficient funds, transaction limit, fees)
//! are non-fatal: the operation returns an [`OperationResult`] carrying the
//! (possibly unchanged) balance and an [`Outcome`] code, and execution
//! continues. The same rejection is also reported on the operator channel
//! via `log::warn!`. Only construction guards raise [`LedgerError`]; no
//! operation in this module can fail.
//!
//! # Preserved quirks
//!
//! The rules are carried over literally from the legacy system, including
//! its oddities: plain withdrawals credit 2 (savings) or 1 (checking) back
//! to the balance, the check fee is *added* to the candidate balance, the
//! check counter advances even when the check bounces, and an under-minimum
//! money-market balance may take a deposit past the 100,000 ceiling without
//! it counting against the transaction limit.

use crate::types::account::{
    Account, AccountKind, MONEY_MARKET_MINIMUM_BALANCE, SAVINGS_MINIMUM_BALANCE,
};
use log::warn;
use rust_decimal::Decimal;

/// Default interest rate in percent (0.25)
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Credit applied to every savings withdrawal
const SAVINGS_WITHDRAWAL_CREDIT: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Credit applied to every plain checking withdrawal
const CHECKING_WITHDRAWAL_CREDIT: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Lowest balance a check may take a checking account to
const CHECK_OVERDRAFT_FLOOR: Decimal = Decimal::from_parts(10, 0, 0, true, 0);

/// Fee added to the candidate balance once the check count exceeds the
/// free allowance
const CHECK_FEE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Number of free checks before the fee kicks in
const FREE_CHECKS: u32 = 3;

/// Counted transactions allowed before a money-market account is cut off
const MONEY_MARKET_TRANSACTION_LIMIT: u32 = 6;

/// Fee charged when a money-market withdrawal lands below the minimum
const MONEY_MARKET_LOW_BALANCE_FEE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Ceiling for the money-market deposit bypass window
const MONEY_MARKET_BYPASS_CEILING: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Business-rule outcome of a deposit or withdrawal
///
/// Non-`Ok` outcomes never abort execution; the caller always receives the
/// resulting balance alongside the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation was applied in full
    Ok,

    /// The operation was rejected; the balance is unchanged
    InsufficientFunds,

    /// The money-market transaction limit was reached; the balance is
    /// unchanged
    LimitReached,

    /// The withdrawal was applied and additionally charged the
    /// below-minimum fee
    FeeApplied,
}

/// Result of a balance-mutating operation
///
/// Carries the balance after the operation so callers (and tests) can
/// assert on the outcome without parsing operator messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationResult {
    /// The account balance after the operation
    pub balance: Decimal,

    /// What the business rules decided
    pub outcome: Outcome,
}

impl OperationResult {
    fn ok(balance: Decimal) -> Self {
        OperationResult {
            balance,
            outcome: Outcome::Ok,
        }
    }

    fn rejected(balance: Decimal, outcome: Outcome) -> Self {
        OperationResult { balance, outcome }
    }
}

impl Account {
    /// Deposit `amount` into the account
    ///
    /// Unconditional for all kinds except money-market, which counts the
    /// deposit against its transaction limit unless the bypass window
    /// applies (balance under the minimum and the deposit taking it past
    /// the ceiling).
    pub fn deposit(&mut self, amount: Decimal) -> OperationResult {
        match &mut self.kind {
            AccountKind::MoneyMarket { transactions } => {
                // Legacy bypass window, preserved as-is: jumping from
                // under the minimum past the ceiling skips the limit
                // check and does not count as a transaction.
                if self.balance < MONEY_MARKET_MINIMUM_BALANCE
                    && self.balance + amount > MONEY_MARKET_BYPASS_CEILING
                {
                    self.balance += amount;
                    return OperationResult::ok(self.balance);
                }

                if *transactions > MONEY_MARKET_TRANSACTION_LIMIT {
                    warn!(
                        "account {}: transaction limit reached, deposit of {} rejected",
                        self.id, amount
                    );
                    return OperationResult::rejected(self.balance, Outcome::LimitReached);
                }

                *transactions += 1;
                self.balance += amount;
                OperationResult::ok(self.balance)
            }
            AccountKind::Base | AccountKind::Savings | AccountKind::Checking { .. } => {
                self.balance += amount;
                OperationResult::ok(self.balance)
            }
        }
    }

    /// Withdraw `amount` from the account
    ///
    /// The guard depends on the kind:
    /// - base: the balance must cover the amount
    /// - savings: the balance (after the fixed credit of 2) must stay at
    ///   or above 10
    /// - checking: the balance (after the fixed credit of 1) must stay at
    ///   or above 0
    /// - money-market: subject to the transaction limit and the 10,000
    ///   minimum; landing below the minimum charges a 100 fee on top
    pub fn withdraw(&mut self, amount: Decimal) -> OperationResult {
        match &mut self.kind {
            AccountKind::Base => {
                if self.balance < amount {
                    warn!(
                        "account {}: insufficient funds, withdrawal of {} rejected",
                        self.id, amount
                    );
                    return OperationResult::rejected(self.balance, Outcome::InsufficientFunds);
                }
                self.balance -= amount;
                OperationResult::ok(self.balance)
            }
            AccountKind::Savings => {
                let candidate = self.balance - amount + SAVINGS_WITHDRAWAL_CREDIT;
                if candidate < SAVINGS_MINIMUM_BALANCE {
                    warn!(
                        "account {}: insufficient funds, withdrawal of {} rejected",
                        self.id, amount
                    );
                    return OperationResult::rejected(self.balance, Outcome::InsufficientFunds);
                }
                self.balance = candidate;
                OperationResult::ok(self.balance)
            }
            AccountKind::Checking { .. } => {
                let candidate = self.balance - amount + CHECKING_WITHDRAWAL_CREDIT;
                if candidate < Decimal::ZERO {
                    warn!(
                        "account {}: insufficient funds, withdrawal of {} rejected",
                        self.id, amount
                    );
                    return OperationResult::rejected(self.balance, Outcome::InsufficientFunds);
                }
                self.balance = candidate;
                OperationResult::ok(self.balance)
            }
            AccountKind::MoneyMarket { transactions } => {
                if *transactions > MONEY_MARKET_TRANSACTION_LIMIT {
                    warn!(
                        "account {}: transaction limit reached, withdrawal of {} rejected",
                        self.id, amount
                    );
                    return OperationResult::rejected(self.balance, Outcome::LimitReached);
                }
                if self.balance < MONEY_MARKET_MINIMUM_BALANCE {
                    warn!(
                        "account {}: balance below minimum, must deposit more before withdrawing",
                        self.id
                    );
                    return OperationResult::rejected(self.balance, Outcome::InsufficientFunds);
                }

                *transactions += 1;
                self.balance -= amount;

                if self.balance < MONEY_MARKET_MINIMUM_BALANCE {
                    self.balance -= MONEY_MARKET_LOW_BALANCE_FEE;
                    warn!(
                        "account {}: withdrawal dropped the balance below {}, {} fee applied",
                        self.id, MONEY_MARKET_MINIMUM_BALANCE, MONEY_MARKET_LOW_BALANCE_FEE
                    );
                    return OperationResult::rejected(self.balance, Outcome::FeeApplied);
                }
                OperationResult::ok(self.balance)
            }
        }
    }

    /// Withdraw `amount` by writing a check (checking accounts only)
    ///
    /// Once more than [`FREE_CHECKS`] checks have been written, each check
    /// adds the check fee to the candidate balance. The check counter
    /// advances even when the check bounces. A check may overdraw the
    /// account down to -10.
    ///
    /// Returns `None` for kinds that cannot write checks.
    pub fn withdraw_using_check(&mut self, amount: Decimal) -> Option<OperationResult> {
        let AccountKind::Checking { checks_written } = &mut self.kind else {
            return None;
        };

        let fee = if *checks_written > FREE_CHECKS {
            CHECK_FEE
        } else {
            Decimal::ZERO
        };
        let candidate = self.balance - amount + fee;

        // Bounced checks still count.
        *checks_written += 1;

        if candidate < CHECK_OVERDRAFT_FLOOR {
            warn!(
                "account {}: insufficient funds, check for {} bounced",
                self.id, amount
            );
            return Some(OperationResult::rejected(
                self.balance,
                Outcome::InsufficientFunds,
            ));
        }

        self.balance = candidate;
        Some(OperationResult::ok(self.balance))
    }

    /// Accrue interest at `rate` percent (savings and money-market only)
    ///
    /// Adds `balance * rate / 100` to the balance and returns the interest
    /// amount. Returns `None` for kinds that do not bear interest. Use
    /// [`DEFAULT_INTEREST_RATE`] for the standard 0.25% rate.
    pub fn add_interest(&mut self, rate: Decimal) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings | AccountKind::MoneyMarket { .. } => {
                let interest = self.balance * rate / Decimal::ONE_HUNDRED;
                self.balance += interest;
                Some(interest)
            }
            AccountKind::Base | AccountKind::Checking { .. } => None,
        }
    }

    /// Reset the check counter to zero
    ///
    /// No-op for kinds that do not write checks.
    pub fn reset_checks(&mut self) {
        if let AccountKind::Checking { checks_written } = &mut self.kind {
            *checks_written = 0;
        }
    }

    /// Reset the money-market transaction counter to zero
    ///
    /// No-op for kinds without a transaction limit.
    pub fn reset_transactions(&mut self) {
        if let AccountKind::MoneyMarket { transactions } = &mut self.kind {
            *transactions = 0;
        }
    }
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::BankError;
use crate::factory::Delivery;
use crate::solid::open_closed::{send_otp_by_medium, OtpChannel};

/// Account balances, in minor currency units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: HashMap<String, u64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_account(&mut self, account: impl Into<String>, opening_balance: u64) {
        let account = account.into();
        debug!(%account, opening_balance, "account opened");
        self.balances.insert(account, opening_balance);
    }

    pub fn balance(&self, account: &str) -> Result<u64, BankError> {
        self.balances
            .get(account)
            .copied()
            .ok_or_else(|| unknown_account(account))
    }

    fn balance_mut(&mut self, account: &str) -> Result<&mut u64, BankError> {
        self.balances
            .get_mut(account)
            .ok_or_else(|| unknown_account(account))
    }
}

fn credit(balance: u64, amount: u64, account: &str) -> Result<u64, BankError> {
    balance
        .checked_add(amount)
        .ok_or_else(|| BankError::BalanceOverflow {
            account: account.to_string(),
            balance,
            amount,
        })
}

fn unknown_account(account: &str) -> BankError {
    BankError::UnknownAccount {
        account: account.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanType {
    Home,
    Personal,
    Car,
}

impl LoanType {
    /// Fixed annual rate in basis points.
    pub fn annual_rate_bps(self) -> u32 {
        match self {
            LoanType::Home => 850,
            LoanType::Personal => 1100,
            LoanType::Car => 900,
        }
    }

    pub fn annual_rate_percent(self) -> f64 {
        f64::from(self.annual_rate_bps()) / 100.0
    }
}

impl FromStr for LoanType {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" | "homeLoan" => Ok(LoanType::Home),
            "personal" | "personalLoan" => Ok(LoanType::Personal),
            "car" | "carLoan" => Ok(LoanType::Car),
            other => Err(BankError::UnknownLoanType {
                loan_type: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoanType::Home => "home",
            LoanType::Personal => "personal",
            LoanType::Car => "car",
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DepositService;

impl DepositService {
    /// Returns the new balance.
    pub fn deposit(
        &self,
        ledger: &mut Ledger,
        amount: u64,
        account: &str,
    ) -> Result<u64, BankError> {
        if amount == 0 {
            return Err(BankError::InvalidAmount);
        }
        let balance = ledger.balance_mut(account)?;
        *balance = credit(*balance, amount, account)?;
        info!(account, amount, "deposit");
        Ok(*balance)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WithdrawService;

impl WithdrawService {
    /// Returns the amount paid out. Overdrafts are refused.
    pub fn withdraw(
        &self,
        ledger: &mut Ledger,
        amount: u64,
        account: &str,
    ) -> Result<u64, BankError> {
        if amount == 0 {
            return Err(BankError::InvalidAmount);
        }
        let balance = ledger.balance_mut(account)?;
        if *balance < amount {
            return Err(BankError::InsufficientFunds {
                account: account.to_string(),
                balance: *balance,
                requested: amount,
            });
        }
        *balance -= amount;
        info!(account, amount, "withdrawal");
        Ok(amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InterestInfoService;

impl InterestInfoService {
    pub fn loan_interest_rate(&self, loan_type: &str) -> Result<f64, BankError> {
        Ok(loan_type.parse::<LoanType>()?.annual_rate_percent())
    }
}

pub struct OtpService {
    channel: Box<dyn OtpChannel>,
}

impl OtpService {
    pub fn new(channel: Box<dyn OtpChannel>) -> Self {
        Self { channel }
    }

    pub fn send_otp(&self, recipient: &str, code: &str) -> Result<Delivery, BankError> {
        let delivery = self.channel.send_otp(recipient, code)?;
        info!(medium = self.channel.medium(), "otp sent");
        Ok(delivery)
    }
}

/// Everything in one place: the type to refactor away from.
#[derive(Debug, Clone, Default)]
pub struct BankService {
    ledger: Ledger,
}

impl BankService {
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn deposit(&mut self, amount: u64, account: &str) -> Result<u64, BankError> {
        if amount == 0 {
            return Err(BankError::InvalidAmount);
        }
        let balance = self.ledger.balance_mut(account)?;
        let Some(updated) = balance.checked_add(amount) else {
            return Err(BankError::BalanceOverflow {
                account: account.to_string(),
                balance: *balance,
                amount,
            });
        };
        *balance = updated;
        Ok(updated)
    }

    pub fn withdraw(&mut self, amount: u64, account: &str) -> Result<u64, BankError> {
        if amount == 0 {
            return Err(BankError::InvalidAmount);
        }
        let balance = self.ledger.balance_mut(account)?;
        if *balance < amount {
            return Err(BankError::InsufficientFunds {
                account: account.to_string(),
                balance: *balance,
                requested: amount,
            });
        }
        *balance -= amount;
        Ok(amount)
    }

    pub fn loan_interest_rate(&self, loan_type: &str) -> Result<f64, BankError> {
        match loan_type {
            "home" | "homeLoan" => Ok(8.5),
            "personal" | "personalLoan" => Ok(11.0),
            "car" | "carLoan" => Ok(9.0),
            other => Err(BankError::UnknownLoanType {
                loan_type: other.to_string(),
            }),
        }
    }

    pub fn send_otp(
        &self,
        medium: &str,
        recipient: &str,
        code: &str,
    ) -> Result<Delivery, BankError> {
        Ok(send_otp_by_medium(medium, recipient, code)?)
    }
}

//! SOLID before/after refactors.
//!
//! - **Single responsibility**: [`BankService`] does deposits, withdrawals,
//!   loan rates and OTPs in one type. The split services each own one of
//!   those concerns and share a [`Ledger`].
//! - **Open/closed**: [`send_otp_by_medium`] branches on a string and must be
//!   edited for every new medium. [`OtpChannel`] is extended by adding an impl.

pub mod open_closed;
pub mod single_responsibility;

pub use open_closed::{send_otp_by_medium, EmailOtp, OtpChannel, SmsOtp, WhatsAppOtp};
pub use single_responsibility::{
    BankService, DepositService, InterestInfoService, Ledger, LoanType, OtpService,
    WithdrawService,
};

//! Donations module - ledger models, service, and traits.

mod donations_model;
mod donations_service;
mod donations_traits;


pub use donations_model::{
    Donation, DonationStatus, DonationView, LedgerBalance, NewDonation, PaymentMethod,
    SettlementConfirmation, SettlementOutcome,
};
pub use donations_service::{DonationLedger, LedgerSnapshot};
pub use donations_traits::DonationLedgerTrait;

//! Donation domain models.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::ANONYMOUS_DONOR_LABEL;
use crate::{errors::ValidationError, Error, Result};

/// Settlement state of a donation.
///
/// `Pending` may move to `Completed` or `Failed`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl DonationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Completed => "completed",
            DonationStatus::Failed => "failed",
        }
    }

    /// Whether `self -> next` is one of the two legal edges.
    pub fn can_transition_to(&self, next: DonationStatus) -> bool {
        matches!(
            (self, next),
            (DonationStatus::Pending, DonationStatus::Completed)
                | (DonationStatus::Pending, DonationStatus::Failed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, DonationStatus::Pending)
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    Netbanking,
}

/// Domain model representing a recorded donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub amount: Decimal,
    /// Target campaign; `None` routes to the general fund. Not an ownership edge.
    pub campaign_id: Option<String>,
    /// Whether `campaign_id` resolved to a catalog campaign when recorded
    #[serde(default)]
    pub is_attributed: bool,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub timestamp: DateTime<Utc>,
    pub status: DonationStatus,
    pub payment_method: PaymentMethod,
    /// Payment gateway or chain reference used to match settlements
    pub transaction_id: Option<String>,
    pub tax_benefit: Decimal,
}

impl Donation {
    /// Name to show for this donation; hidden when anonymous.
    pub fn display_name(&self) -> &str {
        if self.is_anonymous {
            return ANONYMOUS_DONOR_LABEL;
        }
        match self.donor_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => ANONYMOUS_DONOR_LABEL,
        }
    }
}

/// Input model for recording a donation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub amount: Decimal,
    pub campaign_id: Option<String>,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
}

impl NewDonation {
    /// Validates the new donation data.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Donation amount must be positive".to_string(),
            )));
        }
        if let Some(email) = self.donor_email.as_deref() {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "'{}' is not a valid email address",
                    email
                ))));
            }
        }
        Ok(())
    }
}

/// Public projection of a donation with donor details suppressed when the
/// donor asked to stay anonymous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationView {
    pub id: String,
    pub amount: Decimal,
    pub campaign_id: Option<String>,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: DonationStatus,
}

impl From<&Donation> for DonationView {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.id.clone(),
            amount: donation.amount,
            campaign_id: donation.campaign_id.clone(),
            donor_name: donation.display_name().to_string(),
            donor_email: if donation.is_anonymous {
                None
            } else {
                donation.donor_email.clone()
            },
            message: donation.message.clone(),
            timestamp: donation.timestamp,
            status: donation.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementOutcome {
    Succeeded,
    Failed,
}

impl SettlementOutcome {
    pub fn target_status(&self) -> DonationStatus {
        match self {
            SettlementOutcome::Succeeded => DonationStatus::Completed,
            SettlementOutcome::Failed => DonationStatus::Failed,
        }
    }
}

/// Confirmation delivered by the payment gateway or chain adapter.
///
/// This is the only path by which a donation leaves `pending` outside of an
/// explicit administrative `set_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementConfirmation {
    pub transaction_id: String,
    pub outcome: SettlementOutcome,
}

/// How the ledger's running total splits across the catalog.
///
/// Opening balances of seeded campaigns are reported next to, never inside,
/// the ledger figures.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBalance {
    /// Sum of `raised_amount - opening_amount` over the catalog
    pub credited_total: Decimal,
    pub unattributed_total: Decimal,
    pub total_donated: Decimal,
    /// Sum of campaign opening amounts
    pub opening_total: Decimal,
}

impl LedgerBalance {
    /// Credited plus unattributed equals the running total.
    pub fn is_balanced(&self) -> bool {
        self.credited_total + self.unattributed_total == self.total_donated
    }

    /// Everything shown as raised across campaigns.
    pub fn raised_total(&self) -> Decimal {
        self.opening_total + self.credited_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_transitions() {
        use DonationStatus::*;
        assert!(Pending.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Failed));
        for (from, to) in [
            (Pending, Pending),
            (Completed, Pending),
            (Completed, Failed),
            (Completed, Completed),
            (Failed, Pending),
            (Failed, Completed),
            (Failed, Failed),
        ] {
            assert!(!from.can_transition_to(to), "{} -> {}", from, to);
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DonationStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"netbanking\"").unwrap(),
            PaymentMethod::Netbanking
        );
    }

    #[test]
    fn test_new_donation_validation() {
        let mut donation = NewDonation {
            amount: dec!(0),
            ..Default::default()
        };
        assert!(donation.validate().is_err());
        donation.amount = dec!(100);
        assert!(donation.validate().is_ok());
        donation.donor_email = Some("not-an-email".to_string());
        assert!(donation.validate().is_err());
    }

    #[test]
    fn test_anonymous_view_hides_donor() {
        let donation = Donation {
            id: "DN1".to_string(),
            amount: dec!(500),
            campaign_id: Some("1".to_string()),
            is_attributed: true,
            donor_name: Some("Rajesh Kumar".to_string()),
            donor_email: Some("rajesh@example.com".to_string()),
            message: None,
            is_anonymous: true,
            timestamp: Utc::now(),
            status: DonationStatus::Pending,
            payment_method: PaymentMethod::Upi,
            transaction_id: None,
            tax_benefit: dec!(250),
        };
        let view = DonationView::from(&donation);
        assert_eq!(view.donor_name, "Anonymous");
        assert!(view.donor_email.is_none());

        let named = Donation {
            is_anonymous: false,
            ..donation
        };
        let view = DonationView::from(&named);
        assert_eq!(view.donor_name, "Rajesh Kumar");
        assert_eq!(view.donor_email.as_deref(), Some("rajesh@example.com"));
    }
}

//! Billing record domain entity and charge calculation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::shared::{DomainError, DomainResult};

/// Payment status derived from comparing two decimal sums.
///
/// Never set directly by a caller; always computed via [`classify_bill`]
/// or [`classify_aggregate`]. `Overpaid` only appears on the aggregate
/// (receipt) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
    Overpaid,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Unpaid
    }
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::PartiallyPaid => "Partially Paid",
            Self::Paid => "Paid",
            Self::Overpaid => "Overpaid",
        }
    }

    /// Parse a stored status label; unknown labels fall back to `Unpaid`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Partially Paid" => Self::PartiallyPaid,
            "Paid" => Self::Paid,
            "Overpaid" => Self::Overpaid,
            _ => Self::Unpaid,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Paid | Self::Overpaid)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a tenant's per-unit pricing taken at bill creation time.
///
/// Later edits to the tenant do not retroactively change issued bills.
#[derive(Debug, Clone)]
pub struct PricingSnapshot {
    pub electricity_price_per_unit: Decimal,
    pub water_price: Decimal,
    pub rent_price: Decimal,
    pub waste_price: Decimal,
}

/// Itemized charges for one billing period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeBreakdown {
    pub electricity: Decimal,
    pub water: Decimal,
    pub rent: Decimal,
    pub waste: Decimal,
    pub total: Decimal,
}

/// Compute itemized charges for a billing period.
///
/// `electricity = (current - previous) * electricity_price_per_unit`;
/// water, rent and waste are copied verbatim from the pricing snapshot.
/// All amounts are rounded to 2 fractional digits.
///
/// Fails with a validation error when `current_units <= previous_units`.
pub fn calculate_charges(
    previous_units: i64,
    current_units: i64,
    pricing: &PricingSnapshot,
) -> DomainResult<ChargeBreakdown> {
    if current_units <= previous_units {
        return Err(DomainError::Validation(
            "Previous unit must be less than current unit.".to_string(),
        ));
    }

    let consumed = Decimal::from(current_units - previous_units);
    let electricity = (consumed * pricing.electricity_price_per_unit).round_dp(2);
    let water = pricing.water_price.round_dp(2);
    let rent = pricing.rent_price.round_dp(2);
    let waste = pricing.waste_price.round_dp(2);
    let total = electricity + water + rent + waste;

    Ok(ChargeBreakdown {
        electricity,
        water,
        rent,
        waste,
        total,
    })
}

/// Classify a single bill by amount due vs amount paid.
///
/// Equality is an exact `Decimal` comparison: both sides are already
/// rounded to 2 fractional digits, so no tolerance is applied. Paying
/// more than the bill total still classifies as `Paid`; `Overpaid`
/// exists only at the ledger aggregate level.
pub fn classify_bill(due: Decimal, paid: Decimal) -> PaymentStatus {
    if paid.is_zero() {
        PaymentStatus::Unpaid
    } else if paid < due {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::Paid
    }
}

/// Classify a tenant's aggregate position (receipts vs billed totals).
///
/// Same rules as [`classify_bill`] plus `Overpaid` when receipts exceed
/// the billed total.
pub fn classify_aggregate(due: Decimal, received: Decimal) -> PaymentStatus {
    if received.is_zero() {
        PaymentStatus::Unpaid
    } else if received < due {
        PaymentStatus::PartiallyPaid
    } else if received == due {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Overpaid
    }
}

/// One billing record per room per billing period.
#[derive(Debug, Clone)]
pub struct BillingRecord {
    pub id: i32,
    pub room_id: i32,
    /// Billing period as "YYYY-MM"
    pub billing_month: String,
    pub previous_units: i64,
    pub current_units: i64,
    pub electricity: Decimal,
    pub water: Decimal,
    pub rent: Decimal,
    pub waste: Decimal,
    pub total: Decimal,
    pub total_paid: Decimal,
    /// Free-text summary of payments received against this bill
    pub payment_received_date: Option<String>,
    pub remarks: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BillingRecord {
    /// Amount still owed on this bill (never negative).
    pub fn outstanding(&self) -> Decimal {
        let diff = self.total - self.total_paid;
        if diff.is_sign_negative() {
            Decimal::ZERO
        } else {
            diff
        }
    }

    pub fn is_outstanding(&self) -> bool {
        !self.status.is_settled()
    }
}

/// The billing period label for "now": "YYYY-MM".
pub fn current_billing_month() -> String {
    Utc::now().format("%Y-%m").to_string()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_pricing() -> PricingSnapshot {
        PricingSnapshot {
            electricity_price_per_unit: dec!(15.00),
            water_price: dec!(200.00),
            rent_price: dec!(5000.00),
            waste_price: dec!(0.00),
        }
    }

    #[test]
    fn charges_from_meter_delta() {
        let breakdown = calculate_charges(100, 150, &sample_pricing()).unwrap();
        // 50 units * 15.00 = 750.00
        assert_eq!(breakdown.electricity, dec!(750.00));
        assert_eq!(breakdown.water, dec!(200.00));
        assert_eq!(breakdown.rent, dec!(5000.00));
        assert_eq!(breakdown.waste, dec!(0.00));
        assert_eq!(breakdown.total, dec!(5950.00));
    }

    #[test]
    fn fractional_unit_price_rounds_to_two_digits() {
        let pricing = PricingSnapshot {
            electricity_price_per_unit: dec!(15.555),
            water_price: dec!(0),
            rent_price: dec!(0),
            waste_price: dec!(0),
        };
        let breakdown = calculate_charges(0, 3, &pricing).unwrap();
        // 3 * 15.555 = 46.665 → 46.66 (banker's rounding)
        assert_eq!(breakdown.electricity, dec!(46.66));
        assert_eq!(breakdown.total, breakdown.electricity);
    }

    #[test]
    fn equal_readings_are_rejected() {
        let err = calculate_charges(150, 150, &sample_pricing()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err
            .to_string()
            .contains("Previous unit must be less than current unit."));
    }

    #[test]
    fn decreasing_readings_are_rejected() {
        assert!(calculate_charges(150, 100, &sample_pricing()).is_err());
    }

    #[test]
    fn bill_status_table() {
        let due = dec!(5950.00);
        assert_eq!(classify_bill(due, dec!(0)), PaymentStatus::Unpaid);
        assert_eq!(classify_bill(due, dec!(3000.00)), PaymentStatus::PartiallyPaid);
        assert_eq!(classify_bill(due, dec!(5950.00)), PaymentStatus::Paid);
        // bills never go overpaid
        assert_eq!(classify_bill(due, dec!(6000.00)), PaymentStatus::Paid);
    }

    #[test]
    fn aggregate_status_table() {
        let due = dec!(5950.00);
        assert_eq!(classify_aggregate(due, dec!(0)), PaymentStatus::Unpaid);
        assert_eq!(
            classify_aggregate(due, dec!(3000.00)),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(classify_aggregate(due, dec!(5950.00)), PaymentStatus::Paid);
        assert_eq!(
            classify_aggregate(due, dec!(6000.00)),
            PaymentStatus::Overpaid
        );
    }

    #[test]
    fn equality_is_exact_no_tolerance() {
        assert_eq!(
            classify_aggregate(dec!(100.00), dec!(99.99)),
            PaymentStatus::PartiallyPaid
        );
        assert_eq!(
            classify_aggregate(dec!(100.00), dec!(100.01)),
            PaymentStatus::Overpaid
        );
    }

    #[test]
    fn outstanding_never_negative() {
        let mut record = BillingRecord {
            id: 1,
            room_id: 1,
            billing_month: "2026-08".to_string(),
            previous_units: 100,
            current_units: 150,
            electricity: dec!(750.00),
            water: dec!(200.00),
            rent: dec!(5000.00),
            waste: dec!(0.00),
            total: dec!(5950.00),
            total_paid: dec!(6000.00),
            payment_received_date: None,
            remarks: None,
            status: PaymentStatus::Paid,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(record.outstanding(), Decimal::ZERO);
        record.total_paid = dec!(1000.00);
        assert_eq!(record.outstanding(), dec!(4950.00));
    }

    #[test]
    fn status_label_round_trip() {
        for status in [
            PaymentStatus::Unpaid,
            PaymentStatus::PartiallyPaid,
            PaymentStatus::Paid,
            PaymentStatus::Overpaid,
        ] {
            assert_eq!(PaymentStatus::parse(status.as_str()), status);
        }
        assert_eq!(PaymentStatus::parse("garbage"), PaymentStatus::Unpaid);
    }

    #[test]
    fn billing_month_format() {
        let month = current_billing_month();
        assert_eq!(month.len(), 7);
        assert_eq!(&month[4..5], "-");
    }
}

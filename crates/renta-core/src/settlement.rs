use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Final liquidation of the declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementOutput {
    /// Net tax less withholdings and prior-year items, before the new
    /// advance is added.
    pub subtotal: Money,
    /// Signed balance: positive payable, negative in the taxpayer's
    /// favor.
    pub final_balance: Money,
    /// Strictly negative balances only; an exact zero is a payable of
    /// zero, not a refund.
    pub is_refund: bool,
    /// Magnitude of the final balance.
    pub amount: Money,
}

/// Combine the year's net tax with withholdings, prior-year items and
/// the newly computed advance. The advance is always added on top of
/// the subtotal; it is never netted against the payable/refund
/// distinction beforehand.
///
/// `include_prior_year_items` covers the rule-set variant that ignores
/// the prior-year credit balance and advance entirely
/// (`FiscalConfig::settle_prior_year_items`).
pub fn settle(
    net_tax: Money,
    withholdings: Money,
    prior_credit_balance: Money,
    prior_advance: Money,
    advance_selected: Money,
    include_prior_year_items: bool,
) -> SettlementOutput {
    let mut subtotal = net_tax - withholdings;
    if include_prior_year_items {
        subtotal -= prior_credit_balance + prior_advance;
    }

    let final_balance = subtotal + advance_selected;

    SettlementOutput {
        subtotal,
        final_balance,
        is_refund: final_balance < Decimal::ZERO,
        amount: final_balance.abs(),
    }
}

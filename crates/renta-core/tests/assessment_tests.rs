use pretty_assertions::assert_eq;
use renta_core::config::FiscalConfig;
use renta_core::engine::{assess, validate};
use renta_core::settlement::settle;
use renta_core::types::TaxpayerInputs;
use renta_core::RentaError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_inputs() -> TaxpayerInputs {
    // A salaried taxpayer with one dependent, some deductible expenses
    // and a prior filing history.
    TaxpayerInputs {
        salaries: dec!(100_000_000),
        severance_pay: dec!(0),
        social_benefits: dec!(0),
        other_labor_payments: dec!(0),
        average_monthly_income: dec!(8_000_000),
        incr_health: dec!(4_000_000),
        incr_pension: dec!(4_000_000),
        voluntary_pension: dec!(0),
        afc_contributions: dec!(0),
        dependents: 1,
        housing_interest: dec!(10_000_000),
        prepaid_medicine: dec!(2_000_000),
        efactura_purchases: dec!(10_000_000),
        gmf_paid: dec!(500_000),
        prior_net_tax: dec!(0),
        prior_credit_balance: dec!(0),
        prior_advance: dec!(0),
        withholdings: dec!(500_000),
        years_filed: 1,
    }
}

fn assert_close(actual: Decimal, expected: Decimal) {
    let gap = (actual - expected).abs();
    assert!(gap < dec!(0.01), "expected {expected}, got {actual}");
}

// ===========================================================================
// Full assessment
// ===========================================================================

#[test]
fn test_full_assessment_worked_example() {
    let config = FiscalConfig::year_2024();
    let out = assess(&sample_inputs(), &config).unwrap();
    let r = &out.result;

    // Depuration lands at a taxable base of 58.520.440 (worked through
    // step by step in depuration_tests).
    assert_eq!(r.depuration.taxable_base, dec!(58_520_440.00));
    assert_eq!(r.taxable_base, r.depuration.taxable_base);

    // 58.520.440 / 47.065 ≈ 1243.4 UVT, first taxed bracket:
    // tax = (base - 1090 UVT) * 0.19 = 7.219.590 * 0.19 = 1.371.722,10.
    assert_close(r.taxable_base_uvt, dec!(1243.3963));
    assert_close(r.net_tax, dec!(1_371_722.10));

    // First filing: 25%. 25% of 1.371.722,10 is below the 500.000 of
    // withholdings, so both methods floor at zero.
    assert_eq!(r.advance.percentage, dec!(0.25));
    assert_eq!(r.advance.method1, Decimal::ZERO);
    assert_eq!(r.advance.method2, Decimal::ZERO);
    assert_eq!(r.advance.selected, Decimal::ZERO);

    // Settlement: net tax - withholdings + advance.
    assert_eq!(r.settlement.subtotal, r.net_tax - dec!(500_000));
    assert_eq!(
        r.settlement.final_balance,
        r.settlement.subtotal + r.advance.selected,
    );
    assert!(!r.settlement.is_refund);

    // Envelope carries the config as its assumptions.
    assert_eq!(out.assumptions["fiscal_year"], 2024);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_idempotence() {
    let config = FiscalConfig::year_2024();
    let inputs = sample_inputs();
    let a = assess(&inputs, &config).unwrap();
    let b = assess(&inputs, &config).unwrap();
    assert_eq!(a.result, b.result);
}

#[test]
fn test_net_tax_monotonic_in_gross_income() {
    let config = FiscalConfig::year_2024();
    let mut prev = Decimal::ZERO;
    for salaries in [
        dec!(30_000_000),
        dec!(60_000_000),
        dec!(90_000_000),
        dec!(150_000_000),
        dec!(300_000_000),
        dec!(900_000_000),
    ] {
        let mut inputs = sample_inputs();
        inputs.salaries = salaries;
        let out = assess(&inputs, &config).unwrap();
        assert!(out.result.net_tax >= prev, "net tax decreased at {salaries}");
        assert!(out.result.net_tax >= Decimal::ZERO);
        assert!(out.result.taxable_base >= Decimal::ZERO);
        prev = out.result.net_tax;
    }
}

#[test]
fn test_both_year_presets_assess() {
    let inputs = sample_inputs();
    let out_2024 = assess(&inputs, &FiscalConfig::year_2024()).unwrap();
    let out_2025 = assess(&inputs, &FiscalConfig::year_2025()).unwrap();
    // Different UVT and table, both deterministic and non-negative.
    assert!(out_2024.result.net_tax >= Decimal::ZERO);
    assert!(out_2025.result.net_tax >= Decimal::ZERO);
}

#[test]
fn test_severance_without_average_income_warns() {
    let config = FiscalConfig::year_2024();
    let mut inputs = sample_inputs();
    inputs.severance_pay = dec!(5_000_000);
    inputs.average_monthly_income = dec!(0);
    let out = assess(&inputs, &config).unwrap();
    assert_eq!(out.result.depuration.severance_exemption, dec!(0));
    assert!(out
        .warnings
        .iter()
        .any(|w| w.contains("average monthly income")));
}

// ===========================================================================
// Settlement
// ===========================================================================

#[test]
fn test_refund_when_withholdings_exceed_tax() {
    // subtotal = 5M - 6M = -1M; no advance; balance in favor of 1M.
    let s = settle(dec!(5_000_000), dec!(6_000_000), dec!(0), dec!(0), dec!(0), true);
    assert_eq!(s.subtotal, dec!(-1_000_000));
    assert_eq!(s.final_balance, dec!(-1_000_000));
    assert!(s.is_refund);
    assert_eq!(s.amount, dec!(1_000_000));
}

#[test]
fn test_exact_zero_balance_is_payable() {
    let s = settle(dec!(1_000_000), dec!(1_000_000), dec!(0), dec!(0), dec!(0), true);
    assert_eq!(s.final_balance, Decimal::ZERO);
    assert!(!s.is_refund);
    assert_eq!(s.amount, Decimal::ZERO);
}

#[test]
fn test_prior_year_items_subtracted_before_advance() {
    // subtotal = 10M - 2M - 1M - 3M = 4M; advance of 2.5M added on top.
    let s = settle(
        dec!(10_000_000),
        dec!(2_000_000),
        dec!(1_000_000),
        dec!(3_000_000),
        dec!(2_500_000),
        true,
    );
    assert_eq!(s.subtotal, dec!(4_000_000));
    assert_eq!(s.final_balance, dec!(6_500_000));
    assert!(!s.is_refund);
}

#[test]
fn test_settlement_variant_ignores_prior_year_items() {
    let s = settle(
        dec!(10_000_000),
        dec!(2_000_000),
        dec!(1_000_000),
        dec!(3_000_000),
        dec!(0),
        false,
    );
    assert_eq!(s.subtotal, dec!(8_000_000));
    assert_eq!(s.final_balance, dec!(8_000_000));
}

// ===========================================================================
// Validation
// ===========================================================================

fn invalid_field(err: RentaError) -> String {
    match err {
        RentaError::InvalidInput { field, .. } => field,
    }
}

#[test]
fn test_negative_monetary_field_rejected() {
    let config = FiscalConfig::year_2024();
    let mut inputs = sample_inputs();
    inputs.withholdings = dec!(-1);
    let err = validate(&inputs, &config).unwrap_err();
    assert_eq!(invalid_field(err), "withholdings");
}

#[test]
fn test_zero_years_filed_rejected() {
    let config = FiscalConfig::year_2024();
    let mut inputs = sample_inputs();
    inputs.years_filed = 0;
    let err = validate(&inputs, &config).unwrap_err();
    assert_eq!(invalid_field(err), "years_filed");
}

#[test]
fn test_contributions_exceeding_gross_income_rejected() {
    let config = FiscalConfig::year_2024();
    let mut inputs = sample_inputs();
    inputs.incr_health = dec!(90_000_000);
    inputs.incr_pension = dec!(20_000_000);
    let err = validate(&inputs, &config).unwrap_err();
    assert!(invalid_field(err).contains("incr"));
}

#[test]
fn test_non_positive_uvt_rejected() {
    let mut config = FiscalConfig::year_2024();
    config.uvt = dec!(0);
    let err = assess(&sample_inputs(), &config).unwrap_err();
    assert_eq!(invalid_field(err), "uvt");
}

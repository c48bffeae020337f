use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Rate;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One progressive bracket of the Art. 241 table, in UVT terms.
/// `cumulative_uvt` is the statutory tax anchored at `lower_uvt`; the
/// marginal rate applies to the excess over that lower bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub lower_uvt: Decimal,
    /// Inclusive upper bound; `None` for the open top bracket.
    pub upper_uvt: Option<Decimal>,
    pub marginal_rate: Rate,
    pub cumulative_uvt: Decimal,
}

/// A versioned progressive tax table. Two rule sets are in circulation
/// (the statutory anchors diverge from the second bracket up), so the
/// table always travels inside `FiscalConfig` instead of being
/// hardcoded at a call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTable {
    pub name: String,
    brackets: Vec<Bracket>,
}

// ---------------------------------------------------------------------------
// Table definitions
// ---------------------------------------------------------------------------

impl BracketTable {
    /// Art. 241 E.T. as revised by Ley 2277 de 2022: second bracket up
    /// to 1700 UVT, top bracket opening at 31000 UVT.
    pub fn art241_revised() -> Self {
        Self::from_rows(
            "art241-revised",
            &[
                (dec!(1090), dec!(0.00), dec!(0)),
                (dec!(1700), dec!(0.19), dec!(0)),
                (dec!(4100), dec!(0.28), dec!(116)),
                (dec!(8670), dec!(0.33), dec!(788)),
                (dec!(18970), dec!(0.35), dec!(2296)),
                (dec!(31000), dec!(0.37), dec!(5901)),
            ],
            dec!(0.39),
            dec!(10352),
        )
    }

    /// The pre-reform Art. 241 table: second bracket up to 1630 UVT,
    /// top bracket opening at 32370 UVT.
    pub fn art241_legacy() -> Self {
        Self::from_rows(
            "art241-legacy",
            &[
                (dec!(1090), dec!(0.00), dec!(0)),
                (dec!(1630), dec!(0.19), dec!(0)),
                (dec!(4190), dec!(0.28), dec!(103)),
                (dec!(8670), dec!(0.33), dec!(828)),
                (dec!(18970), dec!(0.35), dec!(2270)),
                (dec!(32370), dec!(0.37), dec!(5890)),
            ],
            dec!(0.39),
            dec!(10954),
        )
    }

    /// Build a table from `(upper_bound, rate, cumulative)` rows. The
    /// first row is the zero band; `top_rate`/`top_cumulative` define
    /// the open bracket above the last upper bound.
    fn from_rows(
        name: &str,
        rows: &[(Decimal, Rate, Decimal)],
        top_rate: Rate,
        top_cumulative: Decimal,
    ) -> Self {
        let mut brackets = Vec::with_capacity(rows.len() + 1);
        let mut lower = Decimal::ZERO;
        for &(upper, rate, cumulative) in rows {
            brackets.push(Bracket {
                lower_uvt: lower,
                upper_uvt: Some(upper),
                marginal_rate: rate,
                cumulative_uvt: cumulative,
            });
            lower = upper;
        }
        brackets.push(Bracket {
            lower_uvt: lower,
            upper_uvt: None,
            marginal_rate: top_rate,
            cumulative_uvt: top_cumulative,
        });
        BracketTable {
            name: name.to_string(),
            brackets,
        }
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Tax in UVT for a non-negative taxable base in UVT.
    ///
    /// `floor_base` applies the statutory rounding rule (base truncated
    /// to the whole UVT below) before the lookup; one rule-set variant
    /// mandates it, the other does not, so the caller decides via
    /// `FiscalConfig::floor_base_before_lookup`.
    ///
    /// Upper bounds are inclusive: a base exactly on a boundary is
    /// taxed by the bracket below it.
    pub fn tax_in_uvt(&self, base_uvt: Decimal, floor_base: bool) -> Decimal {
        let base = if floor_base { base_uvt.floor() } else { base_uvt };
        if base <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        for bracket in &self.brackets {
            let in_bracket = match bracket.upper_uvt {
                Some(upper) => base <= upper,
                None => true,
            };
            if in_bracket {
                let excess = base - bracket.lower_uvt;
                return bracket.cumulative_uvt + excess * bracket.marginal_rate;
            }
        }

        // The final bracket is unbounded, so the loop always returns.
        unreachable!("bracket table has no open top bracket")
    }
}

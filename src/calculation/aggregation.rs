//! Premium aggregation.
//!
//! Sums per-item premiums into net totals and grosses them up for brokerage.
//! Totals are rounded to whole currency units; the grand total adds the
//! already-rounded category totals without rounding again.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Guarded, RatedCamera, RatedDrone};

use super::zero_guard::checked;

/// Decimal places kept on net and gross totals.
pub const TOTAL_DECIMALS: u32 = 0;

/// A premium field that can be totalled across items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumField {
    /// `hull_premium`
    HullPremium,
    /// `tpl_layer_premium`
    TplLayerPremium,
}

impl PremiumField {
    /// Returns the field name used in fleet documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumField::HullPremium => "hull_premium",
            PremiumField::TplLayerPremium => "tpl_layer_premium",
        }
    }
}

/// Items that carry premium fields.
pub trait PremiumItem {
    /// Returns the premium held in `field`.
    ///
    /// Items without the field, and NotApplicable premiums, return `None`
    /// and contribute nothing to totals.
    fn premium(&self, field: PremiumField) -> Option<Decimal>;
}

impl PremiumItem for RatedDrone {
    fn premium(&self, field: PremiumField) -> Option<Decimal> {
        match field {
            PremiumField::HullPremium => self.rating.hull_premium.value(),
            PremiumField::TplLayerPremium => self.rating.tpl_layer_premium.value(),
        }
    }
}

impl PremiumItem for RatedCamera {
    fn premium(&self, field: PremiumField) -> Option<Decimal> {
        match field {
            PremiumField::HullPremium => self.rating.hull_premium.value(),
            PremiumField::TplLayerPremium => None,
        }
    }
}

impl PremiumItem for Guarded<Decimal> {
    fn premium(&self, _field: PremiumField) -> Option<Decimal> {
        self.value()
    }
}

/// Sums `field` over `items`, rounded to whole units.
///
/// # Examples
///
/// ```
/// use uav_rating_engine::calculation::{PremiumField, total_net};
/// use uav_rating_engine::models::Guarded;
/// use rust_decimal::Decimal;
///
/// let premiums = vec![
///     Guarded::Value(Decimal::from(600)),
///     Guarded::NotApplicable,
///     Guarded::Value(Decimal::from(1152)),
/// ];
/// assert_eq!(
///     total_net(&premiums, PremiumField::HullPremium).unwrap(),
///     Decimal::from(1752)
/// );
/// ```
pub fn total_net<I: PremiumItem>(items: &[I], field: PremiumField) -> EngineResult<Decimal> {
    let total = items
        .iter()
        .filter_map(|item| item.premium(field))
        .try_fold(Decimal::ZERO, |total, premium| {
            checked(total.checked_add(premium), field.as_str())
        })?;
    Ok(total.round_dp(TOTAL_DECIMALS))
}

/// Checks that `brokerage` lies in `[0, 1)`.
pub fn validate_brokerage(brokerage: Decimal) -> EngineResult<()> {
    if brokerage < Decimal::ZERO || brokerage >= Decimal::ONE {
        return Err(EngineError::InvalidBrokerage { brokerage });
    }
    Ok(())
}

/// Converts a net amount to gross: `round(net / (1 - brokerage))`.
pub fn gross_up(net: Decimal, brokerage: Decimal) -> EngineResult<Decimal> {
    validate_brokerage(brokerage)?;
    let gross = checked(net.checked_div(Decimal::ONE - brokerage), "gross premium")?;
    Ok(gross.round_dp(TOTAL_DECIMALS))
}

/// Sums `field` over `items` and grosses the rounded net total up for brokerage.
pub fn total_gross<I: PremiumItem>(
    items: &[I],
    brokerage: Decimal,
    field: PremiumField,
) -> EngineResult<Decimal> {
    gross_up(total_net(items, field)?, brokerage)
}

/// Adds already-rounded category totals.
pub fn premium_grand_total(totals: &[Decimal]) -> EngineResult<Decimal> {
    totals.iter().try_fold(Decimal::ZERO, |total, amount| {
        checked(total.checked_add(*amount), "premium grand total")
    })
}

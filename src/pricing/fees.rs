// ============================================================================
// Listing Fees - Nexus Marketplace
// ============================================================================
//
// Two flat-rate fees are taken from what the buyer pays:
//   market fee    = max(1, round(buyer_pays * 5%))
//   developer fee = max(1, round(buyer_pays * 5%))
//   seller gets   = max(1, buyer_pays - market fee - developer fee)
//
// All amounts here are display units (NP). Below the 3 NP minimum no split
// is computed and the sell form leaves the other field blank.
//
// The reverse direction (seller receives -> buyer pays) is the sell form's
// approximation `round(seller / 0.9)`, falling back to `seller + 2` when that
// would land under the minimum. It is NOT an exact inverse of the forward
// rule: with both fees pinned at their 1 NP floor, or when both 5% shares
// round up on a .5, the round trip drifts by a unit or two.
//
// ============================================================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Minimum listing price in NP (0.03 internal)
pub const MIN_LISTING_PRICE_NP: i64 = 3;

/// Marketplace operator fee (5%)
pub const MARKET_FEE_RATE: Decimal = dec!(0.05);

/// Game developer fee (5%)
pub const DEVELOPER_FEE_RATE: Decimal = dec!(0.05);

/// Floor applied to each fee and to the seller's share
pub const MIN_FEE_NP: i64 = 1;

/// Seller's nominal share used by the reverse calculation
const SELLER_SHARE: Decimal = dec!(0.9);

/// How a buyer's payment is divided, in NP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub buyer_pays: i64,
    pub market_fee: i64,
    pub developer_fee: i64,
    pub seller_receives: i64,
}

impl FeeBreakdown {
    pub fn total_fees(&self) -> i64 {
        self.market_fee + self.developer_fee
    }
}

/// Forward split. `None` below the minimum listing price.
pub fn fee_split(buyer_pays: i64) -> Option<FeeBreakdown> {
    if buyer_pays < MIN_LISTING_PRICE_NP {
        return None;
    }

    let market_fee = percent_fee(buyer_pays, MARKET_FEE_RATE);
    let developer_fee = percent_fee(buyer_pays, DEVELOPER_FEE_RATE);
    let seller_receives = (buyer_pays - market_fee - developer_fee).max(MIN_FEE_NP);

    Some(FeeBreakdown {
        buyer_pays,
        market_fee,
        developer_fee,
        seller_receives,
    })
}

/// Approximate buyer price for a desired payout. `None` for non-positive input.
pub fn buyer_pays_for(seller_receives: i64) -> Option<i64> {
    if seller_receives <= 0 {
        return None;
    }

    let estimate = round_np(Decimal::from(seller_receives) / SELLER_SHARE);
    if estimate < MIN_LISTING_PRICE_NP {
        Some(seller_receives + 2 * MIN_FEE_NP)
    } else {
        Some(estimate)
    }
}

fn percent_fee(buyer_pays: i64, rate: Decimal) -> i64 {
    round_np(Decimal::from(buyer_pays) * rate).max(MIN_FEE_NP)
}

/// Half-up rounding to a whole NP (amounts here are never negative)
pub(crate) fn round_np(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_minimum_is_blank() {
        assert_eq!(fee_split(2), None);
        assert_eq!(fee_split(0), None);
        assert_eq!(fee_split(-40), None);
        assert!(fee_split(MIN_LISTING_PRICE_NP).is_some());
    }

    #[test]
    fn test_small_prices_pin_both_fees_at_one() {
        for buyer_pays in 3..20 {
            let split = fee_split(buyer_pays).unwrap();
            assert_eq!(split.market_fee, 1, "buyer_pays={}", buyer_pays);
            assert_eq!(split.developer_fee, 1, "buyer_pays={}", buyer_pays);
            assert_eq!(split.seller_receives, buyer_pays - 2);
        }
    }

    #[test]
    fn test_flat_ten_percent_on_larger_prices() {
        for buyer_pays in [20, 40, 100, 240, 1000, 5000, 123_460] {
            let split = fee_split(buyer_pays).unwrap();
            assert_eq!(
                split.seller_receives,
                round_np(Decimal::from(buyer_pays) * dec!(0.9)),
                "buyer_pays={}",
                buyer_pays
            );
        }
    }

    #[test]
    fn test_fees_round_up_on_half() {
        // 30 * 5% = 1.5 on each side, both round up to 2
        let split = fee_split(30).unwrap();
        assert_eq!(split.market_fee, 2);
        assert_eq!(split.developer_fee, 2);
        assert_eq!(split.seller_receives, 26);
    }

    #[test]
    fn test_thousand_np_listing() {
        let split = fee_split(1000).unwrap();
        assert_eq!(split.market_fee, 50);
        assert_eq!(split.developer_fee, 50);
        assert_eq!(split.total_fees(), 100);
        assert_eq!(split.seller_receives, 900);
    }

    #[test]
    fn test_reverse_estimate() {
        assert_eq!(buyer_pays_for(900), Some(1000));
        assert_eq!(buyer_pays_for(18), Some(20));
        // round(1 / 0.9) = 1 and round(2 / 0.9) = 2 are under the minimum
        assert_eq!(buyer_pays_for(1), Some(3));
        assert_eq!(buyer_pays_for(2), Some(4));
        assert_eq!(buyer_pays_for(0), None);
    }

    #[test]
    fn test_reverse_is_only_approximate_near_the_floor() {
        // Known tolerance band: the round trip is off by at most 2 NP
        for seller_receives in 1..60 {
            let buyer_pays = buyer_pays_for(seller_receives).unwrap();
            let back = fee_split(buyer_pays).unwrap().seller_receives;
            assert!(
                (back - seller_receives).abs() <= 2,
                "seller_receives={} buyer_pays={} back={}",
                seller_receives,
                buyer_pays,
                back
            );
        }

        // e.g. 3 NP wanted -> round(3.33) = 3 -> seller only gets 1
        assert_eq!(buyer_pays_for(3), Some(3));
        assert_eq!(fee_split(3).unwrap().seller_receives, 1);
    }

    #[test]
    fn test_breakdown_json_keys() {
        let value = serde_json::to_value(fee_split(1000).unwrap()).unwrap();
        assert_eq!(value["buyerPays"], 1000);
        assert_eq!(value["marketFee"], 50);
        assert_eq!(value["developerFee"], 50);
        assert_eq!(value["sellerReceives"], 900);
    }
}

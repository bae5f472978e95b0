// Synthetic price history for the item-detail chart.
//
// Random walk from the template's base price: each day moves by a uniform
// draw in [-7.5%, +7.5%] of base, never dropping under 10% of base.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Trailing window shown on the chart, today included
pub const DEFAULT_HISTORY_DAYS: u32 = 31;

/// Peak-to-peak daily move as a fraction of base
const VOLATILITY: Decimal = dec!(0.15);

const FLOOR_RATIO: Decimal = dec!(0.1);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Deterministic core: caller supplies the end date and the random source.
/// Prices are on the same scale as `base_price`, rounded to 2 dp.
pub fn generate_price_history<R: Rng + ?Sized>(
    base_price: Decimal,
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<PricePoint> {
    let floor = base_price * FLOOR_RATIO;
    let swing = base_price * VOLATILITY;
    let mut current = base_price;

    (0..days)
        .rev()
        .map(|days_back| {
            let draw = Decimal::from_f64(rng.gen::<f64>()).unwrap_or(dec!(0.5));
            current += (draw - dec!(0.5)) * swing;
            if current < floor {
                current = floor;
            }

            let price = current
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .max(floor);

            PricePoint {
                date: today - Duration::days(i64::from(days_back)),
                price,
            }
        })
        .collect()
}

/// Default 31-day window ending today, process-wide randomness
pub fn price_history(base_price: Decimal) -> Vec<PricePoint> {
    generate_price_history(
        base_price,
        DEFAULT_HISTORY_DAYS,
        Utc::now().date_naive(),
        &mut rand::thread_rng(),
    )
}

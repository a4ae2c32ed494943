use chrono::{DateTime, FixedOffset, TimeZone};
use rust_decimal::Decimal;
use tradenote::domain::{OrderIntent, OrderResult, VenueId};

/// Spot crypto intent on `exchange` for BTC/USDT with no direction or sizing.
pub fn crypto_intent(exchange: &str) -> OrderIntent {
    OrderIntent {
        exchange: VenueId::new(exchange),
        base: "BTC".into(),
        quote: "USDT".into(),
        is_crypto: true,
        ..OrderIntent::default()
    }
}

/// Stock intent on `exchange` for `ticker` with no direction or sizing.
pub fn stock_intent(exchange: &str, ticker: &str, quote: &str) -> OrderIntent {
    OrderIntent {
        exchange: VenueId::new(exchange),
        base: ticker.into(),
        quote: quote.into(),
        ..OrderIntent::default()
    }
}

pub fn spot_buy(mut intent: OrderIntent) -> OrderIntent {
    intent.is_buy = true;
    intent
}

pub fn spot_sell(mut intent: OrderIntent) -> OrderIntent {
    intent.is_sell = true;
    intent
}

pub fn long_entry(mut intent: OrderIntent) -> OrderIntent {
    intent.is_futures = true;
    intent.is_entry = true;
    intent.is_buy = true;
    intent
}

pub fn long_close(mut intent: OrderIntent) -> OrderIntent {
    intent.is_futures = true;
    intent.is_close = true;
    intent.is_sell = true;
    intent
}

pub fn with_amount(mut intent: OrderIntent, amount: Decimal) -> OrderIntent {
    intent.amount = Some(amount);
    intent
}

pub fn with_percent(mut intent: OrderIntent, percent: Decimal) -> OrderIntent {
    intent.percent = Some(percent);
    intent
}

pub fn result(json: &str) -> OrderResult {
    OrderResult::from_json(json).expect("valid order result json")
}

/// A fixed instant in UTC+9.
pub fn kst(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .expect("valid offset")
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("unambiguous time")
}

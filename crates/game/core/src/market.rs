//! Market snapshot and the pricing rules applied to it.
//!
//! Quotes are keyed by item display name (as published by the market feed) or
//! by hrid. A quote side of `-1` means nobody is bidding/asking. Missing data
//! is never an error: each pricing function substitutes a sentinel instead.

use std::collections::BTreeMap;

use crate::config::MarketSettings;
use crate::data::{GameData, hrid};

/// Marketplace fee kept from every sale.
pub const SELL_FEE_FACTOR: f64 = 0.98;

/// Bid/ask pair for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quote {
    pub bid: f64,
    pub ask: f64,
}

impl Quote {
    /// Sentinel for an unquoted side.
    pub const NONE: f64 = -1.0;

    pub const fn new(bid: f64, ask: f64) -> Self {
        Self { bid, ask }
    }

    pub const fn unquoted() -> Self {
        Self::new(Self::NONE, Self::NONE)
    }

    pub fn bid(&self) -> Option<f64> {
        (self.bid != Self::NONE).then_some(self.bid)
    }

    pub fn ask(&self) -> Option<f64> {
        (self.ask != Self::NONE).then_some(self.ask)
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::unquoted()
    }
}

/// Point-in-time market prices.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Unix timestamp of the snapshot, if the feed provided one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timestamp: Option<u64>,
    pub market: BTreeMap<String, Quote>,
}

impl MarketSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, key: impl Into<String>, bid: f64, ask: f64) -> Self {
        self.market.insert(key.into(), Quote::new(bid, ask));
        self
    }

    /// Quote for an item, looked up by display name first and hrid second.
    pub fn quote(&self, data: &GameData, item_hrid: &str) -> Quote {
        self.market
            .get(data.item_name(item_hrid))
            .or_else(|| self.market.get(item_hrid))
            .copied()
            .unwrap_or_default()
    }
}

/// Linear interpolation that returns the endpoints exactly at `t <= 0` and
/// `t >= 1`. Callers must not pass an infinite endpoint with `0 < t < 1`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// Pricing view over a market snapshot for one player's settings.
#[derive(Clone, Copy, Debug)]
pub struct Pricer<'a> {
    data: &'a GameData,
    market: &'a MarketSnapshot,
    settings: &'a MarketSettings,
}

impl<'a> Pricer<'a> {
    pub fn new(data: &'a GameData, market: &'a MarketSnapshot, settings: &'a MarketSettings) -> Self {
        Self {
            data,
            market,
            settings,
        }
    }

    /// Unit cost of buying an item.
    ///
    /// Interpolates ask → bid. No ask means the item cannot be bought
    /// (infinite cost); no bid falls back to the ask.
    pub fn input_price(&self, item_hrid: &str) -> f64 {
        if item_hrid == hrid::COIN {
            return 1.0;
        }

        let quote = self.market.quote(self.data, item_hrid);
        let Some(ask) = quote.ask() else {
            return f64::INFINITY;
        };
        let bid = quote.bid().unwrap_or(ask);

        lerp(ask, bid, self.settings.input_bid_ask_proportion)
    }

    /// Unit revenue of selling an item.
    ///
    /// Interpolates bid → ask, deducts the market fee, and never goes below
    /// the guaranteed vendor price.
    pub fn output_price(&self, item_hrid: &str) -> f64 {
        if item_hrid == hrid::COIN {
            return 1.0;
        }

        let quote = self.market.quote(self.data, item_hrid);
        let bid = quote.bid().unwrap_or(0.0);
        let ask = quote.ask().unwrap_or(bid);

        let market_price = lerp(bid, ask, self.settings.output_bid_ask_proportion) * SELL_FEE_FACTOR;
        market_price.max(self.data.sell_price(item_hrid))
    }

    /// Relative bid-ask spread `(ask - bid) / ask`.
    ///
    /// Unquoted sides count as maximally illiquid (1). Coins are perfectly
    /// liquid (0).
    pub fn spread(&self, item_hrid: &str) -> f64 {
        if item_hrid == hrid::COIN {
            return 0.0;
        }

        let quote = self.market.quote(self.data, item_hrid);
        match (quote.bid(), quote.ask()) {
            (Some(bid), Some(ask)) if ask > 0.0 => (ask - bid) / ask,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemDetail;

    fn data() -> GameData {
        let mut data = GameData::default();
        for item in [
            ItemDetail::new("/items/milk", "Milk", "/item_categories/resource").with_sell_price(1.0),
            ItemDetail::new("/items/cheese", "Cheese", "/item_categories/resource").with_sell_price(50.0),
            ItemDetail::new("/items/coin", "Coin", "/item_categories/currency"),
        ] {
            data.item_detail_map.insert(item.hrid.clone(), item);
        }
        data
    }

    fn settings(input: f64, output: f64) -> MarketSettings {
        MarketSettings {
            input_bid_ask_proportion: input,
            output_bid_ask_proportion: output,
        }
    }

    #[test]
    fn lerp_returns_exact_endpoints() {
        assert_eq!(lerp(f64::INFINITY, 3.0, 1.0), 3.0);
        assert_eq!(lerp(f64::INFINITY, 3.0, 0.0), f64::INFINITY);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn input_price_sentinels() {
        let data = data();
        let market = MarketSnapshot::new()
            .with_quote("Milk", -1.0, 20.0)
            .with_quote("Cheese", 10.0, -1.0);
        let cfg = settings(0.5, 0.0);
        let pricer = Pricer::new(&data, &market, &cfg);

        // Missing bid falls back to ask.
        assert_eq!(pricer.input_price("/items/milk"), 20.0);
        // Missing ask means infinite cost.
        assert_eq!(pricer.input_price("/items/cheese"), f64::INFINITY);
        // Not listed at all.
        assert_eq!(pricer.input_price("/items/unknown"), f64::INFINITY);
    }

    #[test]
    fn missing_ask_is_infinite_at_every_proportion() {
        let data = data();
        let market = MarketSnapshot::new().with_quote("Milk", 10.0, -1.0);
        for p in [0.0, 0.25, 0.5, 0.99, 1.0] {
            let cfg = settings(p, 0.0);
            let price = Pricer::new(&data, &market, &cfg).input_price("/items/milk");
            assert_eq!(price, f64::INFINITY, "proportion {p}");
        }
    }

    #[test]
    fn output_price_applies_fee_and_vendor_floor() {
        let data = data();
        let market = MarketSnapshot::new()
            .with_quote("Milk", 10.0, 20.0)
            .with_quote("Cheese", 40.0, 45.0);
        let cfg = settings(0.0, 0.5);
        let pricer = Pricer::new(&data, &market, &cfg);

        assert!((pricer.output_price("/items/milk") - 15.0 * 0.98).abs() < 1e-12);
        // Market price below the vendor price.
        assert_eq!(pricer.output_price("/items/cheese"), 50.0);
    }

    #[test]
    fn output_price_is_monotonic_in_proportion() {
        let data = data();
        let market = MarketSnapshot::new().with_quote("Milk", 10.0, 30.0);
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=10 {
            let cfg = settings(0.0, step as f64 / 10.0);
            let price = Pricer::new(&data, &market, &cfg).output_price("/items/milk");
            assert!(price >= previous);
            previous = price;
        }
    }

    #[test]
    fn coin_is_always_one() {
        let data = data();
        let market = MarketSnapshot::new().with_quote("Coin", 5.0, 7.0);
        for p in [0.0, 0.3, 1.0] {
            let cfg = settings(p, p);
            let pricer = Pricer::new(&data, &market, &cfg);
            assert_eq!(pricer.input_price(hrid::COIN), 1.0);
            assert_eq!(pricer.output_price(hrid::COIN), 1.0);
        }
    }

    #[test]
    fn quote_lookup_accepts_hrid_keys() {
        let data = data();
        let market = MarketSnapshot::new().with_quote("/items/milk", 4.0, 5.0);
        assert_eq!(market.quote(&data, "/items/milk"), Quote::new(4.0, 5.0));
    }

    #[test]
    fn spread_defaults_to_illiquid() {
        let data = data();
        let market = MarketSnapshot::new()
            .with_quote("Milk", 8.0, 10.0)
            .with_quote("Cheese", -1.0, 10.0);
        let cfg = settings(0.0, 0.0);
        let pricer = Pricer::new(&data, &market, &cfg);

        assert!((pricer.spread("/items/milk") - 0.2).abs() < 1e-12);
        assert_eq!(pricer.spread("/items/cheese"), 1.0);
        assert_eq!(pricer.spread(hrid::COIN), 0.0);
    }
}

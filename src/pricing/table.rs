// src/pricing/table.rs

use serde::{Deserialize, Serialize};

/// One row of the pricing schedule: prices, collateral and the derived
/// tax/fund metrics at a single integer supply level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    pub supply: u32,
    pub buy_price: f64,
    pub sell_price: f64,
    pub buy_collateral: f64,
    pub sell_collateral: f64,
    /// 1 - sell_price / buy_price, rounded; 0 where buy_price is 0.
    pub tax_rate: f64,
    /// buy_price - sell_price, rounded.
    pub tax_amount: f64,
    /// 1 - sell_collateral / buy_collateral, rounded; 0 where it is 0.
    pub fund_rate: f64,
    /// buy_collateral - sell_collateral, rounded.
    pub fund_amount: f64,
}

/// The dense pricing schedule over the integer supply range 0..=max_supply.
/// Built once per configuration and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    rows: Vec<PricingRow>,
}

impl PricingTable {
    pub(crate) fn new(rows: Vec<PricingRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PricingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest supply level the table covers.
    pub fn max_supply(&self) -> u32 {
        (self.rows.len() as u32).saturating_sub(1)
    }

    /// Row at the given supply level, if the table covers it.
    pub fn row(&self, supply: u32) -> Option<&PricingRow> {
        self.rows.get(supply as usize)
    }
}

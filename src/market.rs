// src/market.rs

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::SimulatorError;
use crate::pricing::curve_config::CurveConfig;
use crate::pricing::sigmoid_model::{BondingCurveModel, SigmoidCurve};
use crate::pricing::table::PricingTable;
use crate::shared_types::MarketSnapshot;

/// Running market accounting. Funds split two ways: taxation flows to an
/// operating fund, the remainder is locked in the collateral reserve that
/// backs token burns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketState {
    /// Tokens currently minted against the curve; always within
    /// [0, max_supply].
    pub tokens_circulation: u32,
    /// Tokens executed by the most recent buy (not cumulative).
    pub tokens_bought: u32,
    /// Tokens executed by the most recent sell (not cumulative).
    pub tokens_sold: u32,
    /// Operating funds collected from buy-side taxation. Never decreases:
    /// tax is not collected on sells.
    pub fund_balance: f64,
    /// Reserve backing token burns. Credited net-of-tax on buys, debited
    /// gross on sells.
    pub collateral_balance: f64,
}

/// The result of one executed trade, after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub tokens: u32,
    pub amount: f64,
    pub fee: f64,
}

/// The market engine. Owns one bonding curve, the pricing table evaluated
/// from it, and the running accounting state. Trading is only possible once
/// `rebuild` has produced a table.
pub struct Market {
    curve: Box<dyn BondingCurveModel>,
    table: Option<PricingTable>,
    state: MarketState,
}

impl Market {
    /// A market with no pricing table yet; every trading operation fails
    /// until [`Market::rebuild`] succeeds.
    pub fn new(curve: Box<dyn BondingCurveModel>) -> Self {
        Self { curve, table: None, state: MarketState::default() }
    }

    /// Re-evaluates the pricing table for a new supply ceiling or curve
    /// configuration. Circulation and balances are left untouched.
    pub fn rebuild(&mut self, max_supply: u32, config: &CurveConfig) -> Result<(), SimulatorError> {
        self.table = Some(self.curve.evaluate(max_supply, config)?);
        Ok(())
    }

    /// Zeroes the accounting state. The pricing table is kept as-is.
    pub fn reset(&mut self) {
        self.state = MarketState::default();
    }

    pub fn state(&self) -> &MarketState {
        &self.state
    }

    pub fn pricing_table(&self) -> Option<&PricingTable> {
        self.table.as_ref()
    }

    fn table(&self) -> Result<&PricingTable, SimulatorError> {
        self.table.as_ref().ok_or(SimulatorError::NotInitialized)
    }

    /// Swap reserve currency for tokens.
    ///
    /// Executes `min(requested, max_supply - circulation)` whole tokens,
    /// summing the buy price and tax over the half-open row range the trade
    /// walks through. Net of tax goes to the collateral reserve, the tax to
    /// the operating fund. Requesting more than remains is not an error; the
    /// clamped amount (possibly zero) executes.
    pub fn buy_tokens(&mut self, requested: f64) -> Result<TradeOutcome, SimulatorError> {
        let table = self.table()?;
        let start = self.state.tokens_circulation;
        let end = clamp_to_grid(start, requested, table.max_supply());
        let executed = end - start;

        // After a shrinking rebuild the start index can sit past the table
        // end; the window is empty there.
        let window = table.rows().get(start as usize..end as usize).unwrap_or_default();
        let amount: f64 = window.iter().map(|r| r.buy_price).sum();
        let tax_amount: f64 = window.iter().map(|r| r.tax_amount).sum();

        self.state.collateral_balance += amount - tax_amount;
        self.state.fund_balance += tax_amount;
        self.state.tokens_bought = executed;
        self.state.tokens_circulation = end;

        debug!("buy: executed {executed} gross {amount} tax {tax_amount}");
        Ok(TradeOutcome { tokens: executed, amount, fee: tax_amount })
    }

    /// Swap tokens for reserve currency.
    ///
    /// The row window mirrors the buy side, clamped one row short of the
    /// table end rather than at the supply ceiling. The gross amount leaves the
    /// collateral reserve; sell-side tax is not collected into the fund.
    /// Execution is additionally capped at the current circulation so the
    /// pool can never go negative.
    pub fn sell_tokens(&mut self, requested: f64) -> Result<TradeOutcome, SimulatorError> {
        let table = self.table()?;
        let start = self.state.tokens_circulation;
        let end = clamp_to_grid(start, requested, table.max_supply() - 1);
        let executed = (end - start).min(start);

        let window = table
            .rows()
            .get(start as usize..(start + executed) as usize)
            .unwrap_or_default();
        let amount: f64 = window.iter().map(|r| r.sell_price).sum();
        let tax_amount: f64 = window.iter().map(|r| r.tax_amount).sum();

        self.state.collateral_balance -= amount;
        self.state.tokens_sold = executed;
        self.state.tokens_circulation = start - executed;

        debug!("sell: executed {executed} gross {amount} tax {tax_amount}");
        Ok(TradeOutcome { tokens: executed, amount, fee: tax_amount })
    }

    /// Instantaneous buy price at the current circulation.
    pub fn buy_price(&self) -> Result<f64, SimulatorError> {
        let table = self.table()?;
        let index = self.state.tokens_circulation;
        table
            .row(index)
            .map(|row| row.buy_price)
            .ok_or(SimulatorError::OutOfRange { index: index as usize, rows: table.len() })
    }

    /// Instantaneous sell price at the current circulation.
    pub fn sell_price(&self) -> Result<f64, SimulatorError> {
        let table = self.table()?;
        let index = self.state.tokens_circulation;
        table
            .row(index)
            .map(|row| row.sell_price)
            .ok_or(SimulatorError::OutOfRange { index: index as usize, rows: table.len() })
    }

    /// The full market-side view recorded once per simulation step.
    pub fn snapshot(&self) -> Result<MarketSnapshot, SimulatorError> {
        Ok(MarketSnapshot {
            tokens_circulation: self.state.tokens_circulation,
            tokens_bought: self.state.tokens_bought,
            tokens_sold: self.state.tokens_sold,
            fund_balance: self.state.fund_balance,
            collateral_balance: self.state.collateral_balance,
            buy_price: self.buy_price()?,
            sell_price: self.sell_price()?,
        })
    }
}

impl Default for Market {
    fn default() -> Self {
        Market::new(Box::new(SigmoidCurve))
    }
}

/// Walks `requested` tokens up from `start`, clamped to `ceiling` and floored
/// onto the integer supply grid. Never moves below `start`.
fn clamp_to_grid(start: u32, requested: f64, ceiling: u32) -> u32 {
    let end = (f64::from(start) + requested.max(0.0)).min(f64::from(ceiling));
    (end.floor() as u32).max(start)
}

// -----------------------------------------------------------------------------
//  Unit Tests
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::scenario_type::ScenarioType;

    const MAX_SUPPLY: u32 = 1000;

    fn no_fee_config() -> CurveConfig {
        CurveConfig {
            scenario: ScenarioType::NoFee,
            buy_price_scale: 50.0,
            buy_inflection: 500.0,
            buy_slope: 50.0,
            vertical_displacement: 0.0,
            tax_rate: 0.0,
            sell_price_scale: 50.0,
            sell_inflection: 500.0,
            sell_slope: 50.0,
            horizontal_displacement: 0.0,
        }
    }

    fn constant_fee_config() -> CurveConfig {
        CurveConfig {
            scenario: ScenarioType::ConstantFee,
            vertical_displacement: 20.0,
            ..no_fee_config()
        }
    }

    fn ready_market(config: &CurveConfig) -> Market {
        let mut market = Market::default();
        market.rebuild(MAX_SUPPLY, config).unwrap();
        market
    }

    #[test]
    fn test_trading_before_rebuild_fails() {
        let mut market = Market::default();
        assert!(matches!(market.buy_tokens(1.0), Err(SimulatorError::NotInitialized)));
        assert!(matches!(market.sell_tokens(1.0), Err(SimulatorError::NotInitialized)));
        assert!(matches!(market.buy_price(), Err(SimulatorError::NotInitialized)));
        assert!(matches!(market.sell_price(), Err(SimulatorError::NotInitialized)));
    }

    #[test]
    fn test_buy_sums_the_walked_row_range() {
        let mut market = ready_market(&no_fee_config());
        let expected: f64 = market.pricing_table().unwrap().rows()[0..3]
            .iter()
            .map(|r| r.buy_price)
            .sum();

        let outcome = market.buy_tokens(3.0).unwrap();

        assert_eq!(outcome.tokens, 3);
        assert!((outcome.amount - expected).abs() < 1e-12);
        assert_eq!(outcome.fee, 0.0);
        assert_eq!(market.state().tokens_circulation, 3);
        assert_eq!(market.state().tokens_bought, 3);
        assert!((market.state().collateral_balance - expected).abs() < 1e-12);
    }

    #[test]
    fn test_buy_clamps_at_supply_ceiling() {
        let mut market = ready_market(&no_fee_config());

        let first = market.buy_tokens(2000.0).unwrap();
        assert_eq!(first.tokens, MAX_SUPPLY, "only the full supply can execute");
        assert_eq!(market.state().tokens_circulation, MAX_SUPPLY);

        let state_before = *market.state();
        let second = market.buy_tokens(10.0).unwrap();
        assert_eq!(second.tokens, 0, "the ceiling leaves nothing to execute");
        assert_eq!(second.amount, 0.0);
        // tokens_bought is the last-trade delta, so it drops to zero too.
        assert_eq!(market.state().tokens_bought, 0);
        assert_eq!(market.state().fund_balance, state_before.fund_balance);
        assert_eq!(market.state().collateral_balance, state_before.collateral_balance);
        assert_eq!(market.state().tokens_circulation, state_before.tokens_circulation);
    }

    #[test]
    fn test_zero_request_is_a_noop() {
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(5.0).unwrap();
        let state_before = *market.state();

        let outcome = market.buy_tokens(0.0).unwrap();

        assert_eq!(outcome.tokens, 0);
        assert_eq!(market.state().tokens_circulation, state_before.tokens_circulation);
        assert_eq!(market.state().collateral_balance, state_before.collateral_balance);
    }

    #[test]
    fn test_fractional_requests_floor_to_whole_tokens() {
        let mut market = ready_market(&no_fee_config());
        let outcome = market.buy_tokens(2.7).unwrap();
        assert_eq!(outcome.tokens, 2);
        assert_eq!(market.state().tokens_circulation, 2);
    }

    #[test]
    fn test_sell_reads_rows_above_circulation() {
        // The sell window starts at the current circulation index, exactly
        // like the buy window does.
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(5.0).unwrap();
        let expected: f64 = market.pricing_table().unwrap().rows()[5..7]
            .iter()
            .map(|r| r.sell_price)
            .sum();

        let outcome = market.sell_tokens(2.0).unwrap();

        assert_eq!(outcome.tokens, 2);
        assert!((outcome.amount - expected).abs() < 1e-12);
        assert_eq!(market.state().tokens_circulation, 3);
        assert_eq!(market.state().tokens_sold, 2);
    }

    #[test]
    fn test_round_trip_restores_circulation_and_collateral() {
        // Buy N then sell N in the no-fee scenario: circulation returns to
        // zero and the reserve drains back to (approximately) zero. The
        // windows the two trades walk are one row apart, so the residue is
        // bounded by the local price drift.
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(10.0).unwrap();
        market.sell_tokens(10.0).unwrap();

        assert_eq!(market.state().tokens_circulation, 0);
        assert!(
            market.state().collateral_balance.abs() < 1e-2,
            "collateral residue {} exceeds tolerance",
            market.state().collateral_balance
        );
        assert_eq!(market.state().fund_balance, 0.0);
    }

    #[test]
    fn test_sell_clamps_at_table_end() {
        // The sell window stops one row short of the table's last index; at
        // full circulation there is no row to walk, so nothing executes.
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(f64::from(MAX_SUPPLY)).unwrap();

        let at_ceiling = market.sell_tokens(5.0).unwrap();
        assert_eq!(at_ceiling.tokens, 0);
        assert_eq!(market.state().tokens_circulation, MAX_SUPPLY);

        // One short of the clamp row: only a single row remains in range.
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(998.0).unwrap();
        let near_ceiling = market.sell_tokens(5.0).unwrap();
        assert_eq!(near_ceiling.tokens, 1, "rows [998, 999) leave one token sellable");
        assert_eq!(market.state().tokens_circulation, 997);
    }

    #[test]
    fn test_sell_at_zero_circulation_is_noop() {
        let mut market = ready_market(&no_fee_config());

        let outcome = market.sell_tokens(1.0).unwrap();

        assert_eq!(outcome.tokens, 0);
        assert_eq!(outcome.amount, 0.0);
        assert_eq!(market.state().tokens_circulation, 0);
        assert_eq!(market.state().collateral_balance, 0.0);
    }

    #[test]
    fn test_buy_splits_tax_into_fund() {
        let mut market = ready_market(&constant_fee_config());

        let outcome = market.buy_tokens(2.0).unwrap();

        // Constant taxation: each of the two tokens is taxed exactly k = 20.
        assert!((outcome.fee - 40.0).abs() < 1e-9);
        assert!((market.state().fund_balance - 40.0).abs() < 1e-9);
        let net = outcome.amount - outcome.fee;
        assert!((market.state().collateral_balance - net).abs() < 1e-9);
    }

    #[test]
    fn test_sell_never_touches_fund_balance() {
        // The fee policy is one-directional: tax is collected on buys only.
        let mut market = ready_market(&constant_fee_config());
        market.buy_tokens(10.0).unwrap();
        let fund_before = market.state().fund_balance;

        let outcome = market.sell_tokens(5.0).unwrap();

        assert!(outcome.fee > 0.0, "the sell still reports its fee");
        assert_eq!(market.state().fund_balance, fund_before);
    }

    #[test]
    fn test_prices_read_the_row_at_circulation() {
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(500.0).unwrap();

        let row = market.pricing_table().unwrap().row(500).copied().unwrap();
        assert_eq!(market.buy_price().unwrap(), row.buy_price);
        assert_eq!(market.sell_price().unwrap(), row.sell_price);
    }

    #[test]
    fn test_reset_zeroes_state_but_keeps_table() {
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(100.0).unwrap();

        market.reset();

        assert_eq!(*market.state(), MarketState::default());
        assert!(market.pricing_table().is_some());
        assert!(market.buy_price().is_ok(), "the market stays ready after reset");
    }

    #[test]
    fn test_shrinking_rebuild_puts_prices_out_of_range() {
        // Rebuilding keeps the circulation, which can strand it past the new
        // table; price queries must report the stale index rather than read
        // a wrapped row.
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(100.0).unwrap();

        market.rebuild(50, &no_fee_config()).unwrap();

        assert!(matches!(
            market.buy_price(),
            Err(SimulatorError::OutOfRange { index: 100, rows: 51 })
        ));
        assert!(matches!(market.sell_price(), Err(SimulatorError::OutOfRange { .. })));

        // Trades past the table clamp to empty windows instead of panicking.
        let buy = market.buy_tokens(5.0).unwrap();
        let sell = market.sell_tokens(5.0).unwrap();
        assert_eq!(buy.tokens, 0);
        assert_eq!(sell.tokens, 0);
        assert_eq!(market.state().tokens_circulation, 100);
    }

    #[test]
    fn test_rebuild_preserves_balances() {
        let mut market = ready_market(&no_fee_config());
        market.buy_tokens(100.0).unwrap();
        let state_before = *market.state();

        market.rebuild(2000, &no_fee_config()).unwrap();

        assert_eq!(*market.state(), state_before);
        assert_eq!(market.pricing_table().unwrap().max_supply(), 2000);
    }
}

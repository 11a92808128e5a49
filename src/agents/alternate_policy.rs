// src/agents/alternate_policy.rs

use super::config::TRADE_SIZE;
use super::policy_trait::{AgentView, Policy};
use crate::shared_types::Action;

/// Oscillation policy: an initial buy, then the opposite of whatever was
/// executed last. Needs the transaction history to know the last action; an
/// empty history always opens with a buy.
pub struct AlternatePolicy;

impl Policy for AlternatePolicy {
    fn decide(&mut self, _observed_price: f64, view: &AgentView) -> (Action, f64) {
        let action = match view.history.last() {
            None => Action::Buy,
            Some(last) => match last.action {
                Action::Buy => Action::Sell,
                Action::Sell => Action::Buy,
            },
        };
        (action, TRADE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_types::Transaction;

    fn executed(action: Action) -> Transaction {
        Transaction { action, tokens: 1.0, amount: 10.0, fee: 0.0 }
    }

    #[test]
    fn test_opens_with_a_buy() {
        let mut policy = AlternatePolicy;
        let view = AgentView { capital: 1000.0, tokens: 0.0, history: &[] };
        assert_eq!(policy.decide(10.0, &view), (Action::Buy, 1.0));
    }

    #[test]
    fn test_toggles_against_the_last_action() {
        let mut policy = AlternatePolicy;

        let bought = [executed(Action::Buy)];
        let view = AgentView { capital: 1000.0, tokens: 1.0, history: &bought };
        assert_eq!(policy.decide(10.0, &view).0, Action::Sell);

        let sold = [executed(Action::Buy), executed(Action::Sell)];
        let view = AgentView { capital: 1000.0, tokens: 0.0, history: &sold };
        assert_eq!(policy.decide(10.0, &view).0, Action::Buy);
    }
}

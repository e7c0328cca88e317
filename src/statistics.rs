//! Estadisticas de una tanda de pedidos.
use crate::coffee_machine::CoffeeMachine;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub prepared: u64,
    pub failed: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn increase_prepared(&mut self) {
        self.prepared += 1;
    }

    pub fn increase_failed(&mut self) {
        self.failed += 1;
    }

    /// Arma una linea con los pedidos procesados y lo que queda de cada ingrediente.
    pub fn statistics_line(&self, coffee_machine: &CoffeeMachine) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders prepared={} | Orders failed={} | Ingredient=remaining |",
            self.prepared,
            self.failed
        );
        for ingredient in coffee_machine.ingredients() {
            statistics.push_str(&format!(" {}={} ", ingredient.name(), ingredient.quantity()));
        }
        statistics
    }
}

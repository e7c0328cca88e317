//! Lectura y preparacion de una tanda de pedidos desde un archivo JSON.
use log::{ debug, info, warn };
use serde::Deserialize;
use std::fs::File;
use std::io::{ BufReader, Read };
use std::path::Path;

use crate::{
    coffee_machine::CoffeeMachine,
    errors::CoffeeMachineError,
    modifiers::Modifiers,
    statistics::Statistics,
};

#[derive(Deserialize, Debug)]
struct JsonOrder {
    drink: String,
    #[serde(default)]
    modifiers: Vec<String>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders<R: Read>(reader: R) -> Result<Vec<JsonOrder>, CoffeeMachineError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn prepare_order(
    coffee_machine: &mut CoffeeMachine,
    order: &JsonOrder
) -> Result<(), CoffeeMachineError> {
    let mut drink = coffee_machine.drink_by_name(&order.drink)?;
    Modifiers::parse(order.modifiers.iter().map(String::as_str)).apply(&mut drink)?;
    coffee_machine.prepare_drink(&drink)
}

/// Prepara los pedidos en el orden del archivo. Un pedido que falla se saltea y se cuenta.
fn prepare_orders(coffee_machine: &mut CoffeeMachine, orders: Vec<JsonOrder>) -> Statistics {
    let mut statistics = Statistics::new();
    for (id, order) in orders.iter().enumerate() {
        debug!("[ORDERS] Takes order {}: {:?}", id, order);
        match prepare_order(coffee_machine, order) {
            Ok(()) => {
                info!("[ORDERS] Prepared order {} ({})", id, order.drink);
                statistics.increase_prepared();
            }
            Err(err) => {
                warn!("[ORDERS] Skipped order {} ({}): {}", id, order.drink, err);
                statistics.increase_failed();
            }
        }
    }
    info!("[ORDERS] No more orders left");
    statistics
}

pub fn read_and_prepare_orders<P: AsRef<Path>>(
    coffee_machine: &mut CoffeeMachine,
    path: P
) -> Result<Statistics, CoffeeMachineError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        CoffeeMachineError::FileReaderError(format!("{}: {}", path.display(), err))
    })?;
    let orders = read_orders(BufReader::new(file))?;
    Ok(prepare_orders(coffee_machine, orders))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ORDERS: &str =
        r#"{
  "orders": [
    { "drink": "Espresso" },
    { "drink": "Espresso", "modifiers": ["+", "s"] },
    { "drink": "Mocha" },
    { "drink": "Cappuccino", "modifiers": ["m"] }
  ]
}"#;

    fn initialized_machine() -> CoffeeMachine {
        let mut machine = CoffeeMachine::new();
        machine.init().unwrap();
        machine
    }

    #[test]
    fn should_read_orders_with_optional_modifiers() {
        let orders = read_orders(ORDERS.as_bytes()).unwrap();
        assert_eq!(4, orders.len());
        assert!(orders[0].modifiers.is_empty());
        assert_eq!(vec!["+", "s"], orders[1].modifiers);
    }

    #[test]
    fn should_fail_to_read_malformed_orders() {
        let result = read_orders("{ \"orders\": [ { \"modifiers\": [] } ] }".as_bytes());
        assert!(matches!(result, Err(CoffeeMachineError::CorruptConfiguration(_))));
    }

    #[test]
    fn should_prepare_orders_and_skip_the_failed_ones() {
        let mut machine = initialized_machine();
        let statistics = prepare_orders(&mut machine, read_orders(ORDERS.as_bytes()).unwrap());
        assert_eq!(Statistics { prepared: 2, failed: 2 }, statistics);
        assert_eq!(35, machine.ingredient("Coffee").unwrap().quantity());
        assert_eq!(36, machine.ingredient("Water").unwrap().quantity());
        assert_eq!(19, machine.ingredient("Sugar").unwrap().quantity());
    }

    #[test]
    fn should_read_and_prepare_orders_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ORDERS.as_bytes()).unwrap();
        let mut machine = initialized_machine();
        let statistics = read_and_prepare_orders(&mut machine, file.path()).unwrap();
        assert_eq!(2, statistics.prepared);
    }

    #[test]
    fn should_fail_when_the_orders_file_does_not_exist() {
        let mut machine = initialized_machine();
        let result = read_and_prepare_orders(&mut machine, "does/not/exist.json");
        assert!(matches!(result, Err(CoffeeMachineError::FileReaderError(_))));
    }
}

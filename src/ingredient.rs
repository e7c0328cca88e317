//! Ingrediente consumible, con nombre y cantidad acotada
use std::fmt;

use crate::{
    constants::MAX_INGREDIENT_QUANTITY,
    errors::CoffeeMachineError,
    validator::validate_name,
};

/// Un ingrediente de la maquina o de una receta.
/// La cantidad se mantiene siempre entre 0 y `MAX_INGREDIENT_QUANTITY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    name: String,
    quantity: u32,
}

impl Ingredient {
    pub fn new(name: &str, quantity: u32) -> Result<Ingredient, CoffeeMachineError> {
        validate_name(name)?;
        if quantity == 0 || quantity > MAX_INGREDIENT_QUANTITY {
            return Err(
                CoffeeMachineError::InvalidQuantity(
                    format!("{} for {}, must be between 1 and {}", quantity, name, MAX_INGREDIENT_QUANTITY)
                )
            );
        }
        Ok(Ingredient { name: name.to_string(), quantity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increase(&mut self, value: u32) -> Result<(), CoffeeMachineError> {
        match self.quantity.checked_add(value) {
            Some(total) if total <= MAX_INGREDIENT_QUANTITY => {
                self.quantity = total;
                Ok(())
            }
            _ =>
                Err(
                    CoffeeMachineError::InvalidQuantity(
                        format!("{} cannot hold more than {}", self, MAX_INGREDIENT_QUANTITY)
                    )
                ),
        }
    }

    pub fn decrease(&mut self, value: u32) -> Result<(), CoffeeMachineError> {
        if value > self.quantity {
            return Err(
                CoffeeMachineError::InsufficientQuantity(
                    format!("cannot use {} of {}", value, self)
                )
            );
        }
        self.quantity -= value;
        Ok(())
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.quantity)
    }
}

//! Modificadores que el usuario agrega al pedir o guardar una bebida.
//!
//! `+` sube la intensidad, `-` la baja, `m` agrega leche y cada `s` agrega un terron de azucar.
use log::debug;

use crate::{ drink::Drink, errors::CoffeeMachineError };

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub stronger: bool,
    pub weaker: bool,
    pub milk: bool,
    pub sugar_lumps: usize,
}

impl Modifiers {
    pub fn parse<'a, I: IntoIterator<Item = &'a str>>(tokens: I) -> Modifiers {
        let mut modifiers = Modifiers::default();
        for token in tokens {
            if token.contains('+') {
                modifiers.stronger = true;
            }
            if token.contains('-') {
                modifiers.weaker = true;
            }
            if token == "m" {
                modifiers.milk = true;
            }
            if token.starts_with('s') {
                modifiers.sugar_lumps += 1;
            }
        }
        modifiers
    }

    pub fn apply(&self, drink: &mut Drink) -> Result<(), CoffeeMachineError> {
        if self.stronger {
            debug!("[MODIFIERS] Increasing strength of {}", drink.name());
            drink.increase_strength(1)?;
        }
        if self.weaker {
            debug!("[MODIFIERS] Decreasing strength of {}", drink.name());
            drink.decrease_strength(1)?;
        }
        if self.milk {
            debug!("[MODIFIERS] Adding milk to {}", drink.name());
            drink.add_milk()?;
        }
        for _ in 0..self.sugar_lumps {
            drink.add_sugar()?;
        }
        Ok(())
    }
}

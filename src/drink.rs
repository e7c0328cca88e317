//! Receta de una bebida y sus modificadores (intensidad, leche y azucar)
use std::fmt;

use log::debug;

use crate::{
    constants::{ MAX_INGREDIENTS_IN_A_DRINK, MAX_SUGAR_QUANTITY, MILK, SUGAR },
    errors::CoffeeMachineError,
    ingredient::Ingredient,
    validator::validate_name,
};

/// Receta con nombre y hasta `MAX_INGREDIENTS_IN_A_DRINK` ingredientes de nombres distintos.
/// Los ingredientes se guardan en orden de insercion: el primero es el que define la intensidad.
///
/// `Clone` hace una copia profunda, asi la maquina puede entregar recetas
/// que se modifican sin tocar las del catalogo.
#[derive(Debug, Clone, Eq)]
pub struct Drink {
    name: String,
    ingredients: Vec<Ingredient>,
}

impl Drink {
    pub fn new(name: &str) -> Result<Drink, CoffeeMachineError> {
        validate_name(name)?;
        Ok(Drink { name: name.to_string(), ingredients: Vec::new() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CoffeeMachineError> {
        validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn add_ingredient(
        &mut self,
        ingredient: Ingredient
    ) -> Result<&mut Drink, CoffeeMachineError> {
        if self.has_ingredient(ingredient.name()) {
            return Err(CoffeeMachineError::DuplicateIngredient(ingredient.name().to_string()));
        }
        if self.ingredients.len() >= MAX_INGREDIENTS_IN_A_DRINK {
            return Err(CoffeeMachineError::TooManyIngredients(self.name.clone()));
        }
        debug!("[DRINK] Adding {} to {}", ingredient, self.name);
        self.ingredients.push(ingredient);
        Ok(self)
    }

    /// Version por valor de `add_ingredient`, para armar recetas encadenando llamadas.
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Result<Drink, CoffeeMachineError> {
        self.add_ingredient(ingredient)?;
        Ok(self)
    }

    pub fn ingredient_by_name(&self, name: &str) -> Result<&Ingredient, CoffeeMachineError> {
        self.ingredients
            .iter()
            .find(|ingredient| ingredient.name() == name)
            .ok_or_else(|| {
                CoffeeMachineError::IngredientNotFound(format!("ingredient {} in {}", name, self))
            })
    }

    fn ingredient_by_name_mut(&mut self, name: &str) -> Option<&mut Ingredient> {
        self.ingredients.iter_mut().find(|ingredient| ingredient.name() == name)
    }

    fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|ingredient| ingredient.name() == name)
    }

    pub fn increase_strength(&mut self, value: u32) -> Result<(), CoffeeMachineError> {
        self.strength_ingredient()?.increase(value)
    }

    pub fn decrease_strength(&mut self, value: u32) -> Result<(), CoffeeMachineError> {
        self.strength_ingredient()?.decrease(value)
    }

    fn strength_ingredient(&mut self) -> Result<&mut Ingredient, CoffeeMachineError> {
        self.ingredients
            .first_mut()
            .ok_or_else(|| CoffeeMachineError::EmptyDrink(self.name.clone()))
    }

    pub fn can_add_milk(&self) -> bool {
        !self.has_ingredient(MILK)
    }

    pub fn add_milk(&mut self) -> Result<(), CoffeeMachineError> {
        if !self.can_add_milk() {
            return Err(CoffeeMachineError::AlreadyHasMilk(self.name.clone()));
        }
        self.add_ingredient(Ingredient::new(MILK, 1)?)?;
        Ok(())
    }

    pub fn add_sugar(&mut self) -> Result<(), CoffeeMachineError> {
        let name = self.name.clone();
        match self.ingredient_by_name_mut(SUGAR) {
            Some(sugar) if sugar.quantity() < MAX_SUGAR_QUANTITY => {
                debug!("[DRINK] {} already present in {}. Increasing its quantity", SUGAR, name);
                sugar.increase(1)
            }
            Some(_) => Err(CoffeeMachineError::TooMuchSugar(name)),
            None => {
                debug!("[DRINK] {} not present in {}. Adding it", SUGAR, name);
                self.add_ingredient(Ingredient::new(SUGAR, 1)?)?;
                Ok(())
            }
        }
    }
}

/// Dos bebidas son iguales si tienen el mismo nombre y los mismos ingredientes
/// con las mismas cantidades, sin importar el orden.
impl PartialEq for Drink {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name &&
            self.ingredients.len() == other.ingredients.len() &&
            self.ingredients
                .iter()
                .all(|ingredient| other.ingredients.contains(ingredient))
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, ingredient) in self.ingredients.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}", ingredient)?;
        }
        write!(f, " }}")
    }
}

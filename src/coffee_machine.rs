//! La maquina de cafe: inventario de ingredientes, catalogo de bebidas y preparacion.
use log::{ debug, info };

use crate::{
    constants::{ DEFAULT_DRINKS, DEFAULT_INGREDIENTS },
    drink::Drink,
    errors::CoffeeMachineError,
    ingredient::Ingredient,
    recipe_loader::RecipeLoader,
};

/// Duena exclusiva del inventario y del catalogo. Ambos se recorren en orden de insercion
/// y no admiten nombres repetidos.
pub struct CoffeeMachine {
    ingredients: Vec<Ingredient>,
    drinks: Vec<Drink>,
    recipe_loader: Option<Box<dyn RecipeLoader>>,
}

impl CoffeeMachine {
    pub fn new() -> CoffeeMachine {
        CoffeeMachine {
            ingredients: Vec::new(),
            drinks: Vec::new(),
            recipe_loader: None,
        }
    }

    pub fn with_ingredients(ingredients: Vec<Ingredient>) -> Result<CoffeeMachine, CoffeeMachineError> {
        let mut machine = CoffeeMachine::new();
        info!("[MACHINE] Bulk load ingredients...");
        for ingredient in ingredients {
            machine.add_ingredient(ingredient)?;
        }
        info!("[MACHINE] Bulk load ingredients done");
        Ok(machine)
    }

    /// Crea una maquina vacia que en `init` toma las bebidas de `recipe_loader`
    /// en lugar de las que vienen por defecto.
    pub fn with_recipe_loader(recipe_loader: Box<dyn RecipeLoader>) -> CoffeeMachine {
        CoffeeMachine {
            recipe_loader: Some(recipe_loader),
            ..CoffeeMachine::new()
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.name() == name)
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn has_drink(&self, name: &str) -> bool {
        self.drinks.iter().any(|drink| drink.name() == name)
    }

    pub fn drink_names(&self) -> Vec<String> {
        self.drinks
            .iter()
            .map(|drink| drink.name().to_string())
            .collect()
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<(), CoffeeMachineError> {
        if self.ingredient(ingredient.name()).is_some() {
            return Err(CoffeeMachineError::DuplicateIngredient(ingredient.name().to_string()));
        }
        info!("[MACHINE] Adding {}", ingredient);
        self.ingredients.push(ingredient);
        Ok(())
    }

    pub fn add_drink(&mut self, drink: Drink) -> Result<(), CoffeeMachineError> {
        if self.has_drink(drink.name()) {
            return Err(CoffeeMachineError::DuplicateDrink(drink.name().to_string()));
        }
        info!("[MACHINE] Adding {}", drink);
        self.drinks.push(drink);
        Ok(())
    }

    /// Agrega las bebidas en orden. El primer error corta la carga y las bebidas
    /// agregadas hasta ese momento quedan en el catalogo.
    pub fn load_drinks(&mut self, drinks: Vec<Drink>) -> Result<(), CoffeeMachineError> {
        for drink in drinks {
            self.add_drink(drink)?;
        }
        Ok(())
    }

    /// Carga el inventario por defecto y luego las bebidas, ya sea las que trae
    /// la maquina o las de su `RecipeLoader`.
    pub fn init(&mut self) -> Result<(), CoffeeMachineError> {
        self.load_ingredients_from_memory()?;
        let drinks = match &self.recipe_loader {
            Some(loader) => loader.load_drinks()?,
            None => default_drinks()?,
        };
        info!("[MACHINE] Loading drinks...");
        self.load_drinks(drinks)?;
        info!("[MACHINE] Drinks loaded");
        Ok(())
    }

    fn load_ingredients_from_memory(&mut self) -> Result<(), CoffeeMachineError> {
        info!("[MACHINE] Loading ingredients...");
        for (name, quantity) in DEFAULT_INGREDIENTS {
            self.add_ingredient(Ingredient::new(name, quantity)?)?;
        }
        info!("[MACHINE] Ingredients loaded");
        Ok(())
    }

    /// Devuelve una copia de la receta del catalogo. Modificarla no altera el catalogo.
    pub fn drink_by_name(&self, name: &str) -> Result<Drink, CoffeeMachineError> {
        self.drinks
            .iter()
            .find(|drink| drink.name() == name)
            .cloned()
            .ok_or_else(|| CoffeeMachineError::UnknownDrink(name.to_string()))
    }

    /// Consume del inventario cada ingrediente de la bebida, en el orden de la receta.
    /// Si falta un ingrediente los que ya se consumieron no se devuelven.
    pub fn prepare_drink(&mut self, drink: &Drink) -> Result<(), CoffeeMachineError> {
        info!("[MACHINE] Preparing {}", drink);
        for required in drink.ingredients() {
            self.consume_ingredient(required)?;
        }
        info!("[MACHINE] {} ready", drink.name());
        Ok(())
    }

    fn consume_ingredient(&mut self, required: &Ingredient) -> Result<(), CoffeeMachineError> {
        let stored = self.ingredients
            .iter_mut()
            .find(|ingredient| ingredient.name() == required.name())
            .ok_or_else(|| CoffeeMachineError::UnknownIngredient(required.name().to_string()))?;
        debug!("[MACHINE] Uses {} of {}, there is {}", required.quantity(), stored.name(), stored.quantity());
        stored.decrease(required.quantity())?;
        debug!("[MACHINE] Remains {}", stored);
        Ok(())
    }

    /// Guarda una bebida personalizada en el catalogo con el nombre `favorite_name`.
    pub fn save_drink(&mut self, mut drink: Drink, favorite_name: &str) -> Result<(), CoffeeMachineError> {
        drink.set_name(favorite_name)?;
        info!("[MACHINE] Saving favorite {}", drink);
        self.add_drink(drink)
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        CoffeeMachine::new()
    }
}

fn default_drinks() -> Result<Vec<Drink>, CoffeeMachineError> {
    DEFAULT_DRINKS.iter()
        .map(|(name, recipe)| -> Result<Drink, CoffeeMachineError> {
            let mut drink = Drink::new(name)?;
            for (ingredient, quantity) in recipe.iter() {
                drink.add_ingredient(Ingredient::new(ingredient, *quantity)?)?;
            }
            Ok(drink)
        })
        .collect()
}

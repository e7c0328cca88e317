//! Carga de recetas desde archivos de configuracion.
//!
//! Hay dos formatos: el de propiedades (`drinks.number`, `drinkN.name`, `drinkN.ingredients`,
//! `drinkN.ingredientM.name`, `drinkN.ingredientM.quantity`) y uno en JSON.
//! Las recetas se arman completas antes de devolverlas, por lo que un archivo corrupto
//! nunca produce una lista parcial.
use std::{ collections::HashMap, fs, path::Path };

use log::{ debug, error, info };
use serde::Deserialize;

use crate::{ drink::Drink, errors::CoffeeMachineError, ingredient::Ingredient };

/// Fuente de recetas que la maquina usa en su inicializacion.
pub trait RecipeLoader {
    fn load_drinks(&self) -> Result<Vec<Drink>, CoffeeMachineError>;
}

/// Devuelve el loader adecuado segun la extension del archivo: `.json` usa
/// `JsonRecipeLoader`, cualquier otra usa `PropertiesRecipeLoader`.
pub fn recipe_loader_for<P: AsRef<Path>>(
    path: P
) -> Result<Box<dyn RecipeLoader>, CoffeeMachineError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Ok(Box::new(JsonRecipeLoader::from_file(path)?))
    } else {
        Ok(Box::new(PropertiesRecipeLoader::from_file(path)?))
    }
}

fn read_file(path: &Path) -> Result<String, CoffeeMachineError> {
    fs::read_to_string(path).map_err(|err| {
        error!("[LOADER] Could not read {}: {}", path.display(), err);
        CoffeeMachineError::FileReaderError(format!("{}: {}", path.display(), err))
    })
}

fn corrupted(err: CoffeeMachineError) -> CoffeeMachineError {
    match err {
        CoffeeMachineError::CorruptConfiguration(_) => err,
        other => CoffeeMachineError::CorruptConfiguration(other.to_string()),
    }
}

pub struct PropertiesRecipeLoader {
    properties: HashMap<String, String>,
}

impl PropertiesRecipeLoader {
    pub fn new(content: &str) -> PropertiesRecipeLoader {
        PropertiesRecipeLoader { properties: parse_properties(content) }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PropertiesRecipeLoader, CoffeeMachineError> {
        let path = path.as_ref();
        let loader = PropertiesRecipeLoader::new(&read_file(path)?);
        debug!("[LOADER] Property file {} loaded", path.display());
        Ok(loader)
    }

    fn property(&self, key: &str) -> Result<&str, CoffeeMachineError> {
        self.properties
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CoffeeMachineError::CorruptConfiguration(format!("missing {}", key)))
    }

    fn number(&self, key: &str) -> Result<i64, CoffeeMachineError> {
        let value = self.property(key)?;
        value
            .parse::<i64>()
            .map_err(|_| {
                CoffeeMachineError::CorruptConfiguration(format!("{}={} is not a number", key, value))
            })
    }

    fn read_drinks(&self) -> Result<Vec<Drink>, CoffeeMachineError> {
        let drinks_number = match self.properties.get("drinks.number") {
            Some(_) => self.number("drinks.number")?,
            None => 0,
        };

        let mut drinks = Vec::new();
        for i in 1..=drinks_number {
            let mut drink = Drink::new(self.property(&format!("drink{}.name", i))?)?;
            let ingredients_key = format!("drink{}.ingredients", i);
            let ingredients_number = self.number(&ingredients_key)?;
            if ingredients_number <= 0 {
                return Err(
                    CoffeeMachineError::CorruptConfiguration(
                        format!("{} must be positive", ingredients_key)
                    )
                );
            }
            for j in 1..=ingredients_number {
                let name = self.property(&format!("drink{}.ingredient{}.name", i, j))?;
                let quantity_key = format!("drink{}.ingredient{}.quantity", i, j);
                let quantity = u32::try_from(self.number(&quantity_key)?).map_err(|_| {
                    CoffeeMachineError::CorruptConfiguration(format!("{} is out of range", quantity_key))
                })?;
                drink.add_ingredient(Ingredient::new(name, quantity)?)?;
            }
            drinks.push(drink);
        }
        Ok(drinks)
    }
}

impl RecipeLoader for PropertiesRecipeLoader {
    fn load_drinks(&self) -> Result<Vec<Drink>, CoffeeMachineError> {
        let drinks = self.read_drinks().map_err(|err| {
            error!("[LOADER] Drinks configuration file corrupted: {}", err);
            corrupted(err)
        })?;
        info!("[LOADER] Loaded {} drinks from properties", drinks.len());
        Ok(drinks)
    }
}

/// Parsea lineas `clave=valor` o `clave:valor`. Ignora lineas vacias y comentarios (`#` o `!`).
fn parse_properties(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| {
            let separator = line.find(&['=', ':'][..])?;
            let (key, value) = line.split_at(separator);
            Some((key.trim().to_string(), value[1..].trim().to_string()))
        })
        .collect()
}

#[derive(Deserialize, Debug)]
struct JsonIngredient {
    name: String,
    quantity: i64,
}

#[derive(Deserialize, Debug)]
struct JsonDrink {
    name: String,
    ingredients: Vec<JsonIngredient>,
}

#[derive(Deserialize)]
struct RecipesConfiguration {
    drinks: Vec<JsonDrink>,
}

pub struct JsonRecipeLoader {
    content: String,
}

impl JsonRecipeLoader {
    pub fn new(content: &str) -> JsonRecipeLoader {
        JsonRecipeLoader { content: content.to_string() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<JsonRecipeLoader, CoffeeMachineError> {
        let path = path.as_ref();
        let loader = JsonRecipeLoader::new(&read_file(path)?);
        debug!("[LOADER] Recipes file {} loaded", path.display());
        Ok(loader)
    }

    fn read_drinks(&self) -> Result<Vec<Drink>, CoffeeMachineError> {
        let config: RecipesConfiguration = serde_json::from_str(&self.content)?;
        config.drinks.into_iter().map(drink_from_json).collect()
    }
}

fn drink_from_json(json_drink: JsonDrink) -> Result<Drink, CoffeeMachineError> {
    if json_drink.ingredients.is_empty() {
        return Err(
            CoffeeMachineError::CorruptConfiguration(
                format!("{} has no ingredients", json_drink.name)
            )
        );
    }
    let mut drink = Drink::new(&json_drink.name)?;
    for json_ingredient in json_drink.ingredients {
        let quantity = u32::try_from(json_ingredient.quantity).map_err(|_| {
            CoffeeMachineError::CorruptConfiguration(
                format!("{} quantity {} is out of range", json_ingredient.name, json_ingredient.quantity)
            )
        })?;
        drink.add_ingredient(Ingredient::new(&json_ingredient.name, quantity)?)?;
    }
    Ok(drink)
}

impl RecipeLoader for JsonRecipeLoader {
    fn load_drinks(&self) -> Result<Vec<Drink>, CoffeeMachineError> {
        let drinks = self.read_drinks().map_err(|err| {
            error!("[LOADER] Drinks configuration file corrupted: {}", err);
            corrupted(err)
        })?;
        info!("[LOADER] Loaded {} drinks from JSON", drinks.len());
        Ok(drinks)
    }
}

//! Errores de la maquina de cafe
use std::{ error::Error, fmt };

/// Todos los errores que pueden surgir al manipular ingredientes, recetas o la maquina.
/// Cada variante lleva un mensaje con el contexto para mostrarle al usuario.
#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeMachineError {
    InvalidName(String),
    InvalidQuantity(String),
    InsufficientQuantity(String),
    DuplicateIngredient(String),
    DuplicateDrink(String),
    TooManyIngredients(String),
    UnknownIngredient(String),
    IngredientNotFound(String),
    UnknownDrink(String),
    EmptyDrink(String),
    AlreadyHasMilk(String),
    TooMuchSugar(String),
    CorruptConfiguration(String),
    FileReaderError(String),
    InputOutputError(String),
}

impl fmt::Display for CoffeeMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeMachineError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            CoffeeMachineError::InvalidQuantity(msg) => write!(f, "Invalid quantity: {}", msg),
            CoffeeMachineError::InsufficientQuantity(msg) => {
                write!(f, "Not enough quantity: {}", msg)
            }
            CoffeeMachineError::DuplicateIngredient(name) => {
                write!(f, "You are trying to add twice the ingredient: {}", name)
            }
            CoffeeMachineError::DuplicateDrink(name) => {
                write!(f, "You are trying to add twice the drink: {}", name)
            }
            CoffeeMachineError::TooManyIngredients(name) => {
                write!(f, "Cannot add more ingredients to {}", name)
            }
            CoffeeMachineError::UnknownIngredient(name) => {
                write!(f, "The ingredient \"{}\" is not in the coffee machine!", name)
            }
            CoffeeMachineError::IngredientNotFound(msg) => write!(f, "Could not find {}", msg),
            CoffeeMachineError::UnknownDrink(name) => {
                write!(f, "The drink \"{}\" is not in the coffee machine", name)
            }
            CoffeeMachineError::EmptyDrink(name) => {
                write!(f, "The drink {} has no ingredients", name)
            }
            CoffeeMachineError::AlreadyHasMilk(name) => {
                write!(f, "The drink {} has already milk!", name)
            }
            CoffeeMachineError::TooMuchSugar(name) => {
                write!(f, "Cannot add more sugar to {}; I will not held responsible for your cholesterol!", name)
            }
            CoffeeMachineError::CorruptConfiguration(msg) => {
                write!(f, "Drinks configuration corrupted: {}", msg)
            }
            CoffeeMachineError::FileReaderError(msg) => write!(f, "Could not read file: {}", msg),
            CoffeeMachineError::InputOutputError(msg) => write!(f, "Input/output error: {}", msg),
        }
    }
}

impl Error for CoffeeMachineError {}

impl From<std::io::Error> for CoffeeMachineError {
    fn from(err: std::io::Error) -> Self {
        CoffeeMachineError::InputOutputError(err.to_string())
    }
}

impl From<serde_json::Error> for CoffeeMachineError {
    fn from(err: serde_json::Error) -> Self {
        CoffeeMachineError::CorruptConfiguration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn should_report_io_failures_as_input_output_errors() {
        let err = CoffeeMachineError::from(std::io::Error::new(ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(CoffeeMachineError::InputOutputError("pipe closed".to_string()), err);
        assert_eq!("Input/output error: pipe closed", err.to_string());
    }
}

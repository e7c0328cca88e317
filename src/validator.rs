use crate::{ constants::MAX_NAME_LENGTH, errors::CoffeeMachineError };

/// Valida el nombre de un ingrediente o de una bebida: no vacio, de a lo sumo
/// `MAX_NAME_LENGTH` caracteres y solo con letras ASCII.
pub fn validate_name(name: &str) -> Result<(), CoffeeMachineError> {
    if name.is_empty() {
        return Err(CoffeeMachineError::InvalidName("name empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoffeeMachineError::InvalidName(format!("{} is too long", name)));
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoffeeMachineError::InvalidName(format!("{} is not valid", name)));
    }
    Ok(())
}

pub mod coffee_machine;
pub mod constants;
pub mod drink;
pub mod errors;
pub mod ingredient;
pub mod input_handler;
pub mod modifiers;
pub mod orders_reader;
pub mod recipe_loader;
pub mod statistics;
pub mod validator;

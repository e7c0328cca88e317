//! Parametros de configuracion de la maquina de cafe

/// Longitud maxima del nombre de un ingrediente o de una bebida
pub const MAX_NAME_LENGTH: usize = 30;

/// Cantidad maxima que puede tener un ingrediente, tanto al crearlo como al incrementarlo
pub const MAX_INGREDIENT_QUANTITY: u32 = 100;

/// Cantidad maxima de ingredientes distintos en una receta
pub const MAX_INGREDIENTS_IN_A_DRINK: usize = 5;

/// Cantidad maxima de terrones de azucar en una bebida
pub const MAX_SUGAR_QUANTITY: u32 = 3;

pub const MILK: &str = "Milk";
pub const SUGAR: &str = "Sugar";

/// Inventario inicial de la maquina, en orden de carga
pub const DEFAULT_INGREDIENTS: [(&str, u32); 5] = [
    ("Water", 40),
    ("Coffee", 40),
    (MILK, 40),
    ("Chocolate", 20),
    (SUGAR, 20),
];

/// Bebidas que se cargan cuando no hay un archivo de recetas.
/// El primer ingrediente de cada una es el que ajusta la intensidad.
pub const DEFAULT_DRINKS: [(&str, &[(&str, u32)]); 4] = [
    ("Espresso", &[("Coffee", 2), ("Water", 2)]),
    ("Coffee", &[("Coffee", 2), ("Water", 4)]),
    ("Cappuccino", &[("Coffee", 2), ("Water", 2), (MILK, 2)]),
    ("Chocolate", &[("Chocolate", 2), ("Water", 3)]),
];

use std::{ error::Error, io, path::PathBuf, process };

use clap::Parser;
use log::{ error, info, LevelFilter };
use simple_logger::SimpleLogger;

use coffee_machine::{
    coffee_machine::CoffeeMachine,
    input_handler::InputHandler,
    orders_reader::read_and_prepare_orders,
    recipe_loader::recipe_loader_for,
};

#[derive(Parser)]
#[command(name = "coffee-machine", about = "Super cool coffee machine simulator")]
struct Args {
    /// Drinks file to load instead of the built-in drinks (.json or properties)
    #[arg(long)]
    recipes: Option<PathBuf>,

    /// JSON file with orders to prepare instead of starting the interactive shell
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(err) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("Could not initialize logger: {}", err);
    }

    if let Err(err) = run(args) {
        error!("[MAIN] {}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    println!("Loading coffee machine...");
    let mut coffee_machine = match &args.recipes {
        Some(path) => CoffeeMachine::with_recipe_loader(recipe_loader_for(path)?),
        None => CoffeeMachine::new(),
    };
    coffee_machine.init()?;
    println!("Coffee machine loaded and ready!");
    info!("[MAIN] Coffee machine started");

    if let Some(path) = &args.orders {
        let statistics = read_and_prepare_orders(&mut coffee_machine, path)?;
        println!("{}", statistics.statistics_line(&coffee_machine));
        return Ok(());
    }

    println!("Super cool coffee machine started!");
    let stdin = io::stdin();
    let mut input_handler = InputHandler::new(coffee_machine, io::stdout());
    input_handler.handle_input(stdin.lock())?;
    Ok(())
}

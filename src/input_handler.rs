//! Interfaz de linea de comandos de la maquina de cafe.
use std::io::{ BufRead, Write };

use log::{ debug, info, warn };

use crate::{ coffee_machine::CoffeeMachine, errors::CoffeeMachineError, modifiers::Modifiers };

pub const LIST_COMMAND: &str = "list";
pub const HELP_COMMAND: &str = "help";
pub const PREPARE_COMMAND: &str = "prepare";
pub const SAVE_COMMAND: &str = "save";

const SAVE_USAGE: &str = "save drink_name [drink_modifiers] favorite_name save a favourite drink";

const PROMPT: &str = "coffeeMachine> ";

const COMMANDS: [(&str, &str); 4] = [
    (LIST_COMMAND, "Lists the available drinks"),
    (HELP_COMMAND, "Prints the help page"),
    (PREPARE_COMMAND, "prepare drink_name [drink_modifiers] prepares the selected drink"),
    (SAVE_COMMAND, SAVE_USAGE),
];

/// Lee comandos linea por linea, los traduce a operaciones de la maquina y escribe
/// los resultados en `output`. Un comando invalido nunca corta el ciclo.
pub struct InputHandler<W: Write> {
    coffee_machine: CoffeeMachine,
    output: W,
}

impl<W: Write> InputHandler<W> {
    pub fn new(coffee_machine: CoffeeMachine, output: W) -> InputHandler<W> {
        InputHandler { coffee_machine, output }
    }

    pub fn coffee_machine(&self) -> &CoffeeMachine {
        &self.coffee_machine
    }

    /// Procesa comandos hasta el fin de la entrada (CTRL+D en una terminal).
    pub fn handle_input<R: BufRead>(&mut self, mut input: R) -> Result<(), CoffeeMachineError> {
        self.print_help()?;
        info!("[SHELL] Coffee machine ready");
        self.prompt()?;

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            if std::str::from_utf8(&buffer).is_err() {
                warn!("[SHELL] Command with invalid UTF-8 characters, replacing them");
            }
            let line = String::from_utf8_lossy(&buffer);
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.first() {
                Some(command) if command.eq_ignore_ascii_case(LIST_COMMAND) => {
                    debug!("[SHELL] User entered command \"{}\"", LIST_COMMAND);
                    self.print_drinks()?;
                }
                Some(command) if command.eq_ignore_ascii_case(HELP_COMMAND) => {
                    debug!("[SHELL] User entered command \"{}\"", HELP_COMMAND);
                    self.print_help()?;
                }
                Some(&PREPARE_COMMAND) => self.handle_prepare_command(&tokens[1..])?,
                Some(&SAVE_COMMAND) => self.handle_save_command(&tokens[1..])?,
                Some(_) => {
                    debug!("[SHELL] User entered an unrecognised command");
                    self.print_help()?;
                }
                None => {}
            }
            self.prompt()?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn handle_prepare_command(&mut self, args: &[&str]) -> Result<(), CoffeeMachineError> {
        let drink_name = match args.first() {
            Some(name) if self.coffee_machine.has_drink(name) => *name,
            _ => return self.print_drink_not_present(),
        };

        let result = self.coffee_machine
            .drink_by_name(drink_name)
            .and_then(|mut drink| {
                Modifiers::parse(args[1..].iter().copied()).apply(&mut drink)?;
                info!("[SHELL] Preparing drink: {}", drink);
                self.coffee_machine.prepare_drink(&drink)?;
                Ok(drink)
            });

        match result {
            Ok(drink) => {
                writeln!(self.output, "Your drink is ready! Enjoy your {}", drink)?;
                info!("[SHELL] Successfully prepared {}", drink);
                self.print_ingredients()?;
            }
            Err(err) => {
                writeln!(self.output, "Cannot prepare your drink because: {}", err)?;
                warn!("[SHELL] Cannot prepare drink {} because: {}", drink_name, err);
            }
        }
        Ok(())
    }

    fn handle_save_command(&mut self, args: &[&str]) -> Result<(), CoffeeMachineError> {
        let drink_name = match args.first() {
            Some(name) if self.coffee_machine.has_drink(name) => *name,
            _ => return self.print_drink_not_present(),
        };
        let (favorite_name, modifier_tokens) = match args[1..].split_last() {
            Some((favorite_name, modifier_tokens)) => (*favorite_name, modifier_tokens),
            None => {
                writeln!(self.output, "Usage: {}", SAVE_USAGE)?;
                return Ok(());
            }
        };

        let result = self.coffee_machine
            .drink_by_name(drink_name)
            .and_then(|mut drink| {
                Modifiers::parse(modifier_tokens.iter().copied()).apply(&mut drink)?;
                self.coffee_machine.save_drink(drink, favorite_name)
            });

        match result {
            Ok(()) => {
                writeln!(self.output, "Saved drink: {}", favorite_name)?;
            }
            Err(err) => {
                writeln!(self.output, "Cannot save your drink because: {}", err)?;
                warn!("[SHELL] Cannot save drink {} because: {}", drink_name, err);
            }
        }
        Ok(())
    }

    fn print_drink_not_present(&mut self) -> Result<(), CoffeeMachineError> {
        writeln!(
            self.output,
            "Sorry, drink not present. Try listing the drinks using the command \"{}\"",
            LIST_COMMAND
        )?;
        Ok(())
    }

    fn print_drinks(&mut self) -> Result<(), CoffeeMachineError> {
        writeln!(self.output, "Available drinks are:")?;
        for drink in self.coffee_machine.drinks() {
            writeln!(self.output, "{}", drink)?;
        }
        Ok(())
    }

    fn print_ingredients(&mut self) -> Result<(), CoffeeMachineError> {
        writeln!(self.output)?;
        writeln!(self.output, "********** COFFEE MACHINE INGREDIENTS **********")?;
        for ingredient in self.coffee_machine.ingredients() {
            writeln!(self.output, "{}: {}", ingredient.name(), ingredient.quantity())?;
        }
        writeln!(self.output, "********** COFFEE MACHINE INGREDIENTS **********")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn print_help(&mut self) -> Result<(), CoffeeMachineError> {
        self.print_ingredients()?;
        writeln!(self.output, "*************** HELP PAGE ***************")?;
        writeln!(self.output, "CTRL+D   Quit")?;
        for (command, description) in COMMANDS {
            writeln!(self.output, "{}     {}", command, description)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Drink modifiers (space separated) [strength] [milk] [sugar]")?;
        writeln!(self.output, "+   Increases Drink's strength")?;
        writeln!(self.output, "-   Decreases Drink's strength")?;
        writeln!(self.output, "m   Adds milk (only supported by some drinks)")?;
        writeln!(self.output, "s   Adds one lump of sugar (add more \"s\" for additional lumps)")?;
        writeln!(self.output, "*************** HELP PAGE ***************")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), CoffeeMachineError> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(commands: &str) -> (String, CoffeeMachine) {
        let mut machine = CoffeeMachine::new();
        machine.init().unwrap();
        let mut handler = InputHandler::new(machine, Vec::new());
        handler.handle_input(Cursor::new(commands)).unwrap();
        let InputHandler { coffee_machine, output } = handler;
        (String::from_utf8(output).unwrap(), coffee_machine)
    }

    #[test]
    fn should_print_the_help_page_on_start() {
        let (output, _) = run("");
        assert!(output.contains("HELP PAGE"));
        assert!(output.contains("Water: 40"));
    }

    #[test]
    fn should_list_the_drinks() {
        let (output, _) = run("list\n");
        assert!(output.contains("Available drinks are:"));
        assert!(output.contains("Cappuccino { Coffee [2], Water [2], Milk [2] }"));
    }

    #[test]
    fn should_prepare_a_drink_with_modifiers() {
        let (output, machine) = run("prepare Espresso + m s s\n");
        assert!(output.contains("Your drink is ready!"));
        assert!(output.contains("Coffee: 37"));
        assert_eq!(39, machine.ingredient("Milk").unwrap().quantity());
        assert_eq!(18, machine.ingredient("Sugar").unwrap().quantity());
    }

    #[test]
    fn should_report_an_unknown_drink_and_continue() {
        let (output, machine) = run("prepare Mocha\nprepare Espresso\n");
        assert!(output.contains("Sorry, drink not present."));
        assert_eq!(38, machine.ingredient("Coffee").unwrap().quantity());
    }

    #[test]
    fn should_report_a_failed_modifier_without_consuming() {
        let (output, machine) = run("prepare Cappuccino m\n");
        assert!(output.contains("Cannot prepare your drink because: The drink Cappuccino has already milk!"));
        assert_eq!(40, machine.ingredient("Coffee").unwrap().quantity());
    }

    #[test]
    fn should_report_a_drink_without_enough_ingredients() {
        let commands = "prepare Chocolate\n".repeat(11);
        let (output, machine) = run(&commands);
        assert!(output.contains("Cannot prepare your drink because: Not enough quantity"));
        assert_eq!(0, machine.ingredient("Chocolate").unwrap().quantity());
    }

    #[test]
    fn should_save_and_prepare_a_favorite() {
        let (output, machine) = run("save Espresso s s SweetEspresso\nprepare SweetEspresso\n");
        assert!(output.contains("Saved drink: SweetEspresso"));
        assert!(output.contains("Your drink is ready!"));
        assert_eq!(18, machine.ingredient("Sugar").unwrap().quantity());
        assert!(machine.has_drink("SweetEspresso"));
    }

    #[test]
    fn should_not_save_a_favorite_without_a_name() {
        let (output, machine) = run("save Espresso\n");
        assert!(output.contains("Usage:"));
        assert_eq!(4, machine.drinks().len());
    }

    #[test]
    fn should_not_save_a_favorite_with_an_existing_name() {
        let (output, machine) = run("save Espresso m Coffee\n");
        assert!(output.contains("Cannot save your drink because:"));
        assert_eq!(4, machine.drinks().len());
    }

    #[test]
    fn should_keep_reading_after_a_command_with_invalid_characters() {
        let mut machine = CoffeeMachine::new();
        machine.init().unwrap();
        let mut handler = InputHandler::new(machine, Vec::new());
        let input: &[u8] = b"prepare Esp\xffresso\nprepare Espresso\n";
        handler.handle_input(input).unwrap();

        let output = String::from_utf8(handler.output).unwrap();
        assert!(output.contains("Sorry, drink not present."));
        assert!(output.contains("Your drink is ready!"));
        assert_eq!(38, handler.coffee_machine.ingredient("Coffee").unwrap().quantity());
    }

    #[test]
    fn should_print_the_save_usage_without_a_favorite_name() {
        let (output, _) = run("save Espresso\n");
        assert!(output.contains(&format!("Usage: {}", SAVE_USAGE)));
    }

    #[test]
    fn should_print_the_help_on_an_unknown_command() {
        let (output, _) = run("brew\n");
        assert_eq!(4, output.matches("HELP PAGE").count());
    }
}

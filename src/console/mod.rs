use crate::model::{AccountNumber, Amount, Client};
use crate::system::Registry;

use core::str::FromStr;
use std::{
    error::Error,
    io::{BufRead, Write},
};

// The interactive layer: prompts, parsing of raw user input, and rendering
// of outcomes. The core never sees unvalidated text; everything is parsed
// here before a Registry call, and every Registry error is rendered as a
// message and the loop carries on.

const MENU: &str = "\n=============== MENU ===============\n\
                    [d]  Deposit\n\
                    [s]  Withdraw\n\
                    [e]  Statement\n\
                    [nc] New account\n\
                    [lc] List accounts\n\
                    [nu] New client\n\
                    [q]  Quit\n\
                    => ";

// Runs a full menu session against a fresh Registry, reading options from
// `input` and writing everything user-facing to `output`. Generic over the
// streams for ease of testing.
pub fn run_menu(input: &mut impl BufRead, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
    Console {
        input,
        output,
        registry: Registry::new(),
    }
    .run()
}

struct Console<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    registry: Registry,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            let Some(option) = self.prompt(MENU)? else {
                break;
            };

            match option.as_str() {
                "d" => self.deposit()?,
                "s" => self.withdraw()?,
                "e" => self.statement()?,
                "nc" => self.new_account()?,
                "lc" => self.list_accounts()?,
                "nu" => self.new_client()?,
                "q" => {
                    writeln!(self.output, "Leaving the session.")?;
                    break;
                }
                _ => writeln!(self.output, "Unknown option.")?,
            }
        }

        Ok(())
    }

    // Writes `label` and reads one trimmed line. Returns None on EOF, which
    // callers treat the same as quitting.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, Box<dyn Error>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    fn deposit(&mut self) -> Result<(), Box<dyn Error>> {
        let Some((tax_id, number)) = self.select_client_account()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Deposit amount: ")? else {
            return Ok(());
        };

        match self.registry.deposit(&tax_id, number, amount) {
            Ok(()) => writeln!(self.output, "Deposit made.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), Box<dyn Error>> {
        let Some((tax_id, number)) = self.select_client_account()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Withdrawal amount: ")? else {
            return Ok(());
        };

        match self.registry.withdraw(&tax_id, number, amount) {
            Ok(()) => writeln!(self.output, "Withdrawal made.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        Ok(())
    }

    fn statement(&mut self) -> Result<(), Box<dyn Error>> {
        let Some((tax_id, number)) = self.select_client_account()? else {
            return Ok(());
        };

        let account = match self.registry.account(&tax_id, number) {
            Ok(account) => account,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        writeln!(self.output, "\n=========== STATEMENT ===========")?;
        if account.history().entries().is_empty() {
            writeln!(self.output, "No transactions.")?;
        } else {
            for entry in account.history().entries() {
                writeln!(
                    self.output,
                    "{} - {}: $ {}",
                    entry.timestamp().format("%d-%m-%Y %H:%M:%S"),
                    entry.kind().label(),
                    entry.amount().round_dp(2),
                )?;
            }
        }
        writeln!(self.output, "\nBalance: $ {}", account.balance().round_dp(2))?;
        writeln!(self.output, "=================================")?;

        Ok(())
    }

    fn new_client(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(tax_id) = self.prompt("Tax id (digits only): ")? else {
            return Ok(());
        };
        if !is_valid_tax_id(&tax_id) {
            writeln!(self.output, "Invalid tax id.")?;
            return Ok(());
        }

        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address (street, nr - district - city/state): ")? else {
            return Ok(());
        };

        let client = Client::individual(full_name, birth_date, tax_id, address);
        match self.registry.register_client(client) {
            Ok(()) => writeln!(self.output, "Client created.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        Ok(())
    }

    fn new_account(&mut self) -> Result<(), Box<dyn Error>> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };

        match self.registry.open_checking_account(&tax_id) {
            Ok(number) => writeln!(self.output, "Account {} created.", number)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        Ok(())
    }

    fn list_accounts(&mut self) -> Result<(), Box<dyn Error>> {
        // Collected up front so the registry borrow does not overlap the
        // output writes below.
        let lines: Vec<String> = self
            .registry
            .accounts()
            .into_iter()
            .map(|account| {
                let holder = self
                    .registry
                    .client(account.owner_tax_id())
                    .map(|c| c.full_name().to_string())
                    .unwrap_or_default();
                format!(
                    "Branch: {}\tAccount: {}\tHolder: {}",
                    account.branch(),
                    account.number(),
                    holder,
                )
            })
            .collect();

        if lines.is_empty() {
            writeln!(self.output, "No accounts yet.")?;
            return Ok(());
        }

        for line in lines {
            writeln!(self.output, "{}", "=".repeat(50))?;
            writeln!(self.output, "{}", line)?;
        }

        Ok(())
    }

    // Asks for a tax id, then has the user pick one of that client's
    // accounts by index. Returns None when the flow cannot continue (EOF,
    // unknown client, no accounts, bad selection); a message has already
    // been written in the non-EOF cases.
    fn select_client_account(
        &mut self,
    ) -> Result<Option<(String, AccountNumber)>, Box<dyn Error>> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(None);
        };

        let numbers = match self.registry.client(&tax_id) {
            Ok(client) => client.accounts().to_vec(),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(None);
            }
        };

        if numbers.is_empty() {
            writeln!(self.output, "Client has no accounts.")?;
            return Ok(None);
        }

        writeln!(self.output, "\nAvailable accounts:")?;
        for (i, number) in numbers.iter().enumerate() {
            writeln!(self.output, "[{}] Account {}", i, number)?;
        }

        let Some(choice) = self.prompt("Choose an account index: ")? else {
            return Ok(None);
        };

        match usize::from_str(&choice).ok().and_then(|i| numbers.get(i)) {
            Some(number) => Ok(Some((tax_id, *number))),
            None => {
                writeln!(self.output, "Invalid selection.")?;
                Ok(None)
            }
        }
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Amount>, Box<dyn Error>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };

        match Amount::from_str(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Invalid amount format.")?;
                Ok(None)
            }
        }
    }
}

fn is_valid_tax_id(tax_id: &str) -> bool {
    tax_id.len() == 11 && tax_id.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod test {
    use super::*;

    // Runs a scripted session and returns everything written to the output.
    fn run_session(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run_menu(&mut input, &mut output).expect("Unexpected error");
        String::from_utf8(output).expect("Not UTF-8")
    }

    #[test]
    fn test_quit_immediately() {
        let output = run_session("q\n");
        assert!(output.contains("MENU"));
        assert!(output.contains("Leaving the session."));
    }

    #[test]
    fn test_eof_ends_the_session() {
        let output = run_session("");
        assert!(output.contains("MENU"));
    }

    #[test]
    fn test_unknown_option() {
        let output = run_session("x\nq\n");
        assert!(output.contains("Unknown option."));
    }

    #[test]
    fn test_full_session_flow() {
        let script = concat!(
            "nu\n",
            "12345678901\n",
            "Jo Doe\n",
            "01-02-1990\n",
            "Elm St 1 - Downtown - Springfield/SP\n",
            "nc\n",
            "12345678901\n",
            "d\n",
            "12345678901\n",
            "0\n",
            "1000\n",
            "s\n",
            "12345678901\n",
            "0\n",
            "600\n",
            "s\n",
            "12345678901\n",
            "0\n",
            "250\n",
            "e\n",
            "12345678901\n",
            "0\n",
            "lc\n",
            "q\n",
        );

        let output = run_session(script);

        assert!(output.contains("Client created."));
        assert!(output.contains("Account 1 created."));
        assert!(output.contains("Deposit made."));
        assert!(output.contains("Amount exceeds the per-withdrawal limit."));
        assert!(output.contains("Withdrawal made."));
        assert!(output.contains("=========== STATEMENT ==========="));
        assert!(output.contains("Deposit: $ 1000"));
        assert!(output.contains("Withdrawal: $ 250"));
        assert!(output.contains("Balance: $ 750"));
        assert!(output.contains("Holder: Jo Doe"));
    }

    #[test]
    fn test_deposit_for_unknown_client() {
        let output = run_session("d\n12345678901\nq\n");
        assert!(output.contains("No client registered under tax id 12345678901."));
    }

    #[test]
    fn test_client_without_accounts() {
        let script = concat!(
            "nu\n",
            "12345678901\n",
            "Jo Doe\n",
            "01-02-1990\n",
            "Elm St 1\n",
            "e\n",
            "12345678901\n",
            "q\n",
        );
        let output = run_session(script);
        assert!(output.contains("Client has no accounts."));
    }

    #[test]
    fn test_invalid_account_selection() {
        let script = concat!(
            "nu\n",
            "12345678901\n",
            "Jo Doe\n",
            "01-02-1990\n",
            "Elm St 1\n",
            "nc\n",
            "12345678901\n",
            "d\n",
            "12345678901\n",
            "7\n",
            "q\n",
        );
        let output = run_session(script);
        assert!(output.contains("Invalid selection."));
    }

    #[test]
    fn test_invalid_amount_never_reaches_the_core() {
        let script = concat!(
            "nu\n",
            "12345678901\n",
            "Jo Doe\n",
            "01-02-1990\n",
            "Elm St 1\n",
            "nc\n",
            "12345678901\n",
            "d\n",
            "12345678901\n",
            "0\n",
            "ten dollars\n",
            "e\n",
            "12345678901\n",
            "0\n",
            "q\n",
        );
        let output = run_session(script);
        assert!(output.contains("Invalid amount format."));
        assert!(output.contains("No transactions."));
    }

    #[test]
    fn test_rejects_malformed_tax_id() {
        let output = run_session("nu\n123\nq\n");
        assert!(output.contains("Invalid tax id."));
    }

    #[test]
    fn test_duplicate_client_keeps_first() {
        let script = concat!(
            "nu\n",
            "12345678901\n",
            "Jo Doe\n",
            "01-02-1990\n",
            "Elm St 1\n",
            "nu\n",
            "12345678901\n",
            "Somebody Else\n",
            "03-04-1985\n",
            "Oak St 2\n",
            "q\n",
        );
        let output = run_session(script);
        assert!(output.contains("A client is already registered under tax id 12345678901."));
    }

    #[test]
    fn test_statement_when_empty() {
        let script = concat!(
            "nu\n",
            "12345678901\n",
            "Jo Doe\n",
            "01-02-1990\n",
            "Elm St 1\n",
            "nc\n",
            "12345678901\n",
            "e\n",
            "12345678901\n",
            "0\n",
            "q\n",
        );
        let output = run_session(script);
        assert!(output.contains("No transactions."));
        assert!(output.contains("Balance: $ 0"));
    }

    #[test]
    fn test_is_valid_tax_id() {
        assert!(is_valid_tax_id("12345678901"));
        assert!(!is_valid_tax_id("1234567890"));
        assert!(!is_valid_tax_id("123456789012"));
        assert!(!is_valid_tax_id("1234567890a"));
        assert!(!is_valid_tax_id(""));
    }
}

//! Interactive command loop.
//!
//! The shell reads one command per line, prompts for the fields it needs,
//! and prints the outcome. Validation and lookup failures are printed and the
//! loop continues. `quit`, or the end of input, saves the directory through
//! the repository and ends the loop; a failed save is returned to the caller.

mod commands;

pub use commands::Command;

use crate::directory::Directory;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Record;
use crate::repositories::DirectoryRepository;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Whether the loop keeps reading after a command.
enum Flow {
    Continue,
    EndOfInput,
}

/// Line-oriented shell over a directory.
pub struct Shell<'a, R, W> {
    directory: &'a mut Directory,
    repository: &'a dyn DirectoryRepository,
    window_days: u32,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell.
    ///
    /// # Arguments
    /// * `directory` - Directory the commands operate on
    /// * `repository` - Where `quit` saves the directory
    /// * `window_days` - Window used by the `birthdays` command
    /// * `input` / `output` - Terminal streams, or buffers in tests
    pub fn new(
        directory: &'a mut Directory,
        repository: &'a dyn DirectoryRepository,
        window_days: u32,
        input: R,
        output: W,
    ) -> Self {
        Self {
            directory,
            repository,
            window_days,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input, then save.
    pub fn run(&mut self) -> Result<()> {
        let prompt = Command::prompt();
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                break;
            };

            let flow = match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => {
                    debug!(%command, "Running command");
                    self.execute(command)?
                }
                None => {
                    writeln!(self.output, "Invalid command, please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::EndOfInput = flow {
                break;
            }
        }

        self.quit()
    }

    fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Add => self.add(),
            Command::Find => self.find(),
            Command::Delete => self.delete(),
            Command::AddBirthday => self.add_birthday(),
            Command::EditPhone => self.edit_phone(),
            Command::RemovePhone => self.remove_phone(),
            Command::All => self.all(),
            Command::Birthdays => self.birthdays(),
            // Handled by the loop.
            Command::Quit => Ok(Flow::EndOfInput),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_field("Enter contact name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(phone) = self.read_field("Enter contact phone: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let mut record = Record::new(name.as_str());
        match record.add_phone(&phone) {
            Ok(()) => {
                self.directory.add_record(record);
                writeln!(self.output, "Added contact: {} with phone: {}", name, phone)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn find(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_field("Enter contact name to find: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.directory.find(&name) {
            Some(record) => match record.birthday() {
                Some(birthday) => {
                    writeln!(self.output, "Found: {}, birthday: {}", record, birthday)?
                }
                None => writeln!(self.output, "Found: {}", record)?,
            },
            None => writeln!(self.output, "Record not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_field("Enter contact name to delete: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.directory.delete(&name) {
            Ok(_) => writeln!(self.output, "Deleted contact: {}", name)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_birthday(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_field("Enter contact name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(birthday) = self.read_field("Enter birthday (DD.MM.YYYY): ")? else {
            return Ok(Flow::EndOfInput);
        };

        let outcome = self.update_record(&name, |record| record.add_birthday(&birthday));
        self.report(outcome, format!("Birthday set for {}: {}", name, birthday))?;
        Ok(Flow::Continue)
    }

    fn edit_phone(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_field("Enter contact name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(old) = self.read_field("Enter phone to replace: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(new) = self.read_field("Enter new phone: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let outcome = self.update_record(&name, |record| record.edit_phone(&old, &new));
        self.report(outcome, format!("Phone updated for {}: {} -> {}", name, old, new))?;
        Ok(Flow::Continue)
    }

    fn remove_phone(&mut self) -> io::Result<Flow> {
        let Some(name) = self.read_field("Enter contact name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(phone) = self.read_field("Enter phone to remove: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let outcome = self.update_record(&name, |record| {
            record.remove_phone(&phone);
            Ok(())
        });
        self.report(outcome, format!("Phone {} removed from {}", phone, name))?;
        Ok(Flow::Continue)
    }

    fn all(&mut self) -> io::Result<Flow> {
        if self.directory.is_empty() {
            writeln!(self.output, "Address book is empty.")?;
        }
        for record in self.directory.records() {
            writeln!(self.output, "{}", record)?;
        }
        Ok(Flow::Continue)
    }

    fn birthdays(&mut self) -> io::Result<Flow> {
        let upcoming = self.directory.get_upcoming_birthdays(self.window_days);
        if upcoming.is_empty() {
            writeln!(
                self.output,
                "No upcoming birthdays in the next {} days.",
                self.window_days
            )?;
        }
        for entry in upcoming {
            writeln!(self.output, "{}: {}", entry.name, entry.congratulation_date)?;
        }
        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> Result<()> {
        self.repository
            .save(&*self.directory)
            .context("Failed to save address book")?;
        writeln!(self.output, "Address book saved to disk.")?;
        writeln!(self.output, "Exiting the program.")?;
        self.output.flush()?;
        info!(records = self.directory.len(), "Shell finished");
        Ok(())
    }

    fn update_record(
        &mut self,
        name: &str,
        update: impl FnOnce(&mut Record) -> DirectoryResult<()>,
    ) -> DirectoryResult<()> {
        let record = self
            .directory
            .find_mut(name)
            .ok_or_else(|| DirectoryError::RecordNotFound(name.to_string()))?;
        update(record)
    }

    fn report(&mut self, outcome: DirectoryResult<()>, success: String) -> io::Result<()> {
        match outcome {
            Ok(()) => writeln!(self.output, "{}", success),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    /// Prompt for a field; surrounding whitespace is dropped.
    fn read_field(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.read_line(prompt)?.map(|line| line.trim().to_string()))
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

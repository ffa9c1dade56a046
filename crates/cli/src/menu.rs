//! Interactive menu loop.
//!
//! The console reads operator input line by line from any `BufRead` and writes to any
//! `Write`, so a whole session can be replayed against in-memory buffers. Each pass of the
//! loop shows the banner, asks for an option and dispatches to the registry.
//!
//! End of input at any prompt ends the session quietly. A registration cut short this way
//! stores nothing.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use vida_core::constants::MEAN_AGE_DECIMALS;
use vida_core::{Age, ClinicConfig, Patient, Registry, RegistryError, Statistics};

use crate::text;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("invalid menu option: {0:?}")]
    InvalidOption(String),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

/// The five entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register,
    Statistics,
    Search,
    List,
    Exit,
}

/// Matches the raw line exactly; `" 1"` is not option 1.
impl FromStr for MenuOption {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::Statistics),
            "3" => Ok(Self::Search),
            "4" => Ok(Self::List),
            "5" => Ok(Self::Exit),
            other => Err(ConsoleError::InvalidOption(other.to_owned())),
        }
    }
}

pub struct Console<'a, R, W> {
    cfg: &'a ClinicConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(cfg: &'a ClinicConfig, input: R, output: W) -> Self {
        Self { cfg, input, output }
    }

    /// Runs the menu until the operator exits or input ends.
    pub fn run(&mut self, registry: &mut Registry) -> ConsoleResult<()> {
        tracing::info!("session started");

        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt(text::PROMPT_OPTION)? else {
                break;
            };

            let flow = match choice.parse::<MenuOption>() {
                Ok(MenuOption::Register) => self.register(registry)?,
                Ok(MenuOption::Statistics) => {
                    write_statistics(&mut self.output, &registry.statistics())?;
                    ControlFlow::Continue(())
                }
                Ok(MenuOption::Search) => self.search(registry)?,
                Ok(MenuOption::List) => {
                    write_listing(&mut self.output, registry)?;
                    ControlFlow::Continue(())
                }
                Ok(MenuOption::Exit) => {
                    writeln!(self.output, "{}", text::EXITING)?;
                    ControlFlow::Break(())
                }
                Err(ConsoleError::InvalidOption(raw)) => {
                    tracing::debug!("invalid menu option {:?}", raw);
                    writeln!(self.output, "{}", text::INVALID_OPTION)?;
                    ControlFlow::Continue(())
                }
                Err(e) => return Err(e),
            };

            if flow.is_break() {
                break;
            }
        }

        self.output.flush()?;
        tracing::info!(patients = registry.len(), "session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> ConsoleResult<()> {
        writeln!(self.output, "\n=== SISTEMA {} ===", self.cfg.clinic_name())?;
        for line in text::MENU_OPTIONS {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Writes `label`, then reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input at prompt {:?}", label);
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn register(&mut self, registry: &mut Registry) -> ConsoleResult<ControlFlow<()>> {
        let Some(name) = self.prompt(text::PROMPT_NAME)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(age) = self.prompt_age()? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(phone) = self.prompt(text::PROMPT_PHONE)? else {
            return Ok(ControlFlow::Break(()));
        };

        let patient = registry.register(&name, &age, &phone)?;
        writeln!(
            self.output,
            "Paciente {} cadastrado com sucesso!",
            patient.name()
        )?;
        Ok(ControlFlow::Continue(()))
    }

    /// Repeats the age prompt until the answer parses as an [`Age`].
    ///
    /// Returns the accepted raw text, or `None` at end of input.
    fn prompt_age(&mut self) -> ConsoleResult<Option<String>> {
        loop {
            let Some(age) = self.prompt(text::PROMPT_AGE)? else {
                return Ok(None);
            };
            match age.parse::<Age>() {
                Ok(_) => return Ok(Some(age)),
                Err(e) => {
                    tracing::debug!("rejected age at prompt: {}", e);
                    writeln!(self.output, "{}", text::INVALID_AGE)?;
                }
            }
        }
    }

    fn search(&mut self, registry: &Registry) -> ConsoleResult<ControlFlow<()>> {
        let Some(name) = self.prompt(text::PROMPT_SEARCH_NAME)? else {
            return Ok(ControlFlow::Break(()));
        };

        match registry.find_by_name(&name) {
            Some(patient) => writeln!(self.output, "Paciente encontrado: {}", patient.echo())?,
            None => writeln!(self.output, "{}", text::NOT_FOUND)?,
        }
        Ok(ControlFlow::Continue(()))
    }
}

/// Writes the four-line statistics block.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> std::io::Result<()> {
    fn age_or_none(age: Option<Age>) -> String {
        age.map_or_else(|| text::NO_AGE.to_owned(), |a| a.to_string())
    }

    writeln!(out, "Total de pacientes: {}", stats.count)?;
    writeln!(
        out,
        "Idade média dos pacientes: {:.*}",
        MEAN_AGE_DECIMALS, stats.mean_age
    )?;
    writeln!(out, "Paciente mais novo: {}", age_or_none(stats.min_age))?;
    writeln!(out, "Paciente mais velho: {}", age_or_none(stats.max_age))
}

/// Writes one line per patient, or the empty-registry message.
pub fn write_listing<W: Write>(out: &mut W, registry: &Registry) -> std::io::Result<()> {
    match registry.list_all() {
        Some(patients) => patients
            .iter()
            .try_for_each(|p: &Patient| writeln!(out, "{p}")),
        None => writeln!(out, "{}", text::NO_PATIENTS),
    }
}

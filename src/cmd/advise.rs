//! Advise command - interactive question and answer session

use super::display::{write_section_details, write_section_summary};
use crate::core::{
    detect_intent, eligible_sections, Catalog, EligibleSection, TaxSection, UserProfile,
};
use crate::money::{format_inr, parse_inr};
use clap::Args;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Default)]
pub struct AdviseCommand {}

impl AdviseCommand {
    pub fn exec(&self, catalog: &Catalog) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let outcome = Session::new(catalog, stdin.lock(), stdout.lock()).run()?;
        log::debug!(
            "Session finished for {:?}: {} scheme(s) offered, {:?}",
            outcome.profile,
            outcome.offered.len(),
            outcome.exploration
        );
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid age: {0:?}")]
    InvalidAge(String),
    #[error("input ended before the session finished")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What the user chose after seeing the list of schemes.
#[derive(Debug, Clone, PartialEq)]
pub enum Exploration<'a> {
    Declined,
    Section(&'a TaxSection),
    /// A number outside the listed range
    InvalidChoice(i64),
    /// Neither a number nor "no"
    InvalidInput(String),
}

#[derive(Debug)]
pub struct SessionOutcome<'a> {
    pub profile: UserProfile,
    pub offered: Vec<EligibleSection<'a>>,
    /// `None` when the user did not ask for schemes or none were found
    pub exploration: Option<Exploration<'a>>,
}

enum Step {
    CollectIncome,
    AskSchemes(UserProfile),
    CollectAge(UserProfile),
    ShowSchemes(UserProfile, u32),
}

/// One run of the advisor over a line based input and a text output.
pub struct Session<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Session {
            catalog,
            input,
            output,
        }
    }

    pub fn run(mut self) -> Result<SessionOutcome<'a>, SessionError> {
        self.greet()?;
        let mut step = Step::CollectIncome;
        loop {
            step = match step {
                Step::CollectIncome => {
                    let income = self.collect_income()?;
                    let profile = UserProfile::from_income(income);
                    writeln!(
                        self.output,
                        "Based on your income of {}, you fall under the '{}'.",
                        format_inr(profile.income),
                        profile.bracket
                    )?;
                    Step::AskSchemes(profile)
                }
                Step::AskSchemes(profile) => {
                    let answer = self.prompt(
                        "Would you like to see tax-saving schemes to reduce your tax liability? (yes/no): ",
                    )?;
                    if detect_intent(&answer).is_affirmative() {
                        Step::CollectAge(profile)
                    } else {
                        writeln!(self.output, "Thank you for using the Tax Saving Assistant!")?;
                        return Ok(SessionOutcome {
                            profile,
                            offered: Vec::new(),
                            exploration: None,
                        });
                    }
                }
                Step::CollectAge(mut profile) => {
                    let answer = self.prompt("Please enter your age: ")?;
                    let age = answer
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| SessionError::InvalidAge(answer.trim().to_string()))?;
                    profile.age = Some(age);
                    Step::ShowSchemes(profile, age)
                }
                Step::ShowSchemes(profile, age) => {
                    let offered = eligible_sections(self.catalog, profile.income, age);
                    let exploration = self.show_schemes(&offered)?;
                    return Ok(SessionOutcome {
                        profile,
                        offered,
                        exploration,
                    });
                }
            };
        }
    }

    fn greet(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Tax Saving Assistant!")?;
        writeln!(
            self.output,
            "I can help you find the best tax-saving schemes based on your annual income."
        )
    }

    /// Keeps asking until the answer is a non-negative amount.
    fn collect_income(&mut self) -> Result<Decimal, SessionError> {
        loop {
            let answer = self.prompt("Please enter your annual income (in INR): ")?;
            match parse_inr(&answer) {
                Ok(income) => return Ok(income),
                Err(err) => {
                    log::debug!("Rejected income {:?}: {}", answer, err);
                    writeln!(self.output, "Invalid input. Please enter a numeric value.")?;
                }
            }
        }
    }

    fn show_schemes(
        &mut self,
        offered: &[EligibleSection<'a>],
    ) -> Result<Option<Exploration<'a>>, SessionError> {
        if offered.is_empty() {
            writeln!(
                self.output,
                "No applicable tax-saving schemes found based on the provided information."
            )?;
            return Ok(None);
        }

        writeln!(self.output, "Here are some tax-saving schemes that you can consider:")?;
        for (i, eligible) in offered.iter().enumerate() {
            write_section_summary(&mut self.output, i + 1, eligible.section)?;
        }

        let answer = self.prompt(
            "Would you like to explore details of any scheme? (Enter the number or 'no' to exit): ",
        )?;
        let answer = answer.trim().to_lowercase();
        if answer == "no" {
            return Ok(Some(Exploration::Declined));
        }

        let exploration = match answer.parse::<i64>() {
            Ok(choice) => match usize::try_from(choice)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| offered.get(idx))
            {
                Some(eligible) => {
                    write_section_details(&mut self.output, eligible.section)?;
                    Exploration::Section(eligible.section)
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please run the program again.")?;
                    Exploration::InvalidChoice(choice)
                }
            },
            Err(_) => {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                Exploration::InvalidInput(answer)
            }
        };
        Ok(Some(exploration))
    }

    /// Print a prompt and read one line of input.
    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

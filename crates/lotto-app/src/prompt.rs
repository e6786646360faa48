use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use lotto_core::model::{Bounds, LottoNumber, ModelError, Pool};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before all values were entered")]
    Eof,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Line-oriented question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Keep asking until the answer is a pool size the engine accepts.
    pub fn ask_pool_size(&mut self) -> Result<usize, PromptError> {
        let (min, max) = (Pool::MIN_SIZE, Pool::MAX_SIZE);
        loop {
            let size: usize =
                self.ask_value(&format!("Enter how many numbers you will provide ({min}..{max}): "))?;
            if (min..=max).contains(&size) {
                return Ok(size);
            }
            self.say(&format!("Please enter a value between {min} and {max}."))?;
        }
    }

    /// Ask for a `lower..=upper` pair inside `[min, max]`. The upper bound may
    /// not be smaller than the lower one just given.
    pub fn ask_bounds(&mut self, label: &str, min: u16, max: u16) -> Result<(u16, u16), PromptError> {
        let lower = loop {
            let value: u16 = self.ask_value(&format!("Enter minimum {label} ({min}..{max}): "))?;
            if (min..=max).contains(&value) {
                break value;
            }
            self.say(&format!("Please enter a value between {min} and {max}."))?;
        };
        let upper = loop {
            let value: u16 = self.ask_value(&format!(
                "Enter maximum {label} (must be >= {lower} and <= {max}): "
            ))?;
            if (lower..=max).contains(&value) {
                break value;
            }
            self.say(&format!("Please enter a value between {lower} and {max}."))?;
        };
        debug!(label, lower, upper, "bounds entered");
        Ok((lower, upper))
    }

    pub fn ask_even_bounds(&mut self) -> Result<Bounds<u8>, PromptError> {
        let (lower, upper) = self.ask_bounds(
            "number of even numbers",
            Bounds::<u8>::EVEN_MIN.into(),
            Bounds::<u8>::EVEN_MAX.into(),
        )?;
        // Both values were checked against 0..=6 above.
        Ok(Bounds::even_count(lower as u8, upper as u8)?)
    }

    pub fn ask_sum_bounds(&mut self) -> Result<Bounds<u16>, PromptError> {
        let (lower, upper) = self.ask_bounds(
            "sum for the 6-number combination",
            Bounds::<u16>::SUM_MIN,
            Bounds::<u16>::SUM_MAX,
        )?;
        Ok(Bounds::sum(lower, upper)?)
    }

    /// Read `count` distinct numbers in 1..=49, re-asking on anything out of
    /// range or already entered.
    pub fn ask_numbers(&mut self, count: usize) -> Result<Vec<u8>, PromptError> {
        let mut numbers: Vec<u8> = Vec::with_capacity(count);
        let mut prompt = "Enter number: ";
        while numbers.len() < count {
            let entered: u16 = self.ask_value(prompt)?;
            prompt = "Enter number: ";
            let Some(number) = u8::try_from(entered).ok().and_then(LottoNumber::new) else {
                self.say(&format!(
                    "Numbers must be between {} and {}.",
                    LottoNumber::MIN,
                    LottoNumber::MAX
                ))?;
                continue;
            };
            let value = number.value();
            if numbers.contains(&value) {
                prompt = "Duplicate found. Enter a different number: ";
                continue;
            }
            numbers.push(value);
        }
        Ok(numbers)
    }

    fn ask_value<T: FromStr>(&mut self, prompt: &str) -> Result<T, PromptError> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(PromptError::Eof);
            }
            match self.line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    let shown = self.line.trim().to_string();
                    self.say(&format!("'{shown}' is not a valid number."))?;
                }
            }
        }
    }

    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

//! Interactive prompts with validation.

use std::io::{BufRead, Write};

use super::{Console, DESCRIPTION_WIDTH};
use crate::capability::Stream;
use crate::error::FormatError;
use crate::width::{pad_right, visual_width};

/// Errors that can occur while prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("No options to choose from")]
    NoOptions,

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks a prompt answer against a rule string.
pub trait Validator {
    /// `Err` carries the message shown to the user before asking again.
    fn validate(&self, field: &str, value: &str, rules: &str) -> Result<(), String>;
}

/// Validator for `|`-separated rules:
/// `required`, `in_list[a,b]`, `min_length[n]`, `max_length[n]`, `numeric`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl Validator for RuleValidator {
    fn validate(&self, field: &str, value: &str, rules: &str) -> Result<(), String> {
        for rule in rules.split('|').map(str::trim).filter(|r| !r.is_empty()) {
            let (name, param) = match rule.split_once('[') {
                Some((name, rest)) => (name, rest.strip_suffix(']').unwrap_or(rest)),
                None => (rule, ""),
            };

            match name {
                "required" => {
                    if value.trim().is_empty() {
                        return Err(format!("The {} field is required.", field));
                    }
                }
                "in_list" => {
                    let allowed: Vec<&str> = param.split(',').map(str::trim).collect();
                    if !allowed.contains(&value) {
                        return Err(format!(
                            "The {} field must be one of: {}.",
                            field,
                            allowed.join(", ")
                        ));
                    }
                }
                "min_length" => {
                    let min = parse_length(rule, param)?;
                    if value.chars().count() < min {
                        return Err(format!(
                            "The {} field must be at least {} characters in length.",
                            field, min
                        ));
                    }
                }
                "max_length" => {
                    let max = parse_length(rule, param)?;
                    if value.chars().count() > max {
                        return Err(format!(
                            "The {} field cannot exceed {} characters in length.",
                            field, max
                        ));
                    }
                }
                "numeric" => {
                    if !is_numeric(value) {
                        return Err(format!("The {} field must contain only numbers.", field));
                    }
                }
                other => return Err(format!("Unknown validation rule: {}", other)),
            }
        }
        Ok(())
    }
}

fn parse_length(rule: &str, param: &str) -> Result<usize, String> {
    param
        .trim()
        .parse()
        .map_err(|_| format!("Invalid length in rule: {}", rule))
}

/// Optional sign, digits, at most one decimal point, at least one digit.
fn is_numeric(value: &str) -> bool {
    let digits = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// What a prompt offers besides free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PromptOptions {
    #[default]
    None,
    /// Answer used when the user just presses enter.
    Default(String),
    /// Allowed answers; the first one is the default.
    Choices(Vec<String>),
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Ask for a value on stdout and read the answer from input.
    ///
    /// Empty answers take the default. With [`PromptOptions::Choices`], the
    /// answer must be one of the choices in addition to `rules`. Invalid
    /// answers print the validator's message on stderr and ask again.
    pub fn prompt(
        &mut self,
        field: &str,
        options: &PromptOptions,
        rules: Option<&str>,
        validator: &dyn Validator,
    ) -> Result<String, PromptError> {
        let (extra, default) = match options {
            PromptOptions::None => (String::new(), String::new()),
            PromptOptions::Default(default) => (
                format!("[{}]", self.colorize(default, "green", None, None)?),
                default.clone(),
            ),
            PromptOptions::Choices(choices) => match choices.split_first() {
                Some((first, rest)) => {
                    let first_colored = self.colorize(first, "green", None, None)?;
                    let extra = if rest.is_empty() {
                        first_colored
                    } else {
                        format!("[{}, {}]", first_colored, rest.join(", "))
                    };
                    (extra, first.clone())
                }
                None => (String::new(), String::new()),
            },
        };

        let rules = match (rules, options) {
            (rules, PromptOptions::Choices(choices)) if !choices.is_empty() => {
                let in_list = format!("in_list[{}]", choices.join(","));
                Some(match rules {
                    Some(rules) if !rules.is_empty() => format!("{}|{}", rules, in_list),
                    _ => in_list,
                })
            }
            (Some(rules), _) if !rules.is_empty() => Some(rules.to_string()),
            _ => None,
        };

        let separator = if field.trim().is_empty() || extra.is_empty() {
            ""
        } else {
            " "
        };
        loop {
            write!(self.out, "{}{}{}: ", field, separator, extra)?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed);
            }
            let answer = match line.trim() {
                "" => default.clone(),
                trimmed => trimmed.to_string(),
            };

            let Some(rules) = rules.as_deref() else {
                return Ok(answer);
            };
            match validator.validate(field.trim(), &answer, rules) {
                Ok(()) => return Ok(answer),
                Err(message) => {
                    let message =
                        self.colorize_for(Stream::Stderr, &message, "light_red", None, None)?;
                    writeln!(self.err, "{}", message)?;
                }
            }
        }
    }

    /// List `key -> description` pairs and ask for one of the keys.
    pub fn prompt_by_key(
        &mut self,
        text: &str,
        options: &[(String, String)],
        validator: &dyn Validator,
    ) -> Result<String, PromptError> {
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }

        if !text.is_empty() {
            self.write(text)?;
        }

        let key_width = options
            .iter()
            .map(|(key, _)| visual_width(Some(key)))
            .max()
            .unwrap_or(0);
        let label_width = key_width + 6;

        for (key, description) in options {
            let label = pad_right(&format!("  [{}]  ", key), label_width);
            let label = self.colorize(&label, "green", None, None)?;
            let description = self.wrap(description, DESCRIPTION_WIDTH, label_width);
            self.write(&format!("{}{}", label, description))?;
        }

        let keys = options.iter().map(|(key, _)| key.clone()).collect();
        self.prompt("", &PromptOptions::Choices(keys), None, validator)
    }
}

//! Loose command-line argument splitting
//!
//! Splits arguments into positional segments and named options without a
//! declared schema. Meant for commands that forward or inspect their
//! arguments generically; declared interfaces should use clap.
//!
//! - A word not starting with `-` is a segment, unless it was consumed as
//!   the value of the option before it.
//! - `-name` / `--name` is an option. If the next word does not start with
//!   `-`, it becomes the option's value; otherwise the option is a flag.

/// Parsed segments and options, in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    segments: Vec<String>,
    options: Vec<(String, Option<String>)>,
}

impl CommandArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut parsed = Self::default();
        let mut consumed_as_value = false;

        for (i, arg) in args.iter().enumerate() {
            if !arg.starts_with('-') {
                if consumed_as_value {
                    consumed_as_value = false;
                } else {
                    parsed.segments.push(arg.clone());
                }
                continue;
            }

            let name = arg.trim_start_matches('-').to_string();
            let value = args
                .get(i + 1)
                .filter(|next| !next.starts_with('-'))
                .cloned();
            consumed_as_value = value.is_some();
            parsed.set_option(name, value);
        }

        parsed
    }

    /// Parse the current process arguments.
    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    fn set_option(&mut self, name: String, value: Option<String>) {
        match self.options.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.options.push((name, value)),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segment by 1-based position.
    pub fn segment(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.segments.get(index))
            .map(String::as_str)
    }

    pub fn options(&self) -> &[(String, Option<String>)] {
        &self.options
    }

    /// `Some(None)` for a flag, `Some(Some(value))` for a valued option.
    pub fn option(&self, name: &str) -> Option<Option<&str>> {
        self.options
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_deref())
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    /// Rebuild the options as a command-line string.
    ///
    /// With `use_long_options`, names longer than one character get `--`.
    /// Values containing spaces are double-quoted. Without `trim`, the
    /// string keeps its trailing space.
    pub fn options_string(&self, use_long_options: bool, trim: bool) -> String {
        let mut out = String::new();

        for (name, value) in &self.options {
            if use_long_options && name.chars().count() > 1 {
                out.push_str(&format!("--{} ", name));
            } else {
                out.push_str(&format!("-{} ", name));
            }

            match value {
                Some(value) if value.contains(' ') => out.push_str(&format!("\"{}\" ", value)),
                Some(value) => out.push_str(&format!("{} ", value)),
                None => {}
            }
        }

        if trim {
            out.trim().to_string()
        } else {
            out
        }
    }
}

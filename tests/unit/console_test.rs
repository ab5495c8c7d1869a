//! Unit tests for the console context

use termkit::capability::FixedTerminal;
use termkit::{Config, Console, ConsoleOptions, Dimensions, PromptOptions, RuleValidator};

type MemConsole<'a> = Console<&'a [u8], Vec<u8>, Vec<u8>>;

fn console(input: &[u8], options: ConsoleOptions) -> MemConsole<'_> {
    Console::with_io(input, Vec::new(), Vec::new(), options)
}

fn stdout_of(console: MemConsole<'_>) -> String {
    String::from_utf8(console.into_writers().0).unwrap()
}

#[test]
fn colored_console_writes_escape_codes() {
    let options = ConsoleOptions {
        stdout_color: true,
        ..ConsoleOptions::plain()
    };
    let mut console = console(b"", options);
    console.write_colored("ok", "green", Some("black")).unwrap();
    assert_eq!(stdout_of(console), "\x1b[0;32m\x1b[40mok\x1b[0m\n");
}

#[test]
fn fallback_dimensions_come_from_options() {
    let options = ConsoleOptions {
        fallback: Dimensions::new(100, 40),
        ..ConsoleOptions::plain()
    };
    let console = console(b"", options);
    assert_eq!(console.dimensions(), Dimensions::new(100, 40));
}

#[test]
fn zero_sized_terminal_uses_fallback() {
    let options = ConsoleOptions {
        terminal: Box::new(FixedTerminal(Some(Dimensions::new(0, 0)))),
        ..ConsoleOptions::plain()
    };
    let console = console(b"", options);
    assert_eq!(console.width(), 80);
}

#[test]
fn config_fallback_flows_into_options() {
    let mut config = Config::default();
    config.terminal.default_width = 120;
    config.output.color = termkit::ColorChoice::Never;

    let options = ConsoleOptions::from_config(&config, &termkit::EnvSnapshot::default());
    assert!(!options.stdout_color);
    assert!(!options.stderr_color);
    assert_eq!(options.fallback.cols, 120);
}

#[test]
fn prompt_with_validation_reasks_until_valid() {
    let mut console = console(b"abc\n42\n", ConsoleOptions::plain());
    let answer = console
        .prompt("Age", &PromptOptions::None, Some("required|numeric"), &RuleValidator)
        .unwrap();
    assert_eq!(answer, "42");

    let (out, err) = console.into_writers();
    assert_eq!(String::from_utf8(out).unwrap(), "Age: Age: ");
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "The Age field must contain only numbers.\n"
    );
}

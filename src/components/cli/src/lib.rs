mod check;
mod help;

pub use check::{CheckCommand, CheckOptions, OutputFormat};
use enum_dispatch::enum_dispatch;
use help::HelpCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Check(CheckCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from(args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut args = args.peekable();

        match args.peek().map(String::as_str) {
            Some("-h" | "--help") | None => HelpCommand::parse(args).map(Self::from),
            Some("check") => {
                // Skip over 'check' command keyword
                args.next();
                CheckCommand::parse(args).map(Self::from)
            }
            _ => CheckCommand::parse(args).map(Self::from),
        }
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<(), ()>;
}

use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

pub const USAGE: &str = "\
Rewrites a Box2D editor rigid body JSON file in place for the destsol loader.

Usage:
    rigid-body-convert <file>
    rigid-body-convert [-h|--h|/h|help|-help|--help|/help|?|-?|--?|/?]

`rigidBodies` is renamed to `rigidBody`, a list keeps only its first body,
and `imagePath` and `name` are removed from it. The file is rewritten with
sorted keys and a four-space indent.
";

// h, help or ? behind no prefix, `-`, `--` or `/`
const HELP_PATTERN: &str = r"^(?:-{1,2}|/)?(?:h|help|\?)$";

lazy_static! {
    static ref HELP_TOKEN: Regex = Regex::new(HELP_PATTERN).expect("invalid help token pattern");
}

/// What an invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Usage,
    Convert(PathBuf),
}

impl Command {
    /// Interpret arguments, program name excluded. Only the first one counts.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Command {
        match args.first() {
            None => Command::Usage,
            Some(first) if is_help_token(first.as_ref()) => Command::Usage,
            Some(first) => Command::Convert(PathBuf::from(first.as_ref())),
        }
    }
}

/// Case-sensitive check against the recognized help tokens.
pub fn is_help_token(arg: &str) -> bool {
    HELP_TOKEN.is_match(arg)
}

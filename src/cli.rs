use crate::interpreter::DEFAULT_PROMPT;
use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// A minimal interactive command interpreter.
/// Reads one command per line and runs it as a builtin (cd, help, exit) or an external program.
pub struct Options {
    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// text printed before each input line. Defaults to "$ ".
    pub prompt: String,

    #[argh(switch)]
    /// read standard input line by line without the line editor.
    pub plain: bool,

    #[argh(switch, short = 'v')]
    /// log debug events to standard error.
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::from_args(&["lsh"], &[]).unwrap();
        assert_eq!(opts.prompt, "$ ");
        assert!(!opts.plain);
        assert!(!opts.verbose);
    }

    #[test]
    fn test_all_options() {
        let opts = Options::from_args(&["lsh"], &["--prompt", "> ", "--plain", "-v"]).unwrap();
        assert_eq!(opts.prompt, "> ");
        assert!(opts.plain);
        assert!(opts.verbose);
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert!(Options::from_args(&["lsh"], &["--history"]).is_err());
    }
}

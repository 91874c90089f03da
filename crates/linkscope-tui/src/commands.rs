//! Input line commands.
//!
//! Lines starting with `/` are commands; anything else is a text message.

use std::path::PathBuf;

/// Help text listing the commands.
pub const HELP: &str = "/join <room>  /snr <dB>  /pwd <password>  /file <path>...  /save <n> [path]  /quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `/join <room>`
    Join {
        /// Room to join.
        room: String,
    },
    /// `/snr <dB>`
    Snr {
        /// Requested SNR.
        snr: f64,
    },
    /// `/pwd [password]`; no argument clears the password.
    Password {
        /// New password.
        password: String,
    },
    /// `/file <path>...`
    Files {
        /// Files in submission order.
        paths: Vec<PathBuf>,
    },
    /// `/save <n> [path]`, `n` counting from 1.
    Save {
        /// Zero-based download index.
        index: usize,
        /// Destination, defaulting to the download directory.
        path: Option<PathBuf>,
    },
    /// `/quit` or `/q`
    Quit,
    /// Plain text to transmit.
    Text {
        /// Message text.
        text: String,
    },
    /// Unrecognized command.
    Unknown {
        /// The command word as typed.
        input: String,
    },
    /// Recognized command with bad arguments.
    InvalidArgs {
        /// Command name without the slash.
        command: &'static str,
        /// What was wrong.
        error: String,
    },
}

/// Parse one input line.
pub fn parse(line: &str) -> Command {
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Text { text: line.to_owned() };
    };

    let (word, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let args = args.trim();

    match word {
        "join" | "j" => {
            if args.is_empty() {
                return invalid("join", "expected a room name");
            }
            Command::Join { room: args.to_owned() }
        },
        "snr" => match args.parse::<f64>() {
            Ok(snr) if snr.is_finite() => Command::Snr { snr },
            _ => invalid("snr", "expected a number of dB"),
        },
        "pwd" | "password" => Command::Password { password: args.to_owned() },
        "file" | "f" => {
            let paths: Vec<PathBuf> = args.split_whitespace().map(PathBuf::from).collect();
            if paths.is_empty() {
                return invalid("file", "expected at least one path");
            }
            Command::Files { paths }
        },
        "save" => {
            let mut parts = args.split_whitespace();
            let index = match parts.next().map(str::parse::<usize>) {
                Some(Ok(n)) if n > 0 => n - 1,
                _ => return invalid("save", "expected a download number starting at 1"),
            };
            Command::Save { index, path: parts.next().map(PathBuf::from) }
        },
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown { input: format!("/{word}") },
    }
}

fn invalid(command: &'static str, error: &str) -> Command {
    Command::InvalidArgs { command, error: error.to_owned() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_message() {
        assert_eq!(parse("hello world"), Command::Text { text: "hello world".into() });
    }

    #[test]
    fn join_takes_room() {
        assert_eq!(parse("/join  lab 1 "), Command::Join { room: "lab 1".into() });
        assert!(matches!(parse("/join"), Command::InvalidArgs { command: "join", .. }));
    }

    #[test]
    fn snr_requires_number() {
        assert_eq!(parse("/snr 12.5"), Command::Snr { snr: 12.5 });
        assert_eq!(parse("/snr -3"), Command::Snr { snr: -3.0 });
        assert!(matches!(parse("/snr loud"), Command::InvalidArgs { command: "snr", .. }));
        assert!(matches!(parse("/snr NaN"), Command::InvalidArgs { .. }));
    }

    #[test]
    fn password_may_be_cleared() {
        assert_eq!(parse("/pwd s3cret"), Command::Password { password: "s3cret".into() });
        assert_eq!(parse("/pwd"), Command::Password { password: String::new() });
    }

    #[test]
    fn files_keep_order() {
        assert_eq!(parse("/file b.txt a.bin"), Command::Files {
            paths: vec!["b.txt".into(), "a.bin".into()]
        });
    }

    #[test]
    fn save_is_one_based() {
        insta::assert_debug_snapshot!(parse("/save 2 out.bin"), @r#"
        Save {
            index: 1,
            path: Some(
                "out.bin",
            ),
        }
        "#);
        assert_eq!(parse("/save 1"), Command::Save { index: 0, path: None });
        assert!(matches!(parse("/save 0"), Command::InvalidArgs { command: "save", .. }));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse("/dance now"), Command::Unknown { input: "/dance".into() });
        assert_eq!(parse("/q"), Command::Quit);
    }
}

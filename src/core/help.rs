use crate::highlight::Painter;

pub struct HelpEntry {
    pub verb: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// The command table. Registration order is the display order.
pub const COMMANDS: &[HelpEntry] = &[
    HelpEntry {
        verb: "cat",
        usage: "cat <file>",
        description: "Output file contents.",
    },
    HelpEntry {
        verb: "cd",
        usage: "cd [directory]",
        description: "Change the working directory.",
    },
    HelpEntry {
        verb: "exec",
        usage: "exec <command>",
        description: "Execute command on terminal.",
    },
    HelpEntry {
        verb: "gcc",
        usage: "gcc [directory]",
        description: "Compile the C++ file from the given project directory.",
    },
    HelpEntry {
        verb: "help",
        usage: "help [option]",
        description: "Print help message.",
    },
    HelpEntry {
        verb: "ls",
        usage: "ls [file]",
        description: "List directory contents.",
    },
    HelpEntry {
        verb: "code",
        usage: "code <directory>",
        description: "Create a programming project according to the current mode.",
    },
    HelpEntry {
        verb: "mkdir",
        usage: "mkdir <directory>",
        description: "Make new directory.",
    },
    HelpEntry {
        verb: "mode",
        usage: "mode <mode>",
        description: "Select compiling mode of the script. Default is 'codeforces'. \
                      Allowed values are 'codeforces' and 'usaco'.",
    },
    HelpEntry {
        verb: "open",
        usage: "open <file>",
        description: "Open files with the default viewer.",
    },
    HelpEntry {
        verb: "rm",
        usage: "rm <file>",
        description: "Remove files or directories.",
    },
    HelpEntry {
        verb: "run",
        usage: "run [directory]",
        description: "Execute the compiled file from the given project directory.",
    },
];

pub fn find(verb: &str) -> Option<&'static HelpEntry> {
    COMMANDS.iter().find(|entry| entry.verb == verb)
}

/// Render the help text: the full table, a single entry, or either of
/// those prefixed by an error marker. Every handler's invalid-argument
/// path goes through here so the formatting stays uniform.
pub fn render(painter: &Painter, option: Option<&str>, err: Option<&str>) -> String {
    match (option, err) {
        (None, Some(msg)) => {
            let mut out = String::new();
            out.push_str(&painter.warn(&format!("× {}", msg)));
            out.push('\n');
            out.push_str(&painter.warn("╰─>"));
            out.push_str(" Usage: <option> [argument]\n\n    Options:\n");
            push_table(&mut out, "      ", "        ");
            out
        }
        (None, None) => {
            let mut out = format!("CForces {}\n\n", env!("CARGO_PKG_VERSION"));
            out.push_str("Usage: <option> [argument]\n\nOptions:\n");
            push_table(&mut out, "  ", "    ");
            out
        }
        (Some(option), err) => match find(option) {
            None => {
                let mut out = String::new();
                out.push_str(&painter.warn(&format!("× Unknown option: {}", option)));
                out.push('\n');
                out.push_str(&painter.warn("╰─>"));
                out.push_str(" Options:\n");
                push_table(&mut out, "      ", "        ");
                out
            }
            Some(entry) => match err {
                Some(msg) => format!(
                    "{}\n{} Usage: {}\n      {}\n",
                    painter.warn(&format!("× {}", msg)),
                    painter.warn("╰─>"),
                    entry.usage,
                    entry.description
                ),
                None => format!("Usage: {}\n  {}\n", entry.usage, entry.description),
            },
        },
    }
}

fn push_table(out: &mut String, usage_indent: &str, description_indent: &str) {
    for entry in COMMANDS {
        out.push_str(usage_indent);
        out.push_str(entry.usage);
        out.push('\n');
        out.push_str(description_indent);
        out.push_str(entry.description);
        out.push('\n');
    }
}

/// Print a usage message; see `render`.
pub fn show(painter: &Painter, option: Option<&str>, err: Option<&str>) {
    print!("{}", render(painter, option, err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let verbs: Vec<&str> = COMMANDS.iter().map(|e| e.verb).collect();
        assert_eq!(
            verbs,
            [
                "cat", "cd", "exec", "gcc", "help", "ls", "code", "mkdir", "mode", "open", "rm",
                "run"
            ]
        );
    }

    #[test]
    fn test_general_help_lists_every_usage() {
        let out = render(&Painter::plain(), None, None);
        assert!(out.contains(&format!("CForces {}", env!("CARGO_PKG_VERSION"))));
        for entry in COMMANDS {
            assert!(out.contains(entry.usage));
            assert!(out.contains(entry.description));
        }
    }

    #[test]
    fn test_single_entry_help_is_exclusive() {
        let out = render(&Painter::plain(), Some("cat"), None);
        assert!(out.contains("Usage: cat <file>"));
        assert!(out.contains("Output file contents."));
        for entry in COMMANDS.iter().filter(|e| e.verb != "cat") {
            assert!(!out.contains(entry.usage));
        }
    }

    #[test]
    fn test_error_variant_keeps_single_entry() {
        let out = render(&Painter::plain(), Some("cd"), Some("Directory 'x' doesn't exist"));
        assert!(out.contains("× Directory 'x' doesn't exist"));
        assert!(out.contains("Usage: cd [directory]"));
        assert!(!out.contains("cat <file>"));
    }

    #[test]
    fn test_unknown_option_shows_full_table() {
        let out = render(&Painter::plain(), Some("bogus"), None);
        assert!(out.contains("× Unknown option: bogus"));
        for entry in COMMANDS {
            assert!(out.contains(entry.usage));
        }
    }

    #[test]
    fn test_error_without_option_shows_full_table() {
        let out = render(&Painter::plain(), None, Some("Unknown command: foo"));
        assert!(out.contains("× Unknown command: foo"));
        for entry in COMMANDS {
            assert!(out.contains(entry.usage));
        }
    }
}

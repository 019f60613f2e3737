//! Minimal CLI: load → render → write. Owns every I/O side effect and
//! the process exit codes; the core modules stay pure.
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// translate a resolved type-graph document into TypeScript-style structural declarations
#[derive(Parser, Debug)]
#[command(disable_help_flag = true)]
pub struct CommandLineInterface {
    /// resolved module document (JSON)
    source: PathBuf,

    /// output .ts file (stdout if omitted)
    dest: Option<PathBuf>,

    /// print one warning line per declaration dropped as untranslatable
    #[arg(long, default_value_t = false)]
    report_skipped: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        // help and the no-args case short-circuit before clap, matched
        // case-insensitively on the first argument only
        let args: Vec<String> = std::env::args().collect();
        if args.len() == 1 || wants_help(&args[1]) {
            display_help(&args[0]);
            exit(0);
        }
        Self::parse()
    }

    pub fn run(&self) {
        let source = self.read_source();
        if let Err(error) = self.convert(&source) {
            eprintln!("{} {error:#}", "fatal:".red().bold());
            exit(1);
        }
    }

    /// Read the source document, mapping read failures onto the fixed
    /// exit codes: 1 missing, 2 permission denied, 125 anything else.
    fn read_source(&self) -> String {
        match std::fs::read_to_string(&self.source) {
            Ok(src) => src,
            Err(error) => {
                let path = self.source.display();
                match error.kind() {
                    std::io::ErrorKind::NotFound => {
                        eprintln!("{path} does not exist");
                        exit(1);
                    }
                    std::io::ErrorKind::PermissionDenied => {
                        eprintln!("you have no permission to read {path}");
                        exit(2);
                    }
                    _ => {
                        eprintln!("{error}");
                        exit(125);
                    }
                }
            }
        }
    }

    /// Everything past the source read: provider failures and
    /// destination failures are fatal, skipped declarations are not.
    fn convert(&self, source: &str) -> Result<()> {
        let decls = crate::provider::load_decls(source)?;

        let rendered = if self.report_skipped {
            crate::emit::render_declarations_with(&decls, |decl, err| {
                eprintln!(
                    "{} skipped `{}`: {err}",
                    "warning:".yellow().bold(),
                    decl.name
                );
            })
        } else {
            crate::emit::render_declarations(&decls)
        };

        match self.dest.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                }
                std::fs::write(out, &rendered)
                    .with_context(|| format!("failed to write {}", out.display()))?;
            }
            None => print!("{rendered}"),
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn wants_help(arg: &str) -> bool {
    matches!(
        arg.to_ascii_lowercase().as_str(),
        "-h" | "-help" | "--help"
    )
}

fn display_help(script_name: &str) {
    println!("{script_name} ./module.json [./destination.ts]");
}

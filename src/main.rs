// cppgen: LeetCode test cases and Wolfram formulas to C++

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use cppgen::codegen::{DeclarationOptions, IntVectorFormat, MathOptions, PowerStyle};
use cppgen::parser::{lexer, parse_tokens};
use cppgen::ui::App;
use cppgen::{convert, Target};

#[derive(Debug, Parser)]
#[command(
    name = "cppgen",
    version,
    about = "Convert LeetCode test cases and Wolfram-style formulas to C++",
    long_about = "cppgen reads a LeetCode test case or a Wolfram-style formula and prints\n\
        C++ ready to paste into a test harness.\n\n\
        EXAMPLES:\n\
        \n  echo 'nums = [2,7,11,15], target = 9' | cppgen leetcode\
        \n  cppgen leetcode --format binary_tree case.txt\
        \n  echo '(a+b)^2' | cppgen wolfram --power pow-function\
        \n  cppgen tui"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lower a LeetCode test case to C++ declarations
    Leetcode(LeetcodeArgs),

    /// Lower a Wolfram-style formula to a C++ expression
    Wolfram(WolframArgs),

    /// Print the parsed S-expression
    Parse(ParseArgs),

    /// Start the interactive playground
    Tui(TuiArgs),
}

#[derive(Debug, Args)]
struct LeetcodeArgs {
    /// Input file (reads from stdin if omitted or '-')
    input: Option<PathBuf>,

    /// How one-dimensional int arrays are declared
    #[arg(long, default_value_t = IntVectorFormat::Normal, env = "CPPGEN_FORMAT")]
    format: IntVectorFormat,

    /// Append a call of the solution method with every declared variable
    #[arg(long, env = "CPPGEN_APPEND_CALL")]
    append_call: bool,

    /// Name of the solution method used by --append-call
    #[arg(long, default_value = "solve", env = "CPPGEN_METHOD")]
    method: String,
}

#[derive(Debug, Args)]
struct WolframArgs {
    /// Input file (reads from stdin if omitted or '-')
    input: Option<PathBuf>,

    /// Rendering of a ^ b
    #[arg(long, default_value_t = PowerStyle::PowMethod, env = "CPPGEN_POWER")]
    power: PowerStyle,

    /// Wrap integer literals on the left of an operator in mint(...)
    #[arg(long, env = "CPPGEN_WRAP_LITERAL")]
    wrap_literal: bool,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Input file (reads from stdin if omitted or '-')
    input: Option<PathBuf>,

    /// Print the token list instead of the tree
    #[arg(long)]
    tokens: bool,
}

#[derive(Debug, Args)]
struct TuiArgs {
    /// Start with the Wolfram target selected
    #[arg(long)]
    wolfram: bool,
}

impl LeetcodeArgs {
    fn target(&self) -> Target {
        Target::LeetCode(DeclarationOptions {
            append_call: self.append_call,
            int_vector_format: self.format,
            method_name: self.method.clone(),
        })
    }
}

impl WolframArgs {
    fn target(&self) -> Target {
        Target::Wolfram(MathOptions {
            power_style: self.power,
            wrap_literal: self.wrap_literal,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Leetcode(args) => {
            init_logger(cli.verbose);
            let text = read_source_from_input(args.input.as_deref())?;
            let out = convert(&text, &args.target()).map_err(|e| e.to_string())?;
            print_output(&out);
        }
        Command::Wolfram(args) => {
            init_logger(cli.verbose);
            let text = read_source_from_input(args.input.as_deref())?;
            let out = convert(&text, &args.target()).map_err(|e| e.to_string())?;
            print_output(&out);
        }
        Command::Parse(args) => {
            init_logger(cli.verbose);
            let text = read_source_from_input(args.input.as_deref())?;
            let tokens = lexer::tokenize(&text);
            if args.tokens {
                for token in &tokens {
                    println!("{}\t{}", token.location, token.text);
                }
            } else {
                let expr = parse_tokens(&tokens).map_err(|e| e.to_string())?;
                println!("{expr}");
            }
        }
        Command::Tui(args) => {
            // The playground owns the terminal; log only when asked to
            if std::env::var_os("RUST_LOG").is_some() {
                init_logger(cli.verbose);
            }
            let target = if args.wolfram {
                Target::Wolfram(MathOptions::default())
            } else {
                Target::default()
            };
            run_tui(App::with_target(target, "")).map_err(|e| format!("terminal error: {e}"))?;
        }
    }
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn read_source_from_input(input: Option<&Path>) -> Result<String, String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read from stdin: {e}"))?;
            Ok(buf)
        }
    }
}

fn print_output(out: &str) {
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["cppgen", "-vvv", "parse"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn cli_parses_leetcode_options() {
        let cli = Cli::try_parse_from([
            "cppgen",
            "leetcode",
            "--format",
            "linked-list",
            "--append-call",
            "--method",
            "reverseList",
            "case.txt",
        ])
        .unwrap();
        match cli.command {
            Command::Leetcode(args) => {
                assert_eq!(args.input, Some(PathBuf::from("case.txt")));
                assert_eq!(
                    args.target(),
                    Target::LeetCode(DeclarationOptions {
                        append_call: true,
                        int_vector_format: IntVectorFormat::LinkedList,
                        method_name: "reverseList".to_string(),
                    })
                );
            }
            other => panic!("expected leetcode command, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_power_codes() {
        let cli = Cli::try_parse_from(["cppgen", "wolfram", "--power", "2"]).unwrap();
        match cli.command {
            Command::Wolfram(args) => assert_eq!(args.power, PowerStyle::PowFunction),
            other => panic!("expected wolfram command, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cppgen", "leetcode", "--format", "heap"]).is_err());
    }
}

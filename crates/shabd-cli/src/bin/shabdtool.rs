use std::process;

use clap::{Parser, Subcommand};

use shabd_cli::commands::{config_ops, convert_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "shabdtool", about = "Marathi numeral and transliteration tool")]
struct Cli {
    /// Custom settings TOML, loaded before the command runs
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom phonetic table TOML, loaded before the command runs
    #[arg(long, global = true)]
    phonetic: Option<String>,
    /// Log engine spans and events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert typed number input (commas, decimals, Devanagari digits)
    Number {
        /// Number as typed, e.g. 12,34,567.5
        input: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Spell out a signed integer in Marathi words
    Words {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// Rewrite ASCII digits as Devanagari digits
    Digits { text: String },
    /// Transliterate Latin text into Devanagari
    Translit {
        /// Words or phrases to transliterate
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Also list prefix completions
        #[arg(long)]
        suggest: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List prefix completions for partial input
    Suggest { prefix: String },
    /// Print the embedded default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
    /// Print the embedded default phonetic table TOML
    PhoneticExport,
    /// Validate a phonetic table TOML file
    PhoneticValidate { file: String },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shabd_core=debug")),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }
    if let Some(ref file) = cli.settings {
        die!(config_ops::load_settings(file), "Error: {}");
    }
    if let Some(ref file) = cli.phonetic {
        die!(config_ops::load_phonetic(file), "Error: {}");
    }

    match cli.command {
        Command::Number { input, json } => {
            println!("{}", die!(convert_ops::number_cmd(&input, json), "Error: {}"));
        }
        Command::Words { n } => {
            println!("{}", die!(convert_ops::words_cmd(n), "Error: {}"));
        }
        Command::Digits { text } => println!("{}", convert_ops::digits_cmd(&text)),
        Command::Translit {
            inputs,
            suggest,
            json,
        } => {
            println!(
                "{}",
                die!(
                    convert_ops::translit_cmd(&inputs, suggest, json),
                    "Error: {}"
                )
            );
        }
        Command::Suggest { prefix } => {
            let out = convert_ops::suggest_cmd(&prefix);
            if !out.is_empty() {
                println!("{out}");
            }
        }
        Command::SettingsExport => print!("{}", config_ops::settings_export()),
        Command::SettingsValidate { file } => {
            println!("{}", die!(config_ops::settings_validate(&file), "Error: {}"));
        }
        Command::PhoneticExport => print!("{}", config_ops::phonetic_export()),
        Command::PhoneticValidate { file } => {
            println!("{}", die!(config_ops::phonetic_validate(&file), "Error: {}"));
        }
    }
}

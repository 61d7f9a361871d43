//! CLI for card number and expiry checks.
//!
//! # Usage
//!
//! ```bash
//! # Luhn verdict
//! cardentry luhn 4111111111111111
//!
//! # Display formatting
//! cardentry format "4111-1111-1111-1111"
//!
//! # ELO / Hipercard pattern and length checks
//! cardentry brand 6062826786276634
//!
//! # Scheme classification
//! cardentry classify 378282246310005
//!
//! # Expiry validation
//! cardentry expiry 06/27
//! ```

use cardentry::{
    digits_only, format_card_number, is_date_valid, is_valid_elo_length, is_valid_hiper_length,
    matches_elo, matches_hiper, parse_expiry, passes_luhn, DefaultClassifier, SchemeClassifier,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cardentry")]
#[command(author, version, about = "Card number and expiry validation/formatting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a card number against the Luhn checksum
    Luhn {
        /// Card number (separators allowed)
        number: String,
    },

    /// Format a card number for display
    Format {
        /// Card number (separators allowed)
        number: String,
    },

    /// Check the ELO / Hipercard prefix patterns and lengths
    Brand {
        /// Card number (separators allowed)
        number: String,
    },

    /// Classify a card number prefix
    Classify {
        /// Card number or prefix (separators allowed)
        number: String,
    },

    /// Validate an expiry date (MMYY, MMYYYY, separators allowed)
    Expiry {
        /// Expiry date
        date: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Luhn { number } => cmd_luhn(&number),
        Commands::Format { number } => cmd_format(&number),
        Commands::Brand { number } => cmd_brand(&number),
        Commands::Classify { number } => cmd_classify(&number),
        Commands::Expiry { date } => cmd_expiry(&date),
    }
}

fn cmd_luhn(number: &str) {
    let digits = digits_only(number);
    if passes_luhn(digits.as_str()) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    }
    println!("Luhn check: FAIL");
    std::process::exit(1);
}

fn cmd_format(number: &str) {
    println!("{}", format_card_number(number));
}

fn cmd_brand(number: &str) {
    let digits = digits_only(number);

    let elo = matches_elo(digits.as_str());
    let hiper = matches_hiper(digits.as_str());

    println!(
        "Elo:       pattern {}, length {}",
        verdict(elo),
        verdict(is_valid_elo_length(digits.len()))
    );
    println!(
        "Hipercard: pattern {}, length {}",
        verdict(hiper),
        verdict(is_valid_hiper_length(digits.len()))
    );

    if elo || hiper {
        std::process::exit(0);
    }
    std::process::exit(1);
}

fn cmd_classify(number: &str) {
    let digits = digits_only(number);
    match DefaultClassifier.classify(digits.as_str()) {
        Some(scheme) => {
            println!("Scheme: {}", scheme.name());
            println!("Number Length: {}", scheme.number_length());
        }
        None => {
            println!("Scheme: Unknown");
            std::process::exit(1);
        }
    }
}

fn cmd_expiry(date: &str) {
    match parse_expiry(date) {
        Some(parsed) => {
            println!("Month: {:02}", parsed.month());
            println!("Year: {}", parsed.year());
            if is_date_valid(date) {
                println!("Valid: yes");
                std::process::exit(0);
            }
            println!("Valid: no (outside the accepted window)");
            std::process::exit(1);
        }
        None => {
            println!("Valid: no (not a MMYY or MMYYYY date)");
            std::process::exit(1);
        }
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "match"
    } else {
        "no match"
    }
}

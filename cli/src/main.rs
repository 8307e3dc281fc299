// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

mod random;
mod table;

use std::io::{self, Write};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use log::info;
use sufarray::{Algorithm, BuildConfig, SuffixArray, Symbol};

use crate::{random::random_text, table::Table};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sorted suffixes of one or more documents
    Build {
        /// Algorithm used to sort the suffixes
        #[arg(short, long, default_value_t = Algorithm::Default)]
        algorithm: Algorithm,
        /// Read the document as comma-separated integer symbols instead of text
        #[arg(long)]
        symbols: bool,
        #[arg(required = true)]
        documents: Vec<String>,
    },
    /// Print the LCP array of a text
    Lcp {
        /// Algorithm used to sort the suffixes
        #[arg(short, long, default_value = "default")]
        algorithm: String,
        text: String,
    },
    /// Print the longest common substring of two texts
    Lcs {
        first: String,
        second: String,
        /// Print every distinct longest common substring
        #[arg(long)]
        all: bool,
        /// Print lengths (or ranks with --all) instead of substrings
        #[arg(long)]
        indices: bool,
    },
    /// Print random texts
    Random {
        /// Length of each text, or the minimum length if --max-length is given
        #[arg(short, long, default_value_t = 10)]
        length: usize,
        #[arg(long)]
        max_length: Option<usize>,
        /// Number of distinct letters
        #[arg(long, default_value_t = 26, value_parser = clap::value_parser!(u32).range(1..))]
        letters: u32,
        /// Number of texts to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

fn parse_symbols(document: &str) -> anyhow::Result<Vec<Symbol>> {
    document
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Symbol>()
                .with_context(|| format!("Invalid symbol '{s}'"))
        })
        .collect()
}

fn build(
    documents: &[String],
    algorithm: Algorithm,
    symbols: bool,
) -> anyhow::Result<SuffixArray> {
    let suffix_array = if symbols {
        let [document] = documents else {
            bail!("Exactly one document is allowed with --symbols");
        };
        let symbols = parse_symbols(document)?;
        SuffixArray::with_config(
            &symbols,
            BuildConfig::new().algorithm(algorithm).transform(false),
        )
    } else if let [document] = documents {
        SuffixArray::with_algorithm(document, algorithm)
    } else {
        let documents = documents.iter().map(String::as_str).collect::<Vec<_>>();
        SuffixArray::with_algorithm(documents.as_slice(), algorithm)
    };

    suffix_array.context("Failed to build suffix array")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut out = io::stdout().lock();

    match args.command {
        Command::Build {
            algorithm,
            symbols,
            documents,
        } => {
            let suffix_array = build(&documents, algorithm, symbols)?;
            info!(
                "sorted {} suffixes with {}",
                suffix_array.len(),
                suffix_array.algorithm(),
            );

            let mut table = Table::new();
            for (rank, &position) in suffix_array.iter().enumerate() {
                table.push([
                    ("rank", rank.to_string()),
                    ("position", position.to_string()),
                    ("lcp", suffix_array.lcp()[rank].to_string()),
                    ("suffix", suffix_array.suffix(rank)),
                ]);
            }
            write!(out, "{table}").context("Failed to write suffix table")?;
        }
        Command::Lcp { algorithm, text } => {
            let lcp = substring::lcp_array(text.as_str(), &algorithm)
                .context("Failed to compute LCP array")?;
            let line = lcp
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}").context("Failed to write LCP array")?;
        }
        Command::Lcs {
            first,
            second,
            all,
            indices,
        } => {
            if all {
                let found = substring::longest_common_substrings(&first, &second)
                    .context("Failed to find longest common substrings")?;
                for m in found {
                    let written = if indices {
                        writeln!(out, "{}", m.rank())
                    } else {
                        writeln!(out, "{}", m.text(&first))
                    };
                    written.context("Failed to write longest common substring")?;
                }
            } else {
                let found = substring::longest_common_substring_match(&first, &second)
                    .context("Failed to find longest common substring")?;
                let written = if indices {
                    writeln!(out, "{}", found.map_or(0, |m| m.len()))
                } else {
                    writeln!(out, "{}", found.map(|m| m.text(&first)).unwrap_or_default())
                };
                written.context("Failed to write longest common substring")?;
            }
        }
        Command::Random {
            length,
            max_length,
            letters,
            count,
        } => {
            let max_length = max_length.unwrap_or(length);
            if max_length < length {
                bail!("--max-length ({max_length}) must not be less than --length ({length})");
            }

            let mut rng = rand::rng();
            for _ in 0..count {
                let text = random_text(&mut rng, length..=max_length, letters);
                writeln!(out, "{text}").context("Failed to write random text")?;
            }
        }
    }

    Ok(())
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command-line surface generated from the registry.
//!
//! Every registered processor becomes a subcommand named after it, with its
//! aliases as visible aliases and each declared [`Flag`] as an option:
//!
//! | Flag type | Option |
//! |-----------|--------|
//! | `Bool`    | `--name` / `-s` switch |
//! | `Uint`    | `--name <N>`, parsed as `u64` |
//! | `String`  | `--name <VALUE>` |
//!
//! Unset options fall back to the flag's declared default.

use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fmt::Write;
use std::path::PathBuf;

use crate::config::Registry;
use crate::traits::{Flag, FlagValue, Processor};

pub const CONFIG_ARG: &str = "config";
pub const VERBOSE_ARG: &str = "verbose";
pub const INPUT_ARG: &str = "input";
pub const FILE_ARG: &str = "file";

pub const LIST_COMMAND: &str = "list";
pub const INTERACTIVE_COMMAND: &str = "interactive";

/// Where a processor subcommand reads its input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(PathBuf),
    Stdin,
}

pub fn build_cli(registry: &Registry) -> Command {
    let mut command = Command::new("sttr")
        .version(crate_version!())
        .about("Transform text: change case, encode, decode, hash, count and more")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (.yaml, .yml or .toml)"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .short('v')
                .long(VERBOSE_ARG)
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new(LIST_COMMAND)
                .visible_alias("ls")
                .about("List every processor with its aliases and streaming support"),
        )
        .subcommand(
            Command::new(INTERACTIVE_COMMAND)
                .visible_alias("i")
                .about("Pick a processor with a fuzzy filter and transform typed input"),
        );

    for processor in registry.iter() {
        command = command.subcommand(processor_command(processor));
    }
    command
}

fn processor_command(processor: &dyn Processor) -> Command {
    let mut command = Command::new(processor.name())
        .visible_aliases(processor.alias().iter().copied())
        .about(processor.description())
        .arg(
            Arg::new(INPUT_ARG)
                .value_name("TEXT")
                .help("Input text; read from stdin when neither TEXT nor --file is given"),
        )
        .arg(
            Arg::new(FILE_ARG)
                .long(FILE_ARG)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with(INPUT_ARG)
                .help("Read input from a file"),
        );

    for flag in processor.flags() {
        command = command.arg(flag_arg(&flag));
    }
    command
}

fn flag_arg(flag: &Flag) -> Arg {
    let mut arg = Arg::new(flag.name).long(flag.name).help(flag.desc);
    if let Some(short) = single_char(flag.short) {
        arg = arg.short(short);
    }
    match flag.value {
        FlagValue::Bool(_) => arg.action(ArgAction::SetTrue),
        FlagValue::Uint(_) => arg.value_name("N").value_parser(value_parser!(u64)),
        FlagValue::Str(_) => arg.value_name("VALUE"),
    }
}

fn single_char(short: &str) -> Option<char> {
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// The processor's declared flags carrying the values given on the command line.
pub fn flags_from_matches(processor: &dyn Processor, matches: &ArgMatches) -> Vec<Flag> {
    processor
        .flags()
        .into_iter()
        .map(|declared| {
            let value = match &declared.value {
                FlagValue::Bool(default) => FlagValue::Bool(matches.get_flag(declared.name) || *default),
                FlagValue::Uint(default) => FlagValue::Uint(
                    matches
                        .get_one::<u64>(declared.name)
                        .copied()
                        .unwrap_or(*default),
                ),
                FlagValue::Str(default) => FlagValue::Str(
                    matches
                        .get_one::<String>(declared.name)
                        .cloned()
                        .unwrap_or_else(|| default.clone()),
                ),
            };
            declared.with_value(value)
        })
        .collect()
}

pub fn input_from_matches(matches: &ArgMatches) -> Input {
    if let Some(text) = matches.get_one::<String>(INPUT_ARG) {
        Input::Text(text.clone())
    } else if let Some(path) = matches.get_one::<PathBuf>(FILE_ARG) {
        Input::File(path.clone())
    } else {
        Input::Stdin
    }
}

/// How a processor is run, as shown by `list`.
pub fn streaming_support(processor: &dyn Processor) -> &'static str {
    match processor.as_streaming() {
        Some(streaming) if streaming.can_stream() && streaming.prefer_stream() => "stream",
        Some(streaming) if streaming.can_stream() => "aggregate",
        _ => "buffered",
    }
}

/// One line per processor: name, streaming support, description and aliases.
pub fn render_list(registry: &Registry) -> String {
    let width = registry
        .iter()
        .map(|processor| processor.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for processor in registry.iter() {
        let _ = write!(
            out,
            "{:<width$}  {:<9}  {}",
            processor.name(),
            streaming_support(processor),
            processor.description(),
            width = width
        );
        if !processor.alias().is_empty() {
            let _ = write!(out, " (aliases: {})", processor.alias().join(", "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_cli(Registry::builtin())
            .try_get_matches_from(args)
            .unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli(Registry::builtin()).debug_assert();
    }

    #[test]
    fn test_every_processor_is_a_subcommand() {
        let command = build_cli(Registry::builtin());
        for processor in Registry::builtin().iter() {
            assert!(command.find_subcommand(processor.name()).is_some(), "{}", processor.name());
        }
    }

    #[test]
    fn test_alias_resolves_to_canonical_subcommand() {
        let matches = parse(&["sttr", "b64-enc", "-r", "hello"]);
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "base64-encode");

        let processor = Registry::builtin().lookup(name).unwrap();
        let flags = flags_from_matches(processor, sub);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].value, FlagValue::Bool(true));
        assert_eq!(input_from_matches(sub), Input::Text("hello".into()));
    }

    #[test]
    fn test_typed_flag_values() {
        let matches = parse(&["sttr", "zero-pad", "-n", "3", "--prefix", "0x", "7"]);
        let (name, sub) = matches.subcommand().unwrap();
        let flags = flags_from_matches(Registry::builtin().lookup(name).unwrap(), sub);

        assert_eq!(flags[0].value, FlagValue::Uint(3));
        assert_eq!(flags[1].value, FlagValue::Str("0x".into()));
    }

    #[test]
    fn test_unset_flags_use_declared_defaults() {
        let matches = parse(&["sttr", "zero-pad", "7"]);
        let (name, sub) = matches.subcommand().unwrap();
        let processor = Registry::builtin().lookup(name).unwrap();
        assert_eq!(flags_from_matches(processor, sub), processor.flags());
    }

    #[test]
    fn test_uint_flag_rejects_text() {
        let result = build_cli(Registry::builtin())
            .try_get_matches_from(["sttr", "zero-pad", "-n", "many", "7"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_sources() {
        let matches = parse(&["sttr", "upper", "--file", "notes.txt"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(input_from_matches(sub), Input::File(PathBuf::from("notes.txt")));

        let matches = parse(&["sttr", "upper"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(input_from_matches(sub), Input::Stdin);

        let conflict = build_cli(Registry::builtin())
            .try_get_matches_from(["sttr", "upper", "--file", "notes.txt", "text"]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let matches = parse(&["sttr", "upper", "hi", "-v", "--config", "configs/sttr.yaml"]);
        assert!(matches.get_flag(VERBOSE_ARG));
        assert_eq!(
            matches.get_one::<PathBuf>(CONFIG_ARG),
            Some(&PathBuf::from("configs/sttr.yaml"))
        );
    }

    #[test]
    fn test_render_list() {
        let list = render_list(Registry::builtin());
        assert_eq!(list.lines().count(), Registry::builtin().len());

        let upper = list.lines().find(|line| line.starts_with("upper ")).unwrap();
        assert!(upper.contains("stream"));
        let base58 = list.lines().find(|line| line.starts_with("base58-encode")).unwrap();
        assert!(base58.contains("buffered"));
        assert!(base58.contains("aliases: b58-enc, b58-encode"));
        let words = list.lines().find(|line| line.starts_with("count-words")).unwrap();
        assert!(words.contains("aggregate"));
    }
}

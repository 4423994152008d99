//! Command-line dispatcher for the on-disk B-tree index.
//!
//! Each subcommand opens the index file fresh, performs one operation,
//! and exits — there is no interactive session or long-lived server.

use std::path::PathBuf;
use std::process::ExitCode;

use btree_core::index;
use btree_core::insert::InsertOutcome;
use btree_core::loader::LoadEvent;
use btree_core::IndexError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "btreeidx", about = "On-disk B-tree index file tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new, empty index file.
    Create { filename: PathBuf },
    /// Insert a single key/value pair.
    Insert {
        filename: PathBuf,
        key: u64,
        value: u64,
    },
    /// Look up a key.
    Search { filename: PathBuf, key: u64 },
    /// Bulk-load key/value pairs from a CSV file.
    Load {
        filename: PathBuf,
        csv_filename: PathBuf,
    },
    /// Print every entry in ascending key order.
    Print { filename: PathBuf },
    /// Write every entry to a new CSV file in ascending key order.
    Extract {
        filename: PathBuf,
        csv_filename: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Create { filename } => run_create(&filename),
        Command::Insert {
            filename,
            key,
            value,
        } => run_insert(&filename, key, value),
        Command::Search { filename, key } => run_search(&filename, key),
        Command::Load {
            filename,
            csv_filename,
        } => run_load(&filename, &csv_filename),
        Command::Print { filename } => run_print(&filename),
        Command::Extract {
            filename,
            csv_filename,
        } => run_extract(&filename, &csv_filename),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            println!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run_create(filename: &PathBuf) -> Result<(), String> {
    match index::create(filename) {
        Ok(()) => {
            println!("Created index file: {}", filename.display());
            Ok(())
        }
        Err(IndexError::FileAlreadyExists) => Err("ERROR : Index file already exists.".into()),
        Err(e) => Err(format!("ERROR : {e}")),
    }
}

fn run_insert(filename: &PathBuf, key: u64, value: u64) -> Result<(), String> {
    match index::insert(filename, key, value) {
        Ok(InsertOutcome::InsertedAsRoot) => {
            println!("Inserted key {key} as root.");
            Ok(())
        }
        Ok(InsertOutcome::Inserted) => {
            println!("Inserted key {key}.");
            Ok(())
        }
        Ok(InsertOutcome::RootSplit { new_root_key }) => {
            println!("Root was split. New root created with key {new_root_key}.");
            Ok(())
        }
        Err(IndexError::FileNotFound) => {
            Err(format!("ERROR: Index file '{}' does not exist.", filename.display()))
        }
        Err(IndexError::BadMagic) => Err("ERROR: Not a valid index file.".into()),
        Err(IndexError::DuplicateKey) => {
            Err(format!("Key {key} already exists. Insertion aborted."))
        }
        Err(e) => Err(format!("ERROR: {e}")),
    }
}

fn run_search(filename: &PathBuf, key: u64) -> Result<(), String> {
    match index::search(filename, key) {
        Ok(Some(value)) => {
            println!("Key {key} found with value {value}.");
            Ok(())
        }
        Ok(None) => {
            println!("Key {key} not found.");
            Ok(())
        }
        Err(IndexError::EmptyTree) => Err("ERROR : Tree is empty.".into()),
        Err(IndexError::BadMagic) => Err("ERROR : Not a valid index file.".into()),
        Err(IndexError::FileNotFound) => {
            Err(format!("ERROR : Index file '{}' does not exist.", filename.display()))
        }
        Err(e) => Err(format!("ERROR : {e}")),
    }
}

fn run_load(filename: &PathBuf, csv_filename: &PathBuf) -> Result<(), String> {
    if !filename.exists() {
        return Err(format!(
            "Error: Index file '{}' does not exist.",
            filename.display()
        ));
    }
    if !csv_filename.exists() {
        return Err(format!(
            "Error: CSV file '{}' does not exist.",
            csv_filename.display()
        ));
    }

    match index::load(filename, csv_filename) {
        Ok(events) => {
            for event in events {
                match event {
                    LoadEvent::Inserted {
                        key,
                        outcome_is_root: true,
                    } => println!("Inserted key {key} as root."),
                    LoadEvent::Inserted {
                        key,
                        outcome_is_root: false,
                    } => println!("Inserted key {key}."),
                    LoadEvent::RootSplit { new_root_key } => {
                        println!("Root was split. New root created with key {new_root_key}.")
                    }
                    LoadEvent::Duplicate { key } => {
                        println!("Key {key} already exists. Insertion aborted.")
                    }
                    LoadEvent::Malformed { line, text } => {
                        println!("Error: Invalid format in line {line}: '{text}'")
                    }
                }
            }
            Ok(())
        }
        Err(IndexError::BadMagic) => Err("ERROR : Not a valid index file.".into()),
        Err(e) => Err(format!("ERROR : {e}")),
    }
}

fn run_print(filename: &PathBuf) -> Result<(), String> {
    if !filename.exists() {
        return Err(format!(
            "Error: Index file '{}' does not exist.",
            filename.display()
        ));
    }
    let mut buf = Vec::new();
    match index::print(filename, &mut buf) {
        Ok(()) => {
            if buf.is_empty() {
                println!("Index is empty.");
            } else {
                use std::io::Write;
                let stdout = std::io::stdout();
                let _ = stdout.lock().write_all(&buf);
            }
            Ok(())
        }
        Err(IndexError::BadMagic) => Err("ERROR : Not a valid index file.".into()),
        Err(e) => Err(format!("ERROR : {e}")),
    }
}

fn run_extract(filename: &PathBuf, csv_filename: &PathBuf) -> Result<(), String> {
    if !filename.exists() {
        return Err(format!(
            "Error: Index file '{}' does not exist.",
            filename.display()
        ));
    }
    if csv_filename.exists() {
        return Err(format!(
            "Error: Output file '{}' already exists.",
            csv_filename.display()
        ));
    }

    let mut file = std::fs::File::create(csv_filename).map_err(|e| e.to_string())?;
    match index::print(filename, &mut file) {
        Ok(()) => Ok(()),
        Err(IndexError::BadMagic) => Err("ERROR : Not a valid index file.".into()),
        Err(e) => Err(format!("ERROR : {e}")),
    }
}

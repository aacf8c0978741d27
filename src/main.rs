use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use log::LevelFilter;

use searchsort::{
    lookup, read_file, run_search, run_sort, PresortPolicy, Selection, SEARCHES, SORTS,
};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    loop {
        println!();
        println!("What do you want to do?");
        println!(" 1. Searching");
        println!(" 2. Sorting");
        println!(" 0. Exit");
        match prompt("> ")?.as_str() {
            "1" => run_category(&SEARCHES, true)?,
            "2" => run_category(&SORTS, false)?,
            "0" => break,
            _ => println!("Invalid selection."),
        }
    }
    Ok(())
}

fn run_category(selections: &[Selection], searching: bool) -> Result<()> {
    loop {
        println!();
        println!("Choose an algorithm:");
        for (i, &selection) in selections.iter().enumerate() {
            let Some(entry) = lookup(selection) else { continue };
            println!(" {}. {}", i + 1, entry.descriptor().name);
        }
        println!(" 0. Back");
        let choice = prompt("> ")?;
        let selection = match menu_selection(&choice, selections) {
            Some(Selection::Cancel) => return Ok(()),
            Some(selection) => selection,
            None => {
                println!("Invalid selection.");
                continue;
            }
        };

        let Some(mut data) = acquire_sequence()? else {
            continue;
        };

        let report = if searching {
            let Some(target) = read_int("Enter the value to search: ")? else {
                println!("Invalid input, operation abandoned.");
                continue;
            };
            run_search(selection, &mut data, target, PresortPolicy::default())
        } else {
            run_sort(selection, &mut data)
        };

        match report {
            Some(report) => println!("\n{report}"),
            None => println!("Operation cancelled."),
        }
    }
}

fn menu_selection(choice: &str, selections: &[Selection]) -> Option<Selection> {
    if choice == "0" {
        return Some(Selection::Cancel);
    }
    choice
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= selections.len())
        .map(|n| selections[n - 1])
}

fn acquire_sequence() -> Result<Option<Vec<i64>>> {
    println!();
    println!("Choose how to input your array:");
    println!(" 1. Manual entry");
    println!(" 2. Read from file");
    println!(" 0. Back");
    match prompt("> ")?.as_str() {
        "1" => manual_entry(),
        "2" => {
            let path = PathBuf::from(prompt("Path to .txt, .doc or .docx file: ")?);
            match read_file(&path) {
                Ok(numbers) => Ok(Some(numbers)),
                Err(err) => {
                    println!("Failed to read file: {err}");
                    Ok(None)
                }
            }
        }
        "0" => Ok(None),
        _ => {
            println!("Invalid selection.");
            Ok(None)
        }
    }
}

fn manual_entry() -> Result<Option<Vec<i64>>> {
    let count = match read_int("How many elements? ")?.and_then(|n| usize::try_from(n).ok()) {
        Some(count) => count,
        None => {
            println!("Invalid input, operation abandoned.");
            return Ok(None);
        }
    };
    let mut numbers = Vec::new();
    for i in 1..=count {
        let Some(value) = read_int(&format!("Enter element [{i}]: "))? else {
            println!("Invalid input, operation abandoned.");
            return Ok(None);
        };
        numbers.push(value);
    }
    Ok(Some(numbers))
}

fn read_int(message: &str) -> Result<Option<i64>> {
    Ok(prompt(message)?.parse().ok())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("end of input");
    }
    Ok(line.trim().to_string())
}

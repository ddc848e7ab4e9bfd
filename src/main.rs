use anyhow::{anyhow, Context, Result};
use crossterm::style::Stylize;
use std::path::PathBuf;

use employee_directory::config::config::Config;
use employee_directory::data::columns::find_column;
use employee_directory::data::data_exporter::DataExporter;
use employee_directory::data::data_provider::SortOrder;
use employee_directory::data::employee::EmployeeStore;
use employee_directory::data::employee_view::SortState;
use employee_directory::data::filter_pipeline::{DepartmentFilter, FilterState, StatusFilter};
use employee_directory::directory_state::DirectoryState;
use employee_directory::ui::directory_tui::run_directory_tui;
use employee_directory::utils::logging::{init_tracing, LogRingBuffer};

mod table_display;

use table_display::display_results;

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Tui,
    Print,
    Export(Option<PathBuf>),
    Help,
    InitConfig,
    GenerateConfig,
}

#[derive(Debug, Clone)]
struct CliOptions {
    mode: Mode,
    filter: FilterState,
    sort: Option<SortState>,
    data_file: Option<PathBuf>,
}

fn print_help() {
    println!("{}", "Employee Directory".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  employee-directory [OPTIONS]");
    println!();
    println!("{}", "Modes:".yellow());
    println!("  {}            - Interactive directory (default)", "(none)".green());
    println!("  {}           - Print the filtered table and exit", "--print".green());
    println!(
        "  {}    - Write employee-data.csv to DIR (or the configured directory)",
        "--export [DIR]".green()
    );
    println!("  {}     - Write a default config file", "--init-config".green());
    println!("  {} - Print a commented default config", "--generate-config".green());
    println!();
    println!("{}", "Filters:".yellow());
    println!("  {}    - Case-insensitive substring search", "--search TEXT".green());
    println!("  {} - Exact department name, or All", "--department NAME".green());
    println!("  {}  - All, Active or Inactive", "--status STATUS".green());
    println!("  {}  - Sort by column, e.g. salary:desc", "--sort FIELD[:desc]".green());
    println!(
        "  {}  - Load records from a JSON file instead of the built-in data",
        "--data FILE".green()
    );
    println!();
}

fn parse_sort(arg: &str) -> Result<SortState> {
    let (field, order) = match arg.split_once(':') {
        Some((field, "desc")) => (field, SortOrder::Descending),
        Some((field, "asc")) => (field, SortOrder::Ascending),
        Some((_, other)) => return Err(anyhow!("Unknown sort order '{}': use asc or desc", other)),
        None => (arg, SortOrder::Ascending),
    };
    let column = find_column(field).ok_or_else(|| anyhow!("Unknown column '{}'", field))?;
    Ok(SortState { column, order })
}

fn next_value(value: Option<&String>, flag: &str) -> Result<String> {
    value
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions {
        mode: Mode::Tui,
        filter: FilterState::default(),
        sort: None,
        data_file: None,
    };

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => options.mode = Mode::Help,
            "--init-config" => options.mode = Mode::InitConfig,
            "--generate-config" => options.mode = Mode::GenerateConfig,
            "--print" => options.mode = Mode::Print,
            "--search" => {
                options.filter.search_text = next_value(iter.next(), "--search")?;
            }
            "--department" => {
                let name = next_value(iter.next(), "--department")?;
                options.filter.department = DepartmentFilter::parse(&name);
            }
            "--status" => {
                let status = next_value(iter.next(), "--status")?;
                options.filter.status = status.parse::<StatusFilter>()?;
            }
            "--sort" => {
                let sort = next_value(iter.next(), "--sort")?;
                options.sort = Some(parse_sort(&sort)?);
            }
            "--data" => {
                options.data_file = Some(PathBuf::from(next_value(iter.next(), "--data")?));
            }
            "--export" => {
                let dir = match iter.peek() {
                    Some(next) if !next.starts_with("--") => iter.next().map(PathBuf::from),
                    _ => None,
                };
                options.mode = Mode::Export(dir);
            }
            other => return Err(anyhow!("Unknown argument '{}' (see --help)", other)),
        }
    }

    Ok(options)
}

fn build_state(options: &CliOptions) -> Result<DirectoryState> {
    let store = match &options.data_file {
        Some(path) => EmployeeStore::from_json_file(path)?,
        None => EmployeeStore::embedded()?,
    };

    let mut state = DirectoryState::with_filter(store, options.filter.clone());
    if let Some(sort) = options.sort {
        // toggle_sort starts ascending; a second toggle flips to descending
        state.toggle_sort(sort.column)?;
        if sort.order == SortOrder::Descending {
            state.toggle_sort(sort.column)?;
        }
    }
    Ok(state)
}

fn run(options: CliOptions, log_buffer: LogRingBuffer) -> Result<()> {
    match options.mode {
        Mode::Help => {
            print_help();
            Ok(())
        }
        Mode::GenerateConfig => {
            print!("{}", Config::create_default_with_comments());
            Ok(())
        }
        Mode::InitConfig => {
            let path = Config::default().save()?;
            println!("Configuration file created at: {}", path.display());
            Ok(())
        }
        Mode::Print => {
            let state = build_state(&options)?;
            display_results(state.view());
            println!("\n{}", state.summary().green());
            Ok(())
        }
        Mode::Export(ref dir) => {
            let config = Config::load()?;
            let state = build_state(&options)?;
            let dir = dir
                .clone()
                .unwrap_or_else(|| config.export.resolved_directory());
            let summary = DataExporter::export_csv(state.view(), &dir, &config.export.file_name)
                .context("Export failed")?;
            println!("{}", summary.status_message().green());
            Ok(())
        }
        Mode::Tui => {
            let config = Config::load()?;
            let state = build_state(&options)?;
            run_directory_tui(state, config, Some(log_buffer))
        }
    }
}

fn main() {
    let log_buffer = init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let result = parse_args(&args).and_then(|options| run(options, log_buffer));

    if let Err(e) = result {
        tracing::error!(target: "main", "{:#}", e);
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("employee-directory")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_is_tui_with_default_filter() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.mode, Mode::Tui);
        assert!(options.filter.is_default());
    }

    #[test]
    fn test_filters_and_export_dir() {
        let options = parse_args(&args(&[
            "--search", "rust", "--department", "Engineering", "--status", "Active", "--export",
            "/tmp/out",
        ]))
        .unwrap();
        assert_eq!(options.mode, Mode::Export(Some(PathBuf::from("/tmp/out"))));
        assert_eq!(options.filter.search_text, "rust");
        assert_eq!(options.filter.department, DepartmentFilter::parse("Engineering"));
        assert_eq!(options.filter.status, StatusFilter::Active);
    }

    #[test]
    fn test_export_without_dir() {
        let options = parse_args(&args(&["--export", "--print"])).unwrap();
        assert_eq!(options.mode, Mode::Print);

        let options = parse_args(&args(&["--export"])).unwrap();
        assert_eq!(options.mode, Mode::Export(None));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--status", "active"])).is_err());
        assert!(parse_args(&args(&["--search"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--sort", "salary:sideways"])).is_err());
    }

    #[test]
    fn test_sort_argument() {
        let sort = parse_sort("salary:desc").unwrap();
        assert_eq!(sort.column, find_column("salary").unwrap());
        assert_eq!(sort.order, SortOrder::Descending);
        assert_eq!(parse_sort("age").unwrap().order, SortOrder::Ascending);
    }

    #[test]
    fn test_build_state_applies_sort() {
        let options = parse_args(&args(&["--sort", "salary:desc"])).unwrap();
        let state = build_state(&options).unwrap();
        let salaries: Vec<f64> = state.view().records().map(|r| r.salary).collect();
        assert!(salaries.windows(2).all(|w| w[0] >= w[1]));
    }
}

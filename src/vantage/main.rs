use clap::Parser;
use colored::*;
use vantage::api::{catalog_from_options, ViewEngine};
use vantage::config::{
    OPTION_DETAIL_LAYOUT, OPTION_ELEMENTS, OPTION_LAYOUTS, OPTION_PRIVATE_ELEMENTS,
};
use vantage::error::{Result, VantageError};
use vantage::model::SearchMode;
use vantage::request::RequestParameters;
use vantage::store::fs::FileStore;
use vantage::store::SettingsStore;
use vantage::view::{layout_classes, ResolvedView};

mod args;
use args::{Cli, Commands, ConfigAction};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(&cli.store);
    let mode = SearchMode {
        shared_searching: cli.shared,
        merge_detail_rows: cli.merged_details,
    };
    let mut engine = ViewEngine::new(store).with_mode(mode);

    match cli.command {
        Some(Commands::Resolve { query, json }) => {
            handle_resolve(&mut engine, &query, cli.authenticated, json)
        }
        Some(Commands::Config { action }) => handle_config(&mut engine, action),
        Some(Commands::Url {
            entry,
            field,
            condition,
            query,
        }) => handle_url(&entry, field, &condition, &query),
        None => handle_resolve(&mut engine, "", cli.authenticated, false),
    }
}

fn handle_resolve(
    engine: &mut ViewEngine<FileStore>,
    query: &str,
    authenticated: bool,
    json: bool,
) -> Result<()> {
    let options = engine.options()?;
    let catalog = catalog_from_options(&options);
    let view = engine.resolve(query, &catalog, authenticated)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).map_err(VantageError::Serialization)?
        );
    } else {
        print_view(&view);
    }
    Ok(())
}

fn print_view(view: &ResolvedView) {
    let selections = [
        ("layout", view.layout_id().to_string()),
        (
            "sort",
            format!("{} ({})", view.sort_field_name(), view.sort_field_id()),
        ),
        ("order", view.sort_order().as_param().to_string()),
        ("view", view.view_kind().name().to_string()),
        ("filter", view.filter_id().to_string()),
        ("limit", view.limit().to_string()),
        (
            "index",
            format!("{} ({})", view.index_field_name(), view.index_field_id()),
        ),
        ("keywords", view.keywords().to_string()),
        (
            "condition",
            view.keywords_condition().label().to_string(),
        ),
        ("titles only", view.search_titles_only().to_string()),
    ];
    for (key, value) in selections {
        println!("{:>12}  {}", key.cyan(), value);
    }

    println!("\n{}", "Layouts".bold());
    for layout in view.layouts().iter() {
        let marker = if layout.id == view.layout_id() {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!("{marker} L{} {}", layout.id, layout.name);
    }

    println!("\n{}", "Columns".bold());
    for column in view.columns().iter() {
        let header = view.header_sort(&column.name);
        let sort_marker = if header.active {
            format!(" [sorted {}]", header.order.as_param()).yellow().to_string()
        } else {
            String::new()
        };
        let classes = layout_classes(column);
        println!("  {} ({}){}{}", column.name, column.alias, pad_classes(&classes), sort_marker);
    }

    if !view.detail_rows().is_empty() {
        println!("\n{}", "Detail rows".bold());
        for row in view.detail_rows() {
            println!("  {}", row.join(", "));
        }
    }

    println!("\n{}", "Sort options".bold());
    println!("  {}", view.sort_options().join(", "));
}

fn pad_classes(classes: &str) -> String {
    if classes.is_empty() {
        String::new()
    } else {
        format!("  {}", classes.dimmed())
    }
}

fn handle_config(engine: &mut ViewEngine<FileStore>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let store = engine.store_mut();
            for key in [
                OPTION_ELEMENTS,
                OPTION_LAYOUTS,
                OPTION_PRIVATE_ELEMENTS,
                OPTION_DETAIL_LAYOUT,
            ] {
                let value = store.get_option(key)?.unwrap_or_default();
                println!("{}", key.cyan().bold());
                if value.is_empty() {
                    println!("  {}", "(not set)".dimmed());
                } else {
                    for line in value.lines() {
                        println!("  {line}");
                    }
                }
            }
        }
        ConfigAction::Init => {
            engine.options()?;
            println!("{} configuration seeded", "ok".green().bold());
        }
        ConfigAction::Set { key, value } => {
            engine.store_mut().set_option(&key, &value)?;
            println!("{} {} updated", "ok".green().bold(), key);
        }
    }
    Ok(())
}

fn handle_url(entry: &str, field: u32, condition: &str, query: &str) -> Result<()> {
    let params = RequestParameters::from_query_str(query);
    println!("{}", params.index_entry_url(entry, field, condition));
    Ok(())
}

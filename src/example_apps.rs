//! Reusable demo runners shared by the demo binaries.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::display::DisplayModel;
use crate::filter::{EntitySelection, FilterState, YearRange};
use crate::session::ExplorerSession;
use crate::store::RecordStore;

#[derive(Debug, Parser)]
#[command(
    name = "explore",
    disable_help_subcommand = true,
    about = "Filter an exported record collection from the command line",
    long_about = "Load an exported JSON record collection, apply entity/year/facet/search filters, and print the visible subset with its map points."
)]
struct ExploreCli {
    #[arg(long, value_name = "PATH", help = "Path to the exported JSON dataset")]
    data: PathBuf,
    #[arg(long, help = "Entity type to restrict to (omit for all)")]
    entity: Option<String>,
    #[arg(long = "year-min", help = "Inclusive lower production-year bound")]
    year_min: Option<i32>,
    #[arg(long = "year-max", help = "Inclusive upper production-year bound")]
    year_max: Option<i32>,
    #[arg(
        long = "filter",
        value_name = "FIELD=VALUE",
        value_parser = parse_equality_arg,
        help = "Exact facet requirement, repeat as needed"
    )]
    filters: Vec<(String, String)>,
    #[arg(
        long,
        default_value = "",
        help = "Free-text search over titles and all field values"
    )]
    search: String,
    #[arg(long, help = "Print surfaced facets for the entity selection")]
    facets: bool,
    #[arg(long, help = "Print map points for the filtered subset")]
    points: bool,
    #[arg(
        long = "detail",
        value_name = "RECORD_ID",
        help = "Print the classified detail view of one record and exit"
    )]
    detail: Option<String>,
}

/// Run the `explore` demo with CLI-style args.
pub fn run_explore_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) =
        parse_cli::<ExploreCli, _>(std::iter::once("explore".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let store = RecordStore::from_json_file(&cli.data)?;
    let mut session = ExplorerSession::new(store);

    if let Some(record_id) = cli.detail {
        match session.select(&record_id) {
            Some(model) => print_display_model(&model),
            None => println!("record '{record_id}' not found"),
        }
        return Ok(());
    }

    session.set_state(FilterState {
        entity: cli
            .entity
            .map(EntitySelection::Only)
            .unwrap_or(EntitySelection::All),
        years: YearRange {
            min: cli.year_min,
            max: cli.year_max,
        },
        equality: cli.filters.into_iter().collect(),
        search: cli.search,
    });

    if cli.facets {
        let facets = session.surfaced_facets();
        if session.facets().has_year_data {
            println!("year range available");
        }
        for facet in facets {
            println!("{}: {}", facet.field_name, facet.values.join(", "));
        }
        println!();
    }

    let visible = session.filtered();
    println!("{} of {} records visible", visible.len(), session.store().len());
    for record in &visible {
        println!(
            "[{}] {}",
            record.effective_entity_type(),
            record.title.replace('\n', " - ")
        );
    }

    if cli.points {
        println!();
        for point in session.points() {
            println!("{} => ({}, {})", point.record_id, point.lat, point.lng);
        }
    }
    Ok(())
}

fn print_display_model(model: &DisplayModel) {
    println!("{}", model.title);
    for (label, value) in &model.main_attributes {
        println!("  {label}: {value}");
    }
    for (role, names) in &model.people_by_role {
        println!("  {role}: {}", names.join(", "));
    }
    for (label, value) in &model.links {
        println!("  {label}: {value}");
    }
    if let Some(summary) = &model.summary {
        println!("--- resumo ---");
        println!("{summary}");
    }
    for (label, text) in &model.transcripts {
        println!("--- {label} ---");
        println!("{text}");
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

fn parse_equality_arg(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() && !value.is_empty() => {
            Ok((field.to_string(), value.to_string()))
        }
        _ => Err("--filter expects FIELD=VALUE".to_string()),
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tripox_core::{roadmap, BatchProcessor, MapView, PlanDigest};
use tripox_extract::{ExtractionRules, Gazetteer, PlanContext, TripProcessor, TripRequest};

mod logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the extraction rules file
    #[arg(long, env = "TRIPOX_RULES", global = true)]
    rules: Option<PathBuf>,

    /// JSON gazetteer to use instead of the built-in Goa places
    #[arg(long, env = "TRIPOX_GAZETTEER", global = true)]
    gazetteer: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn one itinerary (file or stdin) into a trip plan
    Extract {
        /// Itinerary text file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Plan title
        #[arg(long)]
        title: Option<String>,
        /// Plan overview
        #[arg(long)]
        overview: Option<String>,
    },
    /// Process every .txt/.md itinerary under a directory
    Batch { dir: PathBuf },
    /// List gazetteer places
    Places {
        /// Only places in this area (e.g. "South Goa")
        #[arg(long)]
        area: Option<String>,
    },
    /// Print the planner prompt for a destination
    Query {
        #[arg(long)]
        destination: String,
        #[arg(long)]
        days: u32,
        /// Budget in rupees
        #[arg(long)]
        budget: Option<u64>,
    },
    /// Inspect or reset the extraction rules
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// Print the rules file location
    Path,
    /// Print the active rules as JSON
    Show,
    /// Overwrite the rules file with the defaults
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Roadmap,
    Digest,
    Map,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read itinerary: {:?}", path)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read itinerary from stdin")?;
            Ok(text)
        }
    }
}

fn build_processor(cli: &Cli) -> Result<TripProcessor> {
    let rules_path = cli
        .rules
        .clone()
        .unwrap_or_else(ExtractionRules::default_path);
    let mut processor = TripProcessor::at_path(rules_path);

    if let Some(path) = &cli.gazetteer {
        let gazetteer = Gazetteer::load(path)
            .with_context(|| format!("Failed to load gazetteer: {:?}", path))?;
        processor = processor.with_gazetteer(gazetteer);
    }
    Ok(processor)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let processor = build_processor(&cli)?;

    match &cli.command {
        Commands::Extract {
            file,
            format,
            title,
            overview,
        } => {
            let text = read_input(file.as_deref())?;
            let mut context = PlanContext::default();
            if let Some(title) = title {
                context.title = title.clone();
            }
            if let Some(overview) = overview {
                context.overview = overview.clone();
            }
            let plan = processor.with_context(context).process(&text);
            if plan.is_empty() {
                log::info!("No known places found in the itinerary");
            }

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
                Format::Roadmap => print!("{}", roadmap::render(&plan)),
                Format::Digest => println!(
                    "{}",
                    serde_json::to_string_pretty(&PlanDigest::from_plan(&plan))?
                ),
                Format::Map => println!(
                    "{}",
                    serde_json::to_string_pretty(&MapView::from_plan(&plan))?
                ),
            }
        }
        Commands::Batch { dir } => {
            let entries = BatchProcessor::new(&processor).process_dir(dir)?;
            let failed = entries.iter().filter(|e| !e.is_ok()).count();
            if failed > 0 {
                log::warn!("{} of {} itineraries could not be read", failed, entries.len());
            }
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Places { area } => {
            let gazetteer = processor.gazetteer();
            let places = match area {
                Some(area) => gazetteer.in_area(area),
                None => gazetteer.iter().collect(),
            };
            if places.is_empty() {
                println!("No places found");
            }
            for place in places {
                println!(
                    "{:<24} {:>9.4} {:>9.4}  {}",
                    place.name,
                    place.lat,
                    place.lng,
                    place.area.as_deref().unwrap_or("-")
                );
            }
        }
        Commands::Query {
            destination,
            days,
            budget,
        } => {
            let mut request = TripRequest::new(destination.clone(), *days);
            if let Some(budget) = budget {
                request = request.with_budget(*budget);
            }
            println!("{}", request.query()?);
        }
        Commands::Rules { action } => match action {
            RulesAction::Path => println!("{}", processor.rules_path().display()),
            RulesAction::Show => {
                println!("{}", serde_json::to_string_pretty(processor.rules())?)
            }
            RulesAction::Reset => {
                let mut processor = processor;
                processor
                    .reset_defaults()
                    .context("Failed to write default rules")?;
                println!("Rules reset: {}", processor.rules_path().display());
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_with_format() {
        let cli = Cli::try_parse_from([
            "tripox",
            "extract",
            "plan.txt",
            "--format",
            "roadmap",
            "--title",
            "Monsoon Escape",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Extract {
                file,
                format,
                title,
                overview,
            } => {
                assert_eq!(file, Some(PathBuf::from("plan.txt")));
                assert!(matches!(format, Format::Roadmap));
                assert_eq!(title.as_deref(), Some("Monsoon Escape"));
                assert!(overview.is_none());
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_build_processor_with_gazetteer_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let gazetteer_path = dir.path().join("karnataka.json");
        std::fs::write(
            &gazetteer_path,
            r#"[
                {"name": "Hampi", "lat": 15.335, "lng": 76.46, "area": "Karnataka"},
                {"name": "Gokarna", "lat": 14.55, "lng": 74.32}
            ]"#,
        )?;
        let rules_path = dir.path().join("rules.json");

        let cli = Cli::try_parse_from([
            "tripox",
            "--gazetteer",
            gazetteer_path.to_str().unwrap(),
            "--rules",
            rules_path.to_str().unwrap(),
            "places",
        ])?;
        let processor = build_processor(&cli)?;

        assert_eq!(processor.rules_path(), rules_path.as_path());
        assert_eq!(processor.gazetteer().len(), 2);
        assert_eq!(processor.gazetteer().in_area("karnataka").len(), 1);

        let plan = processor.process("Day 1: Temples (Hampi/Baga)");
        assert_eq!(plan.location_count(), 1);
        assert_eq!(plan.days[0].locations[0].name, "Hampi");
        Ok(())
    }

    #[test]
    fn test_build_processor_rejects_bad_gazetteer() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let dupes = dir.path().join("dupes.json");
        std::fs::write(
            &dupes,
            r#"[{"name": "Hampi", "lat": 15.3, "lng": 76.4}, {"name": "Hampi", "lat": 15.3, "lng": 76.4}]"#,
        )?;
        let missing = dir.path().join("missing.json");
        let rules = dir.path().join("rules.json");

        for path in [&dupes, &missing] {
            let cli = Cli::try_parse_from([
                "tripox",
                "--gazetteer",
                path.to_str().unwrap(),
                "--rules",
                rules.to_str().unwrap(),
                "places",
            ])?;
            let err = build_processor(&cli).unwrap_err();
            assert!(err.to_string().contains("Failed to load gazetteer"));
        }
        Ok(())
    }

    #[test]
    fn test_parse_query_requires_days() {
        assert!(Cli::try_parse_from(["tripox", "query", "--destination", "Goa"]).is_err());
    }
}

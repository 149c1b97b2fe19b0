//! Command dispatch: load the datasets, run the query, render the result.

use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;
use tracing::warn;

use podium_cluster::{HeatmapPayload, MatrixRequest, MedalFilter, build_heatmap};
use podium_engine::{BuildStats, DashboardState, EngineContext, queries};
use podium_ingest::{
    ATHLETE_EVENTS_FILE, COUNTRY_PROFILES_FILE, GAMES_SUMMARY_FILE, LoadReport, MEDAL_TALLY_FILE,
    find_dataset, load_athlete_events, load_country_profiles, load_games_rows, load_medal_rows,
    read_csv_table, read_csv_table_auto,
};
use podium_model::AthleteEvent;

use crate::cli::{Cli, Command, HeatmapArgs, MedalTypeArg};
use crate::render;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Summary => summary(cli),
        Command::Countries => {
            let loaded = load_engine(&cli.data_dir);
            let rows = queries::countries(loaded.state.context()?);
            if cli.json {
                print_json(&rows)
            } else {
                println!("{}", render::countries_table(&rows));
                Ok(())
            }
        }
        Command::Games => {
            let loaded = load_engine(&cli.data_dir);
            let rows = queries::summer_editions(loaded.state.context()?);
            if cli.json {
                print_json(&rows)
            } else {
                println!("{}", render::editions_table(&rows));
                Ok(())
            }
        }
        Command::MedalTally => {
            let loaded = load_engine(&cli.data_dir);
            let rows = queries::medal_tally(loaded.state.context()?);
            if cli.json {
                print_json(&rows)
            } else {
                println!("{}", render::medal_tally_table(&rows));
                Ok(())
            }
        }
        Command::Years => {
            let loaded = load_engine(&cli.data_dir);
            let years = queries::summer_years(loaded.state.context()?);
            if cli.json {
                print_json(&years)
            } else {
                for year in years {
                    println!("{year}");
                }
                Ok(())
            }
        }
        Command::HostCities => {
            let loaded = load_engine(&cli.data_dir);
            let rows = queries::host_cities(loaded.state.context()?);
            if cli.json {
                print_json(&rows)
            } else {
                println!("{}", render::host_cities_table(&rows));
                Ok(())
            }
        }
        Command::CountryMedals(args) => {
            let loaded = load_engine(&cli.data_dir);
            let rows = queries::country_medal_history(loaded.state.context()?, &args.country)?;
            if cli.json {
                print_json(&rows)
            } else {
                println!("{}", render::history_table(&rows));
                Ok(())
            }
        }
        Command::Sports => {
            let (events, _) = load_events(&cli.data_dir)?;
            let names = queries::sports(&events);
            if cli.json {
                print_json(&names)
            } else {
                for name in names {
                    println!("{name}");
                }
                Ok(())
            }
        }
        Command::SportMedals(args) => {
            let loaded = load_engine(&cli.data_dir);
            let ctx = loaded.state.context()?;
            let (events, _) = load_events(&cli.data_dir)?;
            let rows = queries::sport_medals(ctx.registry(), &events, &args.sport);
            if cli.json {
                print_json(&rows)
            } else {
                println!("{}", render::sport_medals_table(&rows));
                Ok(())
            }
        }
        Command::HostPerformance => {
            let loaded = load_engine(&cli.data_dir);
            let hosts = queries::host_performance_timeline(loaded.state.context()?);
            if cli.json {
                print_json(&hosts)
            } else {
                println!("{}", render::timeline_table(&hosts));
                Ok(())
            }
        }
        Command::Heatmap(args) => heatmap(cli, args),
    }
}

fn heatmap(cli: &Cli, args: &HeatmapArgs) -> anyhow::Result<()> {
    let loaded = load_engine(&cli.data_dir);
    let ctx = loaded.state.context()?;
    let (events, _) = load_events(&cli.data_dir)?;
    let request = MatrixRequest {
        medal: medal_filter(args.medal_type),
        year_range: args.year_range.clone(),
        country_count: args.country_count,
    };
    let payload = build_heatmap(ctx.registry(), &events, &request);
    if cli.json {
        print_json(&payload)
    } else {
        render_heatmap(&payload);
        Ok(())
    }
}

fn render_heatmap(payload: &HeatmapPayload) {
    println!("{}", render::heatmap_overview_table(payload));
    if let Some(diagnostic) = &payload.diagnostic {
        println!("No heatmap: {diagnostic}");
        return;
    }
    println!("{}", render::heatmap_country_order_table(payload));
    println!("{}", render::heatmap_sport_order_table(payload));
    println!("Use --json for the full cell payload.");
}

#[derive(Serialize)]
struct SummaryPayload {
    ready: bool,
    failure: Option<String>,
    reports: Vec<LoadReport>,
    events_report: Option<LoadReport>,
    stats: Option<BuildStats>,
}

fn summary(cli: &Cli) -> anyhow::Result<()> {
    let loaded = load_engine(&cli.data_dir);
    let events_report = match load_events(&cli.data_dir) {
        Ok((_, report)) => Some(report),
        Err(error) => {
            warn!(error = %error, "athlete event data unavailable");
            None
        }
    };

    let payload = SummaryPayload {
        ready: loaded.state.is_ready(),
        failure: loaded.state.context().err().map(|e| e.to_string()),
        stats: loaded.state.context().ok().map(|ctx| *ctx.stats()),
        reports: loaded.reports,
        events_report,
    };

    if cli.json {
        return print_json(&payload);
    }

    match loaded.state.context() {
        Ok(ctx) => {
            println!("{}", render::load_reports_table(&payload.reports, payload.events_report.as_ref()));
            println!("{}", render::build_stats_table(ctx));
        }
        Err(error) => {
            println!("Engine degraded: {error}");
        }
    }
    Ok(())
}

struct LoadedEngine {
    state: DashboardState,
    reports: Vec<LoadReport>,
}

/// Startup never aborts on bad data: a failed load leaves the state
/// degraded and every dependent query reports not-initialized.
fn load_engine(data_dir: &Path) -> LoadedEngine {
    match load_context(data_dir) {
        Ok((context, reports)) => LoadedEngine {
            state: DashboardState::ready(context),
            reports,
        },
        Err(error) => {
            warn!(error = %format!("{error:#}"), "initialization failed; serving degraded");
            LoadedEngine {
                state: DashboardState::degraded(format!("{error:#}")),
                reports: Vec::new(),
            }
        }
    }
}

fn load_context(data_dir: &Path) -> anyhow::Result<(EngineContext, Vec<LoadReport>)> {
    let countries_path = find_dataset(data_dir, COUNTRY_PROFILES_FILE)?;
    let (countries, countries_report) =
        load_country_profiles(&read_csv_table(&countries_path)?)?;

    let games_path = find_dataset(data_dir, GAMES_SUMMARY_FILE)?;
    let (games, games_report) = load_games_rows(&read_csv_table(&games_path)?)?;

    let medals_path = find_dataset(data_dir, MEDAL_TALLY_FILE)?;
    let (medals, medals_report) = load_medal_rows(&read_csv_table(&medals_path)?)?;

    let context = EngineContext::build(countries, &games, &medals);
    Ok((context, vec![countries_report, games_report, medals_report]))
}

fn load_events(data_dir: &Path) -> anyhow::Result<(Vec<AthleteEvent>, LoadReport)> {
    let path = find_dataset(data_dir, ATHLETE_EVENTS_FILE)
        .context("athlete event data is required for sport queries")?;
    let table = read_csv_table_auto(&path)?;
    let (events, report) = load_athlete_events(&table)?;
    Ok((events, report))
}

fn medal_filter(arg: MedalTypeArg) -> MedalFilter {
    match arg {
        MedalTypeArg::Total => MedalFilter::Total,
        MedalTypeArg::Gold => MedalFilter::Gold,
        MedalTypeArg::Silver => MedalFilter::Silver,
        MedalTypeArg::Bronze => MedalFilter::Bronze,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

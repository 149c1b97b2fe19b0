//! Human-readable table rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use podium_cluster::HeatmapPayload;
use podium_engine::{
    EngineContext, HostCityRow, HostPerformance, MedalTallyRow, SportMedalRow, YearTally,
};
use podium_ingest::LoadReport;
use podium_model::{CountryProfile, GamesEdition};

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn base_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn mark_cell(on: bool) -> Cell {
    if on {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new("-").add_attribute(Attribute::Dim)
    }
}

pub fn countries_table(rows: &[CountryProfile]) -> Table {
    let mut table = base_table(&["NOC", "Country"]);
    for profile in rows {
        table.add_row(vec![
            Cell::new(profile.noc.as_str()),
            Cell::new(&profile.name),
        ]);
    }
    table
}

pub fn editions_table(rows: &[GamesEdition]) -> Table {
    let mut table = base_table(&["ID", "Year", "City", "Host country", "Season", "Reconciled"]);
    align_right(&mut table, &[0, 1]);
    for edition in rows {
        table.add_row(vec![
            Cell::new(edition.id),
            Cell::new(edition.year),
            Cell::new(&edition.host_city),
            Cell::new(edition.host_country.label()),
            Cell::new(edition.season),
            mark_cell(edition.host_country.is_resolved()),
        ]);
    }
    table
}

pub fn medal_tally_table(rows: &[MedalTallyRow]) -> Table {
    let mut table = base_table(&["Year", "NOC", "Gold", "Silver", "Bronze", "Total", "Host"]);
    align_right(&mut table, &[0, 2, 3, 4, 5]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(row.noc.as_str()),
            Cell::new(row.gold),
            Cell::new(row.silver),
            Cell::new(row.bronze),
            Cell::new(row.total).add_attribute(Attribute::Bold),
            Cell::new(&row.host_country),
        ]);
    }
    table
}

pub fn host_cities_table(rows: &[HostCityRow]) -> Table {
    let mut table = base_table(&["Year", "City", "Country"]);
    align_right(&mut table, &[0]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(&row.city),
            Cell::new(&row.country),
        ]);
    }
    table
}

pub fn history_table(rows: &[YearTally]) -> Table {
    let mut table = base_table(&["Year", "Gold", "Silver", "Bronze", "Total"]);
    align_right(&mut table, &[0, 1, 2, 3, 4]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(row.gold),
            Cell::new(row.silver),
            Cell::new(row.bronze),
            Cell::new(row.total).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn sport_medals_table(rows: &[SportMedalRow]) -> Table {
    let mut table = base_table(&["Year", "Country", "Gold", "Silver", "Bronze"]);
    align_right(&mut table, &[0, 2, 3, 4]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(&row.country),
            Cell::new(row.gold),
            Cell::new(row.silver),
            Cell::new(row.bronze),
        ]);
    }
    table
}

pub fn timeline_table(hosts: &[HostPerformance]) -> Table {
    let mut table = base_table(&[
        "Host",
        "Host year",
        "NOC",
        "Reconciled",
        "Games with data",
        "Best total",
    ]);
    align_right(&mut table, &[1, 4, 5]);
    for host in hosts {
        let with_data = host
            .performance
            .iter()
            .filter(|p| p.total.is_some())
            .count();
        let best = host.performance.iter().filter_map(|p| p.total).max();
        table.add_row(vec![
            Cell::new(&host.host_country),
            Cell::new(host.host_year),
            Cell::new(
                host.host_code
                    .as_ref()
                    .map_or("-", podium_model::NocCode::as_str),
            ),
            mark_cell(host.resolved),
            Cell::new(with_data),
            match best {
                Some(total) => Cell::new(total).add_attribute(Attribute::Bold),
                None => Cell::new("-").add_attribute(Attribute::Dim),
            },
        ]);
    }
    table
}

pub fn heatmap_overview_table(payload: &HeatmapPayload) -> Table {
    let mut table = base_table(&["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Year range"),
        Cell::new(format!(
            "{} ({}-{})",
            payload.year_range, payload.year_min, payload.year_max
        )),
    ]);
    table.add_row(vec![
        Cell::new("Countries"),
        Cell::new(payload.countries.len()),
    ]);
    table.add_row(vec![Cell::new("Sports"), Cell::new(payload.sports.len())]);
    table.add_row(vec![
        Cell::new("Max cell value"),
        Cell::new(payload.max_value),
    ]);
    table
}

pub fn heatmap_country_order_table(payload: &HeatmapPayload) -> Table {
    let mut table = base_table(&["#", "NOC", "Country", "Cluster"]);
    align_right(&mut table, &[0, 3]);
    for (position, noc) in payload.countries.iter().enumerate() {
        let cell = payload.cells.iter().find(|c| c.noc == *noc);
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(noc.as_str()),
            Cell::new(cell.map_or("", |c| c.country.as_str())),
            Cell::new(cell.map_or(0, |c| c.country_cluster)),
        ]);
    }
    table
}

pub fn heatmap_sport_order_table(payload: &HeatmapPayload) -> Table {
    let mut table = base_table(&["#", "Sport", "Cluster"]);
    align_right(&mut table, &[0, 2]);
    for (position, sport) in payload.sports.iter().enumerate() {
        let cell = payload.cells.iter().find(|c| c.sport == *sport);
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(sport),
            Cell::new(cell.map_or(0, |c| c.sport_cluster)),
        ]);
    }
    table
}

pub fn load_reports_table(reports: &[LoadReport], events: Option<&LoadReport>) -> Table {
    let mut table = base_table(&["Dataset", "Adapter", "Loaded", "Skipped"]);
    align_right(&mut table, &[2, 3]);
    for report in reports.iter().chain(events) {
        let skipped = if report.rows_skipped > 0 {
            Cell::new(report.rows_skipped).fg(Color::Yellow)
        } else {
            Cell::new(report.rows_skipped).add_attribute(Attribute::Dim)
        };
        table.add_row(vec![
            Cell::new(&report.dataset),
            Cell::new(&report.adapter),
            Cell::new(report.rows_loaded),
            skipped,
        ]);
    }
    table
}

pub fn build_stats_table(ctx: &EngineContext) -> Table {
    let stats = ctx.stats();
    let mut table = base_table(&["Metric", "Value"]);
    align_right(&mut table, &[1]);
    table.add_row(vec![
        Cell::new("Countries registered"),
        Cell::new(ctx.registry().len()),
    ]);
    table.add_row(vec![
        Cell::new("Summer editions retained"),
        Cell::new(ctx.editions().len()),
    ]);
    table.add_row(vec![
        Cell::new("Medal records retained"),
        Cell::new(ctx.medals().len()),
    ]);
    table.add_row(vec![
        Cell::new("Medal rows dropped (non-Summer)"),
        Cell::new(stats.medal_rows_dropped),
    ]);
    table.add_row(vec![
        Cell::new("Medal totals recomputed"),
        Cell::new(stats.totals_recomputed),
    ]);
    table.add_row(vec![
        Cell::new("Host labels corrected"),
        Cell::new(stats.reconcile.corrected),
    ]);
    let unresolved = if stats.reconcile.unresolved > 0 {
        Cell::new(stats.reconcile.unresolved).fg(Color::Yellow)
    } else {
        Cell::new(stats.reconcile.unresolved).add_attribute(Attribute::Dim)
    };
    table.add_row(vec![Cell::new("Host labels unresolved"), unresolved]);
    table
}

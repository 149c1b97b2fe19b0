//! End-to-end loading of CSV fixtures through the schema adapters.

use std::path::PathBuf;

use podium_ingest::{
    COUNTRY_PROFILES_FILE, GAMES_SUMMARY_FILE, MEDAL_TALLY_FILE, find_dataset, load_athlete_events,
    load_country_profiles, load_games_rows, load_medal_rows, read_csv_table,
};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_a_full_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir,
        COUNTRY_PROFILES_FILE,
        "noc,country\nGRE,Greece\nFRA,France\nUSA,United States\n",
    );
    write_fixture(
        &dir,
        GAMES_SUMMARY_FILE,
        "edition,edition_id,year,city,country_noc\n\
         1896 Summer Olympics,1,1896,Athens,GRE\n\
         1924 Winter Olympics,2,1924,Chamonix,FRA\n",
    );
    write_fixture(
        &dir,
        MEDAL_TALLY_FILE,
        "edition_id,country_noc,gold,silver,bronze,total\n1,GRE,10,17,19,46\n1,USA,11,7,2,20\n",
    );

    let countries_path = find_dataset(dir.path(), COUNTRY_PROFILES_FILE).unwrap();
    let (countries, countries_report) =
        load_country_profiles(&read_csv_table(&countries_path).unwrap()).unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(countries_report.rows_skipped, 0);

    let games_path = find_dataset(dir.path(), GAMES_SUMMARY_FILE).unwrap();
    let (games, _) = load_games_rows(&read_csv_table(&games_path).unwrap()).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].host_country, "GRE");

    let medals_path = find_dataset(dir.path(), MEDAL_TALLY_FILE).unwrap();
    let (medals, _) = load_medal_rows(&read_csv_table(&medals_path).unwrap()).unwrap();
    assert_eq!(medals.len(), 2);
    assert_eq!(medals[0].total, Some(46));
}

#[test]
fn athlete_events_survive_a_legacy_column_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "events.csv",
        "Edition,NOC,Sport,Medal\n\
         1996 Summer Olympics,USA,Basketball,Gold\n\
         1996 Summer Olympics,USA,Basketball,\n",
    );
    let (events, report) = load_athlete_events(&read_csv_table(&path).unwrap()).unwrap();
    assert_eq!(report.adapter, "capitalized");
    assert_eq!(events.len(), 2);
    // Year column is absent; it comes from the edition label.
    assert_eq!(events[0].year, 1996);
    assert!(events[0].medal.is_some());
    assert!(events[1].medal.is_none());
}

use golf_stats::{load_index, FileSource, GolfError, GolfIndex, QueryEngine, Session};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const ROUNDS: &str = "\
Tampere;Ruuhikoski;Alice;3
Tampere;Ruuhikoski;Bob;-1
Tampere;\"Golf; Pirkkala\";Alice;1
Espoo;Master;Alice;0
Espoo;Master;Carol;5
Espoo;Master;Alice;2
Turku;Aura;Alice;4
Turku;Aura;Bob;1
";

fn write_records(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn load(content: &str) -> golf_stats::Result<GolfIndex> {
    let file = write_records(content);
    load_index(&FileSource::new(file.path()))
}

fn run_session(index: &GolfIndex, script: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    Session::new(index)
        .run(Cursor::new(script), &mut out, &mut err)
        .unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn test_load_file_one_round_per_line() {
    let index = load(ROUNDS).unwrap();
    assert_eq!(index.round_count(), 8);

    let clubs = index.clubs_at("Tampere").unwrap();
    assert_eq!(clubs["Ruuhikoski"].len(), 2);
    assert_eq!(clubs["Golf; Pirkkala"][0].player, "Alice");
}

#[test]
fn test_bad_line_anywhere_fails_whole_load() {
    let first = format!("Oulu;Virpiniemi;Dave\n{}", ROUNDS);
    let last = format!("{}Oulu;Virpiniemi;Dave\n", ROUNDS);

    assert!(matches!(
        load(&first),
        Err(GolfError::StructuralError { line_number: 1, .. })
    ));
    assert!(matches!(
        load(&last),
        Err(GolfError::StructuralError { line_number: 9, .. })
    ));
}

#[test]
fn test_empty_value_fails_whole_load() {
    let content = format!("{};Aura;Bob;1\n", ROUNDS);
    let err = load(&content).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.user_friendly_message(), "Error: A line has an empty value!");
}

#[test]
fn test_full_session() {
    let index = load(ROUNDS).unwrap();
    let (out, err) = run_session(
        &index,
        "places\nrounds Master\nplayed Alice\ncompare Alice Bob\nquit\n",
    );

    let expected = "\
> Espoo
--Master
Tampere
--Golf; Pirkkala
--Ruuhikoski
Turku
--Aura
> Alice : 0
Alice : +2
Carol : +5
> Alice has a HCP of 2 with following results:
Espoo : Master : 0
Tampere : Golf; Pirkkala : +1
Espoo : Master : +2
Tampere : Ruuhikoski : +3
Turku : Aura : +4
> Alice has played 5 rounds of golf, with HCP of 2
Bob has played 2 rounds of golf, but hasn't played enough for a handicap
Alice has played better golf
> ";
    assert_eq!(out, expected);
    assert!(err.is_empty());
}

#[test]
fn test_session_reports_each_error_once() {
    let index = load(ROUNDS).unwrap();
    let (out, err) = run_session(
        &index,
        "foo\nclubs Mars\nrounds Nowhere\nplayed Zed\ncompare Alice\nplaces extra\nclubs Turku\n",
    );

    assert_eq!(
        err,
        "Error: Unknown command: foo\n\
         Error: The given location not found!\n\
         Error: The given club not found!\n\
         Error: The player hasn't played any rounds!\n\
         Error: In command: compare\n\
         Error: In command: places\n"
    );
    assert!(out.ends_with("> --Aura\n> "));
    assert_eq!(index.round_count(), 8);
}

#[test]
fn test_compare_with_player_missing() {
    let index = load(ROUNDS).unwrap();
    let report = QueryEngine::new(&index).compare("Zed", "Alice");
    assert_eq!(
        report.lines,
        vec![
            "Zed has played no rounds of golf",
            "Alice has played 5 rounds of golf, with HCP of 2",
            "Alice has played better golf",
        ]
    );
}

#[test]
fn test_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_index(&FileSource::new(dir.path().join("nope.txt"))).unwrap_err();
    assert!(matches!(err, GolfError::FileUnreadable { .. }));
    assert!(err.is_fatal());
}

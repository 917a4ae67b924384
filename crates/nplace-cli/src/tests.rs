use nplace_core::CollectionTime;
use uuid::Uuid;

use super::*;

const ID: &str = "0d8e3f55-3e1d-4f6c-8d0c-0b8f0e6a7c21";

fn id() -> Uuid {
    Uuid::parse_str(ID).unwrap()
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["nplace"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.api_url.is_none());
}

#[test]
fn parses_dashboard_without_subcommand() {
    let cli = Cli::try_parse_from(["nplace", "dashboard"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Dashboard { command: None })
    ));
}

#[test]
fn parses_collect_all_with_store() {
    let cli = Cli::try_parse_from(["nplace", "dashboard", "collect-all", "--store", ID]).unwrap();
    match cli.command {
        Some(Commands::Dashboard {
            command: Some(DashboardCommands::CollectAll { store }),
        }) => assert_eq!(store, id()),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn collect_all_requires_store() {
    assert!(Cli::try_parse_from(["nplace", "dashboard", "collect-all"]).is_err());
}

#[test]
fn parses_stores_register() {
    let cli = Cli::try_parse_from(["nplace", "stores", "register", "1234567890"]).unwrap();
    match cli.command {
        Some(Commands::Stores {
            command: StoreCommands::Register { place_id },
        }) => assert_eq!(place_id, "1234567890"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn stores_delete_rejects_non_uuid() {
    assert!(Cli::try_parse_from(["nplace", "stores", "delete", "42"]).is_err());
}

#[test]
fn api_url_is_global() {
    let cli = Cli::try_parse_from([
        "nplace",
        "stores",
        "list",
        "--api-url",
        "http://rank.internal:8000",
    ])
    .unwrap();
    assert_eq!(cli.api_url.as_deref(), Some("http://rank.internal:8000"));
    assert!(matches!(
        cli.command,
        Some(Commands::Stores {
            command: StoreCommands::List
        })
    ));
}

#[test]
fn keywords_add_defaults_to_no_time_and_no_alert() {
    let cli = Cli::try_parse_from([
        "nplace", "keywords", "add", "--store", ID, "seongsu cafe",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Keywords {
            command:
                KeywordCommands::Add {
                    store,
                    keyword,
                    time,
                    alert,
                },
        }) => {
            assert_eq!(store, id());
            assert_eq!(keyword, "seongsu cafe");
            assert_eq!(time, None);
            assert!(!alert);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn keywords_add_parses_slot_and_alert() {
    let cli = Cli::try_parse_from([
        "nplace", "keywords", "add", "--store", ID, "bakery", "--time", "09:00", "--alert",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Keywords {
            command: KeywordCommands::Add { time, alert, .. },
        }) => {
            assert_eq!(time, Some(CollectionTime::at_hour(9).unwrap()));
            assert!(alert);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn keywords_add_rejects_bad_time() {
    let result = Cli::try_parse_from([
        "nplace", "keywords", "add", "--store", ID, "bakery", "--time", "25:00",
    ]);
    assert!(result.is_err());
}

#[test]
fn keywords_toggle_requires_exactly_one_flag() {
    assert!(Cli::try_parse_from(["nplace", "keywords", "toggle", ID]).is_err());
    assert!(
        Cli::try_parse_from(["nplace", "keywords", "toggle", ID, "--active", "--alert"]).is_err()
    );

    let cli = Cli::try_parse_from(["nplace", "keywords", "toggle", ID, "--alert"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Keywords {
            command: KeywordCommands::Toggle {
                active: false,
                alert: true,
                ..
            }
        })
    ));
}

#[test]
fn history_parses_open_ended_range() {
    let cli = Cli::try_parse_from(["nplace", "history", ID, "--from", "2024-03-01"]).unwrap();
    match cli.command {
        Some(Commands::History(args)) => {
            assert_eq!(args.keyword_id, id());
            assert_eq!(args.from, chrono::NaiveDate::from_ymd_opt(2024, 3, 1));
            assert_eq!(args.to, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn history_rejects_malformed_date() {
    assert!(Cli::try_parse_from(["nplace", "history", ID, "--to", "03/01/2024"]).is_err());
}

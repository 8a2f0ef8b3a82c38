#[cfg(test)]
mod tests {
    use crate::ident::{SideId, Stat};
    use crate::{LogEvent, parse_log_line};

    #[test]
    fn test_parse_player() {
        let line = parse_log_line("|player|p1|Alice||1200").unwrap();
        assert_eq!(
            line.event,
            LogEvent::Player {
                side: SideId::P1,
                name: "Alice".to_string(),
                rating: Some(1200),
            }
        );
    }

    #[test]
    fn test_parse_player_without_rating() {
        let line = parse_log_line("|player|p2|Bob|266|").unwrap();
        assert_eq!(
            line.event,
            LogEvent::Player {
                side: SideId::P2,
                name: "Bob".to_string(),
                rating: None,
            }
        );
    }

    #[test]
    fn test_parse_player_missing_side_is_error() {
        assert!(parse_log_line("|player|p9|Alice").is_err());
    }

    #[test]
    fn test_parse_turn() {
        let line = parse_log_line("|turn|3").unwrap();
        assert_eq!(line.event, LogEvent::Turn(3));
        assert!(parse_log_line("|turn|three").is_err());
    }

    #[test]
    fn test_parse_switch() {
        let line = parse_log_line("|switch|p1a: Sparky|Pikachu, L50, M|100/100").unwrap();
        match line.event {
            LogEvent::Switch {
                pokemon,
                details,
                hp,
            } => {
                assert_eq!(pokemon.slot.to_string(), "p1a");
                assert_eq!(pokemon.nickname, "Sparky");
                assert_eq!(details.species, "Pikachu");
                assert_eq!(details.level, Some(50));
                let hp = hp.unwrap();
                assert_eq!((hp.current, hp.max), (100, 100));
            }
            other => panic!("expected switch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_move_with_target() {
        let line = parse_log_line("|move|p1a: Sparky|Thunderbolt|p2a: Kyogre").unwrap();
        match line.event {
            LogEvent::Move {
                pokemon,
                move_name,
                target,
            } => {
                assert_eq!(pokemon.slot.to_string(), "p1a");
                assert_eq!(move_name, "Thunderbolt");
                assert_eq!(target.unwrap().to_string(), "p2a");
            }
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_move_spread_marker_has_no_target() {
        let line = parse_log_line("|move|p1a: Sparky|Protect|[still]").unwrap();
        match line.event {
            LogEvent::Move { target, .. } => assert!(target.is_none()),
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_boost() {
        let line = parse_log_line("|-boost|p2b: Flutter Mane|spa|1").unwrap();
        match line.event {
            LogEvent::Boost {
                pokemon,
                stat,
                amount,
            } => {
                assert_eq!(pokemon.slot.to_string(), "p2b");
                assert_eq!(stat, Stat::Spa);
                assert_eq!(amount, 1);
            }
            other => panic!("expected boost, got {other:?}"),
        }
        assert!(parse_log_line("|-boost|p2b: Flutter Mane|spa|lots").is_err());
    }

    #[test]
    fn test_parse_weather_upkeep_tag() {
        let line = parse_log_line("|-weather|SunnyDay|[upkeep]").unwrap();
        assert_eq!(
            line.event,
            LogEvent::Weather {
                weather: "SunnyDay".to_string()
            }
        );
        assert!(line.tags.upkeep);

        let line = parse_log_line("|-weather|SunnyDay").unwrap();
        assert!(!line.tags.upkeep);
    }

    #[test]
    fn test_parse_sidestart() {
        let line = parse_log_line("|-sidestart|p1: Alice|move: Tailwind").unwrap();
        assert_eq!(
            line.event,
            LogEvent::SideStart {
                side: SideId::P1,
                effect: "move: Tailwind".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_from_of_tags() {
        let line = parse_log_line(
            "|-activate|p1a: Sparky|confusion|[from] ability: Intimidate|[of] p2a: Incineroar",
        )
        .unwrap();
        assert!(matches!(line.event, LogEvent::Other(_)));
        assert_eq!(line.tags.from_ability.as_deref(), Some("Intimidate"));
        let of = line.tags.of.unwrap();
        assert_eq!(of.slot.to_string(), "p2a");
        assert_eq!(of.nickname, "Incineroar");
        assert_eq!(line.subject.unwrap().nickname, "Sparky");
    }

    #[test]
    fn test_parse_rating_raw_line() {
        let line =
            parse_log_line("|raw|Alice's rating: 1305 &rarr; <strong>1333</strong><br />").unwrap();
        assert_eq!(
            line.event,
            LogEvent::RatingUpdate {
                name: "Alice".to_string(),
                before: 1305,
                after: 1333,
            }
        );
    }

    #[test]
    fn test_parse_unknown_keyword() {
        let line = parse_log_line("|-zbroken|p1a: Sparky").unwrap();
        assert_eq!(
            line.event,
            LogEvent::Other("|-zbroken|p1a: Sparky".to_string())
        );
    }

    #[test]
    fn test_parse_non_event_line() {
        let line = parse_log_line("this is chat, not an event").unwrap();
        assert!(matches!(line.event, LogEvent::Other(_)));

        let line = parse_log_line("").unwrap();
        assert!(matches!(line.event, LogEvent::Other(_)));
    }
}

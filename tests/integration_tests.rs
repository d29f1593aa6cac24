#[cfg(test)]
mod tests {
    use envlookup::{EnvError, LookupResultExt, MapEnv, ParseError};
    use std::env;
    use std::io::Write;
    use std::time::Duration;

    // Every test owns its variable names; the process environment is shared
    // between concurrently running tests.

    #[test]
    fn test_string_from_process_env() {
        env::set_var("IT_JAZZ_ARTIST", "John Coltrane");

        assert_eq!(envlookup::string("IT_JAZZ_ARTIST", None).unwrap(), "John Coltrane");
        assert_eq!(
            envlookup::string("IT_JAZZ_ARTIST", Some("Wayne Shorter".into())).unwrap(),
            "John Coltrane"
        );
        assert_eq!(
            envlookup::string("IT_SAX_PLAYER", Some("Wayne Shorter".into())).unwrap(),
            "Wayne Shorter"
        );
        assert!(envlookup::string("IT_SAX_PLAYER", None)
            .unwrap_err()
            .is_not_found());

        env::remove_var("IT_JAZZ_ARTIST");
    }

    #[test]
    fn test_int_album_scenario() {
        env::set_var("IT_NO_OF_ALBUMS", "51");

        assert_eq!(envlookup::int("IT_NO_OF_ALBUMS", None), Ok(51));
        assert_eq!(envlookup::int("IT_NO_OF_ALBUMS", Some(1)), Ok(51));
        assert_eq!(
            envlookup::int("IT_MISSING_ALBUMS", None),
            Err(EnvError::not_found("IT_MISSING_ALBUMS"))
        );
        assert_eq!(envlookup::int("IT_MISSING_ALBUMS", Some(1)), Ok(1));

        env::set_var("IT_NO_OF_ALBUMS", "ABC");
        let (value, err) = envlookup::int("IT_NO_OF_ALBUMS", Some(1)).into_pair();
        assert_eq!(value, 0);
        let err = err.expect("malformed value must be reported");
        assert!(err.is_invalid_format());
        assert_eq!(err.key(), "IT_NO_OF_ALBUMS");

        env::remove_var("IT_NO_OF_ALBUMS");
    }

    #[test]
    fn test_int64_and_uint64() {
        env::set_var("IT_BIG_NUMBER", "9223372036854775807");
        env::set_var("IT_HEX_NUMBER", "0xFF");

        assert_eq!(envlookup::int64("IT_BIG_NUMBER", None), Ok(i64::MAX));
        assert!(envlookup::int("IT_BIG_NUMBER", None)
            .unwrap_err()
            .is_invalid_format());
        assert_eq!(envlookup::uint64("IT_HEX_NUMBER", None), Ok(255));
        assert_eq!(envlookup::uint64("IT_NO_HEX_NUMBER", Some(7)), Ok(7));

        env::remove_var("IT_BIG_NUMBER");
        env::remove_var("IT_HEX_NUMBER");
    }

    #[test]
    fn test_bool_case_insensitive() {
        for (text, expected) in [("TRUE", true), ("True", true), ("1", true), ("false", false), ("0", false)] {
            env::set_var("IT_PLAYED_WITH_MILES", text);
            assert_eq!(envlookup::bool("IT_PLAYED_WITH_MILES", None), Ok(expected), "{text}");
        }

        env::set_var("IT_PLAYED_WITH_MILES", "f");
        let (value, err) = envlookup::bool("IT_PLAYED_WITH_MILES", None).into_pair();
        assert!(!value);
        assert_eq!(
            err.and_then(|e| e.parse_error().cloned()),
            Some(ParseError::Bool {
                value: "f".to_string()
            })
        );

        env::remove_var("IT_PLAYED_WITH_MILES");
    }

    #[test]
    fn test_slice_round_trip() {
        env::set_var("IT_RECORD_LABELS", "A,B,C");
        assert_eq!(
            envlookup::slice("IT_RECORD_LABELS", None).unwrap(),
            vec!["A", "B", "C"]
        );

        env::set_var("IT_RECORD_LABELS", "");
        assert_eq!(
            envlookup::slice("IT_RECORD_LABELS", Some(vec!["X".into()])).unwrap(),
            vec![""]
        );

        env::remove_var("IT_RECORD_LABELS");
    }

    #[test]
    fn test_duration_and_float() {
        env::set_var("IT_TRACK", "27m32s");
        env::set_var("IT_TRACK_FLOAT", "27.32");

        assert_eq!(
            envlookup::duration("IT_TRACK", None),
            Ok(Duration::from_secs(27 * 60) + Duration::from_secs(32))
        );
        assert_eq!(envlookup::float64("IT_TRACK_FLOAT", None), Ok(27.32));
        assert!(envlookup::duration("IT_TRACK_FLOAT", Some(Duration::ZERO))
            .unwrap_err()
            .is_invalid_format());
        assert!(envlookup::float64("IT_TRACK", Some(1.0))
            .unwrap_err()
            .is_invalid_format());

        env::remove_var("IT_TRACK");
        env::remove_var("IT_TRACK_FLOAT");
    }

    #[test]
    fn test_must_wrappers() {
        env::set_var("IT_MUST_PORT", "8080");
        assert_eq!(envlookup::must_int(envlookup::int("IT_MUST_PORT", None)), 8080);
        env::remove_var("IT_MUST_PORT");

        let result = std::panic::catch_unwind(|| {
            envlookup::must_int(envlookup::int("IT_MUST_PORT_MISSING", None))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_lookups_against_dotenv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NO_OF_STUDIO_ALBUMS=51").unwrap();
        writeln!(file, "LONGEST_RECORDED_TRACK=27m32s").unwrap();
        writeln!(file, "PLAYED_WITH_MILES_DAVIS=yes").unwrap();
        file.flush().unwrap();

        let env = envlookup::Env::new(MapEnv::from_dotenv(file.path()).unwrap());
        assert_eq!(env.int("NO_OF_STUDIO_ALBUMS", None), Ok(51));
        assert_eq!(
            env.duration("LONGEST_RECORDED_TRACK", None),
            Ok(Duration::from_secs(1652))
        );
        assert!(env
            .bool("PLAYED_WITH_MILES_DAVIS", Some(true))
            .unwrap_err()
            .is_invalid_format());
        assert!(env.string("PATH", None).unwrap_err().is_not_found());
    }
}

use disparser::{Argument, ArgumentReader, EnumArgument, ErrorKind, NamedEnum};

#[derive(Debug, Clone, Copy, PartialEq, EnumArgument)]
enum Weather {
    Sunny,
    Rain,
    HeavySnow,
    UVIndex,
}

#[test]
fn variants_are_named_in_snake_case() {
    assert_eq!(Weather::VARIANTS.len(), 4);
    let names = Weather::VARIANTS.iter().map(Weather::name).collect::<Vec<_>>();
    assert_eq!(names, vec!["sunny", "rain", "heavy_snow", "uv_index"]);
}

#[test]
fn names_match_ignoring_case() {
    assert_eq!(Weather::from_name("HEAVY_SNOW"), Some(&Weather::HeavySnow));
    assert_eq!(Weather::from_name("heavy_snow"), Some(&Weather::HeavySnow));
    assert_eq!(Weather::from_name("heavy-snow"), Some(&Weather::HeavySnow));
    assert_eq!(Weather::from_name("UV_Index"), Some(&Weather::UVIndex));
    assert_eq!(Weather::from_name("Rain"), Some(&Weather::Rain));
    assert_eq!(Weather::from_name("heavysnow"), None);
}

#[test]
fn parses_as_an_argument() {
    let argument = EnumArgument::<Weather>::new();
    let mut reader = ArgumentReader::new("!forecast sunny hail", &());

    assert_eq!(argument.parse(&mut reader), Ok(Weather::Sunny));
    let error = argument.parse(&mut reader).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidEnumValue);
    assert_eq!(error.to_string(), "`hail` is not a valid type!");
}

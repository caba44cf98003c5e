use crate::models::GeocodingResult;

/// Condition label for codes missing from the WMO table
pub const UNKNOWN_CONDITIONS: &str = "Unknown";

/// Converts WMO weather code to human-readable description
pub fn weather_code_to_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITIONS,
    }
}

/// Describes a code that Open-Meteo may have reported as `null`
pub fn describe_weather_code(code: Option<i32>) -> String {
    code.map_or(UNKNOWN_CONDITIONS, weather_code_to_description)
        .to_string()
}

/// Formats a geocoding match as "Name, Country"
pub fn format_location(place: &GeocodingResult) -> String {
    format!("{}, {}", place.name, place.country.as_deref().unwrap_or(""))
}

/// Rounds to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_code_descriptions() {
        assert_eq!(weather_code_to_description(0), "Clear sky");
        assert_eq!(weather_code_to_description(48), "Depositing rime fog");
        assert_eq!(weather_code_to_description(61), "Slight rain");
        assert_eq!(weather_code_to_description(82), "Violent rain showers");
        assert_eq!(weather_code_to_description(99), "Thunderstorm with heavy hail");
    }

    #[test]
    fn test_unlisted_codes_are_unknown() {
        assert_eq!(weather_code_to_description(7), "Unknown");
        assert_eq!(weather_code_to_description(77), "Unknown");
        assert_eq!(weather_code_to_description(-1), "Unknown");
        assert_eq!(describe_weather_code(None), "Unknown");
    }

    #[test]
    fn test_format_location() {
        let with_country = GeocodingResult {
            name: "Kandy".to_string(),
            latitude: 7.2906,
            longitude: 80.6337,
            country: Some("Sri Lanka".to_string()),
        };
        let without_country = GeocodingResult {
            country: None,
            ..with_country.clone()
        };

        assert_eq!(format_location(&with_country), "Kandy, Sri Lanka");
        assert_eq!(format_location(&without_country), "Kandy, ");
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(1.0 / 7.0), 0.1);
        assert_eq!(round_to_tenth(1.0 / 30.0), 0.0);
        assert_eq!(round_to_tenth(180.0 / 7.0), 25.7);
    }
}

//! Pure conversion functions: TOML config strings -> library types.

use anyhow::{Context, Result, bail};

use tempora_calendar::{Chronology, ChronologyConfig, Cutover, DateFields, Instant, RoundingMode};

use crate::config::ChronologyToml;

/// Parses a cutover setting: `"gregorian"`, `"julian"` or the first
/// Gregorian day as `YYYY-MM-DD`.
pub fn parse_cutover(s: &str) -> Result<Cutover> {
    match s.trim().to_lowercase().as_str() {
        "gregorian" | "proleptic-gregorian" => return Ok(Cutover::ProlepticGregorian),
        "julian" | "proleptic-julian" => return Ok(Cutover::ProlepticJulian),
        _ => {}
    }
    let fields: DateFields = s
        .parse()
        .with_context(|| format!("invalid gregorian_cutover: {s:?}"))?;
    if fields.hour() != 0 || fields.minute() != 0 || fields.second() != 0 || fields.millisecond() != 0
    {
        bail!("gregorian_cutover must be a date without time, got {s:?}");
    }
    let (year, month, day) = fields.ymd();
    Ok(Cutover::At { year, month, day })
}

/// Parses a rounding mode name such as `"half-up"` or `"HALF_EVEN"`.
pub fn parse_rounding_mode(s: &str) -> Result<RoundingMode> {
    s.parse()
        .with_context(|| format!("invalid rounding mode: {s:?}"))
}

/// Builds a [`ChronologyConfig`] from the TOML chronology settings.
pub fn build_chronology_config(toml: &ChronologyToml) -> Result<ChronologyConfig> {
    let cutover = parse_cutover(&toml.gregorian_cutover)?;
    Ok(ChronologyConfig::new()
        .with_offset_minutes(toml.offset_minutes)
        .with_cutover(cutover))
}

/// Builds a validated [`Chronology`] from the TOML chronology settings.
pub fn build_chronology(toml: &ChronologyToml) -> Result<Chronology> {
    let config = build_chronology_config(toml)?;
    Chronology::new(config).context("invalid [chronology] settings")
}

/// Parses local date-time text in `chronology`.
pub fn parse_instant(chronology: &Chronology, s: &str) -> Result<Instant> {
    chronology
        .parse(s)
        .with_context(|| format!("invalid instant: {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutover_names() {
        assert_eq!(parse_cutover("gregorian").unwrap(), Cutover::ProlepticGregorian);
        assert_eq!(parse_cutover("Julian").unwrap(), Cutover::ProlepticJulian);
        assert_eq!(parse_cutover("1582-10-15").unwrap(), Cutover::HISTORICAL);
        assert_eq!(
            parse_cutover("1752-09-14").unwrap(),
            Cutover::At {
                year: 1752,
                month: 9,
                day: 14
            }
        );
    }

    #[test]
    fn cutover_rejects_time_and_garbage() {
        assert!(parse_cutover("1752-09-14T12:00").is_err());
        let err = parse_cutover("soon").unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid gregorian_cutover: \"soon\""));
    }

    #[test]
    fn rounding_modes() {
        assert_eq!(parse_rounding_mode("half-up").unwrap(), RoundingMode::HalfUp);
        assert_eq!(parse_rounding_mode("HALF_EVEN").unwrap(), RoundingMode::HalfEven);
        assert!(parse_rounding_mode("sideways").is_err());
    }

    #[test]
    fn chronology_from_toml() {
        let toml = ChronologyToml {
            offset_minutes: 60,
            gregorian_cutover: "julian".to_string(),
        };
        let chronology = build_chronology(&toml).unwrap();
        assert_eq!(chronology.offset_minutes(), 60);
        assert_eq!(chronology.gregorian_cutover(), None);
    }

    #[test]
    fn chronology_rejects_bad_offset() {
        let toml = ChronologyToml {
            offset_minutes: 2_000,
            gregorian_cutover: "1582-10-15".to_string(),
        };
        let err = build_chronology(&toml).unwrap_err();
        assert!(format!("{err:#}").contains("invalid [chronology] settings"));
    }

    #[test]
    fn default_toml_is_utc() {
        let chronology = build_chronology(&ChronologyToml::default()).unwrap();
        assert_eq!(chronology, Chronology::utc());
    }

    #[test]
    fn instants_in_context() {
        let chronology = Chronology::utc();
        assert_eq!(
            parse_instant(&chronology, "1970-01-01").unwrap(),
            Instant::EPOCH
        );
        let err = parse_instant(&chronology, "1582-10-10").unwrap_err();
        assert!(err.to_string().contains("invalid instant"));
    }
}

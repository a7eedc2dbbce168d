use chrono::NaiveDate;
use serde::Deserialize;

/// One catalog entry from the host's scene search, carrying its acquisition
/// date as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Scene {
    pub date: NaiveDate,
}

/// Keeps only the scenes acquired exactly on one of the two run dates. Any
/// other catalog date is dropped silently; scene availability is the host's
/// problem, not an error here.
pub fn filter_scenes(scenes: Vec<Scene>, date1: NaiveDate, date2: NaiveDate) -> Vec<Scene> {
    scenes
        .into_iter()
        .filter(|scene| scene.date == date1 || scene.date == date2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_filter_keeps_only_the_two_run_dates() {
        let scenes = vec![
            Scene {
                date: date("1988-08-13"),
            },
            Scene {
                date: date("1996-04-02"),
            },
            Scene {
                date: date("2022-08-19"),
            },
            Scene {
                date: date("2022-08-27"),
            },
        ];

        let kept = filter_scenes(scenes, date("1988-08-13"), date("2022-08-19"));

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, date("1988-08-13"));
        assert_eq!(kept[1].date, date("2022-08-19"));
    }

    #[test]
    fn test_filter_with_empty_catalog() {
        let kept = filter_scenes(Vec::new(), date("1988-08-13"), date("2022-08-19"));

        assert!(kept.is_empty());
    }

    #[test]
    fn test_scene_deserializes_from_catalog_json() {
        let scenes: Vec<Scene> =
            serde_json::from_str(r#"[{"date": "1988-08-13"}, {"date": "2022-08-19"}]"#).unwrap();

        assert_eq!(scenes[0].date, date("1988-08-13"));
        assert_eq!(scenes[1].date, date("2022-08-19"));
    }
}

/// Connector scheduling settings
///
/// These values are owned by the host page; the advanced form holds a
/// transient editing copy and echoes every change upward immediately, so
/// the host's copy is always current when its save action runs.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scheduling settings for a single connector.
///
/// Frequencies are stored as plain signed integers: the form is permissive
/// and passes negative input through with a validation message rather than
/// blocking it, so the domain check (`is_valid`) lives here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScheduleSettings {
    /// How often stale documents are checked against the source and removed,
    /// in days. 0 disables pruning for this connector.
    pub prune_freq_days: i64,
    /// How often new documents are pulled from the source, in minutes.
    /// 0 means new documents are never pulled.
    pub refresh_freq_mins: i64,
    /// Documents prior to this date are not pulled in. None = no cutoff.
    pub indexing_start: Option<NaiveDate>,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            prune_freq_days: 30,
            refresh_freq_mins: 0,
            indexing_start: None,
        }
    }
}

impl ScheduleSettings {
    /// 0 is a valid "disabled" value, so only negatives are out of domain.
    pub fn is_valid(&self) -> bool {
        self.prune_freq_days >= 0 && self.refresh_freq_mins >= 0
    }

    pub fn pruning_disabled(&self) -> bool {
        self.prune_freq_days == 0
    }

    pub fn refresh_disabled(&self) -> bool {
        self.refresh_freq_mins == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ScheduleSettings::default();
        assert_eq!(settings.prune_freq_days, 30);
        assert_eq!(settings.refresh_freq_mins, 0);
        assert!(settings.indexing_start.is_none());
        assert!(settings.is_valid());
    }

    #[test]
    fn test_zero_means_disabled_and_is_valid() {
        let settings = ScheduleSettings {
            prune_freq_days: 0,
            refresh_freq_mins: 0,
            indexing_start: None,
        };
        assert!(settings.is_valid());
        assert!(settings.pruning_disabled());
        assert!(settings.refresh_disabled());
    }

    #[test]
    fn test_negative_frequency_is_out_of_domain() {
        let settings = ScheduleSettings {
            prune_freq_days: -1,
            ..ScheduleSettings::default()
        };
        assert!(!settings.is_valid());
    }

    #[test]
    fn test_serialization_round_trip() {
        let settings = ScheduleSettings {
            prune_freq_days: 7,
            refresh_freq_mins: 60,
            indexing_start: NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: ScheduleSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, restored);
    }
}

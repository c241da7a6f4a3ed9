use metrics_exporter_prometheus::PrometheusHandle;
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

use full_course::{
    evaluate, filter_to_active, generate_entries, merge_entries, Catalog, ChallengeEntry,
    ChallengeId, ChallengeSet, CourseId, EntryUpdate, SettingsError, UpdateError, UserSettings,
    Verdict,
};

use crate::config::EngineConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The catalog plus one in-memory progress sheet. Route handlers share a
/// single instance; the mutex serializes edits.
pub(crate) struct SheetService {
    catalog: Catalog,
    state: Mutex<SheetState>,
}

struct SheetState {
    settings: UserSettings,
    entries: ChallengeSet,
}

#[derive(Debug)]
pub(crate) enum ServiceError {
    UnknownChallenge(ChallengeId),
    Update(UpdateError),
    Settings(SettingsError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::UnknownChallenge(id) => write!(f, "no challenge numbered {}", id),
            ServiceError::Update(err) => write!(f, "{}", err),
            ServiceError::Settings(err) => write!(f, "{}", err),
        }
    }
}

impl SheetService {
    /// Fresh sheet with every select parameter seeded to its first option.
    pub(crate) fn new(engine: &EngineConfig) -> Self {
        let catalog = Catalog::standard();
        let mut settings = UserSettings::new(engine.username.clone(), engine.challenge_year);
        settings.seed_params(&catalog);
        let entries = generate_entries(&catalog);
        SheetService {
            catalog,
            state: Mutex::new(SheetState { settings, entries }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SheetState> {
        self.state.lock().expect("sheet mutex poisoned")
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn entries(&self) -> ChallengeSet {
        self.lock().entries.clone()
    }

    pub(crate) fn entry(&self, id: ChallengeId) -> Option<ChallengeEntry> {
        self.lock().entries.get(&id).cloned()
    }

    pub(crate) fn update(
        &self,
        id: ChallengeId,
        update: EntryUpdate,
    ) -> Result<ChallengeEntry, ServiceError> {
        let mut state = self.lock();
        let entry = state
            .entries
            .get_mut(&id)
            .ok_or(ServiceError::UnknownChallenge(id))?;
        entry.apply(update).map_err(ServiceError::Update)?;
        Ok(entry.clone())
    }

    pub(crate) fn settings(&self) -> UserSettings {
        self.lock().settings.clone()
    }

    /// Replace the settings wholesale. Missing course parameters are seeded
    /// back in so a partial payload cannot strip the select defaults.
    pub(crate) fn put_settings(&self, mut settings: UserSettings) -> Result<(), ServiceError> {
        settings.validate().map_err(ServiceError::Settings)?;
        settings.seed_params(&self.catalog);
        self.lock().settings = settings;
        Ok(())
    }

    pub(crate) fn judge(&self, id: ChallengeId, course: CourseId) -> Verdict {
        let state = self.lock();
        evaluate(&self.catalog, &state.settings, &state.entries, id, course)
    }

    /// The sheet restricted to entries an active course can score.
    pub(crate) fn active_sheet(&self) -> ChallengeSet {
        let state = self.lock();
        filter_to_active(&state.settings.courses, &state.entries)
    }

    /// Throw the sheet away and start over. Returns the new entry count.
    pub(crate) fn reset(&self) -> usize {
        let mut state = self.lock();
        state.entries = generate_entries(&self.catalog);
        state.entries.len()
    }

    /// Regenerate from the catalog while keeping everything the user filled
    /// in. Used after upgrading to a build with catalog changes.
    pub(crate) fn sync(&self) -> usize {
        let mut state = self.lock();
        state.entries = merge_entries(&state.entries, &self.catalog);
        state.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use full_course::CourseChoice;

    fn engine_config() -> EngineConfig {
        EngineConfig {
            username: "WatcherOne".to_string(),
            challenge_year: 2026,
        }
    }

    #[test]
    fn fresh_service_carries_the_whole_catalog() {
        let service = SheetService::new(&engine_config());
        assert_eq!(service.entries().len(), 192);
        assert_eq!(service.settings().challenge_year, 2026);
        assert_eq!(
            service.settings().param(CourseId::Coffee, "Day"),
            Some("Mondays")
        );
    }

    #[test]
    fn update_rejects_unknown_challenge() {
        let service = SheetService::new(&engine_config());
        let err = service
            .update(
                ChallengeId(999),
                EntryUpdate::MalId {
                    value: "40".to_string(),
                },
            )
            .expect_err("challenge 999 does not exist");
        assert!(matches!(err, ServiceError::UnknownChallenge(_)));
    }

    #[test]
    fn put_settings_rejects_cross_group_pick() {
        let service = SheetService::new(&engine_config());
        let mut settings = service.settings();
        settings.courses.drink = CourseChoice {
            enabled: true,
            value: CourseId::Burger,
        };
        let err = service.put_settings(settings).expect_err("wrong group");
        assert!(matches!(err, ServiceError::Settings(_)));
    }

    #[test]
    fn reset_discards_edits() {
        let service = SheetService::new(&engine_config());
        service
            .update(
                ChallengeId(16),
                EntryUpdate::MalId {
                    value: "40".to_string(),
                },
            )
            .expect("entry updates");
        assert_eq!(service.reset(), 192);
        let entry = service.entry(ChallengeId(16)).expect("entry exists");
        assert!(entry.mal_id.is_empty());
    }

    #[test]
    fn sync_keeps_edits() {
        let service = SheetService::new(&engine_config());
        service
            .update(
                ChallengeId(16),
                EntryUpdate::MalId {
                    value: "40".to_string(),
                },
            )
            .expect("entry updates");
        assert_eq!(service.sync(), 192);
        let entry = service.entry(ChallengeId(16)).expect("entry exists");
        assert_eq!(entry.mal_id, "40");
    }
}

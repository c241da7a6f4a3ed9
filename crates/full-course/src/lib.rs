//! Rule engine for a fixed-menu anime watching challenge. A static catalog
//! pairs thirty themed "courses" with 192 numbered challenges; users fill
//! one entry per challenge and the engine reports, criterion by criterion,
//! whether the recorded anime satisfies everything the pairing demands.

pub mod catalog;
pub mod course;
pub mod eligibility;
pub mod entry;
pub mod evaluate;
pub mod lookup;
pub mod record;
pub mod rules;
pub mod settings;

pub use catalog::{Catalog, ChallengeSpec, CourseSpec, ParamKind, ParamSpec};
pub use course::{CourseGroup, CourseId};
pub use eligibility::{active_courses, filter_to_active};
pub use entry::{
    criterion_key, generate_entries, merge_entries, ChallengeEntry, ChallengeId, ChallengeSet,
    EntryUpdate, ExtraInfoField, ManualCriterion, UpdateError,
};
pub use evaluate::{evaluate, Verdict};
pub use lookup::{LookupError, MetadataLookup, RefreshRunner, RefreshSummary};
pub use record::{duration_to_minutes, AiredDate, Airing, AnimeRecord, ListStatusBreakdown};
pub use settings::{CourseChoice, CourseSelection, SettingsError, UserSettings};

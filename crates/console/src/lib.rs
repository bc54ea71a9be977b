//! Programmatic API of the Eva configuration console.
//!
//! Each engine owns one slice of console state and exposes the operations
//! the presentation layer calls: ordered rule lists per optimization
//! section, the AI decision table (filter, paginate, select, revert),
//! bidding settings, first-run onboarding, and the campaign-scope picker.
//! Engines load from a shared [`eva_store::KeyValueStore`], mutate in
//! memory, write through on every change, and report successes through a
//! [`notify::Notifier`].

pub mod config;
pub mod decisions;
pub mod notify;
pub mod onboarding;
pub mod rules;
pub mod scopes;
pub mod session;
pub mod settings;

pub use config::ConsoleConfig;
pub use decisions::DecisionTable;
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use onboarding::OnboardingFlow;
pub use rules::RuleListManager;
pub use scopes::ScopeSession;
pub use session::ConsoleSession;
pub use settings::SettingsManager;

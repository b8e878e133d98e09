//! Contains the command handlers invoked by the shell.
//!
//! Each handler validates its input, runs the corresponding core engine and
//! reports through the `EventProxy`. The confirmation gate for destructive
//! commands lives in the shell and must have passed before these run.

use super::events::UserEvent;
use super::proxy::EventProxy;
use super::state::AppState;
use crate::core::{DeletionEngine, FilterCriteria, LibraryScanner};

/// Scans the current root, stores the match list and reports it.
pub fn scan<P: EventProxy>(state: &mut AppState, criteria: &FilterCriteria, proxy: &P) {
    let Some(root) = state.current_path.clone() else {
        proxy.send_event(UserEvent::Error("No beatmap directory selected.".to_string()));
        return;
    };

    let scanner = LibraryScanner::new(state.config.inspector());
    match scanner.scan(&root, criteria, |progress| {
        proxy.send_event(UserEvent::ScanProgress(progress));
    }) {
        Ok(matches) => {
            state.last_matches = matches.clone();
            proxy.send_event(UserEvent::ScanComplete(matches));
        }
        Err(err) => proxy.send_event(UserEvent::Error(err.to_string())),
    }
}

/// Deletes the given targets, or every folder from the last scan when
/// `targets` is empty. Folders that vanish are pruned from the stored match
/// list so the presenter never shows stale entries.
pub fn delete_matching<P: EventProxy>(
    state: &mut AppState,
    targets: &[String],
    criteria: &FilterCriteria,
    proxy: &P,
) {
    let Some(root) = state.current_path.clone() else {
        proxy.send_event(UserEvent::Error("No beatmap directory selected.".to_string()));
        return;
    };

    let targets = if targets.is_empty() {
        state.last_matches.clone()
    } else {
        targets.to_vec()
    };

    let engine = DeletionEngine::new(state.config.inspector());
    let outcome = engine.delete_matching(&root, &targets, criteria);

    state.last_matches.retain(|name| root.join(name).is_dir());
    proxy.send_event(UserEvent::DeletionComplete(outcome));
}

/// Deletes video files from the given targets (or the last scan's matches),
/// leaving the folders themselves in place.
pub fn delete_videos<P: EventProxy>(state: &mut AppState, targets: &[String], proxy: &P) {
    let Some(root) = state.current_path.clone() else {
        proxy.send_event(UserEvent::Error("No beatmap directory selected.".to_string()));
        return;
    };

    let targets = if targets.is_empty() {
        state.last_matches.clone()
    } else {
        targets.to_vec()
    };

    let engine = DeletionEngine::new(state.config.inspector());
    let outcome = engine.delete_videos(&root, &targets);
    proxy.send_event(UserEvent::DeletionComplete(outcome));
}

/// Reports library-wide folder and descriptor counts.
pub fn stats<P: EventProxy>(state: &AppState, proxy: &P) {
    let Some(root) = state.current_path.clone() else {
        proxy.send_event(UserEvent::Error("No beatmap directory selected.".to_string()));
        return;
    };

    let scanner = LibraryScanner::new(state.config.inspector());
    proxy.send_event(UserEvent::StatsReady(scanner.stats(&root)));
}

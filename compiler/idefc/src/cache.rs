//! Per-path memoisation for one generation run.
//!
//! Many templates read the same definition file. A [`GenerationCache`]
//! builds the semantic model, the table and the permutations for a path
//! at most once, whichever template asks first, and hands out shared
//! results afterwards. Failures are cached too.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use idef_diagnostic::Diagnostic;
use idef_sem::Sem;
use idef_table::{IntrinsicTable, Permutation, Permuter, PermuterConfig};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::{Session, SourceLoader};

/// A cached result: shared value or shared diagnostics.
pub type Built<T> = Result<Arc<T>, Arc<[Diagnostic]>>;

#[derive(Default)]
struct Entry {
    sem: Option<Built<Sem>>,
    table: Option<Built<IntrinsicTable>>,
    permutations: Option<Built<Vec<Permutation>>>,
}

pub struct GenerationCache<L> {
    session: Mutex<Session<L>>,
    config: PermuterConfig,
    entries: Mutex<FxHashMap<PathBuf, Arc<Mutex<Entry>>>>,
}

impl<L: SourceLoader> GenerationCache<L> {
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, PermuterConfig::default())
    }

    pub fn with_config(loader: L, config: PermuterConfig) -> Self {
        GenerationCache {
            session: Mutex::new(Session::new(loader)),
            config,
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Run `f` with the underlying session, e.g. to build an emitter.
    pub fn with_session<R>(&self, f: impl FnOnce(&Session<L>) -> R) -> R {
        f(&self.session.lock())
    }

    fn entry(&self, path: &Path) -> Arc<Mutex<Entry>> {
        let key = self.session.lock().loader().canonical(path);
        Arc::clone(self.entries.lock().entry(key).or_default())
    }

    /// The semantic model of `path` and its imports.
    pub fn sem(&self, path: &Path) -> Built<Sem> {
        let entry = self.entry(path);
        let mut entry = entry.lock();
        self.sem_locked(path, &mut entry)
    }

    /// The intrinsic table of `path`.
    pub fn table(&self, path: &Path) -> Built<IntrinsicTable> {
        let entry = self.entry(path);
        let mut entry = entry.lock();
        if let Some(table) = &entry.table {
            return table.clone();
        }
        let table = self.sem_locked(path, &mut entry).and_then(|sem| {
            idef_table::build_table_with(&sem, self.config)
                .map(Arc::new)
                .map_err(|errors| {
                    errors
                        .into_iter()
                        .map(idef_table::BuildError::into_diagnostic)
                        .collect()
                })
        });
        entry.table = Some(table.clone());
        table
    }

    /// Every permutation of every overload of `path`, in overload order.
    pub fn permutations(&self, path: &Path) -> Built<Vec<Permutation>> {
        let entry = self.entry(path);
        let mut entry = entry.lock();
        if let Some(permutations) = &entry.permutations {
            return permutations.clone();
        }
        let permutations = self.sem_locked(path, &mut entry).and_then(|sem| {
            let permuter = Permuter::with_config(&sem, self.config);
            let mut all = Vec::new();
            let mut errors = Vec::new();
            for overload in sem.overloads() {
                match permuter.permute(overload) {
                    Ok(permutations) => all.extend(permutations),
                    Err(e) => errors.push(e.into_diagnostic()),
                }
            }
            if errors.is_empty() {
                Ok(Arc::new(all))
            } else {
                Err(errors.into())
            }
        });
        entry.permutations = Some(permutations.clone());
        permutations
    }

    fn sem_locked(&self, path: &Path, entry: &mut Entry) -> Built<Sem> {
        if let Some(sem) = &entry.sem {
            return sem.clone();
        }
        tracing::debug!(path = %path.display(), "building semantic model");
        let sem = self
            .session
            .lock()
            .resolve(path)
            .map(Arc::new)
            .map_err(Arc::from);
        entry.sem = Some(sem.clone());
        sem
    }
}

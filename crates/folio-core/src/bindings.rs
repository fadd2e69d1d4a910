//! The variable surface of the REPL: one read-only accessor per profile
//! section, each evaluated on every lookup.

use crate::error::Result;
use crate::fields::FieldKind;
use crate::render;
use crate::store::{ProfileFetcher, ProfileStore};

/// Maps variable names to their values. Every lookup re-runs the full
/// staleness-check, refresh-if-needed, format cycle, so two reads of the
/// same variable can differ when a refresh happened in between. There is no
/// assignment; the variables are views over the cached document.
pub struct ProfileVars<F> {
    store: ProfileStore<F>,
}

impl<F: ProfileFetcher> ProfileVars<F> {
    pub fn new(store: ProfileStore<F>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ProfileStore<F> {
        &self.store
    }

    /// The variable names, in declaration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        FieldKind::ALL.into_iter().map(FieldKind::var_name)
    }

    /// Resolve a user-typed variable name. `None` means the name is not one
    /// of the profile variables (the caller decides what that input was).
    pub async fn resolve(&self, name: &str) -> Option<Result<String>> {
        let field = FieldKind::from_name(name)?;
        Some(self.value(field).await)
    }

    /// Value of one section: staleness check, optional refresh, then format.
    pub async fn value(&self, field: FieldKind) -> Result<String> {
        let record = self.store.get_or_refresh().await?;
        Ok(render::format_field(field, &record.document))
    }
}

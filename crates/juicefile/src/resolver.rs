//! Command resolver: turns a command name plus arguments into shell commands.

use crate::error::Result;
use crate::placeholder::substitute;
use crate::template::TemplateStore;

/// Dispatches arbitrary command names through a [`TemplateStore`].
///
/// Any name present in the Juicefile is callable; nothing is hard-coded here.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    store: TemplateStore,
}

impl Resolver {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// The underlying template store.
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Resolve every step of `name` against `args`.
    ///
    /// Resolution is all-or-nothing: if any step references an argument that
    /// was not supplied, the error for that step is returned and no commands
    /// are produced.
    pub fn invoke<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Result<Vec<String>> {
        let template = self.store.resolve_template(name)?;
        template
            .steps()
            .iter()
            .map(|step| substitute(step, args))
            .collect()
    }
}

impl From<TemplateStore> for Resolver {
    fn from(store: TemplateStore) -> Self {
        Self::new(store)
    }
}

//! Short code assignment, resolution, and removal.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::entities::MappingSet;
use crate::domain::errors::{AssignError, StoreError};
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::generate_code;

/// Default cap on random draws before giving up with
/// [`AssignError::CodeSpaceExhausted`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Source of candidate short codes.
pub type CodeGenerator = fn() -> String;

/// Service deciding which short code a URL is bound to.
///
/// Every call loads a fresh snapshot from the repository. Mutating calls
/// hold an internal write lock across load, mutate, and save so concurrent
/// requests within this process cannot overwrite each other's changes.
pub struct LinkService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    write_lock: Mutex<()>,
    generator: CodeGenerator,
    max_attempts: usize,
}

impl<R: MappingRepository + ?Sized> LinkService<R> {
    /// Creates a new link service using the secure random generator.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
            generator: generate_code,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the code generator.
    pub fn with_generator(mut self, generator: CodeGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the maximum number of random draws per assignment (at least 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Binds `target` to a short code and returns the code.
    ///
    /// # Code Selection
    ///
    /// - With a `custom_code`, the trimmed code is the candidate. If it is
    ///   already bound the request is rejected; no alternative is generated.
    ///   A whitespace-only custom code counts as absent.
    /// - Without one, random codes are drawn until one is free, up to the
    ///   configured attempt limit.
    ///
    /// # Deduplication
    ///
    /// If `target` (exact string match) is already bound, its existing code is
    /// returned and the candidate is discarded. This also applies when a custom
    /// code was requested: the caller receives the old code, not theirs.
    ///
    /// # Errors
    ///
    /// - [`AssignError::EmptyTarget`] if `target` is empty
    /// - [`AssignError::CodeAlreadyTaken`] if the custom code is bound
    /// - [`AssignError::CodeSpaceExhausted`] if every draw collided
    /// - [`AssignError::Store`] if loading or saving fails
    pub async fn assign(
        &self,
        target: &str,
        custom_code: Option<&str>,
    ) -> Result<String, AssignError> {
        if target.is_empty() {
            return Err(AssignError::EmptyTarget);
        }

        let _guard = self.write_lock.lock().await;
        let mut mappings = self.repository.load().await?;

        let custom_code = custom_code.map(str::trim).filter(|c| !c.is_empty());
        let candidate = match custom_code {
            Some(custom) => {
                if mappings.contains_code(custom) {
                    warn!(code = custom, "Custom code already taken");
                    return Err(AssignError::CodeAlreadyTaken(custom.to_string()));
                }
                custom.to_string()
            }
            None => self.draw_free_code(&mappings)?,
        };

        if let Some(existing) = mappings.find_code_for(target) {
            if custom_code.is_some() {
                info!(
                    requested = %candidate,
                    existing,
                    target,
                    "Target already shortened, ignoring requested custom code"
                );
            } else {
                debug!(code = existing, target, "Target already shortened");
            }
            return Ok(existing.to_string());
        }

        mappings.insert(candidate.clone(), target);
        self.repository.save(&mappings).await?;

        info!(code = %candidate, target, "Short code bound");
        Ok(candidate)
    }

    /// Returns the target bound to `code`, if any.
    ///
    /// # Errors
    ///
    /// Propagates repository load failures.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, StoreError> {
        let mappings = self.repository.load().await?;
        Ok(mappings.get(code).map(str::to_string))
    }

    /// Returns a snapshot of every mapping.
    ///
    /// # Errors
    ///
    /// Propagates repository load failures.
    pub async fn list(&self) -> Result<MappingSet, StoreError> {
        self.repository.load().await
    }

    /// Removes the mapping for `code`.
    ///
    /// Returns `Ok(false)` if the code was unknown; nothing is written then.
    ///
    /// # Errors
    ///
    /// Propagates repository load and save failures.
    pub async fn remove(&self, code: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut mappings = self.repository.load().await?;

        let Some(target) = mappings.remove(code) else {
            debug!(code, "Delete requested for unknown code");
            return Ok(false);
        };

        self.repository.save(&mappings).await?;

        info!(code, target = %target, "Short code deleted");
        Ok(true)
    }

    /// Draws random codes until one is not bound in `mappings`.
    fn draw_free_code(&self, mappings: &MappingSet) -> Result<String, AssignError> {
        for attempt in 1..=self.max_attempts {
            let code = (self.generator)();

            if !mappings.contains_code(&code) {
                return Ok(code);
            }

            debug!(code = %code, attempt, "Generated code collided, redrawing");
        }

        error!(
            attempts = self.max_attempts,
            mappings = mappings.len(),
            "Exhausted short code draws"
        );
        Err(AssignError::CodeSpaceExhausted(self.max_attempts))
    }
}

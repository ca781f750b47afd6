use nanoid_entropy::{OsRandom, RandomSource};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::alphabet::{Alphabet, DEFAULT_LENGTH};
use crate::error::Result;
use crate::generate::{mask, sample, step, validate};
use crate::{Generator, NanoId};

/// Configures a [`NanoIdGenerator`].
///
/// Missing fields fall back to the default alphabet and length, both when
/// built in code and when deserialized from a config file.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    #[builder(default, setter(into))]
    pub alphabet: Alphabet,
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Generates ids with fixed settings from a shared random source.
///
/// Settings are validated once at construction, so producing an id cannot
/// fail. The source sits behind a mutex, which lets a single generator be
/// shared across threads even when the source itself is stateful.
pub struct NanoIdGenerator<R> {
    settings: GeneratorSettings,
    source: Mutex<R>,
}

impl NanoIdGenerator<OsRandom> {
    /// Creates a generator backed by operating system randomness.
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        Self::with_source(settings, OsRandom::new())
    }
}

impl<R: RandomSource> NanoIdGenerator<R> {
    pub fn with_source(settings: GeneratorSettings, source: R) -> Result<Self> {
        validate(settings.alphabet.as_slice(), settings.length)?;

        let size = settings.alphabet.len();
        let mask = mask(size);
        debug!(
            alphabet_size = size,
            length = settings.length,
            mask,
            step = step(mask, size, settings.length),
            "created nanoid generator"
        );

        Ok(Self {
            settings,
            source: Mutex::new(source),
        })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates the next id.
    pub fn next_id(&self) -> NanoId {
        // A panic while holding the lock cannot leave the source in a state
        // that produces anything other than more bytes.
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        sample(
            self.settings.alphabet.as_slice(),
            self.settings.length,
            &mut *source,
        )
    }

    /// Consumes the generator and returns its random source.
    pub fn into_source(self) -> R {
        self.source
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> std::fmt::Debug for NanoIdGenerator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NanoIdGenerator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl<R: RandomSource + Send + 'static> Generator for NanoIdGenerator<R> {
    type Output = NanoId;

    fn generate(&self) -> Self::Output {
        self.next_id()
    }
}

//! Word decomposer: the whole pipeline behind one call

use std::sync::Arc;

use crate::api::config::RuleSource;
use crate::api::{Config, Decomposition, Error, WordRecord};
use crate::domain::{
    ConsonantExtractor, Fallback, LetterSyllableAligner, Romanizer, RootField, RootIsolator,
    SyllableSegmenter,
};
use crate::script::{get_rules, ScriptRules};
use crate::types::HebrewWord;

/// Runs extraction, romanization, prefix isolation, segmentation and
/// alignment for words.
///
/// Holds only immutable tables, so one decomposer can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct WordDecomposer {
    rules: Arc<ScriptRules>,
    extractor: ConsonantExtractor,
    segmenter: SyllableSegmenter,
    aligner: LetterSyllableAligner,
    separator: String,
    config: Config,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl WordDecomposer {
    /// Create a decomposer with the embedded Hebrew rules
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Create a decomposer with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let rules = match config.rules() {
            RuleSource::Embedded(code) => get_rules(code)?,
            RuleSource::File(path) => Arc::new(ScriptRules::from_file(path)?),
        };
        Self::with_rules(rules, config)
    }

    /// Create a decomposer from already compiled rules. The rule source in
    /// `config` is ignored.
    pub fn with_rules(rules: Arc<ScriptRules>, config: Config) -> Result<Self, Error> {
        config.validate()?;

        let extractor = ConsonantExtractor::with_marks(rules.preserved_marks().to_vec());
        let segmenter = SyllableSegmenter::new().with_explicit_breaks(config.explicit_breaks);
        let separator = config
            .separator
            .clone()
            .unwrap_or_else(|| rules.romanization().separator().to_string());

        #[cfg(feature = "parallel")]
        let pool = match config.threads {
            Some(threads) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        Error::Configuration(format!("failed to build thread pool: {e}"))
                    })?,
            )),
            None => None,
        };

        Ok(Self {
            rules,
            extractor,
            segmenter,
            aligner: LetterSyllableAligner::new(),
            separator,
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    /// Rules in use
    pub fn rules(&self) -> &ScriptRules {
        &self.rules
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decompose one word. Never fails; degraded results carry fallbacks.
    pub fn decompose(&self, word: &HebrewWord) -> Decomposition {
        let romanizer = Romanizer::new(self.rules.romanization());

        let consonants = self.extractor.extract(word.surface_text());
        let romanization = romanizer.romanize_with(&consonants, &self.separator);
        let mut fallbacks: Vec<Fallback> = romanizer
            .unknown_units(&consonants)
            .into_iter()
            .map(|unit| Fallback::UnknownConsonant {
                unit: unit.to_string(),
            })
            .collect();

        let isolated = RootIsolator::new(self.rules.prefixes(), &self.extractor).isolate(word);
        fallbacks.extend(Fallback::from_prefix_outcome(&isolated.outcome));

        let root = word
            .root_field()
            .and_then(|field| RootField::parse(field, &self.extractor));
        if let Some(root) = root.as_ref().filter(|r| !r.is_well_formed()) {
            fallbacks.push(Fallback::UnparsedRootField {
                field: word.root_field().unwrap_or(&root.written).to_string(),
            });
        }
        let root_romanization = root
            .as_ref()
            .filter(|r| !r.letters.is_empty())
            .map(|r| romanizer.romanize_with(&r.letters, &self.separator));

        if isolated.pronunciation.is_empty() {
            fallbacks.push(Fallback::EmptyPronunciation);
        } else if !SyllableSegmenter::has_stress_mark(&isolated.pronunciation) {
            fallbacks.push(Fallback::MissingStressMarker);
        }

        let syllables = self.segmenter.segment(&isolated.pronunciation);
        let groups = self.aligner.align(&isolated.letters, &syllables);

        tracing::trace!(
            surface = word.surface_text(),
            letters = isolated.letters.len(),
            syllables = syllables.len(),
            fallbacks = fallbacks.len(),
            "decomposed word"
        );

        Decomposition {
            surface_text: word.surface_text().to_string(),
            consonants,
            romanization,
            isolated,
            root,
            root_romanization,
            syllables,
            groups,
            fallbacks,
        }
    }

    /// Decompose a stored record
    pub fn decompose_record(&self, record: &WordRecord) -> Decomposition {
        self.decompose(&record.to_word())
    }

    /// Decompose many words; output order matches input order
    pub fn decompose_batch(&self, words: &[HebrewWord]) -> Vec<Decomposition> {
        tracing::debug!(count = words.len(), "decomposing batch");
        self.map_batch(words, |word| self.decompose(word))
    }

    /// Decompose many records; output order matches input order
    pub fn decompose_records(&self, records: &[WordRecord]) -> Vec<Decomposition> {
        tracing::debug!(count = records.len(), "decomposing records");
        self.map_batch(records, |record| self.decompose_record(record))
    }

    #[cfg(feature = "parallel")]
    fn map_batch<T, F>(&self, items: &[T], f: F) -> Vec<Decomposition>
    where
        T: Sync,
        F: Fn(&T) -> Decomposition + Sync + Send,
    {
        use rayon::prelude::*;

        let run = || -> Vec<Decomposition> { items.par_iter().map(&f).collect() };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn map_batch<T, F>(&self, items: &[T], f: F) -> Vec<Decomposition>
    where
        F: Fn(&T) -> Decomposition,
    {
        items.iter().map(f).collect()
    }
}

//! TF-IDF cosine similarity over a two-document corpus.
//!
//! Vocabulary and document frequencies come only from the pair being compared,
//! so IDF measures term rarity within this one comparison.

use std::collections::{BTreeMap, BTreeSet};

use crate::scoring::stop_words::is_stop_word;

/// Lowercases `text` and splits it into terms: maximal runs of word
/// characters at least two characters long, with stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

fn term_counts(tokens: &[String]) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`.
fn smoothed_idf(n_docs: usize, doc_freq: usize) -> f64 {
    ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// L2-normalized TF-IDF vectors for every document, indexed by vocabulary term.
fn tfidf_vectors<'a>(docs: &'a [Vec<String>]) -> Vec<BTreeMap<&'a str, f64>> {
    let counts: Vec<BTreeMap<&str, f64>> = docs.iter().map(|d| term_counts(d)).collect();

    let vocabulary: BTreeSet<&str> = counts.iter().flat_map(|c| c.keys().copied()).collect();
    let idf: BTreeMap<&str, f64> = vocabulary
        .iter()
        .map(|term| {
            let df = counts.iter().filter(|c| c.contains_key(term)).count();
            (*term, smoothed_idf(docs.len(), df))
        })
        .collect();

    counts
        .into_iter()
        .map(|doc| {
            let mut weighted: BTreeMap<&str, f64> = doc
                .into_iter()
                .map(|(term, tf)| (term, tf * idf[term]))
                .collect();
            let norm = weighted.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                weighted.values_mut().for_each(|w| *w /= norm);
            }
            weighted
        })
        .collect()
}

/// Cosine similarity between `skills_text` and `job_text` under TF-IDF
/// weighting restricted to the two documents, clamped to `[0, 1]`.
///
/// Returns 0.0 without vectorizing when the job text is absent or blank,
/// and 0.0 when either document has no terms left after stop-word removal.
pub fn skill_match_tfidf(skills_text: &str, job_text: Option<&str>) -> f64 {
    let job_text = match job_text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return 0.0,
    };

    let docs = [tokenize(skills_text), tokenize(job_text)];
    if docs.iter().any(Vec::is_empty) {
        return 0.0;
    }

    let vectors = tfidf_vectors(&docs);
    let (skills, job) = (&vectors[0], &vectors[1]);
    let similarity: f64 = skills
        .iter()
        .filter_map(|(term, w)| job.get(term).map(|v| w * v))
        .sum();

    if similarity.is_finite() {
        similarity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

use crate::models::dashboard::LanguageCount;
use crate::models::repository::Repository;

const MAX_LANGUAGES: usize = 6;

/// Frequency of primary languages across the collected repositories, most
/// common first, capped at six. Repositories without a detected language
/// are skipped. Equal counts keep first-appearance order, so the output is
/// deterministic for a given repository list.
pub fn aggregate_languages(repos: &[Repository]) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = Vec::new();

    for repo in repos {
        if repo.language.is_empty() {
            continue;
        }
        match counts.iter_mut().find(|entry| entry.name == repo.language) {
            Some(entry) => entry.count += 1,
            None => counts.push(LanguageCount {
                name: repo.language.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_LANGUAGES);
    counts
}

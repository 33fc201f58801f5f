use crate::model::MatchedEntity;
use crate::paths::file_name_of;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use rayon::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub score: i64,
    /// Character positions in the candidate that matched.
    pub highlight: Vec<usize>,
}

pub trait Scorer: Send + Sync {
    fn score(&self, query: &str, candidate: &str) -> MatchScore;
}

#[derive(Default)]
pub struct SkimScorer {
    matcher: SkimMatcherV2,
}

impl SkimScorer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scorer for SkimScorer {
    fn score(&self, query: &str, candidate: &str) -> MatchScore {
        let query = query.trim();
        if query.is_empty() {
            return MatchScore::default();
        }
        self.matcher
            .fuzzy_indices(candidate, query)
            .map(|(score, highlight)| MatchScore { score, highlight })
            .unwrap_or_default()
    }
}

/// Scores `entities` by file name against `query`, keeping only matches, best
/// first. An empty query keeps everything with score 0.
pub fn rank_entities(
    scorer: &dyn Scorer,
    query: &str,
    entities: Vec<MatchedEntity>,
    limit: usize,
) -> Vec<MatchedEntity> {
    if limit == 0 {
        return Vec::new();
    }
    let query = query.trim();
    if query.is_empty() {
        return entities.into_iter().take(limit).collect();
    }

    let mut scored: Vec<MatchedEntity> = entities
        .into_par_iter()
        .filter_map(|mut entity| {
            let name = file_name_of(&entity.full_path);
            let candidate = if name.is_empty() {
                entity.full_path.as_str()
            } else {
                name
            };
            let matched = scorer.score(query, candidate);
            if matched.highlight.is_empty() {
                return None;
            }
            entity.score = u32::try_from(matched.score.max(0)).unwrap_or(u32::MAX);
            Some(entity)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.full_path.cmp(&b.full_path))
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityKind;

    #[test]
    fn empty_query_has_no_highlight() {
        let scorer = SkimScorer::new();
        assert_eq!(scorer.score("  ", "main.rs"), MatchScore::default());
    }

    #[test]
    fn fuzzy_match_reports_positions() {
        let scorer = SkimScorer::new();
        let matched = scorer.score("mrs", "main.rs");
        assert!(matched.score > 0);
        assert_eq!(matched.highlight.first(), Some(&0));
        assert_eq!(matched.highlight.len(), 3);
    }

    #[test]
    fn non_match_scores_zero() {
        let scorer = SkimScorer::new();
        assert_eq!(scorer.score("xyz", "main.rs"), MatchScore::default());
    }

    #[test]
    fn ranking_drops_misses_and_orders_by_score() {
        let scorer = SkimScorer::new();
        let entities = vec![
            MatchedEntity::new(EntityKind::File, "/tmp/src/readme.md", 0),
            MatchedEntity::new(EntityKind::File, "/tmp/src/main.py", 0),
            MatchedEntity::new(EntityKind::File, "/tmp/src/amain.py", 0),
        ];
        let ranked = rank_entities(&scorer, "main", entities, 10);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].full_path.ends_with("main.py"));
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn ranking_respects_limit() {
        let scorer = SkimScorer::new();
        let entities = vec![
            MatchedEntity::new(EntityKind::File, "/a/one.txt", 0),
            MatchedEntity::new(EntityKind::File, "/a/two.txt", 0),
        ];
        assert_eq!(rank_entities(&scorer, "", entities.clone(), 1).len(), 1);
        assert!(rank_entities(&scorer, "txt", entities, 0).is_empty());
    }
}

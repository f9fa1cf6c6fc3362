//! Recommendation lookup for an explicit emotion label.

use moodtune_common::config::AppConfig;
use moodtune_recommend::PlaylistRecommender;

pub fn run(
    config: &AppConfig,
    emotion: &str,
    no_search: bool,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(config.session.search_limit);

    let recommender = if no_search {
        PlaylistRecommender::disabled(limit)
    } else {
        PlaylistRecommender::from_env(limit)
    };

    let recommendation = recommender.recommend(emotion);
    super::print_recommendation(&recommendation);
    Ok(())
}

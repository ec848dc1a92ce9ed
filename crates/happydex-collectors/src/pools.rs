//! Sources without a free public API, served from fixed pools.

use happydex_core::Source;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::Value;

use crate::types::CollectedPost;

const TREND_KEYWORDS: &[&str] = &[
    "happy",
    "sad",
    "depression",
    "anxiety",
    "joy",
    "celebration",
    "mental health",
    "wellness",
    "stress",
    "vacation",
    "holiday",
    "birthday",
    "wedding",
    "graduation",
    "promotion",
    "success",
];

const YOUTUBE_COMMENTS: &[&str] = &[
    "This is amazing! Made my day so much better 😊",
    "Really disappointing to see this happening again",
    "I love how this turned out, incredible work!",
    "Not sure how I feel about this trend",
    "This gives me so much hope for the future",
    "Feeling pretty anxious about these changes",
    "What a beautiful moment, thanks for sharing",
    "This is exactly what we needed right now",
];

const YOUTUBE_URLS: &[&str] = &[
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "https://www.youtube.com/watch?v=fC7oUOUEEi4",
    "https://www.youtube.com/watch?v=L_jWHffIx5E",
    "https://www.youtube.com/watch?v=kffacxfA7G4",
    "https://www.youtube.com/watch?v=ZZ5LpwO-An4",
    "https://www.youtube.com/watch?v=hFZFjoX2cGg",
    "https://www.youtube.com/watch?v=Ct6BUPvE2sM",
    "https://www.youtube.com/watch?v=uelHwf8o7_U",
];

const NEWS_HEADLINES: &[&str] = &[
    "Breakthrough in renewable energy technology brings hope for climate goals",
    "Global markets show mixed results amid economic uncertainty",
    "Community comes together to support local families in need",
    "Scientists make promising discovery in medical research",
    "Tensions rise in international trade discussions",
    "Record-breaking achievements in space exploration mission",
    "New policies aim to improve public healthcare access",
    "Environmental concerns grow over industrial expansion",
];

const NEWS_URLS: &[&str] = &[
    "https://www.bbc.com/news",
    "https://www.cnn.com/world",
    "https://www.reuters.com/science",
    "https://www.bbc.com/news/science-environment",
    "https://www.cnn.com/business",
    "https://www.reuters.com/technology",
    "https://www.bbc.com/news/health",
    "https://www.cnn.com/world/environment",
];

const TWEETS: &[&str] = &[
    "Just had the most incredible experience at the local farmers market! 🌟",
    "Really concerned about the direction things are heading lately",
    "Found the perfect book recommendation, absolutely loving it so far!",
    "Traffic is absolutely terrible today, running so late 😤",
    "Beautiful sunset tonight, needed this moment of peace",
    "Excited about the weekend plans with friends and family!",
    "Feeling overwhelmed with everything happening right now",
    "Just discovered this amazing new coffee shop, highly recommend!",
];

const FORUM_POSTS: &[&str] = &[
    "Finally solved that problem I've been working on for weeks! Such a relief",
    "Has anyone else noticed how stressful everything has become lately?",
    "Looking for recommendations for a good vacation spot this summer",
    "Really impressed with the community response to recent events",
    "Struggling to stay motivated with all the uncertainty around us",
    "Great discussion happening about sustainable living practices",
    "Feeling grateful for all the support from this community",
    "Anyone else feeling pessimistic about the economic outlook?",
];

const TRENDS_SAMPLE: usize = 3;
const YOUTUBE_SAMPLE: usize = 3;
const NEWS_SAMPLE: usize = 2;
const TWITTER_SAMPLE: usize = 2;
const FORUMS_SAMPLE: usize = 2;

/// Indices of `amount` distinct random entries of `pool`.
fn sample_indices(pool_len: usize, amount: usize) -> Vec<usize> {
    rand::seq::index::sample(&mut rand::rng(), pool_len, amount.min(pool_len)).into_vec()
}

/// Sentence describing a keyword's search interest.
fn trend_text(keyword: &str, interest: u32) -> String {
    if interest > 70 {
        format!("High search interest in '{keyword}' - people are actively seeking this")
    } else if interest > 30 {
        format!("Moderate search interest in '{keyword}'")
    } else {
        format!("Low search interest in '{keyword}'")
    }
}

pub(crate) fn google_trends() -> Vec<CollectedPost> {
    let mut rng = rand::rng();
    let keywords: Vec<&str> = TREND_KEYWORDS
        .choose_multiple(&mut rng, TRENDS_SAMPLE)
        .copied()
        .collect();
    keywords
        .into_iter()
        .map(|keyword| {
            let interest: u32 = rng.random_range(0..=100);
            CollectedPost::new(
                format!("trends_{}", keyword.replace(' ', "_")),
                Source::GoogleTrends,
                trend_text(keyword, interest),
            )
            .with_meta("keyword", keyword)
            .with_meta("interest_level", interest)
        })
        .collect()
}

pub(crate) fn youtube() -> Vec<CollectedPost> {
    sample_indices(YOUTUBE_COMMENTS.len(), YOUTUBE_SAMPLE)
        .into_iter()
        .map(|i| {
            CollectedPost::new(format!("youtube_{i}"), Source::Youtube, YOUTUBE_COMMENTS[i])
                .with_url(YOUTUBE_URLS[i % YOUTUBE_URLS.len()])
                .with_meta("video_title", format!("Trending Video {}", i + 1))
        })
        .collect()
}

pub(crate) fn news() -> Vec<CollectedPost> {
    sample_indices(NEWS_HEADLINES.len(), NEWS_SAMPLE)
        .into_iter()
        .map(|i| {
            CollectedPost::new(format!("news_{i}"), Source::News, NEWS_HEADLINES[i])
                .with_url(NEWS_URLS[i % NEWS_URLS.len()])
                .with_meta("category", "world")
        })
        .collect()
}

pub(crate) fn twitter() -> Vec<CollectedPost> {
    sample_indices(TWEETS.len(), TWITTER_SAMPLE)
        .into_iter()
        .map(|i| {
            CollectedPost::new(format!("twitter_{i}"), Source::Twitter, TWEETS[i])
                .with_meta("hashtags", Value::Array(Vec::new()))
        })
        .collect()
}

pub(crate) fn forums() -> Vec<CollectedPost> {
    sample_indices(FORUM_POSTS.len(), FORUMS_SAMPLE)
        .into_iter()
        .map(|i| {
            CollectedPost::new(format!("forum_{i}"), Source::Forums, FORUM_POSTS[i])
                .with_meta("forum", "public_discussion")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_distinct(posts: &[CollectedPost]) {
        let ids: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len(), "duplicate ids: {posts:?}");
    }

    #[test]
    fn trend_text_tiers() {
        assert!(trend_text("joy", 71).starts_with("High"));
        assert!(trend_text("joy", 70).starts_with("Moderate"));
        assert!(trend_text("joy", 31).starts_with("Moderate"));
        assert!(trend_text("joy", 30).starts_with("Low"));
    }

    #[test]
    fn trends_carry_keyword_and_interest() {
        let posts = google_trends();
        assert_eq!(posts.len(), TRENDS_SAMPLE);
        assert_distinct(&posts);
        for post in &posts {
            let keyword = post.metadata["keyword"].as_str().expect("keyword");
            assert!(TREND_KEYWORDS.contains(&keyword));
            assert!(post.text.contains(keyword));
            let interest = post.metadata["interest_level"].as_u64().expect("interest");
            assert!(interest <= 100);
        }
    }

    #[test]
    fn pools_sample_fixed_sizes() {
        let youtube = youtube();
        assert_eq!(youtube.len(), YOUTUBE_SAMPLE);
        assert_distinct(&youtube);
        assert!(youtube.iter().all(|p| p.url.is_some() && p.source == Source::Youtube));

        let news = news();
        assert_eq!(news.len(), NEWS_SAMPLE);
        assert!(news.iter().all(|p| p.metadata["category"] == "world"));

        let tweets = twitter();
        assert_eq!(tweets.len(), TWITTER_SAMPLE);
        assert!(tweets.iter().all(|p| p.url.is_none()));

        let forums = forums();
        assert_eq!(forums.len(), FORUMS_SAMPLE);
        assert!(forums.iter().all(|p| p.metadata["forum"] == "public_discussion"));
    }

    #[test]
    fn video_title_is_one_based() {
        for post in youtube() {
            let index: usize = post.id.trim_start_matches("youtube_").parse().expect("index");
            assert_eq!(post.metadata["video_title"], format!("Trending Video {}", index + 1));
        }
    }
}

//! Reddit public JSON listings with a canned fallback.

use futures::future::join_all;
use happydex_core::Source;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Deserialize;

use crate::error::CollectorError;
use crate::types::{CollectedPost, MIN_TEXT_CHARS};

pub(crate) const SUBREDDITS: &[&str] = &[
    "wholesomememes",
    "UpliftingNews",
    "happy",
    "MadeMeSmile",
    "todayilearned",
    "AskReddit",
    "funny",
    "GetMotivated",
    "aww",
    "HumansBeingBros",
];

const SUBREDDITS_PER_FETCH: usize = 3;
const LISTING_LIMIT: u32 = 5;
const FALLBACK_SAMPLE: usize = 6;
/// Posts returned per fetch.
const SAMPLE_SIZE: usize = 3;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: PostData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostData {
    id: String,
    title: String,
    selftext: String,
    score: i64,
    num_comments: i64,
    permalink: String,
}

/// Title and body joined the way readers see them.
fn combine(title: &str, selftext: &str) -> Option<String> {
    if title.is_empty() && selftext.is_empty() {
        return None;
    }
    let text = format!("{title}. {selftext}").trim().to_string();
    (text.chars().count() >= MIN_TEXT_CHARS).then_some(text)
}

fn to_post(data: PostData, subreddit: &str) -> Option<CollectedPost> {
    let text = combine(&data.title, &data.selftext)?;
    Some(
        CollectedPost::new(data.id, Source::Reddit, text)
            .with_url(format!("https://reddit.com{}", data.permalink))
            .with_meta("subreddit", subreddit)
            .with_meta("original_score", data.score)
            .with_meta("num_comments", data.num_comments),
    )
}

/// Newest posts of one subreddit.
///
/// # Errors
///
/// Returns [`CollectorError`] on transport failure, a non-2xx status, or an
/// unparseable body.
pub async fn fetch_subreddit(
    client: &reqwest::Client,
    base_url: &str,
    subreddit: &str,
    limit: u32,
) -> Result<Vec<CollectedPost>, CollectorError> {
    let endpoint = format!("{}/r/{subreddit}/new.json", base_url.trim_end_matches('/'));
    let response = client
        .get(&endpoint)
        .query(&[("limit", limit)])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CollectorError::UnexpectedStatus {
            endpoint,
            status: response.status().as_u16(),
        });
    }

    let listing: Listing = response.json().await?;
    Ok(listing
        .data
        .children
        .into_iter()
        .filter_map(|child| to_post(child.data, subreddit))
        .collect())
}

/// Up to [`SAMPLE_SIZE`] posts from three random subreddits.
///
/// Subreddit failures are logged and skipped. When nothing at all comes back
/// (Reddit often answers anonymous clients with 403) a canned pool is used.
pub(crate) async fn fetch_random(client: &reqwest::Client, base_url: &str) -> Vec<CollectedPost> {
    let picked: Vec<&str> = SUBREDDITS
        .choose_multiple(&mut rand::rng(), SUBREDDITS_PER_FETCH)
        .copied()
        .collect();

    let pages = join_all(picked.iter().map(|&subreddit| async move {
        (
            subreddit,
            fetch_subreddit(client, base_url, subreddit, LISTING_LIMIT).await,
        )
    }))
    .await;

    let mut posts = Vec::new();
    for (subreddit, page) in pages {
        match page {
            Ok(page) => posts.extend(page),
            Err(e) => {
                tracing::warn!(subreddit, error = %e, "reddit listing failed");
            }
        }
    }

    if posts.is_empty() {
        tracing::debug!("no live reddit posts; using fallback pool");
        posts = fallback_posts();
    }

    posts.shuffle(&mut rand::rng());
    posts.truncate(SAMPLE_SIZE);
    posts
}

/// `(subreddit, text, score range, comment range)`.
const FALLBACK: &[(&str, &str, (i64, i64), (i64, i64))] = &[
    (
        "wholesomememes",
        "Just had the most wholesome interaction with a stranger today! Sometimes humanity really restores your faith.",
        (50, 500),
        (10, 100),
    ),
    (
        "UpliftingNews",
        "Scientists discover new treatment that could help millions. This breakthrough could change everything we know about medical care.",
        (100, 800),
        (20, 150),
    ),
    (
        "MadeMeSmile",
        "This dog helped me through my toughest day. I cannot express how grateful I am for this little companion.",
        (30, 300),
        (5, 80),
    ),
    (
        "AskReddit",
        "Feeling overwhelmed with work and personal life lately. Does anyone else struggle with maintaining balance?",
        (10, 200),
        (15, 120),
    ),
    (
        "todayilearned",
        "TIL about an amazing historical discovery that changes everything we thought we knew about ancient civilizations.",
        (200, 1000),
        (50, 200),
    ),
    (
        "funny",
        "My cat did something absolutely hilarious today and I had to share it with everyone. Pet owners will understand!",
        (25, 400),
        (8, 90),
    ),
    (
        "HumansBeingBros",
        "Community comes together to help local family in need. Faith in humanity restored once again.",
        (100, 600),
        (30, 150),
    ),
    (
        "GetMotivated",
        "Finally achieved my long-term goal after years of hard work! Never give up on your dreams, everyone.",
        (80, 500),
        (25, 100),
    ),
    (
        "aww",
        "Look at this adorable rescue puppy we just adopted. She has already brought so much joy into our home.",
        (150, 800),
        (40, 200),
    ),
];

fn fallback_posts() -> Vec<CollectedPost> {
    let mut rng = rand::rng();
    let picked: Vec<_> = FALLBACK
        .choose_multiple(&mut rng, FALLBACK_SAMPLE)
        .copied()
        .collect();
    picked
        .into_iter()
        .map(|(subreddit, text, (score_lo, score_hi), (comments_lo, comments_hi))| {
            CollectedPost::new(
                format!("reddit_fb_{}", rng.random_range(1000..=9999)),
                Source::Reddit,
                text,
            )
            .with_url(format!("https://reddit.com/r/{subreddit}/comments/fake"))
            .with_meta("subreddit", subreddit)
            .with_meta("original_score", rng.random_range(score_lo..=score_hi))
            .with_meta("num_comments", rng.random_range(comments_lo..=comments_hi))
        })
        .collect()
}

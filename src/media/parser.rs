//! Extraction of resources and filenames from raw post records.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::fs::naming::sanitize_filename;
use crate::media::item::{Extraction, MediaType, Resource};

/// Apply a media type strategy to one post record.
///
/// Fails with [`Error::Extraction`] when a field the strategy needs is absent
/// or has the wrong shape. The caller treats that as a per-item failure and
/// moves on.
pub fn extract(media_type: MediaType, post: &Value) -> Result<Extraction> {
    let resource = match media_type {
        MediaType::Raw => Resource::Inline(serde_json::to_string(post)?),
        MediaType::Text => {
            let title = lookup_str(post, media_type, &["title"])?;
            let selftext = lookup_str(post, media_type, &["selftext"])?;
            Resource::Inline(format!("{}\n{}", title, selftext))
        }
        MediaType::Image => {
            let url = lookup_str(post, media_type, &["preview", "images", "0", "source", "url"])?;
            Resource::Remote(url.to_string())
        }
        MediaType::Video => {
            let is_video = lookup(post, media_type, &["is_video"])?
                .as_bool()
                .ok_or_else(|| field_error(media_type, &["is_video"]))?;
            // Live videos carry the stream under `media`; link posts only
            // expose a transcoded preview.
            let path: &[&str] = if is_video {
                &["media", "reddit_video", "fallback_url"]
            } else {
                &["preview", "reddit_video_preview", "fallback_url"]
            };
            Resource::Remote(lookup_str(post, media_type, path)?.to_string())
        }
    };

    let filename = filename_for(post, media_type)?;

    Ok(Extraction { resource, filename })
}

/// Compute the deterministic filename `{subreddit_id}_{id}.{ext}`.
fn filename_for(post: &Value, media_type: MediaType) -> Result<String> {
    let subreddit_id = lookup_str(post, media_type, &["subreddit_id"])?;
    let id = lookup_str(post, media_type, &["id"])?;

    let stem = sanitize_filename(&format!("{}_{}", subreddit_id, id))?;
    Ok(format!("{}.{}", stem, media_type.extension()))
}

/// Walk a field path into a post record. Numeric segments index into arrays.
fn lookup<'a>(post: &'a Value, media_type: MediaType, path: &[&str]) -> Result<&'a Value> {
    let mut current = post;

    for segment in path {
        let next = match segment.parse::<usize>() {
            Ok(index) => current.as_array().and_then(|items| items.get(index)),
            Err(_) => current.get(*segment),
        };

        current = next.ok_or_else(|| field_error(media_type, path))?;
    }

    Ok(current)
}

/// Walk a field path and require a string at the end of it.
fn lookup_str<'a>(post: &'a Value, media_type: MediaType, path: &[&str]) -> Result<&'a str> {
    lookup(post, media_type, path)?
        .as_str()
        .ok_or_else(|| field_error(media_type, path))
}

fn field_error(media_type: MediaType, path: &[&str]) -> Error {
    Error::Extraction {
        media: media_type.name(),
        message: format!("missing or invalid field '{}'", path.join(".")),
    }
}

//! Built-in sample datasets, served when the top-level comics or stories
//! directory is missing so a fresh checkout still renders something.

use chrono::{TimeZone, Utc};

use crate::content::model::{Comic, ComicsData, Series, StoriesData, Story};

pub fn sample_comics() -> ComicsData {
    let now = Utc::now();
    let comics = vec![
        Comic {
            number: 1,
            title: "The Coffee Incident".to_string(),
            filename: "01 - The Coffee Incident.jpg".to_string(),
            path: "/comics/Series 1/01 - The Coffee Incident.jpg".to_string(),
            thumbnail: None,
            extension: ".jpg".to_string(),
            file_size: 1_024_000,
            last_modified: now,
            series: "Series 1".to_string(),
        },
        Comic {
            number: 2,
            title: "3 AM Serenade".to_string(),
            filename: "02 - 3 AM Serenade.png".to_string(),
            path: "/comics/Series 1/02 - 3 AM Serenade.png".to_string(),
            thumbnail: None,
            extension: ".png".to_string(),
            file_size: 800_000,
            last_modified: now,
            series: "Series 1".to_string(),
        },
    ];
    ComicsData {
        last_updated: now,
        series: vec![Series {
            name: "Series 1".to_string(),
            path: "comics/Series 1/".to_string(),
            total_comics: comics.len(),
            last_updated: now,
            comics,
        }],
    }
}

pub fn sample_stories() -> StoriesData {
    let now = Utc::now();
    // The sample story predates mtime by a few centuries.
    let published = Utc
        .with_ymd_and_hms(1666, 9, 2, 0, 0, 0)
        .single()
        .unwrap_or(now);
    StoriesData {
        last_updated: now,
        stories: vec![Story {
            title: "The Great Fire of London".to_string(),
            author: "Unknown".to_string(),
            filename: "great-fire-london.txt".to_string(),
            path: "/stories/great-fire-london.txt".to_string(),
            description: "Max's perspective on the 1666 disaster. Spoiler: he didn't start it, \
                          but he definitely made it worse..."
                .to_string(),
            file_size: 5_000,
            last_modified: now,
            date: published,
        }],
    }
}

/// `utm_source` values identifying a video platform.
pub const UTM_SOURCES: &[&str] = &[
    "crackle",
    "curiositystream",
    "dailymotion",
    "disneyplus",
    "hulu",
    "iqiyi",
    "netflix",
    "ted",
    "twitch",
    "utreon",
    "veoh",
    "vimeo",
    "wistia",
    "youku",
    "youtube",
];

/// Video platform referring hosts.
pub const REFERRING_DOMAINS: &[&str] = &[
    "crackle.com",
    "curiositystream.com",
    "d.tube",
    "dailymotion.com",
    "disneyplus.com",
    "help.hulu.com",
    "hulu.com",
    "iq.com",
    "iqiyi.com",
    "viadeo.journaldunet.com",
    "justin.tv",
    "help.netflix.com",
    "jobs.netflix.com",
    "netflix.com",
    "ted.com",
    "blog.twitch.tv",
    "dashboard.twitch.tv",
    "id.twitch.tv",
    "m.twitch.tv",
    "player.twitch.tv",
    "twitch.tv",
    "utreon.com",
    "veoh.com",
    "player.vimeo.com",
    "vimeo.com",
    "wistia.com",
    "fast.wistia.net",
    "youku.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtube.com",
];

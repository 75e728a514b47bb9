/// `utm_source` values identifying a social network.
pub const UTM_SOURCES: &[&str] = &[
    "43things",
    "Hatena",
    "ImageShack",
    "activerain",
    "activeworlds",
    "addthis",
    "alumniclass",
    "americantowns",
    "anobii",
    "answerbag",
    "aolanswers",
    "askubuntu",
    "athlinks",
    "baby-gaga",
    "badoo",
    "bebo",
    "beforeitsnews",
    "bharatstudent",
    "blackplanet",
    "blogger",
    "blogher",
    "bloglines",
    "blogsome",
    "blogspot",
    "blogster",
    "blurtit",
    "brightkite",
    "brizzly",
    "buzzfeed",
    "buzznet",
    "cafemom",
    "camospace",
    "care2",
    "catster",
    "cellufun",
    "chicagonow",
    "classmates",
    "classquest",
    "cocolog-nifty",
    "cozycot",
    "crunchyroll",
    "cyworld",
    "deviantart",
    "dianping",
    "digg",
    "diigo",
    "disqus",
    "dogster",
    "dol2day",
    "doostang",
    "dopplr",
    "douban",
    "drugs-forum",
    "dzone",
    "elftown",
    "extole",
    "facebook",
    "faceparty",
    "fanpop",
    "fark",
    "fb",
    "fc2",
    "feedspot",
    "feministing",
    "filmaffinity",
    "flickr",
    "flipboard",
    "folkdirect",
    "foodservice",
    "fotki",
    "fotolog",
    "foursquare",
    "friendfeed",
    "fubar",
    "gaiaonline",
    "gamerdna",
    "glassboard",
    "glassdoor",
    "godtube",
    "goldstar",
    "gooblog",
    "goodreads",
    "google+",
    "googleplus",
    "govloop",
    "gowalla",
    "habbo",
    "hi5",
    "hootsuite",
    "houzz",
    "hoverspot",
    "hubculture",
    "ibibo",
    "ig",
    "imvu",
    "insanejournal",
    "instagram",
    "instapaper",
    "intherooms",
    "italki",
    "jammerdirect",
    "kakao",
    "kaneva",
    "librarything",
    "line",
    "linkedin",
    "listal",
    "listography",
    "livedoorblog",
    "livejournal",
    "meetup",
    "messenger",
    "mocospace",
    "mouthshut",
    "movabletype",
    "mubi",
    "myheritage",
    "mylife",
    "mymodernmet",
    "myspace",
    "netvibes",
    "newsshowcase",
    "nexopia",
    "niconico",
    "nightlifelink",
    "ning",
    "onstartups",
    "opendiary",
    "photobucket",
    "pinboard",
    "pingsta",
    "pinterest",
    "plurk",
    "posterous",
    "qapacity",
    "quechup",
    "quora",
    "ravelry",
    "reddit",
    "redux",
    "renren",
    "reunion",
    "reverbnation",
    "ryze",
    "salespider",
    "screenrant",
    "scribd",
    "scvngr",
    "secondlife",
    "serverfault",
    "shareit",
    "sharethis",
    "skype",
    "skyrock",
    "snapchat",
    "social",
    "socialvibe",
    "spoke",
    "spruz",
    "stackapps",
    "stackexchange",
    "stackoverflow",
    "stickam",
    "superuser",
    "sweeva",
    "tagged",
    "taggedmail",
    "talkbiznow",
    "techmeme",
    "tencent",
    "tiktok",
    "tinyurl",
    "toolbox",
    "travellerspoint",
    "tripadvisor",
    "trombi",
    "trustpilot",
    "tudou",
    "tuenti",
    "tumblr",
    "tweetdeck",
    "twitter",
    "typepad",
    "vampirefreaks",
    "vampirerave",
    "wakoopa",
    "wattpad",
    "webshots",
    "wechat",
    "weebly",
    "weibo",
    "weread",
    "whatsapp",
    "wordpress",
    "xanga",
    "xing",
    "yammer",
    "yelp",
    "zalo",
    "zooppa",
];

/// `utm_medium` values used for social posts.
pub const UTM_MEDIUMS: &[&str] = &[
    "sm",
    "social",
    "social media",
    "social network",
    "social-media",
    "social-network",
];

/// Social network referring hosts.
pub const REFERRING_DOMAINS: &[&str] = &[
    "43things.com",
    "51.com",
    "5ch.net",
    "academia.edu",
    "activerain.com",
    "activeworlds.com",
    "addthis.com",
    "airg.ca",
    "allnurses.com",
    "allrecipes.com",
    "alumniclass.com",
    "ameba.jp",
    "ameblo.jp",
    "americantowns.com",
    "ancestry.com",
    "forums.androidcentral.com",
    "anobii.com",
    "answerbag.com",
    "wiki.answers.com",
    "lifestream.aol.com",
    "aolanswers.com",
    "artstation.com",
    "askubuntu.com",
    "asmallworld.com",
    "athlinks.com",
    "awe.sm",
    "baby-gaga.com",
    "babyblog.ru",
    "badoo.com",
    "bebo.com",
    "beforeitsnews.com",
    "bharatstudent.com",
    "biip.no",
    "biswap.org",
    "bit.ly",
    "blackcareernetwork.com",
    "blackplanet.com",
    "blip.fm",
    "blog.com",
    "blogg.no",
    "bloggang.com",
    "blogger.com",
    "draft.blogger.com",
    "blogher.com",
    "bloglines.com",
    "blogs.com",
    "blogsome.com",
    "blogspot.com",
    "blogster.com",
    "blurtit.com",
    "brightkite.com",
    "brizzly.com",
    "buzzfeed.com",
    "buzznet.com",
    "cafemom.com",
    "camospace.com",
    "canalblog.com",
    "care.com",
    "care2.com",
    "caringbridge.org",
    "catster.com",
    "cbnt.io",
    "cellufun.com",
    "centerblog.net",
    "chegg.com",
    "chicagonow.com",
    "classmates.com",
    "classquest.com",
    "cocolog-nifty.com",
    "couchsurfing.org",
    "cozycot.com",
    "forums.crackberry.com",
    "cross.tv",
    "crunchyroll.com",
    "cyworld.com",
    "dailystrength.org",
    "deluxe.com",
    "deviantart.com",
    "dianping.com",
    "digg.com",
    "diigo.com",
    "disqus.com",
    "dogster.com",
    "dol2day.com",
    "doostang.com",
    "dopplr.com",
    "douban.com",
    "draugiem.lv",
    "drugs-forum.com",
    "dzone.com",
    "edublogs.org",
    "elftown.com",
    "epicurious.com",
    "everforo.com",
    "exblog.jp",
    "extole.com",
    "apps.facebook.com",
    "business.facebook.com",
    "facebook.com",
    "free.facebook.com",
    "l.facebook.com",
    "lm.facebook.com",
    "m.facebook.com",
    "mobile.facebook.com",
    "touch.facebook.com",
    "web.facebook.com",
    "faceparty.com",
    "fandom.com",
    "fanpop.com",
    "fark.com",
    "fb.me",
    "fc2.com",
    "blog.feedspot.com",
    "feministing.com",
    "filmaffinity.com",
    "flickr.com",
    "flipboard.com",
    "folkdirect.com",
    "foodservice.com",
    "fotki.com",
    "fotolog.com",
    "foursquare.com",
    "friendfeed.com",
    "fruehstueckstreff.org",
    "fubar.com",
    "gaiaonline.com",
    "gamerdna.com",
    "gather.com",
    "geni.com",
    "getpocket.com",
    "glassboard.com",
    "glassdoor.com",
    "godtube.com",
    "goldenline.pl",
    "goldstar.com",
    "goo.gl",
    "blog.goo.ne.jp",
    "oshiete.goo.ne.jp",
    "goodreads.com",
    "groups.google.com",
    "messages.google.com",
    "plus.google.com",
    "plus.url.google.com",
    "sites.google.com",
    "googlegroups.com",
    "govloop.com",
    "gowalla.com",
    "gree.jp",
    "gulli.com",
    "gutefrage.net",
    "habbo.com",
    "b.hatena.ne.jp",
    "d.hatena.ne.jp",
    "hi5.com",
    "pro.homeadvisor.com",
    "hootsuite.com",
    "houzz.com",
    "hoverspot.com",
    "hr.com",
    "hubculture.com",
    "discover.hubpages.com",
    "hubpages.com",
    "hyves.net",
    "hyves.nl",
    "ibibo.com",
    "video.ibm.com",
    "identi.ca",
    "imageshack.com",
    "imageshack.us",
    "forums.imore.com",
    "imvu.com",
    "insanejournal.com",
    "instagram.com",
    "l.instagram.com",
    "instapaper.com",
    "internations.org",
    "interpals.net",
    "intherooms.com",
    "irc-galleria.net",
    "is.gd",
    "italki.com",
    "jammerdirect.com",
    "jappy.com",
    "jappy.de",
    "kaboodle.com",
    "kakao.com",
    "kakaocorp.com",
    "kaneva.com",
    "last.fm",
    "librarything.com",
    "line.me",
    "linkedin.com",
    "copainsdavant.linternaute.com",
    "listal.com",
    "listography.com",
    "spaces.live.com",
    "livedoor.com",
    "livejournal.com",
    "lnkd.in",
    "mbga.jp",
    "medium.com",
    "meetin.org",
    "meetup.com",
    "meinvz.net",
    "meneame.net",
    "menuism.com",
    "l.messenger.com",
    "messenger.com",
    "mix.com",
    "mixi.jp",
    "mocospace.com",
    "mouthshut.com",
    "movabletype.com",
    "mubi.com",
    "myanimelist.net",
    "myheritage.com",
    "mylife.com",
    "mymodernmet.com",
    "myspace.com",
    "blog.naver.com",
    "cafe.naver.com",
    "kin.naver.com",
    "m.blog.naver.com",
    "m.cafe.naver.com",
    "m.kin.naver.com",
    "netvibes.com",
    "forums.nexopia.com",
    "ngopost.org",
    "nicovideo.jp",
    "nightlifelink.com",
    "ning.com",
    "odnoklassniki.ru",
    "odnoklassniki.ua",
    "okwave.jp",
    "oneworldgroup.org",
    "onstartups.com",
    "opendiary.com",
    "my.opera.com",
    "over-blog.com",
    "overblog.com",
    "paper.li",
    "partyflock.nl",
    "photobucket.com",
    "pinboard.in",
    "pingsta.com",
    "pinterest.at",
    "pinterest.ca",
    "pinterest.ch",
    "pinterest.cl",
    "pinterest.co.kr",
    "pinterest.co.uk",
    "ar.pinterest.com",
    "br.pinterest.com",
    "co.pinterest.com",
    "cz.pinterest.com",
    "hu.pinterest.com",
    "id.pinterest.com",
    "in.pinterest.com",
    "nl.pinterest.com",
    "pinterest.com",
    "pl.pinterest.com",
    "tr.pinterest.com",
    "za.pinterest.com",
    "pinterest.com.au",
    "pinterest.com.mx",
    "pinterest.de",
    "pinterest.es",
    "pinterest.fr",
    "pinterest.it",
    "pinterest.jp",
    "pinterest.nz",
    "pinterest.ph",
    "pinterest.pt",
    "pinterest.ru",
    "pinterest.se",
    "pixiv.net",
    "playahead.se",
    "plurk.com",
    "pocket.co",
    "posterous.com",
    "qapacity.com",
    "qzone.qq.com",
    "quechup.com",
    "quora.com",
    "ravelry.com",
    "amp.reddit.com",
    "old.reddit.com",
    "out.reddit.com",
    "reddit.com",
    "redux.com",
    "renren.com",
    "researchgate.net",
    "reunion.com",
    "reverbnation.com",
    "rtl.de",
    "ryze.com",
    "salespider.com",
    "scoop.it",
    "screenrant.com",
    "scribd.com",
    "scvngr.com",
    "secondlife.com",
    "serverfault.com",
    "sharethis.com",
    "shvoong.com",
    "web.skype.com",
    "skyrock.com",
    "slashdot.org",
    "slideshare.net",
    "smartnews.com",
    "snapchat.com",
    "sociallife.com.br",
    "socialvibe.com",
    "spoke.com",
    "spruz.com",
    "ssense.com",
    "stackapps.com",
    "stackexchange.com",
    "stackoverflow.com",
    "stardoll.com",
    "stickam.com",
    "studivz.net",
    "suomi24.fi",
    "superuser.com",
    "sweeva.com",
    "t.co",
    "t.me",
    "tagged.com",
    "taggedmail.com",
    "talkbiznow.com",
    "taringa.net",
    "techmeme.com",
    "tencent.com",
    "tiktok.com",
    "tinyurl.com",
    "toolbox.com",
    "travellerspoint.com",
    "tripadvisor.com",
    "trombi.com",
    "tudou.com",
    "tuenti.com",
    "tumblr.com",
    "tweetdeck.com",
    "twitter.com",
    "twoo.com",
    "typepad.com",
    "unblog.fr",
    "urbanspoon.com",
    "ushareit.com",
    "ushi.cn",
    "vampirefreaks.com",
    "vampirerave.com",
    "vg.no",
    "away.vk.com",
    "m.vk.com",
    "vk.com",
    "vkontakte.ru",
    "wakoopa.com",
    "wattpad.com",
    "forums.webosnation.com",
    "webshots.com",
    "wechat.com",
    "weebly.com",
    "weibo.com",
    "wer-weiss-was.de",
    "weread.com",
    "whatsapp.com",
    "wikihow.com",
    "wikitravel.org",
    "woot.com",
    "wordpress.com",
    "wordpress.org",
    "forums.wpcentral.com",
    "xanga.com",
    "xing.com",
    "yahoo-mbga.jp",
    "blog.yahoo.co.jp",
    "bookmarks.yahoo.co.jp",
    "chiebukuro.yahoo.co.jp",
    "messages.yahoo.co.jp",
    "answers.yahoo.com",
    "bookmarks.yahoo.com",
    "pulse.yahoo.com",
    "yammer.com",
    "news.ycombinator.com",
    "yelp.co.uk",
    "m.yelp.com",
    "yelp.com",
    "youroom.in",
    "chat.zalo.me",
    "zoo.gr",
    "zooppa.com",
];

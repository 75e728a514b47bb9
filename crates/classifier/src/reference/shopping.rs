/// `utm_source` values identifying a marketplace or storefront. Mixed case entries are intentional.
pub const UTM_SOURCES: &[&str] = &[
    "domain",
    "IGShopping",
    "alibaba",
    "amazon",
    "ebay",
    "etsy",
    "mercadolibre",
    "shopify",
    "Shopping",
    "shopzilla",
    "stripe",
    "walmart",
];

/// Marketplace and storefront referring hosts.
pub const REFERRING_DOMAINS: &[&str] = &[
    "alibaba.com",
    "m.alibaba.com",
    "message.alibaba.com",
    "offer.alibaba.com",
    "aax-us-east.amazon-adsystem.com",
    "aax.amazon-adsystem.com",
    "amazon.co.uk",
    "amazon.com",
    "ebay.co.uk",
    "ebay.com",
    "ebay.com.au",
    "ebay.de",
    "etsy.com",
    "mercadolibre.com",
    "mercadolibre.com.ar",
    "mercadolibre.com.mx",
    "cr.shopping.naver.com",
    "cr2.shopping.naver.com",
    "m.shopping.naver.com",
    "msearch.shopping.naver.com",
    "shopping.naver.com",
    "s3.amazonaws.com",
    "shop.app",
    "apps.shopify.com",
    "checkout.shopify.com",
    "partners.shopify.com",
    "shopify.com",
    "nl.shopping.net",
    "no.shopping.net",
    "se.shopping.net",
    "uk.shopping.net",
    "shopzilla.com",
    "simplycodes.com",
    "checkout.stripe.com",
    "stripe.com",
    "one.walmart.com",
    "walmart.com",
    "order.shopping.yahoo.co.jp",
    "shopping.yahoo.co.jp",
    "store.shopping.yahoo.co.jp",
    "shopping.yahoo.com",
];

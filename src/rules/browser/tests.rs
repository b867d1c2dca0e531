use crate::{Browser, Traits, detect, rule_names};

#[test]
fn browser_examples_matching() {
    // (browser, version, traits, ua)
    let cases: Vec<(Browser, &str, Traits, &str)> = vec![
        (Browser::MsnTv, "2.6", Traits::empty(), "Mozilla/4.0 WebTV/2.6 (compatible; MSIE 4.0)"),
        // Internet Explorer
        (Browser::InternetExplorer, "11.0", Traits::X64, "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko"),
        (Browser::InternetExplorer, "6.0", Traits::empty(), "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1)"),
        (Browser::InternetExplorer, "8.0", Traits::empty(), "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0; Trident/4.0)"),
        (Browser::InternetExplorer, "1.5", Traits::empty(), "Microsoft Internet Explorer (Windows 95; 0b1)"),
        (Browser::InternetExplorer, "1.0", Traits::empty(), "Microsoft Internet Explorer (Windows 3.1)"),
        (Browser::InternetExplorer, "4.40.426", Traits::empty(), "Microsoft Internet Explorer/4.40.426 (Windows 95)"),
        (
            Browser::InternetExplorerMobile,
            "10.0",
            Traits::MOBILE,
            "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; Trident/6.0; IEMobile/10.0; ARM; Touch; NOKIA; Lumia 920)",
        ),
        // Opera
        (Browser::Opera, "12.16", Traits::X64, "Opera/9.80 (Windows NT 6.1; WOW64) Presto/2.12.388 Version/12.16"),
        (Browser::Opera, "9.64", Traits::empty(), "Opera/9.64 (X11; Linux i686; U; en) Presto/2.1.1"),
        (Browser::Opera, "8.50", Traits::empty(), "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; en) Opera 8.50"),
        (
            Browser::Opera,
            "28.0.1750.51",
            Traits::X64,
            "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2272.118 Safari/537.36 OPR/28.0.1750.51",
        ),
        (Browser::OperaMini, "7.5.33361", Traits::MOBILE, "Opera/9.80 (Android; Opera Mini/7.5.33361/31.1448; U; en) Presto/2.8.119 Version/11.1010"),
        (
            Browser::OperaMobile,
            "11.50",
            Traits::MOBILE,
            "Opera/9.80 (Android 2.3.3; Linux; Opera Mobi/ADR-1111101157; U; es-ES) Presto/2.9.201 Version/11.50",
        ),
        // Chromium
        (
            Browser::Edge,
            "12.10240",
            Traits::X64,
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.10240",
        ),
        (
            Browser::Chrome,
            "41.0.2272.118",
            Traits::X64,
            "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2272.118 Safari/537.36",
        ),
        (
            Browser::Chrome,
            "41.0.2272.94",
            Traits::MOBILE,
            "Mozilla/5.0 (Linux; Android 4.4.2; Nexus 5 Build/KOT49H) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2272.94 Mobile Safari/537.36",
        ),
        // Mozilla-style desktop browsers
        (
            Browser::OmniWeb,
            "563.15",
            Traits::empty(),
            "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en-US) AppleWebKit/125.4 (KHTML, like Gecko, Safari) OmniWeb/v563.15",
        ),
        (Browser::ICab, "4.0", Traits::empty(), "iCab/4.0 (Macintosh; U; Intel Mac OS X)"),
        (Browser::NetPositive, "2.2.1", Traits::empty(), "Mozilla/3.0 (compatible; NetPositive/2.2.1; BeOS)"),
        (
            Browser::Netscape,
            "9.0",
            Traits::empty(),
            "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.8.1.8pre) Gecko/20071015 Firefox/2.0.0.7 Navigator/9.0",
        ),
        (Browser::Netscape, "4.04", Traits::empty(), "Mozilla/4.04 [en] (Win95; I)"),
        (Browser::Netscape, "3.04 Gold", Traits::empty(), "Mozilla/3.04Gold (WinNT; I)"),
        (Browser::Netscape, "4.7", Traits::empty(), "Mozilla/4.7-SGI [en] (X11; I; IRIX 6.5 IP32)"),
        (Browser::IceCat, "3.0.11-g1", Traits::empty(), "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.9.0.11) Gecko/2009061212 IceCat/3.0.11-g1"),
        (Browser::IceWeasel, "31.4.0", Traits::empty(), "Mozilla/5.0 (X11; Linux x86_64; rv:31.0) Gecko/20100101 Firefox/31.0 Iceweasel/31.4.0"),
        (Browser::Galeon, "1.3.7", Traits::empty(), "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.4) Gecko/20030703 Galeon/1.3.7"),
        (Browser::Firefox, "38.0", Traits::empty(), "Mozilla/5.0 (X11; Linux x86_64; rv:38.0) Gecko/20100101 Firefox/38.0"),
        (Browser::Konqueror, "4.5", Traits::empty(), "Mozilla/5.0 (compatible; Konqueror/4.5; Linux) KHTML/4.5.4 (like Gecko)"),
        (Browser::Lynx, "2.8.8dev.3", Traits::empty(), "Lynx/2.8.8dev.3 libwww-FM/2.14 SSL-MM/1.4.1"),
        (Browser::Amaya, "11.3.1", Traits::empty(), "amaya/11.3.1 libwww/5.4.1"),
        // Mobile
        (
            Browser::Android,
            "2.2",
            Traits::MOBILE,
            "Mozilla/5.0 (Linux; U; Android 2.2; en-us; Nexus One Build/FRF91) AppleWebKit/533.1 (KHTML, like Gecko) Version/4.0 Mobile Safari/533.1",
        ),
        (
            Browser::BlackBerry,
            "10.0.9.2372",
            Traits::MOBILE,
            "Mozilla/5.0 (BB10; Touch) AppleWebKit/537.10+ (KHTML, like Gecko) Version/10.0.9.2372 Mobile Safari/537.10+",
        ),
        (Browser::BlackBerry, "5.0.0.93", Traits::MOBILE, "BlackBerry9000/5.0.0.93 Profile/MIDP-2.0 Configuration/CLDC-1.1 VendorID/179"),
        (
            Browser::BlackBerryTabletOs,
            "2.1.0",
            Traits::MOBILE,
            "Mozilla/5.0 (PlayBook; U; RIM Tablet OS 2.1.0; en-US) AppleWebKit/536.2+ (KHTML like Gecko) Version/7.2.1.0 Safari/536.2+",
        ),
        (
            Browser::Nokia,
            "7.0",
            Traits::MOBILE,
            "Mozilla/5.0 (SymbianOS/9.4; Series60/5.0 Nokia5800d-1/52.50.2008.24; Profile/MIDP-2.1 Configuration/CLDC-1.1 ) AppleWebKit/525 (KHTML, like Gecko) Safari/525",
        ),
        (
            Browser::Nokia,
            "7.3.0",
            Traits::MOBILE,
            "Mozilla/5.0 (Symbian/3; Series60/5.2 NokiaN8-00/012.002; Profile/MIDP-2.1 Configuration/CLDC-1.1 ) AppleWebKit/533.4 (KHTML, like Gecko) NokiaBrowser/7.3.0 Mobile Safari/533.4 3gpp-gba",
        ),
        // Robots
        (Browser::Googlebot, "2.1", Traits::ROBOT, "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"),
        (Browser::Googlebot, "2.1", Traits::ROBOT.union(Traits::MOBILE), "Googlebot-Mobile/2.1"),
        (Browser::Bingbot, "2.0", Traits::ROBOT, "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)"),
        (Browser::MsnBot, "2.0b", Traits::ROBOT, "msnbot/2.0b (+http://search.msn.com/msnbot.htm)"),
        (Browser::Slurp, "unknown", Traits::ROBOT, "Mozilla/5.0 (compatible; Yahoo! Slurp; http://help.yahoo.com/help/us/ysearch/slurp)"),
        (Browser::YahooMultimedia, "3.x", Traits::ROBOT, "Yahoo-MMCrawler/3.x (mms dash mmcrawler support at yahoo dash inc dot com)"),
        (Browser::W3cValidator, "1.3", Traits::ROBOT, "W3C_Validator/1.3 http://validator.w3.org/services"),
        (Browser::W3cValidator, "CSS-2.3.0", Traits::ROBOT, "Jigsaw/2.3.0 W3C_CSS_Validator_JFouffa/2.0"),
        (Browser::W3cValidator, "Link-4.81", Traits::ROBOT, "W3C-checklink/4.81 libwww-perl/5.836"),
        // WebKit
        (
            Browser::Safari,
            "8.0.2",
            Traits::empty(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/600.2.5 (KHTML, like Gecko) Version/8.0.2 Safari/600.2.5",
        ),
        (Browser::Safari, "2.0", Traits::empty(), "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en) AppleWebKit/412 (KHTML, like Gecko) Safari/412"),
        (Browser::Safari, "2.0.4", Traits::empty(), "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en) AppleWebKit/419 (KHTML, like Gecko)"),
        (Browser::Safari, "unknown", Traits::empty(), "Mozilla/5.0 (Macintosh) AppleWebKit/537.36 (KHTML, like Gecko)"),
        // Deprecated names and the catch-all
        (Browser::Firebird, "0.7", Traits::empty(), "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.6) Gecko/20040113 MozillaFirebird/0.7"),
        (Browser::Phoenix, "0.3", Traits::empty(), "Mozilla/5.0 (Windows; U; Windows NT 5.0; en-US; rv:1.2b) Gecko/20021016 Phoenix/0.3"),
        (Browser::Mozilla, "1.7.12", Traits::empty(), "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.7.12) Gecko/20050915"),
        (Browser::Mozilla, "unknown", Traits::empty(), "Mozilla/5.0 (compatible; examplebot)"),
        (Browser::Unknown, "unknown", Traits::empty(), "curl/7.64.1"),
    ];

    for (browser, version, traits, ua) in cases {
        let d = detect(ua);
        assert_eq!(d.browser(), browser, "browser for {ua:?}");
        assert_eq!(d.version().as_str(), version, "version for {ua:?}");
        assert_eq!(d.traits(), traits, "traits for {ua:?}");
    }
}

#[test]
fn precedence_order() {
    assert_eq!(
        rule_names(),
        vec![
            "msn tv",
            "internet explorer",
            "opera",
            "edge",
            "chrome",
            "omniweb",
            "icab",
            "netpositive",
            "netscape",
            "icecat",
            "iceweasel",
            "galeon",
            "firefox",
            "konqueror",
            "lynx",
            "amaya",
            "android",
            "blackberry",
            "nokia",
            "googlebot",
            "bingbot",
            "msnbot",
            "yahoo! slurp",
            "yahoo! multimedia",
            "w3c validator",
            "safari",
            "firebird",
            "phoenix",
            "mozilla",
        ]
    );
}

#[test]
fn ie_compatibility_view() {
    let d = detect("Mozilla/5.0 (compatible; MSIE 7.0; Windows NT 6.1; Trident/5.0)");
    assert_eq!(d.version().as_str(), "9.0");
    let cv = d.compatibility_view().expect("compatibility view");
    assert_eq!(cv.browser, Browser::InternetExplorer);
    assert_eq!(cv.version.as_str(), "7.0");
}

#[test]
fn ie_compatibility_view_uses_lowest_msie_token() {
    let d = detect("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/6.0; MSIE 7.0)");
    assert_eq!(d.version().as_str(), "10.0");
    assert_eq!(d.compatibility_view().map(|cv| cv.version.as_str()), Some("7.0"));
}

#[test]
fn ie_without_compatibility_view() {
    // Trident and MSIE agree.
    assert!(!detect("Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)").is_in_ie_compatibility_view());
    // No MSIE token at all.
    assert!(!detect("Mozilla/5.0 (Windows NT 6.1; Trident/5.0)").is_in_ie_compatibility_view());
    // The rv: path never reports compatibility view.
    assert!(!detect("Mozilla/5.0 (Windows NT 6.3; Trident/7.0; MSIE 7.0; rv:11.0) like Gecko").is_in_ie_compatibility_view());
    // Only IE sets it.
    assert!(!detect("Mozilla/5.0 (X11; Linux x86_64; rv:38.0) Gecko/20100101 Firefox/38.0").is_in_ie_compatibility_view());
}

#[test]
fn legacy_msie_keeps_highest_token() {
    let d = detect("Mozilla/4.0 (compatible; MSIE 5.5; MSIE 6.0; Windows 98)");
    assert_eq!(d.version().as_str(), "6.0");
}

#[test]
fn pre_ie8_trident_falls_back_to_msie() {
    // Trident/3 maps below 8.0, so the MSIE token decides.
    let d = detect("Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; Trident/3.1)");
    assert_eq!(d.browser(), Browser::InternetExplorer);
    assert_eq!(d.version().as_str(), "7.0");
    assert_eq!(d.compatibility_view(), None);
}

#[test]
fn ie_rejects_other_vendors() {
    assert_eq!(detect("Mozilla/4.0 (compatible; MSIE 6.0; Windows CE; BlackBerry8100)").browser(), Browser::BlackBerry);
    assert_eq!(detect("Mozilla/4.0 (compatible; MSIE 5.0; Series60/2.8 Nokia6630/4.06.0 Profile/MIDP-2.0)").browser(), Browser::Nokia);
}

#[test]
fn firefox_with_safari_token_is_safari() {
    let d = detect("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/600.2.5 (KHTML, like Gecko) Firefox/35.0 Safari/600.2.5");
    assert_eq!(d.browser(), Browser::Safari);
}

#[test]
fn safari_version_sources_in_order() {
    // (version, ua): Version token beats both builds, Safari build beats WebKit build.
    let cases = [
        (
            "4.0.5",
            "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10_5_8; en-us) AppleWebKit/419 (KHTML, like Gecko) Version/4.0.5 Safari/419.3",
        ),
        ("1.1", "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en) AppleWebKit/100 (KHTML, like Gecko) Safari/100"),
        ("1.1.1", "Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en) AppleWebKit/100 (KHTML, like Gecko)"),
    ];
    for (version, ua) in cases {
        let d = detect(ua);
        assert_eq!(d.browser(), Browser::Safari, "{ua}");
        assert_eq!(d.version().as_str(), version, "{ua}");
    }
}

#[test]
fn netscape_ignores_gecko_and_v5() {
    // Mozilla/5.0 without rv: is never Netscape.
    assert_ne!(detect("Mozilla/5.0 (compatible; examplebot)").browser(), Browser::Netscape);
    // Gecko browsers without a product token fall through to Mozilla.
    assert_eq!(detect("Mozilla/4.0 (X11; rv:1.0)").browser(), Browser::Mozilla);
}

#[test]
fn omniweb_without_v_prefix() {
    let d = detect("Mozilla/5.0 (Macintosh; U; PPC Mac OS X; en-US) AppleWebKit/85 (KHTML, like Gecko) OmniWeb/563.15");
    assert_eq!(d.browser(), Browser::OmniWeb);
    assert_eq!(d.version().as_str(), "563.15");
}

#[test]
fn w3c_mobileok_prefix() {
    let d = detect("W3C-mobileOK/DDC-1.0 (see http://www.w3.org/2006/07/mobileok-ddc)");
    assert_eq!(d.browser(), Browser::W3cValidator);
    assert_eq!(d.version().as_str(), "mobileOK-DDC-1.0");
    assert!(d.is_robot());
}

#[test]
fn case_insensitive_tokens() {
    let d = detect("mozilla/5.0 (x11; linux x86_64) applewebkit/537.36 (khtml, like gecko) chrome/41.0.2272.118 safari/537.36");
    assert_eq!(d.browser(), Browser::Chrome);
    assert_eq!(d.version().as_str(), "41.0.2272.118");
}

#[test]
fn detection_is_deterministic() {
    let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 7_0 like Mac OS X) AppleWebKit/537.51.1 (KHTML, like Gecko) Version/7.0 Mobile/11A465 Safari/9537.53";
    let first = detect(ua);
    for _ in 0..3 {
        assert_eq!(detect(ua), first);
    }
    assert_eq!(first.browser(), Browser::Safari);
    assert_eq!(first.version().as_str(), "7.0");
    assert!(first.is_mobile());
}

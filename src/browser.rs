//! Browser tags.

use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;

/// A browser (or robot) the detector can identify.
///
/// Identity and display text are separate: match on the variant, show
/// [`Browser::display_name`]. Display names round-trip through `FromStr`.
///
/// ```
/// use uaclass::Browser;
///
/// assert_eq!(Browser::IceCat.display_name(), "GNU IceCat");
/// assert_eq!("Opera Mini".parse::<Browser>(), Ok(Browser::OperaMini));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[non_exhaustive]
pub enum Browser {
    #[strum(to_string = "Amaya")]
    Amaya,
    #[strum(to_string = "Android")]
    Android,
    #[strum(to_string = "Bingbot")]
    Bingbot,
    #[strum(to_string = "BlackBerry")]
    BlackBerry,
    #[strum(to_string = "BlackBerry Tablet OS")]
    BlackBerryTabletOs,
    #[strum(to_string = "Chrome")]
    Chrome,
    #[strum(to_string = "Edge")]
    Edge,
    #[strum(to_string = "Firebird")]
    Firebird,
    #[strum(to_string = "Firefox")]
    Firefox,
    #[strum(to_string = "Galeon")]
    Galeon,
    #[strum(to_string = "Googlebot")]
    Googlebot,
    #[strum(to_string = "iCab")]
    ICab,
    #[strum(to_string = "GNU IceCat")]
    IceCat,
    #[strum(to_string = "GNU IceWeasel")]
    IceWeasel,
    #[strum(to_string = "Internet Explorer")]
    InternetExplorer,
    #[strum(to_string = "Internet Explorer Mobile")]
    InternetExplorerMobile,
    #[strum(to_string = "Konqueror")]
    Konqueror,
    #[strum(to_string = "Lynx")]
    Lynx,
    #[strum(to_string = "Mozilla")]
    Mozilla,
    #[strum(to_string = "MSNBot")]
    MsnBot,
    #[strum(to_string = "MSN TV")]
    MsnTv,
    #[strum(to_string = "NetPositive")]
    NetPositive,
    #[strum(to_string = "Netscape")]
    Netscape,
    #[strum(to_string = "Nokia Browser")]
    Nokia,
    #[strum(to_string = "OmniWeb")]
    OmniWeb,
    #[strum(to_string = "Opera")]
    Opera,
    #[strum(to_string = "Opera Mini")]
    OperaMini,
    #[strum(to_string = "Opera Mobile")]
    OperaMobile,
    #[strum(to_string = "Phoenix")]
    Phoenix,
    #[strum(to_string = "Safari")]
    Safari,
    #[strum(to_string = "Yahoo! Slurp")]
    Slurp,
    #[strum(to_string = "W3C Validator")]
    W3cValidator,
    #[strum(to_string = "Yahoo! Multimedia")]
    YahooMultimedia,
    #[default]
    #[strum(to_string = "unknown")]
    Unknown,
}

impl Browser {
    /// Human-readable name, e.g. `"Internet Explorer"`.
    pub fn display_name(&self) -> &'static str {
        self.into()
    }

    /// Iterator over every tag, `Unknown` included.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl Serialize for Browser {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

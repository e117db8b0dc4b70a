//! VTEC phenomena

use std::fmt;

use strum::EnumMessage;

/// VTEC phenomenon code
///
/// Identifies the type of weather, flood, marine, or fire weather
/// occurrence, or a non-weather occurrence such as ashfall. Usually
/// constructed via [`Pvtec::phenomenon()`](crate::Pvtec::phenomenon).
///
/// ```
/// use nwscode::Phenomenon;
///
/// let phen: Phenomenon = "FL".parse().unwrap();
/// assert_eq!(Phenomenon::Flood, phen);
/// assert_eq!("FL", phen.as_code_str());
/// assert_eq!("Flood", phen.as_display_str());
/// assert_eq!("Flood", &format!("{}", phen));
/// assert_eq!("FL", &format!("{:#}", phen));
///
/// assert!("WP".parse::<Phenomenon>().is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Phenomenon {
    /// Ashfall
    #[strum(serialize = "AF", detailed_message = "Ashfall")]
    Ashfall,

    /// Air Stagnation
    #[strum(serialize = "AS", detailed_message = "Air Stagnation")]
    AirStagnation,

    /// Blowing Snow
    #[strum(serialize = "BS", detailed_message = "Blowing Snow")]
    BlowingSnow,

    /// Brisk Wind
    #[strum(serialize = "BW", detailed_message = "Brisk Wind")]
    BriskWind,

    /// Blizzard
    #[strum(serialize = "BZ", detailed_message = "Blizzard")]
    Blizzard,

    /// Coastal Flood
    #[strum(serialize = "CF", detailed_message = "Coastal Flood")]
    CoastalFlood,

    /// Dust Storm
    #[strum(serialize = "DS", detailed_message = "Dust Storm")]
    DustStorm,

    /// Blowing Dust
    #[strum(serialize = "DU", detailed_message = "Blowing Dust")]
    BlowingDust,

    /// Extreme Cold
    #[strum(serialize = "EC", detailed_message = "Extreme Cold")]
    ExtremeCold,

    /// Excessive Heat
    #[strum(serialize = "EH", detailed_message = "Excessive Heat")]
    ExcessiveHeat,

    /// Areal Flood
    #[strum(serialize = "FA", detailed_message = "Areal Flood")]
    ArealFlood,

    /// Flash Flood
    #[strum(serialize = "FF", detailed_message = "Flash Flood")]
    FlashFlood,

    /// Dense Fog
    #[strum(serialize = "FG", detailed_message = "Dense Fog")]
    DenseFog,

    /// Flood
    #[strum(serialize = "FL", detailed_message = "Flood")]
    Flood,

    /// Frost
    #[strum(serialize = "FR", detailed_message = "Frost")]
    Frost,

    /// Fire Weather
    #[strum(serialize = "FW", detailed_message = "Fire Weather")]
    FireWeather,

    /// Freeze
    #[strum(serialize = "FZ", detailed_message = "Freeze")]
    Freeze,

    /// Gale
    #[strum(serialize = "GL", detailed_message = "Gale")]
    Gale,

    /// Hurricane Force Wind
    #[strum(serialize = "HF", detailed_message = "Hurricane Force Wind")]
    HurricaneForceWind,

    /// Inland Hurricane
    #[strum(serialize = "HI", detailed_message = "Inland Hurricane")]
    InlandHurricane,

    /// Heavy Snow
    #[strum(serialize = "HS", detailed_message = "Heavy Snow")]
    HeavySnow,

    /// Heat
    #[strum(serialize = "HT", detailed_message = "Heat")]
    Heat,

    /// Hurricane
    #[strum(serialize = "HU", detailed_message = "Hurricane")]
    Hurricane,

    /// High Wind
    #[strum(serialize = "HW", detailed_message = "High Wind")]
    HighWind,

    /// Hydrologic
    #[strum(serialize = "HY", detailed_message = "Hydrologic")]
    Hydrologic,

    /// Hard Freeze
    #[strum(serialize = "HZ", detailed_message = "Hard Freeze")]
    HardFreeze,

    /// Sleet
    #[strum(serialize = "IP", detailed_message = "Sleet")]
    Sleet,

    /// Ice Storm
    #[strum(serialize = "IS", detailed_message = "Ice Storm")]
    IceStorm,

    /// Lake Effect Snow and Blowing Snow
    #[strum(serialize = "LB", detailed_message = "Lake Effect Snow and Blowing Snow")]
    LakeEffectSnowAndBlowingSnow,

    /// Lake Effect Snow
    #[strum(serialize = "LE", detailed_message = "Lake Effect Snow")]
    LakeEffectSnow,

    /// Low Water
    #[strum(serialize = "LO", detailed_message = "Low Water")]
    LowWater,

    /// Lakeshore Flood
    #[strum(serialize = "LS", detailed_message = "Lakeshore Flood")]
    LakeshoreFlood,

    /// Lake Wind
    #[strum(serialize = "LW", detailed_message = "Lake Wind")]
    LakeWind,

    /// Marine
    #[strum(serialize = "MA", detailed_message = "Marine")]
    Marine,

    /// Small Craft for Rough Bar
    #[strum(serialize = "RB", detailed_message = "Small Craft for Rough Bar")]
    SmallCraftForRoughBar,

    /// Snow and Blowing Snow
    #[strum(serialize = "SB", detailed_message = "Snow and Blowing Snow")]
    SnowAndBlowingSnow,

    /// Small Craft
    #[strum(serialize = "SC", detailed_message = "Small Craft")]
    SmallCraft,

    /// Hazardous Seas
    #[strum(serialize = "SE", detailed_message = "Hazardous Seas")]
    HazardousSeas,

    /// Small Craft for Winds
    #[strum(serialize = "SI", detailed_message = "Small Craft for Winds")]
    SmallCraftForWinds,

    /// Dense Smoke
    #[strum(serialize = "SM", detailed_message = "Dense Smoke")]
    DenseSmoke,

    /// Snow
    #[strum(serialize = "SN", detailed_message = "Snow")]
    Snow,

    /// Storm
    #[strum(serialize = "SR", detailed_message = "Storm")]
    Storm,

    /// High Surf
    #[strum(serialize = "SU", detailed_message = "High Surf")]
    HighSurf,

    /// Severe Thunderstorm
    #[strum(serialize = "SV", detailed_message = "Severe Thunderstorm")]
    SevereThunderstorm,

    /// Small Craft for Hazardous Seas
    #[strum(serialize = "SW", detailed_message = "Small Craft for Hazardous Seas")]
    SmallCraftForHazardousSeas,

    /// Inland Tropical Storm
    #[strum(serialize = "TI", detailed_message = "Inland Tropical Storm")]
    InlandTropicalStorm,

    /// Tornado
    #[strum(serialize = "TO", detailed_message = "Tornado")]
    Tornado,

    /// Tropical Storm
    #[strum(serialize = "TR", detailed_message = "Tropical Storm")]
    TropicalStorm,

    /// Tsunami
    #[strum(serialize = "TS", detailed_message = "Tsunami")]
    Tsunami,

    /// Typhoon
    #[strum(serialize = "TY", detailed_message = "Typhoon")]
    Typhoon,

    /// Ice Accretion
    #[strum(serialize = "UP", detailed_message = "Ice Accretion")]
    IceAccretion,

    /// Wind Chill
    #[strum(serialize = "WC", detailed_message = "Wind Chill")]
    WindChill,

    /// Wind
    #[strum(serialize = "WI", detailed_message = "Wind")]
    Wind,

    /// Winter Storm
    #[strum(serialize = "WS", detailed_message = "Winter Storm")]
    WinterStorm,

    /// Winter Weather
    #[strum(serialize = "WW", detailed_message = "Winter Weather")]
    WinterWeather,

    /// Freezing Fog
    #[strum(serialize = "ZF", detailed_message = "Freezing Fog")]
    FreezingFog,

    /// Freezing Rain
    #[strum(serialize = "ZR", detailed_message = "Freezing Rain")]
    FreezingRain,
}

impl Phenomenon {
    /// Human-readable string representation
    ///
    /// Converts to a human-readable string, like "`Flash Flood`."
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// VTEC string representation
    ///
    /// Returns the two-character VTEC code for this `Phenomenon`.
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl AsRef<str> for Phenomenon {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for Phenomenon {
    /// Printable string
    ///
    /// * The normal form is a human-readable string like "`Dense Fog`"
    /// * The alternate form is a two-character string like "`FG`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    #[test]
    fn test_phenomenon_completeness() {
        const REQUIRE_NUM_CODES: usize = 57;

        let mut code_set = HashSet::with_capacity(REQUIRE_NUM_CODES);
        let mut name_set = HashSet::with_capacity(REQUIRE_NUM_CODES);
        for phen in Phenomenon::iter() {
            // codes and names are unique
            assert!(code_set.insert(phen.as_code_str()));
            assert!(name_set.insert(phen.as_display_str()));

            // two uppercase letters
            assert_eq!(2, phen.as_code_str().len());
            assert!(phen.as_code_str().bytes().all(|b| b.is_ascii_uppercase()));

            // convert from code
            assert_eq!(phen, Phenomenon::from_str(phen.as_code_str()).unwrap());
        }

        assert_eq!(REQUIRE_NUM_CODES, code_set.len());
    }

    #[test]
    fn test_no_case_folding() {
        assert!(Phenomenon::from_str("fl").is_err());
        assert!(Phenomenon::from_str("FLX").is_err());
    }
}

//! Parsed sentence records and the tagged `Message` union delivered to the
//! listener. Every record starts from its `unset()` sentinel (all-ones)
//! when the sentence tag is recognised; fields corresponding to empty wire
//! fields keep that sentinel.
use crate::protocol::nmea::values::*;
use crate::protocol::nmea::MessageId;

/// Global Positioning System Fixed Data.
#[cfg(feature = "gga")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gga {
    pub utc_time: UtcTime,
    /// .4 format
    pub latitude: Decimal1616,
    /// `N` or `S`
    pub ns_indicator: u8,
    /// .4 format
    pub longitude: Decimal1616,
    /// `E` or `W`
    pub ew_indicator: u8,
    pub position_fix_indicator: i8,
    pub satellites_used: i8,
    /// .2 format
    pub hdop: Decimal88,
    /// .2 format
    pub msl_altitude: Decimal88,
    pub units: u8,
    /// .2 format
    pub geoid_separation: Decimal88,
    pub units2: u8,
    pub age_of_diff_corr: u16,
    pub diff_ref_station_id: u16,
}

#[cfg(feature = "gga")]
impl Gga {
    pub const fn unset() -> Self {
        Self {
            utc_time: UtcTime::unset(),
            latitude: decimal1616_unset(),
            ns_indicator: 0xff,
            longitude: decimal1616_unset(),
            ew_indicator: 0xff,
            position_fix_indicator: -1,
            satellites_used: -1,
            hdop: decimal88_unset(),
            msl_altitude: decimal88_unset(),
            units: 0xff,
            geoid_separation: decimal88_unset(),
            units2: 0xff,
            age_of_diff_corr: 0xffff,
            diff_ref_station_id: 0xffff,
        }
    }
}

/// Geographic Position - Latitude/Longitude.
#[cfg(feature = "gll")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gll {
    pub latitude: Decimal1616,
    pub ns_indicator: u8,
    pub longitude: Decimal1616,
    pub ew_indicator: u8,
    pub utc_time: UtcTime,
    /// `A` data valid, `V` data not valid
    pub status: u8,
    pub mode: u8,
}

#[cfg(feature = "gll")]
impl Gll {
    pub const fn unset() -> Self {
        Self {
            latitude: decimal1616_unset(),
            ns_indicator: 0xff,
            longitude: decimal1616_unset(),
            ew_indicator: 0xff,
            utc_time: UtcTime::unset(),
            status: 0xff,
            mode: 0xff,
        }
    }
}

/// GNSS DOP and Active Satellites.
#[cfg(feature = "gsa")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gsa {
    /// `M` manual, `A` automatic
    pub mode1: u8,
    pub mode2: i8,
    pub satellite_used: [i8; 12],
    pub pdop: Decimal88,
    pub hdop: Decimal88,
    pub vdop: Decimal88,
}

#[cfg(feature = "gsa")]
impl Gsa {
    pub const fn unset() -> Self {
        Self {
            mode1: 0xff,
            mode2: -1,
            satellite_used: [-1; 12],
            pdop: decimal88_unset(),
            hdop: decimal88_unset(),
            vdop: decimal88_unset(),
        }
    }
}

/// One satellite slot of a GSV sentence.
#[cfg(feature = "gsv")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SatelliteInView {
    pub satellite_id: i8,
    pub elevation: i8,
    pub azimuth: i16,
    pub snr: i8,
}

#[cfg(feature = "gsv")]
impl SatelliteInView {
    pub const fn unset() -> Self {
        Self {
            satellite_id: -1,
            elevation: -1,
            azimuth: -1,
            snr: -1,
        }
    }
}

/// GNSS Satellites in View. One sentence carries up to four satellites;
/// `message_number` counts the sentences of a group.
#[cfg(feature = "gsv")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gsv {
    pub number_of_messages: i8,
    pub message_number: i8,
    pub satellites_in_view: i8,
    pub satellites: [SatelliteInView; 4],
}

#[cfg(feature = "gsv")]
impl Gsv {
    pub const fn unset() -> Self {
        Self {
            number_of_messages: -1,
            message_number: -1,
            satellites_in_view: -1,
            satellites: [SatelliteInView::unset(); 4],
        }
    }
}

/// MSK Receiver Signal (beacon status).
#[cfg(feature = "mss")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mss {
    pub signal_strength: i8,
    pub signal_to_noise_ratio: i8,
    /// .2 format
    pub beacon_frequency: Decimal168,
    pub beacon_bit_rate: i8,
    pub channel_number: i8,
}

#[cfg(feature = "mss")]
impl Mss {
    pub const fn unset() -> Self {
        Self {
            signal_strength: -1,
            signal_to_noise_ratio: -1,
            beacon_frequency: decimal168_unset(),
            beacon_bit_rate: -1,
            channel_number: -1,
        }
    }
}

/// Recommended Minimum Specific GNSS Data.
#[cfg(feature = "rmc")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rmc {
    pub utc_time: UtcTime,
    /// `A` data valid, `V` data not valid
    pub status: u8,
    pub latitude: Decimal1616,
    pub ns_indicator: u8,
    pub longitude: Decimal1616,
    pub ew_indicator: u8,
    /// .2 format, knots
    pub speed_over_ground: Decimal168,
    /// .2 format, degrees
    pub course_over_ground: Decimal168,
    pub date: Date,
    /// .2 format
    pub magnetic_variation: Decimal168,
    pub ew_indicator2: u8,
    pub mode: u8,
}

#[cfg(feature = "rmc")]
impl Rmc {
    pub const fn unset() -> Self {
        Self {
            utc_time: UtcTime::unset(),
            status: 0xff,
            latitude: decimal1616_unset(),
            ns_indicator: 0xff,
            longitude: decimal1616_unset(),
            ew_indicator: 0xff,
            speed_over_ground: decimal168_unset(),
            course_over_ground: decimal168_unset(),
            date: Date::unset(),
            magnetic_variation: decimal168_unset(),
            ew_indicator2: 0xff,
            mode: 0xff,
        }
    }
}

/// Course Over Ground and Ground Speed.
#[cfg(feature = "vtg")]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vtg {
    /// .2 format
    pub course: Decimal168,
    pub reference: u8,
    /// .2 format
    pub course2: Decimal168,
    pub reference2: u8,
    /// .2 format
    pub speed: Decimal88,
    pub units: u8,
    /// .2 format
    pub speed2: Decimal88,
    pub units2: u8,
    pub mode: u8,
}

#[cfg(feature = "vtg")]
impl Vtg {
    pub const fn unset() -> Self {
        Self {
            course: decimal168_unset(),
            reference: 0xff,
            course2: decimal168_unset(),
            reference2: 0xff,
            speed: decimal88_unset(),
            units: 0xff,
            speed2: decimal88_unset(),
            units2: 0xff,
            mode: 0xff,
        }
    }
}

/// Time and Date.
#[cfg(feature = "zda")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Zda {
    pub utc_time: UtcTime,
    pub day: i8,
    pub month: i8,
    pub year: i16,
    pub local_zone_hour: i8,
    pub local_zone_minutes: i8,
}

#[cfg(feature = "zda")]
impl Zda {
    pub const fn unset() -> Self {
        Self {
            utc_time: UtcTime::unset(),
            day: -1,
            month: -1,
            year: -1,
            local_zone_hour: -1,
            local_zone_minutes: -1,
        }
    }
}

/// PSRF150 - OkToSend.
#[cfg(feature = "psrf150")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OkToSend {
    pub ok_to_send: i8,
}

#[cfg(feature = "psrf150")]
impl OkToSend {
    pub const fn unset() -> Self {
        Self { ok_to_send: -1 }
    }
}

/// PSRF151 - GPS Data and Extended Ephemeris Mask.
#[cfg(feature = "psrf151")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsDataEem {
    pub gps_time_valid_flag: u8,
    pub gps_week: u16,
    pub gps_tow: u16,
    pub eph_req_mask: u32,
}

#[cfg(feature = "psrf151")]
impl GpsDataEem {
    pub const fn unset() -> Self {
        Self {
            gps_time_valid_flag: 0xff,
            gps_week: 0xffff,
            gps_tow: 0xffff,
            eph_req_mask: 0xffff_ffff,
        }
    }
}

/// PSRF152 - Extended Ephemeris Integrity.
#[cfg(feature = "psrf152")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EeIntegrity {
    pub sat_pos_validity_flag: u32,
    pub sat_clk_validity_flag: u32,
    pub sat_health_flag: u32,
}

#[cfg(feature = "psrf152")]
impl EeIntegrity {
    pub const fn unset() -> Self {
        Self {
            sat_pos_validity_flag: 0xffff_ffff,
            sat_clk_validity_flag: 0xffff_ffff,
            sat_health_flag: 0xffff_ffff,
        }
    }
}

/// PSRF154 - Extended Ephemeris Acknowledgment.
#[cfg(feature = "psrf154")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EeAck {
    pub ack_id: i8,
}

#[cfg(feature = "psrf154")]
impl EeAck {
    pub const fn unset() -> Self {
        Self { ack_id: -1 }
    }
}

//==================================================================================MESSAGE

/// A completed sentence: message id plus exactly one record. Delivered to
/// the listener by shared reference; the reference is valid until the
/// parser starts the next sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    #[cfg(feature = "gga")]
    Gga(Gga),
    #[cfg(feature = "gll")]
    Gll(Gll),
    #[cfg(feature = "gsa")]
    Gsa(Gsa),
    #[cfg(feature = "gsv")]
    Gsv(Gsv),
    #[cfg(feature = "mss")]
    Mss(Mss),
    #[cfg(feature = "rmc")]
    Rmc(Rmc),
    #[cfg(feature = "vtg")]
    Vtg(Vtg),
    #[cfg(feature = "zda")]
    Zda(Zda),
    #[cfg(feature = "psrf150")]
    OkToSend(OkToSend),
    #[cfg(feature = "psrf151")]
    GpsDataEem(GpsDataEem),
    #[cfg(feature = "psrf152")]
    EeIntegrity(EeIntegrity),
    #[cfg(feature = "psrf154")]
    EeAck(EeAck),
}

impl Message {
    /// The wire-table id of the carried record.
    pub fn id(&self) -> MessageId {
        match *self {
            #[cfg(feature = "gga")]
            Message::Gga(_) => MessageId::Gga,
            #[cfg(feature = "gll")]
            Message::Gll(_) => MessageId::Gll,
            #[cfg(feature = "gsa")]
            Message::Gsa(_) => MessageId::Gsa,
            #[cfg(feature = "gsv")]
            Message::Gsv(_) => MessageId::Gsv,
            #[cfg(feature = "mss")]
            Message::Mss(_) => MessageId::Mss,
            #[cfg(feature = "rmc")]
            Message::Rmc(_) => MessageId::Rmc,
            #[cfg(feature = "vtg")]
            Message::Vtg(_) => MessageId::Vtg,
            #[cfg(feature = "zda")]
            Message::Zda(_) => MessageId::Zda,
            #[cfg(feature = "psrf150")]
            Message::OkToSend(_) => MessageId::Psrf150,
            #[cfg(feature = "psrf151")]
            Message::GpsDataEem(_) => MessageId::Psrf151,
            #[cfg(feature = "psrf152")]
            Message::EeIntegrity(_) => MessageId::Psrf152,
            #[cfg(feature = "psrf154")]
            Message::EeAck(_) => MessageId::Psrf154,
        }
    }
}

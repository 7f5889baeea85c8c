//! SiRF output message bodies. The framer hands completed payloads to a
//! body decoder; today the Geodetic Navigation Data body (message id 41) is
//! carried in full, and the enum keeps further ids additive.

/// Geodetic Navigation Data output.
pub const GEODETIC_NAVIGATION_DATA_ID: u8 = 41;
/// Set Binary Serial Port input.
pub const SET_BINARY_SERIAL_PORT_ID: u8 = 134;
/// Set Protocol input.
pub const SET_PROTOCOL_ID: u8 = 135;
/// Set Message Rate input.
pub const SET_MESSAGE_RATE_ID: u8 = 166;

/// Payload size of Geodetic Navigation Data including the id byte.
pub const GEODETIC_PAYLOAD_LEN: usize = 91;

/// Geodetic Navigation Data - Message ID 41. All multi-byte scalars are
/// big-endian on the wire and host order here. `nav_valid` and `nav_type`
/// are 16-bit flag words; the common flags have named accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeodeticNavigationData {
    pub nav_valid: u16,
    pub nav_type: u16,
    pub extended_week_number: u16,
    pub tow: u32,
    pub utc_year: u16,
    pub utc_month: u8,
    pub utc_day: u8,
    pub utc_hour: u8,
    pub utc_minute: u8,
    pub utc_second: u16,
    pub satellite_id_list: u32,
    /// degrees, scaled 1e-7
    pub latitude: i32,
    /// degrees, scaled 1e-7
    pub longitude: i32,
    pub altitude_from_ellipsoid: i32,
    pub altitude_from_msl: i32,
    pub map_datum: i8,
    pub speed_over_ground: u16,
    pub course_over_ground: u16,
    pub magnetic_variation: i16,
    pub climb_rate: i16,
    pub heading_rate: i16,
    pub estimated_horizontal_position_error: u32,
    pub estimated_vertical_position_error: u32,
    pub estimated_time_error: u32,
    pub estimated_horizontal_velocity_error: u16,
    pub clock_bias: i32,
    pub clock_bias_error: u32,
    pub clock_drift: i32,
    pub clock_drift_error: u32,
    pub distance: u32,
    pub distance_error: u16,
    pub heading_error: u16,
    pub svs_in_fix: u8,
    pub hdop: u8,
    pub additional_mode_info: u8,
}

impl GeodeticNavigationData {
    /// Decode from a complete payload (id byte at offset 0).
    pub(crate) fn from_payload(raw: &[u8; GEODETIC_PAYLOAD_LEN]) -> Self {
        Self {
            nav_valid: be_u16(raw, 1),
            nav_type: be_u16(raw, 3),
            extended_week_number: be_u16(raw, 5),
            tow: be_u32(raw, 7),
            utc_year: be_u16(raw, 11),
            utc_month: raw[13],
            utc_day: raw[14],
            utc_hour: raw[15],
            utc_minute: raw[16],
            utc_second: be_u16(raw, 17),
            satellite_id_list: be_u32(raw, 19),
            latitude: be_i32(raw, 23),
            longitude: be_i32(raw, 27),
            altitude_from_ellipsoid: be_i32(raw, 31),
            altitude_from_msl: be_i32(raw, 35),
            map_datum: raw[39] as i8,
            speed_over_ground: be_u16(raw, 40),
            course_over_ground: be_u16(raw, 42),
            magnetic_variation: be_i16(raw, 44),
            climb_rate: be_i16(raw, 46),
            heading_rate: be_i16(raw, 48),
            estimated_horizontal_position_error: be_u32(raw, 50),
            estimated_vertical_position_error: be_u32(raw, 54),
            estimated_time_error: be_u32(raw, 58),
            estimated_horizontal_velocity_error: be_u16(raw, 62),
            clock_bias: be_i32(raw, 64),
            clock_bias_error: be_u32(raw, 68),
            clock_drift: be_i32(raw, 72),
            clock_drift_error: be_u32(raw, 76),
            distance: be_u32(raw, 80),
            distance_error: be_u16(raw, 84),
            heading_error: be_u16(raw, 86),
            svs_in_fix: raw[88],
            hdop: raw[89],
            additional_mode_info: raw[90],
        }
    }

    /// The solution is not yet overdetermined (`nav_valid` bit 0).
    pub fn solution_not_yet_overdetermined(&self) -> bool {
        self.nav_valid & 0x0001 != 0
    }

    /// No tracking data is available (`nav_valid` bit 15).
    pub fn no_tracking_data_available(&self) -> bool {
        self.nav_valid & 0x8000 != 0
    }

    /// GPS position fix type (`nav_type` bits 8-10).
    pub fn gps_position_fix_type(&self) -> u8 {
        ((self.nav_type >> 8) & 0x07) as u8
    }

    /// DGPS corrections were applied (`nav_type` bit 15).
    pub fn dgps_corrections_applied(&self) -> bool {
        self.nav_type & 0x8000 != 0
    }
}

/// A decoded receiver output packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMessage {
    GeodeticNavigation(GeodeticNavigationData),
}

impl OutputMessage {
    /// SiRF message id of the carried body.
    pub fn id(&self) -> u8 {
        match self {
            OutputMessage::GeodeticNavigation(_) => GEODETIC_NAVIGATION_DATA_ID,
        }
    }
}

//==================================================================================BIG_ENDIAN_READS

fn be_u16(raw: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([raw[at], raw[at + 1]])
}

fn be_i16(raw: &[u8], at: usize) -> i16 {
    be_u16(raw, at) as i16
}

fn be_u32(raw: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]])
}

fn be_i32(raw: &[u8], at: usize) -> i32 {
    be_u32(raw, at) as i32
}
